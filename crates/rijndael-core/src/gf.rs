//! Byte arithmetic over GF(2^8) modulo x^8 + x^4 + x^3 + x + 1.

/// Low byte of the reducing polynomial.
const REDUCTION: u8 = 0x1b;

/// Multiplies `byte` by `x` (i.e. 0x02), reducing on overflow.
#[inline]
pub fn xtime(byte: u8) -> u8 {
    let shifted = byte << 1;
    if byte & 0x80 != 0 {
        shifted ^ REDUCTION
    } else {
        shifted
    }
}

/// General multiplication of two field elements.
pub fn gmul(mut a: u8, mut b: u8) -> u8 {
    let mut product = 0u8;
    for _ in 0..8 {
        if b & 1 != 0 {
            product ^= a;
        }
        let hi_bit_set = a & 0x80;
        a <<= 1;
        if hi_bit_set != 0 {
            a ^= REDUCTION;
        }
        b >>= 1;
    }
    product
}

/// Multiplies by 0x02.
#[inline]
pub fn mul2(byte: u8) -> u8 {
    xtime(byte)
}

/// Multiplies by 0x03.
#[inline]
pub fn mul3(byte: u8) -> u8 {
    xtime(byte) ^ byte
}

// The inverse-mixing multipliers are built from chained `xtime` calls so that
// every doubling is reduced on its own.

/// Multiplies by 0x09.
#[inline]
pub fn mul9(byte: u8) -> u8 {
    let x8 = xtime(xtime(xtime(byte)));
    x8 ^ byte
}

/// Multiplies by 0x0b.
#[inline]
pub fn mul11(byte: u8) -> u8 {
    let x2 = xtime(byte);
    let x8 = xtime(xtime(x2));
    x8 ^ x2 ^ byte
}

/// Multiplies by 0x0d.
#[inline]
pub fn mul13(byte: u8) -> u8 {
    let x4 = xtime(xtime(byte));
    let x8 = xtime(x4);
    x8 ^ x4 ^ byte
}

/// Multiplies by 0x0e.
#[inline]
pub fn mul14(byte: u8) -> u8 {
    let x2 = xtime(byte);
    let x4 = xtime(x2);
    let x8 = xtime(x4);
    x8 ^ x4 ^ x2
}
