//! Block representation helpers.

/// Size of an AES block in bytes.
pub const BLOCK_SIZE: usize = 16;

/// AES block of 16 bytes, laid out column-major as a 4x4 state.
pub type Block = [u8; BLOCK_SIZE];

/// Offset of the state byte at `row`, `col` within a [`Block`].
#[inline]
pub const fn state_index(row: usize, col: usize) -> usize {
    4 * col + row
}

/// XORs two blocks, writing the result into `dst`.
#[inline]
pub fn xor_in_place(dst: &mut Block, rhs: &Block) {
    for (d, r) in dst.iter_mut().zip(rhs.iter()) {
        *d ^= *r;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn state_index_is_column_major() {
        assert_eq!(state_index(0, 0), 0);
        assert_eq!(state_index(1, 0), 1);
        assert_eq!(state_index(0, 1), 4);
        assert_eq!(state_index(3, 3), 15);
    }

    #[test]
    fn xor_twice_restores_block() {
        let original: Block = core::array::from_fn(|i| i as u8);
        let mask: Block = [0xa5; 16];
        let mut block = original;
        xor_in_place(&mut block, &mask);
        assert_ne!(block, original);
        xor_in_place(&mut block, &mask);
        assert_eq!(block, original);
    }
}
