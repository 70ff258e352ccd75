//! AES round transformations.
//!
//! Every transform works in place on a column-major [`Block`]: the byte at
//! offset `4 * col + row` holds row `row` of column `col`.

use crate::block::{state_index, xor_in_place, Block};
use crate::gf::{mul11, mul13, mul14, mul2, mul3, mul9};
use crate::tables::{inv_sbox, sbox};

/// Applies SubBytes to the state in place.
#[inline]
pub fn sub_bytes(state: &mut Block) {
    for byte in state.iter_mut() {
        *byte = sbox(*byte);
    }
}

/// Applies the inverse SubBytes transformation.
#[inline]
pub fn inv_sub_bytes(state: &mut Block) {
    for byte in state.iter_mut() {
        *byte = inv_sbox(*byte);
    }
}

/// Performs ShiftRows in place: row `r` rotates left by `r` columns.
#[inline]
pub fn shift_rows(state: &mut Block) {
    let src = *state;
    for row in 1..4 {
        for col in 0..4 {
            state[state_index(row, col)] = src[state_index(row, (col + row) % 4)];
        }
    }
}

/// Performs the inverse of ShiftRows in place: row `r` rotates right by `r`.
#[inline]
pub fn inv_shift_rows(state: &mut Block) {
    let src = *state;
    for row in 1..4 {
        for col in 0..4 {
            state[state_index(row, (col + row) % 4)] = src[state_index(row, col)];
        }
    }
}

fn mix_single_column(col: &mut [u8]) {
    let [a0, a1, a2, a3] = [col[0], col[1], col[2], col[3]];
    col[0] = mul2(a0) ^ mul3(a1) ^ a2 ^ a3;
    col[1] = a0 ^ mul2(a1) ^ mul3(a2) ^ a3;
    col[2] = a0 ^ a1 ^ mul2(a2) ^ mul3(a3);
    col[3] = mul3(a0) ^ a1 ^ a2 ^ mul2(a3);
}

fn inv_mix_single_column(col: &mut [u8]) {
    let [a0, a1, a2, a3] = [col[0], col[1], col[2], col[3]];
    col[0] = mul14(a0) ^ mul11(a1) ^ mul13(a2) ^ mul9(a3);
    col[1] = mul9(a0) ^ mul14(a1) ^ mul11(a2) ^ mul13(a3);
    col[2] = mul13(a0) ^ mul9(a1) ^ mul14(a2) ^ mul11(a3);
    col[3] = mul11(a0) ^ mul13(a1) ^ mul9(a2) ^ mul14(a3);
}

/// MixColumns over all four columns.
#[inline]
pub fn mix_columns(state: &mut Block) {
    for column in state.chunks_exact_mut(4) {
        mix_single_column(column);
    }
}

/// Inverse MixColumns over all four columns.
#[inline]
pub fn inv_mix_columns(state: &mut Block) {
    for column in state.chunks_exact_mut(4) {
        inv_mix_single_column(column);
    }
}

/// Adds (XORs) a round key into the state. Its own inverse.
#[inline]
pub fn add_round_key(state: &mut Block, round_key: &Block) {
    xor_in_place(state, round_key);
}
