//! AES-128 single-block primitive following FIPS-197.
//!
//! This crate provides:
//! - The fixed S-box, inverse S-box and round-constant tables.
//! - GF(2^8) byte arithmetic used by column mixing.
//! - The AES-128 key schedule (11 round keys, 176 bytes).
//! - Single-block encryption and decryption, both through checked slice
//!   entry points and through fixed-size typed ones.
//!
//! Modes of operation, padding and multi-block processing belong to the
//! caller. The implementation is table based and is not constant-time; it
//! should not be treated as side-channel hardened.
//!
//! ```
//! use rijndael_core::{decrypt_block, encrypt_block, Error};
//!
//! let key: [u8; 16] = core::array::from_fn(|i| i as u8);
//! let plaintext = *b"single AES block";
//! let ct = encrypt_block(&plaintext, &key)?;
//! assert_eq!(decrypt_block(&ct, &key)?, plaintext);
//! assert!(encrypt_block(&plaintext[..8], &key).is_err());
//! # Ok::<(), Error>(())
//! ```

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod block;
mod cipher;
mod error;
mod gf;
mod key;
mod round;
mod schedule;
mod tables;

pub use crate::block::{state_index, xor_in_place, Block, BLOCK_SIZE};
pub use crate::cipher::{
    decrypt_block, decrypt_block_with, encrypt_block, encrypt_block_with, Aes128, ROUNDS,
};
pub use crate::error::{Error, InputKind, Result};
pub use crate::gf::{gmul, mul11, mul13, mul14, mul2, mul3, mul9, xtime};
pub use crate::key::{Aes128Key, ExpandedKey, EXPANDED_KEY_SIZE, KEY_SIZE};
pub use crate::round::{
    add_round_key, inv_mix_columns, inv_shift_rows, inv_sub_bytes, mix_columns, shift_rows,
    sub_bytes,
};
pub use crate::schedule::expand_key;
pub use crate::tables::{inv_sbox, rcon, sbox};
