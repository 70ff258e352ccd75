//! AES-128 block encryption and decryption.

use crate::block::Block;
use crate::error::{fixed, InputKind, Result};
use crate::key::{Aes128Key, ExpandedKey};
use crate::round::{
    add_round_key, inv_mix_columns, inv_shift_rows, inv_sub_bytes, mix_columns, shift_rows,
    sub_bytes,
};
use crate::schedule::expand_key;

/// Number of rounds for a 128-bit key.
pub const ROUNDS: usize = 10;

/// Encrypts a single 16-byte block with pre-expanded round keys.
pub fn encrypt_block_with(block: &Block, round_keys: &ExpandedKey) -> Block {
    let mut state = *block;

    add_round_key(&mut state, round_keys.round_key(0));

    for round in 1..ROUNDS {
        sub_bytes(&mut state);
        shift_rows(&mut state);
        mix_columns(&mut state);
        add_round_key(&mut state, round_keys.round_key(round));
    }

    sub_bytes(&mut state);
    shift_rows(&mut state);
    add_round_key(&mut state, round_keys.round_key(ROUNDS));

    state
}

/// Decrypts a single 16-byte block with pre-expanded round keys.
pub fn decrypt_block_with(block: &Block, round_keys: &ExpandedKey) -> Block {
    let mut state = *block;

    add_round_key(&mut state, round_keys.round_key(ROUNDS));
    for round in (1..ROUNDS).rev() {
        inv_shift_rows(&mut state);
        inv_sub_bytes(&mut state);
        add_round_key(&mut state, round_keys.round_key(round));
        inv_mix_columns(&mut state);
    }
    inv_shift_rows(&mut state);
    inv_sub_bytes(&mut state);
    add_round_key(&mut state, round_keys.round_key(0));

    state
}

fn checked_inputs(block: &[u8], key: &[u8]) -> Result<(Block, Aes128Key)> {
    let block = fixed(block, InputKind::Block)?;
    let key = Aes128Key::try_from(key)?;
    Ok((block, key))
}

/// Encrypts one block under a raw key.
///
/// Fails with [`Error::InvalidInputLength`](crate::Error::InvalidInputLength)
/// when either argument is not exactly 16 bytes; nothing is expanded or
/// transformed in that case.
pub fn encrypt_block(plaintext: &[u8], key: &[u8]) -> Result<Block> {
    let (block, key) = checked_inputs(plaintext, key)?;
    Ok(encrypt_block_with(&block, &expand_key(&key)))
}

/// Decrypts one block under a raw key.
///
/// Fails with [`Error::InvalidInputLength`](crate::Error::InvalidInputLength)
/// when either argument is not exactly 16 bytes.
pub fn decrypt_block(ciphertext: &[u8], key: &[u8]) -> Result<Block> {
    let (block, key) = checked_inputs(ciphertext, key)?;
    Ok(decrypt_block_with(&block, &expand_key(&key)))
}

/// AES-128 cipher with its key schedule expanded once up front.
///
/// Useful to a mode-of-operation layer that processes many blocks under the
/// same key.
#[derive(Clone, Debug)]
pub struct Aes128 {
    round_keys: ExpandedKey,
}

impl Aes128 {
    /// Expands `key` and returns a ready cipher.
    pub fn new(key: &Aes128Key) -> Self {
        Self {
            round_keys: expand_key(key),
        }
    }

    /// Builds a cipher from a raw key slice, which must be 16 bytes.
    pub fn from_slice(key: &[u8]) -> Result<Self> {
        let key = Aes128Key::try_from(key)?;
        Ok(Self::new(&key))
    }

    /// The expanded round keys.
    pub fn round_keys(&self) -> &ExpandedKey {
        &self.round_keys
    }

    /// Encrypts one block.
    pub fn encrypt(&self, block: &Block) -> Block {
        encrypt_block_with(block, &self.round_keys)
    }

    /// Decrypts one block.
    pub fn decrypt(&self, block: &Block) -> Block {
        decrypt_block_with(block, &self.round_keys)
    }

    /// Encrypts one block in place.
    pub fn encrypt_in_place(&self, block: &mut Block) {
        *block = self.encrypt(block);
    }

    /// Decrypts one block in place.
    pub fn decrypt_in_place(&self, block: &mut Block) {
        *block = self.decrypt(block);
    }
}

impl From<&Aes128Key> for Aes128 {
    fn from(key: &Aes128Key) -> Self {
        Self::new(key)
    }
}
