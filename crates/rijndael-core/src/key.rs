//! Key types for AES-128.

use core::fmt;

use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::block::{Block, BLOCK_SIZE};
use crate::error::{fixed, Error, InputKind};

/// Size of an AES-128 cipher key in bytes.
pub const KEY_SIZE: usize = 16;

/// Number of round keys produced by the AES-128 key schedule.
pub(crate) const ROUND_KEYS: usize = 11;

/// Size of the expanded key in bytes.
pub const EXPANDED_KEY_SIZE: usize = ROUND_KEYS * BLOCK_SIZE;

/// AES-128 key wrapper. Wiped on drop.
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct Aes128Key(pub [u8; KEY_SIZE]);

impl Aes128Key {
    /// Raw key bytes.
    #[inline]
    pub fn as_bytes(&self) -> &[u8; KEY_SIZE] {
        &self.0
    }
}

impl From<[u8; KEY_SIZE]> for Aes128Key {
    fn from(value: [u8; KEY_SIZE]) -> Self {
        Self(value)
    }
}

impl TryFrom<&[u8]> for Aes128Key {
    type Error = Error;

    fn try_from(value: &[u8]) -> Result<Self, Self::Error> {
        fixed(value, InputKind::Key).map(Self)
    }
}

impl fmt::Debug for Aes128Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Aes128Key(..)")
    }
}

/// Expanded round keys for AES-128: eleven contiguous 16-byte round keys.
///
/// Round key 0 is the cipher key itself and round key 10 is the final
/// whitening key. Wiped on drop.
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct ExpandedKey(pub(crate) [Block; ROUND_KEYS]);

impl ExpandedKey {
    /// Returns the round key at the requested index (0..=10).
    ///
    /// # Panics
    ///
    /// Panics if `round > 10`.
    #[inline]
    pub fn round_key(&self, round: usize) -> &Block {
        &self.0[round]
    }

    /// All 176 bytes in round order.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_flattened()
    }

    /// Copies the expanded key into a fixed-size array.
    pub fn to_bytes(&self) -> [u8; EXPANDED_KEY_SIZE] {
        let mut out = [0u8; EXPANDED_KEY_SIZE];
        for (chunk, round_key) in out.chunks_exact_mut(BLOCK_SIZE).zip(self.0.iter()) {
            chunk.copy_from_slice(round_key);
        }
        out
    }
}

impl fmt::Debug for ExpandedKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ExpandedKey(..)")
    }
}
