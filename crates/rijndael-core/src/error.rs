//! Crate-wide error and result types.

use core::fmt;

use thiserror::Error;

/// Result alias used throughout the crate.
pub type Result<T> = core::result::Result<T, Error>;

/// Which argument of a checked operation was malformed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputKind {
    /// A plaintext or ciphertext block.
    Block,
    /// A cipher key.
    Key,
}

impl fmt::Display for InputKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputKind::Block => f.write_str("block"),
            InputKind::Key => f.write_str("key"),
        }
    }
}

/// All errors the crate can produce.
///
/// Errors are raised before the key is expanded or any state is touched, so
/// a failed call never yields partial output.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum Error {
    /// A block or key argument was not exactly the required length.
    #[error("invalid {input} length: expected {expected} bytes, got {actual}")]
    InvalidInputLength {
        /// The argument that was rejected.
        input: InputKind,
        /// Required length in bytes.
        expected: usize,
        /// Length that was supplied.
        actual: usize,
    },
}

/// Copies `bytes` into a fixed-size array, rejecting any other length.
pub(crate) fn fixed<const N: usize>(bytes: &[u8], input: InputKind) -> Result<[u8; N]> {
    bytes.try_into().map_err(|_| Error::InvalidInputLength {
        input,
        expected: N,
        actual: bytes.len(),
    })
}
