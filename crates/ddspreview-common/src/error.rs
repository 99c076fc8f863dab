//! Error types for ddspreview-common.

use thiserror::Error;

/// Common error type for stream reading.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// End of stream reached while reading.
    #[error("unexpected end of stream at offset {offset}: needed {needed} bytes but only {available} available")]
    UnexpectedEof {
        offset: usize,
        needed: usize,
        available: usize,
    },

    /// Invalid magic bytes encountered.
    #[error("invalid magic: expected {expected:?}, got {actual:?}")]
    InvalidMagic { expected: Vec<u8>, actual: Vec<u8> },
}

impl Error {
    /// Whether this error was caused by running out of input.
    pub fn is_eof(&self) -> bool {
        matches!(self, Error::UnexpectedEof { .. })
    }
}

/// Result type alias using the common Error type.
pub type Result<T> = std::result::Result<T, Error>;
