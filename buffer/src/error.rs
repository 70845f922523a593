//! Error types for ring buffer operations.

use std::io;

use thiserror::Error;

/// Ring buffer operation error.
///
/// Every variant is local to the failing call: the buffer is left exactly as
/// it was before the call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BufferError {
    /// Construction was attempted with a zero capacity.
    #[error("buffer: invalid capacity")]
    InvalidCapacity,
    /// A write was attempted with an empty payload.
    #[error("buffer: invalid params")]
    InvalidInput,
    /// No writeable space is left.
    #[error("buffer: full")]
    Full,
    /// No readable bytes are held.
    #[error("buffer: empty")]
    Empty,
}

impl From<BufferError> for io::Error {
    fn from(err: BufferError) -> Self {
        let kind = match err {
            BufferError::InvalidCapacity | BufferError::InvalidInput => io::ErrorKind::InvalidInput,
            BufferError::Full | BufferError::Empty => io::ErrorKind::WouldBlock,
        };
        io::Error::new(kind, err)
    }
}
