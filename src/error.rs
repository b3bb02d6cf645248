//! Error types for the ring30 library.

use thiserror::Error;

/// Errors produced by the ring30 library.
///
/// Sampling from a generator can only fail with [`InvalidBound`](Self::InvalidBound);
/// the remaining variants come from state restore and size parsing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Ring30Error {
    /// Bounded integer requested with a non-positive upper bound.
    #[error("Invalid bound {0}: upper bound must be positive")]
    InvalidBound(i64),
    /// Raw state snapshot has the wrong number of bytes.
    #[error("State snapshot must be 32 bytes, got {0}")]
    InvalidStateLength(usize),
    /// Restored word cursor lies outside the generation.
    #[error("Word cursor {0} is outside the range [0, 4]")]
    InvalidCursor(usize),
    /// Byte-count literal could not be parsed.
    #[error("Invalid size literal: {0:?}")]
    InvalidSize(String),
}
