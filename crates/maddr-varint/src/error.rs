//! Varint decoding error types.

use thiserror::Error;

/// Errors that can occur while decoding a varint.
///
/// Both conditions are recoverable; decoding never panics, since the input
/// is typically read straight off the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// The buffer ended before a byte without the continuation bit.
    #[error("buffer ended before the varint terminated")]
    UnexpectedEnd,

    /// The encoded magnitude does not fit in 64 unsigned bits.
    #[error("varint overflows 64 bits")]
    Overflow,
}
