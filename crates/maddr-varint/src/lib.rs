//! # Maddr Varint
//!
//! Unsigned variable-length integer encoding for the maddr address format.
//!
//! Protocol codes travel on the wire as unsigned LEB128 varints: seven
//! payload bits per byte, least significant group first, with the high bit
//! of every byte but the last marking continuation. Small codes take a
//! single byte; the largest `u64` takes [`MAX_LEN`] bytes.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod error;

pub use error::DecodeError;

/// A specialized Result type for varint decoding.
pub type Result<T> = std::result::Result<T, DecodeError>;

/// The longest encoding of any `u64`: nine continuation bytes plus a final
/// byte carrying the top bit.
pub const MAX_LEN: usize = 10;

/// Encodes `value` as a minimal-length varint.
///
/// The returned buffer is between 1 and [`MAX_LEN`] bytes long; no padding
/// bytes are ever emitted.
#[must_use]
pub fn encode(mut value: u64) -> Vec<u8> {
    let mut buf = Vec::with_capacity(encoded_len(value));
    loop {
        let byte = (value & 0x7f) as u8;
        value >>= 7;
        if value == 0 {
            buf.push(byte);
            return buf;
        }
        buf.push(byte | 0x80);
    }
}

/// Returns the number of bytes [`encode`] produces for `value`.
#[must_use]
pub fn encoded_len(value: u64) -> usize {
    // Seven payload bits per byte; zero still occupies one byte.
    let bits = 64 - value.leading_zeros() as usize;
    bits.div_ceil(7).max(1)
}

/// Decodes a single varint from the front of `buf`.
///
/// Returns the decoded value and the number of bytes consumed; bytes
/// beyond the first varint are left untouched. The decoder is liberal
/// about non-minimal encodings, matching the format's existing
/// deployments.
///
/// # Errors
///
/// Returns [`DecodeError::UnexpectedEnd`] if `buf` ends before a byte
/// without the continuation bit, and [`DecodeError::Overflow`] if the
/// encoded magnitude needs more than 64 bits.
pub fn decode(buf: &[u8]) -> Result<(u64, usize)> {
    let mut value: u64 = 0;
    for (i, &byte) in buf.iter().enumerate() {
        if i == MAX_LEN - 1 && byte > 1 {
            // A tenth byte can only carry the top bit of a u64.
            return Err(DecodeError::Overflow);
        }
        value |= u64::from(byte & 0x7f) << (7 * i);
        if byte & 0x80 == 0 {
            return Ok((value, i + 1));
        }
    }
    Err(DecodeError::UnexpectedEnd)
}
