//! The boundary to per-protocol value codecs.

use crate::ValueError;
use bytes::Bytes;

/// Converts one protocol's values between textual and binary form.
///
/// Implementations live with the address layer on top of this crate; the
/// registry only stores a reference on each descriptor and hands it back on
/// lookup, never invoking it itself. `Send + Sync` is required because
/// descriptors cross threads together with the registry that holds them.
pub trait Transcoder: Send + Sync {
    /// Encodes the textual form of a value (`"1.2.3.4"`, `"80"`) to its
    /// binary wire form.
    ///
    /// # Errors
    ///
    /// Returns a [`ValueError`] if `value` is not valid for this protocol.
    fn encode_value(&self, value: &str) -> Result<Bytes, ValueError>;

    /// Decodes the binary wire form of a value back to text.
    ///
    /// # Errors
    ///
    /// Returns a [`ValueError`] if `bytes` is not valid for this protocol.
    fn decode_value(&self, bytes: &[u8]) -> Result<String, ValueError>;
}
