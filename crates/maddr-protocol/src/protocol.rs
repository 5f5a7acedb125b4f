//! Protocol descriptors.

use crate::Transcoder;
use bytes::Bytes;
use std::fmt;
use std::sync::Arc;

/// The payload shape of a protocol's values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PayloadSize {
    /// The payload is exactly this many bits. Zero means the protocol
    /// carries no payload at all.
    Fixed(u32),
    /// The payload is preceded by its own varint-encoded byte length.
    LengthPrefixed,
}

/// One kind of address segment: a registered protocol.
///
/// Descriptors are immutable once constructed. In particular the binary tag
/// is derived from the code inside the constructor and kept private, so it
/// can never be supplied by a caller or drift from the code it encodes.
#[derive(Clone)]
pub struct Protocol {
    code: u64,
    name: String,
    size: PayloadSize,
    path: bool,
    tag: Bytes,
    transcoder: Option<Arc<dyn Transcoder>>,
}

impl Protocol {
    /// Creates a descriptor for an ordinary protocol, whose textual value
    /// ends at the next segment delimiter.
    #[must_use]
    pub fn new(code: u64, name: impl Into<String>, size: PayloadSize) -> Self {
        Self {
            code,
            name: name.into(),
            size,
            path: false,
            tag: Bytes::from(maddr_varint::encode(code)),
            transcoder: None,
        }
    }

    /// Creates a descriptor for a path protocol, whose textual value
    /// consumes the entire remainder of the address, delimiters included.
    #[must_use]
    pub fn path_protocol(code: u64, name: impl Into<String>, size: PayloadSize) -> Self {
        Self {
            path: true,
            ..Self::new(code, name, size)
        }
    }

    /// Attaches the value transcoder for this protocol.
    #[must_use]
    pub fn with_transcoder(mut self, transcoder: Arc<dyn Transcoder>) -> Self {
        self.transcoder = Some(transcoder);
        self
    }

    /// The protocol's globally unique numeric code.
    #[must_use]
    pub fn code(&self) -> u64 {
        self.code
    }

    /// The protocol's globally unique textual name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The payload shape of the protocol's values.
    #[must_use]
    pub fn size(&self) -> PayloadSize {
        self.size
    }

    /// Whether the textual value consumes the entire remainder of the
    /// address rather than ending at the next delimiter.
    #[must_use]
    pub fn is_path(&self) -> bool {
        self.path
    }

    /// The varint encoding of the code, as written into an address's
    /// binary form.
    #[must_use]
    pub fn binary_tag(&self) -> &Bytes {
        &self.tag
    }

    /// The value codec for this protocol, if one is attached.
    ///
    /// `None` is normal for protocols that carry no payload.
    #[must_use]
    pub fn transcoder(&self) -> Option<Arc<dyn Transcoder>> {
        self.transcoder.clone()
    }
}

// Trait objects are not comparable, so equality covers the descriptor
// fields and ignores the transcoder reference.
impl PartialEq for Protocol {
    fn eq(&self, other: &Self) -> bool {
        self.code == other.code
            && self.name == other.name
            && self.size == other.size
            && self.path == other.path
    }
}

impl Eq for Protocol {}

impl fmt::Debug for Protocol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Protocol")
            .field("code", &self.code)
            .field("name", &self.name)
            .field("size", &self.size)
            .field("path", &self.path)
            .field("tag", &self.tag)
            .field("transcoder", &self.transcoder.is_some())
            .finish()
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Property: the precomputed tag always matches the varint
        /// encoding of the code.
        #[test]
        fn prop_tag_matches_code(code in any::<u64>()) {
            let protocol = Protocol::new(code, "x", PayloadSize::Fixed(0));
            let expected = maddr_varint::encode(code);
            prop_assert_eq!(protocol.binary_tag().as_ref(), expected.as_slice());
        }
    }
}
