//! # Maddr Protocol
//!
//! Protocol registry for the maddr self-describing address format.
//!
//! A maddr address is a sequence of tagged protocol/value segments, such as
//! `/ip4/1.2.3.4/tcp/80`. This crate holds the authoritative set of
//! [`Protocol`] descriptors behind that format: each records its numeric
//! code, textual name, payload shape, and an optional reference to the
//! transcoder an address layer invokes for its values. Codes travel on the
//! wire as unsigned varints; the codec is re-exported as [`varint`].
//!
//! The [`Registry`] is explicit state, not a process-wide singleton:
//! construct one (seeded with the built-in table or empty), share it, and
//! extend it at runtime through [`Registry::register`].

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod error;
mod protocol;
mod registry;
mod transcoder;

pub mod codes;

pub use error::{ProtocolError, Result, ValueError};
pub use protocol::{PayloadSize, Protocol};
pub use registry::Registry;
pub use transcoder::Transcoder;

/// The varint codec used for protocol codes on the wire.
pub use maddr_varint as varint;
