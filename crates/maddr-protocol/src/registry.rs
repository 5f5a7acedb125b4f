//! The protocol registry.

use crate::{codes, PayloadSize, Protocol, ProtocolError, Result};
use parking_lot::RwLock;

/// The built-in protocol table, in its original wire order.
///
/// Codes, names, sizes, and path flags here are wire format: they match
/// every deployed maddr and must never change. None of the built-in
/// descriptors carries a transcoder; an address layer that needs them
/// seeds its own registry through [`Registry::with_protocols`].
fn built_in() -> Vec<Protocol> {
    vec![
        Protocol::new(codes::IP4, "ip4", PayloadSize::Fixed(32)),
        Protocol::new(codes::TCP, "tcp", PayloadSize::Fixed(16)),
        Protocol::new(codes::UDP, "udp", PayloadSize::Fixed(16)),
        Protocol::new(codes::DCCP, "dccp", PayloadSize::Fixed(16)),
        Protocol::new(codes::IP6, "ip6", PayloadSize::Fixed(128)),
        Protocol::new(codes::SCTP, "sctp", PayloadSize::Fixed(16)),
        Protocol::new(codes::ONION, "onion", PayloadSize::Fixed(96)),
        Protocol::new(codes::UTP, "utp", PayloadSize::Fixed(0)),
        Protocol::new(codes::UDT, "udt", PayloadSize::Fixed(0)),
        Protocol::new(codes::HTTP, "http", PayloadSize::Fixed(0)),
        Protocol::new(codes::HTTPS, "https", PayloadSize::Fixed(0)),
        Protocol::new(codes::IPFS, "ipfs", PayloadSize::LengthPrefixed),
        Protocol::path_protocol(codes::UNIX, "unix", PayloadSize::LengthPrefixed),
    ]
}

/// The authoritative, extensible set of known protocols.
///
/// A registry starts seeded with the built-in table ([`Registry::new`]) or
/// bare ([`Registry::empty`]) and grows through [`Registry::register`];
/// entries are never removed or overwritten. Every operation takes `&self`:
/// the collection lives behind a reader/writer lock, so lookups run
/// concurrently with each other while registration is atomic with respect
/// to everything else. Lookups return owned clones, never references into
/// the locked state.
#[derive(Debug)]
pub struct Registry {
    protocols: RwLock<Vec<Protocol>>,
}

impl Registry {
    /// Creates a registry seeded with the built-in protocol table.
    #[must_use]
    pub fn new() -> Self {
        Self {
            protocols: RwLock::new(built_in()),
        }
    }

    /// Creates a registry with no protocols at all.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            protocols: RwLock::new(Vec::new()),
        }
    }

    /// Creates an empty registry and registers `protocols` in order.
    ///
    /// This is how an address layer seeds a registry whose descriptors
    /// carry transcoders.
    ///
    /// # Errors
    ///
    /// Fails on the first descriptor that collides with an earlier one,
    /// with the same errors as [`Registry::register`].
    pub fn with_protocols(protocols: impl IntoIterator<Item = Protocol>) -> Result<Self> {
        let registry = Self::empty();
        for protocol in protocols {
            registry.register(protocol)?;
        }
        Ok(registry)
    }

    /// Registers a new protocol.
    ///
    /// The whole check-then-append runs under the write lock, so two
    /// colliding concurrent registrations cannot both succeed and no
    /// lookup ever observes a partial insert. On failure the registry is
    /// left unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`ProtocolError::EmptyName`] if the descriptor's name is
    /// blank, [`ProtocolError::DuplicateCode`] if its code is already
    /// taken (checked first, so a descriptor colliding on both fields
    /// always reports the code), or [`ProtocolError::DuplicateName`] if
    /// its name is.
    pub fn register(&self, protocol: Protocol) -> Result<()> {
        if protocol.name().is_empty() {
            return Err(ProtocolError::EmptyName);
        }

        let mut protocols = self.protocols.write();

        if let Some(holder) = protocols.iter().find(|p| p.code() == protocol.code()) {
            return Err(ProtocolError::DuplicateCode {
                code: protocol.code(),
                holder: holder.name().to_owned(),
            });
        }
        if protocols.iter().any(|p| p.name() == protocol.name()) {
            return Err(ProtocolError::DuplicateName(protocol.name().to_owned()));
        }

        protocols.push(protocol);
        Ok(())
    }

    /// Looks up a protocol by its textual name.
    #[must_use]
    pub fn by_name(&self, name: &str) -> Option<Protocol> {
        self.protocols
            .read()
            .iter()
            .find(|p| p.name() == name)
            .cloned()
    }

    /// Looks up a protocol by its numeric code.
    #[must_use]
    pub fn by_code(&self, code: u64) -> Option<Protocol> {
        self.protocols
            .read()
            .iter()
            .find(|p| p.code() == code)
            .cloned()
    }

    /// Resolves every named segment of a `/`-delimited path string, in
    /// order.
    ///
    /// Leading and trailing delimiters are ignored, and an input that is
    /// empty after trimming resolves to an empty sequence. The whole
    /// resolution runs under one read guard, so it sees a single
    /// consistent snapshot of the registry.
    ///
    /// # Errors
    ///
    /// Returns [`ProtocolError::UnknownProtocol`] naming the first segment
    /// that does not resolve.
    pub fn parse_path(&self, s: &str) -> Result<Vec<Protocol>> {
        let trimmed = s.trim_matches('/');
        if trimmed.is_empty() {
            return Ok(Vec::new());
        }

        let protocols = self.protocols.read();
        trimmed
            .split('/')
            .map(|name| {
                protocols
                    .iter()
                    .find(|p| p.name() == name)
                    .cloned()
                    .ok_or_else(|| ProtocolError::UnknownProtocol(name.to_owned()))
            })
            .collect()
    }

    /// Returns a snapshot of every registered protocol, in registration
    /// order.
    #[must_use]
    pub fn protocols(&self) -> Vec<Protocol> {
        self.protocols.read().clone()
    }

    /// Returns the number of registered protocols.
    #[must_use]
    pub fn len(&self) -> usize {
        self.protocols.read().len()
    }

    /// Returns true if no protocols are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.protocols.read().is_empty()
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}
