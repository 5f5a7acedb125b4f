//! Runtime extension of the protocol registry.
//!
//! A consumer that plugs its own protocol into the address format goes
//! through this lifecycle:
//! 1. Register a custom descriptor at startup
//! 2. Later registrations colliding with it are rejected
//! 3. The new name resolves through lookups and path parsing
//! 4. Other registry instances are unaffected
//!
//! The last test races registrations against each other to check the
//! registry stays consistent without any cooperation from its callers.

use std::sync::Arc;
use std::thread;

use bytes::Bytes;
use maddr_protocol::{
    varint, PayloadSize, Protocol, ProtocolError, Registry, Transcoder, ValueError,
};

/// Textual port number to two big-endian bytes, the way an address layer's
/// transcoder would do it.
struct PortTranscoder;

impl Transcoder for PortTranscoder {
    fn encode_value(&self, value: &str) -> Result<Bytes, ValueError> {
        let port: u16 = value
            .parse()
            .map_err(|_| ValueError::new(format!("invalid port: {value}")))?;
        Ok(Bytes::copy_from_slice(&port.to_be_bytes()))
    }

    fn decode_value(&self, bytes: &[u8]) -> Result<String, ValueError> {
        let raw: [u8; 2] = bytes
            .try_into()
            .map_err(|_| ValueError::new("port value must be two bytes"))?;
        Ok(u16::from_be_bytes(raw).to_string())
    }
}

#[test]
fn custom_protocol_lifecycle() {
    let registry = Registry::new();
    let custom = Protocol::new(9999, "custom", PayloadSize::Fixed(0));

    registry.register(custom.clone()).unwrap();

    // Re-registering the code fails even under a fresh name, and names the
    // protocol holding it.
    let err = registry
        .register(Protocol::new(9999, "custom2", PayloadSize::Fixed(0)))
        .unwrap_err();
    assert_eq!(
        err,
        ProtocolError::DuplicateCode {
            code: 9999,
            holder: "custom".to_owned(),
        }
    );

    let found = registry.by_code(9999).unwrap();
    assert_eq!(found, custom);
    assert_eq!(found.binary_tag().as_ref(), varint::encode(9999).as_slice());
}

#[test]
fn registered_names_resolve_in_paths() {
    let registry = Registry::new();
    registry
        .register(Protocol::new(9999, "custom", PayloadSize::Fixed(0)))
        .unwrap();

    let path = registry.parse_path("/ip4/custom/tcp").unwrap();
    let names: Vec<&str> = path.iter().map(Protocol::name).collect();
    assert_eq!(names, ["ip4", "custom", "tcp"]);
}

#[test]
fn registries_are_isolated() {
    let extended = Registry::new();
    let pristine = Registry::new();

    extended
        .register(Protocol::new(9999, "custom", PayloadSize::Fixed(0)))
        .unwrap();

    assert!(pristine.by_name("custom").is_none());
    assert_eq!(pristine.len() + 1, extended.len());
}

#[test]
fn transcoders_ride_along_with_descriptors() {
    let registry = Registry::with_protocols([Protocol::new(6, "tcp", PayloadSize::Fixed(16))
        .with_transcoder(Arc::new(PortTranscoder))])
    .unwrap();

    let tcp = registry.by_name("tcp").unwrap();
    let transcoder = tcp.transcoder().unwrap();

    let encoded = transcoder.encode_value("80").unwrap();
    assert_eq!(encoded.as_ref(), &[0, 80]);
    assert_eq!(transcoder.decode_value(&encoded).unwrap(), "80");
    assert!(transcoder.encode_value("borked").is_err());
}

#[test]
fn concurrent_registrations_pick_one_winner() {
    let registry = Arc::new(Registry::new());

    let handles: Vec<_> = (0..8)
        .map(|i| {
            let registry = Arc::clone(&registry);
            thread::spawn(move || {
                registry.register(Protocol::new(
                    9999,
                    format!("contender-{i}"),
                    PayloadSize::Fixed(0),
                ))
            })
        })
        .collect();

    let outcomes: Vec<_> = handles
        .into_iter()
        .map(|handle| handle.join().unwrap())
        .collect();

    assert_eq!(outcomes.iter().filter(|r| r.is_ok()).count(), 1);
    assert!(outcomes
        .iter()
        .filter_map(|r| r.as_ref().err())
        .all(|e| matches!(e, ProtocolError::DuplicateCode { code: 9999, .. })));

    // The survivor is one of the contenders, and the registry grew by
    // exactly one entry.
    let survivor = registry.by_code(9999).unwrap();
    assert!(survivor.name().starts_with("contender-"));
    assert_eq!(registry.len(), 14);
}
