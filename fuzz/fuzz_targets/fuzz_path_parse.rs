//! Fuzz target for path-string parsing.
//!
//! Tests that resolving arbitrary strings against a seeded registry never
//! panics, and that anything that does resolve names only registered
//! protocols.

#![no_main]

use libfuzzer_sys::fuzz_target;
use maddr_protocol::Registry;

fuzz_target!(|data: &[u8]| {
    let Ok(s) = std::str::from_utf8(data) else {
        return;
    };

    let registry = Registry::new();
    if let Ok(protocols) = registry.parse_path(s) {
        for protocol in protocols {
            assert_eq!(registry.by_code(protocol.code()), Some(protocol));
        }
    }
});
