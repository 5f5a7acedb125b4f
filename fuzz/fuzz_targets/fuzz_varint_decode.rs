//! Fuzz target for varint decoding.
//!
//! Tests that the decoder handles arbitrary input without panicking, and
//! that whatever it accepts survives a re-encode.

#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok((value, consumed)) = maddr_varint::decode(data) {
        assert!(consumed >= 1 && consumed <= maddr_varint::MAX_LEN);
        assert!(consumed <= data.len());

        // Re-encoding the decoded value must round-trip. The fresh
        // encoding may be shorter than the consumed bytes, since the
        // decoder also accepts padded input.
        let reencoded = maddr_varint::encode(value);
        assert_eq!(reencoded.len(), maddr_varint::encoded_len(value));
        assert!(reencoded.len() <= consumed);
        assert_eq!(maddr_varint::decode(&reencoded), Ok((value, reencoded.len())));
    }
});
