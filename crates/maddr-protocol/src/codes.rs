//! Well-known protocol codes.
//!
//! These values identify protocols in every maddr already on the wire or on
//! disk, so they are replicated here as constants rather than derived from
//! any external table: changing one would silently corrupt existing
//! addresses.

/// IPv4 host address.
pub const IP4: u64 = 4;
/// TCP port.
pub const TCP: u64 = 6;
/// UDP port.
pub const UDP: u64 = 17;
/// DCCP port.
pub const DCCP: u64 = 33;
/// IPv6 host address.
pub const IP6: u64 = 41;
/// SCTP port.
pub const SCTP: u64 = 132;
/// uTP over UDP.
pub const UTP: u64 = 301;
/// UDT over UDP.
pub const UDT: u64 = 302;
/// Unix domain socket path.
pub const UNIX: u64 = 400;
/// IPFS node multihash.
pub const IPFS: u64 = 421;
/// HTTPS.
pub const HTTPS: u64 = 443;
/// Tor onion address.
pub const ONION: u64 = 444;
/// HTTP.
pub const HTTP: u64 = 480;
