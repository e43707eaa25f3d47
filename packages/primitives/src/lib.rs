//! Primitive types for the [Torrust UDP decoder](https://docs.rs/torrust-udp-decoder).
//!
//! These are the values the decoder hands over to the tracker core: the
//! torrent identifier, the peer identifier, the announce event and the
//! counters reported by the peer. They do not depend on the wire format, so
//! the tracker core can use them without pulling in the decoder.
pub mod announce_event;
pub mod info_hash;
pub mod peer_id;

/// The number of bytes `downloaded`, `uploaded` or `left` reported by a peer.
pub type NumberOfBytes = u64;

/// The number of peers a client wants in the announce response.
///
/// BEP 15 defines the `num_want` field as a signed 32-bit integer, but it is
/// read as unsigned: `-1` ("default") arrives as `u32::MAX`.
pub type NumberOfPeers = u32;
