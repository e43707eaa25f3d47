//! **Torrust UDP decoder** turns the datagrams received by a `BitTorrent` UDP
//! tracker into typed requests.
//!
//! It implements the request layouts of
//! [BEP 15](https://www.bittorrent.org/beps/bep_0015.html) and the announce
//! options of [BEP 41](https://www.bittorrent.org/beps/bep_0041.html). The
//! datagrams come straight from the network, so every field is read with a
//! bounds check and any malformed packet is rejected with an
//! [`Error`](udp::error::Error) instead of a panic.
//!
//! # Table of contents
//!
//! - [Decoding requests](#decoding-requests)
//! - [Configuration](#configuration)
//! - [Logging](#logging)
//!
//! # Decoding requests
//!
//! ```rust
//! use std::net::{IpAddr, Ipv4Addr};
//!
//! use torrust_udp_decoder::udp::announce::decode_announce;
//! use torrust_udp_decoder::udp::RawRequest;
//!
//! let mut payload = vec![0u8; 98];
//! payload[83] = 2; // started
//! payload[96..98].copy_from_slice(&6881u16.to_be_bytes());
//!
//! let from = Some(IpAddr::V4(Ipv4Addr::new(126, 0, 0, 1)));
//! let request = decode_announce(&RawRequest::new(&payload, from), false).unwrap();
//!
//! assert_eq!(request.peer_addr.to_string(), "126.0.0.1:6881");
//! ```
//!
//! # Configuration
//!
//! The only decoding policy is whether the peer IP written in the announce
//! packet is trusted. It is read from the `[udp_decoder]` section of the
//! configuration, see [`bootstrap::config`] and
//! [`torrust_udp_decoder_configuration`].
//!
//! # Logging
//!
//! The library logs with [`tracing`]. Applications can install a subscriber
//! with [`bootstrap::logging::setup`].
pub mod bootstrap;
pub mod udp;
