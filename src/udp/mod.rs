//! Decoder for the UDP tracker requests.
//!
//! The UDP tracker protocol is described in
//! [BEP 15. UDP Tracker Protocol for `BitTorrent`](https://www.bittorrent.org/beps/bep_0015.html)
//! and extended with optional announce parameters in
//! [BEP 41. UDP Tracker Protocol Extensions](https://www.bittorrent.org/beps/bep_0041.html).
//!
//! The decoder turns the payload of one datagram into an
//! [`AnnounceRequest`](announce::AnnounceRequest) or a
//! [`ScrapeRequest`](scrape::ScrapeRequest). The dispatch layer is expected
//! to have already:
//!
//! - read the [`Header`](header::Header) and routed the datagram by action,
//! - validated the connection id.
//!
//! The decoders never look at the first 16 bytes again, never panic on short
//! or garbled input and never keep a reference to the payload once they
//! return.
//!
//! ```rust
//! use std::net::{IpAddr, Ipv4Addr};
//!
//! use torrust_udp_decoder::udp::scrape::decode_scrape;
//! use torrust_udp_decoder::udp::RawRequest;
//!
//! let mut payload = vec![0u8; 16];
//! payload.extend_from_slice(&[0xAB; 20]);
//!
//! let from = Some(IpAddr::V4(Ipv4Addr::new(126, 0, 0, 1)));
//! let request = decode_scrape(&RawRequest::new(&payload, from)).unwrap();
//!
//! assert_eq!(request.info_hashes.len(), 1);
//! ```
//!
//! All decoders are pure functions of their input. They can run on any number
//! of threads at the same time without coordination.
use std::net::IpAddr;

use derive_more::Constructor;

pub mod announce;
pub mod decoder;
pub mod error;
pub mod header;
pub mod options;
pub mod reader;
pub mod scrape;

/// A datagram as received by the UDP tracker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Constructor)]
pub struct RawRequest<'a> {
    /// The UDP payload.
    pub payload: &'a [u8],
    /// The address the datagram was received from, if the transport knows it.
    pub from: Option<IpAddr>,
}
