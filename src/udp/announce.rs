//! `Announce` request decoder.
//!
//! ```text
//! Offset  Size            Name            Value
//! 0       64-bit integer  connection_id   read by the dispatch layer
//! 8       32-bit integer  action          1 // announce
//! 12      32-bit integer  transaction_id  read by the dispatch layer
//! 16      20-byte string  info_hash
//! 36      20-byte string  peer_id
//! 56      64-bit integer  downloaded
//! 64      64-bit integer  left
//! 72      64-bit integer  uploaded
//! 80      32-bit integer  event           0: none; 1: completed; 2: started; 3: stopped
//! 84      32-bit integer  IP address      0 // default
//! 88      32-bit integer  key             not decoded
//! 92      32-bit integer  num_want        -1 // default
//! 96      16-bit integer  port
//! 98      options         BEP 41 options  optional
//! ```
//!
//! Only the last byte of the event field is read. Event ids are below 256, so
//! the three leading bytes of a valid event are zero; a packet with non-zero
//! leading bytes and a valid last byte is accepted as that event.
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::panic::Location;

use serde::Serialize;
use torrust_udp_decoder_primitives::announce_event::AnnounceEvent;
use torrust_udp_decoder_primitives::info_hash::InfoHash;
use torrust_udp_decoder_primitives::peer_id::PeerId;
use torrust_udp_decoder_primitives::{NumberOfBytes, NumberOfPeers};

use crate::udp::error::Error;
use crate::udp::header::HEADER_LEN;
use crate::udp::options::{decode_options, Params};
use crate::udp::reader::Reader;
use crate::udp::RawRequest;

/// Length of an announce request without options.
pub const ANNOUNCE_REQUEST_LEN: usize = 98;

/// A decoded `Announce` request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnnounceRequest {
    pub event: AnnounceEvent,
    pub info_hash: InfoHash,
    pub peer_id: PeerId,
    pub downloaded: NumberOfBytes,
    pub left: NumberOfBytes,
    pub uploaded: NumberOfBytes,
    /// Read as unsigned: the BEP 15 default `-1` becomes `u32::MAX`.
    pub num_want: NumberOfPeers,
    /// The peer IP, chosen according to the IP spoofing policy, and the port
    /// announced in the packet.
    pub peer_addr: SocketAddr,
    /// `None` when the packet has no options trailer.
    pub params: Option<Params>,
}

/// Decodes an `Announce` request.
///
/// When `allow_ip_spoofing` is `true` the peer IP is the IPv4 address written
/// in the packet. Otherwise it is the address the datagram came from.
///
/// # Errors
///
/// Will return:
///
/// - `Error::MalformedPacket` if the payload is shorter than 98 bytes or the
///   options trailer is truncated.
/// - `Error::MalformedEvent` if the event id is greater than 3.
/// - `Error::MalformedIp` if IP spoofing is disallowed and the sender address
///   is unknown.
pub fn decode_announce(raw: &RawRequest<'_>, allow_ip_spoofing: bool) -> Result<AnnounceRequest, Error> {
    if raw.payload.len() < ANNOUNCE_REQUEST_LEN {
        return Err(Error::malformed_packet(format!(
            "announce request is {} bytes long, expected at least {ANNOUNCE_REQUEST_LEN}",
            raw.payload.len()
        )));
    }

    let mut reader = Reader::new(raw.payload);

    reader.skip(HEADER_LEN)?;

    let info_hash = InfoHash(reader.read_array()?);
    let peer_id = PeerId(reader.read_array()?);
    let downloaded = reader.read_u64()?;
    let left = reader.read_u64()?;
    let uploaded = reader.read_u64()?;

    reader.skip(3)?;
    let event_id = reader.read_u8()?;
    let event = AnnounceEvent::try_from(event_id).map_err(|_| Error::MalformedEvent {
        event_id,
        location: Location::caller(),
    })?;

    let announced_ip = Ipv4Addr::from(reader.read_array::<4>()?);

    // key
    reader.skip(4)?;

    let num_want = reader.read_u32()?;
    let port = reader.read_u16()?;

    let peer_ip = resolve_peer_ip(raw.from, announced_ip, allow_ip_spoofing)?;

    let params = if reader.is_empty() {
        None
    } else {
        Some(decode_options(reader.remaining())?)
    };

    Ok(AnnounceRequest {
        event,
        info_hash,
        peer_id,
        downloaded,
        left,
        uploaded,
        num_want,
        peer_addr: SocketAddr::new(peer_ip, port),
        params,
    })
}

/// Picks the peer IP according to the IP spoofing policy.
///
/// There is no fallback: without spoofing, a request with no sender address
/// is rejected even if the packet carries an IP.
fn resolve_peer_ip(from: Option<IpAddr>, announced_ip: Ipv4Addr, allow_ip_spoofing: bool) -> Result<IpAddr, Error> {
    if allow_ip_spoofing {
        return Ok(IpAddr::V4(announced_ip));
    }

    from.ok_or(Error::MalformedIp {
        location: Location::caller(),
    })
}
