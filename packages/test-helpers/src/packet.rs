//! Encoders for BEP 15 request packets.
//!
//! ```rust
//! use torrust_udp_decoder_test_helpers::packet::AnnounceRequestBuilder;
//!
//! let packet = AnnounceRequestBuilder::default().with_port(6881).into_bytes();
//!
//! assert_eq!(packet.len(), 98);
//! assert_eq!(&packet[96..98], &6881u16.to_be_bytes());
//! ```
use std::io::{self, Write};
use std::net::Ipv4Addr;

use byteorder::{NetworkEndian, WriteBytesExt};
use torrust_udp_decoder_primitives::announce_event::AnnounceEvent;
use torrust_udp_decoder_primitives::info_hash::InfoHash;
use torrust_udp_decoder_primitives::peer_id::PeerId;
use torrust_udp_decoder_primitives::{NumberOfBytes, NumberOfPeers};

pub const ACTION_ANNOUNCE: u32 = 1;
pub const ACTION_SCRAPE: u32 = 2;

pub const OPTION_END_OF_OPTIONS: u8 = 0x0;
pub const OPTION_NOP: u8 = 0x1;
pub const OPTION_URL_DATA: u8 = 0x2;

/// # Panics
///
/// Will not panic: the literal is a valid info-hash.
#[must_use]
pub fn sample_info_hash() -> InfoHash {
    "3b245504cf5f11bbdbe1201cea6a6bf45aee1bc0".parse().unwrap()
}

#[must_use]
pub fn sample_peer_id() -> PeerId {
    PeerId(*b"-qB00000000000000001")
}

/// Builds an announce request packet. The defaults are a valid `started`
/// announce from `126.0.0.1:8080`.
#[derive(Debug, Clone)]
pub struct AnnounceRequestBuilder {
    connection_id: u64,
    transaction_id: u32,
    info_hash: InfoHash,
    peer_id: PeerId,
    downloaded: NumberOfBytes,
    left: NumberOfBytes,
    uploaded: NumberOfBytes,
    event: [u8; 4],
    ip: Ipv4Addr,
    key: u32,
    num_want: NumberOfPeers,
    port: u16,
    options: Vec<u8>,
}

impl Default for AnnounceRequestBuilder {
    fn default() -> Self {
        Self {
            connection_id: 0x0102_0304_0506_0708,
            transaction_id: 123,
            info_hash: sample_info_hash(),
            peer_id: sample_peer_id(),
            downloaded: 0,
            left: 0,
            uploaded: 0,
            event: u32::from(AnnounceEvent::Started.to_u8()).to_be_bytes(),
            ip: Ipv4Addr::new(126, 0, 0, 1),
            key: 0,
            num_want: 50,
            port: 8080,
            options: vec![],
        }
    }
}

impl AnnounceRequestBuilder {
    #[must_use]
    pub fn with_connection_id(mut self, connection_id: u64) -> Self {
        self.connection_id = connection_id;
        self
    }

    #[must_use]
    pub fn with_transaction_id(mut self, transaction_id: u32) -> Self {
        self.transaction_id = transaction_id;
        self
    }

    #[must_use]
    pub fn with_info_hash(mut self, info_hash: InfoHash) -> Self {
        self.info_hash = info_hash;
        self
    }

    #[must_use]
    pub fn with_peer_id(mut self, peer_id: PeerId) -> Self {
        self.peer_id = peer_id;
        self
    }

    #[must_use]
    pub fn with_downloaded(mut self, downloaded: NumberOfBytes) -> Self {
        self.downloaded = downloaded;
        self
    }

    #[must_use]
    pub fn with_left(mut self, left: NumberOfBytes) -> Self {
        self.left = left;
        self
    }

    #[must_use]
    pub fn with_uploaded(mut self, uploaded: NumberOfBytes) -> Self {
        self.uploaded = uploaded;
        self
    }

    #[must_use]
    pub fn with_event(self, event: AnnounceEvent) -> Self {
        self.with_event_id(u32::from(event.to_u8()))
    }

    /// Writes any value in the event field, valid or not.
    #[must_use]
    pub fn with_event_id(mut self, event_id: u32) -> Self {
        self.event = event_id.to_be_bytes();
        self
    }

    #[must_use]
    pub fn with_ip_address(mut self, ip: Ipv4Addr) -> Self {
        self.ip = ip;
        self
    }

    #[must_use]
    pub fn with_key(mut self, key: u32) -> Self {
        self.key = key;
        self
    }

    #[must_use]
    pub fn with_num_want(mut self, num_want: NumberOfPeers) -> Self {
        self.num_want = num_want;
        self
    }

    #[must_use]
    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    /// Appends raw bytes to the options trailer.
    #[must_use]
    pub fn with_raw_options(mut self, options: &[u8]) -> Self {
        self.options.extend_from_slice(options);
        self
    }

    /// Appends a URL-Data option. The data must fit in one option.
    ///
    /// # Panics
    ///
    /// Will panic if `data` is longer than 255 bytes.
    #[must_use]
    pub fn with_url_data(mut self, data: &[u8]) -> Self {
        self.options.push(OPTION_URL_DATA);
        self.options.push(u8::try_from(data.len()).expect("URL-Data option longer than 255 bytes"));
        self.options.extend_from_slice(data);
        self
    }

    #[must_use]
    pub fn with_end_of_options(mut self) -> Self {
        self.options.push(OPTION_END_OF_OPTIONS);
        self
    }

    /// Writes the packet to `bytes`.
    ///
    /// # Errors
    ///
    /// Will return an error if the writer fails.
    pub fn write_to_bytes(&self, bytes: &mut impl Write) -> Result<(), io::Error> {
        bytes.write_u64::<NetworkEndian>(self.connection_id)?;
        bytes.write_u32::<NetworkEndian>(ACTION_ANNOUNCE)?;
        bytes.write_u32::<NetworkEndian>(self.transaction_id)?;
        bytes.write_all(&self.info_hash.bytes())?;
        bytes.write_all(&self.peer_id.bytes())?;
        bytes.write_u64::<NetworkEndian>(self.downloaded)?;
        bytes.write_u64::<NetworkEndian>(self.left)?;
        bytes.write_u64::<NetworkEndian>(self.uploaded)?;
        bytes.write_all(&self.event)?;
        bytes.write_all(&self.ip.octets())?;
        bytes.write_u32::<NetworkEndian>(self.key)?;
        bytes.write_u32::<NetworkEndian>(self.num_want)?;
        bytes.write_u16::<NetworkEndian>(self.port)?;
        bytes.write_all(&self.options)?;

        Ok(())
    }

    /// # Panics
    ///
    /// Will not panic: writing to a `Vec` does not fail.
    #[must_use]
    pub fn into_bytes(self) -> Vec<u8> {
        let mut packet = Vec::with_capacity(98 + self.options.len());
        self.write_to_bytes(&mut packet).expect("writing to a Vec does not fail");
        packet
    }
}

/// Builds a scrape request packet.
#[derive(Debug, Clone)]
pub struct ScrapeRequestBuilder {
    connection_id: u64,
    transaction_id: u32,
    info_hashes: Vec<InfoHash>,
}

impl Default for ScrapeRequestBuilder {
    fn default() -> Self {
        Self {
            connection_id: 0x0102_0304_0506_0708,
            transaction_id: 123,
            info_hashes: vec![],
        }
    }
}

impl ScrapeRequestBuilder {
    #[must_use]
    pub fn with_connection_id(mut self, connection_id: u64) -> Self {
        self.connection_id = connection_id;
        self
    }

    #[must_use]
    pub fn with_transaction_id(mut self, transaction_id: u32) -> Self {
        self.transaction_id = transaction_id;
        self
    }

    #[must_use]
    pub fn with_info_hash(mut self, info_hash: InfoHash) -> Self {
        self.info_hashes.push(info_hash);
        self
    }

    /// Writes the packet to `bytes`.
    ///
    /// # Errors
    ///
    /// Will return an error if the writer fails.
    pub fn write_to_bytes(&self, bytes: &mut impl Write) -> Result<(), io::Error> {
        bytes.write_u64::<NetworkEndian>(self.connection_id)?;
        bytes.write_u32::<NetworkEndian>(ACTION_SCRAPE)?;
        bytes.write_u32::<NetworkEndian>(self.transaction_id)?;
        for info_hash in &self.info_hashes {
            bytes.write_all(&info_hash.bytes())?;
        }

        Ok(())
    }

    /// # Panics
    ///
    /// Will not panic: writing to a `Vec` does not fail.
    #[must_use]
    pub fn into_bytes(self) -> Vec<u8> {
        let mut packet = Vec::with_capacity(16 + 20 * self.info_hashes.len());
        self.write_to_bytes(&mut packet).expect("writing to a Vec does not fail");
        packet
    }
}
