//! `Scrape` request decoder.
//!
//! ```text
//! Offset          Size            Name            Value
//! 0               64-bit integer  connection_id   read by the dispatch layer
//! 8               32-bit integer  action          2 // scrape
//! 12              32-bit integer  transaction_id  read by the dispatch layer
//! 16 + 20 * n     20-byte string  info_hash
//! 16 + 20 * N
//! ```
use serde::Serialize;
use torrust_udp_decoder_primitives::info_hash::{InfoHash, INFO_HASH_BYTES_LEN};

use crate::udp::error::Error;
use crate::udp::header::HEADER_LEN;
use crate::udp::reader::Reader;
use crate::udp::RawRequest;

/// Length of a scrape request for a single torrent.
pub const MIN_SCRAPE_REQUEST_LEN: usize = HEADER_LEN + INFO_HASH_BYTES_LEN;

/// A decoded `Scrape` request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScrapeRequest {
    /// The requested torrents in wire order. The response lists the
    /// statistics in the same order, so it must not be sorted nor
    /// deduplicated. Never empty.
    pub info_hashes: Vec<InfoHash>,
}

/// Decodes a `Scrape` request.
///
/// # Errors
///
/// Will return `Error::MalformedPacket` if the payload is shorter than 36
/// bytes or if the bytes after the header are not a whole number of
/// info-hashes.
pub fn decode_scrape(raw: &RawRequest<'_>) -> Result<ScrapeRequest, Error> {
    if raw.payload.len() < MIN_SCRAPE_REQUEST_LEN {
        return Err(Error::malformed_packet(format!(
            "scrape request is {} bytes long, expected at least {MIN_SCRAPE_REQUEST_LEN}",
            raw.payload.len()
        )));
    }

    let mut reader = Reader::new(raw.payload);

    reader.skip(HEADER_LEN)?;

    if reader.remaining().len() % INFO_HASH_BYTES_LEN != 0 {
        return Err(Error::malformed_packet(format!(
            "scrape request body is {} bytes long, not a multiple of {INFO_HASH_BYTES_LEN}",
            reader.remaining().len()
        )));
    }

    let mut info_hashes = Vec::with_capacity(reader.remaining().len() / INFO_HASH_BYTES_LEN);

    while !reader.is_empty() {
        info_hashes.push(InfoHash(reader.read_array()?));
    }

    Ok(ScrapeRequest { info_hashes })
}
