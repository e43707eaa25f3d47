//! Optional announce parameters.
//!
//! [BEP 41. UDP Tracker Protocol Extensions](https://www.bittorrent.org/beps/bep_0041.html)
//! appends a list of options to the 98-byte announce request. Each option
//! starts with a one-byte type:
//!
//! ```text
//! 0x0  EndOfOptions  no length, stops the list
//! 0x1  NOP           no length, padding
//! 0x2  URLData       one-byte length followed by that many bytes
//! ```
//!
//! The scanner stops at `EndOfOptions` and at any type it does not know
//! about, so packets written by newer clients are still accepted. The
//! URL-Data payload is kept as opaque bytes: interpreting it as a path and
//! query is left to the tracker core.
//!
//! The final byte of the trailer is never read as an option type. A one-byte
//! trailer therefore yields no options whatever its value.
use serde::Serialize;

use crate::udp::error::Error;

pub const OPTION_END_OF_OPTIONS: u8 = 0x0;
pub const OPTION_NOP: u8 = 0x1;
pub const OPTION_URL_DATA: u8 = 0x2;

/// An option that carries data. `EndOfOptions` and `NOP` are consumed by the
/// scanner and never appear here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum AnnounceOption {
    UrlData(Vec<u8>),
}

/// The options found in the trailer, in wire order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Params(Vec<AnnounceOption>);

impl Params {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &AnnounceOption> {
        self.0.iter()
    }

    /// All the URL-Data payloads joined together, as BEP 41 prescribes.
    #[must_use]
    pub fn url_data(&self) -> Vec<u8> {
        self.0
            .iter()
            .flat_map(|option| match option {
                AnnounceOption::UrlData(data) => data.iter().copied(),
            })
            .collect()
    }
}

/// What the scanner does after looking at the option under the cursor.
#[derive(Debug, PartialEq, Eq)]
pub(crate) enum Step {
    /// Keep scanning from this offset.
    Continue(usize),
    Stop,
    Fail(Error),
}

/// Decodes the options trailer that follows the fixed announce fields.
///
/// # Errors
///
/// Will return `Error::MalformedPacket` if a URL-Data option declares more
/// bytes than the trailer holds.
pub fn decode_options(trailer: &[u8]) -> Result<Params, Error> {
    let mut params = Params::default();
    let mut cursor = 0;

    while cursor + 1 < trailer.len() {
        match step(trailer, cursor, &mut params) {
            Step::Continue(next) => cursor = next,
            Step::Stop => break,
            Step::Fail(err) => return Err(err),
        }
    }

    Ok(params)
}

/// Handles the option starting at `cursor`. Every `Continue` moves the cursor
/// forward by at least one byte.
pub(crate) fn step(trailer: &[u8], cursor: usize, params: &mut Params) -> Step {
    let Some(&option) = trailer.get(cursor) else {
        return Step::Stop;
    };

    match option {
        OPTION_END_OF_OPTIONS => Step::Stop,
        OPTION_NOP => Step::Continue(cursor + 1),
        OPTION_URL_DATA => {
            let Some(&len) = trailer.get(cursor + 1) else {
                return Step::Fail(Error::malformed_packet(format!(
                    "URL-Data option at offset {cursor} has no length byte"
                )));
            };

            let start = cursor + 2;
            let end = start + usize::from(len);

            let Some(data) = trailer.get(start..end) else {
                return Step::Fail(Error::malformed_packet(format!(
                    "URL-Data option at offset {cursor} declares {len} bytes, only {} left",
                    trailer.len().saturating_sub(start)
                )));
            };

            params.0.push(AnnounceOption::UrlData(data.to_vec()));

            Step::Continue(end)
        }
        _ => Step::Stop,
    }
}
