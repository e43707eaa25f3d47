//! The 16-byte prefix shared by every BEP 15 request.
//!
//! ```text
//! Offset  Size            Name            Value
//! 0       64-bit integer  connection_id   PROTOCOL_ID for a connect request
//! 8       32-bit integer  action          0 connect, 1 announce, 2 scrape
//! 12      32-bit integer  transaction_id
//! 16
//! ```
//!
//! The dispatch layer uses these helpers to route a datagram and to check its
//! connection id before handing it to the announce or scrape decoder. Those
//! decoders skip the prefix without validating it again.
use std::panic::Location;

use derive_more::Display;
use serde::Serialize;

use crate::udp::error::Error;
use crate::udp::reader::Reader;

/// Length of the common request prefix.
pub const HEADER_LEN: usize = 16;

/// The magic connection id a client sends in its connect request.
pub const PROTOCOL_ID: u64 = 0x0417_2710_1980;

#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Action {
    #[display("connect")]
    Connect,
    #[display("announce")]
    Announce,
    #[display("scrape")]
    Scrape,
    /// Only valid in responses, but it belongs to the same id space.
    #[display("error")]
    Error,
}

impl Action {
    #[must_use]
    pub fn to_u32(&self) -> u32 {
        match self {
            Action::Connect => 0,
            Action::Announce => 1,
            Action::Scrape => 2,
            Action::Error => 3,
        }
    }
}

impl TryFrom<u32> for Action {
    type Error = Error;

    #[track_caller]
    fn try_from(action_id: u32) -> Result<Self, <Self as TryFrom<u32>>::Error> {
        match action_id {
            0 => Ok(Action::Connect),
            1 => Ok(Action::Announce),
            2 => Ok(Action::Scrape),
            3 => Ok(Action::Error),
            _ => Err(Error::UnknownAction {
                action_id,
                location: Location::caller(),
            }),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Header {
    pub connection_id: u64,
    pub action: Action,
    pub transaction_id: u32,
}

impl Header {
    /// Reads the request prefix.
    ///
    /// # Errors
    ///
    /// Will return `Error::MalformedPacket` if the payload is shorter than
    /// [`HEADER_LEN`] and `Error::UnknownAction` if the action id is not one
    /// of the four BEP 15 actions.
    #[track_caller]
    pub fn decode(payload: &[u8]) -> Result<Self, Error> {
        let mut reader = Reader::new(payload);

        let connection_id = reader.read_u64()?;
        let action = Action::try_from(reader.read_u32()?)?;
        let transaction_id = reader.read_u32()?;

        Ok(Self {
            connection_id,
            action,
            transaction_id,
        })
    }

    /// Whether this is the opening request of the connect handshake.
    #[must_use]
    pub fn is_connect_handshake(&self) -> bool {
        self.action == Action::Connect && self.connection_id == PROTOCOL_ID
    }
}
