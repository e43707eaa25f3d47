//! Error types for the UDP decoder.
//!
//! A single error vocabulary is shared by the decoders in this crate and the
//! dispatch layer that calls them. `UnknownAction` and `BadConnectionId` are
//! never produced by the announce and scrape decoders: they are raised by the
//! code that routes datagrams and checks connection ids, which reports them
//! with the same type.
//!
//! Every variant is a rejection of one datagram. None of them is fatal and the
//! decoder never retries.
use std::panic::Location;

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The buffer is too short for its role, a length-prefixed option would
    /// read past the end of the buffer, or the scrape body is not a whole
    /// number of info-hashes.
    #[error("malformed packet: {message}, {location}")]
    MalformedPacket {
        message: String,
        location: &'static Location<'static>,
    },

    /// There is no usable peer address: IP spoofing is disallowed and the
    /// transport did not provide the sender address.
    #[error("malformed IP address, {location}")]
    MalformedIp { location: &'static Location<'static> },

    /// The event id is not one of `0` (none), `1` (completed), `2` (started)
    /// or `3` (stopped).
    #[error("malformed event ID: {event_id}, {location}")]
    MalformedEvent {
        event_id: u8,
        location: &'static Location<'static>,
    },

    #[error("unknown action ID: {action_id}, {location}")]
    UnknownAction {
        action_id: u32,
        location: &'static Location<'static>,
    },

    #[error("bad connection ID, {location}")]
    BadConnectionId { location: &'static Location<'static> },
}

impl Error {
    #[track_caller]
    pub(crate) fn malformed_packet(message: impl Into<String>) -> Self {
        Self::MalformedPacket {
            message: message.into(),
            location: Location::caller(),
        }
    }

    /// The message sent back to the client in a BEP 15 error response.
    ///
    /// It does not include the source location, which is only meant for the
    /// tracker logs.
    #[must_use]
    pub fn client_message(&self) -> &'static str {
        match self {
            Error::MalformedPacket { .. } => "malformed packet",
            Error::MalformedIp { .. } => "malformed IP address",
            Error::MalformedEvent { .. } => "malformed event ID",
            Error::UnknownAction { .. } => "unknown action ID",
            Error::BadConnectionId { .. } => "bad connection ID",
        }
    }
}
