//! Announce events. Described on the
//! [BEP 3. The `BitTorrent` Protocol Specification](https://www.bittorrent.org/beps/bep_0003.html)
//! and encoded as a 32-bit integer in
//! [BEP 15. UDP Tracker Protocol](https://www.bittorrent.org/beps/bep_0015.html).
use derive_more::Display;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Announce events. The set is closed: there is no "unknown" event, an
/// invalid wire value is rejected instead of being mapped to a default.
#[derive(Hash, Clone, Copy, Debug, Display, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
pub enum AnnounceEvent {
    /// This is one of the announcements done at regular intervals.
    #[display("")]
    None,
    /// The peer has completed downloading the torrent.
    #[display("completed")]
    Completed,
    /// The peer has started downloading the torrent.
    #[display("started")]
    Started,
    /// The peer has ceased downloading the torrent.
    #[display("stopped")]
    Stopped,
}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("invalid announce event id: {0}")]
pub struct InvalidEventId(pub u8);

impl AnnounceEvent {
    /// The wire value of the event.
    #[inline]
    #[must_use]
    pub fn to_u8(&self) -> u8 {
        match self {
            AnnounceEvent::None => 0,
            AnnounceEvent::Completed => 1,
            AnnounceEvent::Started => 2,
            AnnounceEvent::Stopped => 3,
        }
    }
}

impl TryFrom<u8> for AnnounceEvent {
    type Error = InvalidEventId;

    fn try_from(id: u8) -> Result<Self, Self::Error> {
        match id {
            0 => Ok(Self::None),
            1 => Ok(Self::Completed),
            2 => Ok(Self::Started),
            3 => Ok(Self::Stopped),
            other => Err(InvalidEventId(other)),
        }
    }
}
