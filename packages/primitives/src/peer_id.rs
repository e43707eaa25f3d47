//! Peer ID.
//!
//! A 20-byte opaque identifier the client generates for itself. Clients usually
//! encode their name and version in the first bytes (for example `-qB4250-`),
//! but the decoder does not interpret it.
use std::panic::Location;

use thiserror::Error;

#[derive(PartialEq, Eq, Hash, Clone, Copy, Default, Debug, PartialOrd, Ord)]
pub struct PeerId(pub [u8; 20]);

pub const PEER_ID_BYTES_LEN: usize = 20;

impl PeerId {
    #[must_use]
    pub fn bytes(&self) -> [u8; PEER_ID_BYTES_LEN] {
        self.0
    }

    /// Returns the peer id as a hex string.
    #[must_use]
    pub fn to_hex_string(&self) -> String {
        self.to_string()
    }
}

impl std::fmt::Display for PeerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut chars = [0u8; 2 * PEER_ID_BYTES_LEN];
        let hex = binascii::bin2hex(&self.0, &mut chars).map_err(|_| std::fmt::Error)?;
        f.write_str(std::str::from_utf8(hex).map_err(|_| std::fmt::Error)?)
    }
}

impl std::str::FromStr for PeerId {
    type Err = binascii::ConvertError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.len() != 2 * PEER_ID_BYTES_LEN {
            return Err(binascii::ConvertError::InvalidInputLength);
        }
        let mut id = Self([0u8; PEER_ID_BYTES_LEN]);
        binascii::hex2bin(s.as_bytes(), &mut id.0)?;
        Ok(id)
    }
}

impl From<[u8; PEER_ID_BYTES_LEN]> for PeerId {
    fn from(val: [u8; PEER_ID_BYTES_LEN]) -> Self {
        PeerId(val)
    }
}

/// Errors that can occur when converting a byte slice into a `PeerId`.
#[derive(Error, Debug)]
pub enum ConversionError {
    #[error("not enough bytes for peer id: {message} {location}")]
    NotEnoughBytes {
        location: &'static Location<'static>,
        message: String,
    },
    #[error("too many bytes for peer id: {message} {location}")]
    TooManyBytes {
        location: &'static Location<'static>,
        message: String,
    },
}

impl TryFrom<&[u8]> for PeerId {
    type Error = ConversionError;

    #[track_caller]
    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        if bytes.len() < PEER_ID_BYTES_LEN {
            return Err(ConversionError::NotEnoughBytes {
                location: Location::caller(),
                message: format! {"got {} bytes, expected {}", bytes.len(), PEER_ID_BYTES_LEN},
            });
        }
        if bytes.len() > PEER_ID_BYTES_LEN {
            return Err(ConversionError::TooManyBytes {
                location: Location::caller(),
                message: format! {"got {} bytes, expected {}", bytes.len(), PEER_ID_BYTES_LEN},
            });
        }
        let mut ret = Self([0u8; PEER_ID_BYTES_LEN]);
        ret.0.copy_from_slice(bytes);
        Ok(ret)
    }
}

impl serde::ser::Serialize for PeerId {
    fn serialize<S: serde::ser::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
