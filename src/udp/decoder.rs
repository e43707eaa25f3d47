//! The decoder as configured for one UDP tracker.
//!
//! It captures the IP spoofing policy from the configuration and logs every
//! rejected datagram, so the dispatch layer only has to pick the request kind.
use torrust_udp_decoder_configuration::UdpDecoder;
use tracing::{debug, trace};

use crate::udp::announce::{decode_announce, AnnounceRequest};
use crate::udp::error::Error;
use crate::udp::scrape::{decode_scrape, ScrapeRequest};
use crate::udp::RawRequest;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Decoder {
    allow_ip_spoofing: bool,
}

impl Decoder {
    #[must_use]
    pub fn new(config: &UdpDecoder) -> Self {
        Self {
            allow_ip_spoofing: config.allow_ip_spoofing,
        }
    }

    #[must_use]
    pub fn allows_ip_spoofing(&self) -> bool {
        self.allow_ip_spoofing
    }

    /// Decodes an `Announce` request with the configured IP spoofing policy.
    ///
    /// # Errors
    ///
    /// See [`decode_announce`].
    pub fn announce(&self, raw: &RawRequest<'_>) -> Result<AnnounceRequest, Error> {
        match decode_announce(raw, self.allow_ip_spoofing) {
            Ok(request) => {
                trace!(?request, "udp announce request decoded");
                Ok(request)
            }
            Err(err) => {
                debug!(from = ?raw.from, len = raw.payload.len(), %err, "udp announce request rejected");
                Err(err)
            }
        }
    }

    /// Decodes a `Scrape` request.
    ///
    /// # Errors
    ///
    /// See [`decode_scrape`].
    pub fn scrape(&self, raw: &RawRequest<'_>) -> Result<ScrapeRequest, Error> {
        match decode_scrape(raw) {
            Ok(request) => {
                trace!(torrents = request.info_hashes.len(), "udp scrape request decoded");
                Ok(request)
            }
            Err(err) => {
                debug!(from = ?raw.from, len = raw.payload.len(), %err, "udp scrape request rejected");
                Err(err)
            }
        }
    }
}
