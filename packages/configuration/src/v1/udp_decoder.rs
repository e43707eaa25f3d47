use serde::{Deserialize, Serialize};

/// Settings for the UDP request decoder.
#[derive(Serialize, Deserialize, PartialEq, Eq, Debug, Clone, Copy)]
pub struct UdpDecoder {
    /// Whether the peer IP address announced in the packet is trusted.
    ///
    /// When `false` (the default) the decoder uses the address the datagram
    /// was received from, and rejects announces that arrive without one. When
    /// `true` the IPv4 address written by the client in the announce packet is
    /// used, even if the sender address is known.
    #[serde(default = "UdpDecoder::default_allow_ip_spoofing")]
    pub allow_ip_spoofing: bool,
}

impl Default for UdpDecoder {
    fn default() -> Self {
        Self {
            allow_ip_spoofing: Self::default_allow_ip_spoofing(),
        }
    }
}

impl UdpDecoder {
    fn default_allow_ip_spoofing() -> bool {
        false
    }
}
