//! Version `1` for the [Torrust UDP decoder](https://docs.rs/torrust-udp-decoder)
//! configuration data structures.
//!
//! The configuration is loaded from a [TOML](https://toml.io/en/) file
//! `udp-decoder.toml` or from the environment variable
//! `TORRUST_UDP_DECODER_CONFIG_TOML` with the same content as the file. Single
//! values can be overridden with environment variables prefixed with
//! `TORRUST_UDP_DECODER_`, using `__` as the section separator:
//!
//! ```text
//! TORRUST_UDP_DECODER_UDP_DECODER__ALLOW_IP_SPOOFING=true
//! TORRUST_UDP_DECODER_LOGGING__THRESHOLD=debug
//! ```
//!
//! ## Default configuration
//!
//! ```toml
//! [logging]
//! threshold = "info"
//!
//! [udp_decoder]
//! allow_ip_spoofing = false
//! ```
pub mod logging;
pub mod udp_decoder;

use figment::providers::{Env, Format, Serialized, Toml};
use figment::Figment;
use serde::{Deserialize, Serialize};

use self::logging::Logging;
use self::udp_decoder::UdpDecoder;
use crate::{Error, Info, ENV_VAR_PREFIX};

/// Core configuration for the decoder.
#[derive(Serialize, Deserialize, PartialEq, Eq, Debug, Clone, Default)]
pub struct Configuration {
    /// Logging configuration
    #[serde(default)]
    pub logging: Logging,

    /// Decoder policy
    #[serde(default)]
    pub udp_decoder: UdpDecoder,
}

impl Configuration {
    /// Loads the configuration from the `Info` struct. The inline TOML has
    /// priority over the configuration file, and the prefixed environment
    /// variables have priority over both.
    ///
    /// # Errors
    ///
    /// Will return `Err` if the sources contain values that do not match the
    /// configuration structure.
    pub fn load(info: &Info) -> Result<Configuration, Error> {
        let figment = Figment::from(Serialized::defaults(Configuration::default()));

        let figment = match &info.config_toml {
            Some(config_toml) => figment.merge(Toml::string(config_toml)),
            None => figment.merge(Toml::file(&info.config_toml_path)),
        };

        let config: Configuration = figment.merge(Env::prefixed(ENV_VAR_PREFIX).split("__")).extract()?;

        Ok(config)
    }

    /// Loads the configuration from the configuration file.
    ///
    /// # Errors
    ///
    /// Will return `Err` if the file has a bad configuration.
    pub fn load_from_file(path: &str) -> Result<Configuration, Error> {
        let figment = Figment::from(Serialized::defaults(Configuration::default()))
            .merge(Toml::file(path))
            .merge(Env::prefixed(ENV_VAR_PREFIX).split("__"));

        let config: Configuration = figment.extract()?;

        Ok(config)
    }

    /// Encodes the configuration to TOML.
    ///
    /// # Errors
    ///
    /// Will return `Err` if the configuration cannot be encoded.
    pub fn to_toml(&self) -> Result<String, Error> {
        Ok(toml::to_string(self)?)
    }
}
