//! Configuration data structures for the [Torrust UDP decoder](https://docs.rs/torrust-udp-decoder).
//!
//! The current version for configuration is [`v1`].
pub mod v1;

use std::env;
use std::panic::Location;
use std::sync::Arc;

use thiserror::Error;
use tracing::info;

// Environment variables

/// The whole `udp-decoder.toml` file content. It has priority over the config file.
/// Even if the file is not on the default path.
pub const ENV_VAR_CONFIG_TOML: &str = "TORRUST_UDP_DECODER_CONFIG_TOML";

/// The `udp-decoder.toml` file location.
pub const ENV_VAR_CONFIG_TOML_PATH: &str = "TORRUST_UDP_DECODER_CONFIG_TOML_PATH";

/// Prefix of the environment variables that override single values, for
/// example `TORRUST_UDP_DECODER_UDP_DECODER__ALLOW_IP_SPOOFING=true`.
pub const ENV_VAR_PREFIX: &str = "TORRUST_UDP_DECODER_";

pub type Configuration = v1::Configuration;
pub type Logging = v1::logging::Logging;
pub type Threshold = v1::logging::Threshold;
pub type UdpDecoder = v1::udp_decoder::UdpDecoder;

/// Information required for loading config
#[derive(Debug, Default, Clone)]
pub struct Info {
    config_toml: Option<String>,
    config_toml_path: String,
}

impl Info {
    /// Build Configuration Info
    ///
    /// The inline TOML in [`ENV_VAR_CONFIG_TOML`] takes priority over the file.
    /// The file path is taken from [`ENV_VAR_CONFIG_TOML_PATH`] or, when
    /// unset, from `default_config_toml_path`.
    #[must_use]
    #[allow(clippy::needless_pass_by_value)]
    pub fn new(default_config_toml_path: String) -> Self {
        let config_toml = if let Ok(config_toml) = env::var(ENV_VAR_CONFIG_TOML) {
            info!("Loading configuration from environment variable {ENV_VAR_CONFIG_TOML}");
            Some(config_toml)
        } else {
            None
        };

        let config_toml_path = if let Ok(config_toml_path) = env::var(ENV_VAR_CONFIG_TOML_PATH) {
            info!("Loading configuration from file: `{config_toml_path}` ...");
            config_toml_path
        } else {
            info!("Loading configuration from default configuration file: `{default_config_toml_path}` ...");
            default_config_toml_path
        };

        Self {
            config_toml,
            config_toml_path,
        }
    }

    /// Builds the info from an inline TOML document, ignoring the environment
    /// variables that point to a configuration file.
    #[must_use]
    pub fn from_toml(config_toml: &str) -> Self {
        Self {
            config_toml: Some(config_toml.to_owned()),
            config_toml_path: String::new(),
        }
    }
}

/// Errors that can occur when loading the configuration.
#[derive(Error, Debug)]
pub enum Error {
    /// The configuration sources could not be merged or extracted.
    #[error("Failed processing the configuration: {source}, {location}")]
    ConfigError {
        source: Arc<figment::Error>,
        location: &'static Location<'static>,
    },

    /// The configuration could not be encoded as TOML.
    #[error("Unable to encode the configuration as TOML: {source}, {location}")]
    UnableToEncode {
        source: Arc<toml::ser::Error>,
        location: &'static Location<'static>,
    },
}

impl From<figment::Error> for Error {
    #[track_caller]
    fn from(err: figment::Error) -> Self {
        Self::ConfigError {
            source: Arc::new(err),
            location: Location::caller(),
        }
    }
}

impl From<toml::ser::Error> for Error {
    #[track_caller]
    fn from(err: toml::ser::Error) -> Self {
        Self::UnableToEncode {
            source: Arc::new(err),
            location: Location::caller(),
        }
    }
}
