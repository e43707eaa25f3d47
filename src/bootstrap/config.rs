//! Initialize configuration from file or env var.
//!
//! All environment variables are prefixed with `TORRUST_UDP_DECODER_`.
use torrust_udp_decoder_configuration::{Configuration, Error, Info};

// Default values
pub const DEFAULT_PATH_CONFIG: &str = "./share/default/config/udp-decoder.toml";

/// It loads the application configuration from the environment.
///
/// There are two methods to inject the configuration:
///
/// 1. By using a config file: `udp-decoder.toml`.
/// 2. Environment variable: `TORRUST_UDP_DECODER_CONFIG_TOML`. The variable contains the same contents as the `udp-decoder.toml` file.
///
/// Environment variable has priority over the config file. When neither is
/// present the default configuration is used.
///
/// Refer to the [configuration documentation](https://docs.rs/torrust-udp-decoder-configuration) for the configuration options.
///
/// # Errors
///
/// Will return `Err` if the configuration sources contain invalid values.
pub fn initialize_configuration() -> Result<Configuration, Error> {
    let info = Info::new(DEFAULT_PATH_CONFIG.to_string());

    Configuration::load(&info)
}
