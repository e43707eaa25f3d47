use torrust_udp_decoder_configuration::{Configuration, Threshold};

/// This configuration is used for testing. Logging is off so the tests do not
/// compete for the global subscriber.
#[must_use]
pub fn ephemeral() -> Configuration {
    let mut config = Configuration::default();

    config.logging.threshold = Threshold::Off; // Change to `Debug` for tests debugging

    config
}

/// Ephemeral configuration with IP spoofing allowed.
#[must_use]
pub fn ephemeral_with_ip_spoofing() -> Configuration {
    let mut config = ephemeral();

    config.udp_decoder.allow_ip_spoofing = true;

    config
}
