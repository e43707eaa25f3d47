//! Helpers to set up the decoder in an application.
//!
//! The decoder itself has no runtime state. Applications load the
//! configuration once, install the logging subscriber and then build a
//! [`Decoder`](crate::udp::decoder::Decoder) from the `[udp_decoder]` section.
pub mod config;
pub mod logging;
