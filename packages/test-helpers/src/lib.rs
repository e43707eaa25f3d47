//! Testing helpers for the Torrust UDP decoder.
//!
//! The decoder never writes packets, so the tests build them with the
//! encoders in [`packet`].
pub mod configuration;
pub mod packet;
pub mod random;
