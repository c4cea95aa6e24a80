//! Cardwatch Core — shared error type and poller configuration.

pub mod config;
pub mod error;

pub use config::PollerConfig;
pub use error::{Error, Result};
