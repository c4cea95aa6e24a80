//! Error types for cardwatch.
//!
//! Extraction never produces an error: unparseable cards are an
//! expected, high-frequency input and collapse to `None` at the
//! extractor. This enum covers the runtime and configuration surface
//! only.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Poller is already running")]
    AlreadyRunning,

    #[error("Poller is not running")]
    NotRunning,

    #[error("Poll task failed to join: {0}")]
    Join(String),
}

pub type Result<T> = std::result::Result<T, Error>;
