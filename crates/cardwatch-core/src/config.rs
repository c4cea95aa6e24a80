//! Poller configuration.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Configuration for the polling loop.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PollerConfig {
    /// Milliseconds between poll cycles.
    pub poll_interval_ms: u64,
    /// Stop after this many cycles (None = run until stopped).
    pub max_cycles: Option<u64>,
}

impl Default for PollerConfig {
    fn default() -> Self {
        Self {
            poll_interval_ms: 1000,
            max_cycles: None,
        }
    }
}

impl PollerConfig {
    /// Create configuration from environment and defaults.
    ///
    /// Reads `CARDWATCH_POLL_INTERVAL_MS` and `CARDWATCH_MAX_CYCLES`;
    /// absent variables fall back to defaults, malformed values are a
    /// configuration error.
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();

        if let Ok(raw) = std::env::var("CARDWATCH_POLL_INTERVAL_MS") {
            config.poll_interval_ms = raw.parse().map_err(|_| {
                Error::Config(format!("invalid CARDWATCH_POLL_INTERVAL_MS: {raw:?}"))
            })?;
        }
        if let Ok(raw) = std::env::var("CARDWATCH_MAX_CYCLES") {
            let cycles = raw
                .parse()
                .map_err(|_| Error::Config(format!("invalid CARDWATCH_MAX_CYCLES: {raw:?}")))?;
            config.max_cycles = Some(cycles);
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = PollerConfig::default();
        assert_eq!(config.poll_interval_ms, 1000);
        assert_eq!(config.max_cycles, None);
    }

    #[test]
    fn test_from_env() {
        // Env mutation is process-global, so all cases run in one test
        std::env::remove_var("CARDWATCH_POLL_INTERVAL_MS");
        std::env::remove_var("CARDWATCH_MAX_CYCLES");
        let config = PollerConfig::from_env().unwrap();
        assert_eq!(config.poll_interval_ms, 1000);
        assert_eq!(config.max_cycles, None);

        std::env::set_var("CARDWATCH_POLL_INTERVAL_MS", "250");
        std::env::set_var("CARDWATCH_MAX_CYCLES", "10");
        let config = PollerConfig::from_env().unwrap();
        assert_eq!(config.poll_interval_ms, 250);
        assert_eq!(config.max_cycles, Some(10));

        std::env::set_var("CARDWATCH_POLL_INTERVAL_MS", "abc");
        let err = PollerConfig::from_env().unwrap_err();
        assert!(matches!(err, Error::Config(_)));

        std::env::set_var("CARDWATCH_POLL_INTERVAL_MS", "250");
        std::env::set_var("CARDWATCH_MAX_CYCLES", "-1");
        let err = PollerConfig::from_env().unwrap_err();
        assert!(matches!(err, Error::Config(_)));

        std::env::remove_var("CARDWATCH_POLL_INTERVAL_MS");
        std::env::remove_var("CARDWATCH_MAX_CYCLES");
    }

    #[test]
    fn test_roundtrip_json() {
        let config = PollerConfig {
            poll_interval_ms: 250,
            max_cycles: Some(10),
        };
        let json = serde_json::to_string(&config).unwrap();
        let back: PollerConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back.poll_interval_ms, 250);
        assert_eq!(back.max_cycles, Some(10));
    }
}
