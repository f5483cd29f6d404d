//! Diagnostics configuration for the conversions.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;

/// Environment variable that enables the sine probe.
pub const SINE_PROBE_ENV: &str = "COORD_SINE_PROBE";

/// Optional diagnostic output. Never changes conversion results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DiagnosticsConfig {
    /// Log the sine probe value before each lat/lng translation.
    pub sine_probe: bool,
}

impl DiagnosticsConfig {
    /// Load configuration from environment variables.
    ///
    /// Unrecognized values are logged and leave the default in place.
    pub fn from_env() -> Self {
        Self::try_from_env().unwrap_or_else(|e| {
            warn!(var = SINE_PROBE_ENV, error = %e, "Ignoring invalid value");
            Self::default()
        })
    }

    /// Load configuration from environment variables, failing on
    /// unrecognized values.
    pub fn try_from_env() -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Ok(val) = std::env::var(SINE_PROBE_ENV) {
            config.sine_probe = parse_flag(&val)?;
        }

        Ok(config)
    }

    pub fn with_sine_probe(mut self, enabled: bool) -> Self {
        self.sine_probe = enabled;
        self
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid boolean flag: {0:?}")]
    InvalidFlag(String),
}

/// Parse an on/off flag as written in environment variables.
pub fn parse_flag(s: &str) -> Result<bool, ConfigError> {
    match s.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" | "" => Ok(false),
        _ => Err(ConfigError::InvalidFlag(s.to_string())),
    }
}
