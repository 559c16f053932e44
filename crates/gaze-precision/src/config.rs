//! Configuration for precision reports
//!
//! Holds the BCEA scale factor and the minimum fixation length for RMS-S2S.
//! Can be loaded from JSON, or from TOML with the `toml-config` feature.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::bcea::{bcea_k_for_confidence, DEFAULT_BCEA_K};
use crate::rms_s2s::MIN_RMS_S2S_SAMPLES;

/// Precision report settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Record))]
#[serde(default)]
pub struct PrecisionConfig {
    /// BCEA confidence scale factor `k`
    pub bcea_k: f64,
    /// Fixations with fewer complete samples get no RMS-S2S value
    pub min_rms_samples: u64,
}

impl Default for PrecisionConfig {
    fn default() -> Self {
        Self {
            bcea_k: DEFAULT_BCEA_K,
            min_rms_samples: MIN_RMS_S2S_SAMPLES as u64,
        }
    }
}

impl PrecisionConfig {
    /// Create a new configuration with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Set `bcea_k` from a confidence proportion, e.g. `0.95`
    pub fn with_confidence(mut self, p: f64) -> Self {
        self.bcea_k = bcea_k_for_confidence(p);
        self
    }

    /// Load configuration from a TOML string
    #[cfg(feature = "toml-config")]
    pub fn from_toml(toml_str: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(toml_str)
    }

    /// Serialize configuration to TOML
    #[cfg(feature = "toml-config")]
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }

    /// Load configuration from a JSON string
    pub fn from_json(json_str: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json_str)
    }

    /// Serialize configuration to JSON
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.bcea_k.is_finite() || self.bcea_k <= 0.0 {
            return Err(ConfigError::OutOfRange(format!(
                "bcea_k must be finite and positive, got {}",
                self.bcea_k
            )));
        }

        if self.min_rms_samples < MIN_RMS_S2S_SAMPLES as u64 {
            return Err(ConfigError::OutOfRange(format!(
                "min_rms_samples must be at least {}, got {}",
                MIN_RMS_S2S_SAMPLES, self.min_rms_samples
            )));
        }

        Ok(())
    }
}

/// Configuration validation error
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// Value is out of valid range
    #[error("Value out of range: {0}")]
    OutOfRange(String),
}
