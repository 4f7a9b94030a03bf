//! Configuration loading for the analytics service
//!
//! Supports JSON configuration files for:
//! - Forecast horizon defaults and limits
//! - Anomaly detection sensitivity
//!
//! The anomaly threshold can be overridden through the
//! `ANOMALY_DETECTION_SENSITIVITY` environment variable.

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Environment variable overriding the anomaly z-score threshold
pub const SENSITIVITY_ENV: &str = "ANOMALY_DETECTION_SENSITIVITY";

/// Root configuration for the analytics service
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AnalyticsConfig {
    #[serde(default)]
    pub forecast: ForecastSettings,

    #[serde(default)]
    pub anomaly: AnomalySettings,
}

/// Forecast horizon settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastSettings {
    /// Horizon used when a request does not name one
    #[serde(default = "default_periods")]
    pub default_periods: u32,

    /// Largest horizon a request may ask for
    #[serde(default = "default_max_periods")]
    pub max_periods: u32,
}

fn default_periods() -> u32 {
    12
}

fn default_max_periods() -> u32 {
    60
}

impl Default for ForecastSettings {
    fn default() -> Self {
        Self {
            default_periods: default_periods(),
            max_periods: default_max_periods(),
        }
    }
}

/// Anomaly detection settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnomalySettings {
    /// Z-score above which an expense is flagged
    #[serde(default = "default_threshold")]
    pub threshold: f64,
}

fn default_threshold() -> f64 {
    fincast_anomaly::DEFAULT_THRESHOLD
}

impl Default for AnomalySettings {
    fn default() -> Self {
        Self {
            threshold: default_threshold(),
        }
    }
}

impl AnalyticsConfig {
    /// Load configuration from a JSON file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(|e| ConfigError::Io {
            path: path.as_ref().display().to_string(),
            error: e.to_string(),
        })?;

        Self::from_json(&content)
    }

    /// Parse configuration from JSON string
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Apply overrides from the process environment
    pub fn with_process_env(self) -> Result<Self, ConfigError> {
        self.with_env_overrides(|key| std::env::var(key).ok())
    }

    /// Apply overrides from an arbitrary variable lookup
    pub fn with_env_overrides<F>(mut self, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(raw) = lookup(SENSITIVITY_ENV) {
            let threshold = raw
                .trim()
                .parse::<f64>()
                .map_err(|_| ConfigError::InvalidValue {
                    key: SENSITIVITY_ENV.to_string(),
                    value: raw.clone(),
                })?;
            self.anomaly.threshold = threshold;
        }

        self.validate()?;
        Ok(self)
    }

    /// Check cross-field constraints
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.forecast.default_periods == 0 {
            return Err(ConfigError::InvalidValue {
                key: "forecast.default_periods".to_string(),
                value: "0".to_string(),
            });
        }
        if self.forecast.max_periods < self.forecast.default_periods {
            return Err(ConfigError::InvalidValue {
                key: "forecast.max_periods".to_string(),
                value: self.forecast.max_periods.to_string(),
            });
        }
        if !self.anomaly.threshold.is_finite() || self.anomaly.threshold < 0.0 {
            return Err(ConfigError::InvalidValue {
                key: "anomaly.threshold".to_string(),
                value: self.anomaly.threshold.to_string(),
            });
        }
        Ok(())
    }
}

/// Configuration errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {error}")]
    Io { path: String, error: String },

    #[error("Failed to parse config: {0}")]
    Parse(String),

    #[error("Invalid value for {key}: {value}")]
    InvalidValue { key: String, value: String },
}
