use ml_core::{MlError, Result};
use serde::{Deserialize, Serialize};

/// Hold-out validation configuration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SimpleCvConfig {
    /// Fraction of the points held out for validation.
    pub validation_size: f64,
}

impl SimpleCvConfig {
    /// Creates a new `SimpleCvConfig`.
    ///
    /// The value is checked when the split is computed, not here.
    pub fn new(validation_size: f64) -> Self {
        Self { validation_size }
    }

    /// Parses a configuration from its JSON representation, e.g.
    /// `{"validation_size": 0.25}`. Missing fields take their default.
    ///
    /// # Errors
    /// `MlError::InvalidConfig` if `json` is malformed or has unknown fields.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| MlError::InvalidConfig(e.to_string()))
    }

    /// Serializes the configuration into JSON.
    ///
    /// # Errors
    /// `MlError::InvalidConfig` if the value can't be represented in JSON.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self).map_err(|e| MlError::InvalidConfig(e.to_string()))
    }
}

impl Default for SimpleCvConfig {
    fn default() -> Self {
        Self {
            validation_size: 0.2,
        }
    }
}
