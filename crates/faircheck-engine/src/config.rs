//! Configuration for the review engine

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Configuration for the review engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Maximum time for a single completion call (seconds)
    pub completion_timeout_secs: u64,
}

impl EngineConfig {
    /// Get the completion timeout as a Duration
    pub fn completion_timeout(&self) -> Duration {
        Duration::from_secs(self.completion_timeout_secs)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.completion_timeout_secs == 0 {
            return Err("completion_timeout_secs must be greater than 0".to_string());
        }
        Ok(())
    }

    /// Load configuration from TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, String> {
        toml::from_str(toml_str).map_err(|e| format!("Failed to parse TOML: {}", e))
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            completion_timeout_secs: 120,
        }
    }
}
