//! Error types for the CLI application.

use thiserror::Error;

/// Result type alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;

/// CLI-specific errors.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// A required submission field is missing or blank. Raised before the
    /// engine is invoked at all.
    #[error("Invalid submission field '{field}': {reason}")]
    Validation {
        /// Which field failed
        field: &'static str,
        /// Why it failed
        reason: String,
    },

    /// Engine error (completion-service failure, timeout)
    #[error("Engine error: {0}")]
    Engine(#[from] faircheck_engine::EngineError),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// TOML parsing error
    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),
}
