//! Configuration errors.

use super::error_code::{self, FaultErrorCode};

/// Errors that can occur while loading the initial debug state.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Config file not found: {path}")]
    FileNotFound { path: String },

    #[error("Config parse error in {path}: {message}")]
    Parse { path: String, message: String },

    #[error("Config validation failed for {field}: {message}")]
    Validation { field: String, message: String },

    #[error("Unknown action name: {value}")]
    InvalidAction { value: String },
}

impl FaultErrorCode for ConfigError {
    fn error_code(&self) -> &'static str {
        error_code::CONFIG_ERROR
    }
}
