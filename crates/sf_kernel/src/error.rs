//! Core error types used across the workspace

use thiserror::Error;

/// Core error type for the kernel
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("Configuration error: {0}")]
    Configuration(#[from] config::ConfigError),

    #[error("Invalid timezone: {0}")]
    InvalidTimezone(String),

    #[error("Validation error: {0}")]
    Validation(String),
}

impl CoreError {
    pub fn validation(message: impl Into<String>) -> Self {
        CoreError::Validation(message.into())
    }

    pub fn invalid_timezone(name: impl Into<String>) -> Self {
        CoreError::InvalidTimezone(name.into())
    }
}
