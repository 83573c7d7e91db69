//! Configuration error types

use thiserror::Error;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ConfigValidationError),

    #[error("Tracing initialisation failed: {0}")]
    Tracing(String),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigValidationError {
    #[error("Invalid log filter directive: {0}")]
    InvalidLogLevel(String),

    #[error("Required configuration missing: {0}")]
    MissingRequired(&'static str),

    #[error("Invalid user email address")]
    InvalidUserEmail,

    #[error("Seed file not found: {0}")]
    SeedFileNotFound(String),
}
