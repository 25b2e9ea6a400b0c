//! Configuration error types

use thiserror::Error;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Required configuration missing: {0}")]
    MissingRequired(&'static str),

    #[error("Invalid request timeout")]
    InvalidTimeout,

    #[error("Invalid backend base URL format")]
    InvalidBackendUrl,

    #[error("Backend base URL must use HTTPS in production")]
    BackendMustBeHttps,

    #[error("Default objective '{0}' cannot be negative")]
    NegativeObjective(&'static str),

    #[error("Window '{0}' must cover at least one day")]
    EmptyWindow(&'static str),

    #[error("Window '{0}' exceeds maximum allowed (366 days)")]
    WindowTooLarge(&'static str),

    #[error("Collection cache TTL exceeds maximum allowed (300s)")]
    CacheTtlTooLarge,

    #[error("Invalid log filter directive: {0}")]
    InvalidLogFilter(String),
}
