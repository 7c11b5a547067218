//! Unified error types for the gateway.

use thiserror::Error;

/// Unified error type for the gateway.
#[derive(Error, Debug)]
pub enum GatewayError {
    /// Configuration loading error.
    #[error("configuration error: {0}")]
    Config(#[from] envy::Error),

    /// Configuration loaded but failed validation.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Convenient Result type alias.
pub type Result<T> = std::result::Result<T, GatewayError>;
