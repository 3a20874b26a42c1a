//! # Domain Errors

use thiserror::Error;

/// Market error types.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MarketError {
    /// Configuration rejected by `validate()`.
    #[error("Configuration error: {0}")]
    ConfigError(String),
}
