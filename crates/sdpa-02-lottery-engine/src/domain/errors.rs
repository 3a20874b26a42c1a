//! # Domain Errors
//!
//! Error types for the Lottery Engine subsystem.

use thiserror::Error;

/// Lottery error types.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LotteryError {
    /// Total registered power is zero, so no distribution can be built.
    /// Fatal for the day's draw.
    #[error("No active mining power: total power is zero")]
    NoActivePower,

    /// Random source produced a value outside the open unit interval.
    #[error("Invalid draw: {0} is outside (0, 1)")]
    InvalidDraw(f64),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// An outcome broke a lottery invariant.
    #[error("Invariant violation: {0}")]
    InvariantViolation(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_active_power_error() {
        let err = LotteryError::NoActivePower;
        assert!(err.to_string().contains("zero"));
    }

    #[test]
    fn test_invalid_draw_error() {
        let err = LotteryError::InvalidDraw(1.5);
        assert!(err.to_string().contains("1.5"));
    }
}
