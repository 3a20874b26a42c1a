//! # Domain Errors
//!
//! Error types for the Account Ledger subsystem.
//!
//! Every variant except `UnknownParticipant`, `DuplicateParticipant`,
//! `AccountFrozen`, `ConfigError` and `InvariantViolation` is a recoverable
//! rejection: the account is left exactly as it was before the call.

use shared_types::{Cash, Coins, ParticipantId};
use thiserror::Error;

/// Ledger error types.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LedgerError {
    /// Quantity is negative, fractional where an integer is required, or not
    /// a number at all.
    #[error("Invalid quantity: {0}")]
    InvalidQuantity(String),

    /// Purchase would push today's purchases past the daily cap.
    #[error("Daily purchase limit exceeded: {purchased_today} bought today + {requested} requested > {cap}")]
    DailyLimitExceeded {
        /// Units requested
        requested: u32,
        /// Units already bought today
        purchased_today: u32,
        /// Daily cap
        cap: u32,
    },

    /// Purchase costs more than the cash balance.
    #[error("Insufficient funds: cost {cost:.2} exceeds cash balance {available:.2}")]
    InsufficientFunds {
        /// Total purchase cost
        cost: Cash,
        /// Cash on hand
        available: Cash,
    },

    /// Sale exceeds coin holdings.
    #[error("Short sell not allowed: requested {requested}, held {held}")]
    ShortSellNotAllowed {
        /// Coins requested for sale
        requested: Coins,
        /// Coins held
        held: Coins,
    },

    /// Toggle attempted without any hardware.
    #[error("No hardware owned")]
    NoHardwareOwned,

    /// Price is zero, negative or not finite.
    #[error("Invalid price: {0}")]
    InvalidPrice(f64),

    /// Account is bankrupt and no longer accepts mutations.
    #[error("Account frozen: {0} is bankrupt")]
    AccountFrozen(ParticipantId),

    /// No account registered under this name.
    #[error("Unknown participant: {0}")]
    UnknownParticipant(ParticipantId),

    /// A participant with the same name (ignoring case) already exists.
    #[error("Duplicate participant: {0}")]
    DuplicateParticipant(ParticipantId),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Account state broke a ledger invariant.
    #[error("Invariant violation: {0}")]
    InvariantViolation(String),
}

impl LedgerError {
    /// Whether the caller may re-prompt and retry the action.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Self::InvalidQuantity(_)
                | Self::DailyLimitExceeded { .. }
                | Self::InsufficientFunds { .. }
                | Self::ShortSellNotAllowed { .. }
                | Self::NoHardwareOwned
                | Self::InvalidPrice(_)
        )
    }
}
