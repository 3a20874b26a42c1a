//! # SDPA-01 Account Ledger
//!
//! Per-participant financial and equipment state under a strict validation
//! contract.
//!
//! **Subsystem ID:** 01
//! **Architecture:** Hexagonal (DDD + Ports/Adapters)
//!
//! ## Purpose
//!
//! Each participant owns one [`Account`]:
//! - Cash and coin balances, hardware count, power and pool settings
//! - A daily hardware purchase cap, reset at the start of every day
//! - Forced liquidation when cash goes negative, bankruptcy when coins
//!   cannot cover the deficit
//!
//! ## Rejection Policy
//!
//! | Error | Trigger | Effect |
//! |-------|---------|--------|
//! | `InvalidQuantity` | negative, fractional or non-numeric input | none |
//! | `DailyLimitExceeded` | purchase would pass the daily cap | none |
//! | `InsufficientFunds` | purchase cost above cash | none |
//! | `ShortSellNotAllowed` | sale above coin holdings | none |
//! | `NoHardwareOwned` | toggle with zero units | none |
//! | `AccountFrozen` | any mutation after bankruptcy | none |
//!
//! Bankruptcy itself is an outcome ([`SolvencyOutcome::Bankrupt`]), not an
//! error.
//!
//! ## Module Structure
//!
//! ```text
//! sdpa-01-account-ledger/
//! ├── domain/          # Account, LedgerConfig, errors, receipts, input parsing
//! ├── algorithms/      # Liquidation quantity
//! ├── ports/           # LedgerApi
//! └── service.rs       # Ledger (all accounts, registration order)
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod algorithms;
pub mod domain;
pub mod ports;
pub mod service;

// Re-exports
pub use algorithms::liquidation_quantity;
pub use domain::{
    invariant_coin_balance_non_negative, invariant_daily_cap, invariant_frozen_hardware_off,
    parse_coin_quantity, parse_hardware_units, Account, LedgerConfig, LedgerError,
    PurchaseReceipt, SaleReceipt, SolvencyOutcome, DAILY_PURCHASE_CAP,
    CASH_DUST_TOLERANCE, DEFAULT_HARDWARE_UNIT_PRICE, DEFAULT_STARTING_CAPITAL,
    LIQUIDATION_PRECISION, LIQUIDATION_SNAP_TOLERANCE,
};
pub use ports::LedgerApi;
pub use service::Ledger;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
