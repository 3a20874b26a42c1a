//! Runtime errors.

use sdpa_01_account_ledger::LedgerError;
use sdpa_02_lottery_engine::LotteryError;
use sdpa_03_market::MarketError;
use thiserror::Error;

use crate::container::ConfigError;

/// Errors that abort a simulation run.
#[derive(Debug, Error)]
pub enum RuntimeError {
    /// Configuration rejected before the run started.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Ledger failure that is not a recoverable rejection.
    #[error("Ledger failure: {0}")]
    Ledger(#[from] LedgerError),

    /// Lottery failure other than a day without power.
    #[error("Lottery failure: {0}")]
    Lottery(#[from] LotteryError),

    /// Market could not be constructed.
    #[error("Market failure: {0}")]
    Market(#[from] MarketError),

    /// Reading from or writing to the console failed.
    #[error("Console I/O failed: {0}")]
    Io(#[from] std::io::Error),

    /// Input ended while an answer was still expected.
    #[error("Input closed before the simulation finished")]
    InputClosed,

    /// A final report was requested before any day was played.
    #[error("No trading day has been played")]
    NoTradingDays,
}
