//! # Domain Invariants
//!
//! Business rules that must hold after every completed ledger operation.

use super::entities::Account;
use super::errors::LedgerError;

/// Maximum hardware units a participant may buy in one day.
pub const DAILY_PURCHASE_CAP: u32 = 10;

/// Cash every participant starts with.
pub const DEFAULT_STARTING_CAPITAL: f64 = 50_000.0;

/// Price of one mining unit.
pub const DEFAULT_HARDWARE_UNIT_PRICE: f64 = 600.0;

/// Forced sales are rounded up to this many steps per coin (hundredths).
pub const LIQUIDATION_PRECISION: f64 = 100.0;

/// Relative distance from a whole hundredth below which a scaled sale
/// quantity is taken as exact.
pub const LIQUIDATION_SNAP_TOLERANCE: f64 = 1e-12;

/// Negative cash left by a forced sale above this magnitude is a real
/// deficit; anything smaller is rounding residue and settles to zero.
pub const CASH_DUST_TOLERANCE: f64 = 1e-6;

/// Invariant: coin balance is never negative at rest.
pub fn invariant_coin_balance_non_negative(account: &Account) -> Result<(), LedgerError> {
    if account.coin_balance() < 0.0 {
        return Err(LedgerError::InvariantViolation(format!(
            "coin balance of {} is negative: {}",
            account.id(),
            account.coin_balance()
        )));
    }
    Ok(())
}

/// Invariant: today's purchases stay within the cap.
pub fn invariant_daily_cap(purchased_today: u32, cap: u32) -> Result<(), LedgerError> {
    if purchased_today > cap {
        return Err(LedgerError::InvariantViolation(format!(
            "{} units bought today exceeds the daily cap of {}",
            purchased_today, cap
        )));
    }
    Ok(())
}

/// Invariant: a bankrupt account's hardware is off.
pub fn invariant_frozen_hardware_off(account: &Account) -> bool {
    account.solvency().is_active() || !account.power_status().is_on()
}
