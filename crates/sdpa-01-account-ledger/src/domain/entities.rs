//! # Domain Entities
//!
//! The participant account and the ledger configuration.

use serde::{Deserialize, Serialize};
use shared_types::{Cash, Coins, ParticipantId, PoolMode, PowerStatus, Solvency};
use tracing::{debug, info};

use super::errors::LedgerError;
use super::invariants::{
    CASH_DUST_TOLERANCE, DAILY_PURCHASE_CAP, DEFAULT_HARDWARE_UNIT_PRICE, DEFAULT_STARTING_CAPITAL,
};
use super::quantity::validate_coin_quantity;
use super::value_objects::{PurchaseReceipt, SaleReceipt, SolvencyOutcome};
use crate::algorithms::liquidation_quantity;

/// Ledger configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LedgerConfig {
    /// Cash each account opens with.
    pub starting_capital: Cash,
    /// Price of one mining unit.
    pub hardware_unit_price: Cash,
    /// Maximum units an account may buy per day.
    pub daily_purchase_cap: u32,
}

impl Default for LedgerConfig {
    fn default() -> Self {
        Self {
            starting_capital: DEFAULT_STARTING_CAPITAL,
            hardware_unit_price: DEFAULT_HARDWARE_UNIT_PRICE,
            daily_purchase_cap: DAILY_PURCHASE_CAP,
        }
    }
}

impl LedgerConfig {
    /// Validate configuration.
    pub fn validate(&self) -> Result<(), LedgerError> {
        if !self.starting_capital.is_finite() || self.starting_capital < 0.0 {
            return Err(LedgerError::ConfigError(format!(
                "starting capital must be non-negative, got {}",
                self.starting_capital
            )));
        }
        ensure_price(self.hardware_unit_price)?;
        if self.daily_purchase_cap == 0 {
            return Err(LedgerError::ConfigError(
                "daily purchase cap must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

/// Prices are opaque positive reals.
pub(crate) fn ensure_price(price: Cash) -> Result<(), LedgerError> {
    if !price.is_finite() || price <= 0.0 {
        return Err(LedgerError::InvalidPrice(price));
    }
    Ok(())
}

/// One participant's financial and equipment state.
///
/// Mutated only through the methods below. Every rejected call leaves the
/// account untouched. Once bankrupt, the account is frozen.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Account {
    id: ParticipantId,
    cash_balance: Cash,
    coin_balance: Coins,
    hardware_count: u32,
    power_status: PowerStatus,
    pool_mode: PoolMode,
    solvency: Solvency,
    daily_purchase_count: u32,
    daily_purchase_cap: u32,
}

impl Account {
    /// Open an account with the default daily cap.
    pub fn new(id: ParticipantId, starting_capital: Cash) -> Self {
        Self::with_daily_cap(id, starting_capital, DAILY_PURCHASE_CAP)
    }

    /// Open an account with a custom daily cap.
    pub fn with_daily_cap(id: ParticipantId, starting_capital: Cash, daily_purchase_cap: u32) -> Self {
        Self {
            id,
            cash_balance: starting_capital,
            coin_balance: 0.0,
            hardware_count: 0,
            power_status: PowerStatus::Off,
            pool_mode: PoolMode::Solo,
            solvency: Solvency::Active,
            daily_purchase_count: 0,
            daily_purchase_cap,
        }
    }

    // -------------------------------------------------------------------------
    // Accessors
    // -------------------------------------------------------------------------

    /// Participant identity.
    pub fn id(&self) -> &ParticipantId {
        &self.id
    }

    /// Cash on hand. May be negative between electricity and solvency check.
    pub fn cash_balance(&self) -> Cash {
        self.cash_balance
    }

    /// Coins held.
    pub fn coin_balance(&self) -> Coins {
        self.coin_balance
    }

    /// Mining units owned.
    pub fn hardware_count(&self) -> u32 {
        self.hardware_count
    }

    /// On/off status. Always `Off` once bankrupt.
    pub fn power_status(&self) -> PowerStatus {
        self.power_status
    }

    /// Solo or pooled.
    pub fn pool_mode(&self) -> PoolMode {
        self.pool_mode
    }

    /// Active or bankrupt.
    pub fn solvency(&self) -> Solvency {
        self.solvency
    }

    /// Units bought today.
    pub fn daily_purchase_count(&self) -> u32 {
        self.daily_purchase_count
    }

    /// Units still purchasable today.
    pub fn remaining_daily_allowance(&self) -> u32 {
        self.daily_purchase_cap.saturating_sub(self.daily_purchase_count)
    }

    /// Whether the account is still in play.
    pub fn is_active(&self) -> bool {
        self.solvency.is_active()
    }

    // -------------------------------------------------------------------------
    // Operations
    // -------------------------------------------------------------------------

    /// Reset the daily purchase counter.
    pub fn begin_day(&mut self) {
        self.daily_purchase_count = 0;
    }

    /// Buy `units` mining units at `unit_price` each.
    ///
    /// Zero units is a cancelled purchase and always succeeds. Power status
    /// and pool mode are left unchanged.
    pub fn purchase_hardware(
        &mut self,
        units: u32,
        unit_price: Cash,
    ) -> Result<PurchaseReceipt, LedgerError> {
        self.ensure_active()?;
        if units == 0 {
            return Ok(PurchaseReceipt::cancelled());
        }
        ensure_price(unit_price)?;

        let purchased_after = self.daily_purchase_count.saturating_add(units);
        if purchased_after > self.daily_purchase_cap {
            return Err(LedgerError::DailyLimitExceeded {
                requested: units,
                purchased_today: self.daily_purchase_count,
                cap: self.daily_purchase_cap,
            });
        }

        let cost = f64::from(units) * unit_price;
        if cost > self.cash_balance {
            return Err(LedgerError::InsufficientFunds {
                cost,
                available: self.cash_balance,
            });
        }

        self.hardware_count += units;
        self.daily_purchase_count = purchased_after;
        self.cash_balance -= cost;
        debug!(participant = %self.id, units, cost, "Hardware purchased");

        Ok(PurchaseReceipt { units, cost })
    }

    /// Sell `quantity` coins at `market_price`.
    ///
    /// Zero coins is a cancelled sale and always succeeds.
    pub fn sell_coins(
        &mut self,
        quantity: Coins,
        market_price: Cash,
    ) -> Result<SaleReceipt, LedgerError> {
        self.ensure_active()?;
        validate_coin_quantity(quantity)?;
        if quantity == 0.0 {
            return Ok(SaleReceipt::cancelled());
        }
        ensure_price(market_price)?;

        if quantity > self.coin_balance {
            return Err(LedgerError::ShortSellNotAllowed {
                requested: quantity,
                held: self.coin_balance,
            });
        }

        let proceeds = quantity * market_price;
        self.coin_balance -= quantity;
        self.cash_balance += proceeds;
        debug!(participant = %self.id, quantity, proceeds, "Coins sold");

        Ok(SaleReceipt { quantity, proceeds })
    }

    /// Flip the hardware on or off.
    pub fn toggle_power(&mut self) -> Result<PowerStatus, LedgerError> {
        self.ensure_active()?;
        self.ensure_hardware()?;
        self.power_status = self.power_status.toggled();
        debug!(participant = %self.id, status = %self.power_status, "Power toggled");
        Ok(self.power_status)
    }

    /// Flip between solo and pooled mining.
    pub fn toggle_pool_mode(&mut self) -> Result<PoolMode, LedgerError> {
        self.ensure_active()?;
        self.ensure_hardware()?;
        self.pool_mode = self.pool_mode.toggled();
        debug!(participant = %self.id, mode = %self.pool_mode, "Pool mode toggled");
        Ok(self.pool_mode)
    }

    /// Charge today's electricity bill.
    ///
    /// Returns `None` when the hardware is off (including every bankrupt
    /// account), otherwise the amount deducted.
    pub fn charge_electricity(&mut self, unit_price: Cash) -> Option<Cash> {
        if !self.is_active() || !self.power_status.is_on() {
            return None;
        }
        let bill = f64::from(self.hardware_count) * unit_price;
        self.cash_balance -= bill;
        debug!(participant = %self.id, bill, "Electricity charged");
        Some(bill)
    }

    /// Add lottery winnings to the coin balance.
    pub fn credit_prize(&mut self, amount: Coins) {
        self.coin_balance += amount;
        debug!(participant = %self.id, amount, "Prize credited");
    }

    /// Settle a negative cash balance.
    ///
    /// Non-negative cash is a no-op. A deficit is cleared by force-selling
    /// the rounded-up quantity of coins if the account holds enough;
    /// otherwise the account goes bankrupt without any partial sale.
    /// Checking an already bankrupt account changes nothing.
    pub fn check_solvency(&mut self, market_price: Cash) -> Result<SolvencyOutcome, LedgerError> {
        if !self.is_active() {
            return Ok(SolvencyOutcome::Bankrupt { deficit: 0.0 });
        }
        if self.cash_balance >= 0.0 {
            return Ok(SolvencyOutcome::Solvent);
        }
        ensure_price(market_price)?;

        let deficit = -self.cash_balance;
        let required = liquidation_quantity(deficit, market_price);

        if self.coin_balance >= required {
            let receipt = self.sell_coins(required, market_price)?;
            // The rounded-up sale covers the deficit exactly; a residue is noise.
            if self.cash_balance < 0.0 && self.cash_balance > -CASH_DUST_TOLERANCE {
                self.cash_balance = 0.0;
            }
            info!(
                participant = %self.id,
                coins_sold = receipt.quantity,
                proceeds = receipt.proceeds,
                "Forced liquidation"
            );
            return Ok(SolvencyOutcome::Liquidated {
                coins_sold: receipt.quantity,
                proceeds: receipt.proceeds,
            });
        }

        self.solvency = Solvency::Bankrupt;
        self.power_status = PowerStatus::Off;
        info!(
            participant = %self.id,
            deficit,
            required_coins = required,
            held_coins = self.coin_balance,
            "Participant bankrupt"
        );
        Ok(SolvencyOutcome::Bankrupt { deficit })
    }

    fn ensure_active(&self) -> Result<(), LedgerError> {
        if !self.is_active() {
            return Err(LedgerError::AccountFrozen(self.id.clone()));
        }
        Ok(())
    }

    fn ensure_hardware(&self) -> Result<(), LedgerError> {
        if self.hardware_count == 0 {
            return Err(LedgerError::NoHardwareOwned);
        }
        Ok(())
    }
}
