//! # Ledger Service
//!
//! Owns every participant account in registration order and implements
//! [`LedgerApi`].

use shared_types::{Cash, Coins, MinerSnapshot, ParticipantId, PoolMode, PowerStatus};
use tracing::{info, warn};

use crate::domain::{
    Account, LedgerConfig, LedgerError, PurchaseReceipt, SaleReceipt, SolvencyOutcome,
};
use crate::ports::LedgerApi;

/// All participant accounts.
#[derive(Clone, Debug, Default)]
pub struct Ledger {
    config: LedgerConfig,
    accounts: Vec<Account>,
}

impl Ledger {
    /// Create an empty ledger.
    pub fn new(config: LedgerConfig) -> Result<Self, LedgerError> {
        config.validate()?;
        Ok(Self {
            config,
            accounts: Vec::new(),
        })
    }

    /// Mutable account lookup.
    pub fn account_mut(&mut self, id: &ParticipantId) -> Result<&mut Account, LedgerError> {
        self.accounts
            .iter_mut()
            .find(|account| account.id() == id)
            .ok_or_else(|| LedgerError::UnknownParticipant(id.clone()))
    }

    /// Every account, bankrupt ones included.
    pub fn accounts(&self) -> impl Iterator<Item = &Account> {
        self.accounts.iter()
    }

    /// Accounts still in play.
    pub fn active_accounts(&self) -> impl Iterator<Item = &Account> {
        self.accounts.iter().filter(|account| account.is_active())
    }

    /// Identities of accounts still in play.
    pub fn active_ids(&self) -> Vec<ParticipantId> {
        self.active_accounts().map(|a| a.id().clone()).collect()
    }

    /// Whether every account is bankrupt.
    pub fn all_bankrupt(&self) -> bool {
        self.active_accounts().next().is_none()
    }

    /// Number of registered accounts.
    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    /// Whether no account is registered.
    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }
}

impl LedgerApi for Ledger {
    fn open_account(&mut self, name: &str) -> Result<ParticipantId, LedgerError> {
        let id = ParticipantId::new(name);
        if id.is_empty() {
            return Err(LedgerError::InvalidQuantity(
                "participant name must not be empty".to_string(),
            ));
        }
        if self.accounts.iter().any(|account| account.id().matches(&id)) {
            return Err(LedgerError::DuplicateParticipant(id));
        }
        self.accounts.push(Account::with_daily_cap(
            id.clone(),
            self.config.starting_capital,
            self.config.daily_purchase_cap,
        ));
        info!(participant = %id, capital = self.config.starting_capital, "Account opened");
        Ok(id)
    }

    fn account(&self, id: &ParticipantId) -> Result<&Account, LedgerError> {
        self.accounts
            .iter()
            .find(|account| account.id() == id)
            .ok_or_else(|| LedgerError::UnknownParticipant(id.clone()))
    }

    fn begin_day(&mut self) {
        for account in self.accounts.iter_mut().filter(|a| a.is_active()) {
            account.begin_day();
        }
    }

    fn purchase_hardware(
        &mut self,
        id: &ParticipantId,
        units: u32,
    ) -> Result<PurchaseReceipt, LedgerError> {
        let unit_price = self.config.hardware_unit_price;
        self.account_mut(id)?
            .purchase_hardware(units, unit_price)
            .inspect_err(|err| warn!(participant = %id, units, error = %err, "Purchase rejected"))
    }

    fn sell_coins(
        &mut self,
        id: &ParticipantId,
        quantity: Coins,
        market_price: Cash,
    ) -> Result<SaleReceipt, LedgerError> {
        self.account_mut(id)?
            .sell_coins(quantity, market_price)
            .inspect_err(|err| warn!(participant = %id, quantity, error = %err, "Sale rejected"))
    }

    fn toggle_power(&mut self, id: &ParticipantId) -> Result<PowerStatus, LedgerError> {
        self.account_mut(id)?.toggle_power()
    }

    fn toggle_pool_mode(&mut self, id: &ParticipantId) -> Result<PoolMode, LedgerError> {
        self.account_mut(id)?.toggle_pool_mode()
    }

    fn charge_electricity(&mut self, unit_price: Cash) -> Vec<(ParticipantId, Cash)> {
        self.accounts
            .iter_mut()
            .filter_map(|account| {
                account
                    .charge_electricity(unit_price)
                    .map(|bill| (account.id().clone(), bill))
            })
            .collect()
    }

    fn miner_snapshot(&self) -> Vec<MinerSnapshot> {
        self.active_accounts()
            .map(|account| {
                MinerSnapshot::new(
                    account.id().clone(),
                    account.hardware_count(),
                    account.power_status(),
                    account.pool_mode(),
                )
            })
            .collect()
    }

    fn credit_awards(&mut self, awards: &[(ParticipantId, Coins)]) -> Result<(), LedgerError> {
        // Validate every recipient first so a bad award credits nobody.
        for (id, _) in awards {
            self.account(id)?;
        }
        for (id, amount) in awards {
            self.account_mut(id)?.credit_prize(*amount);
        }
        Ok(())
    }

    fn check_solvency(
        &mut self,
        market_price: Cash,
    ) -> Result<Vec<(ParticipantId, SolvencyOutcome)>, LedgerError> {
        let mut outcomes = Vec::new();
        for account in self.accounts.iter_mut().filter(|a| a.is_active()) {
            let outcome = account.check_solvency(market_price)?;
            outcomes.push((account.id().clone(), outcome));
        }
        Ok(outcomes)
    }

    fn config(&self) -> &LedgerConfig {
        &self.config
    }
}
