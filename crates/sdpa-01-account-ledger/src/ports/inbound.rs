//! # Inbound Ports
//!
//! API trait defining what the Account Ledger can do for the day
//! orchestrator.

use crate::domain::{Account, LedgerConfig, LedgerError, PurchaseReceipt, SaleReceipt, SolvencyOutcome};
use shared_types::{Cash, Coins, MinerSnapshot, ParticipantId, PoolMode, PowerStatus};

/// Account Ledger API - inbound port.
///
/// Participant-level operations address accounts by [`ParticipantId`]; the
/// hardware price and daily cap come from the ledger's [`LedgerConfig`].
pub trait LedgerApi {
    /// Register a participant with the configured starting capital.
    fn open_account(&mut self, name: &str) -> Result<ParticipantId, LedgerError>;

    /// Look up an account.
    fn account(&self, id: &ParticipantId) -> Result<&Account, LedgerError>;

    /// Reset every active account's daily purchase counter.
    fn begin_day(&mut self);

    /// Buy hardware at the configured unit price.
    fn purchase_hardware(
        &mut self,
        id: &ParticipantId,
        units: u32,
    ) -> Result<PurchaseReceipt, LedgerError>;

    /// Sell coins at today's market price.
    fn sell_coins(
        &mut self,
        id: &ParticipantId,
        quantity: Coins,
        market_price: Cash,
    ) -> Result<SaleReceipt, LedgerError>;

    /// Flip a participant's hardware on or off.
    fn toggle_power(&mut self, id: &ParticipantId) -> Result<PowerStatus, LedgerError>;

    /// Flip a participant between solo and pooled mining.
    fn toggle_pool_mode(&mut self, id: &ParticipantId) -> Result<PoolMode, LedgerError>;

    /// Charge electricity to every active account. Returns the bills
    /// actually charged, in registration order.
    fn charge_electricity(&mut self, unit_price: Cash) -> Vec<(ParticipantId, Cash)>;

    /// Snapshot of every active account for the lottery.
    fn miner_snapshot(&self) -> Vec<MinerSnapshot>;

    /// Credit lottery awards.
    fn credit_awards(&mut self, awards: &[(ParticipantId, Coins)]) -> Result<(), LedgerError>;

    /// Run solvency checks on every active account, in registration order.
    fn check_solvency(
        &mut self,
        market_price: Cash,
    ) -> Result<Vec<(ParticipantId, SolvencyOutcome)>, LedgerError>;

    /// Current configuration.
    fn config(&self) -> &LedgerConfig;
}
