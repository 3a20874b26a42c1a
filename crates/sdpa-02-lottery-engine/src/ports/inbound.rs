//! # Inbound Ports
//!
//! API trait defining what the Lottery Engine can do.

use crate::domain::{LotteryConfig, LotteryError, LotteryOutcome, Player};
use crate::ports::outbound::RandomSource;
use shared_types::MinerSnapshot;

/// Lottery Engine API - inbound port.
pub trait LotteryApi {
    /// Run the day's single draw over a fresh snapshot of active miners.
    fn draw(
        &self,
        snapshot: &[MinerSnapshot],
        source: &mut dyn RandomSource,
    ) -> Result<LotteryOutcome, LotteryError>;

    /// Win probability of every registered player, in draw order.
    fn win_probabilities(&self, snapshot: &[MinerSnapshot]) -> Result<Vec<(Player, f64)>, LotteryError>;

    /// Current configuration.
    fn config(&self) -> &LotteryConfig;
}
