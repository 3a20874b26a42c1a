//! # Lottery Engine Service
//!
//! Stateless implementation of [`LotteryApi`]: every call builds its own
//! power table from the snapshot it is given.

use shared_types::MinerSnapshot;
use tracing::{debug, info};

use crate::algorithms::{build_power_table, cumulative_distribution, select_winner, split_prize};
use crate::domain::{LotteryConfig, LotteryError, LotteryOutcome, Player};
use crate::ports::{LotteryApi, RandomSource};

/// Daily weighted lottery.
#[derive(Clone, Debug, Default)]
pub struct LotteryEngine {
    config: LotteryConfig,
}

impl LotteryEngine {
    /// Create an engine with a validated configuration.
    pub fn new(config: LotteryConfig) -> Result<Self, LotteryError> {
        config.validate()?;
        Ok(Self { config })
    }
}

impl LotteryApi for LotteryEngine {
    fn draw(
        &self,
        snapshot: &[MinerSnapshot],
        source: &mut dyn RandomSource,
    ) -> Result<LotteryOutcome, LotteryError> {
        let table = build_power_table(snapshot, self.config.base_pool_power);
        let total_power = table.total_power();
        if total_power == 0 {
            return Err(LotteryError::NoActivePower);
        }

        let draw = source.next_unit();
        let winner = select_winner(&table, draw)?;
        let (awards, undistributed) = split_prize(&winner, &table, snapshot, self.config.daily_prize);

        debug!(
            pool_power = table.pool_power(),
            solo_players = table.entries().len() - 1,
            total_power,
            "Power table built"
        );
        info!(
            winner = %winner,
            draw,
            total_power,
            recipients = awards.len(),
            undistributed,
            "Lottery drawn"
        );

        Ok(LotteryOutcome {
            winner,
            draw,
            total_power,
            awards,
            undistributed,
        })
    }

    fn win_probabilities(&self, snapshot: &[MinerSnapshot]) -> Result<Vec<(Player, f64)>, LotteryError> {
        let table = build_power_table(snapshot, self.config.base_pool_power);
        cumulative_distribution(&table)?;
        table
            .entries()
            .iter()
            .map(|(player, _)| Ok((player.clone(), table.probability(player)?)))
            .collect()
    }

    fn config(&self) -> &LotteryConfig {
        &self.config
    }
}
