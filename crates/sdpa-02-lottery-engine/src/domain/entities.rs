//! # Domain Entities
//!
//! Lottery configuration and the per-day power table.

use serde::{Deserialize, Serialize};

use super::errors::LotteryError;
use super::invariants::{DEFAULT_BASE_POOL_POWER, DEFAULT_DAILY_PRIZE};
use super::value_objects::Player;

/// Lottery configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LotteryConfig {
    /// Power always counted on the pool side.
    pub base_pool_power: u64,
    /// Coins minted per day.
    pub daily_prize: f64,
}

impl Default for LotteryConfig {
    fn default() -> Self {
        Self {
            base_pool_power: DEFAULT_BASE_POOL_POWER,
            daily_prize: DEFAULT_DAILY_PRIZE,
        }
    }
}

impl LotteryConfig {
    /// Create config for testing: a small floor so solo players win often.
    pub fn for_testing() -> Self {
        Self {
            base_pool_power: 10,
            daily_prize: 100.0,
        }
    }

    /// Validate configuration.
    pub fn validate(&self) -> Result<(), LotteryError> {
        if !self.daily_prize.is_finite() || self.daily_prize <= 0.0 {
            return Err(LotteryError::ConfigError(format!(
                "daily prize must be positive, got {}",
                self.daily_prize
            )));
        }
        Ok(())
    }
}

/// Power registered per player for one day, in draw order.
///
/// The pool is always the first entry. Solo players follow in the order
/// they were registered. Built fresh every day; never carried over.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PowerTable {
    base_pool_power: u64,
    entries: Vec<(Player, u64)>,
}

impl PowerTable {
    /// Start a table holding only the pool at its floor.
    pub fn new(base_pool_power: u64) -> Self {
        Self {
            base_pool_power,
            entries: vec![(Player::Pool, base_pool_power)],
        }
    }

    /// Add pooled power.
    pub fn add_pool_power(&mut self, power: u64) {
        self.entries[0].1 += power;
    }

    /// Register a solo player.
    pub fn register_solo(&mut self, player: Player, power: u64) {
        self.entries.push((player, power));
    }

    /// Entries in draw order.
    pub fn entries(&self) -> &[(Player, u64)] {
        &self.entries
    }

    /// The configured floor.
    pub fn base_pool_power(&self) -> u64 {
        self.base_pool_power
    }

    /// Pool power, floor included.
    pub fn pool_power(&self) -> u64 {
        self.entries[0].1
    }

    /// Whether any participant fed the pool today.
    pub fn pool_has_contributors(&self) -> bool {
        self.pool_power() != self.base_pool_power
    }

    /// Sum of every registered power.
    pub fn total_power(&self) -> u64 {
        self.entries.iter().map(|(_, power)| power).sum()
    }

    /// Power registered for a player (zero if absent).
    pub fn power_of(&self, player: &Player) -> u64 {
        self.entries
            .iter()
            .find(|(p, _)| p == player)
            .map(|(_, power)| *power)
            .unwrap_or(0)
    }

    /// Win probability for a player: `power / total_power`.
    pub fn probability(&self, player: &Player) -> Result<f64, LotteryError> {
        let total = self.total_power();
        if total == 0 {
            return Err(LotteryError::NoActivePower);
        }
        Ok(self.power_of(player) as f64 / total as f64)
    }
}
