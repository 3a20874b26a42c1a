//! # Simulation Configuration
//!
//! Unified configuration for the subsystems and the run itself.
//!
//! Defaults are overridden from the environment:
//!
//! | Variable | Field |
//! |----------|-------|
//! | `SDPA_DAYS` | `days` |
//! | `SDPA_PARTICIPANTS` | `participants` (comma separated) |
//! | `SDPA_SEED` | `seed` |
//! | `SDPA_STARTING_CAPITAL` | `ledger.starting_capital` |
//! | `SDPA_HARDWARE_PRICE` | `ledger.hardware_unit_price` |
//! | `SDPA_DAILY_CAP` | `ledger.daily_purchase_cap` |
//! | `SDPA_DAILY_PRIZE` | `lottery.daily_prize` |
//! | `SDPA_POOL_FLOOR` | `lottery.base_pool_power` |

use std::env;
use std::str::FromStr;

use sdpa_01_account_ledger::{LedgerConfig, LedgerError};
use sdpa_02_lottery_engine::{LotteryConfig, LotteryError};
use sdpa_03_market::{MarketConfig, MarketError};
use serde::{Deserialize, Serialize};
use shared_types::{Day, ParticipantId};
use thiserror::Error;

/// Shortest run accepted.
pub const MIN_DAYS: Day = 7;

/// Fewest participants accepted.
pub const MIN_PARTICIPANTS: usize = 2;

/// Complete simulation configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Trading days to play. `None` means ask at startup.
    pub days: Option<Day>,
    /// Participant names in turn order. Empty means ask at startup.
    pub participants: Vec<String>,
    /// Seed for prices and draws. `None` seeds from the OS.
    pub seed: Option<u64>,
    /// Account ledger configuration.
    pub ledger: LedgerConfig,
    /// Lottery configuration.
    pub lottery: LotteryConfig,
    /// Market configuration.
    pub market: MarketConfig,
}

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// An environment variable did not parse.
    #[error("Invalid value for {key}: '{value}'")]
    InvalidValue {
        /// Variable name
        key: String,
        /// Raw value
        value: String,
    },

    /// Day count missing.
    #[error("Number of days not set")]
    MissingDays,

    /// Run shorter than the minimum.
    #[error("At least {min} days are required, got {days}")]
    TooFewDays {
        /// Requested days
        days: Day,
        /// Minimum
        min: Day,
    },

    /// Fewer participants than the minimum.
    #[error("At least {min} participants are required, got {count}")]
    TooFewParticipants {
        /// Names supplied
        count: usize,
        /// Minimum
        min: usize,
    },

    /// Blank participant name.
    #[error("Participant names must not be empty")]
    EmptyName,

    /// Two names equal ignoring case.
    #[error("Duplicate participant name: {0}")]
    DuplicateName(String),

    /// Ledger section rejected.
    #[error("Ledger configuration: {0}")]
    Ledger(#[from] LedgerError),

    /// Lottery section rejected.
    #[error("Lottery configuration: {0}")]
    Lottery(#[from] LotteryError),

    /// Market section rejected.
    #[error("Market configuration: {0}")]
    Market(#[from] MarketError),
}

impl SimulationConfig {
    /// Load configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(days) = parse_var(&lookup, "SDPA_DAYS")? {
            config.days = Some(days);
        }
        if let Some(names) = lookup("SDPA_PARTICIPANTS") {
            config.participants = names
                .split(',')
                .map(str::trim)
                .filter(|name| !name.is_empty())
                .map(str::to_string)
                .collect();
        }
        config.seed = parse_var(&lookup, "SDPA_SEED")?;

        if let Some(capital) = parse_var(&lookup, "SDPA_STARTING_CAPITAL")? {
            config.ledger.starting_capital = capital;
        }
        if let Some(price) = parse_var(&lookup, "SDPA_HARDWARE_PRICE")? {
            config.ledger.hardware_unit_price = price;
        }
        if let Some(cap) = parse_var(&lookup, "SDPA_DAILY_CAP")? {
            config.ledger.daily_purchase_cap = cap;
        }
        if let Some(prize) = parse_var(&lookup, "SDPA_DAILY_PRIZE")? {
            config.lottery.daily_prize = prize;
        }
        if let Some(floor) = parse_var(&lookup, "SDPA_POOL_FLOOR")? {
            config.lottery.base_pool_power = floor;
        }

        Ok(config)
    }

    /// Small deterministic configuration for tests.
    pub fn for_testing(names: &[&str]) -> Self {
        Self {
            days: Some(MIN_DAYS),
            participants: names.iter().map(|name| name.to_string()).collect(),
            seed: Some(42),
            ..Self::default()
        }
    }

    /// Days to play. Fails if not yet chosen.
    pub fn days(&self) -> Result<Day, ConfigError> {
        self.days.ok_or(ConfigError::MissingDays)
    }

    /// Validate the complete configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let days = self.days()?;
        if days < MIN_DAYS {
            return Err(ConfigError::TooFewDays {
                days,
                min: MIN_DAYS,
            });
        }
        if self.participants.len() < MIN_PARTICIPANTS {
            return Err(ConfigError::TooFewParticipants {
                count: self.participants.len(),
                min: MIN_PARTICIPANTS,
            });
        }
        let mut seen: Vec<ParticipantId> = Vec::with_capacity(self.participants.len());
        for name in &self.participants {
            let id = ParticipantId::new(name);
            if id.is_empty() {
                return Err(ConfigError::EmptyName);
            }
            if seen.iter().any(|other| other.matches(&id)) {
                return Err(ConfigError::DuplicateName(id.to_string()));
            }
            seen.push(id);
        }

        self.ledger.validate()?;
        self.lottery.validate()?;
        self.market.validate()?;
        Ok(())
    }
}

fn parse_var<T: FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &str,
) -> Result<Option<T>, ConfigError> {
    lookup(key)
        .map(|value| {
            value.trim().parse().map_err(|_| ConfigError::InvalidValue {
                key: key.to_string(),
                value,
            })
        })
        .transpose()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_empty_environment_uses_defaults() {
        let config = SimulationConfig::from_lookup(|_| None).unwrap();
        assert_eq!(config.days, None);
        assert!(config.participants.is_empty());
        assert_eq!(config.ledger.starting_capital, 50_000.0);
        assert_eq!(config.lottery.base_pool_power, 1000);
    }

    #[test]
    fn test_environment_overrides() {
        let config = SimulationConfig::from_lookup(lookup_from(&[
            ("SDPA_DAYS", "10"),
            ("SDPA_PARTICIPANTS", "alice, bob ,,carol"),
            ("SDPA_SEED", "7"),
            ("SDPA_HARDWARE_PRICE", "450.5"),
            ("SDPA_DAILY_CAP", "4"),
            ("SDPA_DAILY_PRIZE", "25"),
            ("SDPA_POOL_FLOOR", "0"),
        ]))
        .unwrap();
        assert_eq!(config.days, Some(10));
        assert_eq!(config.participants, vec!["alice", "bob", "carol"]);
        assert_eq!(config.seed, Some(7));
        assert_eq!(config.ledger.hardware_unit_price, 450.5);
        assert_eq!(config.ledger.daily_purchase_cap, 4);
        assert_eq!(config.lottery.daily_prize, 25.0);
        assert_eq!(config.lottery.base_pool_power, 0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_malformed_value_reported() {
        let err = SimulationConfig::from_lookup(lookup_from(&[("SDPA_DAYS", "week")]))
            .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { ref key, .. } if key == "SDPA_DAYS"));
    }

    #[test]
    fn test_validate_minimum_days() {
        let mut config = SimulationConfig::for_testing(&["alice", "bob"]);
        config.days = Some(6);
        assert!(matches!(
            config.validate(),
            Err(ConfigError::TooFewDays { days: 6, min: 7 })
        ));
        config.days = None;
        assert!(matches!(config.validate(), Err(ConfigError::MissingDays)));
    }

    #[test]
    fn test_validate_minimum_participants() {
        let config = SimulationConfig::for_testing(&["alice"]);
        assert!(matches!(
            config.validate(),
            Err(ConfigError::TooFewParticipants { count: 1, min: 2 })
        ));
    }

    #[test]
    fn test_validate_duplicate_names_case_insensitive() {
        let config = SimulationConfig::for_testing(&["alice", "Alice"]);
        assert!(matches!(
            config.validate(),
            Err(ConfigError::DuplicateName(_))
        ));
    }

    #[test]
    fn test_validate_subsystem_sections() {
        let mut config = SimulationConfig::for_testing(&["alice", "bob"]);
        config.ledger.daily_purchase_cap = 0;
        assert!(matches!(config.validate(), Err(ConfigError::Ledger(_))));

        let mut config = SimulationConfig::for_testing(&["alice", "bob"]);
        config.lottery.daily_prize = 0.0;
        assert!(matches!(config.validate(), Err(ConfigError::Lottery(_))));
    }
}
