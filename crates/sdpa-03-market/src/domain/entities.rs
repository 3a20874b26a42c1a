//! # Domain Entities
//!
//! Market configuration and the quote published each day.

use serde::{Deserialize, Serialize};
use shared_types::{Cash, Day};

use super::errors::MarketError;

/// Coin price on day 1.
pub const DEFAULT_INITIAL_COIN_PRICE: Cash = 50.0;
/// Mean of the daily coin return.
pub const DEFAULT_RETURN_MEAN: f64 = 0.01;
/// Standard deviation of the daily coin return.
pub const DEFAULT_RETURN_STD_DEV: f64 = 0.005;
/// Lower bound of the electricity unit price.
pub const DEFAULT_ELECTRICITY_MIN: Cash = 1.5;
/// Upper bound of the electricity unit price.
pub const DEFAULT_ELECTRICITY_MAX: Cash = 3.5;

/// Market configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MarketConfig {
    /// Coin price on day 1.
    pub initial_coin_price: Cash,
    /// Mean of the daily multiplicative return.
    pub return_mean: f64,
    /// Standard deviation of the daily multiplicative return.
    pub return_std_dev: f64,
    /// Electricity price lower bound.
    pub electricity_min: Cash,
    /// Electricity price upper bound (exclusive).
    pub electricity_max: Cash,
}

impl Default for MarketConfig {
    fn default() -> Self {
        Self {
            initial_coin_price: DEFAULT_INITIAL_COIN_PRICE,
            return_mean: DEFAULT_RETURN_MEAN,
            return_std_dev: DEFAULT_RETURN_STD_DEV,
            electricity_min: DEFAULT_ELECTRICITY_MIN,
            electricity_max: DEFAULT_ELECTRICITY_MAX,
        }
    }
}

impl MarketConfig {
    /// Validate configuration.
    pub fn validate(&self) -> Result<(), MarketError> {
        if !self.initial_coin_price.is_finite() || self.initial_coin_price <= 0.0 {
            return Err(MarketError::ConfigError(format!(
                "initial coin price must be positive, got {}",
                self.initial_coin_price
            )));
        }
        if !self.return_mean.is_finite() {
            return Err(MarketError::ConfigError(
                "return mean must be finite".to_string(),
            ));
        }
        if !self.return_std_dev.is_finite() || self.return_std_dev < 0.0 {
            return Err(MarketError::ConfigError(format!(
                "return standard deviation must be non-negative, got {}",
                self.return_std_dev
            )));
        }
        if !self.electricity_min.is_finite() || self.electricity_min <= 0.0 {
            return Err(MarketError::ConfigError(format!(
                "electricity lower bound must be positive, got {}",
                self.electricity_min
            )));
        }
        if !self.electricity_max.is_finite() || self.electricity_max <= self.electricity_min {
            return Err(MarketError::ConfigError(format!(
                "electricity bounds must satisfy min < max, got [{}, {})",
                self.electricity_min, self.electricity_max
            )));
        }
        Ok(())
    }
}

/// Prices in force for one day.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct DailyPrices {
    /// Day number, starting at 1.
    pub day: Day,
    /// Cash per coin.
    pub coin_price: Cash,
    /// Cash per powered hardware unit.
    pub electricity_price: Cash,
}
