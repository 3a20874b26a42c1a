//! # Market Service
//!
//! Seedable random walk for the coin price plus a uniform electricity draw.

use rand::distributions::Uniform;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::{Distribution, Normal};
use shared_types::{Cash, Day};
use tracing::debug;

use crate::domain::{DailyPrices, MarketConfig, MarketError};
use crate::ports::PriceFeed;

/// Price generator.
#[derive(Clone, Debug)]
pub struct Market<R: Rng = StdRng> {
    config: MarketConfig,
    returns: Normal<f64>,
    electricity: Uniform<f64>,
    rng: R,
    day: Day,
    coin_price: Cash,
    last: Option<DailyPrices>,
}

impl Market<StdRng> {
    /// Deterministic market for reproducible runs.
    pub fn seeded(config: MarketConfig, seed: u64) -> Result<Self, MarketError> {
        Self::with_rng(config, StdRng::seed_from_u64(seed))
    }

    /// Market seeded from the operating system.
    pub fn from_entropy(config: MarketConfig) -> Result<Self, MarketError> {
        Self::with_rng(config, StdRng::from_entropy())
    }
}

impl<R: Rng> Market<R> {
    /// Create a market drawing from `rng`.
    pub fn with_rng(config: MarketConfig, rng: R) -> Result<Self, MarketError> {
        config.validate()?;
        let returns = Normal::new(config.return_mean, config.return_std_dev)
            .map_err(|e| MarketError::ConfigError(e.to_string()))?;
        let electricity = Uniform::new(config.electricity_min, config.electricity_max);
        Ok(Self {
            coin_price: config.initial_coin_price,
            config,
            returns,
            electricity,
            rng,
            day: 0,
            last: None,
        })
    }

    /// Current configuration.
    pub fn config(&self) -> &MarketConfig {
        &self.config
    }
}

impl<R: Rng> PriceFeed for Market<R> {
    fn next_day(&mut self) -> DailyPrices {
        self.day += 1;
        if self.day > 1 {
            let daily_return = self.returns.sample(&mut self.rng);
            self.coin_price *= 1.0 + daily_return;
        }
        let electricity_price = self.electricity.sample(&mut self.rng);
        let prices = DailyPrices {
            day: self.day,
            coin_price: self.coin_price,
            electricity_price,
        };
        debug!(
            day = prices.day,
            coin_price = prices.coin_price,
            electricity_price = prices.electricity_price,
            "Prices published"
        );
        self.last = Some(prices);
        prices
    }

    fn current(&self) -> Option<DailyPrices> {
        self.last
    }
}
