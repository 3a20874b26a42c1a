//! # Outbound Ports
//!
//! Source of daily prices for the simulation.

use shared_types::{Cash, Day};

use crate::domain::DailyPrices;

/// Publishes one quote per day, in order.
pub trait PriceFeed {
    /// Advance to the next day and return its prices.
    fn next_day(&mut self) -> DailyPrices;

    /// Prices most recently published, if any.
    fn current(&self) -> Option<DailyPrices>;
}

// =============================================================================
// Mock Implementations for Testing
// =============================================================================

/// Constant prices every day.
#[derive(Clone, Debug)]
pub struct FixedPrices {
    coin_price: Cash,
    electricity_price: Cash,
    day: Day,
}

impl FixedPrices {
    /// Quote the same coin and electricity price forever.
    pub fn new(coin_price: Cash, electricity_price: Cash) -> Self {
        Self {
            coin_price,
            electricity_price,
            day: 0,
        }
    }
}

impl PriceFeed for FixedPrices {
    fn next_day(&mut self) -> DailyPrices {
        self.day += 1;
        DailyPrices {
            day: self.day,
            coin_price: self.coin_price,
            electricity_price: self.electricity_price,
        }
    }

    fn current(&self) -> Option<DailyPrices> {
        (self.day > 0).then_some(DailyPrices {
            day: self.day,
            coin_price: self.coin_price,
            electricity_price: self.electricity_price,
        })
    }
}
