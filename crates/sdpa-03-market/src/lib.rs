//! # SDPA-03 Market
//!
//! Daily coin and electricity prices.
//!
//! **Subsystem ID:** 03
//! **Architecture:** Hexagonal (DDD + Ports/Adapters)
//!
//! ## Price Model
//!
//! | Quantity | Day 1 | Later days |
//! |----------|-------|------------|
//! | Coin price | initial price (50.0) | previous × (1 + N(0.01, 0.005)) |
//! | Electricity | U(1.5, 3.5) | U(1.5, 3.5) |
//!
//! ## Module Structure
//!
//! ```text
//! sdpa-03-market/
//! ├── domain/      # MarketConfig, DailyPrices, MarketError
//! ├── ports/       # PriceFeed + FixedPrices mock
//! └── service.rs   # Market (seedable random walk)
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod domain;
pub mod ports;
pub mod service;

// Re-exports
pub use domain::{
    DailyPrices, MarketConfig, MarketError, DEFAULT_ELECTRICITY_MAX, DEFAULT_ELECTRICITY_MIN,
    DEFAULT_INITIAL_COIN_PRICE, DEFAULT_RETURN_MEAN, DEFAULT_RETURN_STD_DEV,
};
pub use ports::{FixedPrices, PriceFeed};
pub use service::Market;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
