//! # SDPA-02 Lottery Engine
//!
//! Single weighted draw per day, proportional to mining power.
//!
//! **Subsystem ID:** 02
//! **Architecture:** Hexagonal (DDD + Ports/Adapters)
//!
//! ## Purpose
//!
//! Given the day's miner snapshot:
//! - Build the power table: the pool (base floor + pooled, powered units)
//!   first, then every powered solo miner in registration order
//! - Draw `r ~ U(0, 1)` and pick the player whose cumulative interval
//!   `(prev, cum]` contains `r`
//! - Award the whole prize to a solo winner, or split it pro-rata across
//!   pool contributors (divided by pool power *including* the floor)
//!
//! The engine is stateless: every call gets a fresh snapshot and a random
//! source supplied by the caller.
//!
//! ## Module Structure
//!
//! ```text
//! sdpa-02-lottery-engine/
//! ├── domain/          # LotteryConfig, Player, PowerTable, outcomes, errors
//! ├── algorithms/      # Power table build, weighted draw, prize split
//! ├── ports/           # LotteryApi + RandomSource (seeded and scripted)
//! └── service.rs       # LotteryEngine
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod algorithms;
pub mod domain;
pub mod ports;
pub mod service;

// Re-exports
pub use algorithms::{build_power_table, cumulative_distribution, select_winner, split_prize};
pub use domain::{
    invariant_prize_conserved, LotteryConfig, LotteryError, LotteryOutcome, Player, PowerTable,
    PrizeAward, DEFAULT_BASE_POOL_POWER, DEFAULT_DAILY_PRIZE,
};
pub use ports::{LotteryApi, RandomSource, RngSource, ScriptedDraws};
pub use service::LotteryEngine;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
