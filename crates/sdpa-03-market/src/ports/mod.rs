//! # Ports Module
//!
//! The price feed consumed by the day orchestrator.

pub mod outbound;

pub use outbound::{FixedPrices, PriceFeed};
