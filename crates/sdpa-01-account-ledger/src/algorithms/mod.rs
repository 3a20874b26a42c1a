//! # Algorithms Module
//!
//! Ledger arithmetic that is worth isolating from the entity.

pub mod liquidation;

pub use liquidation::liquidation_quantity;
