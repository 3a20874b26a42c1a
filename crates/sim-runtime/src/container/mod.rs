//! # Simulation Container
//!
//! Configuration and the mutable state carried from day to day.

pub mod config;
pub mod state;

pub use config::{ConfigError, SimulationConfig, MIN_DAYS, MIN_PARTICIPANTS};
pub use state::SimulationState;
