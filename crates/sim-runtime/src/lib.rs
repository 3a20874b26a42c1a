//! # Simulation Runtime Library
//!
//! Wires the ledger, lottery and market subsystems into the daily trading
//! loop. The interactive entry point is the `sdpa-sim` binary.
//!
//! ## Modular Structure
//!
//! - `container/` - Configuration and day-to-day state
//! - `adapters/` - Action sources (console, scripted)
//! - `orchestrator` - The per-day sequence
//! - `activity` - Event log and its JSON dump
//! - `report` - Daily and final summaries

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod activity;
pub mod adapters;
pub mod container;
pub mod error;
pub mod orchestrator;
pub mod report;

pub use activity::{ActivityKind, ActivityLog, ActivityRecord};
pub use adapters::{Action, ActionSource, ConsoleActions, MenuChoice, ScriptedActions, TurnContext};
pub use container::{ConfigError, SimulationConfig, SimulationState, MIN_DAYS, MIN_PARTICIPANTS};
pub use error::RuntimeError;
pub use orchestrator::Simulation;
pub use report::{
    DailyReport, DayActivity, FinalReport, FinalStanding, ParticipantDaySummary, ParticipantFinal,
};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
