//! # Algorithms Module
//!
//! The three steps of a daily draw.

pub mod power_table;
pub mod prize_split;
pub mod weighted_draw;

pub use power_table::build_power_table;
pub use prize_split::split_prize;
pub use weighted_draw::{cumulative_distribution, select_winner};
