//! # Ports Module
//!
//! Inbound API and the outbound random source.

pub mod inbound;
pub mod outbound;

pub use inbound::LotteryApi;
pub use outbound::{RandomSource, RngSource, ScriptedDraws};
