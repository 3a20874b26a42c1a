//! # Shared Types Crate
//!
//! This crate contains the types that cross subsystem boundaries in the
//! SDPA mining simulation.
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: participant identity and the mining enums are
//!   defined once and reused by the ledger, the lottery and the runtime.
//! - **Closed Enumerations**: power, pooling and solvency are enums, never
//!   strings, so invalid states cannot be represented.
//! - **Snapshot Boundary**: the lottery only ever sees [`MinerSnapshot`]
//!   values, never a live account.

pub mod entities;

pub use entities::*;
