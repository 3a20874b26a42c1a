//! # Domain Module
//!
//! Core domain types for the Account Ledger subsystem.

pub mod entities;
pub mod errors;
pub mod invariants;
pub mod quantity;
pub mod value_objects;

pub use entities::*;
pub use errors::*;
pub use invariants::*;
pub use quantity::*;
pub use value_objects::*;
