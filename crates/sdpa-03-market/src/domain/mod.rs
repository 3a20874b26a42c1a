//! # Domain Module
//!
//! Market configuration, daily quotes and errors.

pub mod entities;
pub mod errors;

pub use entities::*;
pub use errors::*;
