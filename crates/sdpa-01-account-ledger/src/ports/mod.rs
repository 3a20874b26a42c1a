//! # Ports Module
//!
//! Inbound API of the Account Ledger.

pub mod inbound;

pub use inbound::LedgerApi;
