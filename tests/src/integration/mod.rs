//! Integration flows across the ledger, lottery, market and runtime.

pub mod end_to_end;
pub mod fairness;
pub mod reproducibility;
