//! # SDPA Test Suite
//!
//! Cross-subsystem flows driven through the day orchestrator.
//!
//! ## Structure
//!
//! ```text
//! tests/src/
//! └── integration/
//!     ├── end_to_end.rs      # Full runs: purchases, prizes, liquidation, bankruptcy
//!     ├── fairness.rs        # Ledger snapshot → lottery win rates and pool splits
//!     └── reproducibility.rs # Env config → seeded runs
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test -p sdpa-tests
//! cargo test -p sdpa-tests integration::fairness
//! ```

pub mod integration;
