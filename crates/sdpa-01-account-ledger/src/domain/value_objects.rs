//! # Domain Value Objects
//!
//! Receipts and outcomes returned by ledger operations.

use serde::{Deserialize, Serialize};
use shared_types::{Cash, Coins};

/// Result of a hardware purchase.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct PurchaseReceipt {
    /// Units bought. Zero for a cancelled purchase.
    pub units: u32,
    /// Cash spent.
    pub cost: Cash,
}

impl PurchaseReceipt {
    /// The receipt for a zero-unit purchase.
    pub fn cancelled() -> Self {
        Self {
            units: 0,
            cost: 0.0,
        }
    }

    /// Whether nothing was bought.
    pub fn is_cancelled(&self) -> bool {
        self.units == 0
    }
}

/// Result of a coin sale.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SaleReceipt {
    /// Coins sold. Zero for a cancelled sale.
    pub quantity: Coins,
    /// Cash received.
    pub proceeds: Cash,
}

impl SaleReceipt {
    /// The receipt for a zero-coin sale.
    pub fn cancelled() -> Self {
        Self {
            quantity: 0.0,
            proceeds: 0.0,
        }
    }

    /// Whether nothing was sold.
    pub fn is_cancelled(&self) -> bool {
        self.quantity == 0.0
    }
}

/// Outcome of an end-of-day solvency check.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum SolvencyOutcome {
    /// Cash was non-negative; nothing happened.
    Solvent,
    /// Coins were force-sold to clear the deficit.
    Liquidated {
        /// Coins sold (rounded up to the hundredth).
        coins_sold: Coins,
        /// Cash raised.
        proceeds: Cash,
    },
    /// Coins could not cover the deficit. Terminal.
    Bankrupt {
        /// Cash deficit at the time of the check (zero on repeated checks).
        deficit: Cash,
    },
}

impl SolvencyOutcome {
    /// Whether the participant leaves play.
    pub fn is_bankrupt(&self) -> bool {
        matches!(self, Self::Bankrupt { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cancelled_receipts() {
        assert!(PurchaseReceipt::cancelled().is_cancelled());
        assert!(SaleReceipt::cancelled().is_cancelled());
    }

    #[test]
    fn test_bankrupt_outcome() {
        assert!(SolvencyOutcome::Bankrupt { deficit: 10.0 }.is_bankrupt());
        assert!(!SolvencyOutcome::Solvent.is_bankrupt());
    }
}
