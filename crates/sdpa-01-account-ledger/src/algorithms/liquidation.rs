//! # Liquidation Quantity
//!
//! Minimum coin sale that clears a cash deficit at the given price.
//!
//! The raw quantity `deficit / price` is rounded **up** to the nearest
//! hundredth. A quotient that is a whole hundredth up to floating-point
//! noise (`0.07 / 1.0 * 100.0 == 7.000000000000001`) is taken as exact, so
//! the quantity stays the minimum that covers the deficit.

use crate::domain::{LIQUIDATION_PRECISION, LIQUIDATION_SNAP_TOLERANCE};
use shared_types::{Cash, Coins};

/// Coins that must be sold at `market_price` to cover `deficit`.
///
/// `deficit` is the positive amount by which cash is below zero. Returns
/// `0.0` for a non-positive deficit.
pub fn liquidation_quantity(deficit: Cash, market_price: Cash) -> Coins {
    if deficit <= 0.0 {
        return 0.0;
    }
    let scaled = deficit / market_price * LIQUIDATION_PRECISION;
    let nearest = scaled.round();
    let steps = if (scaled - nearest).abs() <= LIQUIDATION_SNAP_TOLERANCE * nearest.max(1.0) {
        nearest
    } else {
        scaled.ceil()
    };
    steps / LIQUIDATION_PRECISION
}
