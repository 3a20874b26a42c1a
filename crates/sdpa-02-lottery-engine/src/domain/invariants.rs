//! # Domain Invariants
//!
//! Rules every lottery outcome must satisfy.

use super::errors::LotteryError;
use super::value_objects::{LotteryOutcome, Player};

/// Power always counted on the pool side.
pub const DEFAULT_BASE_POOL_POWER: u64 = 1000;

/// Coins minted per day.
pub const DEFAULT_DAILY_PRIZE: f64 = 100.0;

/// Floating-point tolerance for prize accounting.
pub const PRIZE_TOLERANCE: f64 = 1e-9;

/// Invariant: awarded coins plus the undistributed remainder equal the
/// daily prize, and a solo win pays its winner the whole prize.
pub fn invariant_prize_conserved(
    outcome: &LotteryOutcome,
    daily_prize: f64,
) -> Result<(), LotteryError> {
    let accounted = outcome.total_awarded() + outcome.undistributed;
    if (accounted - daily_prize).abs() > PRIZE_TOLERANCE * daily_prize.max(1.0) {
        return Err(LotteryError::InvariantViolation(format!(
            "prize not conserved: {} awarded + {} undistributed != {}",
            outcome.total_awarded(),
            outcome.undistributed,
            daily_prize
        )));
    }
    if let Player::Solo(id) = &outcome.winner {
        let paid = outcome.award_for(id).unwrap_or(0.0);
        if outcome.awards.len() != 1 || (paid - daily_prize).abs() > PRIZE_TOLERANCE {
            return Err(LotteryError::InvariantViolation(format!(
                "solo winner {} must receive the whole prize",
                id
            )));
        }
    }
    Ok(())
}
