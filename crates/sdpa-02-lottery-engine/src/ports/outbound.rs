//! # Outbound Ports
//!
//! The uniform random source the draw depends on.

use std::collections::VecDeque;

use rand::distributions::Open01;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Uniform source over the open interval `(0, 1)`.
pub trait RandomSource {
    /// Next uniform value, strictly between 0 and 1.
    fn next_unit(&mut self) -> f64;
}

/// [`RandomSource`] backed by any `rand` generator.
#[derive(Clone, Debug)]
pub struct RngSource<R: Rng> {
    rng: R,
}

impl<R: Rng> RngSource<R> {
    /// Wrap an existing generator.
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RngSource<StdRng> {
    /// Deterministic source for reproducible runs and tests.
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    /// Source seeded from the operating system.
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }
}

impl<R: Rng> RandomSource for RngSource<R> {
    fn next_unit(&mut self) -> f64 {
        self.rng.sample(Open01)
    }
}

// =============================================================================
// Mock Implementations for Testing
// =============================================================================

/// Replays a fixed list of draws, then repeats the last one.
#[derive(Clone, Debug, Default)]
pub struct ScriptedDraws {
    draws: VecDeque<f64>,
    last: Option<f64>,
}

impl ScriptedDraws {
    /// Create a source that yields `draws` in order.
    pub fn new(draws: impl IntoIterator<Item = f64>) -> Self {
        Self {
            draws: draws.into_iter().collect(),
            last: None,
        }
    }
}

impl RandomSource for ScriptedDraws {
    fn next_unit(&mut self) -> f64 {
        let value = self.draws.pop_front().or(self.last).unwrap_or(0.5);
        self.last = Some(value);
        value
    }
}
