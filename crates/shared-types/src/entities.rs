//! # Core Domain Entities
//!
//! Identity and status types shared across the simulation.
//!
//! ## Clusters
//!
//! - **Identity**: `ParticipantId`
//! - **Mining status**: `PowerStatus`, `PoolMode`, `Solvency`
//! - **Lottery boundary**: `MinerSnapshot`

use std::fmt;

use serde::{Deserialize, Serialize};

/// An amount of fiat currency (GBP).
pub type Cash = f64;

/// An amount of SDPA coin.
pub type Coins = f64;

/// A one-based trading day number.
pub type Day = u32;

// =============================================================================
// IDENTITY
// =============================================================================

/// Unique participant name.
///
/// Equality is exact. Case-insensitive handling is a display and
/// registration concern (see [`ParticipantId::matches`]).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ParticipantId(String);

impl ParticipantId {
    /// Create an identifier from a name. Surrounding whitespace is trimmed.
    pub fn new(name: impl AsRef<str>) -> Self {
        Self(name.as_ref().trim().to_string())
    }

    /// The raw name.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether the name is empty after trimming.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Case-insensitive comparison, used to reject duplicate registrations.
    pub fn matches(&self, other: &ParticipantId) -> bool {
        self.0.to_lowercase() == other.0.to_lowercase()
    }

    /// Name with the first letter upper-cased and the rest lower-cased.
    pub fn display_name(&self) -> String {
        let mut chars = self.0.chars();
        match chars.next() {
            Some(first) => first
                .to_uppercase()
                .chain(chars.flat_map(char::to_lowercase))
                .collect(),
            None => String::new(),
        }
    }
}

impl fmt::Display for ParticipantId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ParticipantId {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

// =============================================================================
// MINING STATUS
// =============================================================================

/// Whether a participant's hardware is running.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum PowerStatus {
    /// Hardware produces mining power and draws electricity.
    On,
    /// Hardware is idle.
    #[default]
    Off,
}

impl PowerStatus {
    /// The opposite status.
    pub fn toggled(self) -> Self {
        match self {
            Self::On => Self::Off,
            Self::Off => Self::On,
        }
    }

    /// Whether the hardware is running.
    pub fn is_on(self) -> bool {
        matches!(self, Self::On)
    }
}

impl fmt::Display for PowerStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::On => f.write_str("on"),
            Self::Off => f.write_str("off"),
        }
    }
}

/// How a participant competes in the daily lottery.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum PoolMode {
    /// Competes individually.
    #[default]
    Solo,
    /// Merges power into the aggregate mining pool.
    Pooled,
}

impl PoolMode {
    /// The opposite mode.
    pub fn toggled(self) -> Self {
        match self {
            Self::Solo => Self::Pooled,
            Self::Pooled => Self::Solo,
        }
    }
}

impl fmt::Display for PoolMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Solo => f.write_str("solo"),
            Self::Pooled => f.write_str("pooled"),
        }
    }
}

/// Account solvency. `Bankrupt` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Solvency {
    /// Participates in trading and mining.
    #[default]
    Active,
    /// Frozen and removed from play.
    Bankrupt,
}

impl Solvency {
    /// Whether the account is still in play.
    pub fn is_active(self) -> bool {
        matches!(self, Self::Active)
    }
}

// =============================================================================
// LOTTERY BOUNDARY
// =============================================================================

/// The per-participant tuple the lottery consumes.
///
/// Only active participants are ever snapshotted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MinerSnapshot {
    /// Who owns the hardware.
    pub participant: ParticipantId,
    /// Units owned.
    pub hardware_count: u32,
    /// Whether the units are running.
    pub power_status: PowerStatus,
    /// Solo or pooled.
    pub pool_mode: PoolMode,
}

impl MinerSnapshot {
    /// Create a snapshot entry.
    pub fn new(
        participant: ParticipantId,
        hardware_count: u32,
        power_status: PowerStatus,
        pool_mode: PoolMode,
    ) -> Self {
        Self {
            participant,
            hardware_count,
            power_status,
            pool_mode,
        }
    }

    /// Power this entry contributes today: zero when switched off.
    pub fn effective_power(&self) -> u64 {
        if self.power_status.is_on() {
            u64::from(self.hardware_count)
        } else {
            0
        }
    }

    /// Whether this entry feeds the mining pool today.
    pub fn is_pool_contributor(&self) -> bool {
        self.power_status.is_on() && self.pool_mode == PoolMode::Pooled
    }
}
