//! # Domain Value Objects
//!
//! Players, awards and draw outcomes.

use std::fmt;

use serde::{Deserialize, Serialize};
use shared_types::{Coins, ParticipantId};

/// A lottery player: the aggregate pool or an individual solo miner.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    /// The mining pool (base floor plus every pooled, powered unit).
    Pool,
    /// A solo miner.
    Solo(ParticipantId),
}

impl Player {
    /// Whether this is the pool.
    pub fn is_pool(&self) -> bool {
        matches!(self, Self::Pool)
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pool => f.write_str("pooled"),
            Self::Solo(id) => write!(f, "{}", id),
        }
    }
}

/// Coins awarded to one participant.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PrizeAward {
    /// Recipient.
    pub participant: ParticipantId,
    /// Coins awarded.
    pub amount: Coins,
}

impl PrizeAward {
    /// Create an award.
    pub fn new(participant: ParticipantId, amount: Coins) -> Self {
        Self {
            participant,
            amount,
        }
    }
}

/// Result of one daily draw.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LotteryOutcome {
    /// The winning player.
    pub winner: Player,
    /// The uniform value that decided the draw.
    pub draw: f64,
    /// Sum of all registered power, pool floor included.
    pub total_power: u64,
    /// Coins per participant. Empty when the pool wins with no contributor.
    pub awards: Vec<PrizeAward>,
    /// Part of the prize that reached nobody (the floor's share of a pool
    /// win).
    pub undistributed: Coins,
}

impl LotteryOutcome {
    /// Sum of all awards.
    pub fn total_awarded(&self) -> Coins {
        self.awards.iter().map(|award| award.amount).sum()
    }

    /// Award for one participant, if any.
    pub fn award_for(&self, participant: &ParticipantId) -> Option<Coins> {
        self.awards
            .iter()
            .find(|award| &award.participant == participant)
            .map(|award| award.amount)
    }

    /// Awards as `(participant, amount)` pairs for crediting.
    pub fn award_pairs(&self) -> Vec<(ParticipantId, Coins)> {
        self.awards
            .iter()
            .map(|award| (award.participant.clone(), award.amount))
            .collect()
    }

    /// Whether nobody received any coins.
    pub fn is_undistributed(&self) -> bool {
        self.awards.is_empty()
    }
}
