//! # Activity Log
//!
//! Append-only record of everything that happened to each participant,
//! queried by the reports and dumped as JSON at the end of a run.

use std::fmt;

use serde::{Deserialize, Serialize};
use shared_types::{Cash, Coins, Day, ParticipantId, PoolMode, PowerStatus};

/// What happened.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum ActivityKind {
    /// Hardware bought.
    Purchase {
        /// Units bought
        units: u32,
        /// Cash paid
        cost: Cash,
    },
    /// Coins sold by the participant.
    Sale {
        /// Coins sold
        quantity: Coins,
        /// Cash received
        proceeds: Cash,
    },
    /// Hardware switched on or off.
    PowerToggled {
        /// Status after the toggle
        status: PowerStatus,
    },
    /// Switched between solo and pooled mining.
    PoolModeToggled {
        /// Mode after the toggle
        mode: PoolMode,
    },
    /// Electricity charged at the end of the day.
    Electricity {
        /// Cash charged
        bill: Cash,
    },
    /// Coins won in the lottery.
    Prize {
        /// Coins credited
        amount: Coins,
    },
    /// Coins force-sold to cover a cash deficit.
    Liquidation {
        /// Coins sold
        coins_sold: Coins,
        /// Cash received
        proceeds: Cash,
    },
    /// Deficit could not be covered.
    Bankrupt {
        /// Cash deficit at the time
        deficit: Cash,
    },
}

impl fmt::Display for ActivityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Purchase { units, cost } => {
                write!(f, "Purchased {} hardware units for {:.2} GBP.", units, cost)
            }
            Self::Sale { quantity, proceeds } => {
                write!(f, "Sold {:.2} coins for {:.2} GBP.", quantity, proceeds)
            }
            Self::PowerToggled { status } => write!(f, "Hardware turned {}.", status),
            Self::PoolModeToggled { mode } => write!(f, "Changed mining mode to {}.", mode),
            Self::Electricity { bill } => write!(f, "Paid {:.2} GBP on electricity.", bill),
            Self::Prize { amount } => write!(f, "Received {:.4} coins from mining.", amount),
            Self::Liquidation {
                coins_sold,
                proceeds,
            } => write!(
                f,
                "Force-sold {:.2} coins for {:.2} GBP to cover a deficit.",
                coins_sold, proceeds
            ),
            Self::Bankrupt { deficit } => {
                write!(f, "Went bankrupt with a deficit of {:.2} GBP.", deficit)
            }
        }
    }
}

/// One event for one participant on one day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivityRecord {
    /// Who
    pub participant: ParticipantId,
    /// When
    pub day: Day,
    /// What
    #[serde(flatten)]
    pub kind: ActivityKind,
}

/// All events of a run, in the order they happened.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ActivityLog {
    records: Vec<ActivityRecord>,
}

impl ActivityLog {
    /// Append an event.
    pub fn record(&mut self, participant: &ParticipantId, day: Day, kind: ActivityKind) {
        self.records.push(ActivityRecord {
            participant: participant.clone(),
            day,
            kind,
        });
    }

    /// Every event.
    pub fn records(&self) -> &[ActivityRecord] {
        &self.records
    }

    /// Events of one participant.
    pub fn for_participant<'a>(
        &'a self,
        participant: &'a ParticipantId,
    ) -> impl Iterator<Item = &'a ActivityRecord> + 'a {
        self.records
            .iter()
            .filter(move |record| &record.participant == participant)
    }

    /// Events of one participant on one day.
    pub fn for_day<'a>(
        &'a self,
        participant: &'a ParticipantId,
        day: Day,
    ) -> impl Iterator<Item = &'a ActivityRecord> + 'a {
        self.for_participant(participant)
            .filter(move |record| record.day == day)
    }

    /// Hardware units bought on a day.
    pub fn units_purchased(&self, participant: &ParticipantId, day: Day) -> u32 {
        self.for_day(participant, day)
            .map(|record| match record.kind {
                ActivityKind::Purchase { units, .. } => units,
                _ => 0,
            })
            .sum()
    }

    /// Coins sold by choice on a day. Forced liquidations are excluded.
    pub fn coins_sold(&self, participant: &ParticipantId, day: Day) -> Coins {
        self.for_day(participant, day)
            .map(|record| match record.kind {
                ActivityKind::Sale { quantity, .. } => quantity,
                _ => 0.0,
            })
            .sum()
    }

    /// Electricity charged on a day.
    pub fn electricity_on(&self, participant: &ParticipantId, day: Day) -> Cash {
        self.for_day(participant, day)
            .map(|record| bill_of(&record.kind))
            .sum()
    }

    /// Prize received on a day.
    pub fn prize_on(&self, participant: &ParticipantId, day: Day) -> Coins {
        self.for_day(participant, day)
            .map(|record| prize_of(&record.kind))
            .sum()
    }

    /// Prize received over the whole run.
    pub fn total_prize(&self, participant: &ParticipantId) -> Coins {
        self.for_participant(participant)
            .map(|record| prize_of(&record.kind))
            .sum()
    }

    /// Electricity charged over the whole run.
    pub fn total_electricity(&self, participant: &ParticipantId) -> Cash {
        self.for_participant(participant)
            .map(|record| bill_of(&record.kind))
            .sum()
    }

    /// Day the participant went bankrupt, if they did.
    pub fn bankruptcy_day(&self, participant: &ParticipantId) -> Option<Day> {
        self.for_participant(participant)
            .find(|record| matches!(record.kind, ActivityKind::Bankrupt { .. }))
            .map(|record| record.day)
    }

    /// Pretty-printed JSON dump.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

fn prize_of(kind: &ActivityKind) -> Coins {
    match kind {
        ActivityKind::Prize { amount } => *amount,
        _ => 0.0,
    }
}

fn bill_of(kind: &ActivityKind) -> Cash {
    match kind {
        ActivityKind::Electricity { bill } => *bill,
        _ => 0.0,
    }
}
