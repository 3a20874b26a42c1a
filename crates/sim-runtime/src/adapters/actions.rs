//! Turn actions and the port that supplies them.

use std::fmt;

use sdpa_01_account_ledger::{Account, LedgerError};
use sdpa_03_market::DailyPrices;
use serde::{Deserialize, Serialize};
use shared_types::{Coins, Day, ParticipantId};

use crate::error::RuntimeError;
use crate::report::DailyReport;

/// One decision taken during a participant's turn.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Action {
    /// Buy hardware units at the configured price.
    PurchaseHardware(u32),
    /// Sell coins at today's coin price.
    SellCoins(Coins),
    /// Switch hardware on or off.
    TogglePower,
    /// Switch between solo and pooled mining.
    TogglePoolMode,
    /// Hand over to the next participant.
    EndTurn,
}

/// Entries of the console menu, numbered 1 to 5.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    /// 1. Purchase hardware
    Purchase,
    /// 2. Sell coins
    Sell,
    /// 3. Switch power
    Power,
    /// 4. Switch solo/pooled
    PoolMode,
    /// 5. End turn
    EndTurn,
}

impl MenuChoice {
    /// Parse a menu entry. Only the digits 1 to 5 are accepted.
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "1" => Some(Self::Purchase),
            "2" => Some(Self::Sell),
            "3" => Some(Self::Power),
            "4" => Some(Self::PoolMode),
            "5" => Some(Self::EndTurn),
            _ => None,
        }
    }
}

impl fmt::Display for MenuChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Purchase => "1. Purchase mining hardware",
            Self::Sell => "2. Sell coins",
            Self::Power => "3. Switch hardware on/off",
            Self::PoolMode => "4. Switch solo/pooled mining",
            Self::EndTurn => "5. End turn",
        };
        f.write_str(label)
    }
}

/// What a source sees when asked for the next action.
#[derive(Debug, Clone, Copy)]
pub struct TurnContext<'a> {
    /// Current day
    pub day: Day,
    /// The participant's account as it stands now
    pub account: &'a Account,
    /// Prices in force today
    pub prices: &'a DailyPrices,
}

/// Supplies participant decisions to the day orchestrator.
pub trait ActionSource {
    /// Next action for the participant whose turn it is.
    fn next_action(&mut self, ctx: &TurnContext<'_>) -> Result<Action, RuntimeError>;

    /// The last action was rejected; the turn continues.
    fn on_rejected(
        &mut self,
        participant: &ParticipantId,
        error: &LedgerError,
    ) -> Result<(), RuntimeError>;

    /// A new day has started.
    fn on_day_start(&mut self, _prices: &DailyPrices) -> Result<(), RuntimeError> {
        Ok(())
    }

    /// A day has been settled.
    fn on_day_end(&mut self, _report: &DailyReport) -> Result<(), RuntimeError> {
        Ok(())
    }
}
