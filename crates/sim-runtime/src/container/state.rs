//! # Simulation State
//!
//! Everything that survives from one trading day to the next.

use sdpa_01_account_ledger::{Ledger, LedgerApi, LedgerConfig, LedgerError};
use sdpa_03_market::DailyPrices;
use shared_types::{Day, ParticipantId};

use crate::activity::ActivityLog;
use crate::report::DailyReport;

/// Day counter, accounts, activity and accumulated reports.
#[derive(Debug, Clone)]
pub struct SimulationState {
    /// Current day, 0 before the first day starts.
    pub day: Day,
    /// All participant accounts.
    pub ledger: Ledger,
    /// Every recorded event.
    pub activity: ActivityLog,
    /// Prices in force today.
    pub prices: Option<DailyPrices>,
    /// One report per completed day.
    pub reports: Vec<DailyReport>,
}

impl SimulationState {
    /// Open an account for every name, in turn order.
    pub fn new(config: LedgerConfig, names: &[String]) -> Result<Self, LedgerError> {
        let mut ledger = Ledger::new(config)?;
        for name in names {
            ledger.open_account(name)?;
        }
        Ok(Self {
            day: 0,
            ledger,
            activity: ActivityLog::default(),
            prices: None,
            reports: Vec::new(),
        })
    }

    /// Enter a new day with its prices.
    pub fn start_day(&mut self, prices: DailyPrices) {
        self.day = prices.day;
        self.prices = Some(prices);
        self.ledger.begin_day();
    }

    /// Every participant, in registration order.
    pub fn participants(&self) -> Vec<ParticipantId> {
        self.ledger.accounts().map(|a| a.id().clone()).collect()
    }

    /// Number of days completed.
    pub fn days_run(&self) -> Day {
        self.reports.len() as Day
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(list: &[&str]) -> Vec<String> {
        list.iter().map(|n| n.to_string()).collect()
    }

    #[test]
    fn test_new_opens_accounts_in_order() {
        let state = SimulationState::new(LedgerConfig::default(), &names(&["bob", "alice"])).unwrap();
        let ids: Vec<String> = state.participants().iter().map(|id| id.to_string()).collect();
        assert_eq!(ids, vec!["bob", "alice"]);
        assert_eq!(state.day, 0);
        assert_eq!(state.days_run(), 0);
    }

    #[test]
    fn test_new_rejects_duplicates() {
        let result = SimulationState::new(LedgerConfig::default(), &names(&["bob", "BOB"]));
        assert!(matches!(result, Err(LedgerError::DuplicateParticipant(_))));
    }

    #[test]
    fn test_start_day_resets_purchases() {
        let mut state = SimulationState::new(LedgerConfig::default(), &names(&["bob"])).unwrap();
        let bob = ParticipantId::new("bob");
        state.ledger.purchase_hardware(&bob, 10).unwrap();
        state.start_day(DailyPrices {
            day: 2,
            coin_price: 50.0,
            electricity_price: 2.0,
        });
        assert_eq!(state.day, 2);
        assert_eq!(state.ledger.account(&bob).unwrap().daily_purchase_count(), 0);
    }
}
