//! # Day Orchestrator
//!
//! Runs the trading loop. Each day follows a fixed order:
//!
//! ```text
//! prices ──→ begin_day ──→ participant turns ──→ electricity
//!                                                     │
//!        daily report ←── solvency checks ←── lottery + credit
//! ```
//!
//! Participants take their turns in registration order. Recoverable ledger
//! rejections are handed back to the action source and the turn goes on.
//! The run stops early once every participant is bankrupt.

use rand::rngs::StdRng;
use sdpa_01_account_ledger::{LedgerApi, LedgerError, SolvencyOutcome};
use sdpa_02_lottery_engine::{
    LotteryApi, LotteryEngine, LotteryError, LotteryOutcome, RandomSource, RngSource,
};
use sdpa_03_market::{DailyPrices, Market, PriceFeed};
use shared_types::{Day, ParticipantId};
use tracing::{info, warn};

use crate::activity::ActivityKind;
use crate::adapters::{Action, ActionSource, TurnContext};
use crate::container::{SimulationConfig, SimulationState};
use crate::error::RuntimeError;
use crate::report::{DailyReport, FinalReport, ParticipantDaySummary};

/// The simulation: state plus the subsystems that drive it.
pub struct Simulation<F, D> {
    state: SimulationState,
    lottery: LotteryEngine,
    feed: F,
    draws: D,
}

impl Simulation<Market<StdRng>, RngSource<StdRng>> {
    /// Build from a validated configuration. Prices and draws share the
    /// configured seed, or come from the OS when none is set.
    pub fn from_config(config: &SimulationConfig) -> Result<Self, RuntimeError> {
        config.validate()?;
        let (feed, draws) = match config.seed {
            Some(seed) => (
                Market::seeded(config.market.clone(), seed)?,
                RngSource::seeded(seed.wrapping_add(1)),
            ),
            None => (
                Market::from_entropy(config.market.clone())?,
                RngSource::from_entropy(),
            ),
        };
        Self::new(config, feed, draws)
    }
}

impl<F: PriceFeed, D: RandomSource> Simulation<F, D> {
    /// Build with explicit price feed and random source.
    pub fn new(config: &SimulationConfig, feed: F, draws: D) -> Result<Self, RuntimeError> {
        let state = SimulationState::new(config.ledger.clone(), &config.participants)?;
        let lottery = LotteryEngine::new(config.lottery.clone())?;
        Ok(Self {
            state,
            lottery,
            feed,
            draws,
        })
    }

    /// Current state.
    pub fn state(&self) -> &SimulationState {
        &self.state
    }

    /// Play up to `days` days, stopping early if everyone is bankrupt.
    pub fn run(
        &mut self,
        days: Day,
        actions: &mut dyn ActionSource,
    ) -> Result<FinalReport, RuntimeError> {
        info!(days, participants = self.state.ledger.len(), "Simulation started");
        for _ in 0..days {
            self.run_day(actions)?;
            if self.state.ledger.all_bankrupt() {
                info!(day = self.state.day, "All participants bankrupt, stopping early");
                break;
            }
        }
        self.final_report()
    }

    /// Play one full day.
    pub fn run_day(&mut self, actions: &mut dyn ActionSource) -> Result<DailyReport, RuntimeError> {
        let prices = self.feed.next_day();
        self.state.start_day(prices);
        actions.on_day_start(&prices)?;

        for id in self.state.ledger.active_ids() {
            self.play_turn(&id, &prices, actions)?;
        }

        self.settle_electricity(&prices);
        let (total_power, winner, awards, undistributed) = match self.settle_lottery()? {
            Some(outcome) => (
                outcome.total_power,
                Some(outcome.winner),
                outcome.awards,
                outcome.undistributed,
            ),
            None => (0, None, Vec::new(), self.lottery.config().daily_prize),
        };
        let bankruptcies = self.settle_solvency(&prices)?;

        let hardware_price = self.state.ledger.config().hardware_unit_price;
        let participants = self
            .state
            .ledger
            .active_ids()
            .iter()
            .map(|id| {
                ParticipantDaySummary::compute(&self.state.activity, id, &prices, hardware_price)
            })
            .collect();

        let report = DailyReport {
            prices,
            total_power,
            winner,
            awards,
            undistributed,
            bankruptcies,
            participants,
        };
        actions.on_day_end(&report)?;
        self.state.reports.push(report.clone());
        Ok(report)
    }

    /// Summary of the run so far.
    pub fn final_report(&self) -> Result<FinalReport, RuntimeError> {
        let prices = self.state.prices.ok_or(RuntimeError::NoTradingDays)?;
        Ok(FinalReport::build(
            &self.state,
            prices.coin_price,
            self.lottery.config().daily_prize,
        ))
    }

    fn play_turn(
        &mut self,
        id: &ParticipantId,
        prices: &DailyPrices,
        actions: &mut dyn ActionSource,
    ) -> Result<(), RuntimeError> {
        let day = self.state.day;
        loop {
            let action = {
                let ctx = TurnContext {
                    day,
                    account: self.state.ledger.account(id)?,
                    prices,
                };
                actions.next_action(&ctx)?
            };

            let applied = match action {
                Action::EndTurn => return Ok(()),
                Action::PurchaseHardware(units) => self
                    .state
                    .ledger
                    .purchase_hardware(id, units)
                    .map(|receipt| {
                        (!receipt.is_cancelled()).then_some(ActivityKind::Purchase {
                            units: receipt.units,
                            cost: receipt.cost,
                        })
                    }),
                Action::SellCoins(quantity) => self
                    .state
                    .ledger
                    .sell_coins(id, quantity, prices.coin_price)
                    .map(|receipt| {
                        (!receipt.is_cancelled()).then_some(ActivityKind::Sale {
                            quantity: receipt.quantity,
                            proceeds: receipt.proceeds,
                        })
                    }),
                Action::TogglePower => self
                    .state
                    .ledger
                    .toggle_power(id)
                    .map(|status| Some(ActivityKind::PowerToggled { status })),
                Action::TogglePoolMode => self
                    .state
                    .ledger
                    .toggle_pool_mode(id)
                    .map(|mode| Some(ActivityKind::PoolModeToggled { mode })),
            };

            match applied {
                Ok(Some(kind)) => self.state.activity.record(id, day, kind),
                Ok(None) => {}
                Err(err) if err.is_recoverable() => actions.on_rejected(id, &err)?,
                Err(err) => return Err(err.into()),
            }
        }
    }

    fn settle_electricity(&mut self, prices: &DailyPrices) {
        let day = self.state.day;
        for (id, bill) in self.state.ledger.charge_electricity(prices.electricity_price) {
            self.state
                .activity
                .record(&id, day, ActivityKind::Electricity { bill });
        }
    }

    /// Draw today's winner and credit the awards. `None` when no power was
    /// registered at all.
    fn settle_lottery(&mut self) -> Result<Option<LotteryOutcome>, RuntimeError> {
        let day = self.state.day;
        let snapshot = self.state.ledger.miner_snapshot();
        let outcome = match self.lottery.draw(&snapshot, &mut self.draws) {
            Ok(outcome) => outcome,
            Err(LotteryError::NoActivePower) => {
                warn!(day, "No mining power registered, no coins minted");
                return Ok(None);
            }
            Err(err) => return Err(err.into()),
        };

        self.state.ledger.credit_awards(&outcome.award_pairs())?;
        for award in &outcome.awards {
            self.state.activity.record(
                &award.participant,
                day,
                ActivityKind::Prize {
                    amount: award.amount,
                },
            );
        }
        Ok(Some(outcome))
    }

    fn settle_solvency(&mut self, prices: &DailyPrices) -> Result<Vec<ParticipantId>, LedgerError> {
        let day = self.state.day;
        let mut bankruptcies = Vec::new();
        for (id, outcome) in self.state.ledger.check_solvency(prices.coin_price)? {
            match outcome {
                SolvencyOutcome::Solvent => {}
                SolvencyOutcome::Liquidated {
                    coins_sold,
                    proceeds,
                } => self.state.activity.record(
                    &id,
                    day,
                    ActivityKind::Liquidation {
                        coins_sold,
                        proceeds,
                    },
                ),
                SolvencyOutcome::Bankrupt { deficit } => {
                    self.state
                        .activity
                        .record(&id, day, ActivityKind::Bankrupt { deficit });
                    bankruptcies.push(id);
                }
            }
        }
        Ok(bankruptcies)
    }
}
