//! # Reports
//!
//! Daily and end-of-run summaries, computed from the activity log.
//!
//! ## Daily figures
//!
//! | Figure | Formula |
//! |--------|---------|
//! | Paper profit | `prize * coin_price - electricity` |
//! | Net spending | `sold * coin_price - purchased * hardware_price - electricity` |
//!
//! ## Final figures
//!
//! | Figure | Formula |
//! |--------|---------|
//! | Total assets | `cash + coins * coin_price + hardware * hardware_price` |
//! | Investment return | `total_assets - starting_capital` (and as a percentage) |
//! | Mining performance | `coins_mined / (daily_prize * days_run) * 100` |

use std::fmt;

use sdpa_01_account_ledger::{Account, LedgerApi};
use sdpa_02_lottery_engine::{Player, PrizeAward};
use sdpa_03_market::DailyPrices;
use serde::{Deserialize, Serialize};
use shared_types::{Cash, Coins, Day, ParticipantId};

use crate::activity::{ActivityKind, ActivityLog};
use crate::container::SimulationState;

/// One participant's figures for one day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParticipantDaySummary {
    /// Who
    pub participant: ParticipantId,
    /// Hardware units bought
    pub units_purchased: u32,
    /// Coins sold by choice
    pub coins_sold: Coins,
    /// Electricity charged
    pub electricity: Cash,
    /// Prize received
    pub prize: Coins,
    /// `prize * coin_price - electricity`
    pub paper_profit: Cash,
    /// `sold * coin_price - purchased * hardware_price - electricity`
    pub net_spending: Cash,
}

impl ParticipantDaySummary {
    /// Compute the day's figures from the log.
    pub fn compute(
        log: &ActivityLog,
        participant: &ParticipantId,
        prices: &DailyPrices,
        hardware_price: Cash,
    ) -> Self {
        let day = prices.day;
        let units_purchased = log.units_purchased(participant, day);
        let coins_sold = log.coins_sold(participant, day);
        let electricity = log.electricity_on(participant, day);
        let prize = log.prize_on(participant, day);
        Self {
            participant: participant.clone(),
            units_purchased,
            coins_sold,
            electricity,
            prize,
            paper_profit: prize * prices.coin_price - electricity,
            net_spending: coins_sold * prices.coin_price
                - f64::from(units_purchased) * hardware_price
                - electricity,
        }
    }
}

/// Everything that happened on one day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyReport {
    /// Prices in force.
    pub prices: DailyPrices,
    /// Total registered power, pool floor included.
    pub total_power: u64,
    /// Lottery winner. `None` when no power was registered.
    pub winner: Option<Player>,
    /// Coins paid out.
    pub awards: Vec<PrizeAward>,
    /// Coins that reached nobody.
    pub undistributed: Coins,
    /// Participants who went bankrupt today.
    pub bankruptcies: Vec<ParticipantId>,
    /// Figures for every participant still active at the end of the day.
    pub participants: Vec<ParticipantDaySummary>,
}

impl DailyReport {
    /// Day number.
    pub fn day(&self) -> Day {
        self.prices.day
    }

    /// Figures for one participant, if they were still active.
    pub fn summary_for(&self, participant: &ParticipantId) -> Option<&ParticipantDaySummary> {
        self.participants
            .iter()
            .find(|summary| &summary.participant == participant)
    }
}

impl fmt::Display for DailyReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Total mining power: {}", self.total_power)?;
        match &self.winner {
            Some(Player::Pool) => writeln!(f, "Pooled wins PoW mining.")?,
            Some(Player::Solo(id)) => writeln!(f, "{} wins PoW mining.", id.display_name())?,
            None => writeln!(f, "No mining power registered; no coins minted today.")?,
        }
        for id in &self.bankruptcies {
            writeln!(f, "{} went bankrupt.", id.display_name())?;
        }
        for summary in &self.participants {
            writeln!(f, "{}:", summary.participant.display_name())?;
            writeln!(f, "    - Paper profit is {:.2} GBP.", summary.paper_profit)?;
            writeln!(f, "    - Net spending is {:.2} GBP.", summary.net_spending)?;
            writeln!(f, "    - Prize received is {:.4} coins.", summary.prize)?;
            writeln!(f, "    - Coins sold: {:.2}.", summary.coins_sold)?;
            writeln!(f, "    - Electricity bill paid is {:.2} GBP.", summary.electricity)?;
            writeln!(
                f,
                "    - Hardware units purchased: {}.",
                summary.units_purchased
            )?;
        }
        Ok(())
    }
}

/// Where a participant ended up.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum FinalStanding {
    /// Still trading at the end of the run.
    Active {
        /// Cash balance
        cash: Cash,
        /// Coin balance
        coins: Coins,
        /// Coins valued at the final price
        coin_value: Cash,
        /// Hardware units
        hardware: u32,
        /// Cash, coins and hardware at book value
        total_assets: Cash,
        /// Total assets minus starting capital
        investment_return: Cash,
        /// Investment return as a percentage of starting capital
        investment_return_pct: f64,
    },
    /// Went bankrupt.
    Bankrupt {
        /// Day of bankruptcy
        day: Day,
        /// Hardware units held when frozen
        hardware: u32,
    },
}

/// Events of one day, for the key-actions listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayActivity {
    /// Day number
    pub day: Day,
    /// Events that day, in order
    pub events: Vec<ActivityKind>,
}

/// One participant's end-of-run figures.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParticipantFinal {
    /// Who
    pub participant: ParticipantId,
    /// Survivor or bankrupt
    pub standing: FinalStanding,
    /// Coins won over the run
    pub coins_mined: Coins,
    /// Share of all coins minted, in percent
    pub mining_performance: f64,
    /// Electricity charged over the run
    pub total_electricity: Cash,
    /// Events per day, up to the end of the run or the bankruptcy day
    pub key_actions: Vec<DayActivity>,
}

/// End-of-run summary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FinalReport {
    /// Days actually played
    pub days_run: Day,
    /// Coin price on the last day
    pub coin_price: Cash,
    /// Coins minted over the run (`daily_prize * days_run`)
    pub total_minted: Coins,
    /// One entry per participant, in turn order
    pub participants: Vec<ParticipantFinal>,
}

impl FinalReport {
    /// Build the summary from the final state.
    pub fn build(state: &SimulationState, coin_price: Cash, daily_prize: Coins) -> Self {
        let config = state.ledger.config();
        let days_run = state.days_run();
        let total_minted = daily_prize * f64::from(days_run);

        let participants = state
            .ledger
            .accounts()
            .map(|account| {
                participant_final(
                    account,
                    &state.activity,
                    days_run,
                    coin_price,
                    config.hardware_unit_price,
                    config.starting_capital,
                    total_minted,
                )
            })
            .collect();

        Self {
            days_run,
            coin_price,
            total_minted,
            participants,
        }
    }

    /// Entry for one participant.
    pub fn participant(&self, participant: &ParticipantId) -> Option<&ParticipantFinal> {
        self.participants
            .iter()
            .find(|entry| &entry.participant == participant)
    }
}

fn participant_final(
    account: &Account,
    log: &ActivityLog,
    days_run: Day,
    coin_price: Cash,
    hardware_price: Cash,
    starting_capital: Cash,
    total_minted: Coins,
) -> ParticipantFinal {
    let id = account.id();
    let bankrupt_on = log.bankruptcy_day(id);

    let standing = match bankrupt_on {
        Some(day) => FinalStanding::Bankrupt {
            day,
            hardware: account.hardware_count(),
        },
        None => {
            let coin_value = account.coin_balance() * coin_price;
            let total_assets = account.cash_balance()
                + coin_value
                + f64::from(account.hardware_count()) * hardware_price;
            let investment_return = total_assets - starting_capital;
            let investment_return_pct = if starting_capital > 0.0 {
                investment_return / starting_capital * 100.0
            } else {
                0.0
            };
            FinalStanding::Active {
                cash: account.cash_balance(),
                coins: account.coin_balance(),
                coin_value,
                hardware: account.hardware_count(),
                total_assets,
                investment_return,
                investment_return_pct,
            }
        }
    };

    let coins_mined = log.total_prize(id);
    let mining_performance = if total_minted > 0.0 {
        coins_mined / total_minted * 100.0
    } else {
        0.0
    };

    let last_day = bankrupt_on.unwrap_or(days_run);
    let key_actions = (1..=last_day)
        .map(|day| DayActivity {
            day,
            events: log.for_day(id, day).map(|record| record.kind.clone()).collect(),
        })
        .collect();

    ParticipantFinal {
        participant: id.clone(),
        standing,
        coins_mined,
        mining_performance,
        total_electricity: log.total_electricity(id),
        key_actions,
    }
}

impl fmt::Display for FinalReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Simulation Summary")?;
        writeln!(f, "------------------")?;
        writeln!(
            f,
            "Days played: {}; final coin price: {:.2} GBP; coins minted: {:.2}",
            self.days_run, self.coin_price, self.total_minted
        )?;
        for entry in &self.participants {
            writeln!(f, "{}:", entry.participant.display_name())?;
            match &entry.standing {
                FinalStanding::Bankrupt { day, hardware } => {
                    writeln!(
                        f,
                        "- {} went bankrupt on day {}",
                        entry.participant.display_name(),
                        day
                    )?;
                    writeln!(f, "- Hardware units = {}", hardware)?;
                }
                FinalStanding::Active {
                    cash,
                    coins,
                    coin_value,
                    hardware,
                    total_assets,
                    investment_return,
                    investment_return_pct,
                } => {
                    writeln!(f, "- Cash balance = {:.2} GBP", cash)?;
                    writeln!(f, "- Coin balance = {:.4}", coins)?;
                    writeln!(f, "- GBP value of coin balance = {:.2}", coin_value)?;
                    writeln!(f, "- Hardware units = {}", hardware)?;
                    writeln!(f, "- Total GBP value of all assets = {:.2}", total_assets)?;
                    writeln!(f, "- Investment return (GBP) = {:.2} GBP", investment_return)?;
                    writeln!(f, "- Investment return (%) = {:.2}%", investment_return_pct)?;
                }
            }
            writeln!(f, "- Total coins mined = {:.4} coins", entry.coins_mined)?;
            writeln!(f, "- Mining performance (%) = {:.2}%", entry.mining_performance)?;
            writeln!(f, "- Total electricity bill = {:.2} GBP", entry.total_electricity)?;
            writeln!(f, "- Key actions performed,")?;
            for day in &entry.key_actions {
                writeln!(f, "    Day {}:", day.day)?;
                if day.events.is_empty() {
                    writeln!(f, "    - No actions performed today.")?;
                }
                for event in &day.events {
                    writeln!(f, "    - {}", event)?;
                }
            }
        }
        Ok(())
    }
}
