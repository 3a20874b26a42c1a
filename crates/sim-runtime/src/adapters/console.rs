//! Interactive console: numbered menu, one prompt per answer.
//!
//! Generic over the reader and writer so tests can drive it with in-memory
//! buffers.

use std::io::{self, BufRead, Stdout, StdinLock, Write};

use sdpa_01_account_ledger::{parse_coin_quantity, parse_hardware_units, LedgerError};
use sdpa_03_market::DailyPrices;
use shared_types::{Day, ParticipantId};
use tracing::debug;

use crate::adapters::actions::{Action, ActionSource, MenuChoice, TurnContext};
use crate::error::RuntimeError;
use crate::report::DailyReport;

const MENU: [MenuChoice; 5] = [
    MenuChoice::Purchase,
    MenuChoice::Sell,
    MenuChoice::Power,
    MenuChoice::PoolMode,
    MenuChoice::EndTurn,
];

/// Console-backed [`ActionSource`].
pub struct ConsoleActions<R, W> {
    reader: R,
    writer: W,
}

impl ConsoleActions<StdinLock<'static>, Stdout> {
    /// Read from stdin, write to stdout.
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> ConsoleActions<R, W> {
    /// Wrap a reader and a writer.
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    /// Everything written so far.
    pub fn writer(&self) -> &W {
        &self.writer
    }

    /// Print a prompt and read one trimmed line.
    pub fn ask(&mut self, prompt: &str) -> Result<String, RuntimeError> {
        write!(self.writer, "{}", prompt)?;
        self.writer.flush()?;
        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Err(RuntimeError::InputClosed);
        }
        Ok(line.trim().to_string())
    }

    /// Ask until the answer is an integer of at least `min`.
    pub fn ask_at_least(&mut self, prompt: &str, min: u32) -> Result<u32, RuntimeError> {
        loop {
            let answer = self.ask(prompt)?;
            match parse_hardware_units(&answer) {
                Ok(value) if value >= min => return Ok(value),
                _ => writeln!(
                    self.writer,
                    "Invalid input: only whole numbers greater than or equal to {} are accepted.",
                    min
                )?,
            }
        }
    }

    /// Ask for `count` distinct, non-empty names.
    pub fn ask_names(&mut self, count: usize) -> Result<Vec<String>, RuntimeError> {
        let mut names: Vec<String> = Vec::with_capacity(count);
        while names.len() < count {
            let answer = self.ask(&format!("Enter the name of participant {}: ", names.len() + 1))?;
            let id = ParticipantId::new(&answer);
            if id.is_empty() {
                writeln!(self.writer, "Invalid input: names must not be empty.")?;
            } else if names.iter().any(|name| ParticipantId::new(name).matches(&id)) {
                writeln!(self.writer, "Invalid input: '{}' is already taken.", id)?;
            } else {
                names.push(id.to_string());
            }
        }
        Ok(names)
    }

    fn write_status(&mut self, ctx: &TurnContext<'_>) -> Result<(), RuntimeError> {
        let account = ctx.account;
        write!(
            self.writer,
            "{}'s current balance = {:.2} GBP; coins = {:.4}; hardware = {}",
            account.id().display_name(),
            account.cash_balance(),
            account.coin_balance(),
            account.hardware_count()
        )?;
        if account.hardware_count() > 0 {
            write!(
                self.writer,
                "; mining status = ({}, {})",
                account.power_status(),
                account.pool_mode()
            )?;
        }
        writeln!(self.writer, ".")?;
        Ok(())
    }

    fn write_menu(&mut self) -> Result<(), RuntimeError> {
        writeln!(self.writer, "Select which action to make,")?;
        for entry in MENU {
            writeln!(self.writer, "{}", entry)?;
        }
        Ok(())
    }
}

impl<R: BufRead, W: Write> ActionSource for ConsoleActions<R, W> {
    fn next_action(&mut self, ctx: &TurnContext<'_>) -> Result<Action, RuntimeError> {
        loop {
            self.write_status(ctx)?;
            self.write_menu()?;
            let answer = self.ask("Enter action number: ")?;

            let Some(choice) = MenuChoice::parse(&answer) else {
                writeln!(
                    self.writer,
                    "Invalid input: to select an action, enter 1, 2, 3, 4 or 5."
                )?;
                continue;
            };

            let action = match choice {
                MenuChoice::Purchase => {
                    let remaining = ctx.account.remaining_daily_allowance();
                    let answer = self.ask(&format!(
                        "Enter number of hardware units to purchase ({} left today): ",
                        remaining
                    ))?;
                    parse_hardware_units(&answer).map(Action::PurchaseHardware)
                }
                MenuChoice::Sell => {
                    let answer = self.ask(&format!(
                        "Enter number of coins to sell at {:.2} GBP: ",
                        ctx.prices.coin_price
                    ))?;
                    parse_coin_quantity(&answer).map(Action::SellCoins)
                }
                MenuChoice::Power => Ok(Action::TogglePower),
                MenuChoice::PoolMode => Ok(Action::TogglePoolMode),
                MenuChoice::EndTurn => Ok(Action::EndTurn),
            };

            match action {
                Ok(action) => {
                    debug!(participant = %ctx.account.id(), ?action, "Console action");
                    return Ok(action);
                }
                Err(err) => writeln!(self.writer, "{}", err)?,
            }
        }
    }

    fn on_rejected(
        &mut self,
        _participant: &ParticipantId,
        error: &LedgerError,
    ) -> Result<(), RuntimeError> {
        writeln!(self.writer, "{}", error)?;
        Ok(())
    }

    fn on_day_start(&mut self, prices: &DailyPrices) -> Result<(), RuntimeError> {
        writeln!(self.writer, "Trading Day {}", prices.day)?;
        writeln!(self.writer, "-------------")?;
        writeln!(
            self.writer,
            "Today's market price of the coin is {:.2} GBP",
            prices.coin_price
        )?;
        writeln!(
            self.writer,
            "Today's unit price of electricity is {:.2} GBP",
            prices.electricity_price
        )?;
        Ok(())
    }

    fn on_day_end(&mut self, report: &DailyReport) -> Result<(), RuntimeError> {
        write!(self.writer, "{}", report)?;
        self.writer.flush()?;
        Ok(())
    }
}

/// Prompt for the run length when the environment did not provide it.
pub fn ask_days<R: BufRead, W: Write>(
    console: &mut ConsoleActions<R, W>,
    min: Day,
) -> Result<Day, RuntimeError> {
    console.ask_at_least(
        &format!("Enter number of days in the simulation (Minimum: {}): ", min),
        min,
    )
}
