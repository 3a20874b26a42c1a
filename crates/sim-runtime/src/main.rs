//! # SDPA Mining Simulation
//!
//! Interactive entry point.
//!
//! ## Startup Sequence
//!
//! 1. Initialize telemetry (logs go to stderr)
//! 2. Load configuration from the environment
//! 3. Ask for the number of days and the participant names if not set
//! 4. Play the days with console actions
//! 5. Print the final summary and dump the activity log as JSON

use anyhow::{Context, Result};
use sdpa_telemetry::{init_telemetry, TelemetryConfig};
use sim_runtime::adapters::console::ask_days;
use sim_runtime::{ConsoleActions, Simulation, SimulationConfig, MIN_DAYS, MIN_PARTICIPANTS};
use tracing::info;

fn main() -> Result<()> {
    let telemetry = TelemetryConfig::from_env();
    init_telemetry(&telemetry).context("Failed to initialize telemetry")?;

    let mut config = SimulationConfig::from_env().context("Failed to load configuration")?;
    let mut console = ConsoleActions::stdio();

    if config.days.is_none() {
        config.days = Some(ask_days(&mut console, MIN_DAYS)?);
    }
    if config.participants.is_empty() {
        let count = console.ask_at_least(
            &format!(
                "Enter number of participants in the simulation (Minimum: {}): ",
                MIN_PARTICIPANTS
            ),
            MIN_PARTICIPANTS as u32,
        )?;
        config.participants = console.ask_names(count as usize)?;
    }

    let days = config.days().context("Number of days not set")?;
    let mut simulation =
        Simulation::from_config(&config).context("Failed to set up the simulation")?;
    info!(days, seed = ?config.seed, "Configuration loaded");

    let report = simulation
        .run(days, &mut console)
        .context("Simulation aborted")?;
    println!();
    print!("{}", report);

    let log = simulation
        .state()
        .activity
        .to_json()
        .context("Failed to serialize the activity log")?;
    println!();
    println!("Activity log:");
    println!("{}", log);

    Ok(())
}
