//! # SDPA Telemetry
//!
//! Structured logging for the mining simulation.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use sdpa_telemetry::{init_telemetry, TelemetryConfig};
//!
//! fn main() {
//!     let config = TelemetryConfig::from_env();
//!     init_telemetry(&config).expect("Failed to init telemetry");
//! }
//! ```
//!
//! ## Environment Variables
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `SDPA_LOG_LEVEL` | `info` | Log level filter (falls back to `RUST_LOG`) |
//! | `SDPA_JSON_LOGS` | `false` | Emit JSON lines instead of human output |
//! | `SDPA_CONSOLE_OUTPUT` | `true` | Write logs to stderr at all |

#![warn(missing_docs)]
#![warn(clippy::all)]

mod config;
mod tracing_setup;

pub use config::TelemetryConfig;
pub use tracing_setup::{build_filter, init_telemetry};

use thiserror::Error;

/// Telemetry initialization errors
#[derive(Error, Debug)]
pub enum TelemetryError {
    /// The subscriber could not be installed.
    #[error("Failed to initialize tracing subscriber: {0}")]
    SubscriberInit(String),

    /// The log level directive did not parse.
    #[error("Invalid log filter '{filter}': {reason}")]
    InvalidFilter {
        /// Directive that was rejected.
        filter: String,
        /// Parser message.
        reason: String,
    },
}

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
