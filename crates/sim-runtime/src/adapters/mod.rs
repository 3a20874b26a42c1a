//! # Adapters
//!
//! Where participant decisions come from: the interactive console or a
//! prepared script.

pub mod actions;
pub mod console;
pub mod scripted;

pub use actions::{Action, ActionSource, MenuChoice, TurnContext};
pub use console::ConsoleActions;
pub use scripted::ScriptedActions;
