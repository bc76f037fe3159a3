//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod choice;
pub mod export;
pub mod ledger;
pub mod simulate;

pub use choice::{handle_choice_command, ChoiceCommands};
pub use export::{handle_export_command, ExportCommands};
pub use ledger::{handle_ledger_command, LedgerCommands};
pub use simulate::{handle_event_command, handle_simulate_command, EventCommands, SimulateArgs};
