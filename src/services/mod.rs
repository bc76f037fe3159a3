//! Business logic services for layak-cli

pub mod ledger;
pub mod simulator;

pub use ledger::{LedgerService, MonthSummary};
pub use simulator::Simulation;
