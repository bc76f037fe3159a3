//! Core data models
//!
//! Plain data types shared by the engine, the storage layer, and the CLI:
//! money, expense categories, expense records, and monthly ledgers.

pub mod category;
pub mod expense;
pub mod ids;
pub mod ledger;
pub mod money;

pub use category::ExpenseCategory;
pub use expense::ExpenseRecord;
pub use ids::ExpenseId;
pub use ledger::{Month, MonthlyLedger};
pub use money::Money;
