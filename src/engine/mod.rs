//! Classification & insight engine
//!
//! Pure, stateless functions over ledger snapshots: status classification,
//! category aggregation, and reflective insight derivation. The engine never
//! touches storage or I/O; it receives immutable data and returns fresh
//! values, so repeated calls with the same inputs yield identical outputs.

pub mod aggregate;
pub mod classify;
pub mod insights;

pub use aggregate::{aggregate_by_category, CategoryTotals};
pub use classify::{classify, surplus_ratio, StatusTier, StatusVerdict};
pub use insights::derive_insights;
