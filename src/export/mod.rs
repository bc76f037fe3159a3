//! Export module for layak-cli
//!
//! Complete data export in multiple formats:
//! - CSV: expense records and month summaries (spreadsheet-compatible)
//! - JSON: machine-readable full export with schema versioning
//! - YAML: human-readable full export

pub mod csv;
pub mod json;
pub mod yaml;

pub use csv::{export_expenses_csv, export_summaries_csv};
pub use json::{export_full_json, import_from_json, FullExport, EXPORT_SCHEMA_VERSION};
pub use yaml::{export_full_yaml, import_from_yaml};
