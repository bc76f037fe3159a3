//! JSON export
//!
//! Exports all tracker data to JSON with schema versioning.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::io::Write;

use crate::error::{LayakError, LayakResult};
use crate::models::{Month, MonthlyLedger};
use crate::storage::Storage;

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// Full data export structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FullExport {
    /// Schema version for compatibility checking
    pub schema_version: String,

    /// Export timestamp
    pub exported_at: DateTime<Utc>,

    /// Application version that created the export
    pub app_version: String,

    /// All monthly ledgers with data, ordered by month
    pub ledgers: Vec<MonthlyLedger>,

    /// Saved future-choice ids per month
    pub choices: Vec<MonthChoice>,

    /// Export metadata
    pub metadata: ExportMetadata,
}

/// One saved choice in the export
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonthChoice {
    pub month: Month,
    pub choice_id: String,
}

/// Export metadata for reference
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportMetadata {
    /// Number of months with ledger data
    pub ledger_count: usize,

    /// Total number of expense records across all months
    pub expense_count: usize,

    /// Number of saved choices
    pub choice_count: usize,
}

impl FullExport {
    /// Create a new full export from storage
    pub fn from_storage(storage: &Storage) -> LayakResult<Self> {
        let ledgers = storage.ledgers.get_all()?;
        let choices: Vec<MonthChoice> = storage
            .choices
            .get_all()?
            .into_iter()
            .map(|(month, choice)| MonthChoice {
                month,
                choice_id: choice.id.to_string(),
            })
            .collect();

        let metadata = ExportMetadata {
            ledger_count: ledgers.len(),
            expense_count: ledgers.iter().map(|l| l.expenses.len()).sum(),
            choice_count: choices.len(),
        };

        Ok(Self {
            schema_version: EXPORT_SCHEMA_VERSION.to_string(),
            exported_at: Utc::now(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            ledgers,
            choices,
            metadata,
        })
    }

    /// Validate the export structure
    pub fn validate(&self) -> Result<(), String> {
        if self.schema_version != EXPORT_SCHEMA_VERSION {
            return Err(format!(
                "Schema version mismatch: expected {}, got {}",
                EXPORT_SCHEMA_VERSION, self.schema_version
            ));
        }

        for ledger in &self.ledgers {
            if let Err(e) = ledger.validate() {
                return Err(format!("Ledger for {} is invalid: {}", ledger.month, e));
            }
        }

        for choice in &self.choices {
            if crate::reference::find_choice(&choice.choice_id).is_none() {
                return Err(format!(
                    "Choice for {} references unknown id {}",
                    choice.month, choice.choice_id
                ));
            }
        }

        Ok(())
    }
}

/// Export all data to JSON
pub fn export_full_json<W: Write>(
    storage: &Storage,
    writer: &mut W,
    pretty: bool,
) -> LayakResult<()> {
    let export = FullExport::from_storage(storage)?;

    if pretty {
        serde_json::to_writer_pretty(writer, &export)
    } else {
        serde_json::to_writer(writer, &export)
    }
    .map_err(|e| LayakError::Export(e.to_string()))?;

    Ok(())
}

/// Import from a JSON export (for verification/restore)
pub fn import_from_json(json_str: &str) -> LayakResult<FullExport> {
    let export: FullExport =
        serde_json::from_str(json_str).map_err(|e| LayakError::Export(e.to_string()))?;

    export.validate().map_err(LayakError::Export)?;

    Ok(export)
}
