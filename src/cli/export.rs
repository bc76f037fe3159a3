//! CLI commands for data export
//!
//! Writes tracker data to CSV, JSON, or YAML files.

use clap::{Subcommand, ValueEnum};
use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

use crate::error::{LayakError, LayakResult};
use crate::export::{csv, json, yaml};
use crate::storage::Storage;

/// Export format options
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ExportFormat {
    /// CSV format (expense records only)
    Csv,
    /// JSON format (all data)
    Json,
    /// YAML format (all data, human-readable)
    Yaml,
}

/// Export subcommands
#[derive(Subcommand)]
pub enum ExportCommands {
    /// Export all data to a file
    All {
        /// Output file path
        output: PathBuf,

        /// Export format
        #[arg(short, long, value_enum, default_value = "json")]
        format: ExportFormat,

        /// Pretty-print JSON output
        #[arg(long)]
        pretty: bool,
    },

    /// Export expense records to CSV
    Expenses {
        /// Output file path
        output: PathBuf,
    },

    /// Export month summaries to CSV
    Summaries {
        /// Output file path
        output: PathBuf,
    },

    /// Show export information without writing files
    Info,
}

/// Handle an export command
pub fn handle_export_command(storage: &Storage, cmd: ExportCommands) -> LayakResult<()> {
    match cmd {
        ExportCommands::All {
            output,
            format,
            pretty,
        } => {
            let mut writer = create_writer(&output)?;

            match format {
                ExportFormat::Csv => {
                    csv::export_expenses_csv(storage, &mut writer)?;
                    println!("Expense records exported to: {}", output.display());
                    println!("Note: CSV covers expense records only. Use JSON or YAML for a full export.");
                }
                ExportFormat::Json => {
                    json::export_full_json(storage, &mut writer, pretty)?;
                    println!("All data exported to: {}", output.display());
                }
                ExportFormat::Yaml => {
                    yaml::export_full_yaml(storage, &mut writer)?;
                    println!("All data exported to: {}", output.display());
                }
            }
        }

        ExportCommands::Expenses { output } => {
            let mut writer = create_writer(&output)?;
            csv::export_expenses_csv(storage, &mut writer)?;

            let count: usize = storage
                .ledgers
                .get_all()?
                .iter()
                .map(|l| l.expenses.len())
                .sum();
            println!("Exported {} expense records to: {}", count, output.display());
        }

        ExportCommands::Summaries { output } => {
            let mut writer = create_writer(&output)?;
            csv::export_summaries_csv(storage, &mut writer)?;

            let count = storage.ledgers.get_all()?.len();
            println!("Exported {} month summaries to: {}", count, output.display());
        }

        ExportCommands::Info => {
            let export = json::FullExport::from_storage(storage)?;

            println!("Export Information");
            println!("==================");
            println!();
            println!("Schema Version: {}", export.schema_version);
            println!("App Version:    {}", export.app_version);
            println!();
            println!("Data Summary:");
            println!("  Months with data: {}", export.metadata.ledger_count);
            println!("  Expense records:  {}", export.metadata.expense_count);
            println!("  Saved choices:    {}", export.metadata.choice_count);
            println!();
            println!("Available Export Formats:");
            println!("  csv  - expense records or month summaries");
            println!("  json - all data, machine-readable");
            println!("  yaml - all data, human-readable");
            println!();
            println!("Examples:");
            println!("  layak export all backup.json --format json --pretty");
            println!("  layak export expenses expenses.csv");
            println!("  layak export summaries summaries.csv");
        }
    }

    Ok(())
}

fn create_writer(output: &PathBuf) -> LayakResult<BufWriter<File>> {
    let file = File::create(output).map_err(|e| {
        LayakError::Export(format!("Failed to create file {}: {}", output.display(), e))
    })?;
    Ok(BufWriter::new(file))
}
