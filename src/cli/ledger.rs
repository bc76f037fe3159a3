//! Monthly tracker CLI commands
//!
//! Bridges clap argument parsing with the ledger service: income, expense
//! records, summaries, breakdowns, and insights per month.

use chrono::NaiveDate;
use clap::Subcommand;

use crate::display::{
    format_category_breakdown, format_expense_line, format_expense_register, format_insights,
    format_month_summary,
};
use crate::engine::aggregate_by_category;
use crate::error::{LayakError, LayakResult};
use crate::models::{ExpenseCategory, Money, Month};
use crate::services::LedgerService;
use crate::storage::Storage;

/// Monthly tracker subcommands
#[derive(Subcommand)]
pub enum LedgerCommands {
    /// Set the month's income
    Income {
        /// Month name (e.g., juli) or number (1-12)
        month: String,
        /// Income amount (e.g., "2000000" or "Rp2.000.000")
        amount: String,
    },
    /// Add an expense record
    Add {
        /// Month name (e.g., juli) or number (1-12)
        month: String,
        /// Expense amount (e.g., "75000" or "Rp75.000")
        amount: String,
        /// Category (food, housing, transportation, internet, education, other)
        #[arg(short, long, default_value = "other")]
        category: String,
        /// Expense date (YYYY-MM-DD), defaults to today
        #[arg(short, long)]
        date: Option<String>,
    },
    /// Delete an expense record by id
    Delete {
        /// Month name or number
        month: String,
        /// Expense id (e.g., exp-1a2b3c4d)
        id: String,
    },
    /// List the month's expense records
    List {
        /// Month name or number
        month: String,
    },
    /// Show the month's summary and verdict
    Summary {
        /// Month name or number
        month: String,
    },
    /// Show per-category totals for the month
    Breakdown {
        /// Month name or number
        month: String,
    },
    /// Show reflective insights for the month
    Insights {
        /// Month name or number
        month: String,
    },
}

/// Handle a tracker command
pub fn handle_ledger_command(storage: &Storage, cmd: LedgerCommands) -> LayakResult<()> {
    let service = LedgerService::new(storage);

    match cmd {
        LedgerCommands::Income { month, amount } => {
            let month: Month = month.parse()?;
            let amount = Money::parse(&amount)?;

            service.set_income(month, amount)?;
            storage.ledgers.save()?;
            println!("Pemasukan {} diatur ke {}", month, amount);
        }

        LedgerCommands::Add {
            month,
            amount,
            category,
            date,
        } => {
            let month: Month = month.parse()?;
            let amount = Money::parse(&amount)?;
            let category: ExpenseCategory = category.parse()?;
            let date = parse_date(date.as_deref())?;

            let record = service.add_expense(month, date, amount, category)?;
            storage.ledgers.save()?;
            println!("Pengeluaran dicatat: {}", format_expense_line(&record));
        }

        LedgerCommands::Delete { month, id } => {
            let month: Month = month.parse()?;
            let record = service.find_expense(month, &id)?;

            service.delete_expense(month, record.id)?;
            storage.ledgers.save()?;
            println!("Pengeluaran dihapus: {}", format_expense_line(&record));
        }

        LedgerCommands::List { month } => {
            let month: Month = month.parse()?;
            let ledger = service.ledger(month)?;
            print!("{}", format_expense_register(&ledger));
        }

        LedgerCommands::Summary { month } => {
            let month: Month = month.parse()?;
            let summary = service.summary(month)?;
            print!("{}", format_month_summary(&summary));
        }

        LedgerCommands::Breakdown { month } => {
            let month: Month = month.parse()?;
            let ledger = service.ledger(month)?;
            let totals = aggregate_by_category(&ledger.expenses)?;
            print!("{}", format_category_breakdown(&totals));
        }

        LedgerCommands::Insights { month } => {
            let month: Month = month.parse()?;
            let insights = service.insights(month)?;
            print!("{}", format_insights(&insights));
        }
    }

    Ok(())
}

fn parse_date(input: Option<&str>) -> LayakResult<NaiveDate> {
    match input {
        Some(s) => NaiveDate::parse_from_str(s, "%Y-%m-%d").map_err(|e| {
            LayakError::InvalidInput(format!("Invalid date '{}': {}. Use YYYY-MM-DD.", s, e))
        }),
        None => Ok(chrono::Local::now().date_naive()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_date() {
        let date = parse_date(Some("2026-07-03")).unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2026, 7, 3).unwrap());
        assert!(parse_date(Some("03-07-2026")).is_err());
        assert!(parse_date(None).is_ok());
    }
}
