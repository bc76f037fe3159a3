//! CSV export
//!
//! Exports expense records and month summaries in spreadsheet-compatible
//! form, one row per record.

use std::io::Write;

use crate::error::{LayakError, LayakResult};
use crate::services::LedgerService;
use crate::storage::Storage;

/// Export every expense record across all months to CSV
pub fn export_expenses_csv<W: Write>(storage: &Storage, writer: &mut W) -> LayakResult<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    csv_writer
        .write_record(["Month", "ID", "Date", "Category", "Amount"])
        .map_err(|e| LayakError::Export(e.to_string()))?;

    for ledger in storage.ledgers.get_all()? {
        for expense in &ledger.expenses {
            csv_writer
                .write_record([
                    ledger.month.to_string(),
                    expense.id.to_string(),
                    expense.date.format("%Y-%m-%d").to_string(),
                    expense.category.name().to_string(),
                    expense.amount.rupiah().to_string(),
                ])
                .map_err(|e| LayakError::Export(e.to_string()))?;
        }
    }

    csv_writer
        .flush()
        .map_err(|e| LayakError::Export(e.to_string()))?;
    Ok(())
}

/// Export one summary row per month with data: income, expenses, remaining,
/// and the verdict label
pub fn export_summaries_csv<W: Write>(storage: &Storage, writer: &mut W) -> LayakResult<()> {
    let service = LedgerService::new(storage);
    let mut csv_writer = csv::Writer::from_writer(writer);

    csv_writer
        .write_record(["Month", "Income", "Expenses", "Remaining", "Status"])
        .map_err(|e| LayakError::Export(e.to_string()))?;

    for ledger in storage.ledgers.get_all()? {
        let summary = service.summary(ledger.month)?;
        let status = summary
            .verdict
            .as_ref()
            .map(|v| v.tier.label())
            .unwrap_or("");

        csv_writer
            .write_record([
                summary.month.to_string(),
                summary.income.rupiah().to_string(),
                summary.total_expenses.rupiah().to_string(),
                summary.remaining.rupiah().to_string(),
                status.to_string(),
            ])
            .map_err(|e| LayakError::Export(e.to_string()))?;
    }

    csv_writer
        .flush()
        .map_err(|e| LayakError::Export(e.to_string()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::LayakPaths;
    use crate::models::{ExpenseCategory, ExpenseRecord, Money, Month, MonthlyLedger};
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn create_test_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = LayakPaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut storage = Storage::new(paths).unwrap();
        storage.load_all().unwrap();
        (temp_dir, storage)
    }

    #[test]
    fn test_export_expenses_csv() {
        let (_tmp, storage) = create_test_storage();

        let mut ledger = MonthlyLedger::new(Month::Juni);
        ledger.income = Money::from_rupiah(2_000_000);
        ledger
            .add_expense(ExpenseRecord::new(
                NaiveDate::from_ymd_opt(2026, 6, 10).unwrap(),
                Money::from_rupiah(350_000),
                ExpenseCategory::Transportation,
            ))
            .unwrap();
        storage.ledgers.upsert(ledger).unwrap();

        let mut output = Vec::new();
        export_expenses_csv(&storage, &mut output).unwrap();

        let csv_string = String::from_utf8(output).unwrap();
        assert!(csv_string.contains("Month,ID,Date,Category,Amount"));
        assert!(csv_string.contains("Juni"));
        assert!(csv_string.contains("transportation"));
        assert!(csv_string.contains("350000"));
    }

    #[test]
    fn test_export_summaries_csv() {
        let (_tmp, storage) = create_test_storage();

        let mut ledger = MonthlyLedger::new(Month::Juli);
        ledger.income = Money::from_rupiah(2_000_000);
        ledger
            .add_expense(ExpenseRecord::new(
                NaiveDate::from_ymd_opt(2026, 7, 1).unwrap(),
                Money::from_rupiah(1_600_000),
                ExpenseCategory::Housing,
            ))
            .unwrap();
        storage.ledgers.upsert(ledger).unwrap();

        let mut output = Vec::new();
        export_summaries_csv(&storage, &mut output).unwrap();

        let csv_string = String::from_utf8(output).unwrap();
        assert!(csv_string.contains("Month,Income,Expenses,Remaining,Status"));
        assert!(csv_string.contains("Juli,2000000,1600000,400000,Layak"));
    }
}
