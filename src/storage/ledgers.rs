//! Ledger repository for JSON storage
//!
//! Manages loading and saving monthly ledgers to ledgers.json. Ledgers are
//! created lazily: referencing a month that has no data yields a fresh ledger
//! with zero income and no expenses.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::RwLock;

use crate::error::LayakError;
use crate::models::{Month, MonthlyLedger};

use super::file_io::{read_json, write_json_atomic};

/// Serializable ledger data structure
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
struct LedgerData {
    ledgers: Vec<MonthlyLedger>,
}

/// Repository for monthly ledger persistence
pub struct LedgerRepository {
    path: PathBuf,
    data: RwLock<HashMap<Month, MonthlyLedger>>,
}

impl LedgerRepository {
    /// Create a new ledger repository
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            data: RwLock::new(HashMap::new()),
        }
    }

    /// Load ledgers from disk
    pub fn load(&self) -> Result<(), LayakError> {
        let file_data: LedgerData = read_json(&self.path)?;

        let mut data = self
            .data
            .write()
            .map_err(|e| LayakError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        data.clear();
        for ledger in file_data.ledgers {
            ledger.validate()?;
            data.insert(ledger.month, ledger);
        }

        Ok(())
    }

    /// Save ledgers to disk, ordered by month
    pub fn save(&self) -> Result<(), LayakError> {
        let data = self
            .data
            .read()
            .map_err(|e| LayakError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let mut ledgers: Vec<_> = data.values().cloned().collect();
        ledgers.sort_by_key(|l| l.month.index());

        let file_data = LedgerData { ledgers };
        write_json_atomic(&self.path, &file_data)
    }

    /// Get a month's ledger if it has any data
    pub fn get(&self, month: Month) -> Result<Option<MonthlyLedger>, LayakError> {
        let data = self
            .data
            .read()
            .map_err(|e| LayakError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(data.get(&month).cloned())
    }

    /// Get a month's ledger, defaulting to an empty one
    pub fn month_or_default(&self, month: Month) -> Result<MonthlyLedger, LayakError> {
        Ok(self.get(month)?.unwrap_or_else(|| MonthlyLedger::new(month)))
    }

    /// Insert or replace a month's ledger
    pub fn upsert(&self, ledger: MonthlyLedger) -> Result<(), LayakError> {
        ledger.validate()?;

        let mut data = self
            .data
            .write()
            .map_err(|e| LayakError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        data.insert(ledger.month, ledger);
        Ok(())
    }

    /// All ledgers with data, ordered by month
    pub fn get_all(&self) -> Result<Vec<MonthlyLedger>, LayakError> {
        let data = self
            .data
            .read()
            .map_err(|e| LayakError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let mut ledgers: Vec<_> = data.values().cloned().collect();
        ledgers.sort_by_key(|l| l.month.index());
        Ok(ledgers)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ExpenseCategory, ExpenseRecord, Money};
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn repo() -> (TempDir, LedgerRepository) {
        let temp_dir = TempDir::new().unwrap();
        let repo = LedgerRepository::new(temp_dir.path().join("ledgers.json"));
        repo.load().unwrap();
        (temp_dir, repo)
    }

    fn expense(amount: i64) -> ExpenseRecord {
        ExpenseRecord::new(
            NaiveDate::from_ymd_opt(2026, 6, 1).unwrap(),
            Money::from_rupiah(amount),
            ExpenseCategory::Food,
        )
    }

    #[test]
    fn test_lazy_default() {
        let (_tmp, repo) = repo();
        let ledger = repo.month_or_default(Month::Maret).unwrap();
        assert_eq!(ledger.month, Month::Maret);
        assert_eq!(ledger.income, Money::zero());
        assert!(ledger.expenses.is_empty());
        // lazily defaulted, not persisted
        assert!(repo.get(Month::Maret).unwrap().is_none());
    }

    #[test]
    fn test_upsert_and_get() {
        let (_tmp, repo) = repo();

        let mut ledger = MonthlyLedger::new(Month::Mei);
        ledger.income = Money::from_rupiah(3_000_000);
        ledger.add_expense(expense(400_000)).unwrap();
        repo.upsert(ledger.clone()).unwrap();

        let loaded = repo.get(Month::Mei).unwrap().unwrap();
        assert_eq!(loaded, ledger);
    }

    #[test]
    fn test_save_and_reload() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("ledgers.json");

        let repo = LedgerRepository::new(path.clone());
        repo.load().unwrap();

        let mut ledger = MonthlyLedger::new(Month::Februari);
        ledger.income = Money::from_rupiah(2_500_000);
        repo.upsert(ledger).unwrap();
        repo.save().unwrap();

        let repo2 = LedgerRepository::new(path);
        repo2.load().unwrap();
        let loaded = repo2.get(Month::Februari).unwrap().unwrap();
        assert_eq!(loaded.income.rupiah(), 2_500_000);
    }

    #[test]
    fn test_get_all_sorted_by_month() {
        let (_tmp, repo) = repo();

        repo.upsert(MonthlyLedger::new(Month::Desember)).unwrap();
        repo.upsert(MonthlyLedger::new(Month::Januari)).unwrap();
        repo.upsert(MonthlyLedger::new(Month::Juni)).unwrap();

        let all = repo.get_all().unwrap();
        let months: Vec<_> = all.iter().map(|l| l.month).collect();
        assert_eq!(months, vec![Month::Januari, Month::Juni, Month::Desember]);
    }

    #[test]
    fn test_upsert_rejects_invalid_ledger() {
        let (_tmp, repo) = repo();
        let mut ledger = MonthlyLedger::new(Month::Juli);
        ledger.income = Money::from_rupiah(-100);
        assert!(repo.upsert(ledger).is_err());
    }
}
