//! Ledger service
//!
//! Business logic for the monthly tracker: setting income, adding and
//! deleting expense records, and producing summaries and insights via the
//! engine. Updates to records are delete + recreate, never in-place edits.

use chrono::NaiveDate;

use crate::engine::{classify, derive_insights, StatusVerdict};
use crate::error::{LayakError, LayakResult};
use crate::models::{ExpenseCategory, ExpenseId, ExpenseRecord, Money, Month, MonthlyLedger};
use crate::storage::Storage;

/// Service for monthly ledger management
pub struct LedgerService<'a> {
    storage: &'a Storage,
}

/// Derived figures for one month
#[derive(Debug, Clone)]
pub struct MonthSummary {
    pub month: Month,
    pub income: Money,
    pub total_expenses: Money,
    pub remaining: Money,
    /// None while income is unset; classification requires income > 0
    pub verdict: Option<StatusVerdict>,
}

impl<'a> LedgerService<'a> {
    /// Create a new ledger service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Set (or replace) a month's income
    pub fn set_income(&self, month: Month, income: Money) -> LayakResult<()> {
        if income.is_negative() {
            return Err(LayakError::InvalidInput(format!(
                "income cannot be negative: {}",
                income.rupiah()
            )));
        }

        let mut ledger = self.storage.ledgers.month_or_default(month)?;
        ledger.income = income;
        self.storage.ledgers.upsert(ledger)
    }

    /// Add an expense record to a month
    pub fn add_expense(
        &self,
        month: Month,
        date: NaiveDate,
        amount: Money,
        category: ExpenseCategory,
    ) -> LayakResult<ExpenseRecord> {
        let record = ExpenseRecord::new(date, amount, category);
        record.validate()?;

        let mut ledger = self.storage.ledgers.month_or_default(month)?;
        ledger.add_expense(record.clone())?;
        self.storage.ledgers.upsert(ledger)?;

        Ok(record)
    }

    /// Delete an expense record by id
    pub fn delete_expense(&self, month: Month, id: ExpenseId) -> LayakResult<()> {
        let mut ledger = self.storage.ledgers.month_or_default(month)?;
        if !ledger.remove_expense(id) {
            return Err(LayakError::expense_not_found(id.to_string()));
        }
        self.storage.ledgers.upsert(ledger)
    }

    /// Find an expense record by its short display id (e.g. `exp-1a2b3c4d`)
    /// or full UUID
    pub fn find_expense(&self, month: Month, query: &str) -> LayakResult<ExpenseRecord> {
        let ledger = self.storage.ledgers.month_or_default(month)?;
        let needle = query.trim();

        ledger
            .expenses
            .iter()
            .find(|e| e.id.to_string() == needle || e.id.as_uuid().to_string() == needle)
            .cloned()
            .ok_or_else(|| LayakError::expense_not_found(needle))
    }

    /// Read-only snapshot of a month's ledger (lazily defaulted)
    pub fn ledger(&self, month: Month) -> LayakResult<MonthlyLedger> {
        self.storage.ledgers.month_or_default(month)
    }

    /// Derived summary for a month
    ///
    /// The verdict is only computed once income is positive; before that the
    /// month is in an unready state and carries no classification.
    pub fn summary(&self, month: Month) -> LayakResult<MonthSummary> {
        let ledger = self.ledger(month)?;
        let total_expenses = ledger.total_expenses();

        let verdict = if ledger.income.is_positive() {
            Some(classify(ledger.income, total_expenses)?)
        } else {
            None
        };

        Ok(MonthSummary {
            month,
            income: ledger.income,
            total_expenses,
            remaining: ledger.income - total_expenses,
            verdict,
        })
    }

    /// Reflective insights for a month, using the previous month's expenses
    /// for the comparison rule
    pub fn insights(&self, month: Month) -> LayakResult<Vec<String>> {
        let ledger = self.ledger(month)?;

        let previous_expenses = match month.previous() {
            Some(prev) => self.ledger(prev)?.expenses,
            None => Vec::new(),
        };

        derive_insights(ledger.income, &ledger.expenses, &previous_expenses)
    }
}
