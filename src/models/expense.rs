//! Expense record model
//!
//! An expense record is immutable once created; the observed update flow is
//! delete + recreate, never in-place mutation.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::category::ExpenseCategory;
use super::ids::ExpenseId;
use super::money::Money;
use crate::error::{LayakError, LayakResult};

/// A single expense entry in a monthly ledger
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpenseRecord {
    /// Unique identifier
    pub id: ExpenseId,

    /// Calendar date the expense occurred
    pub date: NaiveDate,

    /// Amount in whole Rupiah, non-negative
    pub amount: Money,

    /// Expense category
    pub category: ExpenseCategory,
}

impl ExpenseRecord {
    /// Create a new expense record with a fresh id
    pub fn new(date: NaiveDate, amount: Money, category: ExpenseCategory) -> Self {
        Self {
            id: ExpenseId::new(),
            date,
            amount,
            category,
        }
    }

    /// Validate the record
    pub fn validate(&self) -> LayakResult<()> {
        if self.amount.is_negative() {
            return Err(LayakError::InvalidInput(format!(
                "expense amount cannot be negative: {}",
                self.amount.rupiah()
            )));
        }
        Ok(())
    }
}
