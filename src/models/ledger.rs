//! Month labels and the monthly ledger
//!
//! A ledger holds one month's income and its expense records. Months form a
//! fixed ordered twelve-label sequence; ledgers are created lazily with zero
//! income and no expenses the first time a month is referenced.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::expense::ExpenseRecord;
use super::ids::ExpenseId;
use super::money::Money;
use crate::error::{LayakError, LayakResult};

/// The fixed ordered sequence of month labels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Month {
    Januari,
    Februari,
    Maret,
    April,
    Mei,
    Juni,
    Juli,
    Agustus,
    September,
    Oktober,
    November,
    Desember,
}

impl Month {
    /// All months in calendar order
    pub fn all() -> &'static [Self] {
        &[
            Self::Januari,
            Self::Februari,
            Self::Maret,
            Self::April,
            Self::Mei,
            Self::Juni,
            Self::Juli,
            Self::Agustus,
            Self::September,
            Self::Oktober,
            Self::November,
            Self::Desember,
        ]
    }

    /// Zero-based position in the sequence
    pub fn index(&self) -> usize {
        Self::all().iter().position(|m| m == self).unwrap_or(0)
    }

    /// The month before this one, if any
    ///
    /// Januari has no predecessor; month-over-month comparison simply does
    /// not apply to it.
    pub fn previous(&self) -> Option<Self> {
        let idx = self.index();
        if idx == 0 {
            None
        } else {
            Some(Self::all()[idx - 1])
        }
    }

    /// Indonesian display label
    pub fn label(&self) -> &'static str {
        match self {
            Self::Januari => "Januari",
            Self::Februari => "Februari",
            Self::Maret => "Maret",
            Self::April => "April",
            Self::Mei => "Mei",
            Self::Juni => "Juni",
            Self::Juli => "Juli",
            Self::Agustus => "Agustus",
            Self::September => "September",
            Self::Oktober => "Oktober",
            Self::November => "November",
            Self::Desember => "Desember",
        }
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for Month {
    type Err = LayakError;

    /// Accepts the Indonesian month name (case-insensitive) or "1".."12"
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();

        if let Ok(n) = needle.parse::<usize>() {
            if (1..=12).contains(&n) {
                return Ok(Self::all()[n - 1]);
            }
            return Err(LayakError::UnknownMonth(s.to_string()));
        }

        let lower = needle.to_lowercase();
        for month in Self::all() {
            if lower == month.label().to_lowercase() {
                return Ok(*month);
            }
        }
        Err(LayakError::UnknownMonth(s.to_string()))
    }
}

/// One month's income and expense records
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlyLedger {
    /// Which month this ledger covers
    pub month: Month,

    /// Monthly income, non-negative
    pub income: Money,

    /// Expense records in insertion order
    pub expenses: Vec<ExpenseRecord>,
}

impl MonthlyLedger {
    /// Create an empty ledger for a month (zero income, no expenses)
    pub fn new(month: Month) -> Self {
        Self {
            month,
            income: Money::zero(),
            expenses: Vec::new(),
        }
    }

    /// Sum of all expense amounts, exact integer addition
    pub fn total_expenses(&self) -> Money {
        self.expenses.iter().map(|e| e.amount).sum()
    }

    /// Income minus total expenses (may be negative)
    pub fn remaining(&self) -> Money {
        self.income - self.total_expenses()
    }

    /// Append a validated expense record
    pub fn add_expense(&mut self, record: ExpenseRecord) -> LayakResult<()> {
        record.validate()?;
        self.expenses.push(record);
        Ok(())
    }

    /// Remove an expense by id; returns whether a record was removed
    pub fn remove_expense(&mut self, id: ExpenseId) -> bool {
        let before = self.expenses.len();
        self.expenses.retain(|e| e.id != id);
        self.expenses.len() != before
    }

    /// Validate the ledger
    pub fn validate(&self) -> LayakResult<()> {
        if self.income.is_negative() {
            return Err(LayakError::InvalidInput(format!(
                "income cannot be negative: {}",
                self.income.rupiah()
            )));
        }
        for expense in &self.expenses {
            expense.validate()?;
        }
        Ok(())
    }
}
