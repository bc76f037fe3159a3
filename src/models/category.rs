//! Expense categories
//!
//! Categories form a fixed closed set. Modeling them as an enum makes lookups
//! on parsed values infallible; parsing an out-of-set string is the single
//! well-defined `UnknownCategory` error.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::LayakError;

/// Fixed set of expense categories for monthly records
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExpenseCategory {
    Food,
    Housing,
    Transportation,
    InternetAndPhone,
    Education,
    Other,
}

impl ExpenseCategory {
    /// All categories, in display order
    pub fn all() -> &'static [Self] {
        &[
            Self::Food,
            Self::Housing,
            Self::Transportation,
            Self::InternetAndPhone,
            Self::Education,
            Self::Other,
        ]
    }

    /// Indonesian display label
    pub fn label(&self) -> &'static str {
        match self {
            Self::Food => "Makan",
            Self::Housing => "Tempat Tinggal",
            Self::Transportation => "Transportasi",
            Self::InternetAndPhone => "Internet & HP",
            Self::Education => "Pendidikan",
            Self::Other => "Lainnya",
        }
    }

    /// Stable machine-readable name (used on the CLI)
    pub fn name(&self) -> &'static str {
        match self {
            Self::Food => "food",
            Self::Housing => "housing",
            Self::Transportation => "transportation",
            Self::InternetAndPhone => "internet",
            Self::Education => "education",
            Self::Other => "other",
        }
    }
}

impl fmt::Display for ExpenseCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for ExpenseCategory {
    type Err = LayakError;

    /// Accepts the machine name ("food") or the Indonesian label ("Makan"),
    /// case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_lowercase();
        for category in Self::all() {
            if needle == category.name() || needle == category.label().to_lowercase() {
                return Ok(*category);
            }
        }
        Err(LayakError::UnknownCategory(s.to_string()))
    }
}
