//! Money type for representing Rupiah amounts
//!
//! Internally stores amounts as whole Rupiah (i64). Rupiah has no fractional
//! sub-unit in everyday use, so arithmetic is exact integer addition and
//! subtraction with no floating-point drift.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};

use crate::error::LayakError;

/// A monetary amount in whole Rupiah
///
/// Signed so that impacts and remaining balances can be negative; income and
/// expense amounts are validated as non-negative where they are created.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    /// Create a Money amount from whole Rupiah
    ///
    /// # Examples
    /// ```
    /// use layak_cli::models::Money;
    /// let amount = Money::from_rupiah(1_500_000);
    /// ```
    pub const fn from_rupiah(rupiah: i64) -> Self {
        Self(rupiah)
    }

    /// Create a zero Money amount
    pub const fn zero() -> Self {
        Self(0)
    }

    /// Get the amount in whole Rupiah
    pub const fn rupiah(&self) -> i64 {
        self.0
    }

    /// Check if the amount is zero
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Check if the amount is positive
    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    /// Check if the amount is negative
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Get the absolute value
    pub const fn abs(&self) -> Self {
        Self(self.0.abs())
    }

    /// Parse a money amount from a string
    ///
    /// Accepts plain integers ("1500000"), dot-grouped Indonesian notation
    /// ("1.500.000"), and an optional "Rp" prefix ("Rp1.500.000").
    pub fn parse(s: &str) -> Result<Self, LayakError> {
        let s = s.trim();

        let (negative, s) = if let Some(stripped) = s.strip_prefix('-') {
            (true, stripped)
        } else {
            (false, s)
        };

        let s = s.strip_prefix("Rp").unwrap_or(s).trim_start();

        if s.is_empty() {
            return Err(LayakError::InvalidInput(format!(
                "not a money amount: {:?}",
                s
            )));
        }

        // Dots are thousands separators in id-ID notation, never decimals
        let digits: String = s.chars().filter(|c| *c != '.').collect();
        let rupiah: i64 = digits
            .parse()
            .map_err(|_| LayakError::InvalidInput(format!("not a money amount: {:?}", s)))?;

        Ok(Self(if negative { -rupiah } else { rupiah }))
    }
}

impl Default for Money {
    fn default() -> Self {
        Self::zero()
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", crate::display::format_rupiah(*self))
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0 + other.0)
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl Sub for Money {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self(self.0 - other.0)
    }
}

impl SubAssign for Money {
    fn sub_assign(&mut self, other: Self) {
        self.0 -= other.0;
    }
}

impl Neg for Money {
    type Output = Self;

    fn neg(self) -> Self {
        Self(-self.0)
    }
}

impl std::iter::Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, m| acc + m)
    }
}
