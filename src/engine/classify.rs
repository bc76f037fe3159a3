//! Financial status classification
//!
//! Pure functions turning an income total and an expense total into a
//! three-tier status verdict. The decision variable is the surplus ratio
//! `(income - expenses) / income`; tier boundaries sit at 20% and 0% and are
//! evaluated in exact integer form so the partition has no gap or overlap.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{LayakError, LayakResult};
use crate::models::Money;

/// The three financial-health tiers
///
/// The Indonesian labels are a compatibility contract: callers key display
/// styling off them, so they must be reproduced exactly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusTier {
    Adequate,
    Breakeven,
    Deficit,
}

impl StatusTier {
    /// Indonesian display label
    pub fn label(&self) -> &'static str {
        match self {
            Self::Adequate => "Layak",
            Self::Breakeven => "Pas-pasan",
            Self::Deficit => "Defisit",
        }
    }
}

impl fmt::Display for StatusTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// A derived status verdict: tier plus human-readable rationale
///
/// Recomputed on every evaluation, never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusVerdict {
    pub tier: StatusTier,
    pub description: String,
}

const DESC_ADEQUATE: &str =
    "Pendapatan mencukupi untuk hidup layak dengan sisa untuk tabungan";
const DESC_BREAKEVEN: &str =
    "Pendapatan pas-pasan, tidak ada ruang untuk tabungan atau kejutan";
const DESC_DEFICIT: &str =
    "Pengeluaran melebihi pendapatan, perlu mencari tambahan atau mengurangi biaya";

/// Classify income against total expenses
///
/// Requires `income > 0`; the caller gates on income being set before asking
/// for a verdict. Policy, first match wins:
///
/// - surplus ratio >= 20% -> `Adequate` (boundary inclusive)
/// - surplus ratio >= 0%  -> `Breakeven` (boundary inclusive)
/// - otherwise            -> `Deficit`
pub fn classify(income: Money, total_expenses: Money) -> LayakResult<StatusVerdict> {
    if !income.is_positive() {
        return Err(LayakError::InvalidInput(format!(
            "income must be positive to classify, got {}",
            income.rupiah()
        )));
    }
    if total_expenses.is_negative() {
        return Err(LayakError::InvalidInput(format!(
            "total expenses cannot be negative, got {}",
            total_expenses.rupiah()
        )));
    }

    let remaining = income - total_expenses;

    // remaining / income >= 1/5, kept in integers so the boundary is exact
    let (tier, description) = if remaining.rupiah() * 5 >= income.rupiah() {
        (StatusTier::Adequate, DESC_ADEQUATE)
    } else if !remaining.is_negative() {
        (StatusTier::Breakeven, DESC_BREAKEVEN)
    } else {
        (StatusTier::Deficit, DESC_DEFICIT)
    };

    Ok(StatusVerdict {
        tier,
        description: description.to_string(),
    })
}

/// The surplus ratio `(income - expenses) / income` as a real value
///
/// Fails with `DivisionUndefined` when income is zero rather than producing
/// NaN or infinity.
pub fn surplus_ratio(income: Money, total_expenses: Money) -> LayakResult<f64> {
    if income.is_zero() {
        return Err(LayakError::DivisionUndefined("income"));
    }
    Ok((income - total_expenses).rupiah() as f64 / income.rupiah() as f64)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rp(amount: i64) -> Money {
        Money::from_rupiah(amount)
    }

    #[test]
    fn test_adequate_at_exact_20_percent() {
        // 2.0M income, 1.6M expenses -> ratio exactly 20%, boundary inclusive
        let verdict = classify(rp(2_000_000), rp(1_600_000)).unwrap();
        assert_eq!(verdict.tier, StatusTier::Adequate);
        assert_eq!(verdict.tier.label(), "Layak");
    }

    #[test]
    fn test_breakeven_just_below_20_percent() {
        let verdict = classify(rp(2_000_000), rp(1_600_001)).unwrap();
        assert_eq!(verdict.tier, StatusTier::Breakeven);
    }

    #[test]
    fn test_breakeven_at_10_percent() {
        let verdict = classify(rp(2_000_000), rp(1_800_000)).unwrap();
        assert_eq!(verdict.tier, StatusTier::Breakeven);
        assert_eq!(verdict.tier.label(), "Pas-pasan");
    }

    #[test]
    fn test_breakeven_at_exact_zero() {
        // ratio exactly 0 is Breakeven, not Deficit
        let verdict = classify(rp(1_000_000), rp(1_000_000)).unwrap();
        assert_eq!(verdict.tier, StatusTier::Breakeven);
    }

    #[test]
    fn test_deficit_just_past_zero() {
        let verdict = classify(rp(1_000_000), rp(1_000_001)).unwrap();
        assert_eq!(verdict.tier, StatusTier::Deficit);
        assert_eq!(verdict.tier.label(), "Defisit");
    }

    #[test]
    fn test_deficit_scenario() {
        // 4.8M income vs 5.6M expenses -> remaining -800k, ratio ~ -16.7%
        let verdict = classify(rp(4_800_000), rp(5_600_000)).unwrap();
        assert_eq!(verdict.tier, StatusTier::Deficit);
        let ratio = surplus_ratio(rp(4_800_000), rp(5_600_000)).unwrap();
        assert!((ratio - (-1.0 / 6.0)).abs() < 1e-9);
    }

    #[test]
    fn test_zero_income_rejected() {
        let err = classify(Money::zero(), rp(100_000)).unwrap_err();
        assert!(err.is_invalid_input());
    }

    #[test]
    fn test_negative_expenses_rejected() {
        let err = classify(rp(1_000_000), rp(-1)).unwrap_err();
        assert!(err.is_invalid_input());
    }

    #[test]
    fn test_tiers_partition_the_domain() {
        // Walk expenses across the whole range; exactly one tier each time,
        // and the tier sequence is monotone Adequate -> Breakeven -> Deficit.
        let income = rp(1_000_000);
        let mut last = StatusTier::Adequate;
        for expenses in (0..=1_200_000).step_by(50_000) {
            let tier = classify(income, rp(expenses)).unwrap().tier;
            let rank = |t: StatusTier| match t {
                StatusTier::Adequate => 0,
                StatusTier::Breakeven => 1,
                StatusTier::Deficit => 2,
            };
            assert!(rank(tier) >= rank(last));
            last = tier;
        }
        assert_eq!(last, StatusTier::Deficit);
    }

    #[test]
    fn test_classify_is_idempotent() {
        let a = classify(rp(3_500_000), rp(3_000_000)).unwrap();
        let b = classify(rp(3_500_000), rp(3_000_000)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_surplus_ratio_zero_income() {
        let err = surplus_ratio(Money::zero(), rp(10)).unwrap_err();
        assert!(matches!(err, LayakError::DivisionUndefined("income")));
    }
}
