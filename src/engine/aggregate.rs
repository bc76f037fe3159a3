//! Category aggregation
//!
//! Sums expense records per category and selects the dominant category.
//! The aggregate preserves first-encounter category order so the dominance
//! tie-break is arbitrary but deterministic, not hash-dependent.

use crate::error::{LayakError, LayakResult};
use crate::models::{ExpenseCategory, ExpenseRecord, Money};

/// Per-category expense totals in first-encounter order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryTotals {
    entries: Vec<(ExpenseCategory, Money)>,
}

impl CategoryTotals {
    /// Whether any category is present
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of distinct categories
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Total for one category, if present
    pub fn get(&self, category: ExpenseCategory) -> Option<Money> {
        self.entries
            .iter()
            .find(|(c, _)| *c == category)
            .map(|(_, m)| *m)
    }

    /// Iterate entries in first-encounter order
    pub fn iter(&self) -> impl Iterator<Item = &(ExpenseCategory, Money)> {
        self.entries.iter()
    }

    /// Exact sum over all categories
    pub fn total(&self) -> Money {
        self.entries.iter().map(|(_, m)| *m).sum()
    }

    /// The category with the maximum summed amount
    ///
    /// Ties resolve to the first-encountered entry (strict comparison while
    /// scanning in order).
    pub fn dominant(&self) -> Option<(ExpenseCategory, Money)> {
        let mut best: Option<(ExpenseCategory, Money)> = None;
        for (category, amount) in &self.entries {
            match best {
                Some((_, best_amount)) if *amount <= best_amount => {}
                _ => best = Some((*category, *amount)),
            }
        }
        best
    }

    /// Share of the dominant category in the total
    ///
    /// Fails with `DivisionUndefined` when the total is zero; callers guard
    /// on a non-empty expense list before asking for the ratio.
    pub fn dominance_ratio(&self) -> LayakResult<f64> {
        let total = self.total();
        if total.is_zero() {
            return Err(LayakError::DivisionUndefined("total expenses"));
        }
        let (_, dominant_amount) = self
            .dominant()
            .ok_or(LayakError::DivisionUndefined("total expenses"))?;
        Ok(dominant_amount.rupiah() as f64 / total.rupiah() as f64)
    }
}

/// Sum expense amounts per category
///
/// Only categories present in the input appear; values are exact integer
/// sums. Negative amounts fail fast with `InvalidInput`.
pub fn aggregate_by_category(records: &[ExpenseRecord]) -> LayakResult<CategoryTotals> {
    let mut totals = CategoryTotals::default();

    for record in records {
        if record.amount.is_negative() {
            return Err(LayakError::InvalidInput(format!(
                "expense amount cannot be negative: {}",
                record.amount.rupiah()
            )));
        }
        match totals
            .entries
            .iter_mut()
            .find(|(c, _)| *c == record.category)
        {
            Some((_, sum)) => *sum += record.amount,
            None => totals.entries.push((record.category, record.amount)),
        }
    }

    Ok(totals)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn expense(category: ExpenseCategory, amount: i64) -> ExpenseRecord {
        ExpenseRecord::new(
            NaiveDate::from_ymd_opt(2026, 2, 14).unwrap(),
            Money::from_rupiah(amount),
            category,
        )
    }

    #[test]
    fn test_empty_input_gives_empty_totals() {
        let totals = aggregate_by_category(&[]).unwrap();
        assert!(totals.is_empty());
        assert_eq!(totals.total(), Money::zero());
        assert!(totals.dominant().is_none());
    }

    #[test]
    fn test_sums_are_exact() {
        let records = vec![
            expense(ExpenseCategory::Food, 125_000),
            expense(ExpenseCategory::Food, 75_000),
            expense(ExpenseCategory::Housing, 1_500_000),
        ];
        let totals = aggregate_by_category(&records).unwrap();

        assert_eq!(totals.len(), 2);
        assert_eq!(
            totals.get(ExpenseCategory::Food),
            Some(Money::from_rupiah(200_000))
        );
        assert_eq!(
            totals.get(ExpenseCategory::Housing),
            Some(Money::from_rupiah(1_500_000))
        );
        // sum of aggregate values equals sum of inputs, no rounding loss
        let input_sum: Money = records.iter().map(|r| r.amount).sum();
        assert_eq!(totals.total(), input_sum);
    }

    #[test]
    fn test_dominant_category() {
        let records = vec![
            expense(ExpenseCategory::Transportation, 300_000),
            expense(ExpenseCategory::Housing, 1_000_000),
            expense(ExpenseCategory::Food, 600_000),
        ];
        let totals = aggregate_by_category(&records).unwrap();
        let (category, amount) = totals.dominant().unwrap();
        assert_eq!(category, ExpenseCategory::Housing);
        assert_eq!(amount.rupiah(), 1_000_000);
    }

    #[test]
    fn test_tie_break_is_first_encountered() {
        let records = vec![
            expense(ExpenseCategory::Food, 100),
            expense(ExpenseCategory::Housing, 100),
        ];
        // Deterministic across repeated calls
        for _ in 0..10 {
            let totals = aggregate_by_category(&records).unwrap();
            let (category, _) = totals.dominant().unwrap();
            assert_eq!(category, ExpenseCategory::Food);
        }
    }

    #[test]
    fn test_dominance_ratio() {
        let records = vec![
            expense(ExpenseCategory::Food, 750_000),
            expense(ExpenseCategory::Other, 250_000),
        ];
        let totals = aggregate_by_category(&records).unwrap();
        let ratio = totals.dominance_ratio().unwrap();
        assert!((ratio - 0.75).abs() < 1e-12);
    }

    #[test]
    fn test_dominance_ratio_zero_total() {
        let records = vec![expense(ExpenseCategory::Food, 0)];
        let totals = aggregate_by_category(&records).unwrap();
        let err = totals.dominance_ratio().unwrap_err();
        assert!(matches!(err, LayakError::DivisionUndefined(_)));
    }

    #[test]
    fn test_negative_amount_rejected() {
        let mut record = expense(ExpenseCategory::Food, 100);
        record.amount = Money::from_rupiah(-100);
        let err = aggregate_by_category(&[record]).unwrap_err();
        assert!(err.is_invalid_input());
    }

    #[test]
    fn test_add_then_delete_round_trip() {
        // N adds then N deletes by id returns aggregation to empty
        use crate::models::{Month, MonthlyLedger};

        let mut ledger = MonthlyLedger::new(Month::April);
        let mut ids = Vec::new();
        for i in 0..5 {
            let record = expense(ExpenseCategory::Other, (i + 1) * 10_000);
            ids.push(record.id);
            ledger.add_expense(record).unwrap();
        }
        assert!(!aggregate_by_category(&ledger.expenses).unwrap().is_empty());

        for id in ids {
            assert!(ledger.remove_expense(id));
        }
        let totals = aggregate_by_category(&ledger.expenses).unwrap();
        assert!(totals.is_empty());
    }
}
