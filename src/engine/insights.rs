//! Reflective insight derivation
//!
//! Turns a month's ledger snapshot (plus the previous month's expenses) into
//! an ordered list of non-judgemental insight sentences. Rules run in a fixed
//! sequence and each appends at most one insight; the closing empathy
//! sentence is always last, so the result has between 2 and 4 entries.

use crate::engine::aggregate::aggregate_by_category;
use crate::error::{LayakError, LayakResult};
use crate::models::{ExpenseRecord, Money};

const INSIGHT_DEFICIT: &str = "Pendapatan belum sepenuhnya menutup kebutuhan dasar. \
                               Kondisi ini umum dialami banyak orang di Indonesia.";
const INSIGHT_THIN_MARGIN: &str = "Sisa pendapatan cukup tipis. Banyak orang mengalami \
                                   kondisi serupa, kamu tidak sendirian.";
const INSIGHT_STABLE: &str = "Pola pengeluaran relatif stabil dibanding bulan lalu.";
const INSIGHT_CLOSING: &str = "Hidup layak adalah hak setiap orang. Memahami pola keuangan \
                               adalah langkah pertama.";

/// Derive the ordered insight list for a month
///
/// Preconditions: `income > 0` and a positive expense total; both are caller
/// responsibilities and fail fast with `InvalidInput`. A month whose records
/// all carry zero amounts has nothing to reflect on, same as an empty list.
/// Passing an empty slice for `previous_month_expenses` means "no previous
/// month" and suppresses the comparison insight.
pub fn derive_insights(
    income: Money,
    current_expenses: &[ExpenseRecord],
    previous_month_expenses: &[ExpenseRecord],
) -> LayakResult<Vec<String>> {
    if !income.is_positive() {
        return Err(LayakError::InvalidInput(format!(
            "income must be positive to derive insights, got {}",
            income.rupiah()
        )));
    }

    let totals = aggregate_by_category(current_expenses)?;
    let total_expenses = totals.total();
    if !total_expenses.is_positive() {
        return Err(LayakError::InvalidInput(
            "cannot derive insights without expenses for the month".into(),
        ));
    }

    let previous_total: Money = previous_month_expenses.iter().map(|e| e.amount).sum();

    let mut insights = Vec::with_capacity(4);

    // 1. Dominant category share; total is positive so the ratio is defined
    if let Some((category, _)) = totals.dominant() {
        let percentage = (totals.dominance_ratio()? * 100.0).round() as i64;
        insights.push(format!(
            "Pengeluaran {} mendominasi {}% dari total pengeluaran bulan ini.",
            category.label(),
            percentage
        ));
    }

    // 2. Deficit / thin-margin empathy, mutually exclusive
    let remaining = income - total_expenses;
    if remaining.is_negative() {
        insights.push(INSIGHT_DEFICIT.to_string());
    } else if remaining.rupiah() * 5 < income.rupiah() {
        // remaining < 20% of income, exact integer test
        insights.push(INSIGHT_THIN_MARGIN.to_string());
    }

    // 3. Month-over-month comparison, only when there is a previous total
    if previous_total.is_positive() {
        let change = (total_expenses - previous_total).rupiah() as f64
            / previous_total.rupiah() as f64
            * 100.0;
        if change > 10.0 {
            insights.push(format!(
                "Pengeluaran naik {}% dari bulan lalu. Ini normal karena kebutuhan yang berubah.",
                change.round() as i64
            ));
        } else if change < -10.0 {
            insights.push(format!(
                "Pengeluaran turun {}% dari bulan lalu.",
                change.abs().round() as i64
            ));
        } else {
            insights.push(INSIGHT_STABLE.to_string());
        }
    }

    // 4. Closing empathy, always last
    insights.push(INSIGHT_CLOSING.to_string());

    Ok(insights)
}
