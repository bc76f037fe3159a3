//! Terminal views for ledger summaries, the expense register, insights,
//! simulation state, and the city reference tables.

use crate::engine::CategoryTotals;
use crate::models::{ExpenseRecord, MonthlyLedger};
use crate::reference::{city_profile, City, CostDimension, FutureChoice, RandomEvent, Role};
use crate::services::{MonthSummary, Simulation};

use super::currency::{format_rupiah, format_rupiah_signed};

/// Format a month's summary: income, expenses, remaining, and the verdict
pub fn format_month_summary(summary: &MonthSummary) -> String {
    let mut output = String::new();

    output.push_str(&format!("Bulan: {}\n", summary.month));
    output.push_str(&format!(
        "  Pemasukan:   {:>15}\n",
        format_rupiah(summary.income)
    ));
    output.push_str(&format!(
        "  Pengeluaran: {:>15}\n",
        format_rupiah(summary.total_expenses)
    ));
    output.push_str(&format!(
        "  Sisa:        {:>15}\n",
        format_rupiah(summary.remaining)
    ));

    match &summary.verdict {
        Some(verdict) => {
            output.push('\n');
            output.push_str(&format!("Status: {}\n", verdict.tier.label()));
            output.push_str(&format!("  {}\n", verdict.description));
        }
        None => {
            output.push('\n');
            output.push_str("Status: belum ada pemasukan untuk bulan ini.\n");
        }
    }

    output
}

/// Format the expense register for one month, newest entries last
pub fn format_expense_register(ledger: &MonthlyLedger) -> String {
    if ledger.expenses.is_empty() {
        return format!("Belum ada pengeluaran untuk bulan {}.\n", ledger.month);
    }

    let mut output = String::new();
    output.push_str(&format!(
        "{:<14}  {:<12}  {:<16}  {:>15}\n",
        "ID", "Tanggal", "Kategori", "Jumlah"
    ));
    output.push_str(&format!(
        "{:-<14}  {:-<12}  {:-<16}  {:->15}\n",
        "", "", "", ""
    ));

    for expense in &ledger.expenses {
        output.push_str(&format!(
            "{:<14}  {:<12}  {:<16}  {:>15}\n",
            expense.id.to_string(),
            expense.date.format("%Y-%m-%d"),
            expense.category.label(),
            format_rupiah(expense.amount),
        ));
    }

    output.push_str(&format!(
        "{:-<14}  {:-<12}  {:-<16}  {:->15}\n",
        "", "", "", ""
    ));
    output.push_str(&format!(
        "{:<14}  {:<12}  {:<16}  {:>15}\n",
        "TOTAL",
        "",
        "",
        format_rupiah(ledger.total_expenses()),
    ));

    output
}

/// Format per-category totals for one month
pub fn format_category_breakdown(totals: &CategoryTotals) -> String {
    if totals.is_empty() {
        return "Belum ada pengeluaran.\n".to_string();
    }

    let mut output = String::new();
    for (category, amount) in totals.iter() {
        output.push_str(&format!(
            "  {:<16}  {:>15}\n",
            category.label(),
            format_rupiah(*amount)
        ));
    }
    output
}

/// Format the insight list as bullets
pub fn format_insights(insights: &[String]) -> String {
    let mut output = String::new();
    for insight in insights {
        output.push_str(&format!("  - {}\n", insight));
    }
    output
}

/// Format the full simulation state: income, per-dimension costs, applied
/// events, and the verdict
pub fn format_simulation(sim: &Simulation) -> String {
    let mut output = String::new();

    output.push_str(&format!("Kota: {}  |  Peran: {}\n", sim.city(), sim.role()));
    output.push_str(&format!(
        "Pemasukan bulanan: {}\n",
        format_rupiah(sim.income())
    ));
    output.push('\n');

    output.push_str("Pengeluaran bulanan:\n");
    for (dimension, amount) in sim.costs() {
        let range = sim.profile().cost_range(*dimension);
        output.push_str(&format!(
            "  {:<16}  {:>15}   ({} - {})\n",
            dimension.label(),
            format_rupiah(*amount),
            format_rupiah(range.min),
            format_rupiah(range.max),
        ));
    }

    if !sim.applied_events().is_empty() {
        output.push('\n');
        output.push_str("Kejadian:\n");
        for event in sim.applied_events() {
            output.push_str(&format!(
                "  {} {}  {}\n",
                event.emoji,
                event.title,
                format_rupiah_signed(event.impact)
            ));
        }
    }

    output.push('\n');
    output.push_str(&format!(
        "Total pengeluaran: {}\n",
        format_rupiah(sim.total_expenses())
    ));
    output.push_str(&format!("Sisa: {}\n", format_rupiah(sim.remaining())));

    if let Ok(verdict) = sim.verdict() {
        output.push('\n');
        output.push_str(&format!("Status: {}\n", verdict.tier.label()));
        output.push_str(&format!("  {}\n", verdict.description));
    }

    output
}

/// Format a random event for display after it is drawn
pub fn format_event(event: &RandomEvent) -> String {
    format!(
        "{} {}\n  {}\n  Dampak: {}\n",
        event.emoji,
        event.title,
        event.description,
        format_rupiah_signed(event.impact)
    )
}

/// Format a future choice with its outcome
pub fn format_choice(choice: &FutureChoice) -> String {
    format!(
        "{} ({})\n  {}\n  Perkiraan: {} dalam {}\n  {}\n",
        choice.title,
        choice.id,
        choice.description,
        choice.outcome.state.label(),
        choice.outcome.timeline,
        choice.outcome.reflection,
    )
}

/// Format the city reference tables: income baselines and cost ranges
pub fn format_city_reference() -> String {
    let mut output = String::new();

    for city in City::all() {
        let profile = city_profile(*city);

        output.push_str(&format!("{}\n", city));
        output.push_str("  Pemasukan dasar:\n");
        for role in Role::all() {
            output.push_str(&format!(
                "    {:<20}  {:>15}\n",
                role.name(),
                format_rupiah(profile.base_income(*role))
            ));
        }

        output.push_str("  Biaya hidup (min - max, standar):\n");
        for dimension in CostDimension::all() {
            let range = profile.cost_range(*dimension);
            output.push_str(&format!(
                "    {:<16}  {:>13} - {:<13}  ({})\n",
                dimension.label(),
                format_rupiah(range.min),
                format_rupiah(range.max),
                format_rupiah(range.default),
            ));
        }
        output.push('\n');
    }

    output
}

/// One-line rendering of an expense record for add/delete confirmations
pub fn format_expense_line(expense: &ExpenseRecord) -> String {
    format!(
        "{} | {} | {} | {}",
        expense.id,
        expense.date.format("%Y-%m-%d"),
        expense.category.label(),
        format_rupiah(expense.amount),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::{classify, StatusTier};
    use crate::models::{ExpenseCategory, Money, Month};
    use crate::reference::find_event;
    use chrono::NaiveDate;

    fn summary(income: i64, expenses: i64) -> MonthSummary {
        let income = Money::from_rupiah(income);
        let total_expenses = Money::from_rupiah(expenses);
        MonthSummary {
            month: Month::Juli,
            income,
            total_expenses,
            remaining: income - total_expenses,
            verdict: Some(classify(income, total_expenses).unwrap()),
        }
    }

    #[test]
    fn test_format_month_summary() {
        let output = format_month_summary(&summary(2_000_000, 1_600_000));
        assert!(output.contains("Juli"));
        assert!(output.contains("Rp2.000.000"));
        assert!(output.contains("Rp400.000"));
        assert!(output.contains("Layak"));
    }

    #[test]
    fn test_format_month_summary_without_income() {
        let s = MonthSummary {
            month: Month::Maret,
            income: Money::zero(),
            total_expenses: Money::zero(),
            remaining: Money::zero(),
            verdict: None,
        };
        let output = format_month_summary(&s);
        assert!(output.contains("belum ada pemasukan"));
    }

    #[test]
    fn test_format_expense_register() {
        let mut ledger = MonthlyLedger::new(Month::Juni);
        ledger
            .add_expense(ExpenseRecord::new(
                NaiveDate::from_ymd_opt(2026, 6, 3).unwrap(),
                Money::from_rupiah(75_000),
                ExpenseCategory::Transportation,
            ))
            .unwrap();

        let output = format_expense_register(&ledger);
        assert!(output.contains("Transportasi"));
        assert!(output.contains("Rp75.000"));
        assert!(output.contains("TOTAL"));
        assert!(output.contains("exp-"));
    }

    #[test]
    fn test_format_empty_register() {
        let ledger = MonthlyLedger::new(Month::Juni);
        let output = format_expense_register(&ledger);
        assert!(output.contains("Belum ada pengeluaran"));
    }

    #[test]
    fn test_format_simulation_includes_event() {
        let mut sim = Simulation::new(City::Jakarta, Role::Worker);
        sim.apply_event(find_event("bonus-job").unwrap());

        let output = format_simulation(&sim);
        assert!(output.contains("Jakarta"));
        assert!(output.contains("Kerjaan Sampingan"));
        assert!(output.contains("+Rp500.000"));
        assert!(output.contains(StatusTier::Deficit.label()));
    }

    #[test]
    fn test_format_city_reference_lists_all_cities() {
        let output = format_city_reference();
        assert!(output.contains("Jakarta"));
        assert!(output.contains("Yogyakarta"));
        assert!(output.contains("Cirebon"));
        assert!(output.contains("Rp4.800.000"));
    }
}
