//! Display formatting for terminal output
//!
//! Rupiah formatting plus plain-text views for summaries, the expense
//! register, insights, simulation state, and the reference tables.

pub mod currency;
pub mod summary;

pub use currency::{format_rupiah, format_rupiah_signed};
pub use summary::{
    format_category_breakdown, format_choice, format_city_reference, format_event,
    format_expense_line, format_expense_register, format_insights, format_month_summary,
    format_simulation,
};
