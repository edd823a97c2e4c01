//! Reports module for Cashly
//!
//! Pure computations over the ledger: the summary (totals, savings rate,
//! budget status) and expense totals by category for the chart.

pub mod category;
pub mod summary;

pub use category::{
    aggregate_expenses_by_category, render_expense_chart, BarChart, CategoryTotal,
    EMPTY_CHART_MESSAGE,
};
pub use summary::{summarize, BudgetStatus, Summary};
