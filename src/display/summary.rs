//! Summary display formatting
//!
//! Renders totals, savings rate and budget alerts for the terminal.

use crate::models::Money;
use crate::reports::{BudgetStatus, Summary};

/// Prompt shown while no budget is set
pub const UNDEFINED_BUDGET_PROMPT: &str = "Set a monthly budget to receive alerts.";

/// Format the totals block
pub fn format_summary(summary: &Summary, symbol: &str) -> String {
    let mut output = String::new();

    output.push_str(&format!(
        "{:<14} {:>14}\n",
        "Income:",
        summary.income.format_with_symbol(symbol)
    ));
    output.push_str(&format!(
        "{:<14} {:>14}\n",
        "Expenses:",
        summary.expense.format_with_symbol(symbol)
    ));
    output.push_str(&format!(
        "{:<14} {:>14}\n",
        "Balance:",
        summary.balance.format_with_symbol(symbol)
    ));
    output.push_str(&format!(
        "{:<14} {:>14}\n",
        "Savings rate:",
        format!("{:.1}%", summary.savings_rate)
    ));

    output
}

/// Line describing the budget itself
pub fn format_budget_line(budget: Money, symbol: &str) -> String {
    if budget.is_positive() {
        format!("Current budget: {}", budget.format_with_symbol(symbol))
    } else {
        UNDEFINED_BUDGET_PROMPT.to_string()
    }
}

/// Alert text for statuses that need one
pub fn format_budget_alert(status: &BudgetStatus, symbol: &str) -> Option<String> {
    match status {
        BudgetStatus::Warning { percent_used } => Some(format!(
            "Warning: you have used {:.1}% of your budget.",
            percent_used
        )),
        BudgetStatus::Exceeded { amount_over } => Some(format!(
            "Alert: you exceeded your budget by {}.",
            amount_over.format_with_symbol(symbol)
        )),
        BudgetStatus::Undefined | BudgetStatus::Ok => None,
    }
}

/// Summary block followed by the budget line and any alert
pub fn format_summary_with_budget(summary: &Summary, budget: Money, symbol: &str) -> String {
    let mut output = format_summary(summary, symbol);
    output.push('\n');
    output.push_str(&format_budget_line(budget, symbol));
    output.push('\n');

    if let Some(alert) = format_budget_alert(&summary.budget_status, symbol) {
        output.push_str(&alert);
        output.push('\n');
    }

    output
}
