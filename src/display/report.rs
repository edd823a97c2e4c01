//! Report formatting for terminal output
//!
//! Small layout helpers plus the printable report, a plain-text document that
//! gathers the summary, budget alert, ledger table and expense chart.

use chrono::NaiveDate;

use crate::display::chart::TerminalBarChart;
use crate::display::entry::format_entry_table;
use crate::display::summary::format_summary_with_budget;
use crate::models::{Entry, Money, DATE_FORMAT};
use crate::reports::{aggregate_expenses_by_category, render_expense_chart, Summary};

/// Width of the printable report
pub const REPORT_WIDTH: usize = 60;

/// Create a simple bar chart representation
pub fn format_bar(value: f64, max_value: f64, width: usize) -> String {
    if max_value <= 0.0 || value <= 0.0 {
        return " ".repeat(width);
    }

    let filled = ((value / max_value) * width as f64).round() as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Format a header line with padding
pub fn format_header(title: &str, width: usize) -> String {
    let len = title.chars().count();
    let padding = if len >= width { 0 } else { (width - len) / 2 };
    format!("{}{}", " ".repeat(padding), title)
}

/// Format a separator line
pub fn separator(width: usize) -> String {
    "─".repeat(width)
}

/// Format a double separator line
pub fn double_separator(width: usize) -> String {
    "═".repeat(width)
}

fn section(output: &mut String, title: &str) {
    output.push('\n');
    output.push_str(title);
    output.push('\n');
    output.push_str(&separator(REPORT_WIDTH));
    output.push('\n');
}

/// Build the printable report for `entries` against `budget`
pub fn format_printable_report(
    entries: &[Entry],
    budget: Money,
    symbol: &str,
    generated_on: NaiveDate,
) -> String {
    let summary = Summary::compute(entries, budget);
    let mut output = String::new();

    output.push_str(&double_separator(REPORT_WIDTH));
    output.push('\n');
    output.push_str(&format_header("CASHLY FINANCE REPORT", REPORT_WIDTH));
    output.push('\n');
    output.push_str(&format_header(
        &generated_on.format(DATE_FORMAT).to_string(),
        REPORT_WIDTH,
    ));
    output.push('\n');
    output.push_str(&double_separator(REPORT_WIDTH));
    output.push('\n');

    section(&mut output, "Summary");
    output.push_str(&format_summary_with_budget(&summary, budget, symbol));

    section(&mut output, "Entries");
    output.push_str(&format_entry_table(entries, symbol));

    section(&mut output, "Expenses by category");
    let mut chart = TerminalBarChart::new(symbol);
    render_expense_chart(&mut chart, &aggregate_expenses_by_category(entries));
    output.push_str(chart.output());

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{EntryDraft, EntryType};
    use crate::reports::EMPTY_CHART_MESSAGE;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, 31).unwrap()
    }

    #[test]
    fn test_format_bar() {
        let bar = format_bar(50.0, 100.0, 10);
        assert_eq!(bar.chars().filter(|c| *c == '█').count(), 5);
        assert_eq!(format_bar(0.0, 100.0, 4), "    ");
    }

    #[test]
    fn test_format_header_centres() {
        assert_eq!(format_header("abc", 9), "   abc");
        assert_eq!(format_header("toolong", 3), "toolong");
    }

    #[test]
    fn test_report_sections() {
        let entries = vec![
            EntryDraft::new(EntryType::Expense, "Cine", "Ocio", 850.0, "2025-03-20")
                .into_entry()
                .unwrap(),
            EntryDraft::new(EntryType::Income, "Nomina", "Salario", 1000.0, "2025-03-01")
                .into_entry()
                .unwrap(),
        ];

        let report = format_printable_report(&entries, Money::from_units(1000), "$", date());

        assert!(report.contains("CASHLY FINANCE REPORT"));
        assert!(report.contains("2025-03-31"));
        assert!(report.contains("Warning: you have used 85.0% of your budget."));
        assert!(report.contains("Cine"));
        assert!(report.contains("Ocio"));
        assert!(report.contains("$850.00"));
    }

    #[test]
    fn test_empty_report() {
        let report = format_printable_report(&[], Money::zero(), "$", date());
        assert!(report.contains("No entries yet."));
        assert!(report.contains(EMPTY_CHART_MESSAGE));
    }
}
