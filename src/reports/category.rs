//! Expense totals by category
//!
//! Groups expense entries by category label and feeds the result to a bar
//! chart.

use std::collections::HashMap;

use crate::models::{Entry, Money};

/// Message shown instead of a chart when there are no expenses
pub const EMPTY_CHART_MESSAGE: &str = "Add expenses to see the chart.";

/// Total spent in one category
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryTotal {
    pub category: String,
    pub total: Money,
}

/// Sum expense amounts per category
///
/// Categories appear in the order they are first met in `entries`. Income
/// entries are ignored; no expenses gives an empty vector.
pub fn aggregate_expenses_by_category<'a, I>(entries: I) -> Vec<CategoryTotal>
where
    I: IntoIterator<Item = &'a Entry>,
{
    let mut totals: Vec<CategoryTotal> = Vec::new();
    let mut index: HashMap<&'a str, usize> = HashMap::new();

    for entry in entries.into_iter().filter(|e| e.is_expense()) {
        match index.get(entry.category.as_str()) {
            Some(&i) => totals[i].total += entry.amount,
            None => {
                index.insert(entry.category.as_str(), totals.len());
                totals.push(CategoryTotal {
                    category: entry.category.clone(),
                    total: entry.amount,
                });
            }
        }
    }

    totals
}

/// A drawing surface for labelled bars
pub trait BarChart {
    /// Draw one bar per label; `labels` and `values` have equal length
    fn draw_bars(&mut self, labels: &[&str], values: &[Money]);

    /// Draw a message in place of the bars
    fn draw_placeholder(&mut self, message: &str);
}

/// Hand category totals to a chart, or the placeholder when there are none
pub fn render_expense_chart<C: BarChart + ?Sized>(chart: &mut C, totals: &[CategoryTotal]) {
    if totals.is_empty() {
        chart.draw_placeholder(EMPTY_CHART_MESSAGE);
        return;
    }

    let labels: Vec<&str> = totals.iter().map(|t| t.category.as_str()).collect();
    let values: Vec<Money> = totals.iter().map(|t| t.total).collect();
    chart.draw_bars(&labels, &values);
}
