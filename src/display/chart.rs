//! Terminal bar chart

use crate::display::report::format_bar;
use crate::models::Money;
use crate::reports::BarChart;

/// Default bar width in characters
pub const DEFAULT_BAR_WIDTH: usize = 30;

/// Horizontal bar chart rendered into a text buffer
///
/// Bars are scaled to the largest value; each row shows the label, the bar and
/// the formatted amount.
pub struct TerminalBarChart {
    width: usize,
    symbol: String,
    output: String,
}

impl TerminalBarChart {
    pub fn new(symbol: impl Into<String>) -> Self {
        Self::with_width(symbol, DEFAULT_BAR_WIDTH)
    }

    pub fn with_width(symbol: impl Into<String>, width: usize) -> Self {
        Self {
            width,
            symbol: symbol.into(),
            output: String::new(),
        }
    }

    /// Text drawn so far
    pub fn output(&self) -> &str {
        &self.output
    }

    pub fn into_output(self) -> String {
        self.output
    }
}

impl BarChart for TerminalBarChart {
    fn draw_bars(&mut self, labels: &[&str], values: &[Money]) {
        let max = values
            .iter()
            .map(|v| v.cents())
            .max()
            .unwrap_or(0) as f64;
        let label_width = labels.iter().map(|l| l.chars().count()).max().unwrap_or(0);

        for (label, value) in labels.iter().zip(values) {
            self.output.push_str(&format!(
                "{:<label_width$}  {}  {}\n",
                label,
                format_bar(value.cents() as f64, max, self.width),
                value.format_with_symbol(&self.symbol),
                label_width = label_width
            ));
        }
    }

    fn draw_placeholder(&mut self, message: &str) {
        self.output.push_str(message);
        self.output.push('\n');
    }
}
