//! CSV Export functionality
//!
//! Writes the ledger as a spreadsheet-compatible CSV document. Amounts are
//! plain numbers without trailing zeros, the same form the ledger stores.

use std::io::Write;

use csv::{QuoteStyle, Terminator, WriterBuilder};

use crate::error::{CashlyError, CashlyResult};
use crate::models::{Entry, DATE_FORMAT};

/// Header row of the export
pub const CSV_HEADERS: [&str; 5] = ["fecha", "tipo", "descripcion", "categoria", "monto"];

/// Stream `entries` as CSV to `writer`, returning the number of data rows
///
/// The header row is always written. Rows follow the order of `entries`.
pub fn export_entries_csv<'a, I, W>(entries: I, writer: W) -> CashlyResult<usize>
where
    I: IntoIterator<Item = &'a Entry>,
    W: Write,
{
    let mut csv_writer = WriterBuilder::new()
        .quote_style(QuoteStyle::Necessary)
        .terminator(Terminator::Any(b'\n'))
        .from_writer(writer);

    csv_writer.write_record(CSV_HEADERS).map_err(export_error)?;

    let mut rows = 0;
    for entry in entries {
        let date = entry.date.format(DATE_FORMAT).to_string();
        let amount = entry.amount.to_plain_string();
        csv_writer
            .write_record([
                date.as_str(),
                entry.entry_type.as_str(),
                entry.description.as_str(),
                entry.category.as_str(),
                amount.as_str(),
            ])
            .map_err(export_error)?;
        rows += 1;
    }

    csv_writer
        .flush()
        .map_err(|e| CashlyError::Export(e.to_string()))?;

    Ok(rows)
}

/// Render `entries` as a CSV string
///
/// Fails with [`CashlyError::EmptyExport`] when there is nothing to export.
pub fn to_csv(entries: &[Entry]) -> CashlyResult<String> {
    if entries.is_empty() {
        return Err(CashlyError::EmptyExport);
    }

    let mut buffer = Vec::new();
    export_entries_csv(entries, &mut buffer)?;

    String::from_utf8(buffer).map_err(|e| CashlyError::Export(e.to_string()))
}

fn export_error(err: csv::Error) -> CashlyError {
    CashlyError::Export(err.to_string())
}
