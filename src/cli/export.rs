//! CLI command for CSV export

use std::path::PathBuf;

use tracing::debug;

use crate::config::settings::Settings;
use crate::error::CashlyResult;
use crate::export::to_csv;
use crate::storage::file_io::write_text_atomic;
use crate::storage::Storage;

/// Export the whole ledger to `output`, or the configured file name
///
/// Returns the path written. An empty ledger fails with `EmptyExport` before
/// any file is touched.
pub fn handle_export(
    storage: &Storage,
    settings: &Settings,
    output: Option<PathBuf>,
) -> CashlyResult<PathBuf> {
    let entries = storage.entries.get_all()?;
    let csv = to_csv(&entries)?;

    let path = output.unwrap_or_else(|| PathBuf::from(&settings.export_file_name));
    write_text_atomic(&path, &csv)?;
    debug!(path = %path.display(), rows = entries.len(), "ledger exported");

    println!("Exported {} entries to {}", entries.len(), path.display());
    Ok(path)
}
