//! Append-only history journal
//!
//! One JSON record per line. Lines that no longer parse are skipped on read.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use tracing::warn;

use crate::error::{CashlyError, CashlyResult};
use crate::storage::file_io::read_text;

use super::event::HistoryRecord;

/// JSON-lines journal of ledger events
#[derive(Debug, Clone)]
pub struct HistoryJournal {
    path: PathBuf,
}

impl HistoryJournal {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append a record to the end of the journal
    pub fn append(&self, record: &HistoryRecord) -> CashlyResult<()> {
        let line = serde_json::to_string(record)?;

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|e| CashlyError::Io(format!("Failed to open history journal: {}", e)))?;
        writeln!(file, "{}", line)
            .map_err(|e| CashlyError::Io(format!("Failed to write history journal: {}", e)))?;

        Ok(())
    }

    /// The last `count` records, oldest first
    pub fn recent(&self, count: usize) -> CashlyResult<Vec<HistoryRecord>> {
        let text = match read_text(&self.path)? {
            Some(text) => text,
            None => return Ok(Vec::new()),
        };

        let mut records: Vec<HistoryRecord> = text
            .lines()
            .enumerate()
            .filter(|(_, line)| !line.trim().is_empty())
            .filter_map(|(index, line)| match serde_json::from_str(line) {
                Ok(record) => Some(record),
                Err(e) => {
                    warn!(line = index + 1, error = %e, "skipping unreadable history record");
                    None
                }
            })
            .collect();

        let start = records.len().saturating_sub(count);
        Ok(records.split_off(start))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::history::LedgerEvent;
    use crate::models::Money;
    use tempfile::TempDir;

    fn budget_record(units: i64) -> HistoryRecord {
        HistoryRecord::now(LedgerEvent::BudgetChanged {
            previous: Money::zero(),
            current: Money::from_units(units),
        })
    }

    #[test]
    fn test_missing_journal_is_empty() {
        let temp_dir = TempDir::new().unwrap();
        let journal = HistoryJournal::new(temp_dir.path().join("history.jsonl"));
        assert!(journal.recent(10).unwrap().is_empty());
    }

    #[test]
    fn test_recent_keeps_last_records_in_order() {
        let temp_dir = TempDir::new().unwrap();
        let journal = HistoryJournal::new(temp_dir.path().join("history.jsonl"));
        for units in 1..=5 {
            journal.append(&budget_record(units)).unwrap();
        }

        let recent = journal.recent(2).unwrap();
        assert_eq!(recent.len(), 2);
        assert_eq!(recent[0].event, budget_record(4).event);
        assert_eq!(recent[1].event, budget_record(5).event);
    }

    #[test]
    fn test_unreadable_lines_skipped() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("history.jsonl");
        let journal = HistoryJournal::new(path.clone());
        journal.append(&budget_record(1)).unwrap();
        let mut file = OpenOptions::new().append(true).open(&path).unwrap();
        writeln!(file, "{{truncated").unwrap();
        journal.append(&budget_record(2)).unwrap();

        assert_eq!(journal.recent(10).unwrap().len(), 2);
    }
}
