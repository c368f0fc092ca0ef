//! Schedule table and scan results

use super::model::{ScheduleEntry, ScheduleRow};
use crate::error::ScheduleError;

/// Entries in the order they appear in the source file
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScheduleTable {
    entries: Vec<ScheduleEntry>,
}

impl ScheduleTable {
    pub fn push(&mut self, entry: ScheduleEntry) {
        self.entries.push(entry);
    }

    pub fn entries(&self) -> &[ScheduleEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Render every entry as an output row, keeping insertion order
    pub fn rows(&self) -> Vec<ScheduleRow> {
        self.entries.iter().map(ScheduleEntry::to_row).collect()
    }
}

impl FromIterator<ScheduleEntry> for ScheduleTable {
    fn from_iter<I: IntoIterator<Item = ScheduleEntry>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

/// A problem found on one line that did not stop the scan
#[derive(Debug)]
pub struct Diagnostic {
    /// 1-based line number
    pub line: usize,
    pub error: ScheduleError,
}

/// Result of scanning one file
#[derive(Debug, Default)]
pub struct ScanReport {
    pub table: ScheduleTable,
    pub diagnostics: Vec<Diagnostic>,
}
