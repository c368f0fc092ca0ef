//! Schedule export
//!
//! Writes a [`ScheduleTable`] as either a UTF-8 CSV file (with BOM, so
//! spreadsheet importers keep the Korean text intact) or an XLSX workbook.

pub mod csv;
pub mod xlsx;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};
use tracing::info;

use crate::error::ExportError;
use crate::schedule::ScheduleTable;

pub use self::csv::{read_csv, write_csv};
pub use self::xlsx::write_xlsx;

/// Output file format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    #[default]
    Xlsx,
    Csv,
}

impl ExportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Xlsx => "xlsx",
            Self::Csv => "csv",
        }
    }

    /// Guess the format from a file extension
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_lowercase();
        match ext.as_str() {
            "xlsx" => Some(Self::Xlsx),
            "csv" | "txt" => Some(Self::Csv),
            _ => None,
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.extension())
    }
}

/// What an export did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportOutcome {
    Saved { path: PathBuf, rows: usize },
    /// The table was empty and no file was written
    NothingToSave,
}

/// Write `table` to `path`. Empty tables write nothing.
pub fn export(
    table: &ScheduleTable,
    path: &Path,
    format: ExportFormat,
) -> Result<ExportOutcome, ExportError> {
    if table.is_empty() {
        return Ok(ExportOutcome::NothingToSave);
    }

    let rows = table.rows();
    match format {
        ExportFormat::Csv => write_csv(path, &rows)?,
        ExportFormat::Xlsx => write_xlsx(path, &rows)?,
    }

    info!(path = %path.display(), rows = rows.len(), %format, "schedule exported");
    Ok(ExportOutcome::Saved {
        path: path.to_path_buf(),
        rows: rows.len(),
    })
}
