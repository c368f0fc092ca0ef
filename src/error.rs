use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScheduleError {
    #[error("Week number must be a whole number from 1 to 53, got '{0}'")]
    UserInput(String),

    #[error("Schedule file not found: {}", .0.display())]
    FileNotFound(PathBuf),

    #[error("Week {week} does not exist in ISO year {year}")]
    InvalidWeek { year: i32, week: u32 },

    #[error("Day number {day} of week {week} does not map to a calendar date")]
    InvalidComputedDate { week: u32, day: String },

    #[error("Range start {year}-{month:02}-{day:02} is not a valid date")]
    InvalidRangeStart { year: i32, month: u32, day: u32 },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("Failed to write {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Spreadsheet error: {0}")]
    Xlsx(#[from] rust_xlsxwriter::XlsxError),
}

impl ScheduleError {
    /// Errors that only affect a single line and leave the scan running.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Self::InvalidWeek { .. } | Self::InvalidComputedDate { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, ScheduleError>;
