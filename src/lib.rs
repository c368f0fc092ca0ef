//! weeksheet library - Weekly schedule text to spreadsheet conversion

pub mod cli;
pub mod config;
pub mod error;
pub mod export;
pub mod job;
pub mod prompt;
pub mod schedule;

pub use error::{ExportError, ScheduleError};
