//! Weekly schedule parsing
//!
//! This module turns a week-numbered text file into a schedule table:
//! - Resolve ISO week numbers to their Monday
//! - Scan lines for week markers, day numbers and time/subject pairs
//! - Collect the resulting entries in file order

pub mod model;
pub mod scanner;
pub mod subject;
pub mod table;
pub mod week;

pub use model::{format_date, ScheduleEntry, ScheduleRow, WeekContext, COLUMN_HEADERS};
pub use scanner::{scan_file, scan_str, LineKind, ScanOptions, Scanner};
pub use subject::Subject;
pub use table::{Diagnostic, ScanReport, ScheduleTable};
pub use week::monday_of_iso_week;
