//! Schedule data model

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Weekday abbreviations, Monday first.
pub const WEEKDAY_LABELS: [&str; 7] = ["월", "화", "수", "목", "금", "토", "일"];

/// Column headers in output order.
pub const COLUMN_HEADERS: [&str; 5] = ["날짜", "시간", "주최", "회의명", "장소"];

/// Format a date as `MM/DD(요일)`.
pub fn format_date(date: NaiveDate) -> String {
    let label = WEEKDAY_LABELS[date.weekday().num_days_from_monday() as usize];
    format!("{}({})", date.format("%m/%d"), label)
}

/// The week a block of lines belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeekContext {
    /// ISO week number
    pub week: u32,

    /// Monday of that week
    pub monday: NaiveDate,
}

/// One meeting recovered from a time line and its subject line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduleEntry {
    pub date: NaiveDate,

    /// Time as written in the file, e.g. `08:00`
    pub time: String,

    /// Bracketed label including the brackets, or empty
    pub organizer: String,

    pub meeting: String,

    /// Always empty; the source format carries no location
    pub location: String,
}

impl ScheduleEntry {
    pub fn to_row(&self) -> ScheduleRow {
        ScheduleRow {
            date: format_date(self.date),
            time: self.time.clone(),
            organizer: self.organizer.clone(),
            meeting: self.meeting.clone(),
            location: self.location.clone(),
        }
    }
}

impl fmt::Display for ScheduleEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", format_date(self.date), self.time)?;
        if !self.organizer.is_empty() {
            write!(f, " {}", self.organizer)?;
        }
        write!(f, " {}", self.meeting)
    }
}

/// An output row with every field already rendered as text.
///
/// Field names are the column headers so the row serializes straight into
/// a delimited file with the right header line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleRow {
    #[serde(rename = "날짜")]
    pub date: String,

    #[serde(rename = "시간")]
    pub time: String,

    #[serde(rename = "주최")]
    pub organizer: String,

    #[serde(rename = "회의명")]
    pub meeting: String,

    #[serde(rename = "장소")]
    pub location: String,
}

impl ScheduleRow {
    /// Cells in column order.
    pub fn cells(&self) -> [&str; 5] {
        [
            self.date.as_str(),
            self.time.as_str(),
            self.organizer.as_str(),
            self.meeting.as_str(),
            self.location.as_str(),
        ]
    }
}
