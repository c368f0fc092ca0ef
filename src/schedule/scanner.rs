//! Line scanner for weekly schedule files
//!
//! A schedule file is a flat list of lines. Three kinds of line matter:
//!
//! ```text
//! 46w              week marker (ISO week 46)
//! 3                day number (3 = Monday of the active week)
//! 08:00            time, always followed by a subject line
//! [HR] Orientation subject
//! ```
//!
//! Everything else is skipped.

use chrono::{Datelike, Days, NaiveDate, Weekday};
use regex::Regex;
use std::collections::BTreeSet;
use std::path::Path;
use std::sync::LazyLock;
use tracing::{debug, warn};

use super::model::{ScheduleEntry, WeekContext};
use super::subject::Subject;
use super::table::{Diagnostic, ScanReport, ScheduleTable};
use super::week::monday_of_iso_week;
use crate::error::{Result, ScheduleError};

/// Day number that maps to the Monday of the active week.
pub const MONDAY_DAY_NUMBER: u64 = 3;

/// Day of the target month where the accepted range starts.
pub const DEFAULT_RANGE_START_DAY: u32 = 4;

static WEEK_MARKER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^(\d{1,2})w").expect("week marker regex"));
static DAY_NUMBER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d+$").expect("day number regex"));
static TIME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{1,2}:\d{2}").expect("time regex"));

/// What a single line looks like, before any context is applied
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind<'a> {
    /// `46w`, `7W notes`, ...
    WeekMarker(u32),
    /// A line made only of digits
    DayNumber(&'a str),
    /// A line starting with `H:MM` or `HH:MM`
    Time(&'a str),
    Other,
}

impl<'a> LineKind<'a> {
    pub fn classify(line: &'a str) -> Self {
        if let Some(caps) = WEEK_MARKER_RE.captures(line) {
            if let Ok(week) = caps[1].parse() {
                return Self::WeekMarker(week);
            }
        }

        if DAY_NUMBER_RE.is_match(line) {
            return Self::DayNumber(line);
        }

        if let Some(m) = TIME_RE.find(line) {
            return Self::Time(m.as_str());
        }

        Self::Other
    }
}

/// Filters applied while scanning
#[derive(Debug, Clone)]
pub struct ScanOptions {
    /// ISO year used to resolve week markers
    pub year: i32,

    /// Week numbers whose blocks are read; all others are skipped
    pub weeks: BTreeSet<u32>,

    /// First accepted date (inclusive)
    pub range_start: NaiveDate,

    /// Last accepted date (inclusive)
    pub end_date: NaiveDate,
}

impl ScanOptions {
    /// Options with the range starting on day 4 of `month`.
    pub fn new(
        year: i32,
        weeks: impl IntoIterator<Item = u32>,
        month: u32,
        end_date: NaiveDate,
    ) -> Result<Self> {
        Self::with_range_start_day(year, weeks, month, DEFAULT_RANGE_START_DAY, end_date)
    }

    pub fn with_range_start_day(
        year: i32,
        weeks: impl IntoIterator<Item = u32>,
        month: u32,
        day: u32,
        end_date: NaiveDate,
    ) -> Result<Self> {
        let range_start = NaiveDate::from_ymd_opt(year, month, day).ok_or(
            ScheduleError::InvalidRangeStart { year, month, day },
        )?;

        Ok(Self {
            year,
            weeks: weeks.into_iter().collect(),
            range_start,
            end_date,
        })
    }

    /// Whether entries on `date` belong in the output
    pub fn accepts(&self, date: NaiveDate) -> bool {
        let weekday = !matches!(date.weekday(), Weekday::Sat | Weekday::Sun);
        weekday && date >= self.range_start && date <= self.end_date
    }
}

/// Forward-only view over the lines of a file with one line of lookahead
struct LineCursor<'a> {
    lines: Vec<&'a str>,
    pos: usize,
}

impl<'a> LineCursor<'a> {
    fn new(content: &'a str) -> Self {
        let content = content.strip_prefix('\u{feff}').unwrap_or(content);
        Self {
            lines: content.lines().map(str::trim).collect(),
            pos: 0,
        }
    }

    /// Current line with its 1-based line number
    fn current(&self) -> Option<(usize, &'a str)> {
        self.lines.get(self.pos).map(|line| (self.pos + 1, *line))
    }

    fn peek_next(&self) -> Option<&'a str> {
        self.lines.get(self.pos + 1).copied()
    }

    fn advance(&mut self, count: usize) {
        self.pos += count;
    }
}

/// Map a day number onto the active week (`3` is Monday, `9` is Sunday).
pub fn date_for_day_number(week: &WeekContext, day: &str) -> Result<NaiveDate> {
    let invalid = || ScheduleError::InvalidComputedDate {
        week: week.week,
        day: day.to_string(),
    };

    let n: u64 = day.parse().map_err(|_| invalid())?;
    let date = if n >= MONDAY_DAY_NUMBER {
        week.monday
            .checked_add_days(Days::new(n - MONDAY_DAY_NUMBER))
    } else {
        week.monday
            .checked_sub_days(Days::new(MONDAY_DAY_NUMBER - n))
    };
    date.ok_or_else(invalid)
}

/// Single forward pass over a schedule file
pub struct Scanner<'o> {
    options: &'o ScanOptions,
    week: Option<WeekContext>,
    date: Option<NaiveDate>,
    table: ScheduleTable,
    diagnostics: Vec<Diagnostic>,
}

impl<'o> Scanner<'o> {
    pub fn new(options: &'o ScanOptions) -> Self {
        Self {
            options,
            week: None,
            date: None,
            table: ScheduleTable::default(),
            diagnostics: Vec::new(),
        }
    }

    pub fn scan(mut self, content: &str) -> ScanReport {
        let mut cursor = LineCursor::new(content);

        while let Some((line_no, line)) = cursor.current() {
            match LineKind::classify(line) {
                LineKind::WeekMarker(week) => self.enter_week(line_no, week),
                LineKind::DayNumber(day) if self.week.is_some() => {
                    self.enter_day(line_no, day)
                }
                LineKind::Time(time) if self.date.is_some() => {
                    if let Some(subject) = cursor.peek_next() {
                        self.push_entry(time, subject);
                        cursor.advance(2);
                        continue;
                    }
                    debug!(line = line_no, "time line at end of file has no subject");
                }
                _ => {}
            }
            cursor.advance(1);
        }

        ScanReport {
            table: self.table,
            diagnostics: self.diagnostics,
        }
    }

    fn enter_week(&mut self, line_no: usize, week: u32) {
        self.date = None;
        self.week = None;

        if !self.options.weeks.contains(&week) {
            debug!(line = line_no, week, "skipping week that was not requested");
            return;
        }

        match monday_of_iso_week(self.options.year, week) {
            Ok(monday) => {
                debug!(line = line_no, week, %monday, "entering week");
                self.week = Some(WeekContext { week, monday });
            }
            Err(error) => self.report(line_no, error),
        }
    }

    fn enter_day(&mut self, line_no: usize, day: &str) {
        self.date = None;
        let Some(week) = self.week else {
            return;
        };

        match date_for_day_number(&week, day) {
            Ok(date) if self.options.accepts(date) => {
                debug!(line = line_no, %date, "entering day");
                self.date = Some(date);
            }
            Ok(date) => {
                debug!(line = line_no, %date, "day outside accepted range");
            }
            Err(error) => self.report(line_no, error),
        }
    }

    fn push_entry(&mut self, time: &str, subject_line: &str) {
        let Some(date) = self.date else {
            return;
        };
        let subject = Subject::parse(subject_line);
        let entry = ScheduleEntry {
            date,
            time: time.to_string(),
            organizer: subject.organizer,
            meeting: subject.meeting,
            location: String::new(),
        };
        debug!(%entry, "entry");
        self.table.push(entry);
    }

    fn report(&mut self, line_no: usize, error: ScheduleError) {
        debug_assert!(error.is_recoverable());
        warn!(line = line_no, "{}", error);
        self.diagnostics.push(Diagnostic {
            line: line_no,
            error,
        });
    }
}

/// Scan schedule text with the given options.
pub fn scan_str(content: &str, options: &ScanOptions) -> ScanReport {
    Scanner::new(options).scan(content)
}

/// Read and scan a schedule file.
pub fn scan_file(path: &Path, options: &ScanOptions) -> Result<ScanReport> {
    let content = std::fs::read_to_string(path).map_err(|err| {
        if err.kind() == std::io::ErrorKind::NotFound {
            ScheduleError::FileNotFound(path.to_path_buf())
        } else {
            ScheduleError::Io(err)
        }
    })?;
    Ok(scan_str(&content, options))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn november_options() -> ScanOptions {
        ScanOptions::new(2024, [46, 47], 11, date(2024, 11, 22)).unwrap()
    }

    #[test]
    fn test_classify_week_marker() {
        assert_eq!(LineKind::classify("46w"), LineKind::WeekMarker(46));
        assert_eq!(LineKind::classify("7W"), LineKind::WeekMarker(7));
        assert_eq!(LineKind::classify("47w 회의 일정"), LineKind::WeekMarker(47));
        assert_eq!(LineKind::classify("123w"), LineKind::Other);
        assert_eq!(LineKind::classify("week 46"), LineKind::Other);
    }

    #[test]
    fn test_classify_day_and_time() {
        assert_eq!(LineKind::classify("3"), LineKind::DayNumber("3"));
        assert_eq!(LineKind::classify("12"), LineKind::DayNumber("12"));
        assert_eq!(LineKind::classify("08:00"), LineKind::Time("08:00"));
        assert_eq!(LineKind::classify("9:30~10:00"), LineKind::Time("9:30"));
        assert_eq!(LineKind::classify("3 meetings"), LineKind::Other);
        assert_eq!(LineKind::classify(""), LineKind::Other);
    }

    #[test]
    fn test_day_number_offsets() {
        let week = WeekContext {
            week: 46,
            monday: date(2024, 11, 11),
        };
        assert_eq!(date_for_day_number(&week, "3").unwrap(), date(2024, 11, 11));
        assert_eq!(date_for_day_number(&week, "4").unwrap(), date(2024, 11, 12));
        assert_eq!(date_for_day_number(&week, "9").unwrap(), date(2024, 11, 17));
        assert_eq!(date_for_day_number(&week, "2").unwrap(), date(2024, 11, 10));
        assert_eq!(date_for_day_number(&week, "0").unwrap(), date(2024, 11, 8));
    }

    #[test]
    fn test_day_number_overflow_is_invalid_date() {
        let week = WeekContext {
            week: 46,
            monday: date(2024, 11, 11),
        };
        assert!(matches!(
            date_for_day_number(&week, "99999999999999999999999"),
            Err(ScheduleError::InvalidComputedDate { week: 46, .. })
        ));
        assert!(matches!(
            date_for_day_number(&week, "9999999999999"),
            Err(ScheduleError::InvalidComputedDate { .. })
        ));
    }

    #[test]
    fn test_accepts_weekdays_in_range() {
        let options = november_options();
        assert_eq!(options.range_start, date(2024, 11, 4));
        assert!(options.accepts(date(2024, 11, 4)));
        assert!(options.accepts(date(2024, 11, 22)));
        assert!(!options.accepts(date(2024, 11, 1)));
        assert!(!options.accepts(date(2024, 11, 25)));
        assert!(!options.accepts(date(2024, 11, 16)));
        assert!(!options.accepts(date(2024, 11, 17)));
    }

    #[test]
    fn test_invalid_range_start() {
        let err = ScanOptions::with_range_start_day(2024, [9], 2, 30, date(2024, 3, 1));
        assert!(matches!(
            err,
            Err(ScheduleError::InvalidRangeStart {
                year: 2024,
                month: 2,
                day: 30
            })
        ));
    }

    #[test]
    fn test_single_entry() {
        let options = ScanOptions::new(2024, [46, 47], 11, date(2024, 11, 15)).unwrap();
        let report = scan_str("46w\n3\n08:00\n[HR] Orientation\n", &options);

        assert!(report.diagnostics.is_empty());
        let rows = report.table.rows();
        assert_eq!(rows.len(), 1);
        assert_eq!(
            rows[0].cells(),
            ["11/11(월)", "08:00", "[HR]", "Orientation", ""]
        );
    }

    #[test]
    fn test_subject_line_is_never_reclassified() {
        // The subject "47w review" would otherwise look like a week marker
        let content = "46w\n3\n10:00\n47w review\n11:00\nx Lunch\n";
        let report = scan_str(content, &november_options());
        let entries = report.table.entries();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].meeting, "47w review");
        assert_eq!(entries[0].date, date(2024, 11, 11));
        assert_eq!(entries[1].meeting, "Lunch");
        assert_eq!(entries[1].date, date(2024, 11, 11));
    }

    #[test]
    fn test_unrequested_week_is_skipped() {
        let content = "\
45w
3
09:00
Skipped
46w
4
09:00
Kept
";
        let report = scan_str(content, &november_options());
        let entries = report.table.entries();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].meeting, "Kept");
        assert_eq!(entries[0].date, date(2024, 11, 12));
    }

    #[test]
    fn test_unrequested_week_clears_active_date() {
        let content = "46w\n3\n45w\n09:00\nShould not appear\n";
        let report = scan_str(content, &november_options());
        assert!(report.table.is_empty());
    }

    #[test]
    fn test_weekend_day_emits_nothing_and_does_not_leak() {
        let content = "\
46w
8
10:00
Saturday thing
9
11:00
Sunday thing
7
12:00
Friday thing
";
        let report = scan_str(content, &november_options());
        let entries = report.table.entries();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].meeting, "Friday thing");
        assert_eq!(entries[0].date, date(2024, 11, 15));
    }

    #[test]
    fn test_out_of_range_day_is_dropped() {
        // End date 11/15 cuts off all of week 47
        let options = ScanOptions::new(2024, [46, 47], 11, date(2024, 11, 15)).unwrap();
        let content = "46w\n7\n10:00\nIn range\n47w\n3\n10:00\nToo late\n";
        let report = scan_str(content, &options);
        let entries = report.table.entries();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].meeting, "In range");
    }

    #[test]
    fn test_day_number_without_week_is_ignored() {
        let content = "3\n08:00\nNo week yet\n46w\n3\n08:00\nAfter marker\n";
        let report = scan_str(content, &november_options());
        assert_eq!(report.table.len(), 1);
        assert_eq!(report.table.entries()[0].meeting, "After marker");
    }

    #[test]
    fn test_invalid_week_is_reported_and_scan_continues() {
        // 2021 has no week 53
        let options = ScanOptions::new(2021, [52, 53], 12, date(2021, 12, 31)).unwrap();
        let content = "52w\n3\n09:00\nFirst\n53w\n3\n09:00\nLost\n52w\n4\n10:00\nSecond\n";
        let report = scan_str(content, &options);

        assert_eq!(report.diagnostics.len(), 1);
        assert_eq!(report.diagnostics[0].line, 5);
        assert!(matches!(
            report.diagnostics[0].error,
            ScheduleError::InvalidWeek {
                year: 2021,
                week: 53
            }
        ));
        let meetings: Vec<_> = report
            .table
            .entries()
            .iter()
            .map(|e| e.meeting.as_str())
            .collect();
        assert_eq!(meetings, ["First", "Second"]);
    }

    #[test]
    fn test_invalid_computed_date_clears_active_date() {
        let content = "46w\n3\n99999999999999\n08:00\nDropped\n4\n08:00\nKept\n";
        let report = scan_str(content, &november_options());
        assert_eq!(report.diagnostics.len(), 1);
        assert!(matches!(
            report.diagnostics[0].error,
            ScheduleError::InvalidComputedDate { .. }
        ));
        assert_eq!(report.table.len(), 1);
        assert_eq!(report.table.entries()[0].meeting, "Kept");
    }

    #[test]
    fn test_time_on_last_line_is_ignored() {
        let report = scan_str("46w\n3\n08:00", &november_options());
        assert!(report.table.is_empty());
    }

    #[test]
    fn test_insertion_order_is_file_order() {
        let content = "\
46w
5
15:00
Wednesday late
3
09:00
Monday early
";
        let report = scan_str(content, &november_options());
        let meetings: Vec<_> = report
            .table
            .entries()
            .iter()
            .map(|e| e.meeting.as_str())
            .collect();
        assert_eq!(meetings, ["Wednesday late", "Monday early"]);
    }

    #[test]
    fn test_whitespace_and_bom_are_tolerated() {
        let content = "\u{feff}  46w  \r\n 3 \r\n 08:00 \r\n  [HR] Orientation \r\n";
        let report = scan_str(content, &november_options());
        assert_eq!(report.table.len(), 1);
        let entry = &report.table.entries()[0];
        assert_eq!(entry.organizer, "[HR]");
        assert_eq!(entry.meeting, "Orientation");
    }

    #[test]
    fn test_scan_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("46w.txt");
        let err = scan_file(&path, &november_options()).unwrap_err();
        assert!(matches!(err, ScheduleError::FileNotFound(p) if p == path));
    }
}
