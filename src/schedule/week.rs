//! ISO-8601 week anchors

use chrono::{Datelike, Duration, NaiveDate, Weekday};

use crate::error::{Result, ScheduleError};

/// Highest week number any ISO year can have.
pub const MAX_ISO_WEEK: u32 = 53;

/// Monday of ISO week `week` in ISO year `year`.
///
/// Week 1 is the week containing the year's first Thursday, so the Monday
/// can fall in the previous calendar year.
pub fn monday_of_iso_week(year: i32, week: u32) -> Result<NaiveDate> {
    NaiveDate::from_isoywd_opt(year, week, Weekday::Mon)
        .ok_or(ScheduleError::InvalidWeek { year, week })
}

/// Number of ISO weeks in `year` (52 or 53).
pub fn iso_weeks_in_year(year: i32) -> u32 {
    // Dec 28 is always in the last ISO week of its year
    NaiveDate::from_ymd_opt(year, 12, 28)
        .map(|d| d.iso_week().week())
        .unwrap_or(52)
}

/// Friday of the given week, used as the default end of the accepted range.
pub fn friday_of(monday: NaiveDate) -> NaiveDate {
    monday + Duration::days(4)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_monday_of_week_46_2024() {
        let monday = monday_of_iso_week(2024, 46).unwrap();
        assert_eq!(monday, NaiveDate::from_ymd_opt(2024, 11, 11).unwrap());
    }

    #[test]
    fn test_week_one_can_start_in_previous_year() {
        // 2025-01-01 is a Wednesday, so week 1 starts on 2024-12-30
        let monday = monday_of_iso_week(2025, 1).unwrap();
        assert_eq!(monday, NaiveDate::from_ymd_opt(2024, 12, 30).unwrap());
    }

    #[test]
    fn test_every_week_is_monday_with_matching_iso_week() {
        for year in [2019, 2020, 2021, 2024, 2026] {
            for week in 1..=iso_weeks_in_year(year) {
                let monday = monday_of_iso_week(year, week).unwrap();
                assert_eq!(monday.weekday(), Weekday::Mon);
                assert_eq!(monday.iso_week().week(), week);
                assert_eq!(monday.iso_week().year(), year);
            }
        }
    }

    #[test]
    fn test_week_53_only_in_long_years() {
        assert_eq!(iso_weeks_in_year(2020), 53);
        assert_eq!(iso_weeks_in_year(2021), 52);
        assert!(monday_of_iso_week(2020, 53).is_ok());
        assert!(matches!(
            monday_of_iso_week(2021, 53),
            Err(ScheduleError::InvalidWeek {
                year: 2021,
                week: 53
            })
        ));
    }

    #[test]
    fn test_week_zero_is_invalid() {
        assert!(monday_of_iso_week(2024, 0).is_err());
        assert!(monday_of_iso_week(2024, 54).is_err());
    }

    #[test]
    fn test_friday_of() {
        let monday = NaiveDate::from_ymd_opt(2024, 11, 11).unwrap();
        assert_eq!(friday_of(monday), NaiveDate::from_ymd_opt(2024, 11, 15).unwrap());
    }
}
