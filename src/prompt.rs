//! Interactive week-number prompt

use std::io::{BufRead, Write};

use crate::error::{Result, ScheduleError};
use crate::schedule::week::MAX_ISO_WEEK;

pub const WEEK_PROMPT: &str = "Week number (e.g. 46): ";

/// Parse a week number typed by the user. Surrounding whitespace and a
/// trailing `w`/`W` are accepted; the number must be 1 to 53.
pub fn parse_week_number(input: &str) -> Result<u32> {
    let trimmed = input.trim();
    let digits = trimmed
        .strip_suffix(['w', 'W'])
        .unwrap_or(trimmed);
    match digits.parse::<u32>() {
        Ok(week) if (1..=MAX_ISO_WEEK).contains(&week) => Ok(week),
        _ => Err(ScheduleError::UserInput(trimmed.to_string())),
    }
}

/// Ask for a week number on `output` and read the answer from `input`.
pub fn ask_week_number<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> Result<u32> {
    write!(output, "{}", WEEK_PROMPT)?;
    output.flush()?;

    let mut response = String::new();
    input.read_line(&mut response)?;
    parse_week_number(&response)
}
