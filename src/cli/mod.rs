//! CLI command implementations

pub mod config;
pub mod convert;
pub mod definition;
pub mod preview;

pub use definition::{Cli, Commands};

use anyhow::{Context, Result};
use std::io;
use std::path::Path;

use crate::config::Config;
use crate::error::ScheduleError;
use crate::job::{Job, JobOverrides};
use crate::prompt;
use crate::schedule::week::iso_weeks_in_year;
use crate::schedule::{scan_file, ScanReport};

/// Week number from the command line, or from the prompt when absent.
///
/// `None` means the user typed something that is not a number; the
/// message has already been printed.
fn requested_week(arg: Option<&str>) -> Result<Option<u32>> {
    let parsed = match arg {
        Some(text) => prompt::parse_week_number(text),
        None => {
            let stdin = io::stdin();
            prompt::ask_week_number(&mut stdin.lock(), &mut io::stdout())
        }
    };

    match parsed {
        Ok(week) => Ok(Some(week)),
        Err(err @ ScheduleError::UserInput(_)) => {
            eprintln!("{}", err);
            Ok(None)
        }
        Err(err) => Err(err).context("Failed to read week number"),
    }
}

/// Prompt if needed, resolve the job and scan its input file.
///
/// Returns `None` when the run should stop quietly: bad week input, a week
/// the year does not have, or a missing schedule file. Each is reported
/// before returning.
pub(crate) fn load_schedule(
    config_path: Option<&Path>,
    week_arg: Option<&str>,
    overrides: &JobOverrides,
) -> Result<Option<(Job, ScanReport)>> {
    let config = Config::load(config_path)?;
    let Some(week) = requested_week(week_arg)? else {
        return Ok(None);
    };

    let job = match Job::resolve(week, &config, overrides) {
        Ok(job) => job,
        Err(err @ ScheduleError::InvalidWeek { year, .. }) => {
            eprintln!("{} (it has {} weeks)", err, iso_weeks_in_year(year));
            return Ok(None);
        }
        Err(err) => return Err(err).context("Failed to resolve the requested week"),
    };
    tracing::debug!(?job, "resolved job");

    let report = match scan_file(&job.input, &job.options) {
        Ok(report) => report,
        Err(err @ ScheduleError::FileNotFound(_)) => {
            eprintln!("{}", err);
            return Ok(None);
        }
        Err(err) => {
            return Err(err)
                .with_context(|| format!("Failed to read {}", job.input.display()))
        }
    };

    for diagnostic in &report.diagnostics {
        eprintln!(
            "⚠ {}:{}: {}",
            job.input.display(),
            diagnostic.line,
            diagnostic.error
        );
    }

    Ok(Some((job, report)))
}

pub fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else if max <= 3 {
        s.chars().take(max).collect()
    } else {
        let head: String = s.chars().take(max - 3).collect();
        format!("{}...", head)
    }
}
