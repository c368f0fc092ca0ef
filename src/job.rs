//! Resolves a requested week into concrete files and scan filters

use chrono::{Datelike, Duration, Local, NaiveDate};
use std::path::{Path, PathBuf};

use crate::config::Config;
use crate::error::Result;
use crate::export::ExportFormat;
use crate::schedule::week::{friday_of, monday_of_iso_week};
use crate::schedule::ScanOptions;

/// Values given on the command line; each one wins over the config file
#[derive(Debug, Clone, Default)]
pub struct JobOverrides {
    pub year: Option<i32>,
    pub month: Option<u32>,
    pub end_date: Option<NaiveDate>,
    pub input: Option<PathBuf>,
    pub output: Option<PathBuf>,
    pub format: Option<ExportFormat>,
    pub single_week: bool,
}

/// Everything needed to convert one week file
#[derive(Debug, Clone)]
pub struct Job {
    pub week: u32,
    pub input: PathBuf,
    pub output: PathBuf,
    pub format: ExportFormat,
    pub options: ScanOptions,
}

/// `46` -> `46w.txt`
pub fn input_file_name(week: u32) -> String {
    format!("{}w.txt", week)
}

/// `46` -> `schedule_46w.xlsx`
pub fn output_file_name(week: u32, format: ExportFormat) -> String {
    format!("schedule_{}w.{}", week, format.extension())
}

/// Find `<week>w.txt` in `dir`, also accepting an upper-case `W`.
fn locate_input(dir: &Path, week: u32) -> PathBuf {
    let lower = dir.join(input_file_name(week));
    if lower.exists() {
        return lower;
    }
    let upper = dir.join(format!("{}W.txt", week));
    if upper.exists() {
        return upper;
    }
    lower
}

impl Job {
    pub fn resolve(week: u32, config: &Config, overrides: &JobOverrides) -> Result<Self> {
        let year = overrides
            .year
            .or(config.year)
            .unwrap_or_else(|| Local::now().year());

        // The requested week must exist even when every date is given
        let monday = monday_of_iso_week(year, week)?;

        let include_next = config.include_next_week && !overrides.single_week;
        let mut weeks = vec![week];
        if include_next {
            weeks.extend(week.checked_add(1));
        }

        let last_monday = if include_next {
            monday + Duration::days(7)
        } else {
            monday
        };
        let month = overrides
            .month
            .or(config.month)
            .unwrap_or_else(|| monday.month());
        let end_date = overrides
            .end_date
            .or(config.end_date)
            .unwrap_or_else(|| friday_of(last_monday));

        let options = ScanOptions::with_range_start_day(
            year,
            weeks,
            month,
            config.range_start_day,
            end_date,
        )?;

        let input = match &overrides.input {
            Some(path) => path.clone(),
            None => {
                let dir = config.input.dir.clone().unwrap_or_default();
                locate_input(&dir, week)
            }
        };

        let format = overrides
            .format
            .or_else(|| {
                overrides
                    .output
                    .as_deref()
                    .and_then(ExportFormat::from_path)
            })
            .unwrap_or(config.output.format);

        let output = match &overrides.output {
            Some(path) => path.clone(),
            None => config
                .output
                .dir
                .clone()
                .unwrap_or_default()
                .join(output_file_name(week, format)),
        };

        Ok(Self {
            week,
            input,
            output,
            format,
            options,
        })
    }
}
