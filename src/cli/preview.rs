//! `weeksheet preview` command implementation

use anyhow::Result;
use std::path::Path;

use super::definition::PreviewArgs;
use crate::schedule::{ScheduleRow, COLUMN_HEADERS};

const TABLE_COL_DATE: usize = 10;
const TABLE_COL_TIME: usize = 6;
const TABLE_COL_ORGANIZER: usize = 16;

fn print_table_header() {
    println!(
        "{:<width_date$} {:<width_time$} {:<width_org$} {}",
        COLUMN_HEADERS[0],
        COLUMN_HEADERS[1],
        COLUMN_HEADERS[2],
        COLUMN_HEADERS[3],
        width_date = TABLE_COL_DATE,
        width_time = TABLE_COL_TIME,
        width_org = TABLE_COL_ORGANIZER
    );
    println!(
        "{}",
        "-".repeat(TABLE_COL_DATE + TABLE_COL_TIME + TABLE_COL_ORGANIZER + 30)
    );
}

fn print_table_row(row: &ScheduleRow) {
    let organizer = super::truncate(&row.organizer, TABLE_COL_ORGANIZER);
    println!(
        "{:<width_date$} {:<width_time$} {:<width_org$} {}",
        row.date,
        row.time,
        organizer,
        row.meeting,
        width_date = TABLE_COL_DATE,
        width_time = TABLE_COL_TIME,
        width_org = TABLE_COL_ORGANIZER
    );
}

pub fn run(config_path: Option<&Path>, args: PreviewArgs) -> Result<()> {
    let overrides = args.job.overrides();
    let Some((job, report)) = super::load_schedule(config_path, args.job.week.as_deref(), &overrides)?
    else {
        return Ok(());
    };

    let rows = report.table.rows();

    if args.json {
        println!("{}", serde_json::to_string_pretty(&rows)?);
        return Ok(());
    }

    if rows.is_empty() {
        println!(
            "No entries found for week {} in {}.",
            job.week,
            job.input.display()
        );
        return Ok(());
    }

    print_table_header();
    for row in &rows {
        print_table_row(row);
    }
    println!("\n{} entries", rows.len());

    Ok(())
}
