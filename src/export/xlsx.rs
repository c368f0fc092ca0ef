//! XLSX workbook output

use rust_xlsxwriter::{Format, FormatBorder, Workbook};
use std::path::Path;

use crate::error::ExportError;
use crate::schedule::{ScheduleRow, COLUMN_HEADERS};

const SHEET_NAME: &str = "Schedule";

// date, time, organizer, meeting, location
const COLUMN_WIDTHS: [f64; 5] = [12.0, 8.0, 16.0, 40.0, 16.0];

pub fn write_xlsx(path: &Path, rows: &[ScheduleRow]) -> Result<(), ExportError> {
    let mut workbook = Workbook::new();
    let header = Format::new().set_bold().set_border(FormatBorder::Thin);

    let sheet = workbook.add_worksheet();
    sheet.set_name(SHEET_NAME)?;

    for (col, title) in COLUMN_HEADERS.iter().enumerate() {
        sheet.write_string_with_format(0, col as u16, *title, &header)?;
    }
    for (col, width) in COLUMN_WIDTHS.iter().enumerate() {
        sheet.set_column_width(col as u16, *width)?;
    }
    sheet.set_freeze_panes(1, 0)?;

    for (i, row) in rows.iter().enumerate() {
        let row_num = (i + 1) as u32;
        for (col, cell) in row.cells().iter().enumerate() {
            sheet.write_string(row_num, col as u16, *cell)?;
        }
    }

    workbook.save(path)?;
    Ok(())
}
