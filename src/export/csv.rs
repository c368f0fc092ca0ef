//! UTF-8 CSV output with byte-order mark

use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::error::ExportError;
use crate::schedule::ScheduleRow;

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

fn io_error(path: &Path) -> impl FnOnce(std::io::Error) -> ExportError + '_ {
    move |source| ExportError::Io {
        path: path.to_path_buf(),
        source,
    }
}

pub fn write_csv(path: &Path, rows: &[ScheduleRow]) -> Result<(), ExportError> {
    let mut file = File::create(path).map_err(io_error(path))?;
    file.write_all(UTF8_BOM).map_err(io_error(path))?;

    let mut writer = ::csv::Writer::from_writer(file);
    for row in rows {
        writer.serialize(row)?;
    }
    writer.flush().map_err(io_error(path))?;
    Ok(())
}

/// Read a file written by [`write_csv`] back into rows.
pub fn read_csv(path: &Path) -> Result<Vec<ScheduleRow>, ExportError> {
    let bytes = std::fs::read(path).map_err(io_error(path))?;
    let data = bytes.strip_prefix(UTF8_BOM).unwrap_or(&bytes);

    let mut reader = ::csv::Reader::from_reader(data);
    let rows = reader.deserialize().collect::<Result<Vec<ScheduleRow>, _>>()?;
    Ok(rows)
}
