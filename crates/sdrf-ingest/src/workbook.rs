//! Spreadsheet reading (xlsx, xls, ods).

use std::path::Path;

use calamine::{Data, ExcelDateTime, Reader, open_workbook_auto};
use chrono::NaiveTime;
use polars::prelude::DataFrame;
use sdrf_common::format_numeric;

use crate::error::{IngestError, Result};
use crate::grid::TextGrid;

/// Reads the first worksheet of a workbook into a text `DataFrame`.
pub fn read_first_sheet(path: &Path) -> Result<DataFrame> {
    if !path.exists() {
        return Err(IngestError::FileNotFound {
            path: path.to_path_buf(),
        });
    }

    let mut workbook = open_workbook_auto(path).map_err(|e| IngestError::Workbook {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;
    let Some(sheet) = workbook.sheet_names().first().cloned() else {
        return Err(IngestError::NoSheets {
            path: path.to_path_buf(),
        });
    };
    let range = workbook
        .worksheet_range(&sheet)
        .map_err(|e| IngestError::Workbook {
            path: path.to_path_buf(),
            message: format!("sheet '{sheet}': {e}"),
        })?;

    tracing::debug!(path = %path.display(), sheet = %sheet, "reading first worksheet");
    let records = range
        .rows()
        .map(|row| row.iter().map(cell_to_text).collect())
        .collect();
    TextGrid::from_records(path, records)?.into_frame(path)
}

fn cell_to_text(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::String(s) | Data::DateTimeIso(s) | Data::DurationIso(s) => s.clone(),
        Data::Float(n) => format_numeric(*n),
        Data::Int(n) => n.to_string(),
        Data::Bool(b) => if *b { "True" } else { "False" }.to_string(),
        Data::DateTime(dt) => datetime_to_text(dt),
        Data::Error(e) => format!("#{e:?}"),
    }
}

/// Renders date cells as ISO dates, adding the time only when it is not midnight.
/// Durations keep their serial value.
fn datetime_to_text(dt: &ExcelDateTime) -> String {
    match dt.as_datetime() {
        Some(value) if dt.is_datetime() => {
            if value.time() == NaiveTime::MIN {
                value.format("%Y-%m-%d").to_string()
            } else {
                value.format("%Y-%m-%dT%H:%M:%S").to_string()
            }
        }
        _ => format_numeric(dt.as_f64()),
    }
}
