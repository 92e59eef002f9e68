//! Row-oriented text grid shared by the delimited and workbook readers.

use std::path::Path;

use polars::prelude::DataFrame;
use sdrf_common::{is_missing, text_frame};

use crate::error::{IngestError, Result};
use crate::header::unique_headers;

/// Raw cells as read from a file: one header row and data rows of text.
#[derive(Debug, Default)]
pub(crate) struct TextGrid {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl TextGrid {
    /// Builds a grid from records where the first record is the header row.
    ///
    /// Only trailing all-blank records are dropped; blank rows between data
    /// rows stay as rows of missing cells so row positions are preserved.
    pub fn from_records(path: &Path, mut records: Vec<Vec<String>>) -> Result<Self> {
        while records
            .last()
            .is_some_and(|row| row.iter().all(|cell| is_missing(cell)))
        {
            records.pop();
        }
        if records.is_empty() {
            return Err(IngestError::EmptyTable {
                path: path.to_path_buf(),
            });
        }
        let headers = records.remove(0);
        Ok(Self {
            headers,
            rows: records,
        })
    }

    /// Converts the grid to a text `DataFrame`.
    ///
    /// Short rows are padded with missing cells; cells beyond the header
    /// width are dropped. Blank cells become missing.
    pub fn into_frame(self, path: &Path) -> Result<DataFrame> {
        let headers = unique_headers(self.headers);
        let width = headers.len();
        let mut columns: Vec<Vec<Option<String>>> =
            vec![Vec::with_capacity(self.rows.len()); width];

        let mut overflow_rows = 0usize;
        for row in self.rows {
            if row.len() > width {
                overflow_rows += 1;
            }
            let mut cells = row.into_iter();
            for column in &mut columns {
                let cell = cells.next().filter(|text| !is_missing(text));
                column.push(cell);
            }
        }
        if overflow_rows > 0 {
            tracing::warn!(
                path = %path.display(),
                rows = overflow_rows,
                "rows wider than the header; extra cells dropped"
            );
        }

        let df = text_frame(headers.into_iter().zip(columns).collect())?;
        tracing::debug!(
            path = %path.display(),
            rows = df.height(),
            columns = df.width(),
            "loaded table"
        );
        Ok(df)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sdrf_common::column_values;

    fn record(cells: &[&str]) -> Vec<String> {
        cells.iter().map(|c| c.to_string()).collect()
    }

    #[test]
    fn pads_and_marks_missing() {
        let path = Path::new("t.csv");
        let grid = TextGrid::from_records(
            path,
            vec![record(&["a", "b"]), record(&["1", ""]), record(&["2"]), record(&["", ""])],
        )
        .unwrap();
        let df = grid.into_frame(path).unwrap();
        assert_eq!(df.height(), 2);
        assert_eq!(
            column_values(&df, "b").unwrap(),
            vec![None::<String>, None]
        );
        assert_eq!(
            column_values(&df, "a").unwrap(),
            vec![Some("1".to_string()), Some("2".to_string())]
        );
    }

    #[test]
    fn interior_blank_rows_keep_their_position() {
        let path = Path::new("t.csv");
        let grid = TextGrid::from_records(
            path,
            vec![
                record(&["Species", "Sex"]),
                record(&["mouse", "M"]),
                record(&["", ""]),
                record(&["human", "F"]),
                record(&["", ""]),
            ],
        )
        .unwrap();
        let df = grid.into_frame(path).unwrap();
        assert_eq!(df.height(), 3);
        assert_eq!(
            column_values(&df, "Species").unwrap(),
            vec![Some("mouse".to_string()), None, Some("human".to_string())]
        );
        assert_eq!(
            column_values(&df, "Sex").unwrap(),
            vec![Some("M".to_string()), None, Some("F".to_string())]
        );
    }

    #[test]
    fn whitespace_only_cells_are_missing() {
        let path = Path::new("t.csv");
        let grid =
            TextGrid::from_records(path, vec![record(&["a"]), record(&["  "]), record(&["x"])])
                .unwrap();
        let df = grid.into_frame(path).unwrap();
        assert_eq!(
            column_values(&df, "a").unwrap(),
            vec![None, Some("x".to_string())]
        );
    }

    #[test]
    fn empty_input_is_an_error() {
        let err = TextGrid::from_records(Path::new("t.csv"), vec![record(&["", " "])]).unwrap_err();
        assert!(matches!(err, IngestError::EmptyTable { .. }));
    }
}
