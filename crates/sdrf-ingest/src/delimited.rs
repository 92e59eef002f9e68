//! CSV and TSV reading.

use std::fs::File;
use std::path::Path;

use polars::prelude::DataFrame;

use crate::error::{IngestError, Result};
use crate::grid::TextGrid;

/// Reads a delimited file into a text `DataFrame`.
///
/// The first row is the header. Rows may have differing lengths; quoting
/// follows RFC 4180.
pub fn read_delimited(path: &Path, delimiter: u8) -> Result<DataFrame> {
    let file = File::open(path).map_err(|e| IngestError::open(path, e))?;
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .has_headers(false)
        .flexible(true)
        .from_reader(file);

    let mut records = Vec::new();
    for result in reader.records() {
        let record = result.map_err(|source| IngestError::Delimited {
            path: path.to_path_buf(),
            source,
        })?;
        records.push(record.iter().map(str::to_string).collect::<Vec<_>>());
    }

    TextGrid::from_records(path, records)?.into_frame(path)
}
