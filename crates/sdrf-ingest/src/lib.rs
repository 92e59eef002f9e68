//! Table loading for the SDRF mapper.
//!
//! This crate turns files on disk into text-only Polars `DataFrame`s:
//!
//! - **Local tables**: the user's own metadata sheet, as CSV, TSV/TXT or the
//!   first worksheet of an XLSX/XLS/ODS workbook
//! - **SDRF templates**: the tab-separated target table prepared by an earlier
//!   stage, with every column kept as text
//!
//! Every cell is either text or missing; blank cells are missing.
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use sdrf_ingest::{read_local_table, read_sdrf_template};
//!
//! let local = read_local_table(Path::new("samples.xlsx"))?;
//! let target = read_sdrf_template(Path::new("template.sdrf.tsv"))?;
//! ```

mod delimited;
mod error;
mod format;
mod grid;
mod header;
mod workbook;

use std::path::Path;

use polars::prelude::DataFrame;

// === Error Types ===
pub use error::{IngestError, Result};

// === Readers ===
pub use delimited::read_delimited;
pub use format::TableFormat;
pub use header::{normalize_header, unique_headers};
pub use workbook::read_first_sheet;

/// Loads a local metadata table, choosing the reader from the file extension.
pub fn read_local_table(path: &Path) -> Result<DataFrame> {
    let format = TableFormat::from_path(path)?;
    tracing::info!(path = %path.display(), ?format, "loading local table");
    match format.delimiter() {
        Some(delimiter) => read_delimited(path, delimiter),
        None => read_first_sheet(path),
    }
}

/// Loads an SDRF template (tab-separated, every column as text).
pub fn read_sdrf_template(path: &Path) -> Result<DataFrame> {
    tracing::info!(path = %path.display(), "loading SDRF template");
    read_delimited(path, b'\t')
}
