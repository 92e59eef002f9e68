//! SDRF export.
//!
//! Writes the merged target table as a tab-separated SDRF file. Columns
//! keep their table order; missing cells are written as a configurable token
//! (empty by default).

mod error;
mod tsv;

pub use error::{OutputError, Result};
pub use tsv::{DEFAULT_OUTPUT_NAME, TsvOptions, render_sdrf_tsv, write_sdrf_to, write_sdrf_tsv};
