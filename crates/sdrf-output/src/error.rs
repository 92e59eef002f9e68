//! Error types for SDRF export.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while writing an SDRF file.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum OutputError {
    /// Failed to create the output directory.
    #[error("failed to create {path}: {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to create the output file.
    #[error("failed to create {path}: {source}")]
    CreateFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to write rows to the output file.
    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// Failed to write rows to a caller-supplied writer.
    #[error("failed to write SDRF rows: {0}")]
    Serialize(#[source] csv::Error),

    /// Failed DataFrame operation.
    #[error("DataFrame operation failed: {message}")]
    DataFrame { message: String },
}

impl From<polars::prelude::PolarsError> for OutputError {
    fn from(err: polars::prelude::PolarsError) -> Self {
        Self::DataFrame {
            message: err.to_string(),
        }
    }
}

/// Result type for output operations.
pub type Result<T> = std::result::Result<T, OutputError>;
