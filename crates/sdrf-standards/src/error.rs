//! Error types for standards loading and lookup.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur when loading or querying SDRF vocabularies.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StandardsError {
    /// Ontology path does not exist.
    #[error("ontology source not found: {path}")]
    PathNotFound { path: PathBuf },

    /// Failed to read a term file or directory.
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse a JSON term-set file.
    #[error("failed to parse term sets in {path}: {source}")]
    JsonParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Term-set file does not follow the `all_<qualifier>_elements` naming.
    #[error("invalid term set {key} in {path}: {reason}")]
    InvalidTermSet {
        key: String,
        path: PathBuf,
        reason: &'static str,
    },

    /// No term set is registered for the column's qualifier.
    #[error("no ontology term set '{key}' for column '{column}'")]
    TermSetNotFound { column: String, key: String },
}

impl StandardsError {
    /// Returns true when the error means "this column has no vocabulary".
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::TermSetNotFound { .. })
    }
}

/// Result type for standards operations.
pub type Result<T> = std::result::Result<T, StandardsError>;
