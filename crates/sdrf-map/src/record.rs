//! Per-pair records and the merged result.

use polars::prelude::DataFrame;
use serde::Serialize;

use sdrf_standards::ColumnCategory;
use sdrf_validate::Diagnostic;

/// Local and target tables have different row counts.
///
/// Matching continues; committed columns are padded or truncated to the
/// target row count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RowCountMismatch {
    pub local_rows: usize,
    pub target_rows: usize,
}

/// Verdict on one confirmed or skipped pair.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatchRecord {
    /// Local column that was consumed.
    pub local: String,
    /// Target column, `None` when the local column was skipped.
    pub target: Option<String>,
    /// Validation category of the target.
    pub category: Option<ColumnCategory>,
    /// Validation outcome.
    pub diagnostic: Diagnostic,
}

impl MatchRecord {
    pub(crate) fn skipped(local: &str) -> Self {
        Self {
            local: local.to_string(),
            target: None,
            category: None,
            diagnostic: Diagnostic::Skipped,
        }
    }

    /// Returns true if the local values were written into the target.
    pub fn committed(&self) -> bool {
        self.diagnostic.is_accepted()
    }
}

/// The target table with every accepted column written in, plus the ordered
/// record of every pair.
#[derive(Debug, Clone)]
pub struct MergeResult {
    pub table: DataFrame,
    pub records: Vec<MatchRecord>,
    pub row_mismatch: Option<RowCountMismatch>,
}

impl MergeResult {
    /// Number of committed pairs.
    pub fn accepted_count(&self) -> usize {
        self.records.iter().filter(|r| r.committed()).count()
    }

    /// Number of rejected pairs.
    pub fn rejected_count(&self) -> usize {
        self.records
            .iter()
            .filter(|r| r.diagnostic.is_rejected())
            .count()
    }

    /// Returns true if any pair was rejected.
    pub fn has_rejections(&self) -> bool {
        self.rejected_count() > 0
    }
}
