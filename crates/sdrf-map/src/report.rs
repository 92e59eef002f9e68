//! Delivery of match outcomes to the user.

use sdrf_validate::NoticeKind;

use crate::record::{MatchRecord, RowCountMismatch};

/// Receives one notice per confirmed or skipped pair.
pub trait Reporter {
    /// Called after each pair has been recorded.
    fn report(&mut self, record: &MatchRecord);

    /// Called once at session start when the row counts differ.
    fn row_mismatch(&mut self, _mismatch: &RowCountMismatch) {}
}

/// Logs notices through `tracing`.
///
/// Only column names, outcome labels and counts are logged; cell values
/// stay out of the log.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingReporter;

impl Reporter for TracingReporter {
    fn report(&mut self, record: &MatchRecord) {
        let target = record.target.as_deref().unwrap_or("-");
        let outcome = record.diagnostic.label();
        match record.diagnostic.notice() {
            NoticeKind::Success => {
                tracing::info!(local = %record.local, target_column = %target, outcome, "pair accepted");
            }
            NoticeKind::Error => tracing::warn!(
                local = %record.local,
                target_column = %target,
                outcome,
                offending = record.diagnostic.offending_values().len(),
                "pair rejected"
            ),
            NoticeKind::Instruction => tracing::info!(
                local = %record.local,
                target_column = %target,
                outcome,
                "column needs manual ontology input"
            ),
            NoticeKind::Neutral => {
                tracing::info!(local = %record.local, "column skipped");
            }
        }
    }

    fn row_mismatch(&mut self, mismatch: &RowCountMismatch) {
        tracing::warn!(
            local_rows = mismatch.local_rows,
            target_rows = mismatch.target_rows,
            "local and target tables have different row counts"
        );
    }
}

/// Keeps every record in memory; useful for callers that render notices later.
impl Reporter for Vec<MatchRecord> {
    fn report(&mut self, record: &MatchRecord) {
        self.push(record.clone());
    }
}
