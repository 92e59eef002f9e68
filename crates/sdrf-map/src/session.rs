//! The column matching session.
//!
//! A [`MatchSession`] owns the local table and the target table for the
//! duration of one pairing workflow. The caller drives it through the
//! protocol one pair at a time:
//!
//! ```ignore
//! let mut session = MatchSession::builder(local, template, validator).start()?;
//! session.select_local("Species")?;
//! session.select_target(TargetChoice::Column("characteristics[organism]".into()))?;
//! let step = session.confirm()?;
//! let result = session.finish();
//! ```
//!
//! Refused operations return a [`MatchError`] and leave the session as it was.

use polars::prelude::{AnyValue, DataFrame, IntoColumn, NamedFrom, Series};
use tracing::Span;

use sdrf_common::{column_values, distinct_present};
use sdrf_standards::{ColumnCategory, TEMPLATE_COLUMNS, category_of};
use sdrf_validate::ValueValidator;

use crate::error::{MatchError, Result};
use crate::options::MatchOptions;
use crate::pool::CandidatePool;
use crate::record::{MatchRecord, MergeResult, RowCountMismatch};
use crate::report::{Reporter, TracingReporter};
use crate::state::{MatchState, Step, TargetChoice};

/// Configures and starts a [`MatchSession`].
pub struct SessionBuilder<'a> {
    local: DataFrame,
    target: DataFrame,
    validator: ValueValidator<'a>,
    local_columns: Option<Vec<String>>,
    target_columns: Option<Vec<String>>,
    options: MatchOptions,
    reporter: Box<dyn Reporter + 'a>,
}

impl<'a> SessionBuilder<'a> {
    /// Restrict the local candidates (default: every local column, in table order).
    #[must_use]
    pub fn local_columns<I, S>(mut self, columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.local_columns = Some(columns.into_iter().map(Into::into).collect());
        self
    }

    /// Restrict the target candidates (default: the canonical SDRF columns).
    #[must_use]
    pub fn target_columns<I, S>(mut self, columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.target_columns = Some(columns.into_iter().map(Into::into).collect());
        self
    }

    #[must_use]
    pub fn options(mut self, options: MatchOptions) -> Self {
        self.options = options;
        self
    }

    /// Deliver notices to `reporter` instead of the log.
    #[must_use]
    pub fn reporter(mut self, reporter: impl Reporter + 'a) -> Self {
        self.reporter = Box::new(reporter);
        self
    }

    /// Validate the candidates and start the session.
    ///
    /// Fails with [`MatchError::LocalColumnMissing`] when a local candidate
    /// is not a column of the local table.
    pub fn start(self) -> Result<MatchSession<'a>> {
        let locals = match self.local_columns {
            Some(columns) => {
                if let Some(missing) = columns
                    .iter()
                    .find(|c| self.local.column(c.as_str()).is_err())
                {
                    return Err(MatchError::LocalColumnMissing(missing.clone()));
                }
                columns
            }
            None => self
                .local
                .get_column_names()
                .into_iter()
                .map(ToString::to_string)
                .collect(),
        };
        let targets = self
            .target_columns
            .unwrap_or_else(|| TEMPLATE_COLUMNS.iter().map(ToString::to_string).collect());
        let pool = CandidatePool::new(locals, targets);

        let span = tracing::info_span!(
            "match_session",
            local_rows = self.local.height(),
            target_rows = self.target.height(),
        );
        let mut reporter = self.reporter;
        let row_mismatch = {
            let _guard = span.enter();
            let local_rows = self.local.height();
            let target_rows = self.target.height();
            let mismatch = (local_rows != target_rows).then_some(RowCountMismatch {
                local_rows,
                target_rows,
            });
            if let Some(mismatch) = &mismatch {
                reporter.row_mismatch(mismatch);
            }
            tracing::debug!(
                locals = pool.locals().len(),
                targets = pool.targets().len(),
                "session started"
            );
            mismatch
        };

        let state = if pool.is_exhausted() {
            MatchState::Idle
        } else {
            MatchState::AwaitingLocalSelection
        };

        Ok(MatchSession {
            local: self.local,
            result: MergeResult {
                table: self.target,
                records: Vec::new(),
                row_mismatch,
            },
            validator: self.validator,
            pool,
            state,
            options: self.options,
            reporter,
            span,
        })
    }
}

/// One pairing workflow over a local table and a target table.
pub struct MatchSession<'a> {
    local: DataFrame,
    result: MergeResult,
    validator: ValueValidator<'a>,
    pool: CandidatePool,
    state: MatchState,
    options: MatchOptions,
    reporter: Box<dyn Reporter + 'a>,
    span: Span,
}

impl<'a> MatchSession<'a> {
    /// Start configuring a session over `local` and `target`.
    pub fn builder(
        local: DataFrame,
        target: DataFrame,
        validator: ValueValidator<'a>,
    ) -> SessionBuilder<'a> {
        SessionBuilder {
            local,
            target,
            validator,
            local_columns: None,
            target_columns: None,
            options: MatchOptions::default(),
            reporter: Box::new(TracingReporter),
        }
    }

    /// Start a session with default candidates and options.
    pub fn start(
        local: DataFrame,
        target: DataFrame,
        validator: ValueValidator<'a>,
    ) -> Result<Self> {
        Self::builder(local, target, validator).start()
    }

    pub fn state(&self) -> &MatchState {
        &self.state
    }

    pub fn pool(&self) -> &CandidatePool {
        &self.pool
    }

    pub fn options(&self) -> MatchOptions {
        self.options
    }

    /// Row-count mismatch detected at start, if any.
    pub fn row_mismatch(&self) -> Option<RowCountMismatch> {
        self.result.row_mismatch
    }

    /// Records of every pair so far, in order.
    pub fn records(&self) -> &[MatchRecord] {
        &self.result.records
    }

    /// The target table as merged so far.
    pub fn table(&self) -> &DataFrame {
        &self.result.table
    }

    pub fn is_finished(&self) -> bool {
        self.state.is_idle()
    }

    /// Select the next local column.
    ///
    /// Allowed while waiting for a local column, and to re-pick the local
    /// column while its target is not yet chosen.
    pub fn select_local(&mut self, column: &str) -> Result<Step> {
        let _guard = self.span.enter();
        match &self.state {
            MatchState::Idle => return Err(MatchError::SessionFinished),
            MatchState::AwaitingConfirmation { local, target } => {
                return Err(MatchError::PairInFlight {
                    local: local.clone(),
                    target: target.to_string(),
                });
            }
            MatchState::AwaitingLocalSelection | MatchState::AwaitingTargetSelection { .. } => {}
        }
        if !self.pool.has_local(column) {
            return Err(MatchError::LocalNotAvailable(column.to_string()));
        }

        self.state = MatchState::AwaitingTargetSelection {
            local: column.to_string(),
        };
        tracing::debug!(local = %column, "local column selected");
        Ok(Step::to(&self.state))
    }

    /// Choose the target for the selected local column.
    ///
    /// From [`MatchState::AwaitingConfirmation`] this replaces the pending
    /// target of the same pair.
    pub fn select_target(&mut self, choice: TargetChoice) -> Result<Step> {
        let _guard = self.span.enter();
        let local = match &self.state {
            MatchState::Idle => return Err(MatchError::SessionFinished),
            MatchState::AwaitingLocalSelection => return Err(MatchError::NoLocalSelected),
            MatchState::AwaitingTargetSelection { local }
            | MatchState::AwaitingConfirmation { local, .. } => local.clone(),
        };
        if let TargetChoice::Column(name) = &choice
            && !self.pool.has_target(name)
        {
            return Err(MatchError::TargetNotAvailable(name.clone()));
        }

        tracing::debug!(local = %local, target_column = %choice, "target selected");
        self.state = MatchState::AwaitingConfirmation {
            local,
            target: choice,
        };
        Ok(Step::to(&self.state))
    }

    /// Validate and, when accepted, commit the pending pair.
    ///
    /// The local column always leaves the pool. The target leaves it too,
    /// unless the pair was not accepted and the session uses
    /// [`RejectedTargetPolicy::Release`](crate::RejectedTargetPolicy::Release).
    pub fn confirm(&mut self) -> Result<Step> {
        let span = self.span.clone();
        let _guard = span.enter();
        let (local, target) = match &self.state {
            MatchState::Idle => return Err(MatchError::SessionFinished),
            MatchState::AwaitingConfirmation { local, target } => (local.clone(), target.clone()),
            MatchState::AwaitingLocalSelection | MatchState::AwaitingTargetSelection { .. } => {
                return Err(MatchError::NoPairPending);
            }
        };

        let record = match target {
            TargetChoice::Skip => {
                self.pool.remove_local(&local);
                MatchRecord::skipped(&local)
            }
            TargetChoice::Column(target) => {
                let record = self.check_and_commit(&local, &target)?;
                self.pool.remove_local(&local);
                if self.options.rejected_targets.consumes(record.committed()) {
                    self.pool.remove_target(&target);
                }
                record
            }
        };

        Ok(self.finish_step(record))
    }

    /// Skip the selected local column without mapping it.
    pub fn skip(&mut self) -> Result<Step> {
        let previous = self.state.clone();
        self.select_target(TargetChoice::Skip)?;
        self.confirm().inspect_err(|_| self.state = previous)
    }

    /// Drop the pending selection without consuming any column.
    pub fn clear_selection(&mut self) -> Step {
        let _guard = self.span.enter();
        if self.state.local().is_some() {
            tracing::debug!("selection cleared");
            self.state = MatchState::AwaitingLocalSelection;
        }
        Step::to(&self.state)
    }

    /// End the session and hand back the merged result.
    pub fn finish(self) -> MergeResult {
        self.span.in_scope(|| {
            tracing::info!(
                pairs = self.result.records.len(),
                accepted = self.result.accepted_count(),
                rejected = self.result.rejected_count(),
                unmatched_locals = self.pool.locals().len(),
                "session finished"
            );
        });
        self.result
    }

    fn check_and_commit(&mut self, local: &str, target: &str) -> Result<MatchRecord> {
        let category = category_of(target);
        let mut values = column_values(&self.local, local)?;
        if category == ColumnCategory::Organism {
            values = self.validator.normalizer().normalize_column(&values);
        }
        let distinct = distinct_present(&values);
        let diagnostic = self.validator.validate(category, &distinct, target);

        if diagnostic.is_accepted() {
            self.commit(target, values)?;
        }

        Ok(MatchRecord {
            local: local.to_string(),
            target: Some(target.to_string()),
            category: Some(category),
            diagnostic,
        })
    }

    /// Write `values` into the target column, aligned to the target row count.
    fn commit(&mut self, target: &str, mut values: Vec<Option<String>>) -> Result<()> {
        let table = &mut self.result.table;
        let rows = if table.width() == 0 {
            values.len()
        } else {
            table.height()
        };
        values.resize(rows, None);

        let column = Series::new(target.into(), values).into_column();
        table.with_column(column)?;
        tracing::debug!(
            target_column = %target,
            filled = count_present(table, target),
            "values committed"
        );
        Ok(())
    }

    fn finish_step(&mut self, record: MatchRecord) -> Step {
        self.reporter.report(&record);
        self.result.records.push(record.clone());
        self.state = if self.pool.is_exhausted() {
            MatchState::Idle
        } else {
            MatchState::AwaitingLocalSelection
        };
        Step {
            record: Some(record),
            state: self.state.clone(),
        }
    }
}

fn count_present(table: &DataFrame, name: &str) -> usize {
    table.column(name).map_or(0, |column| {
        (0..column.len())
            .filter(|&idx| !matches!(column.get(idx), Ok(AnyValue::Null) | Err(_)))
            .count()
    })
}
