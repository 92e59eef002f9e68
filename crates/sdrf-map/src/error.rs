//! Error types for the matching session.

use thiserror::Error;

/// Errors from matching operations.
///
/// Every variant except [`MatchError::DataFrame`] is a protocol violation:
/// the operation was refused and the session is unchanged.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum MatchError {
    /// A requested local candidate is not a column of the local table.
    #[error("Local table has no column '{0}'")]
    LocalColumnMissing(String),

    /// Local column is not (or no longer) in the candidate pool.
    #[error("Local column not available: {0}")]
    LocalNotAvailable(String),

    /// Target column is not (or no longer) in the candidate pool.
    #[error("Target column not available: {0}")]
    TargetNotAvailable(String),

    /// A target was chosen before a local column.
    #[error("No local column selected")]
    NoLocalSelected,

    /// Confirm was requested without a complete pair.
    #[error("No pair is waiting for confirmation")]
    NoPairPending,

    /// A new local column was picked while a complete pair awaits confirmation.
    #[error("Pair '{local}' -> '{target}' is awaiting confirmation")]
    PairInFlight {
        /// The pending local column.
        local: String,
        /// The pending target choice.
        target: String,
    },

    /// Every local column has been matched or skipped.
    #[error("Matching session is finished")]
    SessionFinished,

    /// Failed DataFrame operation while reading or committing values.
    #[error("DataFrame operation failed: {message}")]
    DataFrame { message: String },
}

impl MatchError {
    /// Returns true if the error is a refused operation rather than a data failure.
    pub fn is_protocol_violation(&self) -> bool {
        !matches!(self, Self::DataFrame { .. })
    }

    /// Get the column name associated with this error, if any.
    pub fn column(&self) -> Option<&str> {
        match self {
            Self::LocalColumnMissing(c) | Self::LocalNotAvailable(c) | Self::TargetNotAvailable(c) => {
                Some(c)
            }
            Self::PairInFlight { local, .. } => Some(local),
            _ => None,
        }
    }
}

impl From<polars::prelude::PolarsError> for MatchError {
    fn from(err: polars::prelude::PolarsError) -> Self {
        Self::DataFrame {
            message: err.to_string(),
        }
    }
}

/// Result type for matching operations.
pub type Result<T> = std::result::Result<T, MatchError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = MatchError::PairInFlight {
            local: "Species".to_string(),
            target: "characteristics[organism]".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Pair 'Species' -> 'characteristics[organism]' is awaiting confirmation"
        );
        assert_eq!(err.column(), Some("Species"));
        assert!(err.is_protocol_violation());
    }

    #[test]
    fn test_polars_error_is_not_protocol() {
        let err: MatchError = polars::prelude::PolarsError::ColumnNotFound("x".into()).into();
        assert!(!err.is_protocol_violation());
        assert_eq!(err.column(), None);
    }
}
