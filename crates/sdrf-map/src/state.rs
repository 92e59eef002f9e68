//! Matching protocol states.

use std::fmt;

use serde::Serialize;

use crate::record::MatchRecord;

/// Target side of a pending pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TargetChoice {
    /// Map the local column onto this target column.
    Column(String),
    /// Do not map the local column.
    Skip,
}

impl TargetChoice {
    /// Target column name, or `None` for a skip.
    pub fn column(&self) -> Option<&str> {
        match self {
            Self::Column(name) => Some(name),
            Self::Skip => None,
        }
    }
}

impl fmt::Display for TargetChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Column(name) => f.write_str(name),
            Self::Skip => f.write_str("(skip)"),
        }
    }
}

/// Where a session is in the pairing protocol.
///
/// ```text
/// AwaitingLocalSelection --select_local--> AwaitingTargetSelection
/// AwaitingTargetSelection --select_target--> AwaitingConfirmation
/// AwaitingConfirmation --confirm--> AwaitingLocalSelection | Idle
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum MatchState {
    /// No local columns remain; the session is finished.
    Idle,
    /// Waiting for the next local column.
    AwaitingLocalSelection,
    /// A local column is selected; waiting for its target.
    AwaitingTargetSelection { local: String },
    /// A complete pair is waiting to be confirmed.
    AwaitingConfirmation { local: String, target: TargetChoice },
}

impl MatchState {
    /// The selected local column, if any.
    pub fn local(&self) -> Option<&str> {
        match self {
            Self::AwaitingTargetSelection { local } | Self::AwaitingConfirmation { local, .. } => {
                Some(local)
            }
            Self::Idle | Self::AwaitingLocalSelection => None,
        }
    }

    /// Returns true for the terminal state.
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }
}

/// Outcome of one protocol transition.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Step {
    /// Record produced by a confirmed pair; `None` for selections.
    pub record: Option<MatchRecord>,
    /// State after the transition.
    pub state: MatchState,
}

impl Step {
    pub(crate) fn to(state: &MatchState) -> Self {
        Self {
            record: None,
            state: state.clone(),
        }
    }
}
