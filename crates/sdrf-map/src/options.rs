//! Session options.

use serde::{Deserialize, Serialize};

/// What happens to a target column whose pair was not accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RejectedTargetPolicy {
    /// The target leaves the pool after any confirmed pair.
    #[default]
    Consume,
    /// A rejected or unsupported target stays available for another local column.
    Release,
}

impl RejectedTargetPolicy {
    /// Whether a confirmed pair with the given outcome removes its target from the pool.
    pub fn consumes(self, accepted: bool) -> bool {
        match self {
            Self::Consume => true,
            Self::Release => accepted,
        }
    }
}

/// Options for a [`MatchSession`](crate::MatchSession).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchOptions {
    /// Pool policy for targets of rejected pairs.
    pub rejected_targets: RejectedTargetPolicy,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn policy_consumption() {
        assert!(RejectedTargetPolicy::Consume.consumes(false));
        assert!(RejectedTargetPolicy::Release.consumes(true));
        assert!(!RejectedTargetPolicy::Release.consumes(false));
        assert_eq!(MatchOptions::default().rejected_targets, RejectedTargetPolicy::Consume);
    }
}
