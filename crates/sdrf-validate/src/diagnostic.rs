//! Validation outcome types.
//!
//! A [`Diagnostic`] is the verdict on one (local column, target column) pair.
//! Rejections carry exactly the values that caused them so the user can fix
//! the local sheet.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Offending values shown in a message before the list is abbreviated.
const MAX_LISTED_VALUES: usize = 10;

/// How a diagnostic is presented to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NoticeKind {
    /// Values were accepted and merged.
    Success,
    /// Values were rejected.
    Error,
    /// The column needs a different input path.
    Instruction,
    /// Nothing happened (skipped pair).
    Neutral,
}

impl NoticeKind {
    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Success => "Success",
            Self::Error => "Error",
            Self::Instruction => "Instruction",
            Self::Neutral => "Skipped",
        }
    }
}

/// Why a target column cannot be validated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum UnsupportedReason {
    /// The column is ontology-backed but no term set is registered for it.
    NoTermSet { key: String },
    /// The column follows no known validation rule.
    NoValidationRule,
}

impl fmt::Display for UnsupportedReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoTermSet { key } => write!(f, "no ontology term set '{key}'"),
            Self::NoValidationRule => f.write_str("no validation rule for this column"),
        }
    }
}

/// Verdict on one confirmed pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum Diagnostic {
    /// Values satisfy the target's rule and were merged.
    Accepted,
    /// Values do not follow the required format (age notation).
    FormatRejected { values: Vec<String> },
    /// Values outside the allowed enumeration (sex).
    EnumRejected { offending: Vec<String> },
    /// Values that are not terms of the column's ontology.
    OntologyRejected { missing: Vec<String> },
    /// Every local value was missing, so nothing could be checked.
    EmptyInput,
    /// The target column has no validation path.
    Unsupported { reason: UnsupportedReason },
    /// The user chose not to map the local column.
    Skipped,
}

impl Diagnostic {
    /// Returns true if the values were accepted.
    pub fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted)
    }

    /// Returns true for the three rejection variants and empty input.
    pub fn is_rejected(&self) -> bool {
        matches!(
            self,
            Self::FormatRejected { .. }
                | Self::EnumRejected { .. }
                | Self::OntologyRejected { .. }
                | Self::EmptyInput
        )
    }

    /// The values that caused a rejection (empty for other outcomes).
    pub fn offending_values(&self) -> &[String] {
        match self {
            Self::FormatRejected { values } => values,
            Self::EnumRejected { offending } => offending,
            Self::OntologyRejected { missing } => missing,
            _ => &[],
        }
    }

    /// Presentation kind.
    pub fn notice(&self) -> NoticeKind {
        match self {
            Self::Accepted => NoticeKind::Success,
            Self::FormatRejected { .. }
            | Self::EnumRejected { .. }
            | Self::OntologyRejected { .. }
            | Self::EmptyInput => NoticeKind::Error,
            Self::Unsupported { .. } => NoticeKind::Instruction,
            Self::Skipped => NoticeKind::Neutral,
        }
    }

    /// Short outcome label for tables and logs.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Accepted => "accepted",
            Self::FormatRejected { .. } => "format rejected",
            Self::EnumRejected { .. } => "enum rejected",
            Self::OntologyRejected { .. } => "ontology rejected",
            Self::EmptyInput => "empty input",
            Self::Unsupported { .. } => "unsupported",
            Self::Skipped => "skipped",
        }
    }

    /// User-facing message.
    pub fn message(&self) -> String {
        match self {
            Self::Accepted => {
                "The local metadata values are valid terms and are mapped to the SDRF file."
                    .to_string()
            }
            Self::FormatRejected { values } => format!(
                "The age column is not in the correct format ({}), please check and try again.",
                list_values(values)
            ),
            Self::EnumRejected { offending } => format!(
                "The sex column should only contain M, F or NA; found {}. Please check and try again.",
                list_values(offending)
            ),
            Self::OntologyRejected { missing } => format!(
                "{} are not ontology terms. Select the correct terms directly from the ontology.",
                list_values(missing)
            ),
            Self::EmptyInput => {
                "Every local value is missing, so there is nothing to map.".to_string()
            }
            Self::Unsupported { reason } => format!(
                "This column cannot be matched automatically ({reason}). Fill it in manually from the ontology."
            ),
            Self::Skipped => "Skipped this column.".to_string(),
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message())
    }
}

fn list_values(values: &[String]) -> String {
    let shown: Vec<String> = values
        .iter()
        .take(MAX_LISTED_VALUES)
        .map(|v| format!("'{v}'"))
        .collect();
    let mut text = shown.join(", ");
    if values.len() > MAX_LISTED_VALUES {
        text.push_str(&format!(" and {} more", values.len() - MAX_LISTED_VALUES));
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn notice_kinds() {
        assert_eq!(Diagnostic::Accepted.notice(), NoticeKind::Success);
        assert_eq!(Diagnostic::EmptyInput.notice(), NoticeKind::Error);
        assert_eq!(Diagnostic::Skipped.notice(), NoticeKind::Neutral);
        assert_eq!(
            Diagnostic::Unsupported {
                reason: UnsupportedReason::NoValidationRule
            }
            .notice(),
            NoticeKind::Instruction
        );
    }

    #[test]
    fn sex_message() {
        let diagnostic = Diagnostic::EnumRejected {
            offending: strings(&["Unknown", "male"]),
        };
        insta::assert_snapshot!(
            diagnostic.message(),
            @"The sex column should only contain M, F or NA; found 'Unknown', 'male'. Please check and try again."
        );
    }

    #[test]
    fn ontology_message() {
        let diagnostic = Diagnostic::OntologyRejected {
            missing: strings(&["hepatocite"]),
        };
        insta::assert_snapshot!(
            diagnostic.to_string(),
            @"'hepatocite' are not ontology terms. Select the correct terms directly from the ontology."
        );
    }

    #[test]
    fn empty_input_message() {
        insta::assert_snapshot!(
            Diagnostic::EmptyInput.to_string(),
            @"Every local value is missing, so there is nothing to map."
        );
    }

    #[test]
    fn unsupported_message() {
        let diagnostic = Diagnostic::Unsupported {
            reason: UnsupportedReason::NoTermSet {
                key: "all_phenotype_elements".to_string(),
            },
        };
        insta::assert_snapshot!(
            diagnostic.message(),
            @"This column cannot be matched automatically (no ontology term set 'all_phenotype_elements'). Fill it in manually from the ontology."
        );
    }

    #[test]
    fn long_lists_are_abbreviated() {
        let values: Vec<String> = (0..12).map(|i| format!("v{i:02}")).collect();
        let diagnostic = Diagnostic::FormatRejected { values };
        let message = diagnostic.message();
        assert!(message.contains("'v09'"));
        assert!(!message.contains("'v10'"));
        assert!(message.contains("and 2 more"));
    }

    #[test]
    fn serializes_with_outcome_tag() {
        let diagnostic = Diagnostic::EnumRejected {
            offending: strings(&["Unknown"]),
        };
        insta::assert_json_snapshot!(diagnostic, @r#"
        {
          "outcome": "enum_rejected",
          "offending": [
            "Unknown"
          ]
        }
        "#);
    }

    #[test]
    fn offending_values_by_variant() {
        let diagnostic = Diagnostic::OntologyRejected {
            missing: strings(&["a", "b"]),
        };
        assert_eq!(diagnostic.offending_values(), &["a", "b"]);
        assert!(Diagnostic::Accepted.offending_values().is_empty());
        assert!(diagnostic.is_rejected());
        assert!(!Diagnostic::Skipped.is_rejected());
    }
}
