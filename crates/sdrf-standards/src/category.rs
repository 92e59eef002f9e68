//! Validation category of each target column.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::schema::{follows_ontology_convention, is_template_column};

/// Target columns whose local values are copied without inspection.
const PASSTHROUGH_COLUMNS: &[&str] = &[
    "source name",
    "assay name",
    "comment[data file]",
    "comment[fraction identifier]",
    "comment[technical replicate]",
];

const AGE_COLUMN: &str = "characteristics[age]";
const SEX_COLUMN: &str = "characteristics[sex]";
const ORGANISM_COLUMN: &str = "characteristics[organism]";

/// Validation strategy assigned to a target column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColumnCategory {
    /// Free text, always accepted.
    Passthrough,
    /// Must satisfy the SDRF age notation.
    Age,
    /// Must be one of `M`, `F`, `NA`.
    Sex,
    /// Ontology-checked after organism synonym normalization.
    Organism,
    /// Ontology-checked against the column's term set.
    Ontology,
    /// No validation path exists for this column.
    Unsupported,
}

impl ColumnCategory {
    /// Get all categories.
    pub const fn all() -> &'static [Self] {
        &[
            Self::Passthrough,
            Self::Age,
            Self::Sex,
            Self::Organism,
            Self::Ontology,
            Self::Unsupported,
        ]
    }

    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Passthrough => "Passthrough",
            Self::Age => "Age format",
            Self::Sex => "Sex (M/F/NA)",
            Self::Organism => "Organism",
            Self::Ontology => "Ontology",
            Self::Unsupported => "Unsupported",
        }
    }

    /// Whether values in this category are checked against an ontology.
    pub fn uses_ontology(&self) -> bool {
        matches!(self, Self::Organism | Self::Ontology)
    }
}

impl fmt::Display for ColumnCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Classifies a target column.
///
/// Canonical columns get their fixed category; other names default to
/// [`ColumnCategory::Ontology`] when they follow the bracketed attribute
/// convention and to [`ColumnCategory::Unsupported`] otherwise.
///
/// ```
/// use sdrf_standards::{ColumnCategory, category_of};
///
/// assert_eq!(category_of("source name"), ColumnCategory::Passthrough);
/// assert_eq!(category_of("characteristics[sex]"), ColumnCategory::Sex);
/// assert_eq!(category_of("characteristics[strain]"), ColumnCategory::Ontology);
/// assert_eq!(category_of("notes"), ColumnCategory::Unsupported);
/// ```
pub fn category_of(target: &str) -> ColumnCategory {
    if PASSTHROUGH_COLUMNS.contains(&target) {
        return ColumnCategory::Passthrough;
    }
    match target {
        AGE_COLUMN => ColumnCategory::Age,
        SEX_COLUMN => ColumnCategory::Sex,
        ORGANISM_COLUMN => ColumnCategory::Organism,
        _ if is_template_column(target) || follows_ontology_convention(target) => {
            ColumnCategory::Ontology
        }
        _ => ColumnCategory::Unsupported,
    }
}
