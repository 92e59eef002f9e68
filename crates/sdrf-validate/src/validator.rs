//! Per-category value validation.

use std::collections::BTreeSet;
use std::fmt;

use sdrf_standards::{
    AgeFormat, ColumnCategory, OntologyRegistry, SdrfAgeFormat, SynonymNormalizer, category_of,
    ontology_key,
};

use crate::diagnostic::{Diagnostic, UnsupportedReason};

/// Allowed values of `characteristics[sex]`.
pub const SEX_VALUES: &[&str] = &["M", "F", "NA"];

/// Decides whether a set of local values may fill a target column.
///
/// Validation is pure: the same inputs always give the same [`Diagnostic`]
/// and nothing is mutated.
pub struct ValueValidator<'a> {
    registry: &'a OntologyRegistry,
    normalizer: SynonymNormalizer,
    age_format: Box<dyn AgeFormat + Send + Sync>,
}

impl fmt::Debug for ValueValidator<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ValueValidator")
            .field("term_sets", &self.registry.len())
            .field("aliases", &self.normalizer.len())
            .finish_non_exhaustive()
    }
}

impl<'a> ValueValidator<'a> {
    /// Create a validator with the built-in organism aliases and SDRF age format.
    pub fn new(registry: &'a OntologyRegistry) -> Self {
        Self {
            registry,
            normalizer: SynonymNormalizer::organisms(),
            age_format: Box::new(SdrfAgeFormat),
        }
    }

    /// Replace the organism synonym table.
    #[must_use]
    pub fn with_normalizer(mut self, normalizer: SynonymNormalizer) -> Self {
        self.normalizer = normalizer;
        self
    }

    /// Replace the age-format checker.
    #[must_use]
    pub fn with_age_format(mut self, age_format: impl AgeFormat + Send + Sync + 'static) -> Self {
        self.age_format = Box::new(age_format);
        self
    }

    /// The ontology registry consulted for ontology-backed columns.
    pub fn registry(&self) -> &OntologyRegistry {
        self.registry
    }

    /// The organism synonym normalizer.
    pub fn normalizer(&self) -> &SynonymNormalizer {
        &self.normalizer
    }

    /// Validate using the category of `target`.
    pub fn validate_for(&self, target: &str, distinct: &BTreeSet<String>) -> Diagnostic {
        self.validate(category_of(target), distinct, target)
    }

    /// Validate the distinct non-missing local values proposed for `target`.
    pub fn validate(
        &self,
        category: ColumnCategory,
        distinct: &BTreeSet<String>,
        target: &str,
    ) -> Diagnostic {
        let diagnostic = match category {
            ColumnCategory::Passthrough => Diagnostic::Accepted,
            ColumnCategory::Age => self.check_age(distinct),
            ColumnCategory::Sex => check_sex(distinct),
            ColumnCategory::Organism => {
                let normalized = self.normalizer.normalize_set(distinct);
                self.check_ontology(&normalized, target)
            }
            ColumnCategory::Ontology => self.check_ontology(distinct, target),
            ColumnCategory::Unsupported => Diagnostic::Unsupported {
                reason: UnsupportedReason::NoValidationRule,
            },
        };
        tracing::debug!(
            target_column = %target,
            category = %category,
            values = distinct.len(),
            outcome = diagnostic.label(),
            "validated values"
        );
        diagnostic
    }

    fn check_age(&self, distinct: &BTreeSet<String>) -> Diagnostic {
        let invalid = self.age_format.invalid_values(distinct);
        if invalid.is_empty() {
            Diagnostic::Accepted
        } else {
            Diagnostic::FormatRejected {
                values: invalid.into_iter().collect(),
            }
        }
    }

    fn check_ontology(&self, distinct: &BTreeSet<String>, target: &str) -> Diagnostic {
        let terms = match self.registry.terms_for(target) {
            Ok(terms) => terms,
            Err(_) => {
                return Diagnostic::Unsupported {
                    reason: UnsupportedReason::NoTermSet {
                        key: ontology_key(target),
                    },
                };
            }
        };
        if distinct.is_empty() {
            return Diagnostic::EmptyInput;
        }
        let missing: Vec<String> = distinct.difference(terms).cloned().collect();
        if missing.is_empty() {
            Diagnostic::Accepted
        } else {
            Diagnostic::OntologyRejected { missing }
        }
    }
}

fn check_sex(distinct: &BTreeSet<String>) -> Diagnostic {
    let offending: Vec<String> = distinct
        .iter()
        .filter(|value| !SEX_VALUES.contains(&value.as_str()))
        .cloned()
        .collect();
    if offending.is_empty() {
        Diagnostic::Accepted
    } else {
        Diagnostic::EnumRejected { offending }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(values: &[&str]) -> BTreeSet<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    fn registry() -> OntologyRegistry {
        OntologyRegistry::new()
            .with_terms("all_organism_elements", ["Homo sapiens", "Mus musculus"])
            .with_terms("all_organism_part_elements", ["liver", "heart"])
            .with_terms("all_cell_type_elements", Vec::<String>::new())
    }

    #[test]
    fn passthrough_accepts_anything() {
        let registry = registry();
        let validator = ValueValidator::new(&registry);
        let diagnostic = validator.validate_for("source name", &set(&["s1", "??", ""]));
        assert!(diagnostic.is_accepted());
    }

    #[test]
    fn sex_lists_offending_values() {
        let registry = registry();
        let validator = ValueValidator::new(&registry);
        assert!(validator
            .validate_for("characteristics[sex]", &set(&["M", "F", "NA"]))
            .is_accepted());
        assert_eq!(
            validator.validate_for("characteristics[sex]", &set(&["M", "f", "Unknown"])),
            Diagnostic::EnumRejected {
                offending: vec!["Unknown".to_string(), "f".to_string()]
            }
        );
    }

    #[test]
    fn organism_aliases_are_normalized_before_lookup() {
        let registry = registry();
        let validator = ValueValidator::new(&registry);
        let diagnostic =
            validator.validate_for("characteristics[organism]", &set(&["mouse", "Human"]));
        assert!(diagnostic.is_accepted());
    }

    #[test]
    fn ontology_reports_exact_difference() {
        let registry = registry();
        let validator = ValueValidator::new(&registry);
        assert_eq!(
            validator.validate_for("characteristics[organism part]", &set(&["liver", "lung", "Heart"])),
            Diagnostic::OntologyRejected {
                missing: vec!["Heart".to_string(), "lung".to_string()]
            }
        );
    }

    #[test]
    fn empty_input_and_empty_term_set() {
        let registry = registry();
        let validator = ValueValidator::new(&registry);
        assert_eq!(
            validator.validate_for("characteristics[organism part]", &BTreeSet::new()),
            Diagnostic::EmptyInput
        );
        assert_eq!(
            validator.validate_for("characteristics[cell type]", &set(&["neuron"])),
            Diagnostic::OntologyRejected {
                missing: vec!["neuron".to_string()]
            }
        );
    }

    #[test]
    fn unregistered_term_set_is_unsupported() {
        let registry = registry();
        let validator = ValueValidator::new(&registry);
        assert_eq!(
            validator.validate_for("characteristics[phenotype]", &set(&["x"])),
            Diagnostic::Unsupported {
                reason: UnsupportedReason::NoTermSet {
                    key: "all_phenotype_elements".to_string()
                }
            }
        );
        assert_eq!(
            validator.validate_for("free notes", &set(&["x"])),
            Diagnostic::Unsupported {
                reason: UnsupportedReason::NoValidationRule
            }
        );
    }

    #[test]
    fn age_uses_configured_format() {
        struct AnyAge;
        impl AgeFormat for AnyAge {
            fn is_valid(&self, _value: &str) -> bool {
                true
            }
        }

        let registry = registry();
        let strict = ValueValidator::new(&registry);
        assert_eq!(
            strict.validate_for("characteristics[age]", &set(&["40Y", "forty"])),
            Diagnostic::FormatRejected {
                values: vec!["forty".to_string()]
            }
        );
        let lenient = ValueValidator::new(&registry).with_age_format(AnyAge);
        assert!(lenient
            .validate_for("characteristics[age]", &set(&["forty"]))
            .is_accepted());
    }
}
