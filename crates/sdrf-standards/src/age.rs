//! SDRF age notation.
//!
//! An age is a sequence of `<n>Y`, `<n>M`, `<n>W`, `<n>D` components in that
//! order (at least one), e.g. `40Y`, `1Y6M`, `8W3D`. A range joins two ages
//! with a hyphen (`40Y-50Y`). The reserved placeholders `not available`,
//! `not applicable`, `anonymized` and `pooled` are also accepted.

use std::collections::BTreeSet;
use std::sync::LazyLock;

use regex::Regex;

static AGE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:\d+Y)?(?:\d+M)?(?:\d+W)?(?:\d+D)?$").expect("valid age regex")
});

const AGE_PLACEHOLDERS: &[&str] = &["not available", "not applicable", "anonymized", "pooled"];

/// Predicate over age values.
///
/// The validator only sees the distinct non-missing values of a local
/// column, so implementations decide per value.
pub trait AgeFormat {
    /// Returns true if `value` is an acceptable age.
    fn is_valid(&self, value: &str) -> bool;

    /// Values from `values` that are not acceptable ages, in sorted order.
    fn invalid_values(&self, values: &BTreeSet<String>) -> BTreeSet<String> {
        values
            .iter()
            .filter(|value| !self.is_valid(value))
            .cloned()
            .collect()
    }
}

/// The SDRF-Proteomics age notation.
#[derive(Debug, Clone, Copy, Default)]
pub struct SdrfAgeFormat;

impl AgeFormat for SdrfAgeFormat {
    fn is_valid(&self, value: &str) -> bool {
        if AGE_PLACEHOLDERS.contains(&value) {
            return true;
        }
        match value.split_once('-') {
            Some((from, to)) => is_single_age(from) && is_single_age(to),
            None => is_single_age(value),
        }
    }
}

fn is_single_age(value: &str) -> bool {
    !value.is_empty() && AGE_RE.is_match(value)
}
