//! Ontology term sets for ontology-backed SDRF columns.
//!
//! Term sets are keyed `all_<qualifier>_elements`, where the qualifier is the
//! bracketed part of the column name with spaces replaced by underscores.
//! They are loaded from one of two layouts:
//!
//! ```text
//! terms.json                 # {"all_organism_elements": ["Homo sapiens", ...], ...}
//!
//! terms/                     # one file per term set, one term per line
//! ├── all_organism_elements.txt
//! └── all_organism_part_elements.txt
//! ```
//!
//! A missing key and an empty set are different things: the first means the
//! column cannot be ontology-validated at all, the second means nothing is
//! accepted.

use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::path::Path;

use crate::error::{Result, StandardsError};
use crate::schema::ontology_key;

/// The controlled terms valid for one column.
pub type TermSet = BTreeSet<String>;

const KEY_PREFIX: &str = "all_";
const KEY_SUFFIX: &str = "_elements";
const TERM_FILE_EXTENSIONS: &[&str] = &["txt", "tsv"];

/// Read-only mapping from term-set key to valid terms.
#[derive(Debug, Clone, Default)]
pub struct OntologyRegistry {
    sets: BTreeMap<String, TermSet>,
}

impl OntologyRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add (or replace) a term set under `key`.
    pub fn insert<I, S>(&mut self, key: impl Into<String>, terms: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.sets
            .insert(key.into(), terms.into_iter().map(Into::into).collect());
    }

    /// Builder form of [`Self::insert`].
    #[must_use]
    pub fn with_terms<I, S>(mut self, key: impl Into<String>, terms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.insert(key, terms);
        self
    }

    /// Look up the term set for a target column.
    ///
    /// Fails with [`StandardsError::TermSetNotFound`] when no set is
    /// registered for the column's qualifier.
    pub fn terms_for(&self, column: &str) -> Result<&TermSet> {
        let key = ontology_key(column);
        match self.sets.get(&key) {
            Some(terms) => Ok(terms),
            None => Err(StandardsError::TermSetNotFound {
                column: column.to_string(),
                key,
            }),
        }
    }

    /// Returns true if a term set exists for the column.
    pub fn has_terms_for(&self, column: &str) -> bool {
        self.sets.contains_key(&ontology_key(column))
    }

    /// Get a term set by its raw key.
    pub fn get(&self, key: &str) -> Option<&TermSet> {
        self.sets.get(key)
    }

    /// Registered keys, sorted.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.sets.keys().map(String::as_str)
    }

    /// Number of registered term sets.
    pub fn len(&self) -> usize {
        self.sets.len()
    }

    /// Returns true if no term sets are registered.
    pub fn is_empty(&self) -> bool {
        self.sets.is_empty()
    }

    /// Load a registry from a JSON file or a directory of term files.
    pub fn load(path: &Path) -> Result<Self> {
        if path.is_dir() {
            Self::load_dir(path)
        } else if path.is_file() {
            Self::load_json(path)
        } else {
            Err(StandardsError::PathNotFound {
                path: path.to_path_buf(),
            })
        }
    }

    /// Load a registry from a JSON object of `key -> [terms]`.
    pub fn load_json(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|source| StandardsError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&content, path)
    }

    /// Parse a registry from JSON content; `origin` is used in error messages.
    pub fn from_json_str(content: &str, origin: &Path) -> Result<Self> {
        let raw: BTreeMap<String, Vec<String>> =
            serde_json::from_str(content).map_err(|source| StandardsError::JsonParse {
                path: origin.to_path_buf(),
                source,
            })?;

        let mut registry = Self::new();
        for (key, terms) in raw {
            check_key(&key, origin)?;
            registry.insert(key, terms);
        }

        tracing::debug!(
            path = %origin.display(),
            term_sets = registry.len(),
            "loaded ontology term sets"
        );
        Ok(registry)
    }

    /// Load a registry from a directory holding one `all_<q>_elements.txt`
    /// file per term set.
    pub fn load_dir(dir: &Path) -> Result<Self> {
        let entries = fs::read_dir(dir).map_err(|source| StandardsError::Read {
            path: dir.to_path_buf(),
            source,
        })?;

        let mut registry = Self::new();
        for entry in entries {
            let entry = entry.map_err(|source| StandardsError::Read {
                path: dir.to_path_buf(),
                source,
            })?;
            let path = entry.path();
            let is_term_file = path
                .extension()
                .and_then(|ext| ext.to_str())
                .is_some_and(|ext| TERM_FILE_EXTENSIONS.contains(&ext));
            let Some(key) = path.file_stem().and_then(|stem| stem.to_str()) else {
                continue;
            };
            if !is_term_file || !is_term_key(key) {
                tracing::debug!(path = %path.display(), "skipping non term-set file");
                continue;
            }

            let content = fs::read_to_string(&path).map_err(|source| StandardsError::Read {
                path: path.clone(),
                source,
            })?;
            registry.insert(key.to_string(), parse_term_lines(&content));
        }

        tracing::debug!(
            path = %dir.display(),
            term_sets = registry.len(),
            "loaded ontology term directory"
        );
        Ok(registry)
    }
}

fn is_term_key(key: &str) -> bool {
    key.len() > KEY_PREFIX.len() + KEY_SUFFIX.len()
        && key.starts_with(KEY_PREFIX)
        && key.ends_with(KEY_SUFFIX)
}

fn check_key(key: &str, origin: &Path) -> Result<()> {
    if is_term_key(key) {
        Ok(())
    } else {
        Err(StandardsError::InvalidTermSet {
            key: key.to_string(),
            path: origin.to_path_buf(),
            reason: "keys must look like all_<qualifier>_elements",
        })
    }
}

/// One term per line; blank lines and `#` comments are ignored.
fn parse_term_lines(content: &str) -> Vec<String> {
    content
        .lines()
        .map(|line| line.strip_prefix('\u{feff}').unwrap_or(line).trim())
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;

    fn registry() -> OntologyRegistry {
        OntologyRegistry::new()
            .with_terms("all_organism_elements", ["Homo sapiens", "Mus musculus"])
            .with_terms("all_depletion_elements", Vec::<String>::new())
    }

    #[test]
    fn terms_for_uses_qualifier_key() {
        let registry = registry();
        let terms = registry.terms_for("characteristics[organism]").unwrap();
        assert!(terms.contains("Mus musculus"));
    }

    #[test]
    fn missing_set_is_distinct_from_empty_set() {
        let registry = registry();
        let empty = registry.terms_for("comment[depletion]").unwrap();
        assert!(empty.is_empty());

        let err = registry.terms_for("characteristics[phenotype]").unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn json_rejects_bad_keys() {
        let origin = PathBuf::from("terms.json");
        let err = OntologyRegistry::from_json_str(r#"{"organism": ["x"]}"#, &origin).unwrap_err();
        assert!(matches!(err, StandardsError::InvalidTermSet { .. }));
    }

    #[test]
    fn json_loads_multiple_sets() {
        let origin = PathBuf::from("terms.json");
        let registry = OntologyRegistry::from_json_str(
            r#"{"all_sex_elements": ["M", "F"], "all_label_elements": ["label free sample"]}"#,
            &origin,
        )
        .unwrap();
        assert_eq!(registry.len(), 2);
        assert!(registry.has_terms_for("comment[label]"));
        assert_eq!(
            registry.keys().collect::<Vec<_>>(),
            vec!["all_label_elements", "all_sex_elements"]
        );
    }

    #[test]
    fn term_lines_skip_comments() {
        let terms = parse_term_lines("\u{feff}# header\nliver\n\n  heart  \n");
        assert_eq!(terms, vec!["liver", "heart"]);
    }

    #[test]
    fn key_shape() {
        assert!(is_term_key("all_cell_type_elements"));
        assert!(!is_term_key("all__elements"));
        assert!(!is_term_key("cell_type"));
    }
}
