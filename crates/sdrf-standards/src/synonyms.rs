//! Organism synonym normalization.
//!
//! Local sheets often spell organisms colloquially (`mouse`, `human`,
//! `E. coli`). Before values are checked against the organism ontology they
//! are rewritten to the canonical scientific name. Matching is exact and
//! case-sensitive; a value that is not a registered alias is returned
//! unchanged.

use std::collections::{BTreeSet, HashMap};

/// Built-in alias table: canonical name followed by the spellings that map to it.
pub const ORGANISM_ALIASES: &[(&str, &[&str])] = &[
    (
        "Homo sapiens",
        &["Human", "human", "homo sapiens", "Homo Sapiens"],
    ),
    (
        "Mus musculus",
        &["mouse", "Mouse", "Mus Musculus", "mus musculus"],
    ),
    (
        "Arabidopsis thaliana",
        &[
            "arabidopsis thaliana",
            "Arabidopsis Thaliana",
            "arabidopsis",
            "Arabidopsis",
            "thale cress",
        ],
    ),
    (
        "Drosophila melanogaster",
        &[
            "drosophila",
            "Drosophila",
            "Drosophila Melanogsaster",
            "drosophila melanogaster",
            "fruitfly",
            "fruit fly",
        ],
    ),
    (
        "Saccharomyces cerevisiae",
        &[
            "Saccharomyces Cerevisiae",
            "saccharomyces cerevisiae",
            "brewer's yeast",
            "Brewer's yeast",
        ],
    ),
    (
        "Caenorhabditis elegans",
        &[
            "C. Elegans",
            "C. elegans",
            "c. elegans",
            "caenorhabditis elegans",
            "Caenorhabditis Elegans",
            "worm",
            "Worm",
        ],
    ),
    (
        "Danio rerio",
        &["Danio Rerio", "danio rerio", "zebrafish", "Zebrafish"],
    ),
    (
        "Escherichia coli",
        &[
            "E. Coli",
            "E. coli",
            "e. coli",
            "Escherichia Coli",
            "escherichia coli",
        ],
    ),
];

/// Flattened alias -> canonical lookup.
///
/// The table is flattened once, so every occurrence of an alias normalizes
/// the same way regardless of where it appears in the input.
#[derive(Debug, Clone, Default)]
pub struct SynonymNormalizer {
    aliases: HashMap<String, String>,
}

impl SynonymNormalizer {
    /// Create a normalizer with no aliases.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a normalizer preloaded with [`ORGANISM_ALIASES`].
    pub fn organisms() -> Self {
        let mut normalizer = Self::new();
        for (canonical, aliases) in ORGANISM_ALIASES {
            for alias in *aliases {
                normalizer.add_alias(canonical, alias);
            }
        }
        normalizer
    }

    /// Register `alias` for `canonical`.
    ///
    /// Returns false (and keeps the existing mapping) when the alias is
    /// already registered; the first canonical name to claim an alias wins.
    pub fn add_alias(&mut self, canonical: &str, alias: &str) -> bool {
        if alias == canonical || self.aliases.contains_key(alias) {
            return false;
        }
        self.aliases.insert(alias.to_string(), canonical.to_string());
        true
    }

    /// Register several aliases for one canonical name.
    pub fn extend<I, S>(&mut self, canonical: &str, aliases: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for alias in aliases {
            if !self.add_alias(canonical, alias.as_ref()) {
                tracing::debug!(
                    canonical = %canonical,
                    alias = %alias.as_ref(),
                    "alias already registered, keeping first mapping"
                );
            }
        }
    }

    /// Normalize a single raw value.
    ///
    /// ```
    /// use sdrf_standards::SynonymNormalizer;
    ///
    /// let normalizer = SynonymNormalizer::organisms();
    /// assert_eq!(normalizer.normalize("mouse"), "Mus musculus");
    /// assert_eq!(normalizer.normalize("MOUSE"), "MOUSE");
    /// ```
    pub fn normalize<'a>(&'a self, raw: &'a str) -> &'a str {
        self.aliases.get(raw).map_or(raw, String::as_str)
    }

    /// Normalize every cell of a column, keeping missing cells missing.
    pub fn normalize_column(&self, values: &[Option<String>]) -> Vec<Option<String>> {
        values
            .iter()
            .map(|value| value.as_deref().map(|raw| self.normalize(raw).to_string()))
            .collect()
    }

    /// Normalize a distinct-value set; aliases of the same organism collapse.
    pub fn normalize_set(&self, values: &BTreeSet<String>) -> BTreeSet<String> {
        values
            .iter()
            .map(|raw| self.normalize(raw).to_string())
            .collect()
    }

    /// Number of registered aliases.
    pub fn len(&self) -> usize {
        self.aliases.len()
    }

    /// Returns true if no aliases are registered.
    pub fn is_empty(&self) -> bool {
        self.aliases.is_empty()
    }
}
