//! SDRF-Proteomics target schema.
//!
//! SDRF column names carry their meaning in a bracketed qualifier, e.g.
//! `characteristics[organism part]` or `comment[instrument]`. The qualifier
//! is also the key under which the ontology term set for the column is
//! published (`all_organism_part_elements`).

/// Canonical SDRF columns offered as matching targets, in template order.
pub const TEMPLATE_COLUMNS: &[&str] = &[
    "source name",
    "assay name",
    "technology type",
    "characteristics[age]",
    "characteristics[ancestry category]",
    "characteristics[biological replicate]",
    "characteristics[cell line]",
    "characteristics[cell type]",
    "characteristics[developmental stage]",
    "characteristics[disease]",
    "characteristics[individual]",
    "characteristics[organism part]",
    "characteristics[organism]",
    "characteristics[sex]",
    "characteristics[enrichment process]",
    "characteristics[compound]",
    "characteristics[concentration of compound]",
    "comment[modification parameters]",
    "comment[cleavage agent details]",
    "comment[data file]",
    "comment[fraction identifier]",
    "comment[fractionation method]",
    "comment[instrument]",
    "comment[label]",
    "comment[technical replicate]",
    "comment[fragment mass tolerance]",
    "comment[precursor mass tolerance]",
    "comment[dissociation method]",
    "characteristics[spiked compound]",
    "characteristics[synthetic peptide]",
    "characteristics[phenotype]",
    "comment[depletion]",
];

/// Column prefixes whose bracketed qualifier names an ontology-backed attribute.
const ONTOLOGY_PREFIXES: &[&str] = &["characteristics[", "comment[", "factor value["];

/// Returns true if `name` is one of the canonical template columns.
pub fn is_template_column(name: &str) -> bool {
    TEMPLATE_COLUMNS.contains(&name)
}

/// Returns true if `name` follows the bracketed SDRF attribute convention.
///
/// ```
/// use sdrf_standards::follows_ontology_convention;
///
/// assert!(follows_ontology_convention("characteristics[strain]"));
/// assert!(follows_ontology_convention("factor value[disease]"));
/// assert!(!follows_ontology_convention("sample notes"));
/// assert!(!follows_ontology_convention("comment[]"));
/// ```
pub fn follows_ontology_convention(name: &str) -> bool {
    ONTOLOGY_PREFIXES.iter().any(|prefix| {
        name.strip_prefix(prefix)
            .and_then(|rest| rest.strip_suffix(']'))
            .is_some_and(|inner| !inner.trim().is_empty() && !inner.contains(['[', ']']))
    })
}

/// Extracts the qualifier of a column name.
///
/// The qualifier is the text after the last `[` up to the next `]`. Names
/// without brackets are their own qualifier.
///
/// ```
/// use sdrf_standards::qualifier;
///
/// assert_eq!(qualifier("characteristics[organism part]"), "organism part");
/// assert_eq!(qualifier("technology type"), "technology type");
/// ```
pub fn qualifier(name: &str) -> &str {
    let tail = name.rsplit('[').next().unwrap_or(name);
    tail.split(']').next().unwrap_or(tail)
}

/// Builds the term-set key for a column: `all_<qualifier>_elements`.
///
/// ```
/// use sdrf_standards::ontology_key;
///
/// assert_eq!(ontology_key("comment[cleavage agent details]"), "all_cleavage_agent_details_elements");
/// ```
pub fn ontology_key(name: &str) -> String {
    format!("all_{}_elements", qualifier(name).replace(' ', "_"))
}
