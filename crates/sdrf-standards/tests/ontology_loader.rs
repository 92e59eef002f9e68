//! Loading ontology term sets from disk.

use std::fs;

use proptest::prelude::*;
use sdrf_standards::{
    AgeFormat, OntologyRegistry, SdrfAgeFormat, StandardsError, TEMPLATE_COLUMNS, category_of,
};

#[test]
fn loads_json_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("terms.json");
    fs::write(
        &path,
        r#"{
            "all_organism_elements": ["Homo sapiens", "Mus musculus"],
            "all_organism_part_elements": ["liver", "heart"]
        }"#,
    )
    .unwrap();

    let registry = OntologyRegistry::load(&path).unwrap();
    assert_eq!(registry.len(), 2);
    let parts = registry.terms_for("characteristics[organism part]").unwrap();
    assert!(parts.contains("liver"));
}

#[test]
fn loads_term_directory() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join("all_cell_type_elements.txt"),
        "# cell types\nhepatocyte\nneuron\n",
    )
    .unwrap();
    fs::write(dir.path().join("all_depletion_elements.txt"), "").unwrap();
    fs::write(dir.path().join("README.md"), "not a term set").unwrap();
    fs::write(dir.path().join("notes.txt"), "ignored").unwrap();

    let registry = OntologyRegistry::load(dir.path()).unwrap();
    assert_eq!(
        registry.keys().collect::<Vec<_>>(),
        vec!["all_cell_type_elements", "all_depletion_elements"]
    );
    assert_eq!(
        registry.terms_for("characteristics[cell type]").unwrap().len(),
        2
    );
    assert!(registry.terms_for("comment[depletion]").unwrap().is_empty());
}

#[test]
fn missing_path_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    let err = OntologyRegistry::load(&dir.path().join("absent.json")).unwrap_err();
    assert!(matches!(err, StandardsError::PathNotFound { .. }));
}

#[test]
fn malformed_json_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("terms.json");
    fs::write(&path, "{ not json").unwrap();
    let err = OntologyRegistry::load(&path).unwrap_err();
    assert!(matches!(err, StandardsError::JsonParse { .. }));
    assert!(err.to_string().contains("terms.json"));
}

#[test]
fn every_ontology_column_has_a_key() {
    for column in TEMPLATE_COLUMNS {
        if category_of(column).uses_ontology() {
            let registry = OntologyRegistry::new();
            let err = registry.terms_for(column).unwrap_err();
            assert!(err.is_not_found(), "{column}");
        }
    }
}

proptest! {
    #[test]
    fn year_ranges_are_valid(from in 0u32..150, to in 0u32..150) {
        let value = format!("{from}Y-{to}Y");
        prop_assert!(SdrfAgeFormat.is_valid(&value));
    }

    #[test]
    fn bare_numbers_are_invalid(n in 0u64..1_000_000) {
        prop_assert!(!SdrfAgeFormat.is_valid(&n.to_string()));
    }
}
