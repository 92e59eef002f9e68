//! SDRF-Proteomics standards: target schema, categories and vocabularies.
//!
//! This crate provides:
//!
//! - **Target schema** ([`schema`]): the canonical SDRF column list and the
//!   bracketed-qualifier conventions used to name columns
//! - **Column categories** ([`category`]): which validation strategy applies
//!   to each target column
//! - **Ontology term sets** ([`ontology`]): the controlled vocabulary for each
//!   ontology-backed column, loaded from JSON or a directory of term files
//! - **Synonyms** ([`synonyms`]): organism alias normalization
//! - **Age format** ([`age`]): the SDRF age notation checker
//!
//! # Example
//!
//! ```rust,ignore
//! use sdrf_standards::{ColumnCategory, OntologyRegistry, category_of};
//!
//! let registry = OntologyRegistry::load("ontology/terms.json")?;
//! assert_eq!(category_of("characteristics[organism]"), ColumnCategory::Organism);
//! let terms = registry.terms_for("characteristics[organism part]")?;
//! ```

pub mod age;
pub mod category;
pub mod error;
pub mod ontology;
pub mod paths;
pub mod schema;
pub mod synonyms;

// Error types
pub use error::{Result, StandardsError};

// Categories and schema
pub use category::{ColumnCategory, category_of};
pub use schema::{
    TEMPLATE_COLUMNS, follows_ontology_convention, is_template_column, ontology_key, qualifier,
};

// Vocabularies
pub use age::{AgeFormat, SdrfAgeFormat};
pub use ontology::{OntologyRegistry, TermSet};
pub use paths::{ONTOLOGY_ENV_VAR, resolve_ontology_path};
pub use synonyms::{ORGANISM_ALIASES, SynonymNormalizer};
