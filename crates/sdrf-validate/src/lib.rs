//! Value validation for SDRF column matching.
//!
//! Given a target column and the distinct non-missing values of the local
//! column proposed for it, [`ValueValidator`] dispatches on the target's
//! [`ColumnCategory`](sdrf_standards::ColumnCategory) and returns a
//! [`Diagnostic`]:
//!
//! | Category | Rule |
//! |---|---|
//! | Passthrough | always accepted |
//! | Age | every value follows the SDRF age notation |
//! | Sex | every value is `M`, `F` or `NA` |
//! | Organism | synonyms normalized, then as Ontology |
//! | Ontology | every value is a term of the column's term set |
//!
//! Validation never fails; every input maps to exactly one diagnostic.

pub mod diagnostic;
pub mod validator;

pub use diagnostic::{Diagnostic, NoticeKind, UnsupportedReason};
pub use validator::{SEX_VALUES, ValueValidator};
