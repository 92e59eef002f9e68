//! Shared utilities for the SDRF mapper crates.
//!
//! Tables travel between crates as Polars `DataFrame`s whose cells are text or
//! missing. This crate holds the helpers that read cells back out of them.

pub mod polars;

pub use polars::{
    any_to_string, cell_text, column_values, distinct_present, format_numeric, is_missing,
    text_frame,
};
