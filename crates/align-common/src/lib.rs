//! Shared utilities for header-align crates.
//!
//! Polars `AnyValue` helpers used by ingestion, alignment and export.

pub mod value;

pub use value::{any_to_string, format_numeric, parse_bool, parse_f64, parse_i64};
