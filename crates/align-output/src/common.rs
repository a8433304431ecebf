//! Shared helpers for output generation.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use polars::prelude::{DataFrame, IntoColumn, NamedFrom, Series};

use crate::NOT_FOUND_SHEET;

/// Ensure an output directory exists, creating parents as needed.
pub fn ensure_output_dir(dir: &Path) -> Result<()> {
    if !dir.as_os_str().is_empty() {
        fs::create_dir_all(dir).with_context(|| format!("create {}", dir.display()))?;
    }
    Ok(())
}

/// Single-column table listing unmatched input column names.
pub fn unmatched_frame(unmatched: &[String]) -> Result<DataFrame> {
    let column = Series::new(NOT_FOUND_SHEET.into(), unmatched.to_vec()).into_column();
    DataFrame::new(vec![column]).context("build unmatched column table")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unmatched_frame_keeps_order() {
        let df = unmatched_frame(&["Phone".to_string(), "Fax".to_string()]).unwrap();
        let names = df.column(NOT_FOUND_SHEET).unwrap().str().unwrap();
        assert_eq!(df.height(), 2);
        assert_eq!(names.get(0), Some("Phone"));
        assert_eq!(names.get(1), Some("Fax"));
    }

    #[test]
    fn ensure_output_dir_creates_nested() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("a").join("b");
        ensure_output_dir(&nested).unwrap();
        assert!(nested.is_dir());
    }
}
