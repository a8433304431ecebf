//! Reference header file discovery.
//!
//! A reference file is named after the upload: everything before the first
//! hyphen of the upload's file name, then `-header.<ext>`. An upload named
//! `acme-2024-q1.xlsx` looks for `acme-header.xlsx`. A name without a hyphen is
//! used whole, so `acme.xlsx` looks for `acme.xlsx-header.xlsx`.

use std::path::{Path, PathBuf};

use crate::error::{IngestError, Result};

/// Suffix appended to the upload prefix.
pub const REFERENCE_SUFFIX: &str = "-header";

/// Extension used for reference files unless configured otherwise.
pub const DEFAULT_REFERENCE_EXTENSION: &str = "xlsx";

/// Builds the reference file name for an uploaded file name.
pub fn reference_file_name(upload_name: &str, extension: &str) -> String {
    let prefix = upload_name.split('-').next().unwrap_or(upload_name);
    format!("{prefix}{REFERENCE_SUFFIX}.{extension}")
}

/// Derives the reference path for `input` inside `reference_dir`.
pub fn reference_path_for(input: &Path, reference_dir: &Path, extension: &str) -> Result<PathBuf> {
    let upload_name = input
        .file_name()
        .and_then(|name| name.to_str())
        .ok_or_else(|| IngestError::InvalidFileName {
            path: input.to_path_buf(),
        })?;
    Ok(reference_dir.join(reference_file_name(upload_name, extension)))
}

/// Finds the reference file for `input`.
///
/// Returns [`IngestError::ReferenceNotFound`] with the derived path when no
/// such file exists.
pub fn locate_reference(input: &Path, reference_dir: &Path, extension: &str) -> Result<PathBuf> {
    let path = reference_path_for(input, reference_dir, extension)?;
    if path.is_file() {
        tracing::debug!(path = %path.display(), "reference file found");
        Ok(path)
    } else {
        Err(IngestError::ReferenceNotFound { path })
    }
}
