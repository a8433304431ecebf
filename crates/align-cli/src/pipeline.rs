//! Request processing with explicit stages.
//!
//! One request runs these stages in order:
//! 1. **Locate**: find the reference file for the upload (or take the override)
//! 2. **Mapping**: load the reference table and build the header mapping
//! 3. **Ingest**: load the upload's first sheet
//! 4. **Align**: project the upload onto the canonical headers
//! 5. **Export**: write the aligned workbook and the unmatched column list
//!
//! A stage failure stops the request; nothing is exported after a failure.

use std::path::{Path, PathBuf};
use std::time::Instant;

use polars::prelude::DataFrame;
use thiserror::Error;
use tracing::{info, info_span};

use align_core::{AlignError, Alignment, align, build_mapping};
use align_ingest::{
    CellTyping, DEFAULT_REFERENCE_EXTENSION, IngestError, SpreadsheetFormat, locate_reference,
    read_reference_table, read_table,
};
use align_model::HeaderMapping;
use align_output::{OutputPaths, write_outputs};

/// Environment variable naming the reference directory.
pub const REFERENCE_DIR_ENV: &str = "HEADER_ALIGN_REFERENCE_DIR";

/// Reference directory used when neither a flag nor the environment names one.
pub const DEFAULT_REFERENCE_DIR: &str = "AddtlFiles";

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Errors that end a request.
#[derive(Debug, Error)]
pub enum RequestError {
    #[error("reference file not found at {path} (pass --reference to supply one)")]
    ReferenceNotFound { path: PathBuf },

    #[error("failed to read reference file {path}")]
    ReferenceRead {
        path: PathBuf,
        #[source]
        source: BoxError,
    },

    #[error("unsupported input file type '{extension}' for {path}")]
    UnsupportedInputFormat { path: PathBuf, extension: String },

    #[error("failed to read input file {path}")]
    InputRead {
        path: PathBuf,
        #[source]
        source: IngestError,
    },

    #[error("type restoration failed")]
    TypeRestore(#[source] AlignError),

    #[error("alignment failed")]
    Align(#[source] AlignError),

    #[error("failed to write outputs to {path}")]
    Export {
        path: PathBuf,
        #[source]
        source: BoxError,
    },
}

impl From<AlignError> for RequestError {
    fn from(err: AlignError) -> Self {
        if err.is_type_restore() {
            Self::TypeRestore(err)
        } else {
            Self::Align(err)
        }
    }
}

/// Everything one `align` request needs.
#[derive(Debug, Clone)]
pub struct AlignRequest {
    pub input: PathBuf,
    /// Explicit reference file; skips discovery when set.
    pub reference: Option<PathBuf>,
    pub reference_dir: PathBuf,
    pub reference_ext: String,
    /// Defaults to the input's directory.
    pub output_dir: Option<PathBuf>,
    pub typing: CellTyping,
    pub dry_run: bool,
}

impl AlignRequest {
    pub fn new(input: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            reference: None,
            reference_dir: PathBuf::from(DEFAULT_REFERENCE_DIR),
            reference_ext: DEFAULT_REFERENCE_EXTENSION.to_string(),
            output_dir: None,
            typing: CellTyping::Text,
            dry_run: false,
        }
    }

    #[must_use]
    pub fn with_reference(mut self, reference: Option<PathBuf>) -> Self {
        self.reference = reference;
        self
    }

    #[must_use]
    pub fn with_reference_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.reference_dir = dir.into();
        self
    }

    #[must_use]
    pub fn with_reference_ext(mut self, extension: impl Into<String>) -> Self {
        self.reference_ext = extension.into();
        self
    }

    #[must_use]
    pub fn with_output_dir(mut self, dir: Option<PathBuf>) -> Self {
        self.output_dir = dir;
        self
    }

    #[must_use]
    pub fn with_typing(mut self, typing: CellTyping) -> Self {
        self.typing = typing;
        self
    }

    #[must_use]
    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Directory the outputs go to.
    pub fn resolved_output_dir(&self) -> PathBuf {
        match &self.output_dir {
            Some(dir) => dir.clone(),
            None => default_output_dir(&self.input),
        }
    }
}

/// Result of a completed request.
#[derive(Debug)]
pub struct RequestOutcome {
    pub input: PathBuf,
    pub reference: PathBuf,
    pub mapping: HeaderMapping,
    pub alignment: Alignment,
    /// `None` for dry runs.
    pub outputs: Option<OutputPaths>,
}

/// Runs every stage of one request.
pub fn run_request(request: &AlignRequest) -> Result<RequestOutcome, RequestError> {
    let request_span = info_span!("request", input = %request.input.display());
    let _request_guard = request_span.enter();
    let start = Instant::now();

    check_input_format(&request.input)?;

    let reference = info_span!("locate").in_scope(|| locate(request))?;
    let mapping = info_span!("mapping", reference = %reference.display())
        .in_scope(|| load_mapping(&reference))?;
    let input = info_span!("ingest").in_scope(|| load_input(&request.input, request.typing))?;
    let alignment = info_span!("align").in_scope(|| align_input(&input, &mapping))?;

    let outputs = if request.dry_run {
        info!("dry run, skipping export");
        None
    } else {
        let output_dir = request.resolved_output_dir();
        let paths = info_span!("export", output_dir = %output_dir.display())
            .in_scope(|| export(&output_dir, &alignment))?;
        Some(paths)
    };

    info!(
        duration_ms = start.elapsed().as_millis(),
        unmatched = alignment.unmatched.len(),
        "request complete"
    );

    Ok(RequestOutcome {
        input: request.input.clone(),
        reference,
        mapping,
        alignment,
        outputs,
    })
}

/// Rejects inputs whose extension no reader handles.
pub fn check_input_format(input: &Path) -> Result<SpreadsheetFormat, RequestError> {
    SpreadsheetFormat::from_path(input).map_err(|err| match err {
        IngestError::UnsupportedFormat {
            path, extension, ..
        } => RequestError::UnsupportedInputFormat { path, extension },
        other => RequestError::InputRead {
            path: input.to_path_buf(),
            source: other,
        },
    })
}

/// Resolves the reference file: the explicit override, else the derived path.
pub fn locate(request: &AlignRequest) -> Result<PathBuf, RequestError> {
    if let Some(path) = &request.reference {
        if path.is_file() {
            return Ok(path.clone());
        }
        return Err(RequestError::ReferenceNotFound { path: path.clone() });
    }

    locate_reference(&request.input, &request.reference_dir, &request.reference_ext).map_err(
        |err| match err {
            IngestError::ReferenceNotFound { path } => RequestError::ReferenceNotFound { path },
            other => RequestError::InputRead {
                path: request.input.clone(),
                source: other,
            },
        },
    )
}

/// Loads a reference file and builds its header mapping.
pub fn load_mapping(reference: &Path) -> Result<HeaderMapping, RequestError> {
    let reference_read = |source: BoxError| RequestError::ReferenceRead {
        path: reference.to_path_buf(),
        source,
    };
    let table = read_reference_table(reference).map_err(|e| reference_read(e.into()))?;
    build_mapping(&table).map_err(|e| reference_read(e.into()))
}

pub fn load_input(input: &Path, typing: CellTyping) -> Result<DataFrame, RequestError> {
    let df = read_table(input, typing).map_err(|source| RequestError::InputRead {
        path: input.to_path_buf(),
        source,
    })?;
    info!(rows = df.height(), columns = df.width(), "input loaded");
    Ok(df)
}

pub fn align_input(input: &DataFrame, mapping: &HeaderMapping) -> Result<Alignment, RequestError> {
    Ok(align(input, &mapping.reference_headers(), mapping)?)
}

pub fn export(output_dir: &Path, alignment: &Alignment) -> Result<OutputPaths, RequestError> {
    write_outputs(output_dir, &alignment.table, &alignment.unmatched).map_err(|err| {
        RequestError::Export {
            path: output_dir.to_path_buf(),
            source: err.into(),
        }
    })
}

/// The input's own directory, or `.` for a bare file name.
pub fn default_output_dir(input: &Path) -> PathBuf {
    match input.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn output_dir_defaults_to_input_directory() {
        assert_eq!(
            default_output_dir(Path::new("uploads/acme-jan.xlsx")),
            PathBuf::from("uploads")
        );
        assert_eq!(default_output_dir(Path::new("acme-jan.xlsx")), PathBuf::from("."));
    }

    #[test]
    fn explicit_output_dir_wins() {
        let request = AlignRequest::new("uploads/acme-jan.xlsx")
            .with_output_dir(Some(PathBuf::from("out")));
        assert_eq!(request.resolved_output_dir(), PathBuf::from("out"));
    }

    #[test]
    fn unsupported_extension_is_reported() {
        let err = check_input_format(Path::new("acme-jan.pdf")).unwrap_err();
        match err {
            RequestError::UnsupportedInputFormat { extension, .. } => assert_eq!(extension, "pdf"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn missing_override_is_reference_not_found() {
        let request = AlignRequest::new("acme-jan.xlsx")
            .with_reference(Some(PathBuf::from("/nonexistent/ref.xlsx")));
        assert!(matches!(
            locate(&request),
            Err(RequestError::ReferenceNotFound { .. })
        ));
    }

    #[test]
    fn align_errors_split_by_kind() {
        let restore = AlignError::TypeRestore {
            column: "Age".into(),
            dtype: "i64".into(),
            row: 1,
            value: "x".into(),
        };
        assert!(matches!(
            RequestError::from(restore),
            RequestError::TypeRestore(_)
        ));

        let other = AlignError::DataFrame {
            message: "boom".into(),
        };
        assert!(matches!(RequestError::from(other), RequestError::Align(_)));
    }
}
