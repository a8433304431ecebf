//! Format dispatch and size checks shared by every table load.

use std::path::Path;
use std::time::Instant;

use polars::prelude::DataFrame;

use crate::csv::read_csv_table;
use crate::error::{IngestError, Result};
use crate::format::SpreadsheetFormat;
use crate::workbook::read_workbook_table;

/// Maximum file size for table loading (500 MB default).
pub const MAX_INPUT_FILE_SIZE: u64 = 500 * 1024 * 1024;

/// How cell values are typed during ingestion.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CellTyping {
    /// Every cell is read as text; blank cells become null.
    #[default]
    Text,
    /// Numeric and boolean columns keep their type.
    Infer,
}

/// Check file size before loading.
pub fn check_file_size(path: &Path) -> Result<()> {
    check_file_size_with_limit(path, MAX_INPUT_FILE_SIZE)
}

/// Check file size against a custom limit.
pub fn check_file_size_with_limit(path: &Path, max_size: u64) -> Result<()> {
    let metadata = std::fs::metadata(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            IngestError::FileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            IngestError::FileRead {
                path: path.to_path_buf(),
                source: e,
            }
        }
    })?;

    if metadata.len() > max_size {
        return Err(IngestError::FileTooLarge {
            path: path.to_path_buf(),
            size: metadata.len(),
            max_size,
        });
    }

    Ok(())
}

/// Reads the first sheet of a spreadsheet (or a CSV file) into a DataFrame.
///
/// The header row is row 1. The format is taken from the file extension.
pub fn read_table(path: &Path, typing: CellTyping) -> Result<DataFrame> {
    let format = SpreadsheetFormat::from_path(path)?;
    check_file_size(path)?;

    let start = Instant::now();
    let df = if format.is_workbook() {
        read_workbook_table(path, typing)?
    } else {
        read_csv_table(path, typing)?
    };

    tracing::debug!(
        path = %path.display(),
        format = format.extension(),
        rows = df.height(),
        columns = df.width(),
        duration_ms = start.elapsed().as_millis(),
        "table loaded"
    );

    Ok(df)
}

/// Reads a reference header file. Reference cells are always read as text.
pub fn read_reference_table(path: &Path) -> Result<DataFrame> {
    read_table(path, CellTyping::Text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_check_file_size_missing_file() {
        let result = check_file_size(Path::new("/definitely/not/here.xlsx"));
        assert!(matches!(result, Err(IngestError::FileNotFound { .. })));
    }

    #[test]
    fn test_check_file_size_with_limit() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "Name,Phone\nAnn,555\n").unwrap();

        assert!(check_file_size_with_limit(file.path(), 1024).is_ok());
        let result = check_file_size_with_limit(file.path(), 4);
        assert!(matches!(result, Err(IngestError::FileTooLarge { .. })));
    }

    #[test]
    fn test_read_table_rejects_unsupported_extension_before_reading() {
        let result = read_table(Path::new("/missing/input.docx"), CellTyping::Text);
        assert!(matches!(result, Err(IngestError::UnsupportedFormat { .. })));
    }
}
