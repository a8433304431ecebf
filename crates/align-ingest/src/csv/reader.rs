//! CSV file reading through the Polars CSV reader.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use polars::prelude::*;

use crate::error::{IngestError, Result};
use crate::header::unique_column_names;
use crate::reader::CellTyping;

/// Rows sampled for schema inference in [`CellTyping::Infer`] mode.
const INFER_SCHEMA_ROWS: usize = 100;

/// Detect encoding and validate it's supported (UTF-8 only).
///
/// Checks for UTF-16 BOM markers which are not supported.
pub fn validate_encoding(path: &Path) -> Result<()> {
    let mut file = File::open(path).map_err(|e| {
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

    let mut buffer = [0u8; 4];
    let bytes_read = file.read(&mut buffer).map_err(|e| IngestError::FileRead {
        path: path.to_path_buf(),
        source: e,
    })?;

    if bytes_read >= 2 {
        if buffer[0..2] == [0xFF, 0xFE] {
            return Err(IngestError::UnsupportedEncoding {
                path: path.to_path_buf(),
                encoding: "UTF-16 LE",
            });
        }
        if buffer[0..2] == [0xFE, 0xFF] {
            return Err(IngestError::UnsupportedEncoding {
                path: path.to_path_buf(),
                encoding: "UTF-16 BE",
            });
        }
    }

    Ok(())
}

/// Reads a CSV file into a Polars DataFrame. Row 1 holds the column names.
///
/// With [`CellTyping::Text`] every column is read as `String`; empty fields
/// are null either way. Column names follow the same rules as workbook
/// headers: blank names become `Unnamed: <index>` and repeats get `.1`, `.2`
/// suffixes.
pub fn read_csv_table(path: &Path, typing: CellTyping) -> Result<DataFrame> {
    validate_encoding(path)?;

    let infer_rows = match typing {
        CellTyping::Text => 0,
        CellTyping::Infer => INFER_SCHEMA_ROWS,
    };

    let names = read_header_names(path)?;
    let mut df = read_with_options(
        path,
        CsvReadOptions::default()
            .with_has_header(true)
            .with_infer_schema_length(Some(infer_rows)),
    )?;

    if names.len() != df.width() {
        return Err(IngestError::CsvParse {
            path: path.to_path_buf(),
            message: format!(
                "header has {} fields but data has {} columns",
                names.len(),
                df.width()
            ),
        });
    }
    df.set_column_names(names)?;

    Ok(df)
}

/// Reads row 1 as plain text and turns it into unique column names.
fn read_header_names(path: &Path) -> Result<Vec<String>> {
    let header = read_with_options(
        path,
        CsvReadOptions::default()
            .with_has_header(false)
            .with_n_rows(Some(1))
            .with_infer_schema_length(Some(0)),
    )?;

    let mut raw = Vec::with_capacity(header.width());
    for column in header.get_columns() {
        raw.push(column.str()?.get(0).map(str::to_string));
    }
    Ok(unique_column_names(&raw))
}

fn read_with_options(path: &Path, options: CsvReadOptions) -> Result<DataFrame> {
    let csv_error = |e: PolarsError| IngestError::CsvParse {
        path: path.to_path_buf(),
        message: e.to_string(),
    };
    options
        .try_into_reader_with_file_path(Some(path.to_path_buf()))
        .map_err(csv_error)?
        .finish()
        .map_err(csv_error)
}
