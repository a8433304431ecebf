//! Spreadsheet ingestion for header alignment.
//!
//! This crate loads the first sheet of an uploaded spreadsheet (or a CSV
//! file) into a Polars DataFrame, and locates the reference header file that
//! belongs to an upload.
//!
//! # Features
//!
//! - **Workbook Loading**: xlsx, xlsm, xlsb, xls and ods through `calamine`
//! - **CSV Loading**: Polars CSV reader with explicit schema handling
//! - **Cell Typing**: all-text ingestion (the default) or typed inference
//! - **Reference Discovery**: `<prefix>-header.<ext>` next to a reference directory
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use align_ingest::{CellTyping, locate_reference, read_reference_table, read_table};
//!
//! let input = Path::new("uploads/acme-2024-q1.xlsx");
//! let reference = locate_reference(input, Path::new("AddtlFiles"), "xlsx")?;
//!
//! let reference_df = read_reference_table(&reference)?;
//! let input_df = read_table(input, CellTyping::Text)?;
//! ```

mod csv;
mod error;
mod format;
mod header;
mod reader;
mod reference;
mod workbook;

// === Error Types ===
pub use error::{IngestError, Result};

// === Formats ===
pub use format::{SUPPORTED_EXTENSIONS, SpreadsheetFormat};

// === Table Reading ===
pub use reader::{
    CellTyping, MAX_INPUT_FILE_SIZE, check_file_size, check_file_size_with_limit,
    read_reference_table, read_table,
};

// === CSV / Workbook ===
pub use csv::{read_csv_table, validate_encoding};
pub use header::unique_column_names;
pub use workbook::read_workbook_table;

// === Reference Discovery ===
pub use reference::{
    DEFAULT_REFERENCE_EXTENSION, REFERENCE_SUFFIX, locate_reference, reference_file_name,
    reference_path_for,
};
