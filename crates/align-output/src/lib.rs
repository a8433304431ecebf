//! XLSX export for aligned tables.
//!
//! Every table is written as a single worksheet: a header row followed by one
//! row per record, without styling. [`write_outputs`] produces the two files a
//! request yields, the aligned table and (when any column went unmatched) the
//! list of unmatched column names.

mod common;
mod types;
mod xlsx;

pub use common::{ensure_output_dir, unmatched_frame};
pub use types::OutputPaths;
pub use xlsx::{export_table, write_outputs, write_table};

/// Worksheet holding the aligned table.
pub const ALIGNED_SHEET: &str = "Aligned Data";

/// Worksheet and column name for the unmatched column list.
pub const NOT_FOUND_SHEET: &str = "Not Found Columns";

/// File name of the aligned table export.
pub const ALIGNED_FILE: &str = "aligned_file.xlsx";

/// File name of the unmatched column export.
pub const NOT_FOUND_FILE: &str = "not_found_columns.xlsx";
