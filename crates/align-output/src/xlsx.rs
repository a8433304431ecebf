//! Worksheet writing with rust_xlsxwriter.

use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};
use polars::prelude::{AnyValue, Column, DataFrame};
use rust_xlsxwriter::{Workbook, Worksheet};
use tracing::{debug, info};

use align_common::any_to_string;

use crate::common::{ensure_output_dir, unmatched_frame};
use crate::types::OutputPaths;
use crate::{ALIGNED_FILE, ALIGNED_SHEET, NOT_FOUND_FILE, NOT_FOUND_SHEET};

/// Renders `df` as an in-memory XLSX workbook with one sheet.
///
/// Numbers and booleans keep their cell type; missing values are left blank.
pub fn export_table(df: &DataFrame, sheet_name: &str) -> Result<Vec<u8>> {
    let mut workbook = build_workbook(df, sheet_name)?;
    workbook
        .save_to_buffer()
        .with_context(|| format!("serialize sheet {sheet_name}"))
}

/// Writes `df` as a single-sheet XLSX file at `path`.
pub fn write_table(path: &Path, df: &DataFrame, sheet_name: &str) -> Result<()> {
    let bytes = export_table(df, sheet_name)?;
    std::fs::write(path, bytes).with_context(|| format!("write {}", path.display()))?;
    debug!(path = %path.display(), rows = df.height(), "xlsx written");
    Ok(())
}

/// Writes the artifacts of one aligned request into `output_dir`.
pub fn write_outputs(
    output_dir: &Path,
    table: &DataFrame,
    unmatched: &[String],
) -> Result<OutputPaths> {
    let start = Instant::now();
    ensure_output_dir(output_dir)?;

    let aligned = output_dir.join(ALIGNED_FILE);
    write_table(&aligned, table, ALIGNED_SHEET)?;

    let not_found = if unmatched.is_empty() {
        None
    } else {
        let path = output_dir.join(NOT_FOUND_FILE);
        write_table(&path, &unmatched_frame(unmatched)?, NOT_FOUND_SHEET)?;
        Some(path)
    };

    info!(
        output_dir = %output_dir.display(),
        unmatched = unmatched.len(),
        duration_ms = start.elapsed().as_millis(),
        "outputs written"
    );

    Ok(OutputPaths { aligned, not_found })
}

fn build_workbook(df: &DataFrame, sheet_name: &str) -> Result<Workbook> {
    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();
    sheet
        .set_name(sheet_name)
        .with_context(|| format!("invalid sheet name {sheet_name:?}"))?;

    for (col_idx, column) in df.get_columns().iter().enumerate() {
        let col = u16::try_from(col_idx).context("too many columns for a worksheet")?;
        sheet
            .write_string(0, col, column.name().as_str())
            .with_context(|| format!("write header {}", column.name()))?;
        write_column(sheet, col, column)?;
    }

    Ok(workbook)
}

fn write_column(sheet: &mut Worksheet, col: u16, column: &Column) -> Result<()> {
    for idx in 0..column.len() {
        let row = u32::try_from(idx + 1).context("too many rows for a worksheet")?;
        let value = column.get(idx)?;
        let written = match value {
            AnyValue::Null => continue,
            AnyValue::Boolean(b) => sheet.write_boolean(row, col, b),
            AnyValue::Int8(v) => sheet.write_number(row, col, v),
            AnyValue::Int16(v) => sheet.write_number(row, col, v),
            AnyValue::Int32(v) => sheet.write_number(row, col, v),
            AnyValue::UInt8(v) => sheet.write_number(row, col, v),
            AnyValue::UInt16(v) => sheet.write_number(row, col, v),
            AnyValue::UInt32(v) => sheet.write_number(row, col, v),
            AnyValue::Int64(v) => sheet.write_number(row, col, v as f64),
            AnyValue::UInt64(v) => sheet.write_number(row, col, v as f64),
            AnyValue::Float32(v) => sheet.write_number(row, col, v),
            AnyValue::Float64(v) => sheet.write_number(row, col, v),
            AnyValue::String(s) => sheet.write_string(row, col, s),
            other => sheet.write_string(row, col, any_to_string(other)),
        };
        written.with_context(|| format!("write {} row {}", column.name(), idx + 1))?;
    }
    Ok(())
}
