//! First-sheet workbook loading through `calamine`.

use std::path::Path;

use calamine::{Data, Reader, open_workbook_auto};
use polars::prelude::DataFrame;

use crate::error::{IngestError, Result};
use crate::header::unique_column_names;
use crate::reader::CellTyping;

use super::cells::{build_column, cell_text};

/// Reads the first worksheet of a workbook into a DataFrame.
///
/// The first row of the sheet's used range holds the column names; every
/// later row is data. Leading blank rows are not part of the used range and
/// are skipped. Leading blank columns are kept: they come back as all-null
/// `Unnamed: <index>` columns, with `<index>` counted from column A.
pub fn read_workbook_table(path: &Path, typing: CellTyping) -> Result<DataFrame> {
    let mut workbook = open_workbook_auto(path).map_err(|e| IngestError::Workbook {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| IngestError::NoWorksheet {
            path: path.to_path_buf(),
        })?
        .map_err(|e| IngestError::Workbook {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

    let mut rows = range.rows();
    let Some(header_row) = rows.next() else {
        tracing::debug!(path = %path.display(), "first worksheet is empty");
        return Ok(DataFrame::empty());
    };

    // The used range starts at the first non-empty column.
    let offset = range.start().map_or(0, |(_, col)| col as usize);
    let raw_header: Vec<Option<String>> = std::iter::repeat_n(None, offset)
        .chain(header_row.iter().map(|c| cell_text(Some(c))))
        .collect();
    let names = unique_column_names(&raw_header);
    let data_rows: Vec<&[Data]> = rows.collect();

    let columns = names
        .iter()
        .enumerate()
        .map(|(idx, name)| {
            let cells: Vec<Option<&Data>> = data_rows
                .iter()
                .map(|row| idx.checked_sub(offset).and_then(|i| row.get(i)))
                .collect();
            build_column(name, &cells, typing)
        })
        .collect();

    Ok(DataFrame::new(columns)?)
}
