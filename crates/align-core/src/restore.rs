//! Text view of matched columns and restoration of their source type.
//!
//! Aligned columns pass through text: missing cells become the empty string.
//! Restoring parses that text back into the source column's dtype. A value
//! that does not parse is an error; there is no fallback to text.

use polars::prelude::{Column, DataType, IntoColumn, NamedFrom, PlSmallStr, Series, StringChunked};

use align_common::{any_to_string, parse_bool, parse_f64, parse_i64};

use crate::error::{AlignError, Result};

/// Renders `column` as a `String` column named `name`, missing cells as "".
pub fn text_view(column: &Column, name: &str) -> Result<Column> {
    let values: Vec<String> = if column.dtype() == &DataType::String {
        column
            .str()?
            .into_iter()
            .map(|cell| cell.unwrap_or_default().to_string())
            .collect()
    } else {
        let mut values = Vec::with_capacity(column.len());
        for idx in 0..column.len() {
            values.push(any_to_string(column.get(idx)?));
        }
        values
    };

    Ok(Series::new(name.into(), values).into_column())
}

/// Re-types a text column to `target`.
///
/// `String` targets keep the text. Integer, float and boolean targets parse
/// every non-empty cell strictly, empty cells become null. Nested and object
/// targets are refused. Other targets go through a strict Polars cast, and a
/// non-empty cell that comes out null fails the restore.
pub fn restore_type(text: &Column, target: &DataType) -> Result<Column> {
    let name = text.name().clone();
    let cells = text.str()?;

    let column = match target {
        DataType::String => return Ok(text.clone()),
        DataType::Int64 => {
            Series::new(name.clone(), parse_cells(&name, cells, target, parse_i64)?).into_column()
        }
        DataType::Int32 => {
            let values = parse_cells(&name, cells, target, |s| {
                parse_i64(s).and_then(|v| i32::try_from(v).ok())
            })?;
            Series::new(name.clone(), values).into_column()
        }
        DataType::Float64 => {
            Series::new(name.clone(), parse_cells(&name, cells, target, parse_f64)?).into_column()
        }
        DataType::Float32 => {
            let values = parse_cells(&name, cells, target, |s| parse_f64(s).map(|v| v as f32))?;
            Series::new(name.clone(), values).into_column()
        }
        DataType::Boolean => {
            Series::new(name.clone(), parse_cells(&name, cells, target, parse_bool)?).into_column()
        }
        other if other.is_nested() || other.is_object() => {
            return Err(AlignError::TypeCast {
                column: name.to_string(),
                dtype: other.to_string(),
                message: "no text representation to restore from".to_string(),
            });
        }
        other => cast_cells(&name, cells, other)?,
    };

    Ok(column)
}

/// Strict Polars cast of the non-empty cells. A cell that was present before
/// the cast but is null after it did not convert.
fn cast_cells(name: &PlSmallStr, cells: &StringChunked, target: &DataType) -> Result<Column> {
    let nullable: Vec<Option<&str>> = cells
        .into_iter()
        .map(|cell| cell.filter(|s| !s.is_empty()))
        .collect();
    let cast = Series::new(name.clone(), nullable.clone())
        .into_column()
        .strict_cast(target)
        .map_err(|e| AlignError::TypeCast {
            column: name.to_string(),
            dtype: target.to_string(),
            message: e.to_string(),
        })?;

    for (idx, value) in nullable.iter().enumerate() {
        if let Some(value) = value
            && cast.get(idx)?.is_null()
        {
            return Err(AlignError::TypeRestore {
                column: name.to_string(),
                dtype: target.to_string(),
                row: idx + 1,
                value: (*value).to_string(),
            });
        }
    }

    Ok(cast)
}

fn parse_cells<T>(
    name: &PlSmallStr,
    cells: &StringChunked,
    target: &DataType,
    parse: impl Fn(&str) -> Option<T>,
) -> Result<Vec<Option<T>>> {
    cells
        .into_iter()
        .enumerate()
        .map(|(idx, cell)| match cell {
            None | Some("") => Ok(None),
            Some(value) => parse(value).map(Some).ok_or_else(|| AlignError::TypeRestore {
                column: name.to_string(),
                dtype: target.to_string(),
                row: idx + 1,
                value: value.to_string(),
            }),
        })
        .collect()
}
