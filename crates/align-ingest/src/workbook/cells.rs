//! Cell rendering and per-column type inference for workbook sheets.

use calamine::Data;
use chrono::NaiveDateTime;
use polars::prelude::{Column, IntoColumn, NamedFrom, Series};

use align_common::format_numeric;

use crate::reader::CellTyping;

/// Text layout for date/time cells, matching how spreadsheet tools print them.
const DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Renders a cell as text. Blank cells and empty strings are missing.
pub(crate) fn cell_text(cell: Option<&Data>) -> Option<String> {
    match cell? {
        Data::Empty => None,
        Data::String(s) if s.is_empty() => None,
        Data::String(s) | Data::DateTimeIso(s) | Data::DurationIso(s) => Some(s.clone()),
        Data::Int(v) => Some(v.to_string()),
        Data::Float(v) => Some(format_numeric(*v)),
        Data::Bool(b) => Some(if *b { "True" } else { "False" }.to_string()),
        Data::DateTime(dt) => Some(
            dt.as_datetime()
                .map(format_datetime)
                .unwrap_or_else(|| format_numeric(dt.as_f64())),
        ),
        Data::Error(err) => Some(err.to_string()),
    }
}

fn format_datetime(value: NaiveDateTime) -> String {
    value.format(DATETIME_FORMAT).to_string()
}

/// 2^63; `i64` holds every whole float strictly below this in magnitude.
const I64_BOUND: f64 = 9_223_372_036_854_775_808.0;

/// Whole-number floats that convert to `i64` without saturating.
fn fits_i64(v: f64) -> bool {
    v.is_finite() && v.fract() == 0.0 && v.abs() < I64_BOUND
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ColumnKind {
    Int,
    Float,
    Bool,
    Text,
}

fn is_missing(cell: Option<&Data>) -> bool {
    match cell {
        None | Some(Data::Empty) => true,
        Some(Data::String(s)) => s.is_empty(),
        Some(_) => false,
    }
}

/// Picks the narrowest type that holds every non-missing cell.
fn infer_kind(cells: &[Option<&Data>]) -> ColumnKind {
    let mut seen = false;
    let mut all_integral = true;
    let mut all_numeric = true;
    let mut all_bool = true;

    for cell in cells.iter().copied().filter(|c| !is_missing(*c)) {
        seen = true;
        match cell {
            Some(Data::Int(_)) => all_bool = false,
            Some(Data::Float(v)) => {
                all_bool = false;
                if !fits_i64(*v) {
                    all_integral = false;
                }
            }
            Some(Data::Bool(_)) => {
                all_numeric = false;
                all_integral = false;
            }
            _ => return ColumnKind::Text,
        }
    }

    match (seen, all_numeric, all_integral, all_bool) {
        (false, ..) => ColumnKind::Text,
        (true, true, true, _) => ColumnKind::Int,
        (true, true, false, _) => ColumnKind::Float,
        (true, false, _, true) => ColumnKind::Bool,
        _ => ColumnKind::Text,
    }
}

/// Builds one DataFrame column from the cells below a header.
pub(crate) fn build_column(name: &str, cells: &[Option<&Data>], typing: CellTyping) -> Column {
    let kind = match typing {
        CellTyping::Text => ColumnKind::Text,
        CellTyping::Infer => infer_kind(cells),
    };

    let series = match kind {
        ColumnKind::Int => {
            let values: Vec<Option<i64>> = cells
                .iter()
                .map(|cell| match cell {
                    Some(Data::Int(v)) => Some(*v),
                    Some(Data::Float(v)) => Some(*v as i64),
                    _ => None,
                })
                .collect();
            Series::new(name.into(), values)
        }
        ColumnKind::Float => {
            let values: Vec<Option<f64>> = cells
                .iter()
                .map(|cell| match cell {
                    Some(Data::Int(v)) => Some(*v as f64),
                    Some(Data::Float(v)) => Some(*v),
                    _ => None,
                })
                .collect();
            Series::new(name.into(), values)
        }
        ColumnKind::Bool => {
            let values: Vec<Option<bool>> = cells
                .iter()
                .map(|cell| match cell {
                    Some(Data::Bool(b)) => Some(*b),
                    _ => None,
                })
                .collect();
            Series::new(name.into(), values)
        }
        ColumnKind::Text => {
            let values: Vec<Option<String>> = cells.iter().map(|cell| cell_text(*cell)).collect();
            Series::new(name.into(), values)
        }
    };

    series.into_column()
}
