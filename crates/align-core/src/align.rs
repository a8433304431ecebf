//! Table alignment onto the canonical header set.

use std::collections::HashMap;
use std::time::Instant;

use polars::prelude::{Column, DataFrame, IntoColumn, NamedFrom, Series};
use tracing::{debug, info, warn};

use align_model::{ColumnMatch, HeaderMapping, ReferenceHeaders};

use crate::error::Result;
use crate::resolve::resolve_match;
use crate::restore::{restore_type, text_view};

/// Result of aligning one input table.
#[derive(Debug, Clone)]
pub struct Alignment {
    /// Columns are exactly the reference headers, in reference order.
    pub table: DataFrame,
    /// Input columns that matched no canonical header or synonym, input order.
    pub unmatched: Vec<String>,
    /// One entry per resolved input column, input order.
    pub matches: Vec<ColumnMatch>,
}

impl Alignment {
    /// Canonical headers that received no input column.
    pub fn missing_headers(&self) -> Vec<String> {
        self.table
            .get_column_names()
            .into_iter()
            .filter(|name| !self.matches.iter().any(|m| m.canonical == name.as_str()))
            .map(|name| name.to_string())
            .collect()
    }

    pub fn has_unmatched(&self) -> bool {
        !self.unmatched.is_empty()
    }
}

/// Aligns `input` onto `headers` using `mapping`.
///
/// Each input column is resolved by name. A resolved column is copied
/// row-for-row into its canonical column, then re-typed to its source dtype;
/// a failed re-type fails the whole call. When two input columns resolve to
/// the same header the later one wins. Headers with no input column are
/// filled with empty strings for every input row.
pub fn align(
    input: &DataFrame,
    headers: &ReferenceHeaders,
    mapping: &HeaderMapping,
) -> Result<Alignment> {
    let start = Instant::now();
    let height = input.height();

    let mut sources: HashMap<String, &Column> = HashMap::new();
    let mut matches = Vec::new();
    let mut unmatched = Vec::new();

    for column in input.get_columns() {
        let name = column.name().as_str();
        let Some(found) = resolve_match(name, mapping) else {
            debug!(column = %name, "no canonical header for column");
            unmatched.push(name.to_string());
            continue;
        };

        debug!(
            column = %name,
            canonical = %found.canonical,
            kind = %found.kind,
            renamed = found.is_renamed(),
            "column resolved"
        );

        if let Some(previous) = sources.insert(found.canonical.clone(), column) {
            warn!(
                canonical = %found.canonical,
                replaced = %previous.name(),
                column = %name,
                "several input columns resolve to the same header, later column wins"
            );
        }
        matches.push(found);
    }

    let mut columns = Vec::with_capacity(headers.len());
    for header in headers {
        let column = match sources.get(header.as_str()) {
            Some(source) => {
                let text = text_view(source, header)?;
                restore_type(&text, source.dtype())?
            }
            None => Series::new(header.as_str().into(), vec![""; height]).into_column(),
        };
        columns.push(column);
    }

    let table = DataFrame::new(columns)?;

    info!(
        rows = table.height(),
        headers = headers.len(),
        matched = matches.len(),
        unmatched = unmatched.len(),
        duration_ms = start.elapsed().as_millis(),
        "alignment complete"
    );

    Ok(Alignment {
        table,
        unmatched,
        matches,
    })
}
