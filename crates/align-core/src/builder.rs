//! Header mapping construction from a reference table.

use polars::prelude::{Column, DataFrame};
use tracing::{debug, info, warn};

use align_common::any_to_string;
use align_model::HeaderMapping;

use crate::error::Result;

/// Builds a [`HeaderMapping`] from a reference table.
///
/// Every reference column is one header group; its own name is ignored. The
/// column's non-missing values, top to bottom, are the group: the first is
/// the canonical header and the rest are synonyms. Columns with no values are
/// skipped. A canonical header seen twice keeps its first position and takes
/// the later column's synonyms.
pub fn build_mapping(reference: &DataFrame) -> Result<HeaderMapping> {
    let mut mapping = HeaderMapping::new();

    for column in reference.get_columns() {
        let values = non_missing_values(column)?;
        let Some((canonical, synonyms)) = values.split_first() else {
            debug!(column = %column.name(), "reference column is empty, skipping");
            continue;
        };

        debug!(
            canonical = %canonical,
            synonyms = synonyms.len(),
            "header group"
        );

        if let Some(previous) = mapping.insert(canonical.clone(), synonyms.to_vec()) {
            warn!(
                canonical = %canonical,
                replaced_synonyms = previous.len(),
                "duplicate canonical header in reference, later column wins"
            );
        }
    }

    for conflict in mapping.synonym_conflicts() {
        warn!(
            synonym = %conflict.synonym,
            winner = %conflict.winner,
            shadowed = ?conflict.shadowed,
            "synonym listed under several canonical headers, first one wins"
        );
    }

    info!(
        headers = mapping.len(),
        synonyms = mapping.synonym_count(),
        "header mapping built"
    );

    Ok(mapping)
}

/// Cell values as text, missing cells and empty strings dropped.
fn non_missing_values(column: &Column) -> Result<Vec<String>> {
    let mut values = Vec::new();
    for idx in 0..column.len() {
        let text = any_to_string(column.get(idx)?);
        if !text.is_empty() {
            values.push(text);
        }
    }
    Ok(values)
}
