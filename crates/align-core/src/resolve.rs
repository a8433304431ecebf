//! Input column name resolution.

use align_model::{ColumnMatch, HeaderMapping, MatchKind};

/// Resolves an input column name to its canonical header.
///
/// A name that is itself a canonical header always resolves to itself, even
/// when another group lists it as a synonym. Otherwise the first canonical
/// header (in mapping order) listing the name as a synonym wins. Matching is
/// exact: case and whitespace are significant.
pub fn resolve<'a>(column_name: &str, mapping: &'a HeaderMapping) -> Option<&'a str> {
    mapping
        .canonical(column_name)
        .or_else(|| mapping.synonym_owner(column_name))
}

/// Like [`resolve`], but also records how the name matched.
pub fn resolve_match(column_name: &str, mapping: &HeaderMapping) -> Option<ColumnMatch> {
    if let Some(canonical) = mapping.canonical(column_name) {
        return Some(ColumnMatch::new(column_name, canonical, MatchKind::Canonical));
    }
    mapping
        .synonym_owner(column_name)
        .map(|canonical| ColumnMatch::new(column_name, canonical, MatchKind::Synonym))
}
