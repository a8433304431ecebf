//! Data model for header alignment.
//!
//! A [`HeaderMapping`] holds one [`HeaderGroup`] per canonical header, in
//! reference order. [`ReferenceHeaders`] is the column order every aligned
//! table follows, and [`ColumnMatch`] records how an input column resolved.

pub mod headers;
pub mod mapping;
pub mod matching;

pub use headers::ReferenceHeaders;
pub use mapping::{HeaderGroup, HeaderMapping, SynonymConflict};
pub use matching::{ColumnMatch, MatchKind};
