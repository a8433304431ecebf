//! Header alignment core.
//!
//! Three steps, all pure transformations over in-memory tables:
//!
//! 1. [`build_mapping`] turns a reference table into a [`HeaderMapping`]:
//!    each reference column's first value is a canonical header, the rest
//!    are its synonyms.
//! 2. [`resolve`] maps one input column name to its canonical header, exact
//!    canonical names first, then synonyms.
//! 3. [`align`] re-projects an input table onto the canonical headers and
//!    restores each matched column's original type.
//!
//! # Example
//!
//! ```ignore
//! use align_core::{align, build_mapping};
//!
//! let mapping = build_mapping(&reference_df)?;
//! let alignment = align(&input_df, &mapping.reference_headers(), &mapping)?;
//! println!("unmatched: {:?}", alignment.unmatched);
//! ```

mod align;
mod builder;
mod error;
mod resolve;
mod restore;

pub use align::{Alignment, align};
pub use builder::build_mapping;
pub use error::{AlignError, Result};
pub use resolve::{resolve, resolve_match};
pub use restore::{restore_type, text_view};

pub use align_model::{ColumnMatch, HeaderGroup, HeaderMapping, MatchKind, ReferenceHeaders};
