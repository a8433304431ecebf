//! Error types for mapping construction and alignment.

use thiserror::Error;

/// Errors raised while building a mapping or aligning a table.
#[derive(Debug, Error)]
pub enum AlignError {
    /// A matched column's text could not be parsed back into its source type.
    #[error("cannot restore column '{column}' to {dtype}: value '{value}' in data row {row} does not parse")]
    TypeRestore {
        column: String,
        dtype: String,
        /// 1-based data row.
        row: usize,
        value: String,
    },

    /// Polars refused to cast a matched column back to its source type.
    #[error("cannot restore column '{column}' to {dtype}: {message}")]
    TypeCast {
        column: String,
        dtype: String,
        message: String,
    },

    /// Failed DataFrame operation.
    #[error("DataFrame operation failed: {message}")]
    DataFrame { message: String },
}

impl AlignError {
    /// True for failures of the type restoration step.
    pub fn is_type_restore(&self) -> bool {
        matches!(self, Self::TypeRestore { .. } | Self::TypeCast { .. })
    }
}

impl From<polars::prelude::PolarsError> for AlignError {
    fn from(err: polars::prelude::PolarsError) -> Self {
        Self::DataFrame {
            message: err.to_string(),
        }
    }
}

/// Result type for alignment operations.
pub type Result<T> = std::result::Result<T, AlignError>;
