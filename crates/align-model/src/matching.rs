//! Records of how input columns resolved to canonical headers.

use std::fmt;

use serde::{Deserialize, Serialize};

/// How an input column name matched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchKind {
    /// The column already carries the canonical name.
    Canonical,
    /// The column name is listed as a synonym.
    Synonym,
}

impl MatchKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Canonical => "canonical",
            Self::Synonym => "synonym",
        }
    }
}

impl fmt::Display for MatchKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An input column resolved to a canonical header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnMatch {
    pub source: String,
    pub canonical: String,
    pub kind: MatchKind,
}

impl ColumnMatch {
    pub fn new(source: impl Into<String>, canonical: impl Into<String>, kind: MatchKind) -> Self {
        Self {
            source: source.into(),
            canonical: canonical.into(),
            kind,
        }
    }

    /// True when the source column was renamed by the alignment.
    pub fn is_renamed(&self) -> bool {
        self.source != self.canonical
    }
}
