//! Ordered canonical header list.

use serde::{Deserialize, Serialize};

/// Canonical headers in reference order; the column order of aligned output.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReferenceHeaders(Vec<String>);

impl ReferenceHeaders {
    pub fn new(headers: Vec<String>) -> Self {
        Self(headers)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Index of `header` in reference order.
    pub fn position(&self, header: &str) -> Option<usize> {
        self.0.iter().position(|h| h == header)
    }
}

impl<'a> IntoIterator for &'a ReferenceHeaders {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl From<Vec<String>> for ReferenceHeaders {
    fn from(headers: Vec<String>) -> Self {
        Self(headers)
    }
}
