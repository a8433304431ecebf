use std::path::PathBuf;

/// Files written for one aligned request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OutputPaths {
    pub aligned: PathBuf,
    /// Only written when at least one input column went unmatched.
    pub not_found: Option<PathBuf>,
}
