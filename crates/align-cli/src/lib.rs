//! CLI library components for header-align.

pub mod logging;
pub mod pipeline;
