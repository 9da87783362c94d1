//! Command implementations

pub mod completions;
pub mod templates;
pub mod wizard;
