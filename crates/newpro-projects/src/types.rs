//! Core types shared by the wizard and the generators

use crate::error::{Error, Result};
use std::collections::BTreeMap;
use std::fmt;

/// Characters that may not appear in a project name
pub const FORBIDDEN_NAME_CHARS: &[char] = &['/', '\\', ':', '*', '?', '"', '<', '>', '|'];

/// Built-in template identifiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TemplateId {
    /// Go module with optional Cobra CLI and test file
    Go,
    /// Astro site created through npm
    Astro,
    /// C++ program with a Makefile
    Cpp,
}

impl TemplateId {
    /// Get all built-in template identifiers, in menu order
    pub fn all() -> &'static [Self] {
        &[Self::Go, Self::Astro, Self::Cpp]
    }

    /// Get the string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Go => "go",
            Self::Astro => "astro",
            Self::Cpp => "cpp",
        }
    }
}

impl fmt::Display for TemplateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A yes/no question asked by the wizard for one template
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlagSpec {
    /// Key the answer is stored under
    pub key: &'static str,
    /// Question shown to the user
    pub prompt: &'static str,
}

impl FlagSpec {
    pub const fn new(key: &'static str, prompt: &'static str) -> Self {
        Self { key, prompt }
    }
}

/// Answers collected by flag steps
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Flags(BTreeMap<String, bool>);

impl Flags {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an answer
    pub fn set(&mut self, key: impl Into<String>, value: bool) {
        self.0.insert(key.into(), value);
    }

    /// Builder-style `set`
    pub fn with(mut self, key: impl Into<String>, value: bool) -> Self {
        self.set(key, value);
        self
    }

    /// Answer for `key`; unanswered flags read as `false`
    pub fn get(&self, key: &str) -> bool {
        self.0.get(key).copied().unwrap_or(false)
    }

    /// Whether `key` has been answered at all
    pub fn contains(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Check a project name before any generator runs
///
/// # Errors
/// Returns `Error::InvalidName` if the name is empty or contains one of
/// [`FORBIDDEN_NAME_CHARS`].
pub fn validate_project_name(name: &str) -> Result<()> {
    if name.is_empty() {
        return Err(Error::invalid_name(name, "name is empty"));
    }

    if let Some(c) = name.chars().find(|c| FORBIDDEN_NAME_CHARS.contains(c)) {
        return Err(Error::invalid_name(
            name,
            format!("contains forbidden character '{}'", c),
        ));
    }

    Ok(())
}
