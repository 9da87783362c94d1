//! Generator contract and dispatch.
//!
//! Every template is backed by a [`Generator`]. [`dispatch`] enforces the
//! shared contract before handing over:
//! - the project name is valid
//! - nothing exists at the target path yet
//! - every external tool the generator will call is on PATH
//!
//! Generators then run their steps one at a time and stop at the first
//! failure. Files written before a failure are left on disk.

mod astro;
mod cpp;
mod go;

pub use astro::AstroGenerator;
pub use cpp::CppGenerator;
pub use go::GoGenerator;

use crate::error::{Error, Result};
use crate::process::require_tool;
use crate::types::{validate_project_name, Flags};
use async_trait::async_trait;
use camino::{Utf8Path, Utf8PathBuf};

/// Receives progress from a running generator
pub trait Progress: Send + Sync {
    /// A new generation step started
    fn step(&self, message: &str);

    /// Redraw tick while a long-running step is in flight
    fn tick(&self);
}

/// Progress sink that discards everything
#[derive(Debug, Default, Clone, Copy)]
pub struct NoProgress;

impl Progress for NoProgress {
    fn step(&self, _message: &str) {}

    fn tick(&self) {}
}

/// Where a project is being created
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectTarget {
    /// Project name as entered
    pub name: String,
    /// Directory the project is created in
    pub base_dir: Utf8PathBuf,
    /// `base_dir/name`
    pub path: Utf8PathBuf,
}

impl ProjectTarget {
    pub fn new(base_dir: &Utf8Path, name: &str) -> Self {
        Self {
            name: name.to_string(),
            base_dir: base_dir.to_owned(),
            path: base_dir.join(name),
        }
    }
}

/// Scaffolds one kind of project
#[async_trait]
pub trait Generator: Send + Sync {
    /// External tools this generator will run for the given flags
    fn required_tools(&self, _flags: &Flags) -> Vec<String> {
        Vec::new()
    }

    /// Create the project at `target.path`
    ///
    /// Called only after the target was checked to be free.
    async fn generate(
        &self,
        target: &ProjectTarget,
        flags: &Flags,
        progress: &dyn Progress,
    ) -> Result<()>;

    /// Hints printed after a successful run
    fn next_steps(&self, _target: &ProjectTarget) -> Vec<String> {
        Vec::new()
    }
}

/// Validate the request and run `generator`
///
/// # Errors
/// - `InvalidName` if the name is empty or has forbidden characters
/// - `AlreadyExists` if anything exists at `base_dir/name`; nothing is written
/// - `ExternalCommand` if a required tool is missing; nothing is written
/// - whatever the generator returns from its first failing step
pub async fn dispatch(
    generator: &dyn Generator,
    base_dir: &Utf8Path,
    name: &str,
    flags: &Flags,
    progress: &dyn Progress,
) -> Result<Utf8PathBuf> {
    validate_project_name(name)?;

    let target = ProjectTarget::new(base_dir, name);
    ensure_absent(&target.path)?;

    for tool in generator.required_tools(flags) {
        require_tool(&tool)?;
    }

    tracing::debug!("Generating project at {}", target.path);
    generator.generate(&target, flags, progress).await?;
    tracing::info!("Project created at {}", target.path);

    Ok(target.path)
}

/// Fail with `AlreadyExists` if anything, even a dangling symlink, is at `path`
pub fn ensure_absent(path: &Utf8Path) -> Result<()> {
    match path.symlink_metadata() {
        Ok(_) => Err(Error::already_exists(path.as_str())),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
        Err(e) => Err(Error::io(format!("check whether {} exists", path), e)),
    }
}

/// Create the project directory itself (not its parents)
pub fn create_project_dir(path: &Utf8Path, progress: &dyn Progress) -> Result<()> {
    progress.step("Creating project directory...");
    std::fs::create_dir(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::AlreadyExists {
            Error::already_exists(path.as_str())
        } else {
            Error::io("create project directory", e)
        }
    })
}
