//! Template rendering for generated files.
//!
//! Handles:
//! - Variable substitution ({project_name}, {year}, {module_path}, {owner})
//! - Writing rendered files into the project directory

use crate::error::{Error, Result};
use crate::generate::Progress;
use camino::{Utf8Path, Utf8PathBuf};
use chrono::Local;

/// Template variables for rendering
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateVars {
    pub project_name: String,
    pub year: String,
    pub module_path: String,
    /// Copyright holder; empty unless set
    pub owner: String,
}

impl TemplateVars {
    /// Create template variables with defaults
    pub fn new(project_name: impl Into<String>) -> Self {
        let project_name = project_name.into();
        Self {
            module_path: project_name.clone(),
            project_name,
            year: Local::now().format("%Y").to_string(),
            owner: String::new(),
        }
    }

    /// Set the module path
    pub fn with_module_path(mut self, module_path: impl Into<String>) -> Self {
        self.module_path = module_path.into();
        self
    }

    pub fn with_owner(mut self, owner: impl Into<String>) -> Self {
        self.owner = owner.into();
        self
    }
}

/// Template renderer
#[derive(Debug, Default, Clone, Copy)]
pub struct TemplateRenderer;

impl TemplateRenderer {
    /// Create a new renderer
    pub fn new() -> Self {
        Self
    }

    /// Render a string template with variables
    ///
    /// Uses plain `{var}` replacement so that braces in C-like sources pass
    /// through untouched.
    pub fn render_string(&self, template: &str, vars: &TemplateVars) -> String {
        template
            .replace("{project_name}", &vars.project_name)
            .replace("{year}", &vars.year)
            .replace("{module_path}", &vars.module_path)
            .replace("{owner}", &vars.owner)
    }

    /// Render `template` and write it to `dir/file_name`
    pub fn write_file(
        &self,
        dir: &Utf8Path,
        file_name: &str,
        template: &str,
        vars: &TemplateVars,
        progress: &dyn Progress,
    ) -> Result<Utf8PathBuf> {
        progress.step(&format!("Creating {}...", file_name));
        let path = dir.join(file_name);
        tracing::debug!("Writing {}", path);

        let content = self.render_string(template, vars);
        std::fs::write(&path, content)
            .map_err(|e| Error::io(format!("create {}", file_name), e))?;

        Ok(path)
    }
}
