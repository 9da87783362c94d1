//! Project template registry.
//!
//! A template pairs a menu label and its flag steps with the generator that
//! scaffolds the project. The registry is built once at startup and read by
//! the wizard for its menus and by dispatch to find the generator.
//!
//! # Example Usage
//!
//! ```no_run
//! use newpro_projects::config::NewproConfig;
//! use newpro_projects::templates::TemplateRegistry;
//!
//! let registry = TemplateRegistry::builtin(&NewproConfig::default());
//! for template in registry.iter() {
//!     println!("{} ({} flag steps)", template.label(), template.flags().len());
//! }
//! ```

pub mod renderer;

pub use renderer::{TemplateRenderer, TemplateVars};

use crate::config::NewproConfig;
use crate::error::{Error, Result};
use crate::generate::{self, AstroGenerator, CppGenerator, Generator, GoGenerator, Progress};
use crate::types::{FlagSpec, Flags, TemplateId};
use camino::{Utf8Path, Utf8PathBuf};
use std::fmt;
use std::sync::Arc;

/// Static definition of one template
#[derive(Clone)]
pub struct TemplateDescriptor {
    id: String,
    label: String,
    flags: Vec<FlagSpec>,
    generator: Arc<dyn Generator>,
}

impl TemplateDescriptor {
    pub fn new(
        id: impl Into<String>,
        label: impl Into<String>,
        flags: Vec<FlagSpec>,
        generator: Arc<dyn Generator>,
    ) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            flags,
            generator,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// Text shown in the template menu
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Flag steps asked after the project name, in order
    pub fn flags(&self) -> &[FlagSpec] {
        &self.flags
    }

    pub fn generator(&self) -> &dyn Generator {
        self.generator.as_ref()
    }

    /// Scaffold `name` under `base_dir` with this template
    pub async fn generate(
        &self,
        base_dir: &Utf8Path,
        name: &str,
        flags: &Flags,
        progress: &dyn Progress,
    ) -> Result<Utf8PathBuf> {
        generate::dispatch(self.generator(), base_dir, name, flags, progress).await
    }
}

impl fmt::Debug for TemplateDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TemplateDescriptor")
            .field("id", &self.id)
            .field("label", &self.label)
            .field("flags", &self.flags)
            .finish_non_exhaustive()
    }
}

/// Ordered, read-only set of templates
#[derive(Debug, Clone, Default)]
pub struct TemplateRegistry {
    templates: Vec<TemplateDescriptor>,
}

impl TemplateRegistry {
    pub fn new(templates: Vec<TemplateDescriptor>) -> Self {
        Self { templates }
    }

    /// Registry with the built-in Go, Astro and C++ templates
    pub fn builtin(config: &NewproConfig) -> Self {
        let templates = TemplateId::all()
            .iter()
            .map(|id| match id {
                TemplateId::Go => TemplateDescriptor::new(
                    id.as_str(),
                    "Create new Go project",
                    GoGenerator::FLAGS.to_vec(),
                    Arc::new(GoGenerator::new(config.go.clone())),
                ),
                TemplateId::Astro => TemplateDescriptor::new(
                    id.as_str(),
                    "Create new Astro project",
                    Vec::new(),
                    Arc::new(AstroGenerator::new(
                        config.astro.clone(),
                        config.ui.spinner_interval(),
                    )),
                ),
                TemplateId::Cpp => TemplateDescriptor::new(
                    id.as_str(),
                    "Create new C++ project",
                    Vec::new(),
                    Arc::new(CppGenerator::new()),
                ),
            })
            .collect();

        Self::new(templates)
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &TemplateDescriptor> {
        self.templates.iter()
    }

    /// Template at a menu position
    pub fn get_index(&self, index: usize) -> Option<&TemplateDescriptor> {
        self.templates.get(index)
    }

    /// Template by identifier
    pub fn get(&self, id: &str) -> Option<&TemplateDescriptor> {
        self.templates.iter().find(|t| t.id == id)
    }

    /// Menu labels, in registry order
    pub fn labels(&self) -> Vec<String> {
        self.templates.iter().map(|t| t.label.clone()).collect()
    }

    /// Look up `id` and run its generator
    pub async fn dispatch(
        &self,
        id: &str,
        base_dir: &Utf8Path,
        name: &str,
        flags: &Flags,
        progress: &dyn Progress,
    ) -> Result<Utf8PathBuf> {
        let template = self.get(id).ok_or_else(|| Error::unknown_template(id))?;
        tracing::info!("Dispatching template '{}' for project '{}'", id, name);
        template.generate(base_dir, name, flags, progress).await
    }
}
