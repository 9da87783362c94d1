//! C++ generator

use super::{create_project_dir, Generator, Progress, ProjectTarget};
use crate::error::Result;
use crate::templates::{TemplateRenderer, TemplateVars};
use crate::types::Flags;
use async_trait::async_trait;

const MAIN_CPP: &str = include_str!("../../templates/cpp/main.cpp.tmpl");
const MAKEFILE: &str = include_str!("../../templates/cpp/Makefile.tmpl");
const README: &str = "# {project_name}";

/// Scaffolds a single-file C++ program built with make
#[derive(Debug, Clone, Default)]
pub struct CppGenerator {
    renderer: TemplateRenderer,
}

impl CppGenerator {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl Generator for CppGenerator {
    async fn generate(
        &self,
        target: &ProjectTarget,
        _flags: &Flags,
        progress: &dyn Progress,
    ) -> Result<()> {
        let dir = &target.path;
        let vars = TemplateVars::new(&target.name);

        create_project_dir(dir, progress)?;
        self.renderer
            .write_file(dir, "main.cpp", MAIN_CPP, &vars, progress)?;
        self.renderer
            .write_file(dir, "Makefile", MAKEFILE, &vars, progress)?;
        self.renderer
            .write_file(dir, "README.md", README, &vars, progress)?;

        Ok(())
    }

    fn next_steps(&self, target: &ProjectTarget) -> Vec<String> {
        vec![format!("cd {}", target.name), "make run".to_string()]
    }
}
