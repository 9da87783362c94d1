//! Go module generator

use super::{create_project_dir, Generator, Progress, ProjectTarget};
use crate::config::GoConfig;
use crate::error::Result;
use crate::process::ExternalCommand;
use crate::templates::{TemplateRenderer, TemplateVars};
use crate::types::{FlagSpec, Flags};
use async_trait::async_trait;

const MAIN_GO: &str = include_str!("../../templates/go/main.go.tmpl");
const MAIN_TEST_GO: &str = include_str!("../../templates/go/main_test.go.tmpl");
const README: &str = "# {project_name}";

/// Scaffolds a Go module, optionally with a test file and Cobra boilerplate
#[derive(Debug, Clone)]
pub struct GoGenerator {
    config: GoConfig,
    renderer: TemplateRenderer,
}

impl GoGenerator {
    pub const USE_COBRA_CLI: FlagSpec = FlagSpec::new("use_cobra_cli", "Use Cobra CLI?");
    pub const ADD_TEST: FlagSpec = FlagSpec::new("add_test", "Add test file?");
    pub const FLAGS: &'static [FlagSpec] = &[Self::USE_COBRA_CLI, Self::ADD_TEST];

    pub fn new(config: GoConfig) -> Self {
        Self {
            config,
            renderer: TemplateRenderer::new(),
        }
    }
}

#[async_trait]
impl Generator for GoGenerator {
    fn required_tools(&self, flags: &Flags) -> Vec<String> {
        let mut tools = vec![self.config.go_command.clone()];
        if flags.get(Self::USE_COBRA_CLI.key) {
            tools.push(self.config.cobra_command.clone());
        }
        tools
    }

    async fn generate(
        &self,
        target: &ProjectTarget,
        flags: &Flags,
        progress: &dyn Progress,
    ) -> Result<()> {
        let dir = &target.path;
        let module_path = self.config.module_path(&target.name);
        let vars = TemplateVars::new(&target.name)
            .with_module_path(&module_path)
            .with_owner(&self.config.module_owner);

        create_project_dir(dir, progress)?;

        self.renderer
            .write_file(dir, "main.go", MAIN_GO, &vars, progress)?;
        if flags.get(Self::ADD_TEST.key) {
            self.renderer
                .write_file(dir, "main_test.go", MAIN_TEST_GO, &vars, progress)?;
        }
        self.renderer
            .write_file(dir, "README.md", README, &vars, progress)?;

        progress.step("Initializing go module...");
        ExternalCommand::new(&self.config.go_command, "initialize go module")
            .args(["mod", "init", module_path.as_str()])
            .current_dir(dir)
            .run()
            .await?;

        // cobra-cli rewrites main.go, so it runs after every file is in place
        if flags.get(Self::USE_COBRA_CLI.key) {
            progress.step("Initializing cobra-cli...");
            ExternalCommand::new(&self.config.cobra_command, "initialize cobra-cli")
                .arg("init")
                .current_dir(dir)
                .run()
                .await?;
        }

        Ok(())
    }

    fn next_steps(&self, target: &ProjectTarget) -> Vec<String> {
        vec![format!("cd {}", target.name), "go run .".to_string()]
    }
}
