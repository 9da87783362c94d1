//! Astro generator
//!
//! `npm create astro` downloads and installs packages, which takes long
//! enough that the command runs on a background task while the caller keeps
//! a spinner moving.

use super::{Generator, Progress, ProjectTarget};
use crate::config::AstroConfig;
use crate::error::{Error, Result};
use crate::process::ExternalCommand;
use crate::types::Flags;
use async_trait::async_trait;
use std::time::Duration;

/// Scaffolds an Astro site through `npm create astro@latest`
#[derive(Debug, Clone)]
pub struct AstroGenerator {
    config: AstroConfig,
    spinner_interval: Duration,
}

impl AstroGenerator {
    pub fn new(config: AstroConfig, spinner_interval: Duration) -> Self {
        Self {
            config,
            spinner_interval,
        }
    }

    /// The `npm create` invocation for `target`, run from its base directory
    pub fn command(&self, target: &ProjectTarget) -> ExternalCommand {
        ExternalCommand::new(&self.config.npm_command, "create Astro project")
            .args(["create", "astro@latest", target.name.as_str(), "--"])
            .args(["--template", self.config.template.as_str()])
            .arg(if self.config.install { "--install" } else { "--no-install" })
            .arg(if self.config.git { "--git" } else { "--no-git" })
            .args(["--typescript", self.config.typescript.as_str(), "-y"])
            .current_dir(&target.base_dir)
    }
}

#[async_trait]
impl Generator for AstroGenerator {
    fn required_tools(&self, _flags: &Flags) -> Vec<String> {
        vec![self.config.npm_command.clone()]
    }

    async fn generate(
        &self,
        target: &ProjectTarget,
        _flags: &Flags,
        progress: &dyn Progress,
    ) -> Result<()> {
        let command = self.command(target);

        progress.step("Creating Astro project...");
        command
            .run_with_progress(progress, self.spinner_interval)
            .await?;

        if !target.path.is_dir() {
            return Err(Error::external_command(
                "create Astro project",
                command.display(),
                "did not create the project directory",
            ));
        }

        Ok(())
    }

    fn next_steps(&self, target: &ProjectTarget) -> Vec<String> {
        vec![format!("cd {}", target.name), "npm run dev".to_string()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generate::{dispatch, NoProgress};
    use camino::{Utf8Path, Utf8PathBuf};
    use tempfile::TempDir;

    #[test]
    fn test_command_line() {
        let generator = AstroGenerator::new(AstroConfig::default(), Duration::from_millis(100));
        let target = ProjectTarget::new(Utf8Path::new("/work"), "site");

        assert_eq!(
            generator.command(&target).display(),
            "npm create astro@latest site -- --template minimal --install --git --typescript strict -y"
        );
    }

    #[test]
    fn test_command_line_opt_outs() {
        let config = AstroConfig {
            install: false,
            git: false,
            template: "blog".to_string(),
            ..AstroConfig::default()
        };
        let generator = AstroGenerator::new(config, Duration::from_millis(100));
        let target = ProjectTarget::new(Utf8Path::new("/work"), "site");

        let line = generator.command(&target).display();
        assert!(line.contains("--template blog"));
        assert!(line.contains("--no-install"));
        assert!(line.contains("--no-git"));
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_tool_creating_directory_succeeds() {
        let temp = TempDir::new().unwrap();
        let base = Utf8PathBuf::from_path_buf(temp.path().to_path_buf()).unwrap();
        // `sh create astro@latest site ...` runs this script with the name as $2
        std::fs::write(base.join("create"), "mkdir \"$2\"\n").unwrap();
        let config = AstroConfig {
            npm_command: "sh".to_string(),
            ..AstroConfig::default()
        };
        let generator = AstroGenerator::new(config, Duration::from_millis(5));

        let path = dispatch(&generator, &base, "site", &Flags::new(), &NoProgress)
            .await
            .unwrap();

        assert_eq!(path, base.join("site"));
        assert!(path.is_dir());
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_tool_success_without_directory_is_failure() {
        let temp = TempDir::new().unwrap();
        let base = Utf8PathBuf::from_path_buf(temp.path().to_path_buf()).unwrap();
        let config = AstroConfig {
            npm_command: "true".to_string(),
            ..AstroConfig::default()
        };
        let generator = AstroGenerator::new(config, Duration::from_millis(5));

        let err = dispatch(&generator, &base, "site", &Flags::new(), &NoProgress)
            .await
            .unwrap_err();

        assert!(
            matches!(err, Error::ExternalCommand { ref reason, .. } if reason == "did not create the project directory")
        );
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_tool_failure_is_surfaced() {
        let temp = TempDir::new().unwrap();
        let base = Utf8PathBuf::from_path_buf(temp.path().to_path_buf()).unwrap();
        let config = AstroConfig {
            npm_command: "false".to_string(),
            ..AstroConfig::default()
        };
        let generator = AstroGenerator::new(config, Duration::from_millis(5));

        let err = dispatch(&generator, &base, "site", &Flags::new(), &NoProgress)
            .await
            .unwrap_err();

        assert!(matches!(err, Error::ExternalCommand { .. }));
    }
}
