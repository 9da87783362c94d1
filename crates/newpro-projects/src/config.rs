//! Configuration file loading and parsing

use crate::error::{Error, Result};
use camino::{Utf8Path, Utf8PathBuf};
use serde::{Deserialize, Serialize};
use std::fs;
use std::time::Duration;

/// Configuration file names searched in the working directory
const CONFIG_FILE_NAMES: &[&str] = &["newpro.yaml", "newpro.yml"];

/// Environment variable pointing at a config file
pub const CONFIG_ENV_VAR: &str = "NEWPRO_CONFIG";

/// Settings for the Go template
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GoConfig {
    /// Host part of the module path (e.g., "github.com")
    pub module_host: String,
    /// Owner part of the module path
    pub module_owner: String,
    pub go_command: String,
    pub cobra_command: String,
}

impl Default for GoConfig {
    fn default() -> Self {
        Self {
            module_host: "github.com".to_string(),
            module_owner: "rudifa".to_string(),
            go_command: "go".to_string(),
            cobra_command: "cobra-cli".to_string(),
        }
    }
}

impl GoConfig {
    /// Module path passed to `go mod init`
    pub fn module_path(&self, project_name: &str) -> String {
        format!("{}/{}/{}", self.module_host, self.module_owner, project_name)
    }
}

/// Settings for the Astro template
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AstroConfig {
    pub npm_command: String,
    /// Starter template passed to `create astro`
    pub template: String,
    /// TypeScript strictness passed to `create astro`
    pub typescript: String,
    pub install: bool,
    pub git: bool,
}

impl Default for AstroConfig {
    fn default() -> Self {
        Self {
            npm_command: "npm".to_string(),
            template: "minimal".to_string(),
            typescript: "strict".to_string(),
            install: true,
            git: true,
        }
    }
}

/// Terminal behaviour
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Delay between spinner redraws while a long-running generator works
    pub spinner_interval_ms: u64,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            spinner_interval_ms: 100,
        }
    }
}

impl UiConfig {
    pub fn spinner_interval(&self) -> Duration {
        Duration::from_millis(self.spinner_interval_ms.max(1))
    }
}

/// Top-level newpro configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NewproConfig {
    pub go: GoConfig,
    pub astro: AstroConfig,
    pub ui: UiConfig,
}

impl NewproConfig {
    /// Parse configuration from a YAML string
    pub fn from_yaml(content: &str, origin: &str) -> Result<Self> {
        // An empty file deserializes to unit, not to a mapping
        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        serde_yaml_ng::from_str(content).map_err(|source| Error::ConfigParse {
            path: origin.to_string(),
            source,
        })
    }

    /// Load configuration from the specified path or search for it
    ///
    /// Lookup order: explicit path, `NEWPRO_CONFIG`, `./newpro.yaml`, the
    /// user config directory. Absent files fall back to defaults, except an
    /// explicit path, which must exist.
    pub fn load(path: Option<&Utf8Path>) -> Result<(Self, Option<Utf8PathBuf>)> {
        if let Some(p) = path {
            let content = fs::read_to_string(p).map_err(|e| {
                if e.kind() == std::io::ErrorKind::NotFound {
                    Error::ConfigNotFound {
                        path: p.to_string(),
                    }
                } else {
                    Error::ConfigRead {
                        path: p.to_string(),
                        source: e,
                    }
                }
            })?;
            return Ok((Self::from_yaml(&content, p.as_str())?, Some(p.to_owned())));
        }

        match Self::find_config() {
            Some(found) => {
                tracing::debug!("Loading config from {}", found);
                let content = fs::read_to_string(&found).map_err(|source| Error::ConfigRead {
                    path: found.to_string(),
                    source,
                })?;
                Ok((Self::from_yaml(&content, found.as_str())?, Some(found)))
            }
            None => {
                tracing::debug!("No config file found, using defaults");
                Ok((Self::default(), None))
            }
        }
    }

    /// Find a config file in the usual locations
    fn find_config() -> Option<Utf8PathBuf> {
        if let Ok(env_path) = std::env::var(CONFIG_ENV_VAR) {
            let env_path = Utf8PathBuf::from(env_path);
            if env_path.is_file() {
                return Some(env_path);
            }
            tracing::warn!("{} points to a missing file: {}", CONFIG_ENV_VAR, env_path);
        }

        for name in CONFIG_FILE_NAMES {
            let candidate = Utf8PathBuf::from(name);
            if candidate.is_file() {
                return Some(candidate);
            }
        }

        let user_config = directories::ProjectDirs::from("", "", "newpro")
            .and_then(|dirs| Utf8PathBuf::from_path_buf(dirs.config_dir().join("config.yaml")).ok());
        user_config.filter(|p| p.is_file())
    }
}
