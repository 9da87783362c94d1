//! Error types for newpro-projects

use thiserror::Error;

/// Result type alias using newpro-projects's Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Scaffolding error types
#[derive(Error, Debug)]
pub enum Error {
    /// Project name is empty or contains a forbidden character
    #[error("Invalid project name: '{name}' ({reason})")]
    InvalidName { name: String, reason: String },

    /// Target path is already occupied
    #[error("Directory '{path}' already exists")]
    AlreadyExists { path: String },

    /// Directory or file write failed
    #[error("Failed to {action}: {source}")]
    Io {
        action: String,
        #[source]
        source: std::io::Error,
    },

    /// External tool could not be spawned, is missing, or exited non-zero
    #[error("Failed to {action}: `{command}` {reason}")]
    ExternalCommand {
        action: String,
        command: String,
        reason: String,
    },

    /// No template registered under the requested identifier
    #[error("Unknown template: {id}")]
    UnknownTemplate { id: String },

    /// Config file could not be read
    #[error("Failed to read config file {path}: {source}")]
    ConfigRead {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Config file is not valid YAML for the expected schema
    #[error("Failed to parse config file {path}: {source}")]
    ConfigParse {
        path: String,
        #[source]
        source: serde_yaml_ng::Error,
    },

    /// Explicitly requested config file does not exist
    #[error("Config file not found: {path}")]
    ConfigNotFound { path: String },
}

impl Error {
    /// Create an invalid name error
    pub fn invalid_name(name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidName {
            name: name.into(),
            reason: reason.into(),
        }
    }

    /// Create an already exists error
    pub fn already_exists(path: impl Into<String>) -> Self {
        Self::AlreadyExists { path: path.into() }
    }

    /// Wrap an IO error with the step that failed
    pub fn io(action: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            action: action.into(),
            source,
        }
    }

    /// Create an external command error
    pub fn external_command(
        action: impl Into<String>,
        command: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self::ExternalCommand {
            action: action.into(),
            command: command.into(),
            reason: reason.into(),
        }
    }

    /// Create an unknown template error
    pub fn unknown_template(id: impl Into<String>) -> Self {
        Self::UnknownTemplate { id: id.into() }
    }

    /// Short category label, used by the terminal view
    pub fn kind(&self) -> &'static str {
        match self {
            Self::InvalidName { .. } => "invalid name",
            Self::AlreadyExists { .. } => "already exists",
            Self::Io { .. } => "i/o failure",
            Self::ExternalCommand { .. } => "external command failure",
            Self::UnknownTemplate { .. } => "unknown template",
            Self::ConfigRead { .. } | Self::ConfigParse { .. } | Self::ConfigNotFound { .. } => {
                "configuration"
            }
        }
    }
}
