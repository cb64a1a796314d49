//! Error types for rpmlock
//!
//! All modules use `RpmLockResult<T>` as their return type.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for rpmlock operations
pub type RpmLockResult<T> = Result<T, RpmLockError>;

/// All errors that can occur in rpmlock
#[derive(Error, Debug)]
pub enum RpmLockError {
    // Infrastructure errors
    #[error("Temporary failure, retry later: {0}")]
    Temporary(String),

    // Configuration errors
    #[error("Invalid configuration at {path}: {reason}")]
    ConfigInvalid { path: PathBuf, reason: String },

    #[error("Failed to create config directory {path}: {source}")]
    ConfigDirCreate {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // Manifest and lockfile errors
    #[error("Not an RPM manifest: {0}. Expected a file named rpms.in.yaml or rpms.in.yml")]
    InvalidManifest(String),

    #[error("Failed to parse manifest {path}: {reason}")]
    ManifestParse { path: String, reason: String },

    #[error("Lockfile {path} does not match the expected schema: {reason}")]
    LockfileSchema { path: String, reason: String },

    #[error("Lockfile was not generated: {0}")]
    LockfileMissing(String),

    #[error("Failed to update {0}")]
    UpdateFailed(String),

    // IO errors
    #[error("IO error: {context}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid path: {path}: {reason}")]
    PathInvalid { path: PathBuf, reason: String },

    // Process errors
    #[error("Command failed: {command}")]
    CommandFailed {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Command exited with code {code}: {command}")]
    CommandExecution {
        command: String,
        code: i32,
        stdout: String,
        stderr: String,
    },

    // Serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML serialize error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    // General errors
    #[error("Internal error: {0}")]
    Internal(String),
}

impl RpmLockError {
    /// Create an IO error with context
    pub fn io(context: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            context: context.into(),
            source,
        }
    }

    /// Create a command failed error
    pub fn command_failed(command: impl Into<String>, source: std::io::Error) -> Self {
        Self::CommandFailed {
            command: command.into(),
            source,
        }
    }

    /// Infrastructure failures must be retried by the caller, never reported
    /// as a failed artifact.
    pub fn is_temporary(&self) -> bool {
        matches!(self, Self::Temporary(_))
    }

    /// Captured process output as `(stdout, stderr)`.
    ///
    /// Errors that never reached a process report their own message as stderr.
    pub fn output(&self) -> (String, String) {
        match self {
            Self::CommandExecution { stdout, stderr, .. } => (stdout.clone(), stderr.clone()),
            other => (String::new(), other.to_string()),
        }
    }

    /// Get actionable hint for the error
    pub fn hint(&self) -> Option<&'static str> {
        match self {
            Self::CommandFailed { .. } => Some(
                "Install rpm-lockfile-prototype, which also provides caching-rpm-lockfile-prototype, \
                 or point [lockfile] tool / caching_tool at it",
            ),
            Self::InvalidManifest(_) => Some("Pass the path of an rpms.in.yaml file"),
            Self::Temporary(_) => Some("Run the update again"),
            _ => None,
        }
    }
}
