use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Library-wide error type for larapress operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure outside a more specific stage.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Configuration or environment issue.
    #[error("{0}")]
    Configuration(String),

    /// Target directory is already occupied.
    #[error("Application already exists at {}", path.display())]
    TargetExists { path: PathBuf },

    /// Release archive could not be downloaded.
    #[error("Failed to download release archive from {url}: {details}")]
    Fetch { url: String, details: String },

    /// Release archive could not be unpacked into the target.
    #[error("Failed to extract {} into {}: {details}", archive.display(), target.display())]
    Extract { archive: PathBuf, target: PathBuf, details: String },

    /// Dependency manifest is missing or malformed.
    #[error("Failed to parse manifest {}: {details}", path.display())]
    ManifestParse { path: PathBuf, details: String },

    /// Environment file could not be read.
    #[error("Failed to read environment file {}: {source}", path.display())]
    EnvRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A generated file could not be written.
    #[error("Failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Interactive prompt failed.
    #[error("Failed to read {what}: {details}")]
    Prompt { what: String, details: String },

    /// External tool could not be started.
    #[error("Failed to run {tool}: {error}")]
    ExternalTool { tool: String, error: String },

    /// Delegated install sequence exited unsuccessfully.
    #[error("Command '{command}' exited with status {exit_code}")]
    DelegatedProcessFailure { command: String, exit_code: i32 },
}

impl AppError {
    pub fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::Configuration(message.into())
    }

    pub(crate) fn write(path: impl Into<PathBuf>, source: io::Error) -> Self {
        AppError::Write { path: path.into(), source }
    }

    /// Process exit status reported by the CLI for this error.
    ///
    /// Delegated failures mirror the external process; everything else is `1`.
    pub fn exit_code(&self) -> i32 {
        match self {
            AppError::DelegatedProcessFailure { exit_code, .. } => *exit_code,
            _ => 1,
        }
    }
}
