//! Tracing subscriber initialization.
//!
//! The terminal belongs to the UI, so logs go to a file. Watch them with
//! `tail -f` in another terminal.

use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing_subscriber::EnvFilter;

/// Filter used when `RUST_LOG` is unset or invalid.
pub const DEFAULT_FILTER: &str = "info";

/// Error type for logging initialization failures.
#[derive(Debug, Error)]
pub enum LoggingError {
    /// Failed to create log directory
    #[error("Failed to create log directory at {path:?}: {source}")]
    DirectoryCreation {
        /// The directory path that failed to be created
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Invalid log file path (no filename component)
    #[error("Invalid log file path: {0:?}")]
    InvalidPath(PathBuf),

    /// Log path has no parent directory
    #[error("Log path has no parent directory: {0:?}")]
    NoParentDirectory(PathBuf),

    /// Tracing subscriber already initialized
    #[error("Tracing subscriber already initialized")]
    SubscriberAlreadySet,
}

/// Directory and file name a log path splits into.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogTarget {
    /// Created on init when missing.
    pub directory: PathBuf,
    /// File inside `directory`.
    pub file_name: String,
}

impl LogTarget {
    /// Split `log_path` into directory and file name.
    ///
    /// A bare file name logs into the current directory.
    pub fn resolve(log_path: &Path) -> Result<Self, LoggingError> {
        let file_name = log_path
            .file_name()
            .and_then(|n| n.to_str())
            .ok_or_else(|| LoggingError::InvalidPath(log_path.to_path_buf()))?;

        let directory = log_path
            .parent()
            .ok_or_else(|| LoggingError::NoParentDirectory(log_path.to_path_buf()))?;
        let directory = if directory.as_os_str().is_empty() {
            PathBuf::from(".")
        } else {
            directory.to_path_buf()
        };

        Ok(Self {
            directory,
            file_name: file_name.to_string(),
        })
    }

    /// Create the directory if it doesn't exist.
    pub fn ensure_directory(&self) -> Result<(), LoggingError> {
        std::fs::create_dir_all(&self.directory).map_err(|source| {
            LoggingError::DirectoryCreation {
                path: self.directory.clone(),
                source,
            }
        })
    }
}

/// `RUST_LOG` if set and valid, otherwise [`DEFAULT_FILTER`].
pub fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Build the file subscriber without installing it.
pub fn file_subscriber(
    target: &LogTarget,
    filter: EnvFilter,
) -> impl tracing::Subscriber + Send + Sync {
    let file_appender = tracing_appender::rolling::never(&target.directory, &target.file_name);

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(file_appender)
        .with_ansi(false)
        .finish()
}

/// Initialize the global tracing subscriber with file-based logging.
///
/// Respects `RUST_LOG`, defaulting to "info". Creates the log directory if
/// it doesn't exist.
///
/// # Errors
///
/// Fails if the path has no file name, the directory cannot be created, or a
/// global subscriber is already installed.
pub fn init(log_path: &Path) -> Result<(), LoggingError> {
    let target = LogTarget::resolve(log_path)?;
    target.ensure_directory()?;

    tracing::subscriber::set_global_default(file_subscriber(&target, env_filter()))
        .map_err(|_| LoggingError::SubscriberAlreadySet)
}
