//! Error types for folio.
//!
//! Errors are `thiserror` enums composed through `?` and `From`.
//!
//! # Error Hierarchy
//!
//! - [`AppError`] - Top-level application error
//!   - [`ContentError`] - Portfolio content could not be loaded
//!   - [`ConfigError`](crate::config::ConfigError) - Config file unreadable or malformed
//!   - [`LoggingError`](crate::logging::LoggingError) - Log file could not be set up
//!   - `std::io::Error` - Terminal failures
//!
//! # Recovery Strategy
//!
//! Everything in this module is fatal at startup. Once the UI is running,
//! primitives degrade instead of failing: an empty phrase list renders
//! nothing, an unknown tab id keeps the current tab, and an unmeasured
//! element uses safe defaults until the next layout pass.

use crate::config::ConfigError;
use crate::logging::LoggingError;
use std::path::PathBuf;
use thiserror::Error;

/// Top-level application error.
///
/// Returned from startup and the main loop. Domain errors convert into it
/// via `From`, so `?` works across layers.
#[derive(Debug, Error)]
pub enum AppError {
    /// Configuration could not be loaded.
    ///
    /// **Recovery**: Print the error and exit. A missing config file is not
    /// an error and never reaches this variant.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Portfolio content could not be loaded.
    ///
    /// **Recovery**: Print the error and exit. Without `--content` the
    /// builtin portfolio is used, so this only happens for user files.
    #[error("Content error: {0}")]
    Content(#[from] ContentError),

    /// Log file setup failed.
    #[error("Logging error: {0}")]
    Logging(#[from] LoggingError),

    /// Terminal or TUI rendering error.
    ///
    /// **Recovery**: Restore the terminal, then exit with the error on stderr.
    #[error("Terminal error: {0}")]
    Terminal(#[from] std::io::Error),
}

/// Errors loading portfolio content from disk.
#[derive(Debug, Error)]
pub enum ContentError {
    /// The content file could not be read.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::path::PathBuf;
    /// use folio::model::error::ContentError;
    ///
    /// let err = ContentError::Read {
    ///     path: PathBuf::from("/tmp/missing.toml"),
    ///     source: std::io::Error::from(std::io::ErrorKind::NotFound),
    /// };
    /// assert!(err.to_string().contains("/tmp/missing.toml"));
    /// ```
    #[error("Failed to read content file {path}: {source}")]
    Read {
        /// Path of the file that could not be read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The file was read but is not a valid portfolio document.
    ///
    /// `reason` carries the deserializer's message, which includes the
    /// offending line or key.
    #[error("Failed to parse content file {path}: {reason}")]
    Parse {
        /// Path of the file that failed to parse.
        path: PathBuf,
        /// Deserializer error message.
        reason: String,
    },

    /// The file extension is neither `.toml` nor `.json`.
    #[error("Unsupported content format: {0} (expected .toml or .json)")]
    UnsupportedFormat(PathBuf),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn content_error_converts_into_app_error() {
        fn load() -> Result<(), AppError> {
            Err(ContentError::UnsupportedFormat(PathBuf::from("site.yaml")))?;
            Ok(())
        }

        let err = load().unwrap_err();
        assert!(matches!(err, AppError::Content(_)));
        assert!(err.to_string().contains("site.yaml"));
    }

    #[test]
    fn parse_error_mentions_reason() {
        let err = ContentError::Parse {
            path: PathBuf::from("site.toml"),
            reason: "missing field `profile`".to_string(),
        };
        assert!(err.to_string().contains("missing field `profile`"));
    }

    #[test]
    fn io_error_converts_into_terminal_error() {
        let err: AppError = std::io::Error::other("broken pipe").into();
        assert!(matches!(err, AppError::Terminal(_)));
    }
}
