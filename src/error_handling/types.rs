//! Error type definitions.
//!
//! This module defines all error types used throughout the application.

use std::path::PathBuf;

use log::SetLoggerError;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),
}

/// Error types for building and rendering a race report.
///
/// Malformed input lines and codes missing from one of the sources are not
/// errors; they are skipped while parsing or joining.
#[derive(Error, Debug)]
pub enum ReportError {
    /// One of the input files is missing or unreadable.
    #[error("Failed to read {}: {source}", .path.display())]
    Io {
        /// Path of the file that could not be read
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The `--file` argument did not name exactly three paths.
    #[error("Expected three space-separated paths (roster, start log, end log), got {0:?}")]
    InvalidFileList(String),

    /// No participant in the report has the requested full name.
    #[error("No result found for driver '{0}'")]
    DriverNotFound(String),

    /// JSON rendering failed.
    #[error("JSON serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl ReportError {
    /// Wraps an I/O error together with the path that caused it.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ReportError::Io {
            path: path.into(),
            source,
        }
    }
}
