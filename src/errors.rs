//! Error types for the driver and configuration layers.
//!
//! The counted-value core is total and never fails. Everything here covers
//! the edges: reading configuration, validating driver input, and writing
//! output.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for counted operations
#[derive(Debug, Error)]
pub enum Error {
    /// File system related errors
    #[error("File system error: {message}")]
    FileSystem {
        message: String,
        path: Option<PathBuf>,
        #[source]
        source: Option<std::io::Error>,
    },

    /// Configuration errors
    #[error("Configuration error in {}: {message}", .path.display())]
    Configuration { message: String, path: PathBuf },

    /// Driver input errors
    #[error("Validation error: {0}")]
    Validation(String),

    /// Output errors
    #[error("Output error ({destination}): {message}")]
    Output {
        destination: String,
        message: String,
    },
}

impl Error {
    /// Create a file system error wrapping the underlying I/O failure
    pub fn file_system(
        message: impl Into<String>,
        path: impl Into<PathBuf>,
        source: std::io::Error,
    ) -> Self {
        Self::FileSystem {
            message: message.into(),
            path: Some(path.into()),
            source: Some(source),
        }
    }

    /// Create a configuration error for a specific file
    pub fn configuration(message: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self::Configuration {
            message: message.into(),
            path: path.into(),
        }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    pub fn output(destination: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Output {
            destination: destination.into(),
            message: message.into(),
        }
    }
}

/// Result alias using the crate error type
pub type Result<T> = std::result::Result<T, Error>;
