//! Error types for the roster library.

use std::path::{Path, PathBuf};

use thiserror::Error;

/// Comprehensive error type for all roster operations.
#[derive(Error, Debug)]
pub enum RosterError {
    /// Invalid input validation errors
    #[error("Invalid input for field '{field}': {reason}")]
    InvalidInput { field: String, reason: String },
    /// File system operation errors
    #[error("File system error at path '{path}': {source}")]
    FileSystem {
        path: PathBuf,
        source: std::io::Error,
    },
    /// Serialization/deserialization errors
    #[error("Serialization error: {source}")]
    Serialization {
        #[from]
        source: serde_json::Error,
    },
    /// XDG directory specification errors
    #[error("XDG directory error: {0}")]
    XdgDirectory(String),
    /// Background task execution errors
    #[error("Runtime error: {message}")]
    Runtime { message: String },
}

/// Builder for creating input validation errors.
pub struct InvalidInputBuilder {
    field: String,
}

impl InvalidInputBuilder {
    /// Create a new invalid input error builder for a field.
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
        }
    }

    /// Build the error with the given reason.
    pub fn with_reason(self, reason: impl Into<String>) -> RosterError {
        RosterError::InvalidInput {
            field: self.field,
            reason: reason.into(),
        }
    }
}

impl RosterError {
    /// Creates a builder for input validation errors.
    pub fn invalid_input(field: impl Into<String>) -> InvalidInputBuilder {
        InvalidInputBuilder::new(field)
    }

    /// Creates a runtime error from a failed background task.
    pub fn runtime(message: impl Into<String>) -> Self {
        Self::Runtime {
            message: message.into(),
        }
    }
}

/// Extension trait for I/O Results to attach the path they touched.
pub trait PathResultExt<T> {
    /// Map an I/O error to a file system error at the given path.
    fn path_context(self, path: &Path) -> Result<T>;
}

impl<T> PathResultExt<T> for std::result::Result<T, std::io::Error> {
    fn path_context(self, path: &Path) -> Result<T> {
        self.map_err(|source| RosterError::FileSystem {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// Result type alias for roster operations
pub type Result<T> = std::result::Result<T, RosterError>;
