//! Error types for leafkit.
//!
//! Every fallible operation in the workspace returns [`Result`]. Filesystem
//! errors carry the path they concern so callers never have to guess which
//! side of a copy failed.

use std::path::{Path, PathBuf};

use thiserror::Error;

/// Result type alias for leafkit operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in leafkit.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// I/O error without path context.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// I/O error tied to a specific path.
    #[error("I/O error at {}: {source}", path.display())]
    IoWithPath {
        /// Path being operated on
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// A path that was required to exist does not.
    #[error("Not found: {}", .0.display())]
    NotFound(PathBuf),

    /// A path was expected to be a directory.
    #[error("Not a directory: {}", .0.display())]
    NotADirectory(PathBuf),

    /// A destination exists and the operation refuses to replace it.
    #[error("Already exists: {}", .0.display())]
    AlreadyExists(PathBuf),

    /// Environment or configuration problem.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Input could not be parsed.
    #[error("Parse error: {0}")]
    Parse(String),

    /// Invalid glob or match pattern.
    #[error("Invalid pattern: {0}")]
    Pattern(String),

    /// An operation failed for a reason that is not an I/O error.
    #[error("Operation failed: {0}")]
    Operation(String),

    /// Struct validation found required fields without a value.
    #[error("Required fields are empty: [{}]", .0.join(", "))]
    RequiredFieldsEmpty(Vec<String>),
}

impl Error {
    /// Wrap an I/O error with the path it occurred on.
    pub fn io_with_path(source: std::io::Error, path: impl AsRef<Path>) -> Self {
        Error::IoWithPath {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    /// Create a not-found error.
    pub fn not_found(path: impl AsRef<Path>) -> Self {
        Error::NotFound(path.as_ref().to_path_buf())
    }

    /// Create a configuration error.
    pub fn config<S: Into<String>>(message: S) -> Self {
        Error::Config(message.into())
    }

    /// Create a parse error.
    pub fn parse<S: Into<String>>(message: S) -> Self {
        Error::Parse(message.into())
    }

    /// Create a pattern error.
    pub fn pattern<S: Into<String>>(message: S) -> Self {
        Error::Pattern(message.into())
    }

    /// Create an operation error.
    pub fn operation<S: Into<String>>(message: S) -> Self {
        Error::Operation(message.into())
    }

    /// Returns whether this error means "the path does not exist".
    pub fn is_not_found(&self) -> bool {
        match self {
            Error::NotFound(_) => true,
            Error::Io(e) | Error::IoWithPath { source: e, .. } => {
                e.kind() == std::io::ErrorKind::NotFound
            }
            _ => false,
        }
    }

    /// The path this error concerns, if it carries one.
    pub fn path(&self) -> Option<&Path> {
        match self {
            Error::IoWithPath { path, .. }
            | Error::NotFound(path)
            | Error::NotADirectory(path)
            | Error::AlreadyExists(path) => Some(path),
            _ => None,
        }
    }
}
