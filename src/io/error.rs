//! Error types and context helpers for loading, solving and exporting

use std::fmt;
use std::path::{Path, PathBuf};

/// Main error type for all crossword operations
///
/// An unsolvable puzzle is not an error; `solve` reports it as `Ok(None)`.
#[derive(Debug)]
pub enum CrosswordError {
    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Structure text cannot describe a rectangular grid
    InvalidStructure {
        /// Description of what's wrong with the structure
        reason: String,
    },

    /// Parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Failed to save a rendered grid to disk
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image export error
        source: image::ImageError,
    },

    /// The puzzle model or domain store broke one of its construction invariants
    ///
    /// Signals a defect in model construction rather than a search outcome, so
    /// the solver stops immediately instead of backtracking.
    InvariantViolation {
        /// Description of the broken invariant
        reason: String,
    },
}

impl fmt::Display for CrosswordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
            Self::InvalidStructure { reason } => {
                write!(f, "Invalid structure: {reason}")
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::ImageExport { path, source } => {
                write!(
                    f,
                    "Failed to export image to '{}': {source}",
                    path.display()
                )
            }
            Self::InvariantViolation { reason } => {
                write!(f, "Internal invariant violated: {reason}")
            }
        }
    }
}

impl std::error::Error for CrosswordError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::FileSystem { source, .. } => Some(source),
            Self::ImageExport { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for crossword results
pub type Result<T> = std::result::Result<T, CrosswordError>;

impl From<std::io::Error> for CrosswordError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from("<unknown>"),
            operation: "unknown",
            source: err,
        }
    }
}

impl From<image::ImageError> for CrosswordError {
    fn from(err: image::ImageError) -> Self {
        Self::ImageExport {
            path: PathBuf::from("<unknown>"),
            source: err,
        }
    }
}

/// Attaches the path and operation to failed file system calls
pub trait WithPath<T> {
    /// Convert an I/O failure into a `FileSystem` error naming `path`
    ///
    /// # Errors
    ///
    /// Propagates the original error with the path and operation applied
    fn with_path(self, path: &Path, operation: &'static str) -> Result<T>;
}

impl<T> WithPath<T> for std::result::Result<T, std::io::Error> {
    fn with_path(self, path: &Path, operation: &'static str) -> Result<T> {
        self.map_err(|source| CrosswordError::FileSystem {
            path: path.to_path_buf(),
            operation,
            source,
        })
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> CrosswordError {
    CrosswordError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create an invariant violation error
pub fn invariant_violation(reason: &impl ToString) -> CrosswordError {
    CrosswordError::InvariantViolation {
        reason: reason.to_string(),
    }
}
