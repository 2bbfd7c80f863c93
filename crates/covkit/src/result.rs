//! Result and error types for Covkit.

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Result type for Covkit operations
pub type CovkitResult<T> = Result<T, CovkitError>;

/// Errors that can occur while configuring, recording or merging coverage
#[derive(Debug, Error)]
pub enum CovkitError {
    /// Analysis configuration could not be parsed
    #[error("Invalid coverage configuration {}: {message}", path.display())]
    Yaml {
        /// Configuration file path
        path: PathBuf,
        /// Parser message
        message: String,
    },

    /// A result directory has no `.resultset.json`
    #[error("Result set not found: {}", path.display())]
    ResultSetMissing {
        /// Expected result-set path
        path: PathBuf,
    },

    /// Merge was requested with nothing to merge
    #[error("No input directories given to merge")]
    NoInputs,

    /// The same file was measured with different line counts
    #[error("Line count mismatch for {file}: {left} vs {right} lines")]
    LineCountMismatch {
        /// Source file path
        file: String,
        /// Lines in the accumulated record
        left: usize,
        /// Lines in the incoming record
        right: usize,
    },

    /// Output file could not be moved into place
    #[error("Failed to persist {}: {message}", path.display())]
    Persist {
        /// Destination path
        path: PathBuf,
        /// Error message
        message: String,
    },

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl CovkitError {
    /// Create a configuration parse error
    #[must_use]
    pub fn yaml(path: &Path, message: impl Into<String>) -> Self {
        Self::Yaml {
            path: path.to_path_buf(),
            message: message.into(),
        }
    }

    /// Create a missing result-set error
    #[must_use]
    pub fn result_set_missing(path: &Path) -> Self {
        Self::ResultSetMissing {
            path: path.to_path_buf(),
        }
    }

    /// Create a persist error
    #[must_use]
    pub fn persist(path: &Path, message: impl Into<String>) -> Self {
        Self::Persist {
            path: path.to_path_buf(),
            message: message.into(),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn test_yaml_error_mentions_path() {
        let err = CovkitError::yaml(Path::new("cov.yml"), "missing field");
        let msg = err.to_string();
        assert!(msg.contains("cov.yml"));
        assert!(msg.contains("missing field"));
    }

    #[test]
    fn test_result_set_missing() {
        let err = CovkitError::result_set_missing(Path::new("run1/.resultset.json"));
        assert!(err.to_string().contains("run1/.resultset.json"));
    }

    #[test]
    fn test_line_count_mismatch() {
        let err = CovkitError::LineCountMismatch {
            file: "f.rb".to_string(),
            left: 3,
            right: 4,
        };
        assert_eq!(err.to_string(), "Line count mismatch for f.rb: 3 vs 4 lines");
    }

    #[test]
    fn test_io_error_from() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: CovkitError = io_err.into();
        assert!(err.to_string().contains("I/O"));
    }

    #[test]
    fn test_json_error_from() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: CovkitError = json_err.into();
        assert!(err.to_string().starts_with("JSON error"));
    }
}
