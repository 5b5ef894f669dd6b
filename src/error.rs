//! Error types for rcheck-validate.
//!
//! Uses thiserror for derive macros and provides user-actionable error messages.

use crate::exit_codes;
use std::path::PathBuf;
use thiserror::Error;

/// Main error type for check log validation.
#[derive(Error, Debug)]
pub enum CheckError {
    /// The tool was invoked outside the directory holding the check output.
    #[error("{0}")]
    Precondition(String),

    /// The log file could not be opened or read.
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// An allow-list entry is not a valid regular expression.
    #[error("invalid allow-list pattern '{pattern}': {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    /// A log line matched no allowed pattern.
    #[error("Illegal output found in {} at line {line_number}", .path.display())]
    ValidationFailure { path: PathBuf, line_number: usize },
}

impl CheckError {
    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            CheckError::Precondition(_) => exit_codes::USER_ERROR,
            CheckError::Io { .. } => exit_codes::USER_ERROR,
            CheckError::InvalidPattern { .. } => exit_codes::USER_ERROR,
            CheckError::ValidationFailure { .. } => exit_codes::VALIDATION_FAILURE,
        }
    }

    /// Wrap an IO error with the path it occurred on.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        CheckError::Io {
            path: path.into(),
            source,
        }
    }
}

/// Result type alias for validation operations.
pub type Result<T> = std::result::Result<T, CheckError>;
