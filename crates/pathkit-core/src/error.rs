//! Error types and exit codes for pathkit
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure
//! - 2: Usage error (bad flags/args, misuse of a ring handle or graph)
//! - 3: Data error (malformed grid or number input)

mod macros;

use thiserror::Error;

use crate::ring::ListId;

/// Exit codes used by the pathkit binary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args or API misuse (2)
    Usage = 2,
    /// Data error - malformed input (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur during pathkit operations
#[derive(Error, Debug)]
pub enum PathkitError {
    // Ring usage errors (exit code 2)
    #[error("operation requires a non-empty ring")]
    EmptyRing,

    #[error("element belongs to ring {found}, not ring {expected}")]
    ForeignElement { expected: ListId, found: ListId },

    #[error("element was removed from the ring and can no longer be used")]
    StaleElement,

    #[error("cannot insert an element next to itself")]
    SelfInsertion,

    #[error("no element matched the predicate within one lap of the ring")]
    NoMatch,

    // Graph usage errors (exit code 2)
    #[error("graph does not implement {operation}")]
    Unsupported { operation: String },

    #[error("{0}")]
    UsageError(String),

    #[error("invalid {context}: {value}")]
    InvalidValue { context: String, value: String },

    // Data errors (exit code 3)
    #[error("invalid grid at line {line}: {reason}")]
    InvalidGrid { line: usize, reason: String },

    #[error("invalid number at line {line}: {value:?}")]
    InvalidNumber { line: usize, value: String },

    // Generic failures (exit code 1)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("{0}")]
    Other(String),
}

impl PathkitError {
    /// Create an error for a graph operation the implementor did not provide
    pub fn unsupported(operation: &str) -> Self {
        PathkitError::Unsupported {
            operation: operation.to_string(),
        }
    }

    /// Create an error for an invalid value or configuration
    pub fn invalid_value(context: &str, value: impl std::fmt::Display) -> Self {
        PathkitError::InvalidValue {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Create an error for a malformed grid line (1-based)
    pub fn invalid_grid(line: usize, reason: impl Into<String>) -> Self {
        PathkitError::InvalidGrid {
            line,
            reason: reason.into(),
        }
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            PathkitError::EmptyRing
            | PathkitError::ForeignElement { .. }
            | PathkitError::StaleElement
            | PathkitError::SelfInsertion
            | PathkitError::NoMatch
            | PathkitError::Unsupported { .. }
            | PathkitError::UsageError(_)
            | PathkitError::InvalidValue { .. } => ExitCode::Usage,

            PathkitError::InvalidGrid { .. } | PathkitError::InvalidNumber { .. } => {
                ExitCode::Data
            }

            PathkitError::Io(_)
            | PathkitError::Json(_)
            | PathkitError::Toml(_)
            | PathkitError::Other(_) => ExitCode::Failure,
        }
    }

    /// Get the error type identifier
    fn error_type(&self) -> &'static str {
        match self {
            PathkitError::EmptyRing => "empty_ring",
            PathkitError::ForeignElement { .. } => "foreign_element",
            PathkitError::StaleElement => "stale_element",
            PathkitError::SelfInsertion => "self_insertion",
            PathkitError::NoMatch => "no_match",
            PathkitError::Unsupported { .. } => "unsupported",
            PathkitError::UsageError(_) => "usage_error",
            PathkitError::InvalidValue { .. } => "invalid_value",
            PathkitError::InvalidGrid { .. } => "invalid_grid",
            PathkitError::InvalidNumber { .. } => "invalid_number",
            PathkitError::Io(_) => "io_error",
            PathkitError::Json(_) => "json_error",
            PathkitError::Toml(_) => "toml_error",
            PathkitError::Other(_) => "other",
        }
    }

    /// Convert error to JSON representation for structured error output.
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "error": {
                "code": self.exit_code() as i32,
                "type": self.error_type(),
                "message": self.to_string(),
            }
        })
    }
}

/// Result type alias for pathkit operations
pub type Result<T> = std::result::Result<T, PathkitError>;
