//! Error types for the oa-align crate.

use std::collections::TryReserveError;
use std::fmt;

/// Which argument of a two-input call an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputPosition {
    First,
    Second,
}

impl fmt::Display for InputPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::First => f.write_str("first"),
            Self::Second => f.write_str("second"),
        }
    }
}

/// Alignment-specific error types.
#[derive(Debug, thiserror::Error)]
pub enum AlignError {
    /// A text argument was absent.
    #[error("{position} input is missing")]
    MissingInput { position: InputPosition },

    /// A text argument is not valid UTF-8.
    #[error("{position} input is not valid UTF-8: {source}")]
    Decode {
        position: InputPosition,
        #[source]
        source: std::str::Utf8Error,
    },

    /// Scratch buffers for the recurrence could not be reserved.
    #[error("failed to allocate {cells} alignment cells: {source}")]
    Allocation {
        cells: usize,
        #[source]
        source: TryReserveError,
    },

    /// A cost configuration document could not be parsed.
    #[error("invalid alignment options: {0}")]
    Options(#[from] serde_json::Error),
}

/// Convenience result type for oa-align operations.
pub type AlignResult<T> = Result<T, AlignError>;
