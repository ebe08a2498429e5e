//! Errors used throughout the crate.
//!
//! `BoardError` covers malformed input and out-of-range access on the grid
//! model. `SearchError` is only produced when a search is configured with a
//! stop flag or a memo ceiling; the default configuration never fails.

use thiserror::Error;

/// Failures raised by the board model and its parsing utilities.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BoardError {
    /// A board literal had the wrong shape or an unknown cell symbol.
    ///
    /// Recoverable: callers are expected to report it and carry on.
    #[error("invalid board configuration: {reason}")]
    InvalidConfiguration { reason: String },

    /// A cell query fell outside the 8x8 grid.
    ///
    /// Treated as a programming error by callers.
    #[error("cell ({row}, {col}) is outside the 8x8 board")]
    OutOfRange { row: usize, col: usize },

    /// Move notation such as `D2` could not be parsed.
    #[error("invalid move notation: {0}")]
    InvalidNotation(String),
}

/// Failures surfaced by an opted-in search limit.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    #[error("search cancelled after {nodes} nodes")]
    Cancelled { nodes: u64 },

    #[error("transposition memo exceeded its ceiling at {memo_entries} entries")]
    ResourceExhausted { memo_entries: usize },
}

impl BoardError {
    pub(crate) fn invalid(reason: impl Into<String>) -> Self {
        BoardError::InvalidConfiguration {
            reason: reason.into(),
        }
    }
}
