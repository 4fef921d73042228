//! Core error types shared across the `monkeyc` pipeline crates.

use thiserror::Error;

/// Error surfaced while locating or reading a position within tracked source text.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PositionError {
    /// A line number past the end of the source was requested.
    #[error("invalid line number: {line} (source has {max_lines} lines)")]
    InvalidLine { line: usize, max_lines: usize },
}

/// Result type alias for position lookups.
pub type PositionResult<T> = std::result::Result<T, PositionError>;
