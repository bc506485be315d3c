//! Error types for truth table construction and analysis.

use thiserror::Error;

/// Result type alias.
pub type Result<T> = std::result::Result<T, Error>;

/// Precondition violations detected at the boundary of the analyzer.
///
/// The analysis itself is total; every variant here describes malformed
/// input that would otherwise silently produce garbage.
#[derive(Error, Debug)]
pub enum Error {
    #[error("too many variables: {num_vars} (at most {max} supported)")]
    TooManyVariables { num_vars: usize, max: usize },

    #[error("invalid truth table shape: expected {expected} rows, got {actual}")]
    InvalidShape { expected: usize, actual: usize },

    #[error("invalid width of row {row}: expected {expected} columns, got {actual}")]
    InvalidRowWidth { row: usize, expected: usize, actual: usize },

    #[error("invalid value {value} in row {row}, column {column}: expected 0 or 1")]
    InvalidValue { row: usize, column: usize, value: u8 },

    #[error("row {row} is out of order: its inputs must spell {row} in binary")]
    RowOrder { row: usize },

    #[error("arity mismatch: expected {expected} variables, got a function of {actual}")]
    ArityMismatch { expected: usize, actual: usize },

    #[error("index out of range: {index} does not fit into {size} rows")]
    IndexOutOfRange { index: usize, size: usize },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
