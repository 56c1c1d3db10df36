//! Error types returned at the crate boundary.
//!
//! Only caller-supplied input is reported through these types. Broken
//! internal preconditions (an index outside the cache, a cache cell that
//! disagrees with itself) are programming errors and panic instead.

use thiserror::Error;

/// Errors raised while building a [`Path`](crate::Path).
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum PathError {
    #[error("path must contain at least one point")]
    Empty,

    #[error("points must have at least one coordinate")]
    ZeroDimension,

    #[error("expected {expected} values for a {len}x{dim} path, got {actual}")]
    ShapeMismatch {
        len: usize,
        dim: usize,
        expected: usize,
        actual: usize,
    },

    #[error("row {row} has {actual} coordinates, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        actual: usize,
    },

    #[error("non-finite coordinate at row {row}, column {col}")]
    NonFinite { row: usize, col: usize },
}

/// Errors raised when a selection request cannot be satisfied.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum SelectionError {
    #[error("choice budget {n_choices} exceeds path length {path_len}")]
    BudgetExceedsPath { n_choices: usize, path_len: usize },
}
