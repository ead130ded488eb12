//! Error types for the decision-analysis domain.

use thiserror::Error;

/// Errors that occur during value object construction.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Decision matrix must contain at least one alternative")]
    EmptyMatrix,

    #[error("Alternative {row} has no criterion values")]
    EmptyRow { row: usize },

    #[error("Alternative {row} has {actual} criterion values, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        actual: usize,
    },

    #[error("Priority vector cannot be empty")]
    EmptyPriorities,
}

/// Errors raised while scoring alternatives.
///
/// Numeric edge cases (degenerate normalization, fractional powers of
/// negative values) are not errors: they propagate as NaN in the output.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvaluationError {
    #[error("Priority vector has {priorities} weights but the matrix has {criteria} criteria")]
    ShapeMismatch { criteria: usize, priorities: usize },
}
