//! Foundation module - Shared domain primitives.
//!
//! Contains the value objects and error types that form the vocabulary
//! of the decision-analysis domain.

mod decision_matrix;
mod errors;
mod priority_vector;

pub use decision_matrix::DecisionMatrix;
pub use errors::{EvaluationError, ValidationError};
pub use priority_vector::PriorityVector;
