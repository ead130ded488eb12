//! Priority vector value object - criterion weights and their normalization.

use serde::{Deserialize, Serialize};

use super::ValidationError;

/// Relative criterion importance, one weight per criterion.
///
/// The raw weights are kept as supplied; scoring methods consume the
/// sum-to-one form produced by [`PriorityVector::normalized`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PriorityVector(Vec<f64>);

impl PriorityVector {
    /// Creates a priority vector, rejecting an empty weight list.
    pub fn new(weights: Vec<f64>) -> Result<Self, ValidationError> {
        if weights.is_empty() {
            return Err(ValidationError::EmptyPriorities);
        }
        Ok(Self(weights))
    }

    /// Number of weights. Must equal the matrix criterion count for scoring.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True when the vector has no weights (never, after construction).
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The weights in criterion order.
    pub fn weights(&self) -> &[f64] {
        &self.0
    }

    /// Rescales the weights so they sum to one.
    ///
    /// A vector whose weights sum to exactly zero is returned unchanged:
    /// zero weights stay zero rather than becoming undefined. Any nonzero
    /// sum (including a negative one) divides per the formula, so repeated
    /// normalization is idempotent.
    pub fn normalized(&self) -> PriorityVector {
        let sum: f64 = self.0.iter().sum();
        if sum == 0.0 {
            return self.clone();
        }
        Self(self.0.iter().map(|w| w / sum).collect())
    }
}
