//! Scalarization methods - reducing a multi-criteria row to a single score.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{DecisionMatrix, EvaluationError, PriorityVector};

/// A scalarization strategy mapping (matrix, priorities) to one f0 score
/// per alternative.
///
/// All five methods normalize the priority vector first (see
/// [`PriorityVector::normalized`]) and leave the matrix untouched. For four
/// of the methods a larger f0 is better; `IdealPointDistance` inverts that
/// sense, see the variant documentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ScalarizationMethod {
    /// Weighted linear sum: `f0 = Σ a[i] * p[i]`.
    Additive,
    /// Product of weighted criteria: `f0 = Π p[i] * a[i]`.
    Multiplicative,
    /// Geometric-mean style: `f0 = Π (p[i] * a[i])^(1/C)`. A negative
    /// weighted criterion puts a fractional power over a negative base,
    /// which comes back from `f64::powf` as NaN and is returned as-is.
    CobbDouglas,
    /// Priorities act as minimum acceptability thresholds rather than
    /// weights: an alternative meeting every threshold (`a[i] >= p[i]` for
    /// all i) scores its first criterion value, any other scores 0.
    Threshold,
    /// Weighted Euclidean distance to the ideal point (the per-criterion
    /// maximum over all alternatives): `f0 = sqrt(Σ p[i] * (ideal[i] -
    /// a[i])^2)`. Smaller is better, unlike the other four methods.
    IdealPointDistance,
}

impl ScalarizationMethod {
    /// Every method, in presentation order.
    pub const ALL: [ScalarizationMethod; 5] = [
        ScalarizationMethod::Additive,
        ScalarizationMethod::Multiplicative,
        ScalarizationMethod::CobbDouglas,
        ScalarizationMethod::Threshold,
        ScalarizationMethod::IdealPointDistance,
    ];

    /// Returns the display label.
    pub fn label(&self) -> &'static str {
        match self {
            ScalarizationMethod::Additive => "Additive",
            ScalarizationMethod::Multiplicative => "Multiplicative",
            ScalarizationMethod::CobbDouglas => "Cobb-Douglas",
            ScalarizationMethod::Threshold => "Threshold",
            ScalarizationMethod::IdealPointDistance => "Ideal-Point Distance",
        }
    }

    /// Scores every alternative, returning one f0 per row in row order.
    ///
    /// The raw priority vector is normalized fresh on every call, so a
    /// score never depends on earlier invocations.
    ///
    /// # Errors
    /// `ShapeMismatch` when the priority vector length differs from the
    /// matrix criterion count. The check runs before any computation; it is
    /// the only defined failure. NaN produced by degenerate input (see the
    /// variant docs) is propagated in the score vector, not caught.
    pub fn score(
        &self,
        matrix: &DecisionMatrix,
        priorities: &PriorityVector,
    ) -> Result<Vec<f64>, EvaluationError> {
        if priorities.len() != matrix.criterion_count() {
            return Err(EvaluationError::ShapeMismatch {
                criteria: matrix.criterion_count(),
                priorities: priorities.len(),
            });
        }

        let normalized = priorities.normalized();
        let weights = normalized.weights();

        let scores = match self {
            ScalarizationMethod::Additive => Self::additive(matrix, weights),
            ScalarizationMethod::Multiplicative => Self::multiplicative(matrix, weights),
            ScalarizationMethod::CobbDouglas => Self::cobb_douglas(matrix, weights),
            ScalarizationMethod::Threshold => Self::threshold(matrix, weights),
            ScalarizationMethod::IdealPointDistance => Self::ideal_point_distance(matrix, weights),
        };

        Ok(scores)
    }

    fn additive(matrix: &DecisionMatrix, weights: &[f64]) -> Vec<f64> {
        matrix
            .rows()
            .iter()
            .map(|row| row.iter().zip(weights).map(|(a, p)| a * p).sum())
            .collect()
    }

    fn multiplicative(matrix: &DecisionMatrix, weights: &[f64]) -> Vec<f64> {
        matrix
            .rows()
            .iter()
            .map(|row| row.iter().zip(weights).map(|(a, p)| a * p).product())
            .collect()
    }

    fn cobb_douglas(matrix: &DecisionMatrix, weights: &[f64]) -> Vec<f64> {
        let exponent = 1.0 / weights.len() as f64;
        matrix
            .rows()
            .iter()
            .map(|row| {
                row.iter()
                    .zip(weights)
                    .map(|(a, p)| (a * p).powf(exponent))
                    .product()
            })
            .collect()
    }

    fn threshold(matrix: &DecisionMatrix, weights: &[f64]) -> Vec<f64> {
        matrix
            .rows()
            .iter()
            .map(|row| {
                let meets_all = row.iter().zip(weights).all(|(a, p)| a >= p);
                if meets_all {
                    row[0]
                } else {
                    0.0
                }
            })
            .collect()
    }

    fn ideal_point_distance(matrix: &DecisionMatrix, weights: &[f64]) -> Vec<f64> {
        let ideal = matrix.column_max();
        matrix
            .rows()
            .iter()
            .map(|row| {
                row.iter()
                    .zip(&ideal)
                    .zip(weights)
                    .map(|((a, i), p)| p * (i - a).powi(2))
                    .sum::<f64>()
                    .sqrt()
            })
            .collect()
    }
}
