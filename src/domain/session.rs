//! Decision session - owns one matrix/priority pair and runs analyses on it.

use tracing::debug;

use crate::domain::analysis::{ParetoAnalysis, ParetoAnalyzer, ScalarizationMethod};
use crate::domain::foundation::{DecisionMatrix, EvaluationError, PriorityVector};

/// A single decision-analysis session.
///
/// Owns the alternatives matrix and the raw priority vector supplied by the
/// presentation layer. The scoring itself lives in pure functions (see
/// [`crate::domain::analysis`]); the session re-derives normalized
/// priorities on every evaluation, so results never depend on which
/// operations ran before. Its one mutation is
/// [`DecisionSession::normalize_alternatives`], which replaces the stored
/// matrix.
#[derive(Debug, Clone)]
pub struct DecisionSession {
    alternatives: DecisionMatrix,
    priorities: PriorityVector,
}

impl DecisionSession {
    /// Creates a session over a matrix and a raw priority vector.
    ///
    /// Shape is not checked at construction; a priority/criterion length
    /// mismatch surfaces from the evaluation call, before any computation.
    pub fn new(alternatives: DecisionMatrix, priorities: PriorityVector) -> Self {
        Self {
            alternatives,
            priorities,
        }
    }

    /// The alternatives matrix in its current (possibly normalized) state.
    pub fn alternatives(&self) -> &DecisionMatrix {
        &self.alternatives
    }

    /// The raw priority vector.
    pub fn priorities(&self) -> &PriorityVector {
        &self.priorities
    }

    /// Replaces the priority vector for subsequent evaluations.
    pub fn set_priorities(&mut self, priorities: PriorityVector) {
        self.priorities = priorities;
    }

    /// Scores every alternative under `method`, one f0 per row.
    ///
    /// # Errors
    /// `ShapeMismatch` when the priority vector length differs from the
    /// matrix criterion count.
    pub fn evaluate(&self, method: ScalarizationMethod) -> Result<Vec<f64>, EvaluationError> {
        let scores = method.score(&self.alternatives, &self.priorities)?;

        debug!(
            method = method.label(),
            alternatives = scores.len(),
            "computed scalarization scores"
        );

        Ok(scores)
    }

    /// Replaces the stored matrix with its row-wise min-max normalization.
    ///
    /// Degenerate rows (max == min) come back as NaN; see
    /// [`DecisionMatrix::normalized`].
    pub fn normalize_alternatives(&mut self) {
        self.alternatives = self.alternatives.normalized();

        debug!(
            alternatives = self.alternatives.alternative_count(),
            "normalized alternatives matrix"
        );
    }

    /// Runs the Pareto pass: dominance matrix plus elite tiers.
    pub fn pareto(&self) -> ParetoAnalysis {
        let analysis = ParetoAnalyzer::analyze(&self.alternatives);

        debug!(
            alternatives = analysis.dominance.size(),
            tiers = analysis.tiers.len(),
            "completed Pareto analysis"
        );

        analysis
    }
}
