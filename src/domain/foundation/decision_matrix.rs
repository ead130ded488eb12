//! Decision matrix value object - alternatives scored across criteria.

use serde::{Deserialize, Serialize};

use super::ValidationError;

/// A rectangular matrix of alternatives (rows) by criteria (columns).
///
/// Every row holds one real-valued score per criterion. The constructor
/// enforces the structural invariants (at least one row, at least one
/// criterion, all rows the same length), so the analysis functions never
/// observe malformed shapes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecisionMatrix {
    rows: Vec<Vec<f64>>,
}

impl DecisionMatrix {
    /// Builds a matrix from alternative rows.
    ///
    /// # Errors
    /// - `EmptyMatrix` if no rows are supplied
    /// - `EmptyRow` if the first row has no criterion values
    /// - `RaggedRow` if any later row differs in length from the first
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Self, ValidationError> {
        let first = rows.first().ok_or(ValidationError::EmptyMatrix)?;
        if first.is_empty() {
            return Err(ValidationError::EmptyRow { row: 0 });
        }

        let expected = first.len();
        for (index, row) in rows.iter().enumerate().skip(1) {
            if row.len() != expected {
                return Err(ValidationError::RaggedRow {
                    row: index,
                    expected,
                    actual: row.len(),
                });
            }
        }

        Ok(Self { rows })
    }

    /// Number of alternatives (rows).
    pub fn alternative_count(&self) -> usize {
        self.rows.len()
    }

    /// Number of criteria (columns).
    pub fn criterion_count(&self) -> usize {
        self.rows[0].len()
    }

    /// All alternative rows, in order.
    pub fn rows(&self) -> &[Vec<f64>] {
        &self.rows
    }

    /// One alternative's criterion values.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds, like slice indexing.
    pub fn row(&self, index: usize) -> &[f64] {
        &self.rows[index]
    }

    /// The per-criterion maximum across all alternatives (the ideal point).
    pub fn column_max(&self) -> Vec<f64> {
        (0..self.criterion_count())
            .map(|criterion| {
                self.rows
                    .iter()
                    .map(|row| row[criterion])
                    .fold(f64::NEG_INFINITY, f64::max)
            })
            .collect()
    }

    /// Rescales every row to [0, 1] against its own minimum and maximum:
    /// `(value - min(row)) / (max(row) - min(row))`.
    ///
    /// The rescaling is per alternative, not per criterion. A row whose
    /// maximum equals its minimum divides zero by zero and comes back as
    /// all-NaN; the NaN is surfaced as-is, never clamped.
    pub fn normalized(&self) -> DecisionMatrix {
        let rows = self
            .rows
            .iter()
            .map(|row| {
                let min = row.iter().copied().fold(f64::INFINITY, f64::min);
                let max = row.iter().copied().fold(f64::NEG_INFINITY, f64::max);
                let range = max - min;
                row.iter().map(|value| (value - min) / range).collect()
            })
            .collect();

        Self { rows }
    }
}
