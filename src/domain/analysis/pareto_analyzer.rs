//! Pareto analyzer - strict-dominance detection and elite-tier ranking.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::domain::foundation::DecisionMatrix;

/// Square boolean matrix recording pairwise strict dominance.
///
/// Entry (i, j) is true iff alternative i is strictly better than
/// alternative j on every criterion. The diagonal is always false.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DominanceMatrix {
    entries: Vec<Vec<bool>>,
}

impl DominanceMatrix {
    /// Number of alternatives (the matrix is size × size).
    pub fn size(&self) -> usize {
        self.entries.len()
    }

    /// Whether alternative `i` strictly dominates alternative `j`.
    ///
    /// # Panics
    /// Panics if either index is out of bounds, like slice indexing.
    pub fn dominates(&self, i: usize, j: usize) -> bool {
        self.entries[i][j]
    }

    /// How many alternatives `i` dominates.
    pub fn dominance_count(&self, i: usize) -> usize {
        self.entries[i].iter().filter(|&&d| d).count()
    }
}

/// Alternatives grouped by how many others they dominate.
///
/// The map is keyed by dominance count in ascending order; members are
/// 0-based alternative indices in ascending order. The 1-indexed display
/// label of a tier is `count + 1` ("1st elite", "2nd elite", ...).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EliteTiers {
    tiers: BTreeMap<usize, Vec<usize>>,
}

impl EliteTiers {
    /// Number of distinct tiers.
    pub fn len(&self) -> usize {
        self.tiers.len()
    }

    /// True when no alternatives have been grouped.
    pub fn is_empty(&self) -> bool {
        self.tiers.is_empty()
    }

    /// The alternatives sharing `dominance_count`, if any.
    pub fn members(&self, dominance_count: usize) -> Option<&[usize]> {
        self.tiers.get(&dominance_count).map(Vec::as_slice)
    }

    /// Iterates tiers in ascending dominance-count order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &[usize])> + '_ {
        self.tiers
            .iter()
            .map(|(count, members)| (*count, members.as_slice()))
    }

    /// The 1-indexed display label for a tier.
    pub fn label(dominance_count: usize) -> usize {
        dominance_count + 1
    }
}

/// Result of a full Pareto pass: the dominance matrix and the elite tiers
/// derived from it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParetoAnalysis {
    pub dominance: DominanceMatrix,
    pub tiers: EliteTiers,
}

/// Pareto dominance analysis functions.
pub struct ParetoAnalyzer;

impl ParetoAnalyzer {
    /// Runs the full analysis: dominance matrix plus elite tiers.
    ///
    /// Priorities play no role here; dominance is judged on the raw
    /// criterion values alone. O(R²·C) pairwise comparison, sized for the
    /// small alternative counts of the domain.
    pub fn analyze(matrix: &DecisionMatrix) -> ParetoAnalysis {
        let dominance = Self::dominance_matrix(matrix);
        let tiers = Self::elite_tiers(&dominance);
        ParetoAnalysis { dominance, tiers }
    }

    /// Builds the pairwise strict-dominance matrix.
    ///
    /// Alternative i dominates alternative j iff `a_i[k] > a_j[k]` for ALL
    /// k, strict on every criterion with no ties allowed. An alternative never
    /// dominates itself.
    ///
    /// # Edge Cases
    /// - Single alternative: 1×1 all-false matrix
    /// - Equal rows: neither dominates, both entries stay false
    /// - NaN criterion values: every comparison is false, so the row
    ///   dominates nothing and nothing dominates it
    pub fn dominance_matrix(matrix: &DecisionMatrix) -> DominanceMatrix {
        let size = matrix.alternative_count();
        let mut entries = vec![vec![false; size]; size];

        for i in 0..size {
            for j in 0..size {
                if i != j {
                    entries[i][j] = Self::strictly_dominates(matrix.row(i), matrix.row(j));
                }
            }
        }

        DominanceMatrix { entries }
    }

    /// Groups alternatives into elite tiers by dominance count.
    ///
    /// One deterministic pass: each alternative's count of dominated
    /// alternatives keys it into a sorted map. The top of the ranking is
    /// the tier with the highest count.
    pub fn elite_tiers(dominance: &DominanceMatrix) -> EliteTiers {
        let mut tiers: BTreeMap<usize, Vec<usize>> = BTreeMap::new();

        for index in 0..dominance.size() {
            tiers
                .entry(dominance.dominance_count(index))
                .or_default()
                .push(index);
        }

        EliteTiers { tiers }
    }

    fn strictly_dominates(a: &[f64], b: &[f64]) -> bool {
        a.iter().zip(b).all(|(x, y)| x > y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::DecisionMatrix;

    fn matrix(rows: Vec<Vec<f64>>) -> DecisionMatrix {
        DecisionMatrix::from_rows(rows).unwrap()
    }

    // ─────────────────────────────────────────────────────────────────────
    // Dominance Matrix Tests
    // ─────────────────────────────────────────────────────────────────────

    #[test]
    fn diagonal_is_always_false() {
        let m = matrix(vec![vec![1.0, 2.0], vec![3.0, 4.0], vec![5.0, 6.0]]);
        let dominance = ParetoAnalyzer::dominance_matrix(&m);

        for i in 0..dominance.size() {
            assert!(!dominance.dominates(i, i));
        }
    }

    #[test]
    fn strictly_better_on_all_criteria_dominates() {
        let m = matrix(vec![vec![2.0, 3.0], vec![1.0, 1.0]]);
        let dominance = ParetoAnalyzer::dominance_matrix(&m);

        assert!(dominance.dominates(0, 1));
        assert!(!dominance.dominates(1, 0));
    }

    #[test]
    fn tie_on_one_criterion_blocks_dominance() {
        // First criterion equal: weak dominance is not enough.
        let m = matrix(vec![vec![1.0, 5.0], vec![1.0, 2.0]]);
        let dominance = ParetoAnalyzer::dominance_matrix(&m);

        assert!(!dominance.dominates(0, 1));
        assert!(!dominance.dominates(1, 0));
    }

    #[test]
    fn tradeoff_rows_leave_both_entries_false() {
        let m = matrix(vec![vec![10.0, 1.0], vec![1.0, 10.0]]);
        let dominance = ParetoAnalyzer::dominance_matrix(&m);

        assert!(!dominance.dominates(0, 1));
        assert!(!dominance.dominates(1, 0));
    }

    #[test]
    fn equal_rows_do_not_dominate_each_other() {
        let m = matrix(vec![vec![2.0, 2.0], vec![2.0, 2.0]]);
        let dominance = ParetoAnalyzer::dominance_matrix(&m);

        assert!(!dominance.dominates(0, 1));
        assert!(!dominance.dominates(1, 0));
    }

    #[test]
    fn nan_rows_neither_dominate_nor_are_dominated() {
        let m = matrix(vec![vec![f64::NAN, f64::NAN], vec![1.0, 1.0]]);
        let dominance = ParetoAnalyzer::dominance_matrix(&m);

        assert!(!dominance.dominates(0, 1));
        assert!(!dominance.dominates(1, 0));
    }

    #[test]
    fn single_alternative_has_empty_dominance() {
        let m = matrix(vec![vec![1.0]]);
        let dominance = ParetoAnalyzer::dominance_matrix(&m);

        assert_eq!(dominance.size(), 1);
        assert_eq!(dominance.dominance_count(0), 0);
    }

    #[test]
    fn dominance_count_counts_row_entries() {
        let m = matrix(vec![
            vec![3.0, 3.0, 3.0],
            vec![2.0, 2.0, 2.0],
            vec![1.0, 1.0, 1.0],
        ]);
        let dominance = ParetoAnalyzer::dominance_matrix(&m);

        assert_eq!(dominance.dominance_count(0), 2);
        assert_eq!(dominance.dominance_count(1), 1);
        assert_eq!(dominance.dominance_count(2), 0);
    }

    // ─────────────────────────────────────────────────────────────────────
    // Elite Tier Tests
    // ─────────────────────────────────────────────────────────────────────

    #[test]
    fn dominating_both_others_lands_alone_in_third_elite() {
        // Alternative 0 dominates 1 and 2: count 2, tier labeled 2 + 1 = 3.
        let m = matrix(vec![
            vec![9.0, 9.0, 9.0],
            vec![5.0, 4.0, 6.0],
            vec![1.0, 2.0, 3.0],
        ]);
        let analysis = ParetoAnalyzer::analyze(&m);

        assert_eq!(analysis.tiers.members(2), Some(&[0][..]));
        assert_eq!(EliteTiers::label(2), 3);
    }

    #[test]
    fn tiers_group_alternatives_sharing_a_count() {
        let m = matrix(vec![vec![10.0, 1.0], vec![1.0, 10.0], vec![0.0, 0.0]]);
        let analysis = ParetoAnalyzer::analyze(&m);

        // 0 and 1 each dominate only alternative 2; 2 dominates nobody.
        assert_eq!(analysis.tiers.members(1), Some(&[0, 1][..]));
        assert_eq!(analysis.tiers.members(0), Some(&[2][..]));
        assert_eq!(analysis.tiers.len(), 2);
    }

    #[test]
    fn tiers_iterate_in_ascending_count_order() {
        let m = matrix(vec![
            vec![3.0, 3.0],
            vec![2.0, 2.0],
            vec![1.0, 1.0],
        ]);
        let analysis = ParetoAnalyzer::analyze(&m);

        let counts: Vec<usize> = analysis.tiers.iter().map(|(count, _)| count).collect();
        assert_eq!(counts, vec![0, 1, 2]);
    }

    #[test]
    fn all_tied_matrix_forms_a_single_first_tier() {
        let m = matrix(vec![vec![1.0, 1.0], vec![1.0, 1.0], vec![1.0, 1.0]]);
        let analysis = ParetoAnalyzer::analyze(&m);

        assert_eq!(analysis.tiers.len(), 1);
        assert_eq!(analysis.tiers.members(0), Some(&[0, 1, 2][..]));
        assert_eq!(EliteTiers::label(0), 1);
    }

    #[test]
    fn every_alternative_appears_in_exactly_one_tier() {
        let m = matrix(vec![
            vec![5.0, 1.0],
            vec![4.0, 2.0],
            vec![3.0, 3.0],
            vec![6.0, 6.0],
        ]);
        let analysis = ParetoAnalyzer::analyze(&m);

        let mut seen: Vec<usize> = analysis
            .tiers
            .iter()
            .flat_map(|(_, members)| members.iter().copied())
            .collect();
        seen.sort_unstable();
        assert_eq!(seen, vec![0, 1, 2, 3]);
    }

    // ─────────────────────────────────────────────────────────────────────
    // Serialization Tests
    // ─────────────────────────────────────────────────────────────────────

    #[test]
    fn analysis_serialization_round_trip() {
        let m = matrix(vec![vec![2.0, 2.0], vec![1.0, 1.0]]);
        let analysis = ParetoAnalyzer::analyze(&m);

        let json = serde_json::to_string(&analysis).unwrap();
        let restored: ParetoAnalysis = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, analysis);
    }
}
