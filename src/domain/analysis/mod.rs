//! Analysis Module - Pure domain services for decision analysis.
//!
//! # Components
//!
//! - `ScalarizationMethod` - Five interchangeable strategies reducing a
//!   multi-criteria row to a single f0 score
//! - `ParetoAnalyzer` - Strict-dominance matrix and elite-tier ranking
//!
//! # Design Philosophy
//!
//! All functions are pure (no side effects) and stateless. They take domain
//! objects as input and return computed results. Numeric edge cases
//! (degenerate normalization ranges, fractional powers of negative values)
//! propagate as NaN rather than being masked; callers must tolerate NaN in
//! output vectors.

mod pareto_analyzer;
mod scalarization;

pub use pareto_analyzer::{DominanceMatrix, EliteTiers, ParetoAnalysis, ParetoAnalyzer};
pub use scalarization::ScalarizationMethod;
