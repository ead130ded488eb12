//! Criteria Compass - Multi-Criteria Decision Analysis Engine
//!
//! Scores decision alternatives across weighted criteria under five
//! interchangeable scalarization methods, and ranks alternatives by Pareto
//! strict dominance into elite tiers. The presentation layer supplying
//! matrices and rendering results lives outside this crate; the boundary is
//! plain (serde-serializable) data.

pub mod domain;

pub use domain::analysis::{
    DominanceMatrix, EliteTiers, ParetoAnalysis, ParetoAnalyzer, ScalarizationMethod,
};
pub use domain::foundation::{DecisionMatrix, EvaluationError, PriorityVector, ValidationError};
pub use domain::session::DecisionSession;
