//! Tableau simplex method with a full pivot trace.
//!
//! The problem is standardized, an all-slack tableau is built, and a
//! [`PivotRule`] is applied repeatedly until it reports an optimal or a
//! blocked tableau, or until [`MAX_ITERATIONS`] passes have run. Every step
//! is recorded as an [`Iteration`] so the solve can be replayed.
//!
//! Two rules are provided:
//!
//! - [`PrimalRule`]: most-negative reduced cost enters, minimum ratio
//!   leaves. Detects unboundedness.
//! - [`DualRule`]: most-negative right-hand side leaves, dual ratio test
//!   picks the entering column. Detects infeasibility.
//!
//! # References
//!
//! - Dantzig (1963), "Linear Programming and Extensions"
//! - Lemke (1954), "The dual method of solving the linear programming problem"

mod config;
mod dual;
mod extract;
mod primal;
mod rule;
mod runner;
mod tableau;
mod types;

pub use config::{Method, MAX_ITERATIONS};
pub use dual::DualRule;
pub use extract::{extract_solution, Extracted};
pub use primal::PrimalRule;
pub use rule::{PivotRule, Step};
pub use runner::SimplexRunner;
pub use tableau::Tableau;
pub use types::{Basis, Iteration, SolveResult, SolveStatus};

/// Pivot selection helpers of the primal method.
pub mod primal_rule {
    pub use super::primal::{entering_column, leaving_row};
}

/// Pivot selection helpers of the dual method.
pub mod dual_rule {
    pub use super::dual::{entering_column, is_dual_feasible, is_primal_feasible, leaving_row};
}
