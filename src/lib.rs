//! Tableau simplex solver with a replayable trace.
//!
//! Solves small linear programs (maximize or minimize a linear objective
//! over non-negative variables subject to `<=`, `=`, `>=` constraints) with
//! the tableau form of the simplex method, recording every pivot:
//!
//! - **Problem model** ([`problem`]): objective, constraints, validation,
//!   and standardization into "maximize, equality rows with slacks".
//! - **Primal simplex** ([`solve_primal`]): most-negative reduced cost
//!   enters, minimum ratio leaves. Reports optimal or unbounded.
//! - **Dual simplex** ([`solve_dual`]): most-negative right-hand side
//!   leaves, dual ratio test enters. Reports optimal or infeasible.
//! - **Trace** ([`simplex::Iteration`]): a deep-copied tableau, basis and
//!   explanation per step, from the initial tableau to the terminal one.
//! - **Rendering** ([`render`]): plain-text tableaux for display.
//!
//! # Scope
//!
//! The solver is meant for teaching-sized problems (up to 10 variables and
//! 10 constraints). It uses plain `f64` arithmetic without tolerances, has
//! no Phase I, no anti-cycling rule, and stops after
//! [`simplex::MAX_ITERATIONS`] passes.
//!
//! # Examples
//!
//! ```
//! use u_simplex::problem::Problem;
//!
//! let result = u_simplex::solve_primal(&Problem::example());
//! assert!(result.optimal);
//! assert!((result.objective_value.unwrap() - 33.0).abs() < 1e-9);
//! assert!((result.solution["x1"] - 3.0).abs() < 1e-9);
//! assert!((result.solution["x2"] - 12.0).abs() < 1e-9);
//! ```
//!
//! # Logging
//!
//! Solver progress is reported through the [`log`] facade (`debug` per
//! solve, `trace` per pivot, `warn` on an infeasible primal start or on
//! hitting the iteration cap). No logger is installed by this crate.

pub mod error;
pub mod problem;
pub mod render;
pub mod simplex;

#[cfg(feature = "wasm")]
pub mod wasm;

pub use error::ProblemError;
pub use simplex::{Iteration, Method, SolveResult, SolveStatus};

use problem::Problem;
use simplex::SimplexRunner;

/// Solves `problem` with the primal simplex method.
pub fn solve_primal(problem: &Problem) -> SolveResult {
    SimplexRunner::solve_primal(problem)
}

/// Solves `problem` with the dual simplex method.
pub fn solve_dual(problem: &Problem) -> SolveResult {
    SimplexRunner::solve_dual(problem)
}

/// Solves `problem` with the primal method if it maximizes and the dual
/// method if it minimizes.
pub fn solve(problem: &Problem) -> SolveResult {
    SimplexRunner::solve(problem)
}
