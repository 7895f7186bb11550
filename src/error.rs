//! Input errors.
//!
//! The solver itself never fails: every solve ends in one of the states
//! reported by [`SolveResult`](crate::simplex::SolveResult). Errors only
//! arise at the boundary, when a problem is parsed or validated before
//! being handed to the solver.

use thiserror::Error;

/// A problem that cannot be handed to the solver as-is.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ProblemError {
    /// A relation symbol other than `<=`, `=`, `>=` (or `≤`, `≥`).
    #[error("unknown relation symbol `{0}`, expected one of <=, =, >=")]
    UnknownRelation(String),

    /// The objective has no coefficients.
    #[error("the objective has no decision variables")]
    NoVariables,

    /// The problem has no constraints.
    #[error("the problem has no constraints")]
    NoConstraints,

    /// More decision variables than the solver accepts.
    #[error("{0} decision variables given, at most {max} are supported", max = crate::problem::MAX_DIMENSION)]
    TooManyVariables(usize),

    /// More constraints than the solver accepts.
    #[error("{0} constraints given, at most {max} are supported", max = crate::problem::MAX_DIMENSION)]
    TooManyConstraints(usize),

    /// A constraint row whose length differs from the objective's.
    #[error("constraint {constraint} has {found} coefficients, expected {expected}")]
    CoefficientCount {
        /// One-based constraint number.
        constraint: usize,
        /// Number of decision variables.
        expected: usize,
        /// Length of the constraint row.
        found: usize,
    },

    /// NaN or infinite input value.
    #[error("non-finite value {value} in {location}")]
    NonFinite {
        /// Where the value was found, e.g. `constraint 2 right-hand side`.
        location: String,
        /// The offending value.
        value: f64,
    },
}
