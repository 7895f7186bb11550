//! Linear program model.
//!
//! A [`Problem`] is an objective over non-negative decision variables
//! `x1..xn` plus a list of linear [`Constraint`]s, each with a
//! [`Relation`] (`<=`, `=`, `>=`) and a right-hand side.
//!
//! [`standardize`] converts it into the internal form consumed by the
//! tableau solver: always maximize, every row an equality with its own
//! slack column.

mod standard;
mod types;

pub use standard::{standardize, variable_name, StandardForm};
pub use types::{Constraint, Objective, ObjectiveSense, Problem, Relation, MAX_DIMENSION};
