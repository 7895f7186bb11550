//! Solver method selection and limits.

use crate::problem::ObjectiveSense;
use std::fmt;

/// Hard cap on solver loop passes.
///
/// This is a safety valve against cycling, not a convergence criterion:
/// a solve that reaches it stops silently with whatever flags were set.
pub const MAX_ITERATIONS: usize = 100;

/// Which simplex variant to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Method {
    /// Most-negative reduced cost enters, minimum ratio leaves.
    #[default]
    Primal,
    /// Most-negative right-hand side leaves, dual ratio enters.
    Dual,
}

impl Method {
    /// The method conventionally used for a given objective sense:
    /// primal for maximization, dual for minimization.
    ///
    /// # Examples
    ///
    /// ```
    /// use u_simplex::problem::ObjectiveSense;
    /// use u_simplex::simplex::Method;
    ///
    /// assert_eq!(Method::for_sense(ObjectiveSense::Max), Method::Primal);
    /// assert_eq!(Method::for_sense(ObjectiveSense::Min), Method::Dual);
    /// ```
    pub fn for_sense(sense: ObjectiveSense) -> Self {
        match sense {
            ObjectiveSense::Max => Method::Primal,
            ObjectiveSense::Min => Method::Dual,
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Method::Primal => f.write_str("primal"),
            Method::Dual => f.write_str("dual"),
        }
    }
}
