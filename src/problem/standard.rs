//! Conversion to the solver's internal form.
//!
//! Internally every problem is a maximization whose constraints are
//! equalities closed by one slack column each. Minimization objectives are
//! negated and `>=` rows are multiplied by `-1`.

use super::types::{Constraint, ObjectiveSense, Problem, Relation};
use std::collections::HashMap;

/// A problem in internal form together with its variable name mappings.
///
/// Decision variable names are currently stable (`x1..xn` map to
/// themselves). The tables exist so that hidden slack or surplus
/// variables can be renamed later without touching the solver.
#[derive(Debug, Clone)]
pub struct StandardForm {
    /// The standardized problem: sense `Max`, every relation `Equal`.
    pub problem: Problem,

    /// Caller's variable name to internal name.
    pub original_to_standard: HashMap<String, String>,

    /// Internal variable name to caller's name.
    pub standard_to_original: HashMap<String, String>,
}

/// Name of the `j`-th (zero-based) decision variable.
pub fn variable_name(j: usize) -> String {
    format!("x{}", j + 1)
}

/// Brings `problem` into internal form.
///
/// - `Min` objectives are negated.
/// - `<=` and `=` rows keep their coefficients and their right-hand side
///   is clamped to `max(0, rhs)`.
/// - `>=` rows have both coefficients and right-hand side negated.
///
/// The clamp changes the meaning of a `<=` row with a negative
/// right-hand side. That is the established behavior of the trace and is
/// kept as is.
pub fn standardize(problem: &Problem) -> StandardForm {
    let mut objective = problem.objective.clone();
    if objective.sense == ObjectiveSense::Min {
        for c in objective.coefficients.iter_mut() {
            *c = -*c;
        }
    }
    objective.sense = ObjectiveSense::Max;

    let constraints = problem
        .constraints
        .iter()
        .map(|c| match c.relation {
            Relation::LessEqual | Relation::Equal => Constraint {
                coefficients: c.coefficients.clone(),
                relation: Relation::Equal,
                rhs: c.rhs.max(0.0),
            },
            Relation::GreaterEqual => Constraint {
                coefficients: c.coefficients.iter().map(|&a| -a).collect(),
                relation: Relation::Equal,
                rhs: -c.rhs,
            },
        })
        .collect();

    let mut original_to_standard = HashMap::new();
    let mut standard_to_original = HashMap::new();
    for j in 0..problem.num_variables() {
        let name = variable_name(j);
        original_to_standard.insert(name.clone(), name.clone());
        standard_to_original.insert(name.clone(), name);
    }

    StandardForm {
        problem: Problem {
            objective,
            constraints,
        },
        original_to_standard,
        standard_to_original,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::problem::Constraint;

    #[test]
    fn test_minimize_negates_objective() {
        let p = Problem::minimize(vec![2.0, -3.0])
            .with_constraint(Constraint::at_most(vec![1.0, 1.0], 4.0));
        let std = standardize(&p);
        assert_eq!(std.problem.objective.sense, ObjectiveSense::Max);
        assert_eq!(std.problem.objective.coefficients, vec![-2.0, 3.0]);
    }

    #[test]
    fn test_maximize_keeps_objective() {
        let std = standardize(&Problem::example());
        assert_eq!(std.problem.objective.coefficients, vec![3.0, 2.0]);
    }

    #[test]
    fn test_greater_equal_is_negated() {
        let p = Problem::minimize(vec![1.0, 1.0])
            .with_constraint(Constraint::at_least(vec![1.0, 2.0], 10.0));
        let std = standardize(&p);
        let c = &std.problem.constraints[0];
        assert_eq!(c.relation, Relation::Equal);
        assert_eq!(c.coefficients, vec![-1.0, -2.0]);
        assert!((c.rhs + 10.0).abs() < 1e-12);
    }

    #[test]
    fn test_negative_rhs_is_clamped_for_less_equal() {
        let p = Problem::maximize(vec![1.0])
            .with_constraint(Constraint::at_most(vec![1.0], -5.0))
            .with_constraint(Constraint::exactly(vec![1.0], -2.0));
        let std = standardize(&p);
        assert_eq!(std.problem.constraints[0].rhs, 0.0);
        assert_eq!(std.problem.constraints[1].rhs, 0.0);
        assert!(std
            .problem
            .constraints
            .iter()
            .all(|c| c.relation == Relation::Equal));
    }

    #[test]
    fn test_identity_name_mapping() {
        let std = standardize(&Problem::example());
        assert_eq!(std.original_to_standard.len(), 2);
        assert_eq!(std.original_to_standard["x1"], "x1");
        assert_eq!(std.standard_to_original["x2"], "x2");
    }

    #[test]
    fn test_input_is_not_modified() {
        let p = Problem::minimize(vec![1.0])
            .with_constraint(Constraint::at_least(vec![1.0], 3.0));
        let before = p.clone();
        let _ = standardize(&p);
        assert_eq!(p, before);
    }
}
