//! Reading a solution off a tableau.

use super::tableau::Tableau;
use super::types::Basis;
use std::collections::HashMap;

/// Primal values, shadow prices and objective value of a tableau.
#[derive(Debug, Clone, PartialEq)]
pub struct Extracted {
    /// Value of every decision variable `x1..xn`.
    pub solution: HashMap<String, f64>,

    /// Shadow price `y1..ym` of every constraint.
    pub dual_solution: HashMap<String, f64>,

    /// Objective-row right-hand side, present only when optimal.
    pub objective_value: Option<f64>,
}

/// Reads the solution represented by `tableau` and `basis`.
///
/// Decision variables (`x*`) that are basic take the right-hand side of
/// their row; all others are zero. The shadow price `y{i+1}` of constraint
/// `i` is the objective-row entry of its slack column. The objective value
/// is the objective-row right-hand side, reported only if `optimal`.
pub fn extract_solution(tableau: &Tableau, basis: &Basis, optimal: bool) -> Extracted {
    let mut solution = HashMap::new();
    for name in &basis.non_basic_variables {
        if name.starts_with('x') {
            solution.insert(name.clone(), 0.0);
        }
    }
    for (i, name) in basis.basic_variables.iter().enumerate() {
        if name.starts_with('x') {
            solution.insert(name.clone(), tableau.rhs(i));
        }
    }

    let n = basis.non_basic_variables.len();
    let objective_row = tableau.row(tableau.objective_index());
    let dual_solution = (0..tableau.num_constraints())
        .map(|i| (format!("y{}", i + 1), objective_row[n + i]))
        .collect();

    Extracted {
        solution,
        dual_solution,
        objective_value: optimal.then(|| tableau.objective_value()),
    }
}
