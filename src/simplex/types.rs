//! Trace and result types.

use super::config::Method;
use super::tableau::Tableau;
use crate::problem::ObjectiveSense;
use std::collections::HashMap;

/// Variable names attached to the tableau.
///
/// `basic_variables[i]` names the variable whose value row `i` currently
/// holds. `non_basic_variables` are the column headers of the decision
/// variables; they are set once when the tableau is built and are not
/// swapped on pivots, so after the first pivot they are labels rather than
/// the true non-basic set.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Basis {
    /// Basic variable of each constraint row.
    pub basic_variables: Vec<String>,

    /// Column headers of the decision variables.
    pub non_basic_variables: Vec<String>,
}

impl Basis {
    /// Name of tableau column `column`.
    ///
    /// Columns covered by the headers use them; the remaining (slack)
    /// columns are named positionally `s1, s2, ...`.
    pub fn column_name(&self, column: usize) -> String {
        match self.non_basic_variables.get(column) {
            Some(name) => name.clone(),
            None => format!("s{}", column - self.non_basic_variables.len() + 1),
        }
    }
}

/// One step of the solve, frozen at the moment it was recorded.
///
/// Every iteration owns a deep copy of the tableau and of the variable
/// names, so stepping back and forth through a trace never observes later
/// pivots.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Iteration {
    /// Tableau after this step.
    pub tableau: Tableau,

    /// Basic variable of each constraint row after this step.
    pub basic_variables: Vec<String>,

    /// Decision variable column headers.
    pub non_basic_variables: Vec<String>,

    /// Pivot row, or the blocking row of an infeasible dual step.
    pub pivot_row: Option<usize>,

    /// Pivot column, or the blocked column of an unbounded primal step.
    pub pivot_column: Option<usize>,

    /// Pivot element before the row was normalized.
    pub pivot_element: Option<f64>,

    /// Variable brought into the basis.
    pub entering_variable: Option<String>,

    /// Variable removed from the basis.
    pub leaving_variable: Option<String>,

    /// Human-readable account of why this step was taken.
    pub explanation: String,

    /// This is the terminal optimal snapshot.
    pub is_optimal: bool,

    /// This is the terminal blocked snapshot (primal unbounded or dual
    /// infeasible).
    pub is_unbounded: bool,
}

impl Iteration {
    /// Snapshot of the current state with no pivot attached.
    pub fn snapshot(tableau: &Tableau, basis: &Basis, explanation: impl Into<String>) -> Self {
        Self {
            tableau: tableau.clone(),
            basic_variables: basis.basic_variables.clone(),
            non_basic_variables: basis.non_basic_variables.clone(),
            pivot_row: None,
            pivot_column: None,
            pivot_element: None,
            entering_variable: None,
            leaving_variable: None,
            explanation: explanation.into(),
            is_optimal: false,
            is_unbounded: false,
        }
    }

    /// The variable names of this snapshot.
    pub fn basis(&self) -> Basis {
        Basis {
            basic_variables: self.basic_variables.clone(),
            non_basic_variables: self.non_basic_variables.clone(),
        }
    }

    /// Whether this step performed a pivot.
    pub fn is_pivot(&self) -> bool {
        self.pivot_element.is_some()
    }
}

/// Outcome of a solve, derived from the result flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub enum SolveStatus {
    /// Optimal tableau reached.
    Optimal,
    /// Objective can grow without bound (primal method only).
    Unbounded,
    /// No feasible point exists (dual method only).
    Infeasible,
    /// The iteration cap was hit before any terminal rule fired.
    IterationLimit,
}

/// Result of a primal or dual solve.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct SolveResult {
    /// Initial snapshot, one entry per pivot, and the terminal snapshot.
    pub iterations: Vec<Iteration>,

    /// An optimal tableau was reached.
    pub optimal: bool,

    /// The primal method found an unbounded objective.
    pub unbounded: bool,

    /// The dual method found no feasible point.
    pub infeasible: bool,

    /// Objective row right-hand side, present only when optimal.
    ///
    /// This is the value of the internal maximization; for a `Min` problem
    /// it is the negated minimum (see [`SolveResult::objective_in_sense`]).
    pub objective_value: Option<f64>,

    /// Value of every decision variable `x1..xn`.
    pub solution: HashMap<String, f64>,

    /// Shadow price `y1..ym` of every constraint.
    pub dual_solution: HashMap<String, f64>,

    /// Method that produced this result.
    pub method: Method,

    /// Sense of the problem as the caller stated it.
    pub objective_sense: ObjectiveSense,

    /// The all-slack starting basis had a negative right-hand side.
    ///
    /// The primal method assumes a feasible start and does not repair it;
    /// when this is set its trace is not meaningful.
    pub infeasible_start: bool,
}

impl SolveResult {
    /// Terminal status.
    pub fn status(&self) -> SolveStatus {
        if self.optimal {
            SolveStatus::Optimal
        } else if self.unbounded {
            SolveStatus::Unbounded
        } else if self.infeasible {
            SolveStatus::Infeasible
        } else {
            SolveStatus::IterationLimit
        }
    }

    /// The last recorded iteration.
    pub fn final_iteration(&self) -> Option<&Iteration> {
        self.iterations.last()
    }

    /// Number of pivots performed.
    pub fn pivot_count(&self) -> usize {
        self.iterations.iter().filter(|it| it.is_pivot()).count()
    }

    /// Optimal objective value in the sense the caller asked for.
    pub fn objective_in_sense(&self) -> Option<f64> {
        self.objective_value.map(|z| match self.objective_sense {
            ObjectiveSense::Max => z,
            ObjectiveSense::Min => -z,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result_with_flags(optimal: bool, unbounded: bool, infeasible: bool) -> SolveResult {
        SolveResult {
            iterations: Vec::new(),
            optimal,
            unbounded,
            infeasible,
            objective_value: optimal.then_some(5.0),
            solution: HashMap::new(),
            dual_solution: HashMap::new(),
            method: Method::Primal,
            objective_sense: ObjectiveSense::Min,
            infeasible_start: false,
        }
    }

    #[test]
    fn test_status_from_flags() {
        assert_eq!(result_with_flags(true, false, false).status(), SolveStatus::Optimal);
        assert_eq!(result_with_flags(false, true, false).status(), SolveStatus::Unbounded);
        assert_eq!(result_with_flags(false, false, true).status(), SolveStatus::Infeasible);
        assert_eq!(
            result_with_flags(false, false, false).status(),
            SolveStatus::IterationLimit
        );
    }

    #[test]
    fn test_objective_in_sense_flips_min() {
        let r = result_with_flags(true, false, false);
        assert_eq!(r.objective_in_sense(), Some(-5.0));
        assert_eq!(result_with_flags(false, true, false).objective_in_sense(), None);
    }

    #[test]
    fn test_column_name_falls_back_to_slack() {
        let basis = Basis {
            basic_variables: vec!["s1".into(), "s2".into()],
            non_basic_variables: vec!["x1".into(), "x2".into(), "x3".into()],
        };
        assert_eq!(basis.column_name(1), "x2");
        assert_eq!(basis.column_name(3), "s1");
        assert_eq!(basis.column_name(4), "s2");
    }

    #[test]
    fn test_snapshot_is_independent() {
        let mut tableau = Tableau::from_rows(vec![vec![1.0, 2.0], vec![-1.0, 0.0]]);
        let basis = Basis {
            basic_variables: vec!["s1".into()],
            non_basic_variables: vec!["x1".into()],
        };
        let snap = Iteration::snapshot(&tableau, &basis, "start");
        tableau.pivot(0, 0);
        tableau.pivot(0, 0);
        let after = Tableau::from_rows(vec![vec![1.0, 2.0], vec![0.0, 2.0]]);
        assert_eq!(tableau, after);
        assert_eq!(snap.tableau.row(1), &[-1.0, 0.0]);
        assert!(!snap.is_pivot());
        assert_eq!(snap.basis(), basis);
    }
}
