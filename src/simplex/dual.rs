//! Dual simplex pivoting.
//!
//! Leaving row: the most negative right-hand side. Entering column: among
//! strictly negative entries of that row, the one minimizing
//! `|reduced cost / entry|`. A negative row with no negative entry means
//! the dual is unbounded, hence the primal is infeasible.

use super::config::Method;
use super::rule::{fmt_value, PivotRule, Step};
use super::tableau::Tableau;
use super::types::Basis;

/// Every constraint right-hand side is non-negative.
pub fn is_primal_feasible(tableau: &Tableau) -> bool {
    (0..tableau.num_constraints()).all(|i| tableau.rhs(i) >= 0.0)
}

/// Every reduced cost is non-negative.
pub fn is_dual_feasible(tableau: &Tableau) -> bool {
    tableau.reduced_costs().iter().all(|&c| c >= 0.0)
}

/// Row with the most negative right-hand side, or `None` if none is
/// negative.
pub fn leaving_row(tableau: &Tableau) -> Option<usize> {
    let mut row = None;
    let mut min = 0.0;
    for i in 0..tableau.num_constraints() {
        let rhs = tableau.rhs(i);
        if rhs < min {
            min = rhs;
            row = Some(i);
        }
    }
    row
}

/// Dual ratio test on `row`: the column with a negative entry minimizing
/// `|reduced cost / entry|`, together with that ratio.
pub fn entering_column(tableau: &Tableau, row: usize) -> Option<(usize, f64)> {
    let costs = tableau.reduced_costs();
    let entries = &tableau.row(row)[..costs.len()];
    let mut best = None;
    let mut min_ratio = f64::INFINITY;
    for (j, (&entry, &cost)) in entries.iter().zip(costs).enumerate() {
        if entry < 0.0 {
            let ratio = (cost / entry).abs();
            if ratio < min_ratio {
                min_ratio = ratio;
                best = Some((j, ratio));
            }
        }
    }
    best
}

/// The dual simplex rule.
#[derive(Debug, Clone, Copy, Default)]
pub struct DualRule;

impl PivotRule for DualRule {
    const METHOD: Method = Method::Dual;

    fn initial_explanation(&self) -> &'static str {
        "Initial tableau for the dual simplex method."
    }

    fn next_step(&self, tableau: &Tableau, basis: &Basis) -> Step {
        if is_primal_feasible(tableau) && is_dual_feasible(tableau) {
            return Step::Optimal {
                explanation: "The solution is optimal: every right-hand side and every \
                              coefficient of the objective row is non-negative."
                    .to_string(),
            };
        }

        let Some(row) = leaving_row(tableau) else {
            return Step::Optimal {
                explanation: "The solution is optimal: every right-hand side is non-negative."
                    .to_string(),
            };
        };
        let leaving = &basis.basic_variables[row];

        let Some((column, ratio)) = entering_column(tableau, row) else {
            return Step::Blocked {
                row: Some(row),
                column: None,
                explanation: format!(
                    "The problem is infeasible: no variable can enter the basis to remove the \
                     negative right-hand side of {leaving} (row {}).",
                    row + 1
                ),
            };
        };
        let entering = basis.column_name(column);
        let element = tableau.get(row, column);

        let explanation = format!(
            "The leaving variable is {leaving} (row {r}) because it has the most negative \
             right-hand side ({rhs}).\n\
             The entering variable is {entering} (column {c}) because it gives the minimum \
             ratio ({ratio}), which keeps the objective row non-negative.\n\
             The pivot element is {element} at row {r}, column {c}.\n\
             The pivot row was divided by the pivot element, then {entering} was eliminated \
             from the other rows.",
            r = row + 1,
            c = column + 1,
            rhs = fmt_value(tableau.rhs(row)),
            ratio = fmt_value(ratio),
            element = fmt_value(element),
        );

        Step::Pivot {
            row,
            column,
            explanation,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tableau(rows: &[&[f64]]) -> Tableau {
        Tableau::from_rows(rows.iter().map(|r| r.to_vec()).collect())
    }

    fn basis(m: usize, n: usize) -> Basis {
        Basis {
            basic_variables: (1..=m).map(|i| format!("s{i}")).collect(),
            non_basic_variables: (1..=n).map(|j| format!("x{j}")).collect(),
        }
    }

    #[test]
    fn test_leaving_most_negative_rhs() {
        let t = tableau(&[
            &[1.0, 1.0, 0.0, -2.0],
            &[1.0, 0.0, 1.0, -5.0],
            &[1.0, 0.0, 0.0, 0.0],
        ]);
        assert_eq!(leaving_row(&t), Some(1));
        assert!(!is_primal_feasible(&t));
    }

    #[test]
    fn test_leaving_none_when_feasible() {
        let t = tableau(&[&[1.0, 1.0, 0.0], &[1.0, 0.0, 3.0]]);
        assert_eq!(leaving_row(&t), None);
        assert!(is_primal_feasible(&t));
    }

    #[test]
    fn test_leaving_ignores_objective_rhs() {
        let t = tableau(&[&[1.0, 1.0, 2.0], &[1.0, 0.0, -30.0]]);
        assert_eq!(leaving_row(&t), None);
    }

    #[test]
    fn test_entering_dual_ratio() {
        // ratios: |2 / -1| = 2, |3 / -3| = 1
        let t = tableau(&[&[-1.0, -3.0, 1.0, -6.0], &[2.0, 3.0, 0.0, 0.0]]);
        let (col, ratio) = entering_column(&t, 0).unwrap();
        assert_eq!(col, 1);
        assert!((ratio - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_entering_ignores_non_negative_entries() {
        let t = tableau(&[&[1.0, -2.0, 1.0, -6.0], &[0.0, 4.0, 0.0, 0.0]]);
        assert_eq!(entering_column(&t, 0).map(|(c, _)| c), Some(1));
    }

    #[test]
    fn test_entering_none_is_infeasible() {
        let t = tableau(&[&[1.0, 1.0, 1.0, -6.0], &[1.0, 1.0, 0.0, 0.0]]);
        assert_eq!(entering_column(&t, 0), None);

        match DualRule.next_step(&t, &basis(1, 2)) {
            Step::Blocked { row, column, .. } => {
                assert_eq!(row, Some(0));
                assert_eq!(column, None);
            }
            other => panic!("expected infeasible, got {other:?}"),
        }
    }

    #[test]
    fn test_optimal_when_both_feasible() {
        let t = tableau(&[&[1.0, 1.0, 1.0, 6.0], &[1.0, 1.0, 0.0, 0.0]]);
        assert!(matches!(
            DualRule.next_step(&t, &basis(1, 2)),
            Step::Optimal { .. }
        ));
    }

    #[test]
    fn test_optimal_when_rhs_non_negative_only() {
        // Negative reduced cost but no negative rhs: the dual rule stops.
        let t = tableau(&[&[1.0, 1.0, 1.0, 6.0], &[-1.0, 1.0, 0.0, 0.0]]);
        match DualRule.next_step(&t, &basis(1, 2)) {
            Step::Optimal { explanation } => {
                assert!(explanation.contains("every right-hand side is non-negative"));
            }
            other => panic!("expected optimal, got {other:?}"),
        }
    }
}
