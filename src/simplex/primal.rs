//! Primal simplex pivoting.
//!
//! Entering column: the most negative reduced cost (left-most on ties).
//! Leaving row: minimum ratio `rhs / entry` over rows with a strictly
//! positive entry in the entering column (top-most on ties).
//!
//! No anti-cycling rule is applied; degenerate problems may cycle until the
//! runner's iteration cap.

use super::config::Method;
use super::rule::{fmt_value, PivotRule, Step};
use super::tableau::Tableau;
use super::types::Basis;

/// Column of the most negative reduced cost, or `None` if all are
/// non-negative.
pub fn entering_column(tableau: &Tableau) -> Option<usize> {
    let mut column = None;
    let mut min = 0.0;
    for (j, &cost) in tableau.reduced_costs().iter().enumerate() {
        if cost < min {
            min = cost;
            column = Some(j);
        }
    }
    column
}

/// Minimum-ratio row for `column` together with its ratio, or `None` if no
/// entry in the column is positive.
pub fn leaving_row(tableau: &Tableau, column: usize) -> Option<(usize, f64)> {
    let rhs = tableau.rhs_column();
    let mut best = None;
    let mut min_ratio = f64::INFINITY;
    for (i, row) in tableau.constraint_rows().iter().enumerate() {
        let entry = row[column];
        if entry > 0.0 {
            let ratio = row[rhs] / entry;
            if ratio < min_ratio {
                min_ratio = ratio;
                best = Some((i, ratio));
            }
        }
    }
    best
}

/// The primal simplex rule.
#[derive(Debug, Clone, Copy, Default)]
pub struct PrimalRule;

impl PivotRule for PrimalRule {
    const METHOD: Method = Method::Primal;

    fn initial_explanation(&self) -> &'static str {
        "Initial tableau with the slack variables in the basis."
    }

    fn next_step(&self, tableau: &Tableau, basis: &Basis) -> Step {
        let Some(column) = entering_column(tableau) else {
            return Step::Optimal {
                explanation: "The solution is optimal: every coefficient of the objective row \
                              is non-negative."
                    .to_string(),
            };
        };
        let entering = basis.column_name(column);

        let Some((row, ratio)) = leaving_row(tableau, column) else {
            return Step::Blocked {
                row: None,
                column: Some(column),
                explanation: format!(
                    "The problem is unbounded: no constraint limits the entering variable \
                     {entering} (column {}).",
                    column + 1
                ),
            };
        };
        let leaving = &basis.basic_variables[row];
        let element = tableau.get(row, column);

        let explanation = format!(
            "The entering variable is {entering} (column {c}) because it has the most negative \
             coefficient ({cost}) in the objective row.\n\
             The leaving variable is {leaving} (row {r}) because it gives the minimum ratio \
             ({ratio}).\n\
             The pivot element is {element} at row {r}, column {c}.\n\
             The pivot row was divided by the pivot element, then {entering} was eliminated \
             from the other rows.",
            c = column + 1,
            r = row + 1,
            cost = fmt_value(tableau.reduced_costs()[column]),
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
