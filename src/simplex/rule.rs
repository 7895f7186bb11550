//! Pivot rule abstraction shared by the primal and dual engines.

use super::config::Method;
use super::tableau::Tableau;
use super::types::Basis;

/// What a pivot rule decides for the current tableau.
#[derive(Debug, Clone, PartialEq)]
pub enum Step {
    /// Pivot on (`row`, `column`).
    Pivot {
        row: usize,
        column: usize,
        /// Rationale, phrased against the tableau before the pivot.
        explanation: String,
    },
    /// The current tableau is optimal.
    Optimal { explanation: String },
    /// No admissible pivot exists: the primal is unbounded (primal rule) or
    /// the dual is unbounded, i.e. the primal is infeasible (dual rule).
    Blocked {
        row: Option<usize>,
        column: Option<usize>,
        explanation: String,
    },
}

/// A simplex pivoting strategy.
///
/// The runner owns the tableau and the basis; a rule only inspects them
/// and says what to do next.
pub trait PivotRule {
    /// Method tag reported in the result.
    const METHOD: Method;

    /// Explanation attached to the initial snapshot.
    fn initial_explanation(&self) -> &'static str;

    /// Decides the next step.
    fn next_step(&self, tableau: &Tableau, basis: &Basis) -> Step;
}

/// Two decimals, as shown in the trace. Negative zero prints as `0.00`.
pub(crate) fn fmt_value(value: f64) -> String {
    format!("{:.2}", value + 0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fmt_value() {
        assert_eq!(fmt_value(1.004), "1.00");
        assert_eq!(fmt_value(-2.5), "-2.50");
        assert_eq!(fmt_value(-0.0), "0.00");
    }
}
