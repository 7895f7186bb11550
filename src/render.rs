//! Plain-text rendering of trace steps.
//!
//! Lays a tableau out the way it is usually drawn on a board: a header of
//! column names, the objective row `Z` on top, then one row per basic
//! variable. Values use two decimals. The pivot element is bracketed and
//! the pivot row and column are starred.

use crate::simplex::{Iteration, SolveResult};
use std::fmt::{self, Write};

const CELL: usize = 9;

/// Renders one iteration's tableau.
///
/// # Examples
///
/// ```
/// use u_simplex::{problem::Problem, render::render_iteration, solve_primal};
///
/// let result = solve_primal(&Problem::example());
/// let text = render_iteration(&result.iterations[1]);
/// assert!(text.contains("[1.00]"));
/// ```
pub fn render_iteration(iteration: &Iteration) -> String {
    let mut out = String::new();
    let _ = write_iteration(&mut out, iteration);
    out
}

fn write_iteration<W: Write>(out: &mut W, it: &Iteration) -> fmt::Result {
    let tableau = &it.tableau;
    let width = tableau.num_columns() - 1;
    let basis = it.basis();

    write!(out, "{:<CELL$}", "Base")?;
    for j in 0..width {
        let mut name = basis.column_name(j);
        if it.pivot_column == Some(j) {
            name.push('*');
        }
        write!(out, "{name:>CELL$}")?;
    }
    writeln!(out, "{:>CELL$}", "RHS")?;

    let objective = tableau.objective_index();
    write_row(out, "Z", tableau.row(objective), objective, it)?;
    for i in 0..tableau.num_constraints() {
        let mut label = it.basic_variables.get(i).cloned().unwrap_or_default();
        if it.pivot_row == Some(i) {
            label.push('*');
        }
        write_row(out, &label, tableau.row(i), i, it)?;
    }
    Ok(())
}

fn write_row<W: Write>(
    out: &mut W,
    label: &str,
    row: &[f64],
    index: usize,
    it: &Iteration,
) -> fmt::Result {
    write!(out, "{label:<CELL$}")?;
    let rhs = row.len() - 1;
    for (j, &value) in row.iter().enumerate() {
        // -0.0 + 0.0 is +0.0
        let value = value + 0.0;
        let cell = if j < rhs && it.pivot_row == Some(index) && it.pivot_column == Some(j) {
            format!("[{value:.2}]")
        } else {
            format!("{value:.2}")
        };
        write!(out, "{cell:>CELL$}")?;
    }
    writeln!(out)
}

impl fmt::Display for Iteration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_iteration(f, self)?;
        if !self.explanation.is_empty() {
            writeln!(f)?;
            writeln!(f, "{}", self.explanation.trim())?;
        }
        Ok(())
    }
}

/// Renders a whole result: every step followed by the solution summary.
pub fn render_result(result: &SolveResult) -> String {
    let mut out = String::new();
    let _ = write_result(&mut out, result);
    out
}

fn write_result<W: Write>(out: &mut W, result: &SolveResult) -> fmt::Result {
    for (k, it) in result.iterations.iter().enumerate() {
        writeln!(out, "--- step {k} ---")?;
        writeln!(out, "{it}")?;
    }

    writeln!(out, "status: {:?} ({} method)", result.status(), result.method)?;
    if let Some(z) = result.objective_in_sense() {
        writeln!(out, "Z{} = {z:.4}", result.objective_sense)?;
        for (name, value) in sorted(&result.solution) {
            writeln!(out, "{name} = {:.4}", value + 0.0)?;
        }
        for (name, value) in sorted(&result.dual_solution) {
            writeln!(out, "{name} = {:.4}", value + 0.0)?;
        }
    }
    Ok(())
}

/// Entries ordered by the numeric suffix of their name (`x2` before `x10`).
fn sorted(values: &std::collections::HashMap<String, f64>) -> Vec<(&String, f64)> {
    let mut entries: Vec<(&String, f64)> = values.iter().map(|(k, &v)| (k, v)).collect();
    entries.sort_by_key(|(name, _)| {
        let (prefix, digits) = name.split_at(name.len().min(1));
        (prefix.to_string(), digits.parse::<usize>().unwrap_or(usize::MAX))
    });
    entries
}
