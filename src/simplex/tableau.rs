//! Dense simplex tableau and the Gauss-Jordan pivot.

use super::types::Basis;
use crate::problem::{variable_name, Problem};
use std::fmt;

/// Dense simplex tableau.
///
/// Layout for `m` constraints and `n` decision variables:
///
/// ```text
///            x1 .. xn | s1 .. sm | RHS
/// row 0      a_0j     | identity | b_0
/// ...
/// row m-1    a_(m-1)j | identity | b_(m-1)
/// row m      -c_j     | 0 .. 0   | z        (objective row)
/// ```
///
/// The shape is fixed at construction; pivoting only changes values.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Tableau {
    rows: Vec<Vec<f64>>,
}

impl Tableau {
    /// Wraps an existing matrix. The last row is the objective row and the
    /// last column the right-hand side.
    ///
    /// # Panics
    ///
    /// Panics if `rows` is empty or not rectangular.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Self {
        assert!(!rows.is_empty(), "tableau needs at least the objective row");
        let width = rows[0].len();
        assert!(
            rows.iter().all(|r| r.len() == width),
            "tableau rows must have equal length"
        );
        Self { rows }
    }

    /// Builds the initial tableau of a standardized problem.
    ///
    /// Each constraint row gets its coefficients, one slack column from an
    /// identity block, and its right-hand side. The objective row holds the
    /// negated objective coefficients so that its entries read directly as
    /// reduced costs. Slacks `s1..sm` form the starting basis; the column
    /// headers list the decision variables `x1..xn` only.
    pub fn build(problem: &Problem) -> (Self, Basis) {
        let n = problem.num_variables();
        let m = problem.num_constraints();

        let mut rows = Vec::with_capacity(m + 1);
        for (i, constraint) in problem.constraints.iter().enumerate() {
            let mut row = Vec::with_capacity(n + m + 1);
            row.extend_from_slice(&constraint.coefficients);
            row.extend((0..m).map(|k| if k == i { 1.0 } else { 0.0 }));
            row.push(constraint.rhs);
            rows.push(row);
        }

        let mut objective: Vec<f64> = problem.objective.coefficients.iter().map(|&c| -c).collect();
        objective.resize(n + m + 1, 0.0);
        rows.push(objective);

        let basis = Basis {
            basic_variables: (0..m).map(|i| format!("s{}", i + 1)).collect(),
            non_basic_variables: (0..n).map(variable_name).collect(),
        };

        (Self { rows }, basis)
    }

    /// All rows, objective row last.
    pub fn rows(&self) -> &[Vec<f64>] {
        &self.rows
    }

    /// Number of rows including the objective row.
    pub fn num_rows(&self) -> usize {
        self.rows.len()
    }

    /// Number of columns including the right-hand side.
    pub fn num_columns(&self) -> usize {
        self.rows[0].len()
    }

    /// Number of constraint rows.
    pub fn num_constraints(&self) -> usize {
        self.rows.len() - 1
    }

    /// Index of the right-hand-side column.
    pub fn rhs_column(&self) -> usize {
        self.num_columns() - 1
    }

    /// Index of the objective row.
    pub fn objective_index(&self) -> usize {
        self.rows.len() - 1
    }

    /// Entry at (`row`, `column`).
    pub fn get(&self, row: usize, column: usize) -> f64 {
        self.rows[row][column]
    }

    /// A full row, right-hand side included.
    pub fn row(&self, row: usize) -> &[f64] {
        &self.rows[row]
    }

    /// Right-hand side of `row`.
    pub fn rhs(&self, row: usize) -> f64 {
        self.rows[row][self.rhs_column()]
    }

    /// The objective row without its right-hand side.
    pub fn reduced_costs(&self) -> &[f64] {
        let last = &self.rows[self.objective_index()];
        &last[..last.len() - 1]
    }

    /// Right-hand side of the objective row.
    pub fn objective_value(&self) -> f64 {
        self.rhs(self.objective_index())
    }

    /// Constraint rows, objective row excluded.
    pub fn constraint_rows(&self) -> &[Vec<f64>] {
        &self.rows[..self.objective_index()]
    }

    /// Pivots on (`pivot_row`, `pivot_column`).
    ///
    /// Divides the pivot row by the pivot element, then subtracts a multiple
    /// of it from every other row (objective row included) so that the
    /// pivot column becomes a unit vector.
    ///
    /// The pivot element must be nonzero; callers only pick entries with a
    /// strictly signed value.
    pub fn pivot(&mut self, pivot_row: usize, pivot_column: usize) {
        let element = self.rows[pivot_row][pivot_column];
        debug_assert!(element != 0.0, "pivot element must be nonzero");

        for value in self.rows[pivot_row].iter_mut() {
            *value /= element;
        }

        let normalized = self.rows[pivot_row].clone();
        for (i, row) in self.rows.iter_mut().enumerate() {
            if i == pivot_row {
                continue;
            }
            let factor = row[pivot_column];
            for (value, &p) in row.iter_mut().zip(normalized.iter()) {
                *value -= factor * p;
            }
        }
    }
}

impl fmt::Display for Tableau {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.rows {
            let cells: Vec<String> = row.iter().map(|v| format!("{v:8.2}")).collect();
            writeln!(f, "{}", cells.join(" "))?;
        }
        Ok(())
    }
}
