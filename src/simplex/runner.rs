//! Solver loop shared by the primal and dual methods.

use super::config::{Method, MAX_ITERATIONS};
use super::dual::DualRule;
use super::extract::extract_solution;
use super::primal::PrimalRule;
use super::rule::{PivotRule, Step};
use super::tableau::Tableau;
use super::types::{Basis, Iteration, SolveResult};
use crate::problem::{standardize, Problem};

/// Terminal state reached by the loop, if any.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Outcome {
    Running,
    Optimal,
    Blocked,
}

/// Runs the tableau simplex method and records every step.
pub struct SimplexRunner;

impl SimplexRunner {
    /// Solves with the primal simplex method.
    ///
    /// The all-slack starting basis is assumed feasible. If a standardized
    /// right-hand side is negative the solve still runs unchanged and
    /// [`SolveResult::infeasible_start`] is set.
    pub fn solve_primal(problem: &Problem) -> SolveResult {
        Self::run(problem, &PrimalRule)
    }

    /// Solves with the dual simplex method.
    ///
    /// A blocked dual ratio test is reported as `infeasible`; this method
    /// never reports `unbounded`.
    pub fn solve_dual(problem: &Problem) -> SolveResult {
        Self::run(problem, &DualRule)
    }

    /// Solves with the method matching the objective sense: primal for
    /// maximization, dual for minimization.
    pub fn solve(problem: &Problem) -> SolveResult {
        Self::solve_with(problem, Method::for_sense(problem.objective.sense))
    }

    /// Solves with an explicit method.
    pub fn solve_with(problem: &Problem, method: Method) -> SolveResult {
        match method {
            Method::Primal => Self::solve_primal(problem),
            Method::Dual => Self::solve_dual(problem),
        }
    }

    /// Runs `rule` on `problem` until a terminal step or the iteration cap.
    pub fn run<R: PivotRule>(problem: &Problem, rule: &R) -> SolveResult {
        let standard = standardize(problem);
        let (mut tableau, mut basis) = Tableau::build(&standard.problem);

        log::debug!(
            "{} simplex: {} variables, {} constraints",
            R::METHOD,
            problem.num_variables(),
            problem.num_constraints()
        );

        let infeasible_start = (0..tableau.num_constraints()).any(|i| tableau.rhs(i) < 0.0);
        if infeasible_start && R::METHOD == Method::Primal {
            log::warn!(
                "starting basis has a negative right-hand side; the primal trace assumes a \
                 feasible start"
            );
        }

        let mut iterations = vec![Iteration::snapshot(
            &tableau,
            &basis,
            rule.initial_explanation(),
        )];
        let mut outcome = Outcome::Running;

        for _ in 0..MAX_ITERATIONS {
            match rule.next_step(&tableau, &basis) {
                Step::Optimal { explanation } => {
                    let mut it = Iteration::snapshot(&tableau, &basis, explanation);
                    it.is_optimal = true;
                    iterations.push(it);
                    outcome = Outcome::Optimal;
                    break;
                }
                Step::Blocked {
                    row,
                    column,
                    explanation,
                } => {
                    let mut it = Iteration::snapshot(&tableau, &basis, explanation);
                    it.pivot_row = row;
                    it.pivot_column = column;
                    it.entering_variable = column.map(|c| basis.column_name(c));
                    it.leaving_variable = row.map(|r| basis.basic_variables[r].clone());
                    it.is_unbounded = true;
                    iterations.push(it);
                    outcome = Outcome::Blocked;
                    break;
                }
                Step::Pivot {
                    row,
                    column,
                    explanation,
                } => {
                    iterations.push(pivot(&mut tableau, &mut basis, row, column, explanation));
                }
            }
        }

        match outcome {
            Outcome::Optimal => log::debug!(
                "{} simplex optimal after {} steps, z = {}",
                R::METHOD,
                iterations.len() - 1,
                tableau.objective_value()
            ),
            Outcome::Blocked => log::debug!(
                "{} simplex stopped: {}",
                R::METHOD,
                match R::METHOD {
                    Method::Primal => "unbounded",
                    Method::Dual => "infeasible",
                }
            ),
            Outcome::Running => log::warn!(
                "{} simplex hit the iteration cap of {MAX_ITERATIONS} without terminating",
                R::METHOD
            ),
        }

        let optimal = outcome == Outcome::Optimal;
        let blocked = outcome == Outcome::Blocked;
        let extracted = extract_solution(&tableau, &basis, optimal);

        SolveResult {
            iterations,
            optimal,
            unbounded: blocked && R::METHOD == Method::Primal,
            infeasible: blocked && R::METHOD == Method::Dual,
            objective_value: extracted.objective_value,
            solution: extracted.solution,
            dual_solution: extracted.dual_solution,
            method: R::METHOD,
            objective_sense: problem.objective.sense,
            infeasible_start,
        }
    }
}

/// Pivots the live tableau, relabels the basis and returns the snapshot.
///
/// The displaced basic variable is not moved into the non-basic headers.
fn pivot(
    tableau: &mut Tableau,
    basis: &mut Basis,
    row: usize,
    column: usize,
    explanation: String,
) -> Iteration {
    let element = tableau.get(row, column);
    let entering = basis.column_name(column);
    let leaving = std::mem::replace(&mut basis.basic_variables[row], entering.clone());

    log::trace!(
        "pivot at ({}, {}) element {element}: {entering} enters, {leaving} leaves",
        row + 1,
        column + 1
    );

    tableau.pivot(row, column);

    let mut it = Iteration::snapshot(tableau, basis, explanation);
    it.pivot_row = Some(row);
    it.pivot_column = Some(column);
    it.pivot_element = Some(element);
    it.entering_variable = Some(entering);
    it.leaving_variable = Some(leaving);
    it
}
