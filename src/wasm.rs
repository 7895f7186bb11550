//! WebAssembly bindings.
//!
//! Problems and results cross the boundary as plain JS objects in the
//! shape produced by the problem form:
//!
//! ```text
//! { objective: { type: "max", coefficients: [3, 2] },
//!   constraints: [{ coefficients: [2, 1], sign: "<=", rhs: 18 }, ...] }
//! ```
//!
//! Results use camelCase field names (`basicVariables`, `objectiveValue`,
//! `dualSolution`, ...).

use crate::problem::Problem;
use crate::simplex::{Method, SimplexRunner, SolveResult};
use wasm_bindgen::prelude::*;

fn parse(problem: JsValue) -> Result<Problem, JsValue> {
    let problem: Problem = serde_wasm_bindgen::from_value(problem)?;
    problem
        .validate()
        .map_err(|e| JsValue::from_str(&e.to_string()))?;
    Ok(problem)
}

fn to_js(result: &SolveResult) -> Result<JsValue, JsValue> {
    Ok(serde_wasm_bindgen::to_value(result)?)
}

/// Solves with the primal simplex method.
#[wasm_bindgen(js_name = solvePrimal)]
pub fn solve_primal(problem: JsValue) -> Result<JsValue, JsValue> {
    to_js(&SimplexRunner::solve_primal(&parse(problem)?))
}

/// Solves with the dual simplex method.
#[wasm_bindgen(js_name = solveDual)]
pub fn solve_dual(problem: JsValue) -> Result<JsValue, JsValue> {
    to_js(&SimplexRunner::solve_dual(&parse(problem)?))
}

/// Solves with the method matching the objective sense.
#[wasm_bindgen]
pub fn solve(problem: JsValue) -> Result<JsValue, JsValue> {
    to_js(&SimplexRunner::solve(&parse(problem)?))
}

/// Method name (`"primal"` or `"dual"`) used by [`solve`] for a problem.
#[wasm_bindgen(js_name = defaultMethod)]
pub fn default_method(problem: JsValue) -> Result<String, JsValue> {
    let problem = parse(problem)?;
    Ok(Method::for_sense(problem.objective.sense).to_string())
}
