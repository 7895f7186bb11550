//! Linear program definition.

use crate::error::ProblemError;
use std::fmt;
use std::str::FromStr;

/// Largest variable or constraint count accepted by [`Problem::validate`].
pub const MAX_DIMENSION: usize = 10;

/// Direction of optimization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ObjectiveSense {
    /// Maximize.
    #[default]
    Max,
    /// Minimize.
    Min,
}

impl fmt::Display for ObjectiveSense {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ObjectiveSense::Max => f.write_str("max"),
            ObjectiveSense::Min => f.write_str("min"),
        }
    }
}

/// Relation between a constraint's left-hand side and its right-hand side.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Relation {
    /// `lhs <= rhs`
    #[cfg_attr(feature = "serde", serde(rename = "<=", alias = "≤"))]
    LessEqual,
    /// `lhs = rhs`
    #[cfg_attr(feature = "serde", serde(rename = "="))]
    Equal,
    /// `lhs >= rhs`
    #[cfg_attr(feature = "serde", serde(rename = ">=", alias = "≥"))]
    GreaterEqual,
}

impl FromStr for Relation {
    type Err = ProblemError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "<=" | "≤" => Ok(Relation::LessEqual),
            "=" | "==" => Ok(Relation::Equal),
            ">=" | "≥" => Ok(Relation::GreaterEqual),
            other => Err(ProblemError::UnknownRelation(other.to_string())),
        }
    }
}

impl fmt::Display for Relation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Relation::LessEqual => f.write_str("<="),
            Relation::Equal => f.write_str("="),
            Relation::GreaterEqual => f.write_str(">="),
        }
    }
}

/// The linear function being optimized.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Objective {
    /// Whether the objective is maximized or minimized.
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    pub sense: ObjectiveSense,
    /// One coefficient per decision variable `x1..xn`.
    pub coefficients: Vec<f64>,
}

/// A single linear constraint `coefficients · x  relation  rhs`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Constraint {
    /// One coefficient per decision variable.
    pub coefficients: Vec<f64>,

    /// Relation between the left-hand side and `rhs`.
    #[cfg_attr(feature = "serde", serde(rename = "sign"))]
    pub relation: Relation,

    /// Right-hand side.
    pub rhs: f64,
}

impl Constraint {
    /// Creates a constraint.
    pub fn new(coefficients: Vec<f64>, relation: Relation, rhs: f64) -> Self {
        Self {
            coefficients,
            relation,
            rhs,
        }
    }

    /// Shorthand for a `<=` constraint.
    pub fn at_most(coefficients: Vec<f64>, rhs: f64) -> Self {
        Self::new(coefficients, Relation::LessEqual, rhs)
    }

    /// Shorthand for an `=` constraint.
    pub fn exactly(coefficients: Vec<f64>, rhs: f64) -> Self {
        Self::new(coefficients, Relation::Equal, rhs)
    }

    /// Shorthand for a `>=` constraint.
    pub fn at_least(coefficients: Vec<f64>, rhs: f64) -> Self {
        Self::new(coefficients, Relation::GreaterEqual, rhs)
    }
}

/// A linear program over non-negative decision variables `x1..xn`.
///
/// All coefficient vectors are expected to have the same length (the
/// number of decision variables). The solver does not check this; call
/// [`Problem::validate`] on untrusted input first.
///
/// # Examples
///
/// ```
/// use u_simplex::problem::{Constraint, Problem};
///
/// let problem = Problem::maximize(vec![3.0, 2.0])
///     .with_constraint(Constraint::at_most(vec![2.0, 1.0], 18.0))
///     .with_constraint(Constraint::at_most(vec![2.0, 3.0], 42.0))
///     .with_constraint(Constraint::at_most(vec![3.0, 1.0], 24.0));
/// assert_eq!(problem.num_variables(), 2);
/// assert!(problem.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Problem {
    /// Function to optimize.
    pub objective: Objective,

    /// Linear constraints, in row order.
    pub constraints: Vec<Constraint>,
}

impl Problem {
    /// Creates a problem with the given objective and no constraints.
    pub fn new(sense: ObjectiveSense, coefficients: Vec<f64>) -> Self {
        Self {
            objective: Objective {
                sense,
                coefficients,
            },
            constraints: Vec::new(),
        }
    }

    /// Creates a maximization problem.
    pub fn maximize(coefficients: Vec<f64>) -> Self {
        Self::new(ObjectiveSense::Max, coefficients)
    }

    /// Creates a minimization problem.
    pub fn minimize(coefficients: Vec<f64>) -> Self {
        Self::new(ObjectiveSense::Min, coefficients)
    }

    /// Appends a constraint.
    pub fn with_constraint(mut self, constraint: Constraint) -> Self {
        self.constraints.push(constraint);
        self
    }

    /// Appends a constraint in place.
    pub fn add_constraint(&mut self, constraint: Constraint) {
        self.constraints.push(constraint);
    }

    /// Number of decision variables.
    pub fn num_variables(&self) -> usize {
        self.objective.coefficients.len()
    }

    /// Number of constraints.
    pub fn num_constraints(&self) -> usize {
        self.constraints.len()
    }

    /// The textbook two-variable production problem:
    ///
    /// maximize `3x1 + 2x2` subject to `2x1 + x2 <= 18`,
    /// `2x1 + 3x2 <= 42`, `3x1 + x2 <= 24`.
    ///
    /// Its optimum is `x1 = 3, x2 = 12` with value `33`.
    pub fn example() -> Self {
        Self::maximize(vec![3.0, 2.0])
            .with_constraint(Constraint::at_most(vec![2.0, 1.0], 18.0))
            .with_constraint(Constraint::at_most(vec![2.0, 3.0], 42.0))
            .with_constraint(Constraint::at_most(vec![3.0, 1.0], 24.0))
    }

    /// Checks dimensions and values.
    pub fn validate(&self) -> Result<(), ProblemError> {
        let n = self.num_variables();
        let m = self.num_constraints();
        if n == 0 {
            return Err(ProblemError::NoVariables);
        }
        if n > MAX_DIMENSION {
            return Err(ProblemError::TooManyVariables(n));
        }
        if m == 0 {
            return Err(ProblemError::NoConstraints);
        }
        if m > MAX_DIMENSION {
            return Err(ProblemError::TooManyConstraints(m));
        }

        for (j, &c) in self.objective.coefficients.iter().enumerate() {
            if !c.is_finite() {
                return Err(ProblemError::NonFinite {
                    location: format!("objective coefficient x{}", j + 1),
                    value: c,
                });
            }
        }

        for (i, constraint) in self.constraints.iter().enumerate() {
            if constraint.coefficients.len() != n {
                return Err(ProblemError::CoefficientCount {
                    constraint: i + 1,
                    expected: n,
                    found: constraint.coefficients.len(),
                });
            }
            if let Some((j, &c)) = constraint
                .coefficients
                .iter()
                .enumerate()
                .find(|(_, c)| !c.is_finite())
            {
                return Err(ProblemError::NonFinite {
                    location: format!("constraint {} coefficient x{}", i + 1, j + 1),
                    value: c,
                });
            }
            if !constraint.rhs.is_finite() {
                return Err(ProblemError::NonFinite {
                    location: format!("constraint {} right-hand side", i + 1),
                    value: constraint.rhs,
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_relation_parse() {
        assert_eq!("<=".parse::<Relation>().unwrap(), Relation::LessEqual);
        assert_eq!("≤".parse::<Relation>().unwrap(), Relation::LessEqual);
        assert_eq!(" = ".parse::<Relation>().unwrap(), Relation::Equal);
        assert_eq!("≥".parse::<Relation>().unwrap(), Relation::GreaterEqual);
        assert_eq!(
            "<".parse::<Relation>(),
            Err(ProblemError::UnknownRelation("<".into()))
        );
    }

    #[test]
    fn test_relation_display_roundtrip() {
        for r in [Relation::LessEqual, Relation::Equal, Relation::GreaterEqual] {
            assert_eq!(r.to_string().parse::<Relation>().unwrap(), r);
        }
    }

    #[test]
    fn test_example_is_valid() {
        let p = Problem::example();
        assert!(p.validate().is_ok());
        assert_eq!(p.num_variables(), 2);
        assert_eq!(p.num_constraints(), 3);
        assert_eq!(p.objective.sense, ObjectiveSense::Max);
    }

    #[test]
    fn test_validate_empty() {
        assert_eq!(
            Problem::maximize(vec![]).validate(),
            Err(ProblemError::NoVariables)
        );
        assert_eq!(
            Problem::maximize(vec![1.0]).validate(),
            Err(ProblemError::NoConstraints)
        );
    }

    #[test]
    fn test_validate_coefficient_count() {
        let p = Problem::maximize(vec![1.0, 1.0])
            .with_constraint(Constraint::at_most(vec![1.0, 1.0], 4.0))
            .with_constraint(Constraint::at_most(vec![1.0], 4.0));
        assert_eq!(
            p.validate(),
            Err(ProblemError::CoefficientCount {
                constraint: 2,
                expected: 2,
                found: 1
            })
        );
    }

    #[test]
    fn test_validate_too_large() {
        let p = Problem::maximize(vec![1.0; 11]);
        assert_eq!(p.validate(), Err(ProblemError::TooManyVariables(11)));

        let mut p = Problem::maximize(vec![1.0]);
        for _ in 0..11 {
            p.add_constraint(Constraint::at_most(vec![1.0], 1.0));
        }
        assert_eq!(p.validate(), Err(ProblemError::TooManyConstraints(11)));
    }

    #[test]
    fn test_validate_non_finite() {
        let p = Problem::minimize(vec![1.0]).with_constraint(Constraint::at_least(vec![f64::NAN], 1.0));
        assert!(matches!(
            p.validate(),
            Err(ProblemError::NonFinite { .. })
        ));

        let p = Problem::minimize(vec![1.0])
            .with_constraint(Constraint::at_least(vec![1.0], f64::INFINITY));
        let err = p.validate().unwrap_err();
        assert_eq!(
            err.to_string(),
            "non-finite value inf in constraint 1 right-hand side"
        );
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_deserialize_form_json() {
        let json = r#"{
            "objective": { "type": "min", "coefficients": [2, 3] },
            "constraints": [
                { "coefficients": [1, 1], "sign": ">=", "rhs": 10 },
                { "coefficients": [1, 0], "sign": "<=", "rhs": 8 }
            ]
        }"#;
        let p: Problem = serde_json::from_str(json).unwrap();
        assert_eq!(p.objective.sense, ObjectiveSense::Min);
        assert_eq!(p.constraints[0].relation, Relation::GreaterEqual);
        assert_eq!(p.constraints[1].relation, Relation::LessEqual);
        assert!((p.constraints[0].rhs - 10.0).abs() < 1e-12);
    }
}
