//! # Problem description
//!
//! A linear program in the form the tableau builder reads: a linear objective with a direction,
//! and a list of constraints over nonnegative decision variables.
use serde::{Deserialize, Serialize};

use crate::data::linear_program::elements::{ConstraintType, Objective};
use crate::data::number_types::tolerance::Tolerance;
use crate::data::number_types::traits::Scalar;
use crate::error::{Error, Result};

/// A single linear constraint `coefficients · x (kind) rhs`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Constraint<F> {
    /// One coefficient per decision variable.
    pub coefficients: Vec<F>,
    /// Relation between the left- and right-hand side.
    #[serde(rename = "sign")]
    pub kind: ConstraintType,
    /// Right-hand side.
    #[serde(rename = "value")]
    pub rhs: F,
}

impl<F: Scalar> Constraint<F> {
    /// Create a new constraint.
    pub fn new(coefficients: Vec<F>, kind: ConstraintType, rhs: F) -> Self {
        Self { coefficients, kind, rhs }
    }

    /// Create a `<=` constraint.
    pub fn less(coefficients: Vec<F>, rhs: F) -> Self {
        Self::new(coefficients, ConstraintType::Less, rhs)
    }

    /// Value of the left-hand side at `x`.
    ///
    /// # Arguments
    ///
    /// * `x`: One value per decision variable.
    pub fn evaluate(&self, x: &[F]) -> F {
        debug_assert_eq!(x.len(), self.coefficients.len());

        self.coefficients.iter()
            .zip(x)
            .fold(F::zero(), |total, (&a, &x)| total + a * x)
    }

    /// Whether `x` satisfies this constraint, up to the tolerance.
    pub fn is_satisfied_by(&self, x: &[F], tolerance: Tolerance<F>) -> bool {
        let difference = self.rhs - self.evaluate(x);
        match self.kind {
            ConstraintType::Less => tolerance.is_nonnegative(difference),
            ConstraintType::Greater => tolerance.is_nonnegative(-difference),
            ConstraintType::Equal => tolerance.is_zero(difference),
        }
    }
}

/// A linear program over nonnegative decision variables.
///
/// The declared counts are kept next to the data, as they appear in problem files; `validate`
/// checks that they agree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Problem<F> {
    /// Number of decision variables.
    #[serde(rename = "numVars")]
    nr_variables: usize,
    /// Number of constraints.
    #[serde(rename = "numConstraints")]
    nr_constraints: usize,
    /// Objective function coefficient per decision variable.
    #[serde(rename = "objective")]
    cost: Vec<F>,
    constraints: Vec<Constraint<F>>,
    #[serde(rename = "optimizationSense", alias = "optimization")]
    direction: Objective,
}

impl<F: Scalar> Problem<F> {
    /// Create a new problem, deriving the counts from the data.
    ///
    /// # Arguments
    ///
    /// * `direction`: Whether to maximize or minimize.
    /// * `cost`: Objective coefficient per decision variable.
    /// * `constraints`: Constraints, in the order in which they should appear in the tableau.
    pub fn new(direction: Objective, cost: Vec<F>, constraints: Vec<Constraint<F>>) -> Self {
        Self {
            nr_variables: cost.len(),
            nr_constraints: constraints.len(),
            cost,
            constraints,
            direction,
        }
    }

    /// Check that the problem is structurally sound.
    ///
    /// This does not look at constraint kinds or signs of right-hand sides; whether those can be
    /// handled is up to the algorithm.
    pub fn validate(&self) -> Result<()> {
        if self.nr_variables == 0 {
            return Err(Error::InvalidProblem("at least one decision variable is needed".to_string()));
        }
        if self.nr_constraints == 0 {
            return Err(Error::InvalidProblem("at least one constraint is needed".to_string()));
        }
        if self.cost.len() != self.nr_variables {
            return Err(Error::InvalidProblem(format!(
                "{} variables declared, but the objective has {} coefficients",
                self.nr_variables, self.cost.len(),
            )));
        }
        if self.constraints.len() != self.nr_constraints {
            return Err(Error::InvalidProblem(format!(
                "{} constraints declared, but {} given",
                self.nr_constraints, self.constraints.len(),
            )));
        }
        if self.cost.iter().any(|c| !c.is_finite()) {
            return Err(Error::InvalidProblem("objective coefficients should be finite".to_string()));
        }

        for (index, constraint) in self.constraints.iter().enumerate() {
            if constraint.coefficients.len() != self.nr_variables {
                return Err(Error::InvalidProblem(format!(
                    "constraint {} has {} coefficients, expected {}",
                    index, constraint.coefficients.len(), self.nr_variables,
                )));
            }
            if !constraint.rhs.is_finite() || constraint.coefficients.iter().any(|a| !a.is_finite()) {
                return Err(Error::InvalidProblem(format!("constraint {index} has a non-finite value")));
            }
        }

        Ok(())
    }

    /// Number of decision variables.
    pub fn nr_variables(&self) -> usize {
        self.nr_variables
    }

    /// Number of constraints.
    pub fn nr_constraints(&self) -> usize {
        self.nr_constraints
    }

    /// Objective coefficients.
    pub fn cost(&self) -> &[F] {
        &self.cost
    }

    /// All constraints, in order.
    pub fn constraints(&self) -> &[Constraint<F>] {
        &self.constraints
    }

    /// Direction of optimization.
    pub fn direction(&self) -> Objective {
        self.direction
    }

    /// Objective function value at `x`.
    pub fn objective_value_at(&self, x: &[F]) -> F {
        debug_assert_eq!(x.len(), self.cost.len());

        self.cost.iter()
            .zip(x)
            .fold(F::zero(), |total, (&c, &x)| total + c * x)
    }

    /// Whether `x` is nonnegative and satisfies all constraints, up to the tolerance.
    pub fn is_feasible(&self, x: &[F], tolerance: Tolerance<F>) -> bool {
        x.len() == self.nr_variables
            && x.iter().all(|&value| tolerance.is_nonnegative(value))
            && self.constraints.iter().all(|constraint| constraint.is_satisfied_by(x, tolerance))
    }
}

#[cfg(test)]
mod test {
    use crate::data::linear_program::elements::{ConstraintType, Objective};
    use crate::data::linear_program::problem::{Constraint, Problem};
    use crate::data::number_types::tolerance::Tolerance;
    use crate::error::Error;

    #[test]
    fn counts_are_derived() {
        let problem = Problem::new(
            Objective::Maximize,
            vec![3_f64, 2_f64],
            vec![Constraint::less(vec![1_f64, 1_f64], 4_f64)],
        );
        assert_eq!(problem.nr_variables(), 2);
        assert_eq!(problem.nr_constraints(), 1);
        assert_eq!(problem.validate(), Ok(()));
    }

    #[test]
    fn wrong_number_of_coefficients() {
        let problem = Problem::new(
            Objective::Maximize,
            vec![3_f64, 2_f64],
            vec![Constraint::less(vec![1_f64], 4_f64)],
        );
        assert!(matches!(problem.validate(), Err(Error::InvalidProblem(_))));
    }

    #[test]
    fn empty() {
        let problem = Problem::<f64>::new(Objective::Minimize, vec![], vec![]);
        assert!(matches!(problem.validate(), Err(Error::InvalidProblem(_))));

        let problem = Problem::new(Objective::Minimize, vec![1_f64], vec![]);
        assert!(matches!(problem.validate(), Err(Error::InvalidProblem(_))));
    }

    #[test]
    fn non_finite() {
        let problem = Problem::new(
            Objective::Maximize,
            vec![f64::NAN],
            vec![Constraint::less(vec![1_f64], 4_f64)],
        );
        assert!(matches!(problem.validate(), Err(Error::InvalidProblem(_))));

        let problem = Problem::new(
            Objective::Maximize,
            vec![1_f64],
            vec![Constraint::less(vec![1_f64], f64::INFINITY)],
        );
        assert!(matches!(problem.validate(), Err(Error::InvalidProblem(_))));
    }

    #[test]
    fn declared_counts_disagree() {
        let json = r#"{
            "numVars": 3,
            "numConstraints": 1,
            "objective": [1, 2],
            "constraints": [{ "coefficients": [1, 1], "value": 4, "sign": "<=" }],
            "optimizationSense": "maximize"
        }"#;
        let problem: Problem<f64> = serde_json::from_str(json).unwrap();
        assert!(matches!(problem.validate(), Err(Error::InvalidProblem(_))));
    }

    #[test]
    fn feasibility() {
        let problem = Problem::new(
            Objective::Maximize,
            vec![1_f64, 1_f64],
            vec![
                Constraint::less(vec![1_f64, 1_f64], 4_f64),
                Constraint::new(vec![1_f64, 0_f64], ConstraintType::Greater, 1_f64),
            ],
        );
        let tolerance = Tolerance::default();
        assert!(problem.is_feasible(&[1_f64, 3_f64], tolerance));
        assert!(!problem.is_feasible(&[0.5_f64, 3_f64], tolerance));
        assert!(!problem.is_feasible(&[2_f64, 3_f64], tolerance));
        assert!(!problem.is_feasible(&[-1_f64, 3_f64], tolerance));
        assert_eq!(problem.objective_value_at(&[1_f64, 3_f64]), 4_f64);
    }
}
