//! # Representation of optimal solutions
//!
//! Once the tableau is optimal, the values of the decision variables and the objective function
//! are read from it. Together with the per constraint sensitivity data, this is what a user of the
//! solver typically wants to see.
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::data::number_types::tolerance::Tolerance;
use crate::data::number_types::traits::Scalar;

/// Values of the decision variables at an optimum, paired with the optimal objective value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Solution<F> {
    /// Value of the objective function for this solution, in the direction of the problem.
    #[serde(rename = "optimalValue")]
    objective_value: F,
    /// One value per decision variable.
    #[serde(rename = "solution")]
    values: Vec<F>,
}

impl<F: Scalar> Solution<F> {
    /// Create a new `Solution` instance.
    pub fn new(objective_value: F, values: Vec<F>) -> Self {
        Self { objective_value, values }
    }

    /// Optimal objective function value.
    pub fn objective_value(&self) -> F {
        self.objective_value
    }

    /// Decision variable values, in the order of the problem's variables.
    pub fn values(&self) -> &[F] {
        &self.values
    }

    /// Value of a single decision variable.
    pub fn value(&self, variable: usize) -> F {
        self.values[variable]
    }
}

/// Per constraint sensitivity data at an optimum.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Sensitivity<F> {
    /// Right-hand side minus the left-hand side evaluated at the solution.
    pub slack_surplus: F,
    /// Change of the optimal value per unit increase of the right-hand side.
    pub dual_price: F,
}

impl<F: Scalar> Sensitivity<F> {
    /// Whether the constraint is tight at the solution.
    pub fn is_binding(&self, tolerance: Tolerance<F>) -> bool {
        tolerance.is_zero(self.slack_surplus)
    }
}

impl<F: Scalar> fmt::Display for Solution<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (j, value) in self.values.iter().enumerate() {
            writeln!(f, "X{} = {:.2}", j + 1, value)?;
        }
        write!(f, "Optimal value: {:.2}", self.objective_value)
    }
}
