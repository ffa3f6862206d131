//! # Algorithms
use serde::{Deserialize, Serialize};

use crate::algorithm::simplex::primal;
use crate::algorithm::simplex::settings::Settings;
use crate::algorithm::simplex::step::History;
use crate::algorithm::simplex::strategy::pivot_rule::{FirstProfitable, PivotRuleKind, SteepestDescentAlongVariable};
use crate::algorithm::simplex::tableau::Tableau;
use crate::data::linear_program::problem::Problem;
use crate::data::linear_program::solution::{Sensitivity, Solution};
use crate::data::number_types::traits::Scalar;
use crate::error::Result;

pub mod sensitivity;
pub mod simplex;

/// A problem formulation that can be solved to optimality.
pub trait Solve<F> {
    /// Solve the problem with the given settings.
    ///
    /// # Return value
    ///
    /// The solution, the steps taken to find it and the sensitivity data of every constraint.
    ///
    /// # Errors
    ///
    /// Any error aborts the solve; no partial result is available.
    fn solve_with(&self, settings: &Settings<F>) -> Result<Report<F>>;

    /// Solve the problem with the default settings.
    fn solve(&self) -> Result<Report<F>>
    where
        F: Scalar,
    {
        self.solve_with(&Settings::default())
    }
}

impl<F: Scalar> Solve<F> for Problem<F> {
    fn solve_with(&self, settings: &Settings<F>) -> Result<Report<F>> {
        settings.validate()?;

        let mut tableau = Tableau::new(self, settings.tolerance())?;
        let mut steps = History::new();
        let iterations = match settings.pivot_rule {
            PivotRuleKind::SteepestDescent => primal::<_, SteepestDescentAlongVariable>(
                &mut tableau, settings.max_iterations, &mut steps,
            ),
            PivotRuleKind::FirstProfitable => primal::<_, FirstProfitable>(
                &mut tableau, settings.max_iterations, &mut steps,
            ),
        }?;

        let solution = tableau.extract_solution();
        let sensitivity = sensitivity::analyse(self, &tableau, &solution);

        Ok(Report { solution, sensitivity, steps, iterations })
    }
}

/// Everything a solve produces.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report<F> {
    /// Decision variable values and the optimal objective value.
    #[serde(flatten)]
    pub solution: Solution<F>,
    /// Slack and dual price per constraint, in constraint order.
    pub sensitivity: Vec<Sensitivity<F>>,
    /// Every tableau visited, the final one last.
    pub steps: History<F>,
    /// Number of pivots performed.
    pub iterations: usize,
}
