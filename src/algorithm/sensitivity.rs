//! # Sensitivity analysis
//!
//! Slack and dual price of every constraint, derived from an optimal tableau and the solution read
//! from it.
use crate::algorithm::simplex::tableau::Tableau;
use crate::data::linear_program::elements::Objective;
use crate::data::linear_program::problem::Problem;
use crate::data::linear_program::solution::{Sensitivity, Solution};
use crate::data::number_types::traits::Scalar;

/// Compute the sensitivity entry of every constraint, in constraint order.
///
/// The slack is the right-hand side minus the original left-hand side evaluated at the solution.
/// The dual price is the objective row's coefficient in the constraint's slack column, signed such
/// that it is the change of the reported optimal value per unit increase of the right-hand side.
///
/// # Arguments
///
/// * `problem`: The problem that `tableau` was built for.
/// * `tableau`: Tableau in its final, optimal state.
/// * `solution`: Solution extracted from that same tableau.
pub fn analyse<F: Scalar>(
    problem: &Problem<F>,
    tableau: &Tableau<F>,
    solution: &Solution<F>,
) -> Vec<Sensitivity<F>> {
    debug_assert_eq!(problem.nr_constraints(), tableau.nr_constraints());
    debug_assert_eq!(solution.values().len(), tableau.nr_decision_variables());

    problem.constraints().iter()
        .enumerate()
        .map(|(i, constraint)| {
            let cost = tableau.relative_cost(tableau.slack_column(i));
            Sensitivity {
                slack_surplus: constraint.rhs - constraint.evaluate(solution.values()),
                dual_price: match tableau.direction() {
                    Objective::Maximize => cost,
                    Objective::Minimize => F::zero() - cost,
                },
            }
        })
        .collect()
}
