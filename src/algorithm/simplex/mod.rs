//! # The Simplex algorithm
//!
//! This module contains all data structures and logic specific to the tableau simplex method for
//! problems of the form `max (or min) c x` subject to `A x <= b`, `x >= 0` and `b >= 0`. In that
//! form, the slacks provide an initial basic feasible solution, so a single phase suffices.
use crate::algorithm::simplex::step::{History, Pivot};
use crate::algorithm::simplex::strategy::pivot_rule::PivotRule;
use crate::algorithm::simplex::tableau::{debug_assert_in_basic_feasible_solution_state, Tableau};
use crate::data::number_types::traits::Scalar;
use crate::error::{Error, Result};

pub mod settings;
pub mod step;
pub mod strategy;
pub mod tableau;

/// Reduces the cost of the basic feasible solution to the minimum.
///
/// While calling this method, a number of requirements should be satisfied:
/// - There should be a valid basis (not necessarily optimal)
/// - All constraint values need to be nonnegative (primal feasibility)
///
/// Before every pivot, the tableau is recorded in `history` together with the pivot. Once no
/// column improves the objective anymore, a final step describing the optimal value is recorded.
///
/// # Arguments
///
/// * `tableau`: Tableau in a basic feasible solution state. It is left in the optimal state.
/// * `max_iterations`: Maximum number of pivots to perform.
/// * `history`: Steps are appended to this history.
///
/// # Return value
///
/// The number of pivots performed.
///
/// # Errors
///
/// `Error::UnboundedProblem` if an improving column has no leaving row, `Error::IterationLimit` if
/// the optimum was not reached within `max_iterations` pivots.
pub fn primal<F, PR>(
    tableau: &mut Tableau<F>,
    max_iterations: usize,
    history: &mut History<F>,
) -> Result<usize>
where
    F: Scalar,
    PR: PivotRule,
{
    let mut rule = PR::new(tableau);
    let mut iterations = 0;
    loop {
        debug_assert_in_basic_feasible_solution_state(tableau);
        log::trace!("{tableau}");

        match rule.select_primal_pivot_column(tableau) {
            Some((column, cost)) => match tableau.select_primal_pivot_row(column) {
                Some(row) => {
                    if iterations == max_iterations {
                        log::warn!("Stopping after {iterations} iterations without reaching an optimum");
                        break Err(Error::IterationLimit { iterations });
                    }

                    log::debug!(
                        "Iteration {}: {} enters with relative cost {}, {} leaves with ratio {}",
                        iterations + 1,
                        tableau.column_label(column),
                        cost,
                        tableau.row_label(row),
                        tableau.rhs(row) / tableau.get(row, column),
                    );
                    history.push(tableau.snapshot(Some(Pivot { row, column }), String::new()));
                    tableau.pivot(row, column);
                    iterations += 1;
                },
                None => {
                    log::warn!("Problem is unbounded along {}", tableau.column_label(column));
                    break Err(Error::UnboundedProblem { column });
                },
            },
            None => {
                let optimal_value = tableau.optimal_value();
                log::info!("Optimal value {optimal_value:.2} reached after {iterations} iterations");

                let description = format!("Optimal solution reached. Optimal value: {optimal_value:.2}");
                history.push(tableau.snapshot(None, description));
                break Ok(iterations);
            },
        }
    }
}
