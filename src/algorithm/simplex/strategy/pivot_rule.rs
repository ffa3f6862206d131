//! # Pivot rules
//!
//! Strategies for choosing the column that enters the basis.
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::algorithm::simplex::tableau::Tableau;
use crate::data::number_types::traits::Scalar;
use crate::error::Error;

/// Deciding how to pivot.
///
/// During the Simplex method, one needs to decide how to move from basic solution to basic
/// solution. The pivot rule describes that behavior.
///
/// Once the column has been selected, a row needs to be found. This decision is made by the
/// ratio test of the tableau, independent of the rule.
pub trait PivotRule {
    /// Create a new instance.
    fn new<F: Scalar>(tableau: &Tableau<F>) -> Self;

    /// Column selection rule for the primal Simplex method.
    ///
    /// # Return value
    ///
    /// The column index together with its relative cost, or `None` if no column improves the
    /// objective, that is, if the tableau is optimal.
    fn select_primal_pivot_column<F: Scalar>(&mut self, tableau: &Tableau<F>) -> Option<(usize, F)>;
}

/// Improving columns and their relative cost, in column order.
fn profitable_columns<F: Scalar>(tableau: &Tableau<F>) -> impl Iterator<Item = (usize, F)> + '_ {
    let tolerance = tableau.tolerance();
    (0..tableau.nr_columns())
        .filter(move |&column| !tableau.is_in_basis(column))
        .map(move |column| (column, tableau.relative_cost(column)))
        .filter(move |&(_, cost)| tolerance.is_negative(cost))
}

/// Simply pivot on the column, which has the most negative relative cost.
///
/// Of several columns with the same cost, the first is chosen.
pub struct SteepestDescentAlongVariable;
impl PivotRule for SteepestDescentAlongVariable {
    fn new<F: Scalar>(_tableau: &Tableau<F>) -> Self {
        Self
    }

    fn select_primal_pivot_column<F: Scalar>(&mut self, tableau: &Tableau<F>) -> Option<(usize, F)> {
        let mut smallest: Option<(usize, F)> = None;
        for (j, cost) in profitable_columns(tableau) {
            if let Some((existing_j, existing_cost)) = smallest.as_mut() {
                if cost < *existing_cost {
                    *existing_j = j;
                    *existing_cost = cost;
                }
            } else {
                smallest = Some((j, cost))
            }
        }

        smallest
    }
}

/// Simply pivot on the first column, which has a negative relative cost.
pub struct FirstProfitable;
impl PivotRule for FirstProfitable {
    fn new<F: Scalar>(_tableau: &Tableau<F>) -> Self {
        Self
    }

    fn select_primal_pivot_column<F: Scalar>(&mut self, tableau: &Tableau<F>) -> Option<(usize, F)> {
        profitable_columns(tableau).next()
    }
}

/// Selects one of the pivot rules at runtime.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PivotRuleKind {
    /// `SteepestDescentAlongVariable`.
    #[default]
    SteepestDescent,
    /// `FirstProfitable`.
    FirstProfitable,
}

impl fmt::Display for PivotRuleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            PivotRuleKind::SteepestDescent => "steepest-descent",
            PivotRuleKind::FirstProfitable => "first-profitable",
        })
    }
}

impl FromStr for PivotRuleKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "steepest-descent" | "dantzig" => Ok(PivotRuleKind::SteepestDescent),
            "first-profitable" | "first" => Ok(PivotRuleKind::FirstProfitable),
            other => Err(Error::InvalidSettings(format!("unknown pivot rule `{other}`"))),
        }
    }
}
