//! # A tableau simplex solver
//!
//! Linear programs of the form `max (or min) c x` subject to `A x <= b`, `x >= 0` with `b >= 0`
//! are solved using the tableau form of the Simplex Method. Every tableau visited is recorded, so
//! that the path to the optimum can be inspected afterwards. Once optimal, slacks and dual prices
//! of the constraints are derived from the final tableau.
//!
//! ```
//! use simplex_steps::{Constraint, Objective, Problem, Solve};
//!
//! let problem = Problem::new(
//!     Objective::Maximize,
//!     vec![3_f64, 2_f64],
//!     vec![
//!         Constraint::less(vec![1_f64, 1_f64], 4_f64),
//!         Constraint::less(vec![1_f64, 3_f64], 6_f64),
//!     ],
//! );
//! let report = problem.solve()?;
//! assert_eq!(report.solution.objective_value(), 12_f64);
//! assert_eq!(report.solution.values(), &[4_f64, 0_f64]);
//! # Ok::<(), simplex_steps::Error>(())
//! ```
#![warn(missing_docs)]

pub mod algorithm;
pub mod data;
pub mod error;
pub mod io;

pub use crate::algorithm::{Report, Solve};
pub use crate::algorithm::simplex::settings::Settings;
pub use crate::algorithm::simplex::step::{History, Pivot, Step, StepRow};
pub use crate::algorithm::simplex::strategy::pivot_rule::PivotRuleKind;
pub use crate::data::linear_program::elements::{ConstraintType, Objective};
pub use crate::data::linear_program::problem::{Constraint, Problem};
pub use crate::data::linear_program::solution::{Sensitivity, Solution};
pub use crate::error::{Error, Result};

#[cfg(test)]
mod tests;
