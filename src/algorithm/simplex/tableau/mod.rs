//! # Data structures for Simplex
//!
//! Contains the simplex tableau and logic for elementary operations which can be performed upon it.
//!
//! The tableau is stored densely. Row `0` is the objective row, the other rows correspond to the
//! constraints in the order of the problem. Columns are grouped: decision variables, one slack
//! per constraint and the right-hand side last.
use std::fmt::{Display, Formatter, Result as FormatResult};

use cumsum::cumsum_array_owned;
use enum_map::{Enum, EnumMap, enum_map};
use itertools::repeat_n;

use crate::algorithm::simplex::step::{Pivot, Step, StepRow};
use crate::data::linear_program::elements::{ConstraintType, Objective};
use crate::data::linear_program::problem::Problem;
use crate::data::linear_program::solution::Solution;
use crate::data::number_types::tolerance::Tolerance;
use crate::data::number_types::traits::Scalar;
use crate::error::{Error, Result};

/// Groups of columns, in the order in which they appear.
#[derive(Enum, Debug, Copy, Clone, Eq, PartialEq)]
pub enum ColumnType {
    /// Variables for which we want a solution.
    Decision,
    /// One slack per constraint, together forming an identity matrix at construction.
    Slack,
    /// Constraint values, and the objective value in row `0`.
    RightHandSide,
}

/// The most high-level data structure that is used by the Simplex algorithm: the Simplex tableau.
///
/// It owns all numbers describing the current basic solution and is mutated in place by every
/// pivot.
#[derive(Debug, Clone, PartialEq)]
pub struct Tableau<F> {
    /// Represents a matrix of size (m + 1) x (n + m + 1).
    rows: Vec<Vec<F>>,
    /// For each constraint row, the index of the column currently basic in it.
    ///
    /// Index `i` describes row `i + 1`.
    basis_indices: Vec<usize>,
    /// Exclusive end index of each column group.
    column_group_end: EnumMap<ColumnType, usize>,
    /// The objective row holds `-c` when maximizing and `c` when minimizing, such that a negative
    /// relative cost always indicates an improving column.
    direction: Objective,
    tolerance: Tolerance<F>,
}

impl<F: Scalar> Tableau<F> {
    /// Build the initial tableau of a problem.
    ///
    /// All slacks form the initial basis, so that the decision variables are all zero.
    ///
    /// # Errors
    ///
    /// `Error::InvalidProblem` if the problem is not consistent or a right-hand side is negative,
    /// `Error::UnsupportedConstraintKind` for any constraint that is not of type `<=`.
    pub fn new(problem: &Problem<F>, tolerance: Tolerance<F>) -> Result<Self> {
        problem.validate()?;

        let nr_variables = problem.nr_variables();
        let nr_constraints = problem.nr_constraints();
        let cumulative = cumsum_array_owned([nr_variables, nr_constraints, 1]);
        let column_group_end = enum_map! {
            ColumnType::Decision      => cumulative[0],
            ColumnType::Slack         => cumulative[1],
            ColumnType::RightHandSide => cumulative[2],
        };

        let direction = problem.direction();
        let objective_row = problem.cost().iter()
            .map(|&cost| match direction {
                Objective::Maximize => -cost,
                Objective::Minimize => cost,
            })
            .chain(repeat_n(F::zero(), nr_constraints + 1))
            .collect::<Vec<_>>();

        let mut rows = Vec::with_capacity(nr_constraints + 1);
        rows.push(objective_row);
        for (index, constraint) in problem.constraints().iter().enumerate() {
            if constraint.kind != ConstraintType::Less {
                return Err(Error::UnsupportedConstraintKind { index, kind: constraint.kind });
            }
            if constraint.rhs < F::zero() {
                return Err(Error::InvalidProblem(format!(
                    "constraint {} has negative right-hand side {}", index, constraint.rhs,
                )));
            }

            let mut row = constraint.coefficients.iter()
                .copied()
                .chain(repeat_n(F::zero(), nr_constraints))
                .chain(Some(constraint.rhs))
                .collect::<Vec<_>>();
            row[nr_variables + index] = F::one();
            rows.push(row);
        }

        let tableau = Self {
            rows,
            basis_indices: (column_group_end[ColumnType::Decision]..column_group_end[ColumnType::Slack]).collect(),
            column_group_end,
            direction,
            tolerance,
        };
        debug_assert_in_basic_feasible_solution_state(&tableau);

        Ok(tableau)
    }

    /// Pivot on a single cell, bringing `pivot_column_index` into the basis in place of the
    /// variable that is basic in `pivot_row_index`.
    ///
    /// The pivot row is divided by the pivot value, after which the pivot column is eliminated
    /// from every other row, including the objective row.
    ///
    /// # Arguments
    ///
    /// * `pivot_row_index`: Constraint row, in range `1` until `self.nr_rows()`.
    /// * `pivot_column_index`: Column not yet in the basis, in range `0` until `self.nr_columns()`.
    /// The value at the pivot position should be nonzero.
    pub fn pivot(&mut self, pivot_row_index: usize, pivot_column_index: usize) {
        debug_assert!(pivot_row_index > 0 && pivot_row_index < self.nr_rows());
        debug_assert!(pivot_column_index < self.nr_columns());

        let pivot_value = self.rows[pivot_row_index][pivot_column_index];
        debug_assert_ne!(pivot_value, F::zero(), "pivot at ({pivot_row_index}, {pivot_column_index}) is zero");

        for value in &mut self.rows[pivot_row_index] {
            *value = *value / pivot_value;
        }

        let pivot_row = self.rows[pivot_row_index].clone();
        for (i, row) in self.rows.iter_mut().enumerate() {
            if i == pivot_row_index {
                continue;
            }

            let factor = row[pivot_column_index];
            if factor != F::zero() {
                for (value, &pivot_row_value) in row.iter_mut().zip(&pivot_row) {
                    *value = *value - factor * pivot_row_value;
                }
            }
        }

        self.basis_indices[pivot_row_index - 1] = pivot_column_index;
    }

    /// Determine the row to pivot on, given the column.
    ///
    /// This is the ratio test: among the rows with a positive coefficient in the column, the one
    /// with the smallest ratio of right-hand side to coefficient. Ties go to the row found first.
    /// A right-hand side within the tolerance of zero counts as zero, so that ratios are never
    /// negative.
    ///
    /// # Return value
    ///
    /// Index of the row to pivot on. If not found, the problem is unbounded along this column.
    pub fn select_primal_pivot_row(&self, column: usize) -> Option<usize> {
        debug_assert!(column < self.nr_columns());

        // (chosen index, minimum ratio)
        let mut min_values: Option<(usize, F)> = None;
        for row in 1..self.nr_rows() {
            let xij = self.rows[row][column];
            if self.tolerance.is_positive(xij) {
                let rhs = self.rhs(row);
                let rhs = if self.tolerance.is_zero(rhs) { F::zero() } else { rhs };
                let ratio = rhs / xij;
                if let Some((min_index, min_ratio)) = &mut min_values {
                    if ratio < *min_ratio {
                        *min_index = row;
                        *min_ratio = ratio;
                    }
                } else {
                    min_values = Some((row, ratio));
                }
            }
        }

        min_values.map(|(min_index, _)| min_index)
    }

    /// Whether no column has a significantly negative relative cost.
    pub fn is_optimal(&self) -> bool {
        (0..self.nr_columns()).all(|j| !self.tolerance.is_negative(self.relative_cost(j)))
    }

    /// Get the current basic solution, restricted to the decision variables.
    ///
    /// A decision variable is basic when its column is a unit vector (the objective row
    /// included), and the row holding the one has that column as its basic variable. Its value is
    /// the right-hand side of that row; all other variables are zero.
    pub fn current_bfs(&self) -> Vec<F> {
        (0..self.nr_decision_variables())
            .map(|j| self.basic_row(j).map_or(F::zero(), |i| self.rhs(i)))
            .collect()
    }

    /// Row in which a column is basic.
    fn basic_row(&self, column: usize) -> Option<usize> {
        let mut found = None;
        for (i, row) in self.rows.iter().enumerate() {
            let value = row[column];
            if i > 0 && found.is_none() && self.tolerance.is_one(value) {
                found = Some(i);
            } else if !self.tolerance.is_zero(value) {
                return None;
            }
        }

        // Identical unit columns can only be basic once
        found.filter(|&i| self.basis_column_index_for_row(i) == column)
    }

    /// Value of the objective row's right-hand side.
    ///
    /// This is the objective value when maximizing and its negation when minimizing.
    pub fn objective_function_value(&self) -> F {
        self.rhs(0)
    }

    /// Value of the objective function of the problem at the current basic solution.
    pub fn optimal_value(&self) -> F {
        let value = self.objective_function_value();
        match self.direction {
            Objective::Maximize => value,
            Objective::Minimize => F::zero() - value,
        }
    }

    /// Read the solution from the tableau.
    ///
    /// Does not modify the tableau, so repeated calls give the same result.
    pub fn extract_solution(&self) -> Solution<F> {
        Solution::new(self.optimal_value(), self.current_bfs())
    }

    /// Record the current state of the tableau.
    ///
    /// # Arguments
    ///
    /// * `pivot`: The pivot about to be performed, if any.
    /// * `description`: Human-readable text accompanying the snapshot.
    pub fn snapshot(&self, pivot: Option<Pivot>, description: String) -> Step<F> {
        let rhs = self.rhs_index();
        let rows = self.rows.iter()
            .enumerate()
            .map(|(i, row)| StepRow {
                basis: self.row_label(i),
                values: row[..rhs].to_vec(),
                rhs: row[rhs],
            })
            .collect();

        Step::new(self.headers(), rows, description, pivot)
    }

    /// Labels of all columns except the right-hand side.
    pub fn headers(&self) -> Vec<String> {
        (0..self.nr_columns()).map(|j| self.column_label(j)).collect()
    }

    /// Label of a column: `X1`, `X2`, ... for decision variables, `S1`, `S2`, ... for slacks.
    pub fn column_label(&self, column: usize) -> String {
        match self.column_type(column) {
            ColumnType::Decision => format!("X{}", column + 1),
            ColumnType::Slack => format!("S{}", column - self.column_group_end[ColumnType::Decision] + 1),
            ColumnType::RightHandSide => "R".to_string(),
        }
    }

    /// Label of a row: `Z` for the objective row, the basic variable's label otherwise.
    pub fn row_label(&self, row: usize) -> String {
        if row == 0 {
            "Z".to_string()
        } else {
            self.column_label(self.basis_column_index_for_row(row))
        }
    }

    /// Group a column belongs to.
    pub fn column_type(&self, column: usize) -> ColumnType {
        debug_assert!(column < self.column_group_end[ColumnType::RightHandSide]);

        if column < self.column_group_end[ColumnType::Decision] {
            ColumnType::Decision
        } else if column < self.column_group_end[ColumnType::Slack] {
            ColumnType::Slack
        } else {
            ColumnType::RightHandSide
        }
    }

    /// Coefficient of a column in the objective row.
    pub fn relative_cost(&self, column: usize) -> F {
        debug_assert!(column < self.nr_columns());

        self.rows[0][column]
    }

    /// Single element of the tableau.
    pub fn get(&self, row: usize, column: usize) -> F {
        self.rows[row][column]
    }

    /// Right-hand side of a row.
    pub fn rhs(&self, row: usize) -> F {
        self.rows[row][self.rhs_index()]
    }

    /// A full row, the right-hand side included.
    pub fn row(&self, row: usize) -> &[F] {
        &self.rows[row]
    }

    /// Index of the slack column of a constraint.
    pub fn slack_column(&self, constraint: usize) -> usize {
        debug_assert!(constraint < self.nr_constraints());

        self.column_group_end[ColumnType::Decision] + constraint
    }

    /// Index of the column that is basic in a constraint row.
    pub fn basis_column_index_for_row(&self, row: usize) -> usize {
        debug_assert!(row > 0 && row < self.nr_rows());

        self.basis_indices[row - 1]
    }

    /// Whether a column is in the basis.
    pub fn is_in_basis(&self, column: usize) -> bool {
        debug_assert!(column < self.nr_columns());

        self.basis_indices.contains(&column)
    }

    fn rhs_index(&self) -> usize {
        self.column_group_end[ColumnType::Slack]
    }

    /// Number of rows in the tableau, the objective row included.
    pub fn nr_rows(&self) -> usize {
        self.rows.len()
    }

    /// Number of constraints.
    pub fn nr_constraints(&self) -> usize {
        self.basis_indices.len()
    }

    /// Number of decision variables.
    pub fn nr_decision_variables(&self) -> usize {
        self.column_group_end[ColumnType::Decision]
    }

    /// Number of variables, decision variables and slacks, in the tableau.
    pub fn nr_columns(&self) -> usize {
        self.column_group_end[ColumnType::Slack]
    }

    /// Direction of optimization of the problem this tableau was built for.
    pub fn direction(&self) -> Objective {
        self.direction
    }

    /// Tolerance used for all comparisons.
    pub fn tolerance(&self) -> Tolerance<F> {
        self.tolerance
    }
}

/// Check whether the tableau currently has a valid basic feasible solution.
///
/// Only used for debug purposes.
pub fn debug_assert_in_basic_feasible_solution_state<F: Scalar>(tableau: &Tableau<F>) {
    debug_assert_eq!(tableau.basis_indices.len(), tableau.nr_rows() - 1);
    debug_assert!(tableau.rows.iter().all(|row| row.len() == tableau.nr_columns() + 1));

    for i in 1..tableau.nr_rows() {
        let value = tableau.rhs(i);
        debug_assert!(
            tableau.tolerance.is_nonnegative(value),
            "rhs is not always nonnegative: at row {} we have {} < 0", i, value,
        );
    }
}

impl<F: Scalar> Display for Tableau<F> {
    fn fmt(&self, f: &mut Formatter) -> FormatResult {
        writeln!(f, "=== Tableau ({}) ===", self.direction)?;
        Display::fmt(&self.snapshot(None, String::new()), f)
    }
}
