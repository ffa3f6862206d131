//! # Step history
//!
//! Every tableau the simplex method passes through is recorded as an immutable `Step`. The full,
//! ordered history is part of the result of a solve; storing or showing it is up to the caller.
use std::fmt;

use itertools::Itertools;
use serde::{Deserialize, Serialize};

use crate::data::number_types::traits::Scalar;

/// Position of a pivot in the tableau.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
pub struct Pivot {
    /// Row index, row `0` being the objective row.
    pub row: usize,
    /// Column index of the entering variable.
    pub column: usize,
}

/// A single row of a recorded tableau.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StepRow<F> {
    /// Label of the basic variable of this row, or `Z` for the objective row.
    #[serde(rename = "Base")]
    pub basis: String,
    /// Coefficients, excluding the right-hand side.
    pub values: Vec<F>,
    /// Right-hand side.
    #[serde(rename = "RHS")]
    pub rhs: F,
}

/// Snapshot of the tableau at one point of the simplex method.
///
/// Deserialized steps are checked for consistency: every row has one value per header, and a
/// pivot lies on a constraint row and a labeled column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawStep<F>", bound(deserialize = "F: Deserialize<'de>"))]
pub struct Step<F> {
    /// Column labels: the decision variables followed by the slack variables.
    headers: Vec<String>,
    /// The objective row followed by one row per constraint.
    rows: Vec<StepRow<F>>,
    /// Empty for intermediate steps, the optimal value for the final step.
    description: String,
    /// The pivot that was performed on this tableau, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pivot: Option<Pivot>,
}

/// A `Step` as read from a file, before its shape is checked.
#[derive(Deserialize)]
struct RawStep<F> {
    headers: Vec<String>,
    rows: Vec<StepRow<F>>,
    description: String,
    #[serde(default)]
    pivot: Option<Pivot>,
}

impl<F> TryFrom<RawStep<F>> for Step<F> {
    type Error = String;

    fn try_from(raw: RawStep<F>) -> Result<Self, Self::Error> {
        let RawStep { headers, rows, description, pivot } = raw;

        if let Some(row) = rows.iter().find(|row| row.values.len() != headers.len()) {
            return Err(format!(
                "row {} has {} values, but there are {} headers",
                row.basis, row.values.len(), headers.len(),
            ));
        }
        if let Some(Pivot { row, column }) = pivot {
            if row == 0 || row >= rows.len() || column >= headers.len() {
                return Err(format!(
                    "pivot ({row}, {column}) is outside of the {} constraint rows and {} columns",
                    rows.len().saturating_sub(1), headers.len(),
                ));
            }
        }

        Ok(Self { headers, rows, description, pivot })
    }
}

impl<F: Scalar> Step<F> {
    /// Create a new step.
    pub fn new(
        headers: Vec<String>,
        rows: Vec<StepRow<F>>,
        description: String,
        pivot: Option<Pivot>,
    ) -> Self {
        debug_assert!(rows.iter().all(|row| row.values.len() == headers.len()));

        Self { headers, rows, description, pivot }
    }

    /// Column labels.
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// All rows, the objective row first.
    pub fn rows(&self) -> &[StepRow<F>] {
        &self.rows
    }

    /// Human-readable description; empty for intermediate steps.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// The pivot performed after this snapshot was taken; `None` for the final step.
    pub fn pivot(&self) -> Option<Pivot> {
        self.pivot
    }

    /// Whether this is the final step of a solve.
    pub fn is_final(&self) -> bool {
        self.pivot.is_none()
    }
}

/// Integers are written without decimals, anything else with two.
fn format_value<F: Scalar>(value: F) -> String {
    if value.is_zero() {
        "0".to_string()
    } else if value.fract().is_zero() {
        format!("{value:.0}")
    } else {
        format!("{value:.2}")
    }
}

impl<F: Scalar> fmt::Display for Step<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        const BASIS: &str = "Base";
        const RHS: &str = "R";

        let cells = self.rows.iter()
            .map(|row| {
                let mut cells = row.values.iter().copied().map(format_value).collect::<Vec<_>>();
                cells.push(format_value(row.rhs));
                cells
            })
            .collect::<Vec<_>>();

        let basis_width = self.rows.iter()
            .map(|row| row.basis.len())
            .chain(Some(BASIS.len()))
            .max()
            .unwrap_or(0);
        let headers = self.headers.iter().map(String::as_str).chain(Some(RHS)).collect::<Vec<_>>();
        let widths = headers.iter()
            .enumerate()
            .map(|(j, header)| {
                cells.iter()
                    .map(|row| row.get(j).map_or(0, String::len))
                    .chain(Some(header.len()))
                    .max()
                    .unwrap_or(0)
            })
            .collect::<Vec<_>>();

        writeln!(
            f, "{:>basis_width$} | {}",
            BASIS,
            headers.iter().zip(&widths).map(|(header, &width)| format!("{header:>width$}")).join(" | "),
        )?;
        writeln!(
            f, "{}",
            Some(basis_width).into_iter().chain(widths.iter().copied()).map(|width| "-".repeat(width)).join("-+-"),
        )?;
        for (row, cells) in self.rows.iter().zip(&cells) {
            writeln!(
                f, "{:>basis_width$} | {}",
                row.basis,
                cells.iter().zip(&widths).map(|(cell, &width)| format!("{cell:>width$}")).join(" | "),
            )?;
        }

        if let Some(Pivot { row, column }) = self.pivot {
            if let (Some(leaving), Some(entering)) = (self.rows.get(row), self.headers.get(column)) {
                writeln!(f, "Pivot on row {} ({} leaves), column {} ({} enters)",
                    row, leaving.basis, column, entering,
                )?;
            }
        }
        if !self.description.trim().is_empty() {
            writeln!(f, "{}", self.description)?;
        }

        Ok(())
    }
}

/// Append-only, ordered sequence of steps.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct History<F> {
    steps: Vec<Step<F>>,
}

impl<F: Scalar> History<F> {
    /// Create an empty history.
    pub fn new() -> Self {
        Self { steps: Vec::new() }
    }

    /// Record a step at the end of the history.
    pub(crate) fn push(&mut self, step: Step<F>) {
        debug_assert!(self.steps.last().is_none_or(|last| !last.is_final()));

        self.steps.push(step);
    }

    /// All steps, in the order they were recorded.
    pub fn steps(&self) -> &[Step<F>] {
        &self.steps
    }

    /// The last step recorded.
    pub fn last(&self) -> Option<&Step<F>> {
        self.steps.last()
    }

    /// Number of steps.
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Whether no step was recorded.
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Take the steps out of the history.
    pub fn into_steps(self) -> Vec<Step<F>> {
        self.steps
    }
}

impl<'a, F> IntoIterator for &'a History<F> {
    type Item = &'a Step<F>;
    type IntoIter = std::slice::Iter<'a, Step<F>>;

    fn into_iter(self) -> Self::IntoIter {
        self.steps.iter()
    }
}

#[cfg(test)]
mod test {
    use crate::algorithm::simplex::step::{History, Pivot, Step, StepRow, format_value};

    fn step(pivot: Option<Pivot>, description: &str) -> Step<f64> {
        Step::new(
            vec!["X1".to_string(), "S1".to_string()],
            vec![
                StepRow { basis: "Z".to_string(), values: vec![-3_f64, 0_f64], rhs: 0_f64 },
                StepRow { basis: "S1".to_string(), values: vec![1_f64, 1_f64], rhs: 4.5_f64 },
            ],
            description.to_string(),
            pivot,
        )
    }

    #[test]
    fn values() {
        assert_eq!(format_value(3_f64), "3");
        assert_eq!(format_value(-0_f64), "0");
        assert_eq!(format_value(-2_f64), "-2");
        assert_eq!(format_value(1_f64 / 3_f64), "0.33");
        assert_eq!(format_value(4.5_f64), "4.50");
    }

    #[test]
    fn display() {
        let step = step(Some(Pivot { row: 1, column: 0 }), "");
        let expected = "\
Base | X1 | S1 |    R
-----+----+----+-----
   Z | -3 |  0 |    0
  S1 |  1 |  1 | 4.50
Pivot on row 1 (S1 leaves), column 0 (X1 enters)
";
        assert_eq!(step.to_string(), expected);
    }

    #[test]
    fn final_step_description() {
        let step = step(None, "Optimal solution reached. Optimal value: 0.00");
        assert!(step.is_final());
        assert!(step.to_string().ends_with("Optimal solution reached. Optimal value: 0.00\n"));
    }

    #[test]
    fn json_field_names() {
        let json = serde_json::to_value(step(None, "")).unwrap();
        assert_eq!(json["headers"][1], "S1");
        assert_eq!(json["rows"][1]["Base"], "S1");
        assert_eq!(json["rows"][1]["RHS"], 4.5_f64);
        assert_eq!(json["rows"][0]["values"][0], -3_f64);
        assert_eq!(json["description"], "");
        assert!(json.get("pivot").is_none());
    }

    #[test]
    fn history_order() {
        let mut history = History::new();
        assert!(history.is_empty());
        history.push(step(Some(Pivot { row: 1, column: 0 }), ""));
        history.push(step(None, "done"));
        assert_eq!(history.len(), 2);
        assert!(history.last().unwrap().is_final());
        assert_eq!((&history).into_iter().filter(|step| step.is_final()).count(), 1);

        let json = serde_json::to_string(&history).unwrap();
        let read: History<f64> = serde_json::from_str(&json).unwrap();
        assert_eq!(read, history);

        let steps = read.into_steps();
        assert_eq!(steps.len(), 2);
        assert_eq!(steps[0].pivot(), Some(Pivot { row: 1, column: 0 }));
        assert_eq!(steps[1].description(), "done");
    }

    #[test]
    fn inconsistent_steps_are_rejected() {
        let pivot_outside = r#"{
            "headers": ["X1"],
            "rows": [{ "Base": "Z", "values": [1.0], "RHS": 0.0 }],
            "description": "",
            "pivot": { "row": 3, "column": 0 }
        }"#;
        assert!(serde_json::from_str::<Step<f64>>(pivot_outside).is_err());

        let pivot_on_objective_row = r#"{
            "headers": ["X1"],
            "rows": [
                { "Base": "Z", "values": [1.0], "RHS": 0.0 },
                { "Base": "S1", "values": [1.0], "RHS": 4.0 }
            ],
            "description": "",
            "pivot": { "row": 0, "column": 0 }
        }"#;
        assert!(serde_json::from_str::<Step<f64>>(pivot_on_objective_row).is_err());

        let short_row = r#"{
            "headers": ["X1", "S1"],
            "rows": [{ "Base": "Z", "values": [1.0], "RHS": 0.0 }],
            "description": "Optimal solution reached. Optimal value: 0.00"
        }"#;
        assert!(serde_json::from_str::<History<f64>>(&format!("[{short_row}]")).is_err());
    }

    #[test]
    fn consistent_step_is_read_and_shown() {
        let text = r#"{
            "headers": ["X1", "S1"],
            "rows": [
                { "Base": "Z", "values": [-3.0, 0.0], "RHS": 0.0 },
                { "Base": "S1", "values": [1.0, 1.0], "RHS": 4.5 }
            ],
            "description": "",
            "pivot": { "row": 1, "column": 0 }
        }"#;
        let read: Step<f64> = serde_json::from_str(text).unwrap();
        assert_eq!(read, step(Some(Pivot { row: 1, column: 0 }), ""));
        assert!(read.to_string().contains("Pivot on row 1 (S1 leaves), column 0 (X1 enters)"));
    }
}
