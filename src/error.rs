//! # Errors
//!
//! Every error aborts the solve it occurred in. None of them leaves a partial result behind.
use thiserror::Error;

use crate::data::linear_program::elements::ConstraintType;

/// Reasons for a solve to fail.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Only `<=` constraints can be written into the initial tableau.
    #[error("constraint {index} is of kind `{kind}`, only `<=` constraints are supported")]
    UnsupportedConstraintKind {
        /// Position of the offending constraint.
        index: usize,
        /// Kind that was found.
        kind: ConstraintType,
    },

    /// An improving column has no positive coefficient, so the objective can grow without limit.
    #[error("the problem is unbounded: column {column} can enter without limit")]
    UnboundedProblem {
        /// Entering column without a leaving row.
        column: usize,
    },

    /// The iteration cap was hit before an optimum was found.
    #[error("no optimum found within {iterations} iterations")]
    IterationLimit {
        /// Number of pivots performed.
        iterations: usize,
    },

    /// The problem description is inconsistent.
    #[error("invalid problem: {0}")]
    InvalidProblem(String),

    /// A solver setting is out of range.
    #[error("invalid settings: {0}")]
    InvalidSettings(String),
}

/// Result type of the solver.
pub type Result<T> = std::result::Result<T, Error>;
