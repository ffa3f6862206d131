//! # Solver settings
use crate::algorithm::simplex::strategy::pivot_rule::PivotRuleKind;
use crate::data::number_types::tolerance::Tolerance;
use crate::data::number_types::traits::Scalar;
use crate::error::{Error, Result};

/// Default cap on the number of pivots.
pub const DEFAULT_MAX_ITERATIONS: usize = 10_000;

/// Solver settings and parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Settings<F> {
    /// Absolute tolerance used for every comparison with zero.
    pub tolerance: F,
    /// Maximum number of pivots before giving up.
    pub max_iterations: usize,
    /// How to choose the entering column.
    pub pivot_rule: PivotRuleKind,
}

impl<F: Scalar> Default for Settings<F> {
    fn default() -> Self {
        Self {
            tolerance: Tolerance::<F>::default().epsilon(),
            max_iterations: DEFAULT_MAX_ITERATIONS,
            pivot_rule: PivotRuleKind::default(),
        }
    }
}

impl<F: Scalar> Settings<F> {
    /// Replace the tolerance.
    #[must_use]
    pub fn with_tolerance(mut self, tolerance: F) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Replace the iteration cap.
    #[must_use]
    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Replace the pivot rule.
    #[must_use]
    pub fn with_pivot_rule(mut self, pivot_rule: PivotRuleKind) -> Self {
        self.pivot_rule = pivot_rule;
        self
    }

    /// Check that the settings can be used.
    pub fn validate(&self) -> Result<()> {
        if !self.tolerance.is_finite() || self.tolerance < F::zero() {
            return Err(Error::InvalidSettings(format!(
                "tolerance should be finite and nonnegative, was {}", self.tolerance,
            )));
        }

        Ok(())
    }

    /// The tolerance, ready for comparisons.
    pub fn tolerance(&self) -> Tolerance<F> {
        Tolerance::new(self.tolerance)
    }
}
