//! # Numerical tolerance
//!
//! A single tolerance is used for every comparison the simplex method makes: choosing the entering
//! column, the ratio test, detecting basic columns and checking feasibility.
use num_traits::{Float, NumCast};

use crate::data::number_types::traits::Scalar;

/// Default absolute tolerance.
pub const EPSILON: f64 = 1e-8;

/// Absolute tolerance around zero.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Tolerance<F> {
    epsilon: F,
}

impl<F: Scalar> Tolerance<F> {
    /// Create a new tolerance.
    ///
    /// # Arguments
    ///
    /// * `epsilon`: Nonnegative bound below which absolute values are considered zero.
    pub fn new(epsilon: F) -> Self {
        debug_assert!(epsilon >= F::zero());

        Self { epsilon }
    }

    /// The width of the band around zero.
    pub fn epsilon(&self) -> F {
        self.epsilon
    }

    /// Whether `value` lies within the band around zero.
    pub fn is_zero(&self, value: F) -> bool {
        value.abs() <= self.epsilon
    }

    /// Whether `value` is positive beyond the band around zero.
    pub fn is_positive(&self, value: F) -> bool {
        value > self.epsilon
    }

    /// Whether `value` is negative beyond the band around zero.
    pub fn is_negative(&self, value: F) -> bool {
        value < -self.epsilon
    }

    /// Whether `value` lies within the band around one.
    pub fn is_one(&self, value: F) -> bool {
        self.is_zero(value - F::one())
    }

    /// Whether `value` is not significantly below zero.
    pub fn is_nonnegative(&self, value: F) -> bool {
        !self.is_negative(value)
    }
}

impl<F: Scalar> Default for Tolerance<F> {
    /// `EPSILON` converted to `F`, or the machine epsilon of `F` if that is not representable.
    fn default() -> Self {
        let epsilon = <F as NumCast>::from(EPSILON).unwrap_or_else(<F as Float>::epsilon);
        Self::new(epsilon)
    }
}
