//! # Traits
//!
//! Bounds that the number type of a tableau should satisfy.
use std::fmt::{Debug, Display};

use num_traits::Float;

/// Floating point number usable as tableau entry.
///
/// Blanket implemented, `f64` and `f32` both qualify.
pub trait Scalar: Float + Display + Debug + 'static {}

impl<F> Scalar for F
where
    F: Float + Display + Debug + 'static,
{
}
