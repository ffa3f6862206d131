//! # Number types
//!
//! The simplex engine works on floating point numbers. Comparisons against zero are never exact,
//! they go through a `Tolerance`.
pub mod tolerance;
pub mod traits;
