//! # Linear programs
//!
//! Description of problems to solve, and the solutions and sensitivity data computed for them.
pub mod elements;
pub mod problem;
pub mod solution;
