//! # Data structures
//!
//! Linear program descriptions, their solutions and the number handling shared by the algorithms.
pub mod linear_program;
pub mod number_types;
