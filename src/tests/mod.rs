//! # Problems shared by the unit tests.
//!
//! Convention for function names:
//!
//! * `fn problem()`
//! * `fn tableau_form()`
