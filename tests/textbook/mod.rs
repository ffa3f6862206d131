//! # Small textbook problems
//!
//! Problems stored in the JSON problem file format, small enough to verify every step by hand.
use std::path::{Path, PathBuf};

use simplex_steps::Problem;
use simplex_steps::io::import;

/// # Generation and execution
#[allow(missing_docs)]
mod test;

/// Relative path of the folder where the problem files are stored.
///
/// The path is relative to the project root folder.
fn problem_file_directory() -> PathBuf {
    Path::new(file!()).parent().unwrap().to_path_buf()
}

/// Compute the path of the problem file, based on the problem name.
///
/// # Arguments
///
/// * `name`: Problem name without extension.
fn get_test_file_path(name: &str) -> PathBuf {
    problem_file_directory().join(name).with_extension("json")
}

fn read(name: &str) -> Problem<f64> {
    import(&get_test_file_path(name)).unwrap()
}
