//! # Error reporting for reading and writing of files
//!
//! A collection of enums describing any problems encountered during reading, parsing and
//! writing.
use std::io;

use thiserror::Error;

use crate::error::Error as SolverError;

/// An `Import` error is created when an error was encountered during IO or parsing.
///
/// It is the highest error in the io error hierarchy.
#[derive(Error, Debug)]
pub enum Import {
    /// The file extension of the provided file path is not known or supported.
    ///
    /// The contained `String` is a message for the end user.
    #[error("{0}")]
    FileExtension(String),
    /// The file to read isn't found, or the reading of file couldn't start or was interrupted.
    #[error("could not read file: {0}")]
    IO(#[from] io::Error),
    /// Contents of the file could not be parsed into a linear program.
    #[error("could not parse file: {0}")]
    Parse(#[from] serde_json::Error),
    /// There is a logical inconsistency in the linear program described by a file.
    ///
    /// For example, the number of coefficients of a constraint might not match the number of
    /// variables.
    #[error(transparent)]
    LinearProgram(#[from] SolverError),
}

/// An `Export` error is created when results could not be written.
#[derive(Error, Debug)]
pub enum Export {
    /// The file couldn't be created or written to.
    #[error("could not write file: {0}")]
    IO(#[from] io::Error),
    /// The value could not be serialized.
    #[error("could not serialize: {0}")]
    Serialize(#[from] serde_json::Error),
}
