//! # Reading and writing of linear programs
//!
//! Problems are read from JSON files; step histories and reports are written as JSON. The solver
//! itself never touches the file system, persisting results is left to the caller of these
//! functions.
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::algorithm::Report;
use crate::algorithm::simplex::step::History;
use crate::data::linear_program::problem::Problem;
use crate::data::number_types::traits::Scalar;
use crate::io::error::{Export, Import};

pub mod error;

/// Import a problem from a file.
///
/// Currently only supports JSON files, in the layout
///
/// ```json
/// {
///     "numVars": 2,
///     "numConstraints": 1,
///     "objective": [3, 2],
///     "constraints": [{ "coefficients": [1, 1], "value": 4, "sign": "<=" }],
///     "optimizationSense": "maximize"
/// }
/// ```
///
/// # Errors
///
/// When a file extension is unknown, a file cannot be found or read, the contents can't be parsed
/// or the problem is inconsistent, an error type is returned.
pub fn import<F>(file_path: &Path) -> Result<Problem<F>, Import>
where
    F: Scalar + DeserializeOwned,
{
    match file_path.extension() {
        Some(extension) => match extension.to_str() {
            Some("json" | "JSON") => {},
            Some(extension_string) => return Err(Import::FileExtension(format!(
                "Could not recognise file extension \"{}\" of file: {:?}",
                extension_string, file_path,
            ))),
            None => return Err(Import::FileExtension(format!(
                "Could not convert OsStr to &str, probably invalid unicode: {:?}",
                extension,
            ))),
        },
        None => return Err(Import::FileExtension(format!(
            "Could not read extension from file path: {:?}",
            file_path,
        ))),
    }

    let reader = BufReader::new(File::open(file_path)?);
    parse(reader)
}

/// Read a problem from JSON text and check its consistency.
pub fn parse<F, R>(reader: R) -> Result<Problem<F>, Import>
where
    F: Scalar + DeserializeOwned,
    R: std::io::Read,
{
    let problem: Problem<F> = serde_json::from_reader(reader)?;
    problem.validate()?;

    Ok(problem)
}

/// Write a step history to a file as a JSON array.
pub fn export_steps<F>(file_path: &Path, steps: &History<F>) -> Result<(), Export>
where
    F: Scalar + Serialize,
{
    write_json(file_path, steps)
}

/// Write a full report (solution, sensitivity and steps) to a file as JSON.
pub fn export_report<F>(file_path: &Path, report: &Report<F>) -> Result<(), Export>
where
    F: Scalar + Serialize,
{
    write_json(file_path, report)
}

fn write_json<T: Serialize>(file_path: &Path, value: &T) -> Result<(), Export> {
    let mut writer = BufWriter::new(File::create(file_path)?);
    serde_json::to_writer_pretty(&mut writer, value)?;
    writer.flush()?;

    Ok(())
}
