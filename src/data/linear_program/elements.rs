//! # Building blocks to describe linear programs.
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// A `Constraint` is a type of (in)equality.
#[allow(missing_docs)]
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum ConstraintType {
    #[serde(rename = "=")]
    Equal,
    #[serde(rename = ">=", alias = "≥")]
    Greater,
    #[serde(rename = "<=", alias = "≤")]
    Less,
}

impl fmt::Display for ConstraintType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ConstraintType::Equal => "=",
            ConstraintType::Greater => ">=",
            ConstraintType::Less => "<=",
        })
    }
}

impl FromStr for ConstraintType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "=" | "==" => Ok(ConstraintType::Equal),
            ">=" | "≥" => Ok(ConstraintType::Greater),
            "<=" | "≤" => Ok(ConstraintType::Less),
            other => Err(Error::InvalidProblem(format!("unknown constraint sign `{other}`"))),
        }
    }
}

/// Direction of optimization.
#[allow(missing_docs)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Objective {
    #[serde(alias = "MAXIMIZE", alias = "Maximize")]
    Maximize,
    #[default]
    #[serde(alias = "MINIMIZE", alias = "Minimize")]
    Minimize,
}

impl fmt::Display for Objective {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Objective::Maximize => "maximize",
            Objective::Minimize => "minimize",
        })
    }
}

impl FromStr for Objective {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "max" | "maximize" => Ok(Objective::Maximize),
            "min" | "minimize" => Ok(Objective::Minimize),
            other => Err(Error::InvalidProblem(format!("unknown optimization sense `{other}`"))),
        }
    }
}
