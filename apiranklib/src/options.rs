//! Input options for table rendering.
//!
//! This module contains the configuration types that control how the
//! renderer treats irregular input.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// What to do when a row lacks a column that the first row defines.
///
/// Columns always come from the first row. Later rows are read through that
/// fixed column list, so any of them may be missing a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum MissingFields {
    /// Render the missing cell as an empty cell
    #[default]
    Empty,
    /// Fail with `ApirankError::MissingField`
    Error,
}

impl FromStr for MissingFields {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "empty" => Ok(MissingFields::Empty),
            "error" | "strict" => Ok(MissingFields::Error),
            _ => Err(format!(
                "unknown missing-field policy '{}': expected 'empty' or 'error'",
                s
            )),
        }
    }
}

/// Options for rendering an HTML table.
#[derive(Debug, Clone, Copy, Default)]
pub struct TableOptions {
    /// Policy for rows lacking a column from the first row
    pub missing_fields: MissingFields,
}

impl TableOptions {
    /// Create new default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the missing-field policy.
    pub fn missing_fields(mut self, policy: MissingFields) -> Self {
        self.missing_fields = policy;
        self
    }

    /// Fail on missing fields instead of rendering empty cells.
    pub fn strict(self) -> Self {
        self.missing_fields(MissingFields::Error)
    }
}
