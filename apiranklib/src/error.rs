//! Error types for apiranklib

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading a catalog or rendering a table
#[derive(Error, Debug)]
pub enum ApirankError {
    /// Table renderer called without any rows to derive columns from
    #[error("cannot render a table from an empty data set")]
    EmptyInput,

    /// Failed to read the HTML template
    #[error("failed to load template '{path}': {source}")]
    TemplateLoad {
        path: PathBuf,
        source: std::io::Error,
    },

    /// A row lacks a column present in the first row
    #[error("row {row} is missing column '{column}'")]
    MissingField { row: usize, column: String },

    /// Failed to read a data file
    #[error("failed to read file '{path}': {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Data file is not valid JSON
    #[error("failed to parse JSON in '{path}': {source}")]
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },

    /// Catalog file does not hold a top-level array
    #[error("expected a JSON array of entries in '{0}'")]
    NotAnArray(PathBuf),
}
