//! Catalog loading: read a JSON catalog and extract label fields.
//!
//! A catalog is a JSON array of objects. Ranking only needs one field per
//! entry, so the helpers here read the file, pluck that field from every
//! entry, and turn the plucked values into label strings.

use std::fs;
use std::path::Path;

use serde_json::Value;
use tracing::debug;

use crate::error::ApirankError;
use crate::Result;

/// Read and parse a JSON file.
pub fn read_json(path: impl AsRef<Path>) -> Result<Value> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|source| ApirankError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&text).map_err(|source| ApirankError::Json {
        path: path.to_path_buf(),
        source,
    })
}

/// Project each entry down to the value stored under `key`.
///
/// Entries that are not objects, or lack the key, yield `Value::Null`.
pub fn pluck(entries: &[Value], key: &str) -> Vec<Value> {
    entries
        .iter()
        .map(|entry| entry.get(key).cloned().unwrap_or(Value::Null))
        .collect()
}

/// Label text for a plucked value.
///
/// Strings are used as-is; any other value uses its compact JSON text.
pub fn label_of(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Load a catalog file and return the `key` label of every entry, in order.
pub fn load_labels(path: impl AsRef<Path>, key: &str) -> Result<Vec<String>> {
    let path = path.as_ref();
    let catalog = read_json(path)?;
    let entries = catalog
        .as_array()
        .ok_or_else(|| ApirankError::NotAnArray(path.to_path_buf()))?;

    let labels: Vec<String> = pluck(entries, key).iter().map(label_of).collect();
    debug!(path = %path.display(), key, entries = labels.len(), "loaded catalog labels");

    Ok(labels)
}
