//! HTML table rendering from uniform records.
//!
//! The renderer turns a list of records into a complete HTML document:
//!
//! 1. Derive a [`TableSchema`] from the keys of the first record
//! 2. Render `<table>` markup, reading every record through that schema
//! 3. Splice the title and markup into a template held by a [`TemplateCache`]
//!
//! Header names and cell values are written verbatim, without HTML
//! escaping. Input must be trusted or sanitized before rendering.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use serde_json::{Map, Value};
use tracing::{debug, info, warn};

use crate::error::ApirankError;
use crate::options::{MissingFields, TableOptions};
use crate::Result;

/// One table row: column name to display value, in insertion order.
pub type Record = Map<String, Value>;

/// Template compiled into the library, used when no template file is given.
pub const DEFAULT_TEMPLATE: &str = include_str!("../templates/table_template.html");

/// Placeholder replaced with the document title.
pub const TITLE_PLACEHOLDER: &str = "{{TITLE}}";

/// Placeholder replaced with the generated table markup.
pub const TABLE_PLACEHOLDER: &str = "{{TABLE}}";

/// Lazily loaded HTML template.
///
/// The file is read on the first call to [`TemplateCache::get`] and the text
/// is kept for the lifetime of the cache. A failed read caches nothing.
#[derive(Debug)]
pub struct TemplateCache {
    path: PathBuf,
    text: OnceLock<String>,
}

impl TemplateCache {
    /// Cache backed by a template file, read on first use.
    pub fn from_path(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            text: OnceLock::new(),
        }
    }

    /// Cache that already holds the given template text.
    pub fn preloaded(text: impl Into<String>) -> Self {
        let cell = OnceLock::new();
        let _ = cell.set(text.into());
        Self {
            path: PathBuf::from("<inline>"),
            text: cell,
        }
    }

    /// Cache holding [`DEFAULT_TEMPLATE`].
    pub fn builtin() -> Self {
        Self::preloaded(DEFAULT_TEMPLATE)
    }

    /// Path the template is (or would be) loaded from.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Whether the template text is available without touching the disk.
    pub fn is_loaded(&self) -> bool {
        self.text.get().is_some()
    }

    /// Get the template text, loading it on first use.
    pub fn get(&self) -> Result<&str> {
        if let Some(text) = self.text.get() {
            return Ok(text.as_str());
        }

        let text = fs::read_to_string(&self.path).map_err(|source| ApirankError::TemplateLoad {
            path: self.path.clone(),
            source,
        })?;
        info!(path = %self.path.display(), bytes = text.len(), "loaded HTML template");

        Ok(self.text.get_or_init(|| text).as_str())
    }
}

/// Ordered column list derived from the first record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableSchema {
    columns: Vec<String>,
}

impl TableSchema {
    /// Derive the schema from the keys of `rows[0]`.
    pub fn from_rows(rows: &[Record]) -> Result<Self> {
        let first = rows.first().ok_or(ApirankError::EmptyInput)?;
        Ok(Self {
            columns: first.keys().cloned().collect(),
        })
    }

    /// Column names in display order.
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Render `<table>` markup for `rows`.
    ///
    /// The first column of each body row is a header cell (`<th>`), the
    /// rest are data cells (`<td>`).
    pub fn render_markup(&self, rows: &[Record], missing: MissingFields) -> Result<String> {
        let mut out = String::from("<table>\n");

        out.push_str("<thead>\n<tr>\n");
        for column in &self.columns {
            push_cell(&mut out, "th", column);
        }
        out.push_str("</tr>\n</thead>\n");

        out.push_str("<tbody>\n");
        for (index, row) in rows.iter().enumerate() {
            out.push_str("<tr>\n");
            for (j, column) in self.columns.iter().enumerate() {
                let text = cell_text(row, index, column, missing)?;
                let tag = if j == 0 { "th" } else { "td" };
                push_cell(&mut out, tag, &text);
            }
            out.push_str("</tr>\n");
        }
        out.push_str("</tbody>\n");
        out.push_str("</table>");

        Ok(out)
    }
}

fn push_cell(out: &mut String, tag: &str, text: &str) {
    out.push('<');
    out.push_str(tag);
    out.push('>');
    out.push_str(text);
    out.push_str("</");
    out.push_str(tag);
    out.push_str(">\n");
}

/// Look up one cell, applying the missing-field policy.
fn cell_text(row: &Record, index: usize, column: &str, missing: MissingFields) -> Result<String> {
    match row.get(column) {
        Some(value) => Ok(display_value(value)),
        None => match missing {
            MissingFields::Empty => {
                warn!(row = index, column, "row is missing a column, rendering empty cell");
                Ok(String::new())
            }
            MissingFields::Error => Err(ApirankError::MissingField {
                row: index,
                column: column.to_string(),
            }),
        },
    }
}

/// Display text for a cell value. Strings are unquoted, anything else is
/// compact JSON.
fn display_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Replace the first occurrence of each placeholder in `template`.
///
/// Positions are found in the original template, so placeholder text that
/// appears inside a substituted value is left alone.
fn fill_placeholders(template: &str, substitutions: &[(&str, &str)]) -> String {
    let mut hits: Vec<(usize, &str, &str)> = Vec::new();
    for &(token, value) in substitutions {
        match template.find(token) {
            Some(at) => hits.push((at, token, value)),
            None => warn!(placeholder = token, "placeholder not found in template"),
        }
    }
    hits.sort_by_key(|&(at, _, _)| at);

    let extra: usize = hits.iter().map(|(_, _, value)| value.len()).sum();
    let mut out = String::with_capacity(template.len() + extra);
    let mut cursor = 0;
    for (at, token, value) in hits {
        if at < cursor {
            continue;
        }
        out.push_str(&template[cursor..at]);
        out.push_str(value);
        cursor = at + token.len();
    }
    out.push_str(&template[cursor..]);
    out
}

/// Renders records into an HTML document using a cached template.
#[derive(Debug)]
pub struct HtmlRenderer {
    template: TemplateCache,
    options: TableOptions,
}

impl Default for HtmlRenderer {
    fn default() -> Self {
        Self::new(TemplateCache::builtin())
    }
}

impl HtmlRenderer {
    /// Create a renderer that owns the given template cache.
    pub fn new(template: TemplateCache) -> Self {
        Self {
            template,
            options: TableOptions::default(),
        }
    }

    /// Set rendering options.
    pub fn with_options(mut self, options: TableOptions) -> Self {
        self.options = options;
        self
    }

    /// The template cache used by this renderer.
    pub fn template(&self) -> &TemplateCache {
        &self.template
    }

    /// Generate an HTML document containing a table of `data`.
    ///
    /// Columns come from the keys of the first record. Fails with
    /// [`ApirankError::EmptyInput`] when `data` is empty and with
    /// [`ApirankError::TemplateLoad`] when the template cannot be read.
    pub fn create_table(&self, data: &[Record], title: &str) -> Result<String> {
        let schema = TableSchema::from_rows(data)?;
        let markup = schema.render_markup(data, self.options.missing_fields)?;
        let template = self.template.get()?;

        debug!(
            rows = data.len(),
            columns = schema.columns().len(),
            "rendered HTML table"
        );

        Ok(fill_placeholders(
            template,
            &[(TITLE_PLACEHOLDER, title), (TABLE_PLACEHOLDER, &markup)],
        ))
    }
}
