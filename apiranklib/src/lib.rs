//! # apiranklib
//!
//! Rank API catalog entries by usage and render the ranking as an HTML table.
//!
//! ## Overview
//!
//! The library has two independent parts:
//!
//! - **Rank engine**: counts how often each label occurs and orders the
//!   distinct labels by descending count, breaking ties by first occurrence
//! - **Table renderer**: turns a list of uniform records into an HTML
//!   document by filling a template with generated `<table>` markup
//!
//! Around them sit small catalog helpers that read a JSON catalog and pluck
//! the label field out of every entry.
//!
//! ## Features
//!
//! - **Deterministic ranking**: strict 1-based ranks, stable tie-breaking
//! - **Explicit schema**: columns derive from the first record, with a
//!   configurable policy for rows that lack one
//! - **Load-once templates**: a caller-owned cache reads the template file
//!   on first use only
//!
//! ## Example
//!
//! ```rust
//! use apiranklib::{rank_by_usage, records_from, HtmlRenderer, TemplateCache};
//!
//! let ranked = rank_by_usage(&["pad", "pad", "reshape"]);
//! assert_eq!(ranked[0].label, "pad");
//! assert_eq!(ranked[0].count, 2);
//!
//! let renderer = HtmlRenderer::new(TemplateCache::preloaded("<h1>{{TITLE}}</h1>{{TABLE}}"));
//! let html = renderer.create_table(&records_from(&ranked), "NumPy usage").unwrap();
//! assert!(html.starts_with("<h1>NumPy usage</h1><table>"));
//! assert!(html.contains("<th>pad</th>\n<td>2</td>"));
//! ```

pub mod catalog;
pub mod error;
pub mod options;
pub mod rank;
pub mod table;

pub use catalog::{label_of, load_labels, pluck, read_json};
pub use error::ApirankError;
pub use options::{MissingFields, TableOptions};
pub use rank::{rank_by_usage, records_from, RankedItem};
pub use table::{
    HtmlRenderer, Record, TableSchema, TemplateCache, DEFAULT_TEMPLATE, TABLE_PLACEHOLDER,
    TITLE_PLACEHOLDER,
};

/// Result type for apiranklib operations
pub type Result<T> = std::result::Result<T, ApirankError>;
