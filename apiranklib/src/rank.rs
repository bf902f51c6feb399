//! Usage ranking: count labels and order them by frequency.
//!
//! The rank engine takes one label per catalog entry (in catalog order) and
//! produces one [`RankedItem`] per distinct label:
//!
//! - ordered by descending occurrence count
//! - ties broken by the label's first occurrence in the input
//! - ranks are 1-based positions in that order, never shared

use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::hash::Hash;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::debug;

/// A distinct label with its usage count and rank.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankedItem<T> {
    /// The label being ranked (e.g. an API name)
    pub label: T,
    /// Number of occurrences in the input
    pub count: usize,
    /// 1-based position in the ranking
    pub rank: usize,
}

impl<T> RankedItem<T>
where
    T: Clone + Into<Value>,
{
    /// Convert into a table record with `label`, `count` and `rank` columns.
    pub fn to_record(&self) -> Map<String, Value> {
        let mut record = Map::new();
        record.insert("label".to_string(), self.label.clone().into());
        record.insert("count".to_string(), Value::from(self.count));
        record.insert("rank".to_string(), Value::from(self.rank));
        record
    }
}

/// Convert a ranked list into table records, preserving order.
pub fn records_from<T>(items: &[RankedItem<T>]) -> Vec<Map<String, Value>>
where
    T: Clone + Into<Value>,
{
    items.iter().map(RankedItem::to_record).collect()
}

/// Rank labels by how often they occur.
///
/// Labels are compared for equality only. The result has one item per
/// distinct label and the counts sum to `labels.len()`. An empty input
/// yields an empty ranking.
///
/// # Example
///
/// ```rust
/// use apiranklib::rank_by_usage;
///
/// let ranked = rank_by_usage(&["pad", "pad", "reshape"]);
/// assert_eq!(ranked[0].label, "pad");
/// assert_eq!(ranked[0].count, 2);
/// assert_eq!(ranked[1].rank, 2);
/// ```
pub fn rank_by_usage<T>(labels: &[T]) -> Vec<RankedItem<T>>
where
    T: Eq + Hash + Clone,
{
    // Tallies are kept in first-occurrence order
    let mut positions: HashMap<&T, usize> = HashMap::new();
    let mut tallies: Vec<(&T, usize)> = Vec::new();

    for label in labels {
        match positions.entry(label) {
            Entry::Occupied(slot) => tallies[*slot.get()].1 += 1,
            Entry::Vacant(slot) => {
                slot.insert(tallies.len());
                tallies.push((label, 1));
            }
        }
    }

    // Stable: equal counts keep first-occurrence order
    tallies.sort_by(|a, b| b.1.cmp(&a.1));

    debug!(
        labels = labels.len(),
        distinct = tallies.len(),
        "ranked labels by usage"
    );

    tallies
        .into_iter()
        .enumerate()
        .map(|(i, (label, count))| RankedItem {
            label: label.clone(),
            count,
            rank: i + 1,
        })
        .collect()
}
