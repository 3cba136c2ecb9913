//! Group-by-category summation.

use std::collections::HashMap;

use crate::types::{AggregateEntry, CleanedRow};

/// Ordering of the aggregated entries.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputOrder {
    /// Categories in the order they first appear in the cleaned rows.
    #[default]
    FirstOccurrence,
    /// Categories sorted by byte-wise string order.
    ByCategory,
}

/// Sum `value` per distinct `category`.
///
/// Categories are compared by exact string equality (case-sensitive, untrimmed). Each category
/// appears once in the output. Empty input yields an empty vector.
pub fn aggregate_by_category(rows: &[CleanedRow], order: OutputOrder) -> Vec<AggregateEntry> {
    let mut positions: HashMap<&str, usize> = HashMap::new();
    let mut entries: Vec<AggregateEntry> = Vec::new();

    for row in rows {
        match positions.get(row.category.as_str()) {
            Some(&pos) => entries[pos].total += row.value,
            None => {
                positions.insert(row.category.as_str(), entries.len());
                entries.push(AggregateEntry {
                    category: row.category.clone(),
                    total: row.value,
                });
            }
        }
    }

    if order == OutputOrder::ByCategory {
        entries.sort_by(|a, b| a.category.cmp(&b.category));
    }
    entries
}
