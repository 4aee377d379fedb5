//! Sorting for the table engine.
//!
//! Multi-key ordering uses the classic least-significant-key-first
//! technique: one stable sort pass per key, applied in reverse insertion
//! order, so the first key the caller inserted ends up as the primary sort
//! key.

use crate::column::Column;
use crate::path::{display_value, resolve_path};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::cmp::Ordering;

/// One sort criterion: a leaf accessor and a direction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortKey {
    /// Accessor path of the leaf column to sort by
    pub accessor: String,
    /// Sort direction
    pub descending: bool,
}

impl SortKey {
    /// Ascending sort on the given accessor.
    #[must_use]
    pub fn ascending(accessor: impl Into<String>) -> Self {
        Self {
            accessor: accessor.into(),
            descending: false,
        }
    }

    /// Descending sort on the given accessor.
    #[must_use]
    pub fn descending(accessor: impl Into<String>) -> Self {
        Self {
            accessor: accessor.into(),
            descending: true,
        }
    }
}

/// Sort records by the given keys, returning a new ordered vector.
///
/// The input is never mutated. With no keys this is the identity. Each
/// key uses the matching leaf column's comparator when one is supplied,
/// otherwise a default comparator inferred from the compared values:
/// numeric when both sides read as numbers, string comparison otherwise.
#[must_use]
pub fn sort_records(records: &[Value], sort_keys: &[SortKey], leaves: &[Column]) -> Vec<Value> {
    let mut sorted: Vec<Value> = records.to_vec();
    // Reverse insertion order: the first-inserted key is applied last and
    // therefore wins. Stability of `sort_by` preserves the earlier passes.
    for key in sort_keys.iter().rev() {
        let sort_fn = leaves
            .iter()
            .find(|column| column.accessor.as_deref() == Some(key.accessor.as_str()))
            .and_then(|column| column.sort_fn.clone());
        sorted.sort_by(|a, b| {
            let left = resolve_path(a, &key.accessor).unwrap_or(&Value::Null);
            let right = resolve_path(b, &key.accessor).unwrap_or(&Value::Null);
            let ordering = match &sort_fn {
                Some(f) => f(left, right),
                None => default_compare(left, right),
            };
            if key.descending {
                ordering.reverse()
            } else {
                ordering
            }
        });
    }
    sorted
}

/// Compute the sort state after toggling a column.
///
/// Cycles unsorted → ascending → descending → unsorted and always
/// collapses the state to at most one key; toggling a different column
/// replaces the state.
#[must_use]
pub fn next_toggle_state(sort_keys: &[SortKey], accessor: &str) -> Vec<SortKey> {
    match sort_keys.first() {
        Some(key) if key.accessor == accessor && !key.descending => {
            vec![SortKey::descending(accessor)]
        }
        Some(key) if key.accessor == accessor => Vec::new(),
        _ => vec![SortKey::ascending(accessor)],
    }
}

/// Default comparator: numeric ordering when both values read as numbers
/// (JSON numbers or numeric strings), string ordering otherwise.
fn default_compare(a: &Value, b: &Value) -> Ordering {
    match (as_number(a), as_number(b)) {
        (Some(x), Some(y)) => x.partial_cmp(&y).unwrap_or(Ordering::Equal),
        _ => display_value(a).cmp(&display_value(b)),
    }
}

fn as_number(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }
}
