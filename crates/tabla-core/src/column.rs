//! Column specifications for the table engine.
//!
//! Columns form a tree: leaf columns carry an accessor path into the data
//! records, branch columns carry child columns and produce grouped header
//! rows. The tree may be irregular (branches of different depth); the
//! header builder normalizes it.

use crate::error::TableError;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::cmp::Ordering;
use std::fmt;
use std::sync::Arc;

/// Pure value transform applied to a resolved cell value during projection.
pub type GetFn = Arc<dyn Fn(&Value) -> Value + Send + Sync>;

/// Pure comparator used instead of the inferred default when sorting by
/// this column.
pub type SortFn = Arc<dyn Fn(&Value, &Value) -> Ordering + Send + Sync>;

/// A node in the column tree.
#[derive(Clone, Serialize, Deserialize)]
pub struct Column {
    /// Display label; empty for a synthetic spacer
    pub header: String,
    /// Dotted path into a data record; leaf columns only
    pub accessor: Option<String>,
    /// Child columns; branch columns only
    pub children: Vec<Column>,
    /// Optional value transform applied during projection
    #[serde(skip)]
    pub get_fn: Option<GetFn>,
    /// Optional comparator applied during sorting
    #[serde(skip)]
    pub sort_fn: Option<SortFn>,
}

impl Column {
    /// Create a leaf column with a display label and an accessor path.
    #[must_use]
    pub fn new(header: impl Into<String>, accessor: impl Into<String>) -> Self {
        Self {
            header: header.into(),
            accessor: Some(accessor.into()),
            children: Vec::new(),
            get_fn: None,
            sort_fn: None,
        }
    }

    /// Create a branch column grouping child columns under one header.
    #[must_use]
    pub fn group(header: impl Into<String>, children: impl IntoIterator<Item = Self>) -> Self {
        Self {
            header: header.into(),
            accessor: None,
            children: children.into_iter().collect(),
            get_fn: None,
            sort_fn: None,
        }
    }

    /// Set a value transform applied to this column's resolved values.
    #[must_use]
    pub fn get(mut self, f: impl Fn(&Value) -> Value + Send + Sync + 'static) -> Self {
        self.get_fn = Some(Arc::new(f));
        self
    }

    /// Set a comparator used when sorting by this column.
    #[must_use]
    pub fn sort_with(mut self, f: impl Fn(&Value, &Value) -> Ordering + Send + Sync + 'static) -> Self {
        self.sort_fn = Some(Arc::new(f));
        self
    }

    /// Whether this node is a leaf column.
    #[must_use]
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }
}

impl fmt::Debug for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Column")
            .field("header", &self.header)
            .field("accessor", &self.accessor)
            .field("children", &self.children)
            .field("get_fn", &self.get_fn.as_ref().map(|_| ".."))
            .field("sort_fn", &self.sort_fn.as_ref().map(|_| ".."))
            .finish()
    }
}

/// Validate a column tree: every node must be a leaf (non-empty accessor,
/// no children) or a branch (non-empty children, no accessor).
pub(crate) fn validate_columns(columns: &[Column]) -> Result<(), TableError> {
    if columns.is_empty() {
        return Err(TableError::InvalidSchema {
            path: "columns".to_string(),
            reason: "at least one column is required".to_string(),
        });
    }
    for (index, column) in columns.iter().enumerate() {
        validate_node(column, &format!("columns[{index}]"))?;
    }
    Ok(())
}

fn validate_node(column: &Column, path: &str) -> Result<(), TableError> {
    let has_accessor = column.accessor.as_ref().is_some_and(|a| !a.is_empty());
    match (&column.accessor, column.children.is_empty()) {
        (Some(_), true) if has_accessor => Ok(()),
        (Some(_), true) => Err(TableError::InvalidSchema {
            path: path.to_string(),
            reason: "leaf column requires a non-empty accessor".to_string(),
        }),
        (None, false) => {
            for (index, child) in column.children.iter().enumerate() {
                validate_node(child, &format!("{path}.children[{index}]"))?;
            }
            Ok(())
        }
        (Some(_), false) => Err(TableError::InvalidSchema {
            path: path.to_string(),
            reason: "column cannot have both an accessor and children".to_string(),
        }),
        (None, true) => Err(TableError::InvalidSchema {
            path: path.to_string(),
            reason: "column requires an accessor or children".to_string(),
        }),
    }
}

/// Flatten a column tree into its leaf columns, left to right.
///
/// Leaf order defines the rendered cell order for every data row.
#[must_use]
pub fn leaf_columns(columns: &[Column]) -> Vec<Column> {
    let mut leaves = Vec::new();
    collect_leaves(columns, &mut leaves);
    leaves
}

fn collect_leaves(columns: &[Column], leaves: &mut Vec<Column>) {
    for column in columns {
        if column.is_leaf() {
            leaves.push(column.clone());
        } else {
            collect_leaves(&column.children, leaves);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    // ===== Column Construction Tests =====

    #[test]
    fn test_column_leaf() {
        let col = Column::new("Name", "show.name");
        assert_eq!(col.header, "Name");
        assert_eq!(col.accessor.as_deref(), Some("show.name"));
        assert!(col.is_leaf());
    }

    #[test]
    fn test_column_group() {
        let col = Column::group("TV Show", [Column::new("Name", "show.name")]);
        assert!(col.accessor.is_none());
        assert!(!col.is_leaf());
        assert_eq!(col.children.len(), 1);
    }

    #[test]
    fn test_column_get_fn() {
        let col = Column::new("Runtime", "show.runtime").get(|v| json!(format!("{v} min")));
        let f = col.get_fn.as_ref().expect("transform set");
        assert_eq!(f(&json!(60)), json!("60 min"));
    }

    #[test]
    fn test_column_sort_fn() {
        let col = Column::new("Genres", "show.genres")
            .sort_with(|a, b| a.to_string().len().cmp(&b.to_string().len()));
        let f = col.sort_fn.as_ref().expect("comparator set");
        assert_eq!(f(&json!("aa"), &json!("bbbb")), Ordering::Less);
    }

    // ===== Validation Tests =====

    #[test]
    fn test_validate_flat_columns() {
        let columns = vec![Column::new("A", "a"), Column::new("B", "b")];
        assert!(validate_columns(&columns).is_ok());
    }

    #[test]
    fn test_validate_empty_columns() {
        assert!(validate_columns(&[]).is_err());
    }

    #[test]
    fn test_validate_empty_accessor() {
        let columns = vec![Column::new("A", "")];
        let err = validate_columns(&columns).unwrap_err();
        assert!(matches!(err, TableError::InvalidSchema { .. }));
    }

    #[test]
    fn test_validate_childless_branch() {
        let columns = vec![Column::group("Group", [])];
        let err = validate_columns(&columns).unwrap_err();
        let TableError::InvalidSchema { path, .. } = err;
        assert_eq!(path, "columns[0]");
    }

    #[test]
    fn test_validate_accessor_and_children() {
        let mut col = Column::group("Group", [Column::new("A", "a")]);
        col.accessor = Some("x".to_string());
        let err = validate_columns(&[col]).unwrap_err();
        let TableError::InvalidSchema { path, reason } = err;
        assert_eq!(path, "columns[0]");
        assert!(reason.contains("both"));
    }

    #[test]
    fn test_validate_nested_error_path() {
        let columns = vec![Column::group(
            "Outer",
            [Column::group("Inner", [Column::new("Bad", "")])],
        )];
        let TableError::InvalidSchema { path, .. } = validate_columns(&columns).unwrap_err();
        assert_eq!(path, "columns[0].children[0].children[0]");
    }

    // ===== Leaf Flattening Tests =====

    #[test]
    fn test_leaf_columns_flat() {
        let columns = vec![Column::new("A", "a"), Column::new("B", "b")];
        let leaves = leaf_columns(&columns);
        assert_eq!(leaves.len(), 2);
        assert_eq!(leaves[0].accessor.as_deref(), Some("a"));
    }

    #[test]
    fn test_leaf_columns_nested_order() {
        let columns = vec![
            Column::group(
                "G1",
                [Column::new("A", "a"), Column::group("G2", [Column::new("B", "b")])],
            ),
            Column::new("C", "c"),
        ];
        let leaves = leaf_columns(&columns);
        let accessors: Vec<_> = leaves.iter().filter_map(|c| c.accessor.as_deref()).collect();
        assert_eq!(accessors, vec!["a", "b", "c"]);
    }
}
