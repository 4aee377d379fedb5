//! Header-tree construction.
//!
//! Converts a possibly irregular column tree into depth-aligned header
//! rows. Branches of uneven depth are normalized by inserting synthetic
//! empty-header parents above the shallow subtrees until every leaf sits at
//! the same depth, so a renderer can emit one `<tr>` per [`HeaderGroup`]
//! with correct column spans. The input tree is never mutated; the builder
//! works on a normalized copy.

use crate::column::{validate_columns, Column};
use crate::error::TableError;
use serde::{Deserialize, Serialize};

/// One cell of a rendered header row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeaderCell {
    /// Display label; empty for a synthetic spacer
    pub header: String,
    /// Depth of the row this cell belongs to (root = 0)
    pub depth: usize,
    /// Accessor path; leaf cells only
    pub accessor: Option<String>,
    /// Number of leaf columns this cell spans
    pub column_span: usize,
    /// Whether the table is currently sorted by this column
    pub is_sorted: bool,
    /// Whether the current sort on this column is descending
    pub is_sorted_desc: bool,
}

/// One row of the rendered header: cells at equal depth, left to right.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeaderGroup {
    /// Row depth (root = 0)
    pub depth: usize,
    /// Cells in render order
    pub cells: Vec<HeaderCell>,
}

/// Build depth-aligned header rows from a column tree.
///
/// Fails with [`TableError::InvalidSchema`] when any node is neither a
/// valid leaf nor a valid branch, or when the column list is empty.
pub fn build_header_groups(columns: &[Column]) -> Result<Vec<HeaderGroup>, TableError> {
    validate_columns(columns)?;
    let max_depth = columns.iter().map(subtree_height).max().unwrap_or(0);
    let normalized: Vec<Column> = columns
        .iter()
        .map(|column| pad_to_height(column, max_depth))
        .collect();
    let mut groups: Vec<HeaderGroup> = (0..max_depth)
        .map(|depth| HeaderGroup {
            depth,
            cells: Vec::new(),
        })
        .collect();
    for column in &normalized {
        collect_cells(column, 0, &mut groups);
    }
    Ok(groups)
}

/// Height of a subtree: 1 for a leaf, one more than the tallest child for
/// a branch.
fn subtree_height(column: &Column) -> usize {
    1 + column.children.iter().map(subtree_height).max().unwrap_or(0)
}

/// Number of leaf columns under a node; a leaf spans itself.
fn leaf_count(column: &Column) -> usize {
    if column.is_leaf() {
        1
    } else {
        column.children.iter().map(leaf_count).sum()
    }
}

/// Return a copy of `column` whose every leaf sits exactly `target` levels
/// deep. Shallow subtrees are wrapped in chains of empty-header spacers
/// inserted directly above them.
fn pad_to_height(column: &Column, target: usize) -> Column {
    let height = subtree_height(column);
    if height < target {
        let mut node = pad_to_height(column, height);
        for _ in height..target {
            node = Column::group("", [node]);
        }
        node
    } else if column.is_leaf() {
        column.clone()
    } else {
        Column::group(
            column.header.clone(),
            column
                .children
                .iter()
                .map(|child| pad_to_height(child, target - 1)),
        )
    }
}

/// Emit one cell per node into its depth row, root first. Each ancestor is
/// visited exactly once, so shared ancestors appear once per row.
fn collect_cells(column: &Column, depth: usize, groups: &mut [HeaderGroup]) {
    groups[depth].cells.push(HeaderCell {
        header: column.header.clone(),
        depth,
        accessor: column.accessor.clone(),
        column_span: leaf_count(column),
        is_sorted: false,
        is_sorted_desc: false,
    });
    for child in &column.children {
        collect_cells(child, depth + 1, groups);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flat_columns() -> Vec<Column> {
        vec![
            Column::new("Name", "show.name"),
            Column::new("Type", "show.type"),
            Column::new("Language", "show.language"),
        ]
    }

    fn nested_columns() -> Vec<Column> {
        vec![
            Column::group(
                "TV Show",
                [Column::new("Name", "show.name"), Column::new("Type", "show.type")],
            ),
            Column::group(
                "Title",
                [Column::group(
                    "Details",
                    [
                        Column::group(
                            "Cat1",
                            [
                                Column::new("Language", "show.language"),
                                Column::new("Genre(s)", "show.genres"),
                            ],
                        ),
                        Column::group(
                            "Cat2",
                            [
                                Column::new("Runtime", "show.runtime"),
                                Column::new("Status", "show.status"),
                            ],
                        ),
                    ],
                )],
            ),
        ]
    }

    fn spans(group: &HeaderGroup) -> Vec<usize> {
        group.cells.iter().map(|c| c.column_span).collect()
    }

    // ===== Flat Tree Tests =====

    #[test]
    fn test_flat_columns_single_group() {
        let groups = build_header_groups(&flat_columns()).expect("valid schema");
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].depth, 0);
        assert_eq!(groups[0].cells.len(), 3);
        assert!(groups[0].cells.iter().all(|c| c.column_span == 1));
    }

    // ===== Nested Tree Tests =====

    #[test]
    fn test_nested_columns_depth_aligned() {
        let groups = build_header_groups(&nested_columns()).expect("valid schema");
        // TV Show/Title, spacer rows for the shallow branch, then leaves
        assert_eq!(groups.len(), 4);
        assert_eq!(spans(&groups[0]), vec![2, 4]);
        assert_eq!(spans(&groups[3]), vec![1, 1, 1, 1, 1, 1]);
    }

    #[test]
    fn test_nested_columns_span_sums_constant() {
        let groups = build_header_groups(&nested_columns()).expect("valid schema");
        let leaf_total = 6;
        for group in &groups {
            assert_eq!(spans(group).iter().sum::<usize>(), leaf_total);
        }
    }

    #[test]
    fn test_shallow_branch_padded_with_spacers() {
        // "TV Show" is two levels tall next to the four-level "Title"
        // branch; spacer rows are inserted above it so its header stays
        // adjacent to its leaves.
        let groups = build_header_groups(&nested_columns()).expect("valid schema");
        assert_eq!(groups[0].cells[0].header, "");
        assert_eq!(groups[0].cells[0].column_span, 2);
        assert_eq!(groups[1].cells[0].header, "");
        assert_eq!(groups[2].cells[0].header, "TV Show");
        let leaf_row = &groups[3];
        assert_eq!(leaf_row.cells[0].header, "Name");
        assert_eq!(leaf_row.cells[0].accessor.as_deref(), Some("show.name"));
    }

    #[test]
    fn test_middle_rows_of_deep_branch() {
        let groups = build_header_groups(&nested_columns()).expect("valid schema");
        assert_eq!(groups[1].cells[1].header, "Details");
        assert_eq!(groups[1].cells[1].column_span, 4);
        let row2: Vec<&str> = groups[2].cells.iter().map(|c| c.header.as_str()).collect();
        assert_eq!(row2, vec!["TV Show", "Cat1", "Cat2"]);
    }

    #[test]
    fn test_mixed_depth_leaf_gets_spacer_above() {
        let columns = vec![
            Column::new("Plain", "plain"),
            Column::group("Grouped", [Column::new("Inner", "inner")]),
        ];
        let groups = build_header_groups(&columns).expect("valid schema");
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].cells[0].header, "");
        assert_eq!(groups[0].cells[1].header, "Grouped");
        assert_eq!(groups[1].cells[0].header, "Plain");
        assert_eq!(groups[1].cells[1].header, "Inner");
    }

    #[test]
    fn test_depth_fields_match_row_index() {
        let groups = build_header_groups(&nested_columns()).expect("valid schema");
        for (index, group) in groups.iter().enumerate() {
            assert_eq!(group.depth, index);
            assert!(group.cells.iter().all(|c| c.depth == index));
        }
    }

    #[test]
    fn test_accessor_only_on_leaf_row() {
        let groups = build_header_groups(&nested_columns()).expect("valid schema");
        let (leaf_row, upper_rows) = groups.split_last().expect("non-empty");
        assert!(leaf_row.cells.iter().all(|c| c.accessor.is_some()));
        for group in upper_rows {
            assert!(group.cells.iter().all(|c| c.accessor.is_none()));
        }
    }

    #[test]
    fn test_input_not_mutated() {
        let columns = nested_columns();
        let first = build_header_groups(&columns).expect("valid schema");
        let second = build_header_groups(&columns).expect("valid schema");
        assert_eq!(first, second);
    }

    // ===== Error Tests =====

    #[test]
    fn test_empty_columns_invalid() {
        assert!(build_header_groups(&[]).is_err());
    }

    #[test]
    fn test_zero_leaf_branch_invalid() {
        let columns = vec![Column::group("Empty", [])];
        assert!(build_header_groups(&columns).is_err());
    }
}
