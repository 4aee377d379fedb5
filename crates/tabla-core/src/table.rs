//! Table engine: composes header building, sorting, pagination and row
//! projection into one derived view-model.
//!
//! The engine is headless: [`Table`] owns the column tree, the data and
//! the caller-visible sort/page state, and [`Table::view`] derives one
//! atomic [`TableView`] snapshot per call. State mutators re-clamp the
//! page immediately, so readers never observe a page number that is only
//! valid for a previous page count.

use crate::column::{leaf_columns, Column};
use crate::error::TableError;
use crate::header::{build_header_groups, HeaderGroup};
use crate::paginate::{clamp_page, page_count, paginate};
use crate::project::{project_rows, Row};
use crate::sort::{next_toggle_state, sort_records, SortKey};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Table engine configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TableOptions {
    /// Enable page slicing and page navigation
    pub use_pagination: bool,
    /// Enable sorting and the sort toggle contract
    pub use_sort_by: bool,
    /// Initial 1-based page number (clamped on construction)
    pub initial_page: usize,
    /// Initial page size (minimum 1)
    pub initial_page_size: usize,
    /// Initial sort state
    pub initial_sort_keys: Vec<SortKey>,
}

impl Default for TableOptions {
    fn default() -> Self {
        Self::new()
    }
}

impl TableOptions {
    /// Create options with everything disabled.
    #[must_use]
    pub fn new() -> Self {
        Self {
            use_pagination: false,
            use_sort_by: false,
            initial_page: 1,
            initial_page_size: 10,
            initial_sort_keys: Vec::new(),
        }
    }

    /// Enable pagination.
    #[must_use]
    pub const fn pagination(mut self, enabled: bool) -> Self {
        self.use_pagination = enabled;
        self
    }

    /// Enable sorting.
    #[must_use]
    pub const fn sort_by(mut self, enabled: bool) -> Self {
        self.use_sort_by = enabled;
        self
    }

    /// Set the initial page number.
    #[must_use]
    pub const fn initial_page(mut self, page: usize) -> Self {
        self.initial_page = page;
        self
    }

    /// Set the initial page size.
    #[must_use]
    pub const fn initial_page_size(mut self, page_size: usize) -> Self {
        self.initial_page_size = page_size;
        self
    }

    /// Set the initial sort state.
    #[must_use]
    pub fn initial_sort_keys(mut self, keys: impl IntoIterator<Item = SortKey>) -> Self {
        self.initial_sort_keys = keys.into_iter().collect();
        self
    }
}

/// One atomic derived snapshot of the table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableView {
    /// Header rows, root first, leaf cells annotated with sort flags
    pub header_groups: Vec<HeaderGroup>,
    /// Rows of the current page, projected through the leaf columns
    pub rows: Vec<Row>,
    /// Current 1-based page number
    pub page: usize,
    /// Current page size
    pub page_size: usize,
    /// Total page count (1 when pagination is disabled)
    pub page_count: usize,
    /// Whether a previous page exists
    pub can_previous_page: bool,
    /// Whether a next page exists
    pub can_next_page: bool,
}

/// Headless table engine.
#[derive(Debug)]
pub struct Table {
    columns: Vec<Column>,
    data: Vec<Value>,
    options: TableOptions,
    sort_keys: Vec<SortKey>,
    page: usize,
    page_size: usize,
    /// Rebuilt only when the columns change
    header_groups: Vec<HeaderGroup>,
    /// Flattened leaf columns, cached alongside the header tree
    leaves: Vec<Column>,
}

impl Table {
    /// Create a table engine over a column tree and data records.
    ///
    /// Validates the column schema and builds the header tree up front;
    /// the initial page is clamped into the valid range.
    pub fn new(
        columns: Vec<Column>,
        data: Vec<Value>,
        options: TableOptions,
    ) -> Result<Self, TableError> {
        let header_groups = build_header_groups(&columns)?;
        let leaves = leaf_columns(&columns);
        let mut table = Self {
            sort_keys: options.initial_sort_keys.clone(),
            page: options.initial_page.max(1),
            page_size: options.initial_page_size.max(1),
            columns,
            data,
            options,
            header_groups,
            leaves,
        };
        table.reclamp_page();
        Ok(table)
    }

    /// Derive the current view-model snapshot.
    #[must_use]
    pub fn view(&self) -> TableView {
        let sorted: Vec<Value> = if self.options.use_sort_by && !self.sort_keys.is_empty() {
            sort_records(&self.data, &self.sort_keys, &self.leaves)
        } else {
            self.data.clone()
        };
        let page_count = self.current_page_count();
        let paged: Vec<Value> = if self.options.use_pagination {
            paginate(&sorted, self.page, self.page_size).to_vec()
        } else {
            sorted
        };
        TableView {
            header_groups: self.annotated_header_groups(),
            rows: project_rows(&paged, &self.leaves),
            page: self.page,
            page_size: self.page_size,
            page_count,
            can_previous_page: self.page > 1,
            can_next_page: self.page < page_count,
        }
    }

    /// Replace the data records. The current page self-corrects.
    pub fn set_data(&mut self, data: Vec<Value>) {
        self.data = data;
        self.reclamp_page();
    }

    /// Replace the column tree, rebuilding the header tree.
    ///
    /// On schema error the table is left unchanged.
    pub fn set_columns(&mut self, columns: Vec<Column>) -> Result<(), TableError> {
        let header_groups = build_header_groups(&columns)?;
        self.leaves = leaf_columns(&columns);
        self.columns = columns;
        self.header_groups = header_groups;
        Ok(())
    }

    /// Go to a 1-based page, clamped into the valid range.
    pub fn go_to_page(&mut self, page: usize) {
        self.page = clamp_page(page, self.current_page_count());
    }

    /// Go to the previous page, clamped at the first.
    pub fn previous_page(&mut self) {
        self.go_to_page(self.page.saturating_sub(1));
    }

    /// Go to the next page, clamped at the last.
    pub fn next_page(&mut self) {
        self.go_to_page(self.page.saturating_add(1));
    }

    /// Set the page size (minimum 1). The current page self-corrects.
    pub fn set_page_size(&mut self, page_size: usize) {
        self.page_size = page_size.max(1);
        self.reclamp_page();
    }

    /// Replace the sort state.
    pub fn set_sort_keys(&mut self, keys: impl IntoIterator<Item = SortKey>) {
        self.sort_keys = keys.into_iter().collect();
        self.reclamp_page();
    }

    /// Toggle sorting on a column: unsorted → ascending → descending →
    /// unsorted. Selecting a new column replaces the sort state. Does
    /// nothing when sorting is disabled.
    pub fn toggle_sort(&mut self, accessor: &str) {
        if !self.options.use_sort_by {
            return;
        }
        self.sort_keys = next_toggle_state(&self.sort_keys, accessor);
    }

    /// Current 1-based page number.
    #[must_use]
    pub const fn page(&self) -> usize {
        self.page
    }

    /// Current page size.
    #[must_use]
    pub const fn page_size(&self) -> usize {
        self.page_size
    }

    /// Current sort state, insertion order = priority.
    #[must_use]
    pub fn sort_keys(&self) -> &[SortKey] {
        &self.sort_keys
    }

    /// Engine configuration.
    #[must_use]
    pub const fn options(&self) -> &TableOptions {
        &self.options
    }

    /// The column tree.
    #[must_use]
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Number of data records (before pagination).
    #[must_use]
    pub fn record_count(&self) -> usize {
        self.data.len()
    }

    fn current_page_count(&self) -> usize {
        if self.options.use_pagination {
            page_count(self.data.len(), self.page_size)
        } else {
            1
        }
    }

    fn reclamp_page(&mut self) {
        self.page = clamp_page(self.page, self.current_page_count());
    }

    fn annotated_header_groups(&self) -> Vec<HeaderGroup> {
        let mut groups = self.header_groups.clone();
        if !self.options.use_sort_by {
            return groups;
        }
        for group in &mut groups {
            for cell in &mut group.cells {
                let Some(accessor) = &cell.accessor else {
                    continue;
                };
                if let Some(key) = self.sort_keys.iter().find(|k| &k.accessor == accessor) {
                    cell.is_sorted = true;
                    cell.is_sorted_desc = key.descending;
                }
            }
        }
        groups
    }
}
