//! Headless data-table engine for Tabla.
//!
//! This crate derives a renderer-agnostic table view-model from three
//! inputs: a possibly nested column tree, a list of JSON data records and
//! an options set. The pipeline is
//! columns → header tree → (data → sort → paginate → project) → rows:
//! - Header trees: [`build_header_groups`] normalizes irregular column
//!   nesting into depth-aligned [`HeaderGroup`] rows with column spans
//! - Projection: [`project_rows`] resolves dotted accessor paths into
//!   [`Row`] cell values
//! - Sorting: [`sort_records`] applies stable multi-key ordering
//! - Pagination: page slicing with self-correcting bounds
//! - Orchestration: [`Table`] keeps sort and page state consistent and
//!   derives one atomic [`TableView`] per recomputation
//!
//! The engine performs no rendering and holds no styling; any view layer
//! (table markup, terminal grid) can consume [`TableView`].

mod column;
mod error;
mod header;
mod paginate;
mod path;
mod project;
mod sort;
mod table;

pub use column::{leaf_columns, Column, GetFn, SortFn};
pub use error::TableError;
pub use header::{build_header_groups, HeaderCell, HeaderGroup};
pub use paginate::{clamp_page, page_count, paginate};
pub use path::{display_value, resolve_path};
pub use project::{project_rows, Cell, Row};
pub use sort::{next_toggle_state, sort_records, SortKey};
pub use table::{Table, TableOptions, TableView};
