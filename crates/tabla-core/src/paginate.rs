//! Pagination for the table engine.
//!
//! Page numbers are 1-based. Out-of-range inputs are clamped, never
//! raised as errors, so stale page state self-corrects after the data or
//! the page size changes.

use serde_json::Value;

/// Number of pages for `len` records at `page_size` records per page.
///
/// Never less than 1: an empty data set still has one (empty) page.
#[must_use]
pub fn page_count(len: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 1;
    }
    len.div_ceil(page_size).max(1)
}

/// Clamp a 1-based page number into `[1, page_count]`.
#[must_use]
pub fn clamp_page(page: usize, page_count: usize) -> usize {
    page.clamp(1, page_count.max(1))
}

/// The records on the given 1-based page.
#[must_use]
pub fn paginate(records: &[Value], page: usize, page_size: usize) -> &[Value] {
    let page = clamp_page(page, page_count(records.len(), page_size));
    let start = (page - 1).saturating_mul(page_size).min(records.len());
    let end = page.saturating_mul(page_size).min(records.len());
    &records[start..end]
}
