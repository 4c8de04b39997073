//! Page type for paginated listing results.

use serde::Deserialize;
use serde::Serialize;

use super::PageNumber;

/// Pagination metadata returned alongside each page.
///
/// Only `total` is needed by the browser. The rest is kept for display and
/// diagnostics and defaults to zero when the source omits it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    /// Total number of records in the remote collection.
    pub total: usize,
    /// Page size the source actually used.
    #[serde(default)]
    pub limit: usize,
    /// Offset of the first record on this page.
    #[serde(default)]
    pub offset: usize,
    /// Total number of pages at this page size.
    #[serde(default)]
    pub total_pages: usize,
    /// The page the source served, 1-based.
    #[serde(default)]
    pub current_page: u32,
}

/// One page of records together with its pagination metadata.
#[derive(Debug, Clone)]
pub struct Page<R> {
    records: Vec<R>,
    pagination: Pagination,
}

impl<R> Page<R> {
    /// Creates a page from its records and the collection's total count.
    pub fn new(records: Vec<R>, total: usize) -> Self {
        Self {
            records,
            pagination: Pagination {
                total,
                ..Pagination::default()
            },
        }
    }

    /// Replaces the pagination metadata.
    pub fn with_pagination(mut self, pagination: Pagination) -> Self {
        self.pagination = pagination;
        self
    }

    /// Returns a reference to the records in this page.
    pub fn records(&self) -> &[R] {
        &self.records
    }

    /// Consumes the page and returns the records.
    pub fn into_records(self) -> Vec<R> {
        self.records
    }

    /// Returns the pagination metadata.
    pub fn pagination(&self) -> &Pagination {
        &self.pagination
    }

    /// Returns the total record count of the remote collection.
    pub fn total_count(&self) -> usize {
        self.pagination.total
    }

    /// Returns the page number reported by the source, if it sent one.
    pub fn current_page(&self) -> Option<PageNumber> {
        PageNumber::new(self.pagination.current_page)
    }

    /// Returns `true` if this page has no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Returns the number of records in this page.
    pub fn len(&self) -> usize {
        self.records.len()
    }
}
