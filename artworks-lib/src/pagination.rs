//! Page arithmetic for the pagination control.

use crate::model::PageNumber;

/// Pagination math over a collection of `total_records` split into pages of
/// `page_size`.
///
/// The widget side of pagination reports 0-based indexes; everything here
/// speaks [`PageNumber`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Paginator {
    total_records: usize,
    page_size: usize,
}

impl Paginator {
    /// Creates a paginator. A zero page size is treated as one.
    pub fn new(total_records: usize, page_size: usize) -> Self {
        Self {
            total_records,
            page_size: page_size.max(1),
        }
    }

    /// Returns the total number of records.
    pub fn total_records(&self) -> usize {
        self.total_records
    }

    /// Returns the page size.
    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Returns the number of pages. Zero when there are no records.
    pub fn total_pages(&self) -> usize {
        self.total_records.div_ceil(self.page_size)
    }

    /// Returns `true` if `page` holds at least one record.
    pub fn contains(&self, page: PageNumber) -> bool {
        page.index() < self.total_pages()
    }

    /// Returns the 0-based offset of the first record on `page`.
    pub fn first_offset(&self, page: PageNumber) -> usize {
        page.index().saturating_mul(self.page_size)
    }

    /// Returns the first page.
    pub fn first(&self) -> PageNumber {
        PageNumber::FIRST
    }

    /// Returns the last page, or the first page when there are no records.
    pub fn last(&self) -> PageNumber {
        match self.total_pages() {
            0 => PageNumber::FIRST,
            pages => PageNumber::from_index(pages - 1),
        }
    }

    /// Returns the page after `page`, clamped to the last page.
    pub fn next(&self, page: PageNumber) -> PageNumber {
        page.next().min(self.last())
    }

    /// Returns the page before `page`, clamped to the valid range.
    pub fn prev(&self, page: PageNumber) -> PageNumber {
        page.prev().unwrap_or(PageNumber::FIRST).min(self.last())
    }

    /// Maps a 0-based page index emitted by the pagination widget to a page.
    pub fn page_changed(&self, index: usize) -> PageNumber {
        PageNumber::from_index(index)
    }

    /// Short report of the current position, e.g. `(2 of 12)`.
    pub fn report(&self, page: PageNumber) -> String {
        format!("({} of {})", page, self.total_pages())
    }

    /// Range report, e.g. `Showing 11 to 20 of 115 entries`.
    pub fn range_report(&self, page: PageNumber) -> String {
        if self.total_records == 0 || !self.contains(page) {
            return format!("Showing 0 to 0 of {} entries", self.total_records);
        }
        let first = self.first_offset(page);
        let last = (first + self.page_size).min(self.total_records);
        format!(
            "Showing {} to {} of {} entries",
            first + 1,
            last,
            self.total_records
        )
    }
}
