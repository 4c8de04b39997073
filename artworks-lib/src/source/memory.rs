//! In-memory page source

use std::sync::atomic::AtomicBool;
use std::sync::atomic::Ordering;

use async_trait::async_trait;

use super::PageSource;
use crate::error::ApiError;
use crate::error::Error;
use crate::model::Page;
use crate::model::PageNumber;
use crate::model::Pagination;

/// A page source serving slices of a fixed list of records.
///
/// Can be switched into a failing mode to exercise error handling.
///
/// # Example
///
/// ```
/// use artworks_lib::source::InMemorySource;
///
/// let source = InMemorySource::new((1..=25u64).collect());
/// assert_eq!(source.len(), 25);
/// ```
#[derive(Debug, Default)]
pub struct InMemorySource<R> {
    records: Vec<R>,
    failing: AtomicBool,
}

impl<R> InMemorySource<R> {
    /// Creates a source over `records`.
    pub fn new(records: Vec<R>) -> Self {
        Self {
            records,
            failing: AtomicBool::new(false),
        }
    }

    /// Makes every following fetch fail (or succeed again).
    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    /// Returns the number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns `true` if the source holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[async_trait]
impl<R: Clone + Send + Sync> PageSource<R> for InMemorySource<R> {
    async fn fetch_page(&self, page: PageNumber, page_size: usize) -> Result<Page<R>, Error> {
        if page_size == 0 {
            return Err(Error::invalid_config("page size must be at least 1"));
        }
        if self.failing.load(Ordering::SeqCst) {
            return Err(ApiError::http(503, "source unavailable").into());
        }

        let total = self.records.len();
        let offset = page.index().saturating_mul(page_size).min(total);
        let end = offset.saturating_add(page_size).min(total);

        let pagination = Pagination {
            total,
            limit: page_size,
            offset,
            total_pages: total.div_ceil(page_size),
            current_page: page.get(),
        };
        Ok(Page::new(self.records[offset..end].to_vec(), total).with_pagination(pagination))
    }
}
