//! Current-page state and fetch bookkeeping.
//!
//! The store holds exactly one page of records at a time. Fetching is split
//! into [`PageStore::request`] and [`PageStore::complete`] so a caller can
//! run fetches concurrently and feed results back in whatever order they
//! finish. Only the result of the most recent request is applied; anything
//! older is discarded as stale.

mod ticket;

pub use ticket::*;

use log::debug;
use log::error;

use crate::error::Error;
use crate::model::Page;
use crate::model::PageNumber;
use crate::model::TableRecord;
use crate::pagination::Paginator;
use crate::source::PageSource;

/// Holds the displayed page and tracks in-flight fetches.
#[derive(Debug)]
pub struct PageStore<R> {
    page_size: usize,
    /// Page of the latest request.
    requested: PageNumber,
    /// Page whose records are currently held.
    page: PageNumber,
    records: Vec<R>,
    total_count: usize,
    loading: bool,
    last_error: Option<Error>,
    generation: u64,
}

impl<R: TableRecord> PageStore<R> {
    /// Creates an empty store positioned on the first page.
    ///
    /// A zero page size is treated as one.
    pub fn new(page_size: usize) -> Self {
        Self {
            page_size: page_size.max(1),
            requested: PageNumber::FIRST,
            page: PageNumber::FIRST,
            records: Vec::new(),
            total_count: 0,
            loading: false,
            last_error: None,
            generation: 0,
        }
    }

    /// Records a request for `page` and begins loading.
    ///
    /// Any ticket handed out earlier becomes stale.
    pub fn request(&mut self, page: PageNumber) -> FetchTicket {
        self.generation += 1;
        self.requested = page;
        self.loading = true;
        debug!("Requesting page {} (request #{})", page, self.generation);
        FetchTicket::new(page, self.generation)
    }

    /// Requests the last requested page again.
    pub fn retry(&mut self) -> FetchTicket {
        self.request(self.requested)
    }

    /// Feeds the result of a fetch back into the store.
    ///
    /// Results for anything but the latest request are discarded without
    /// touching state. For the latest request, loading ends whatever the
    /// outcome; on failure the previously held page is kept.
    pub fn complete(&mut self, ticket: FetchTicket, result: Result<Page<R>, Error>) -> FetchOutcome {
        if ticket.generation() != self.generation {
            debug!(
                "Discarding stale result for page {} (request #{}, latest #{})",
                ticket.page(),
                ticket.generation(),
                self.generation
            );
            return FetchOutcome::Stale;
        }

        self.loading = false;
        match result {
            Ok(page) => {
                debug!("Loaded page {} with {} records", ticket.page(), page.len());
                self.total_count = page.total_count();
                self.records = page.into_records();
                self.page = ticket.page();
                self.last_error = None;
                FetchOutcome::Applied
            }
            Err(err) => {
                error!("Error fetching page {}: {}", ticket.page(), err);
                self.last_error = Some(err);
                FetchOutcome::Failed
            }
        }
    }

    /// Fetches `page` from `source` and applies the result.
    pub async fn load<S>(&mut self, source: &S, page: PageNumber) -> FetchOutcome
    where
        S: PageSource<R> + ?Sized,
    {
        let ticket = self.request(page);
        let result = source.fetch_page(page, self.page_size).await;
        self.complete(ticket, result)
    }

    /// Returns the page whose records are held.
    ///
    /// Selections made against [`records`](Self::records) belong to this page.
    pub fn page(&self) -> PageNumber {
        self.page
    }

    /// Returns the page of the latest request.
    pub fn requested_page(&self) -> PageNumber {
        self.requested
    }

    /// Returns the held records.
    pub fn records(&self) -> &[R] {
        &self.records
    }

    /// Returns the identifiers of the held records, in display order.
    pub fn current_ids(&self) -> Vec<R::Id> {
        self.records.iter().map(TableRecord::id).collect()
    }

    /// Returns the total record count of the remote collection.
    pub fn total_count(&self) -> usize {
        self.total_count
    }

    /// Returns the page size.
    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Returns `true` while the latest request is outstanding.
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Returns the error of the latest request, if it failed.
    pub fn last_error(&self) -> Option<&Error> {
        self.last_error.as_ref()
    }

    /// Returns pagination math for the held total.
    pub fn paginator(&self) -> Paginator {
        Paginator::new(self.total_count, self.page_size)
    }
}
