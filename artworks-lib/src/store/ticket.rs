//! Fetch tickets and outcomes.

use crate::model::PageNumber;

/// Handle for one outstanding fetch, returned by [`PageStore::request`](super::PageStore::request).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchTicket {
    page: PageNumber,
    generation: u64,
}

impl FetchTicket {
    pub(super) fn new(page: PageNumber, generation: u64) -> Self {
        Self { page, generation }
    }

    /// Returns the requested page.
    pub fn page(&self) -> PageNumber {
        self.page
    }

    /// Returns the request sequence number.
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

/// What [`PageStore::complete`](super::PageStore::complete) did with a result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchOutcome {
    /// The page replaced the held records.
    Applied,
    /// The fetch failed; the held records were kept.
    Failed,
    /// A newer request exists; the result was dropped.
    Stale,
}
