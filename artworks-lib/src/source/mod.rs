//! Remote data sources
//!
//! A [`PageSource`] returns one page of records plus pagination metadata for
//! a page number and page size. Implementations:
//!
//! - [`ArtworkClient`]: the Art Institute of Chicago REST API
//! - [`InMemorySource`]: a fixed list of records, for offline use and tests

mod http;
mod memory;

pub use http::*;
pub use memory::*;

use async_trait::async_trait;

use crate::error::Error;
use crate::model::Page;
use crate::model::PageNumber;

/// Trait for sources of paged records.
#[async_trait]
pub trait PageSource<R>: Send + Sync {
    /// Fetches `page`, holding at most `page_size` records.
    async fn fetch_page(&self, page: PageNumber, page_size: usize) -> Result<Page<R>, Error>;
}
