//! Artwork browser library
//!
//! Fetches fixed-size pages of artworks from the Art Institute of Chicago API
//! and tracks which records the user has selected, page by page, without ever
//! holding the whole remote collection in memory.

pub mod config;
pub mod error;
pub mod model;
pub mod pagination;
pub mod selection;
pub mod source;
pub mod store;
pub mod view;

pub use config::BrowserConfig;
pub use model::Artwork;
pub use model::PageNumber;
pub use selection::SelectionTracker;
pub use store::PageStore;
