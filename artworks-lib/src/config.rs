//! Browser configuration

use std::time::Duration;

use crate::model::ARTWORK_FIELDS;

/// Default number of records per page.
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Largest page size the API accepts.
pub const MAX_PAGE_SIZE: usize = 100;

/// Default API base URL.
pub const DEFAULT_BASE_URL: &str = "https://api.artic.edu/api/v1";

/// Configuration for the artwork browser.
///
/// The page size is fixed for the lifetime of a session; build a new store
/// to change it.
///
/// # Example
///
/// ```
/// use std::time::Duration;
/// use artworks_lib::BrowserConfig;
///
/// let config = BrowserConfig::default()
///     .with_page_size(25)
///     .with_timeout(Duration::from_secs(10));
/// assert_eq!(config.page_size, 25);
/// ```
#[derive(Debug, Clone)]
pub struct BrowserConfig {
    /// API base URL, without the `/artworks` suffix.
    ///
    /// Default: `https://api.artic.edu/api/v1`
    pub base_url: String,

    /// Records per page, between 1 and [`MAX_PAGE_SIZE`].
    ///
    /// Default: 10
    pub page_size: usize,

    /// Per-request timeout. `None` waits indefinitely.
    ///
    /// Default: 30 seconds
    pub timeout: Option<Duration>,

    /// Fields requested for each record.
    pub fields: Vec<String>,
}

impl Default for BrowserConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            page_size: DEFAULT_PAGE_SIZE,
            timeout: Some(Duration::from_secs(30)),
            fields: ARTWORK_FIELDS.iter().map(|f| f.to_string()).collect(),
        }
    }
}

impl BrowserConfig {
    /// Creates a new config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the API base URL.
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Sets the page size, clamped to `1..=MAX_PAGE_SIZE`.
    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size.clamp(1, MAX_PAGE_SIZE);
        self
    }

    /// Sets the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Disables the request timeout.
    pub fn without_timeout(mut self) -> Self {
        self.timeout = None;
        self
    }

    /// Sets the requested fields.
    pub fn with_fields<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.fields = fields.into_iter().map(Into::into).collect();
        self
    }
}
