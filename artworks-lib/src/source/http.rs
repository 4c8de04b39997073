//! HTTP client for the Art Institute of Chicago artworks endpoint.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use log::debug;
use reqwest::Client;
use reqwest::header::ACCEPT;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use url::Url;

use super::PageSource;
use crate::config::BrowserConfig;
use crate::config::DEFAULT_BASE_URL;
use crate::error::ApiError;
use crate::error::Error;
use crate::model::ARTWORK_FIELDS;
use crate::model::Artwork;
use crate::model::Page;
use crate::model::PageNumber;
use crate::model::Pagination;

/// Client for `GET {base_url}/artworks?page=N&limit=M`.
///
/// Cheap to clone (uses `Arc` internally).
///
/// # Example
///
/// ```ignore
/// use artworks_lib::source::{ArtworkClient, PageSource};
/// use artworks_lib::PageNumber;
///
/// let client = ArtworkClient::builder()
///     .timeout(Duration::from_secs(10))
///     .build()?;
///
/// let page = client.fetch_page(PageNumber::FIRST, 10).await?;
/// println!("{} artworks in total", page.total_count());
/// ```
#[derive(Clone)]
pub struct ArtworkClient {
    inner: Arc<ArtworkClientInner>,
}

struct ArtworkClientInner {
    base_url: String,
    fields: Vec<String>,
    http_client: Client,
    timeout: Option<Duration>,
}

impl ArtworkClient {
    /// Creates a new builder for constructing a client.
    pub fn builder() -> ArtworkClientBuilder {
        ArtworkClientBuilder::new()
    }

    /// Creates a client from a [`BrowserConfig`].
    pub fn from_config(config: &BrowserConfig) -> Result<Self, Error> {
        let mut builder = Self::builder()
            .base_url(&config.base_url)
            .fields(config.fields.iter().cloned());
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        builder.build()
    }

    /// Returns the base URL.
    pub fn base_url(&self) -> &str {
        &self.inner.base_url
    }

    /// Builds the listing URL for `page`.
    pub fn page_url(&self, page: PageNumber, page_size: usize) -> Result<Url, Error> {
        let raw = format!("{}/artworks", self.inner.base_url.trim_end_matches('/'));
        let mut url = Url::parse(&raw).map_err(|e| ApiError::InvalidUrl(format!("{raw}: {e}")))?;
        {
            let mut query = url.query_pairs_mut();
            query.append_pair("page", &page.to_string());
            query.append_pair("limit", &page_size.to_string());
            if !self.inner.fields.is_empty() {
                query.append_pair("fields", &self.inner.fields.join(","));
            }
        }
        Ok(url)
    }

    fn transport_error(&self, err: reqwest::Error) -> ApiError {
        if err.is_timeout() {
            ApiError::Timeout(self.inner.timeout.unwrap_or_default())
        } else {
            ApiError::Network(err)
        }
    }
}

#[async_trait]
impl PageSource<Artwork> for ArtworkClient {
    async fn fetch_page(&self, page: PageNumber, page_size: usize) -> Result<Page<Artwork>, Error> {
        let url = self.page_url(page, page_size)?;
        debug!("Fetching artworks page {} ({})", page, url);

        let mut request = self
            .inner
            .http_client
            .get(url)
            .header(ACCEPT, "application/json");
        if let Some(timeout) = self.inner.timeout {
            request = request.timeout(timeout);
        }

        let response = request.send().await.map_err(|e| self.transport_error(e))?;
        let status = response.status();
        let body = response.text().await.map_err(|e| self.transport_error(e))?;

        if !status.is_success() {
            return Err(ApiError::http(status.as_u16(), error_message(&body)).into());
        }

        parse_page(&body)
    }
}

/// Listing response body: `{ "pagination": {...}, "data": [...] }`.
#[derive(Debug, Deserialize)]
struct ListingResponse<R> {
    data: Vec<R>,
    pagination: Pagination,
}

/// Error body returned by the API, e.g. for an out-of-range page.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: Option<String>,
    detail: Option<String>,
}

/// Parses a listing response body into a page.
pub fn parse_page<R: DeserializeOwned>(body: &str) -> Result<Page<R>, Error> {
    let listing: ListingResponse<R> = serde_json::from_str(body)
        .map_err(|e| ApiError::parse_with_body(e.to_string(), body))?;
    let total = listing.pagination.total;
    Ok(Page::new(listing.data, total).with_pagination(listing.pagination))
}

/// Extracts a readable message from an error response body.
fn error_message(body: &str) -> String {
    match serde_json::from_str::<ErrorBody>(body) {
        Ok(ErrorBody {
            detail: Some(detail),
            ..
        }) => detail,
        Ok(ErrorBody {
            error: Some(error), ..
        }) => error,
        _ => body.trim().to_string(),
    }
}

// =============================================================================
// Builder
// =============================================================================

/// Builder for constructing an [`ArtworkClient`].
///
/// # Example
///
/// ```ignore
/// let client = ArtworkClient::builder()
///     .base_url("https://api.artic.edu/api/v1")
///     .fields(["id", "title"])
///     .timeout(Duration::from_secs(30))
///     .build()?;
/// ```
pub struct ArtworkClientBuilder {
    base_url: String,
    fields: Vec<String>,
    timeout: Option<Duration>,
    connect_timeout: Option<Duration>,
    http_client: Option<Client>,
}

impl ArtworkClientBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            fields: ARTWORK_FIELDS.iter().map(|f| f.to_string()).collect(),
            timeout: None,
            connect_timeout: None,
            http_client: None,
        }
    }

    /// Sets the API base URL.
    ///
    /// Defaults to `https://api.artic.edu/api/v1`.
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Sets the fields requested for each artwork.
    pub fn fields<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.fields = fields.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Sets the connection timeout.
    ///
    /// This is applied when building the HTTP client.
    pub fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = Some(timeout);
        self
    }

    /// Sets a custom HTTP client.
    ///
    /// If not set, a default client will be created.
    pub fn http_client(mut self, client: Client) -> Self {
        self.http_client = Some(client);
        self
    }

    /// Builds the [`ArtworkClient`].
    pub fn build(self) -> Result<ArtworkClient, Error> {
        let http_client = match self.http_client {
            Some(client) => client,
            None => {
                let mut builder = Client::builder();
                if let Some(timeout) = self.connect_timeout {
                    builder = builder.connect_timeout(timeout);
                }
                builder.build().map_err(ApiError::from)?
            }
        };

        Ok(ArtworkClient {
            inner: Arc::new(ArtworkClientInner {
                base_url: self.base_url,
                fields: self.fields,
                http_client,
                timeout: self.timeout,
            }),
        })
    }
}

impl Default for ArtworkClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}
