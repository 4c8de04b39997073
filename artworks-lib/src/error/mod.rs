//! Error types

mod api;

pub use api::*;

/// Top-level error type for the library.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The remote data source failed.
    #[error("API error: {0}")]
    Api(#[from] ApiError),

    /// A configuration value was rejected.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl Error {
    /// Creates a new configuration error.
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig(message.into())
    }

    /// Returns `true` if retrying the same request may succeed.
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Api(err) => err.is_retryable(),
            Self::InvalidConfig(_) => false,
        }
    }
}
