//! Settings loaded from the environment.
//!
//! A `.env` file in the working directory is read first, if present.
//!
//! | Variable | Meaning |
//! |---|---|
//! | `ARTWORKS_API_URL` | API base URL |
//! | `ARTWORKS_PAGE_SIZE` | records per page (1-100) |
//! | `ARTWORKS_TIMEOUT_SECS` | request timeout, `0` disables it |
//! | `ARTWORKS_OFFLINE` | `1`/`true` serves built-in demo records instead |

use std::env;
use std::time::Duration;

use artworks_lib::BrowserConfig;

use crate::error::AppError;

/// Resolved application settings.
#[derive(Debug, Clone)]
pub struct Settings {
    pub browser: BrowserConfig,
    pub offline: bool,
}

/// Loads settings from `.env` and the process environment.
pub fn load() -> Result<Settings, AppError> {
    let _ = dotenvy::dotenv();
    from_lookup(|key| env::var(key).ok())
}

fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Settings, AppError> {
    let mut browser = BrowserConfig::default();

    if let Some(url) = lookup("ARTWORKS_API_URL") {
        browser = browser.with_base_url(url);
    }

    if let Some(size) = lookup("ARTWORKS_PAGE_SIZE") {
        let size: usize = size
            .trim()
            .parse()
            .map_err(|_| AppError::Config(format!("ARTWORKS_PAGE_SIZE is not a number: {size}")))?;
        browser = browser.with_page_size(size);
    }

    if let Some(secs) = lookup("ARTWORKS_TIMEOUT_SECS") {
        let secs: u64 = secs.trim().parse().map_err(|_| {
            AppError::Config(format!("ARTWORKS_TIMEOUT_SECS is not a number: {secs}"))
        })?;
        browser = match secs {
            0 => browser.without_timeout(),
            secs => browser.with_timeout(Duration::from_secs(secs)),
        };
    }

    let offline = lookup("ARTWORKS_OFFLINE")
        .map(|v| matches!(v.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes"))
        .unwrap_or(false);

    Ok(Settings { browser, offline })
}
