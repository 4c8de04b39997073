//! Application error type.

use thiserror::Error;

/// Errors that end the application.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("terminal error: {0}")]
    Io(#[from] std::io::Error),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("browser error: {0}")]
    Browser(#[from] artworks_lib::error::Error),

    #[error("logger error: {0}")]
    Logger(#[from] log::SetLoggerError),
}
