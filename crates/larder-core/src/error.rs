//! Error types for larder-core

use thiserror::Error;

use crate::config::ConfigError;

/// Result type alias using larder-core's Error
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in larder-core operations
#[derive(Error, Debug)]
pub enum Error {
    /// No item carries the requested id
    #[error("Item not found: {0}")]
    NotFound(String),

    /// Invalid input
    #[error("{0}")]
    InvalidInput(String),

    /// The spreadsheet rejected a call or returned something unusable
    #[error("Spreadsheet error: {0}")]
    Sheets(String),

    /// Service-account token exchange failed
    #[error("Spreadsheet auth error: {0}")]
    Auth(String),

    /// Missing or invalid configuration
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Inventory API returned an unsuccessful envelope
    #[error("Inventory API error: {0}")]
    Api(String),

    /// HTTP transport error
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl Error {
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}
