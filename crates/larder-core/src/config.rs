//! Environment-driven configuration shared by the API server and the CLI.
//!
//! Every constructor takes a `lookup` closure instead of reading the process
//! environment directly, so callers and tests can inject their own values.

use std::collections::HashMap;
use std::env;
use std::fmt;

use thiserror::Error;

use crate::util::is_http_url;

pub const DEFAULT_SHEET_NAME: &str = "Inventory";
pub const DEFAULT_TOKEN_URI: &str = "https://oauth2.googleapis.com/token";
pub const DEFAULT_SHEETS_API_URL: &str = "https://sheets.googleapis.com";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingVar(&'static str),
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Connection settings for the Google Sheets backend.
#[derive(Clone, PartialEq, Eq)]
pub struct SheetsConfig {
    pub spreadsheet_id: String,
    pub sheet_name: String,
    pub client_email: String,
    pub private_key: String,
    pub token_uri: String,
    pub api_base_url: String,
}

impl fmt::Debug for SheetsConfig {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("SheetsConfig")
            .field("spreadsheet_id", &self.spreadsheet_id)
            .field("sheet_name", &self.sheet_name)
            .field("client_email", &self.client_email)
            .field("private_key", &"[REDACTED]")
            .field("token_uri", &self.token_uri)
            .field("api_base_url", &self.api_base_url)
            .finish()
    }
}

impl SheetsConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        let values = env_snapshot();
        Self::from_lookup(|name| values.get(name).cloned())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let spreadsheet_id = required_trimmed(&lookup, "GOOGLE_SHEET_ID")?;
        let sheet_name = value_or_default(&lookup, "GOOGLE_SHEET_NAME", DEFAULT_SHEET_NAME);
        let client_email = required_trimmed(&lookup, "GOOGLE_CLIENT_EMAIL")?;
        // Keys pasted into .env files usually carry escaped newlines.
        let private_key = required_trimmed(&lookup, "GOOGLE_PRIVATE_KEY")?.replace("\\n", "\n");
        if !private_key.contains("PRIVATE KEY") {
            return Err(ConfigError::Invalid(
                "GOOGLE_PRIVATE_KEY must be a PEM-encoded private key".to_string(),
            ));
        }

        let token_uri = value_or_default(&lookup, "GOOGLE_TOKEN_URI", DEFAULT_TOKEN_URI);
        if !is_http_url(&token_uri) {
            return Err(ConfigError::Invalid(
                "GOOGLE_TOKEN_URI must start with http:// or https://".to_string(),
            ));
        }

        let api_base_url =
            value_or_default(&lookup, "GOOGLE_SHEETS_API_URL", DEFAULT_SHEETS_API_URL);
        if !is_http_url(&api_base_url) {
            return Err(ConfigError::Invalid(
                "GOOGLE_SHEETS_API_URL must start with http:// or https://".to_string(),
            ));
        }

        Ok(Self {
            spreadsheet_id,
            sheet_name,
            client_email,
            private_key,
            token_uri,
            api_base_url: api_base_url.trim_end_matches('/').to_string(),
        })
    }
}

/// Snapshot the process environment into a map usable as a lookup source.
pub fn env_snapshot() -> HashMap<String, String> {
    env::vars().collect()
}

pub fn value_or_default(
    lookup: impl Fn(&str) -> Option<String>,
    name: &str,
    default: &str,
) -> String {
    optional_trimmed(lookup, name).unwrap_or_else(|| default.to_string())
}

pub fn required_trimmed(
    lookup: impl Fn(&str) -> Option<String>,
    name: &'static str,
) -> Result<String, ConfigError> {
    optional_trimmed(lookup, name).ok_or(ConfigError::MissingVar(name))
}

pub fn optional_trimmed(lookup: impl Fn(&str) -> Option<String>, name: &str) -> Option<String> {
    lookup(name).and_then(|value| {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    })
}
