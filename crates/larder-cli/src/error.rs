use std::io;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Core(#[from] larder_core::Error),
    #[error(transparent)]
    Config(#[from] larder_core::config::ConfigError),
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Serialization(#[from] serde_json::Error),
    #[error("Item ID cannot be empty")]
    EmptyItemId,
    #[error("Item not found: {0}")]
    ItemNotFound(String),
    #[error("Nothing to update; pass at least one field flag")]
    EmptyUpdate,
    #[error("Failed to load items: {0}")]
    Fetch(String),
    #[error("Seeding replaces every row in the spreadsheet. Re-run with --yes to confirm.")]
    SeedNotConfirmed,
}
