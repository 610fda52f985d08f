use larder_core::config::SheetsConfig;
use larder_core::repository::SheetInventoryRepository;
use larder_core::sample::sample_items;
use larder_core::sheets::{GoogleSheetsClient, SheetBackend};

use crate::error::CliError;

/// Write the sample items straight to the configured spreadsheet.
pub async fn run_seed(confirmed: bool) -> Result<(), CliError> {
    if !confirmed {
        return Err(CliError::SeedNotConfirmed);
    }

    let config = SheetsConfig::from_env()?;
    let client = GoogleSheetsClient::new(config)?;
    let count = seed_backend(client).await?;
    println!("Seeded {count} items");
    Ok(())
}

pub async fn seed_backend<B: SheetBackend>(backend: B) -> Result<usize, CliError> {
    let repository = SheetInventoryRepository::new(backend);
    let items = sample_items();
    repository.replace_all(&items).await?;
    tracing::info!(count = items.len(), "Seeded spreadsheet with sample items");
    Ok(items.len())
}
