use larder_core::store::{InventoryApi, InventoryStore};

use crate::commands::common::{load_items, normalize_item_id};
use crate::error::CliError;

pub async fn run_delete<A: InventoryApi>(
    store: &mut InventoryStore<A>,
    id: &str,
) -> Result<(), CliError> {
    let id = normalize_item_id(id)?;
    load_items(store).await?;
    let name = store
        .get_item(&id)
        .map(|item| item.name.clone())
        .ok_or_else(|| CliError::ItemNotFound(id.to_string()))?;

    store.delete_item(&id).await.map_err(|error| {
        if error.is_not_found() {
            CliError::ItemNotFound(id.to_string())
        } else {
            CliError::Core(error)
        }
    })?;
    println!("Deleted {id} ({name})");
    Ok(())
}
