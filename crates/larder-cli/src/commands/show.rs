use larder_core::store::{InventoryApi, InventoryStore};

use crate::commands::common::{format_item_detail, normalize_item_id};
use crate::error::CliError;

pub async fn run_show<A: InventoryApi>(
    store: &InventoryStore<A>,
    id: &str,
    as_json: bool,
) -> Result<(), CliError> {
    let id = normalize_item_id(id)?;
    let item = store.api().get_item(&id).await.map_err(|error| {
        if error.is_not_found() {
            CliError::ItemNotFound(id.to_string())
        } else {
            CliError::Core(error)
        }
    })?;

    if as_json {
        println!("{}", serde_json::to_string_pretty(&item)?);
    } else {
        for line in format_item_detail(&item) {
            println!("{line}");
        }
    }
    Ok(())
}
