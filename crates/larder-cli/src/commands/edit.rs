use larder_core::store::{InventoryApi, InventoryStore};
use larder_core::ItemUpdate;

use crate::cli::EditArgs;
use crate::commands::common::{normalize_item_id, warn_nonstandard};
use crate::error::CliError;

pub async fn run_edit<A: InventoryApi>(
    store: &mut InventoryStore<A>,
    id: &str,
    fields: EditArgs,
) -> Result<(), CliError> {
    let id = normalize_item_id(id)?;
    let update = update_from_args(fields);
    if update.is_empty() {
        return Err(CliError::EmptyUpdate);
    }
    warn_nonstandard(update.category.as_deref(), update.unit.as_deref());

    let updated = store.update_item(&id, &update).await.map_err(|error| {
        if error.is_not_found() {
            CliError::ItemNotFound(id.to_string())
        } else {
            CliError::Core(error)
        }
    })?;
    println!("{}", updated.id);
    Ok(())
}

pub fn update_from_args(fields: EditArgs) -> ItemUpdate {
    ItemUpdate {
        name: fields.name,
        category: fields.category,
        quantity: fields.quantity,
        unit: fields.unit,
        min_stock: fields.min_stock,
        price: fields.price,
        supplier: fields.supplier,
    }
}
