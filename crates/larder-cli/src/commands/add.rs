use larder_core::store::{InventoryApi, InventoryStore};
use larder_core::NewItem;

use crate::cli::AddArgs;
use crate::commands::common::warn_nonstandard;
use crate::error::CliError;

pub async fn run_add<A: InventoryApi>(
    store: &mut InventoryStore<A>,
    args: AddArgs,
) -> Result<(), CliError> {
    warn_nonstandard(Some(args.category.as_str()), Some(args.unit.as_str()));

    let item = store.add_item(&new_item_from_args(args)).await?;
    println!("{}", item.id);
    Ok(())
}

pub fn new_item_from_args(args: AddArgs) -> NewItem {
    NewItem {
        name: args.name.trim().to_string(),
        category: args.category.trim().to_string(),
        quantity: args.quantity,
        unit: args.unit.trim().to_string(),
        min_stock: args.min_stock,
        price: args.price,
        supplier: args.supplier,
    }
}
