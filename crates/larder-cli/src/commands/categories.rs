use larder_core::models::{CATEGORIES, UNITS};
use larder_core::query::distinct_categories;
use larder_core::store::{InventoryApi, InventoryStore};

use crate::commands::common::load_items;
use crate::error::CliError;

pub async fn run_categories<A: InventoryApi>(
    store: &mut InventoryStore<A>,
    catalog: bool,
) -> Result<(), CliError> {
    if catalog {
        println!("Categories: {}", CATEGORIES.join(", "));
        println!("Units:      {}", UNITS.join(", "));
        return Ok(());
    }

    load_items(store).await?;
    for category in distinct_categories(store.items()) {
        let count = store
            .items()
            .iter()
            .filter(|item| item.category == category)
            .count();
        println!("{category:<24}  {count}");
    }
    Ok(())
}
