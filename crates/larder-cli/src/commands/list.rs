use larder_core::query::{paginate, ItemQuery};
use larder_core::store::{InventoryApi, InventoryStore};
use larder_core::util::normalize_text_option;

use crate::cli::SortArg;
use crate::commands::common::{format_item_lines, load_items, sort_order};
use crate::error::CliError;

pub struct ListOptions {
    pub search: Option<String>,
    pub category: Option<String>,
    pub sort: SortArg,
    pub low_stock: bool,
    pub page: usize,
    pub per_page: usize,
    pub json: bool,
}

pub async fn run_list<A: InventoryApi>(
    store: &mut InventoryStore<A>,
    options: ListOptions,
) -> Result<(), CliError> {
    load_items(store).await?;

    let query = ItemQuery {
        search: normalize_text_option(options.search),
        category: normalize_text_option(options.category),
        low_stock_only: options.low_stock,
        sort: sort_order(options.sort),
    };
    let matching = query.apply(store.items());
    let page = paginate(&matching, options.page, options.per_page);

    if options.json {
        println!("{}", serde_json::to_string_pretty(&page)?);
        return Ok(());
    }

    if page.items.is_empty() {
        println!("No items found");
        return Ok(());
    }

    for line in format_item_lines(&page.items) {
        println!("{line}");
    }
    println!(
        "Showing {}-{} of {} (page {}/{})",
        page.first_position(),
        page.last_position(),
        page.total_items,
        page.page,
        page.total_pages
    );
    Ok(())
}
