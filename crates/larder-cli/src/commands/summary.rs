use larder_core::stats::InventorySummary;
use larder_core::store::{InventoryApi, InventoryStore};

use crate::commands::common::{format_currency, format_item_lines, load_items};
use crate::error::CliError;

pub async fn run_summary<A: InventoryApi>(
    store: &mut InventoryStore<A>,
    as_json: bool,
) -> Result<(), CliError> {
    load_items(store).await?;
    let summary = InventorySummary::from_items(store.items());

    if as_json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
        return Ok(());
    }

    for line in format_summary(&summary) {
        println!("{line}");
    }
    if !summary.low_stock_items.is_empty() {
        println!();
        println!("Low stock:");
        for line in format_item_lines(&summary.low_stock_items) {
            println!("  {line}");
        }
    }
    Ok(())
}

pub fn format_summary(summary: &InventorySummary) -> Vec<String> {
    let categories = if summary.categories.is_empty() {
        "0".to_string()
    } else {
        format!(
            "{} ({})",
            summary.categories.len(),
            summary.categories_preview()
        )
    };

    vec![
        format!("Total items:  {}", summary.total_items),
        format!("Low stock:    {}", summary.low_stock_count),
        format!("Categories:   {categories}"),
        format!("Total value:  {}", format_currency(summary.total_value)),
    ]
}
