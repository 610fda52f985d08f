use std::env;

use chrono::Utc;
use larder_core::client::{HttpInventoryClient, DEFAULT_API_URL};
use larder_core::models::{CATEGORIES, UNITS};
use larder_core::query::SortOrder;
use larder_core::store::{InventoryApi, InventoryStore};
use larder_core::util::normalize_text_option;
use larder_core::{InventoryItem, ItemId};

use crate::cli::SortArg;
use crate::error::CliError;

pub type HttpStore = InventoryStore<HttpInventoryClient>;

pub fn resolve_api_url(cli_api_url: Option<String>) -> String {
    normalize_text_option(cli_api_url)
        .or_else(|| normalize_text_option(env::var("LARDER_API_URL").ok()))
        .unwrap_or_else(|| DEFAULT_API_URL.to_string())
}

pub fn open_store(api_url: &str) -> Result<HttpStore, CliError> {
    Ok(InventoryStore::new(HttpInventoryClient::new(api_url)?))
}

/// Refresh the store and surface a failed fetch as an error.
pub async fn load_items<A: InventoryApi>(store: &mut InventoryStore<A>) -> Result<(), CliError> {
    store.fetch_items().await;
    match store.error() {
        Some(message) => Err(CliError::Fetch(message.to_string())),
        None => Ok(()),
    }
}

pub fn normalize_item_id(id: &str) -> Result<ItemId, CliError> {
    id.parse::<ItemId>().map_err(|_| CliError::EmptyItemId)
}

pub const fn sort_order(sort: SortArg) -> SortOrder {
    match sort {
        SortArg::Name => SortOrder::Name,
        SortArg::Date => SortOrder::Date,
        SortArg::LowStock => SortOrder::LowStock,
    }
}

/// Warning text when a value is outside the standard catalog.
pub fn catalog_warning(label: &str, value: &str, catalog: &[&str]) -> Option<String> {
    if catalog.iter().any(|entry| entry.eq_ignore_ascii_case(value.trim())) {
        None
    } else {
        Some(format!("note: '{value}' is not a standard {label}"))
    }
}

pub fn warn_nonstandard(category: Option<&str>, unit: Option<&str>) {
    let warnings = category
        .and_then(|value| catalog_warning("category", value, CATEGORIES))
        .into_iter()
        .chain(unit.and_then(|value| catalog_warning("unit", value, UNITS)));
    for warning in warnings {
        eprintln!("{warning}");
    }
}

pub fn format_item_lines(items: &[InventoryItem]) -> Vec<String> {
    let now_ms = Utc::now().timestamp_millis();
    items
        .iter()
        .map(|item| {
            let name = truncate(&item.name, 28);
            let stock = format!("{} {}", format_quantity(item.quantity), item.unit);
            let updated = item.last_updated_at().map_or_else(
                || "-".to_string(),
                |stamp| format_relative_time(stamp.timestamp_millis(), now_ms),
            );
            let flag = if item.is_low_stock() { "  LOW" } else { "" };

            format!(
                "{:<13}  {name:<28}  {stock:>14}  {:<20}  {updated:<8}{flag}",
                item.id.as_str(),
                truncate(&item.category, 20),
            )
        })
        .collect()
}

pub fn format_item_detail(item: &InventoryItem) -> Vec<String> {
    let mut lines = vec![
        format!("ID:           {}", item.id),
        format!("Name:         {}", item.name),
        format!("Category:     {}", item.category),
        format!(
            "Quantity:     {} {}",
            format_quantity(item.quantity),
            item.unit
        ),
        format!(
            "Min stock:    {} {}",
            format_quantity(item.min_stock),
            item.unit
        ),
        format!("Price:        {} per {}", format_currency(item.price), item.unit),
        format!("Stock value:  {}", format_currency(item.stock_value())),
        format!("Supplier:     {}", item.supplier.as_deref().unwrap_or("-")),
        format!("Last updated: {}", item.last_updated),
    ];
    if item.is_low_stock() {
        lines.push("Status:       LOW STOCK".to_string());
    }
    lines
}

pub fn format_quantity(value: f64) -> String {
    if value.fract().abs() < f64::EPSILON && value.abs() < 1e15 {
        format!("{value:.0}")
    } else {
        value.to_string()
    }
}

/// `LKR` amount with thousands separators and at most two decimals.
pub fn format_currency(value: f64) -> String {
    let rounded = format!("{:.2}", value.abs());
    let (whole, fraction) = rounded.split_once('.').unwrap_or((rounded.as_str(), "00"));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (index, digit) in whole.chars().enumerate() {
        if index > 0 && (whole.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    let fraction = fraction.trim_end_matches('0');
    let sign = if value < 0.0 { "-" } else { "" };
    if fraction.is_empty() {
        format!("LKR {sign}{grouped}")
    } else {
        format!("LKR {sign}{grouped}.{fraction}")
    }
}

pub fn format_relative_time(timestamp_ms: i64, now_ms: i64) -> String {
    let diff = now_ms.saturating_sub(timestamp_ms);
    let minute = 60_000;
    let hour = 60 * minute;
    let day = 24 * hour;
    let week = 7 * day;
    let month = 30 * day;
    let year = 365 * day;

    if diff < minute {
        "just now".to_string()
    } else if diff < hour {
        format!("{}m ago", diff / minute)
    } else if diff < day {
        format!("{}h ago", diff / hour)
    } else if diff < week {
        format!("{}d ago", diff / day)
    } else if diff < month {
        format!("{}w ago", diff / week)
    } else if diff < year {
        format!("{}mo ago", diff / month)
    } else {
        format!("{}y ago", diff / year)
    }
}

fn truncate(value: &str, max_chars: usize) -> String {
    if value.chars().count() <= max_chars {
        value.to_string()
    } else {
        let mut truncated = value
            .chars()
            .take(max_chars.saturating_sub(3))
            .collect::<String>();
        truncated.push_str("...");
        truncated
    }
}
