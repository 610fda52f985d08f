//! Mapping between inventory items and positional spreadsheet rows.
//!
//! Column layout: id, name, category, quantity, unit, minStock, price,
//! supplier, lastUpdated.

use serde_json::Value;

use crate::models::{InventoryItem, ItemId};
use crate::util::iso_timestamp_now;

use super::SheetRow;

pub const COLUMN_COUNT: usize = 9;

pub const HEADER: [&str; COLUMN_COUNT] = [
    "ID",
    "Name",
    "Category",
    "Quantity",
    "Unit",
    "Min Stock",
    "Price",
    "Supplier",
    "Last Updated",
];

pub fn header_row() -> SheetRow {
    HEADER.iter().map(|title| Value::from(*title)).collect()
}

/// Row 1 is treated as a header only when its first cell reads `ID`.
pub fn is_header_row(row: &[Value]) -> bool {
    row.first()
        .map(cell_text)
        .is_some_and(|text| text.trim().eq_ignore_ascii_case(HEADER[0]))
}

pub fn is_blank_row(row: &[Value]) -> bool {
    row.iter().all(|cell| cell_text(cell).trim().is_empty())
}

/// Encode an item as a row. Numbers stay numeric so the sheet can sum them.
pub fn item_to_row(item: &InventoryItem) -> SheetRow {
    vec![
        Value::from(item.id.as_str()),
        Value::from(item.name.as_str()),
        Value::from(item.category.as_str()),
        number_cell(item.quantity),
        Value::from(item.unit.as_str()),
        number_cell(item.min_stock),
        number_cell(item.price),
        Value::from(item.supplier.as_deref().unwrap_or("")),
        Value::from(item.last_updated.as_str()),
    ]
}

/// Decode a row. Missing cells read as empty, unparseable numbers as zero,
/// and a missing timestamp as the current time.
pub fn row_to_item(row: &[Value]) -> InventoryItem {
    let text = |index: usize| row.get(index).map(cell_text).unwrap_or_default();
    let number = |index: usize| row.get(index).map_or(0.0, numeric_cell);

    let supplier = text(7);
    let last_updated = text(8);

    InventoryItem {
        id: ItemId::from(text(0)),
        name: text(1),
        category: text(2),
        quantity: number(3),
        unit: text(4),
        min_stock: number(5),
        price: number(6),
        supplier: (!supplier.is_empty()).then_some(supplier),
        last_updated: if last_updated.is_empty() {
            iso_timestamp_now()
        } else {
            last_updated
        },
    }
}

pub fn cell_text(cell: &Value) -> String {
    match cell {
        Value::Null => String::new(),
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}

fn number_cell(value: f64) -> Value {
    serde_json::Number::from_f64(value).map_or_else(|| Value::from(0), Value::Number)
}

fn numeric_cell(cell: &Value) -> f64 {
    match cell {
        Value::Number(number) => number.as_f64().unwrap_or(0.0),
        Value::String(text) => parse_leading_number(text),
        _ => 0.0,
    }
}

/// Parse the longest numeric prefix of `text`, so `"12kg"` reads as 12.
/// Anything without a numeric prefix reads as 0.
pub fn parse_leading_number(text: &str) -> f64 {
    let trimmed = text.trim_start();
    let bytes = trimmed.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end += 1;
    }
    let int_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut digits = end - int_start;

    if end < bytes.len() && bytes[end] == b'.' {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while frac_end < bytes.len() && bytes[frac_end].is_ascii_digit() {
            frac_end += 1;
        }
        if digits > 0 || frac_end > frac_start {
            digits += frac_end - frac_start;
            end = frac_end;
        }
    }

    if digits == 0 {
        return 0.0;
    }

    if end < bytes.len() && matches!(bytes[end], b'e' | b'E') {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+' | b'-')) {
            exp_end += 1;
        }
        let exp_digits_start = exp_end;
        while exp_end < bytes.len() && bytes[exp_end].is_ascii_digit() {
            exp_end += 1;
        }
        if exp_end > exp_digits_start {
            end = exp_end;
        }
    }

    trimmed[..end]
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .unwrap_or(0.0)
}
