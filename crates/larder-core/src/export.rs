//! Item export renderers.

use std::fmt::Write as _;

use serde::{Deserialize, Serialize};

use crate::models::InventoryItem;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExportFormat {
    Json,
    Markdown,
}

impl ExportFormat {
    #[must_use]
    pub const fn extension(self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Markdown => "md",
        }
    }
}

/// Render items as a pretty-printed JSON array.
pub fn render_json_export(items: &[InventoryItem]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(items)
}

/// Render items as a Markdown table, flagging low-stock rows.
#[must_use]
pub fn render_markdown_export(items: &[InventoryItem]) -> String {
    let mut output = String::new();
    let _ = writeln!(
        output,
        "| ID | Name | Category | Quantity | Unit | Min Stock | Price | Supplier | Last Updated | Low Stock |"
    );
    let _ = writeln!(
        output,
        "|---|---|---|---:|---|---:|---:|---|---|---|"
    );

    for item in items {
        let _ = writeln!(
            output,
            "| {} | {} | {} | {} | {} | {} | {} | {} | {} | {} |",
            escape_cell(item.id.as_str()),
            escape_cell(&item.name),
            escape_cell(&item.category),
            item.quantity,
            escape_cell(&item.unit),
            item.min_stock,
            item.price,
            escape_cell(item.supplier.as_deref().unwrap_or("")),
            escape_cell(&item.last_updated),
            if item.is_low_stock() { "yes" } else { "" },
        );
    }

    output
}

pub fn render_items_export(
    items: &[InventoryItem],
    format: ExportFormat,
) -> serde_json::Result<String> {
    match format {
        ExportFormat::Json => render_json_export(items),
        ExportFormat::Markdown => Ok(render_markdown_export(items)),
    }
}

#[must_use]
pub fn suggested_export_file_name(format: ExportFormat, timestamp_ms: i64) -> String {
    format!("larder-export-{timestamp_ms}.{}", format.extension())
}

fn escape_cell(value: &str) -> String {
    value.replace('|', "\\|").replace('\n', " ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sample::sample_items;

    #[test]
    fn render_markdown_export_has_row_per_item() {
        let items = sample_items();
        let rendered = render_markdown_export(&items);

        assert_eq!(rendered.lines().count(), items.len() + 2);
        assert!(rendered.contains("| 1763642299355 | Milk | Dairy | 1000 | liters | 2000 | 0.02 | Highland |"));
        assert!(rendered.lines().nth(2).unwrap().ends_with("| yes |"));
    }

    #[test]
    fn render_markdown_export_escapes_pipes() {
        let mut items = sample_items();
        items.truncate(1);
        items[0].name = "Milk | whole".to_string();
        assert!(render_markdown_export(&items).contains("Milk \\| whole"));
    }

    #[test]
    fn render_json_export_round_trips_fields() {
        let items = sample_items();
        let rendered = render_json_export(&items[..1]).unwrap();
        assert!(rendered.contains("\"minStock\": 2000.0"));
        assert!(rendered.contains("\"supplier\": \"Highland\""));
    }

    #[test]
    fn suggested_export_file_name_uses_format_extension() {
        assert_eq!(
            suggested_export_file_name(ExportFormat::Json, 123),
            "larder-export-123.json"
        );
        assert_eq!(
            suggested_export_file_name(ExportFormat::Markdown, 456),
            "larder-export-456.md"
        );
    }
}
