//! Dashboard summary over the full item list.

use serde::Serialize;

use crate::models::InventoryItem;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InventorySummary {
    pub total_items: usize,
    pub low_stock_count: usize,
    pub low_stock_items: Vec<InventoryItem>,
    /// Distinct non-empty categories in first-seen order
    pub categories: Vec<String>,
    /// Sum of `quantity * price` over all items
    pub total_value: f64,
}

impl InventorySummary {
    #[must_use]
    pub fn from_items(items: &[InventoryItem]) -> Self {
        let low_stock_items = items
            .iter()
            .filter(|item| item.is_low_stock())
            .cloned()
            .collect::<Vec<_>>();

        let mut categories: Vec<String> = Vec::new();
        for item in items {
            if !item.category.is_empty() && !categories.contains(&item.category) {
                categories.push(item.category.clone());
            }
        }

        Self {
            total_items: items.len(),
            low_stock_count: low_stock_items.len(),
            low_stock_items,
            categories,
            total_value: items.iter().map(InventoryItem::stock_value).sum(),
        }
    }

    /// First three categories joined, with `...` when more exist.
    #[must_use]
    pub fn categories_preview(&self) -> String {
        let mut preview = self
            .categories
            .iter()
            .take(3)
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(", ");
        if self.categories.len() > 3 {
            preview.push_str("...");
        }
        preview
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sample::sample_items;

    #[test]
    fn summary_counts_low_stock_and_value() {
        let items = sample_items();
        let summary = InventorySummary::from_items(&items);

        assert_eq!(summary.total_items, 20);
        assert_eq!(summary.low_stock_count, summary.low_stock_items.len());
        assert!(summary.low_stock_items.iter().all(InventoryItem::is_low_stock));
        assert_eq!(summary.categories.len(), 11);

        let expected: f64 = items.iter().map(|item| item.quantity * item.price).sum();
        assert!((summary.total_value - expected).abs() < 1e-6);
    }

    #[test]
    fn categories_preview_truncates_after_three() {
        let summary = InventorySummary::from_items(&sample_items());
        assert_eq!(summary.categories_preview(), "Dairy, Beverages, Baking...");

        let empty = InventorySummary::from_items(&[]);
        assert_eq!(empty.categories_preview(), "");
        assert!(empty.total_value.abs() < f64::EPSILON);
    }
}
