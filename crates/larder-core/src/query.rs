//! Filtering, sorting, and paging of an item list for display.

use std::cmp::Ordering;
use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::models::InventoryItem;

pub const DEFAULT_PER_PAGE: usize = 10;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortOrder {
    /// Alphabetical by name, ignoring case
    #[default]
    Name,
    /// Most recently updated first
    Date,
    /// Low-stock items first, otherwise in list order
    LowStock,
}

#[derive(Debug, Clone, Default)]
pub struct ItemQuery {
    /// Case-insensitive substring matched against name, category, and supplier
    pub search: Option<String>,
    /// Exact category match
    pub category: Option<String>,
    pub low_stock_only: bool,
    pub sort: SortOrder,
}

impl ItemQuery {
    #[must_use]
    pub fn matches(&self, item: &InventoryItem) -> bool {
        let matches_search = self.search.as_deref().map_or(true, |search| {
            let needle = search.to_lowercase();
            item.name.to_lowercase().contains(&needle)
                || item.category.to_lowercase().contains(&needle)
                || item
                    .supplier
                    .as_deref()
                    .is_some_and(|supplier| supplier.to_lowercase().contains(&needle))
        });
        let matches_category = self
            .category
            .as_deref()
            .map_or(true, |category| item.category == category);

        matches_search && matches_category && (!self.low_stock_only || item.is_low_stock())
    }

    /// Matching items in the requested order.
    #[must_use]
    pub fn apply(&self, items: &[InventoryItem]) -> Vec<InventoryItem> {
        let mut filtered = items
            .iter()
            .filter(|item| self.matches(item))
            .cloned()
            .collect::<Vec<_>>();
        filtered.sort_by(|a, b| compare(self.sort, a, b));
        filtered
    }
}

fn compare(sort: SortOrder, a: &InventoryItem, b: &InventoryItem) -> Ordering {
    match sort {
        SortOrder::Name => a.name.to_lowercase().cmp(&b.name.to_lowercase()),
        SortOrder::Date => b.last_updated_at().cmp(&a.last_updated_at()),
        SortOrder::LowStock => b.is_low_stock().cmp(&a.is_low_stock()),
    }
}

/// One page of results plus the numbers needed to render a pager.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub items: Vec<T>,
    /// 1-based page number
    pub page: usize,
    pub per_page: usize,
    pub total_items: usize,
    pub total_pages: usize,
}

impl<T> Page<T> {
    /// 1-based position of the first item on this page; 0 when empty.
    #[must_use]
    pub fn first_position(&self) -> usize {
        if self.items.is_empty() {
            0
        } else {
            (self.page - 1) * self.per_page + 1
        }
    }

    #[must_use]
    pub fn last_position(&self) -> usize {
        if self.items.is_empty() {
            0
        } else {
            self.first_position() + self.items.len() - 1
        }
    }
}

/// Slice out page `page` (1-based; 0 is treated as 1).
#[must_use]
pub fn paginate<T: Clone>(items: &[T], page: usize, per_page: usize) -> Page<T> {
    let per_page = per_page.max(1);
    let page = page.max(1);
    let start = (page - 1).saturating_mul(per_page);

    Page {
        items: items.iter().skip(start).take(per_page).cloned().collect(),
        page,
        per_page,
        total_items: items.len(),
        total_pages: items.len().div_ceil(per_page),
    }
}

/// Distinct non-empty categories, sorted.
#[must_use]
pub fn distinct_categories(items: &[InventoryItem]) -> Vec<String> {
    items
        .iter()
        .map(|item| item.category.as_str())
        .filter(|category| !category.is_empty())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(str::to_string)
        .collect()
}
