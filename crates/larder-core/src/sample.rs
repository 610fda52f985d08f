//! Bundled sample data set for seeding a fresh spreadsheet.

use crate::models::{InventoryItem, ItemId};

type SampleRow = (
    &'static str,
    &'static str,
    &'static str,
    f64,
    &'static str,
    f64,
    f64,
    &'static str,
    &'static str,
);

const SAMPLE_ROWS: &[SampleRow] = &[
    ("1763642299355", "Milk", "Dairy", 1000.0, "liters", 2000.0, 0.02, "Highland", "2025-11-20T14:00:23.846Z"),
    ("1763642299356", "Coffee Beans (Arabica)", "Beverages", 45.0, "kg", 20.0, 2500.0, "Ceylon Coffee Co.", "2025-11-20T14:05:00.000Z"),
    ("1763642299357", "All-Purpose Flour", "Baking", 12.0, "kg", 25.0, 150.0, "Prima Flour Mills", "2025-11-20T14:10:00.000Z"),
    ("1763642299358", "Eggs", "Dairy", 120.0, "pieces", 100.0, 35.0, "Farm Fresh Kandy", "2025-11-20T14:15:00.000Z"),
    ("1763642299359", "Sugar", "Baking", 30.0, "kg", 15.0, 180.0, "Local Supplier", "2025-11-20T14:20:00.000Z"),
    ("1763642299360", "Rice (Basmati)", "Grains & Pasta", 100.0, "kg", 50.0, 250.0, "Premium Rice Co.", "2025-11-20T14:25:00.000Z"),
    ("1763642299361", "Chicken Breast", "Meat & Poultry", 15.0, "kg", 20.0, 850.0, "Fresh Poultry Farm", "2025-11-20T14:30:00.000Z"),
    ("1763642299362", "Tomatoes", "Vegetables", 25.0, "kg", 30.0, 120.0, "Local Farmer", "2025-11-20T14:35:00.000Z"),
    ("1763642299363", "Olive Oil", "Spices & Condiments", 8.0, "liters", 10.0, 1200.0, "Mediterranean Imports", "2025-11-20T14:40:00.000Z"),
    ("1763642299364", "Fresh Salmon", "Seafood", 5.0, "kg", 8.0, 2500.0, "Ocean Fresh Suppliers", "2025-11-20T14:45:00.000Z"),
    ("1763642299365", "Butter", "Dairy", 20.0, "kg", 15.0, 650.0, "Highland Dairy", "2025-11-20T14:50:00.000Z"),
    ("1763642299366", "Black Pepper", "Spices & Condiments", 2.0, "kg", 3.0, 3500.0, "Spice Traders", "2025-11-20T14:55:00.000Z"),
    ("1763642299367", "Fresh Mushrooms", "Vegetables", 8.0, "kg", 10.0, 450.0, "Forest Farms", "2025-11-20T15:00:00.000Z"),
    ("1763642299368", "Pasta (Spaghetti)", "Grains & Pasta", 30.0, "kg", 20.0, 280.0, "Italian Imports", "2025-11-20T15:05:00.000Z"),
    ("1763642299369", "Cheddar Cheese", "Dairy", 10.0, "kg", 12.0, 1200.0, "Cheese Factory", "2025-11-20T15:10:00.000Z"),
    ("1763642299370", "Fresh Lemons", "Fruits", 40.0, "pieces", 50.0, 25.0, "Citrus Growers", "2025-11-20T15:15:00.000Z"),
    ("1763642299371", "Coconut Milk", "Beverages", 50.0, "cans", 40.0, 180.0, "Tropical Products", "2025-11-20T15:20:00.000Z"),
    ("1763642299372", "Dish Soap", "Cleaning Supplies", 15.0, "bottles", 10.0, 250.0, "Clean Pro", "2025-11-20T15:25:00.000Z"),
    ("1763642299373", "Paper Napkins", "Disposables", 100.0, "packets", 80.0, 45.0, "Paper Supplies Ltd", "2025-11-20T15:30:00.000Z"),
    ("1763642299374", "Vanilla Extract", "Spices & Condiments", 5.0, "bottles", 6.0, 1800.0, "Flavor House", "2025-11-20T15:35:00.000Z"),
];

/// Twenty representative restaurant stock items, several of them low on stock.
pub fn sample_items() -> Vec<InventoryItem> {
    SAMPLE_ROWS
        .iter()
        .map(
            |&(id, name, category, quantity, unit, min_stock, price, supplier, last_updated)| {
                InventoryItem {
                    id: ItemId::from(id),
                    name: name.to_string(),
                    category: category.to_string(),
                    quantity,
                    unit: unit.to_string(),
                    min_stock,
                    price,
                    supplier: Some(supplier.to_string()),
                    last_updated: last_updated.to_string(),
                }
            },
        )
        .collect()
}
