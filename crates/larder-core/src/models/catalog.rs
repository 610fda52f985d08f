//! Suggested values for the open-ended category and unit fields.
//!
//! Neither list is enforced; items may carry any category or unit.

pub const CATEGORIES: &[&str] = &[
    "Beverages",
    "Dairy",
    "Baking",
    "Meat & Poultry",
    "Seafood",
    "Vegetables",
    "Fruits",
    "Grains & Pasta",
    "Spices & Condiments",
    "Frozen Foods",
    "Cleaning Supplies",
    "Disposables",
    "Other",
];

pub const UNITS: &[&str] = &[
    "kg", "g", "liters", "ml", "pieces", "boxes", "bottles", "cans", "packets", "bags", "dozen",
];
