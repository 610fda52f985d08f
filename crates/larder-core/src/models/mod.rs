//! Data models for Larder

mod catalog;
mod item;

pub use catalog::{CATEGORIES, UNITS};
pub use item::{InventoryItem, ItemId, ItemUpdate, NewItem, NewItemRequest};
