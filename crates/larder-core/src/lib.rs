//! larder-core - Core library for Larder
//!
//! This crate contains the inventory item model, the spreadsheet-backed
//! persistence adapter, and the client-side store shared by the API server
//! and the CLI.

pub mod client;
pub mod config;
pub mod error;
pub mod export;
pub mod models;
pub mod query;
pub mod repository;
pub mod sample;
pub mod sheets;
pub mod stats;
pub mod store;
pub mod util;

pub use error::{Error, Result};
pub use models::{InventoryItem, ItemId, ItemUpdate, NewItem};
