//! Client-side mirror of the server's item list.
//!
//! The store never patches its list locally: every successful mutation is
//! followed by a full re-fetch, so `items()` always reflects the last answer
//! from the server.

use crate::error::{Error, Result};
use crate::models::{InventoryItem, ItemId, ItemUpdate, NewItem};

/// Remote operations the store needs from the inventory API.
#[allow(async_fn_in_trait)]
pub trait InventoryApi {
    async fn list_items(&self) -> Result<Vec<InventoryItem>>;

    async fn get_item(&self, id: &ItemId) -> Result<InventoryItem>;

    async fn create_item(&self, item: &NewItem) -> Result<InventoryItem>;

    async fn update_item(&self, id: &ItemId, update: &ItemUpdate) -> Result<InventoryItem>;

    async fn delete_item(&self, id: &ItemId) -> Result<()>;
}

pub struct InventoryStore<A> {
    api: A,
    items: Vec<InventoryItem>,
    is_loading: bool,
    error: Option<String>,
}

impl<A: InventoryApi> InventoryStore<A> {
    pub const fn new(api: A) -> Self {
        Self {
            api,
            items: Vec::new(),
            is_loading: false,
            error: None,
        }
    }

    pub fn items(&self) -> &[InventoryItem] {
        &self.items
    }

    pub const fn is_loading(&self) -> bool {
        self.is_loading
    }

    /// Message of the last failed call, cleared when the next call starts.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub const fn api(&self) -> &A {
        &self.api
    }

    /// Look up an item in the local list only.
    pub fn get_item(&self, id: &ItemId) -> Option<&InventoryItem> {
        self.items.iter().find(|item| &item.id == id)
    }

    /// Replace the local list with the server's. Failures are recorded in
    /// `error()` rather than returned; the previous list is kept.
    pub async fn fetch_items(&mut self) {
        self.begin();
        match self.api.list_items().await {
            Ok(items) => {
                self.items = items;
                self.is_loading = false;
            }
            Err(error) => {
                tracing::warn!(%error, "Failed to fetch items");
                self.fail(error);
            }
        }
    }

    pub async fn add_item(&mut self, item: &NewItem) -> Result<InventoryItem> {
        self.begin();
        match self.api.create_item(item).await {
            Ok(created) => {
                self.fetch_items().await;
                Ok(created)
            }
            Err(error) => Err(self.fail(error)),
        }
    }

    pub async fn update_item(&mut self, id: &ItemId, update: &ItemUpdate) -> Result<InventoryItem> {
        self.begin();
        match self.api.update_item(id, update).await {
            Ok(updated) => {
                self.fetch_items().await;
                Ok(updated)
            }
            Err(error) => Err(self.fail(error)),
        }
    }

    pub async fn delete_item(&mut self, id: &ItemId) -> Result<()> {
        self.begin();
        match self.api.delete_item(id).await {
            Ok(()) => {
                self.fetch_items().await;
                Ok(())
            }
            Err(error) => Err(self.fail(error)),
        }
    }

    fn begin(&mut self) {
        self.is_loading = true;
        self.error = None;
    }

    fn fail(&mut self, error: Error) -> Error {
        self.error = Some(error.to_string());
        self.is_loading = false;
        error
    }
}
