//! Inventory repository on top of a sheet backend.
//!
//! Every lookup reads the whole sheet and scans it for the id, so each call
//! costs one full read. Concurrent writers are not coordinated: two updates to
//! the same item race and the last write wins.

use crate::error::{Error, Result};
use crate::models::{InventoryItem, ItemId, ItemUpdate, NewItem};
use crate::sheets::row::{header_row, is_blank_row, is_header_row, item_to_row, row_to_item};
use crate::sheets::{SheetBackend, SheetRow};
use crate::util::iso_timestamp_now;

/// Sheet row number of the header.
const HEADER_ROW: usize = 1;

pub struct SheetInventoryRepository<B> {
    backend: B,
}

impl<B: SheetBackend> SheetInventoryRepository<B> {
    pub const fn new(backend: B) -> Self {
        Self { backend }
    }

    pub const fn backend(&self) -> &B {
        &self.backend
    }

    /// Write the header row if the sheet has nothing in row 1.
    pub async fn ensure_initialized(&self) -> Result<()> {
        if self.backend.read_row(HEADER_ROW).await?.is_none() {
            tracing::info!("Sheet is empty, writing header row");
            self.backend
                .write_rows(HEADER_ROW, vec![header_row()])
                .await?;
        }
        Ok(())
    }

    /// All items in sheet order.
    pub async fn list(&self) -> Result<Vec<InventoryItem>> {
        let rows = self.backend.read_rows().await?;
        Ok(item_rows(&rows).map(|(_, item)| item).collect())
    }

    pub async fn get(&self, id: &ItemId) -> Result<Option<InventoryItem>> {
        let items = self.list().await?;
        Ok(items.into_iter().find(|item| &item.id == id))
    }

    /// Assign an id and timestamp, then append the item as a new row.
    pub async fn create(&self, new_item: NewItem) -> Result<InventoryItem> {
        let item = new_item.into_item(ItemId::generate(), iso_timestamp_now());
        self.backend.append_row(item_to_row(&item)).await?;
        tracing::debug!(item_id = %item.id, "Appended item row");
        Ok(item)
    }

    /// Merge `update` over the stored item and rewrite its row in place.
    pub async fn update(&self, id: &ItemId, update: &ItemUpdate) -> Result<InventoryItem> {
        let (row_number, existing) = self.locate(id).await?;
        let updated = update.apply(&existing, iso_timestamp_now());
        self.backend
            .write_rows(row_number, vec![item_to_row(&updated)])
            .await?;
        tracing::debug!(item_id = %id, row_number, "Rewrote item row");
        Ok(updated)
    }

    /// Remove the item's row.
    pub async fn delete(&self, id: &ItemId) -> Result<()> {
        let (row_number, _) = self.locate(id).await?;
        self.backend.delete_row(row_number).await?;
        tracing::debug!(item_id = %id, row_number, "Deleted item row");
        Ok(())
    }

    /// Clear the sheet and write the header followed by `items`.
    pub async fn replace_all(&self, items: &[InventoryItem]) -> Result<()> {
        self.backend.clear().await?;

        let mut rows = Vec::with_capacity(items.len() + 1);
        rows.push(header_row());
        rows.extend(items.iter().map(item_to_row));
        self.backend.write_rows(HEADER_ROW, rows).await?;
        tracing::info!(count = items.len(), "Replaced sheet contents");
        Ok(())
    }

    async fn locate(&self, id: &ItemId) -> Result<(usize, InventoryItem)> {
        let rows = self.backend.read_rows().await?;
        let found = item_rows(&rows).find(|(_, item)| &item.id == id);
        found.ok_or_else(|| Error::NotFound(id.to_string()))
    }
}

/// Items paired with their sheet row numbers, skipping the header and blanks.
fn item_rows(rows: &[SheetRow]) -> impl Iterator<Item = (usize, InventoryItem)> + '_ {
    rows.iter()
        .enumerate()
        .map(|(index, row)| (index + 1, row))
        .filter(|(row_number, row)| {
            !is_blank_row(row) && !(*row_number == HEADER_ROW && is_header_row(row))
        })
        .map(|(row_number, row)| (row_number, row_to_item(row)))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;
    use crate::sheets::MemorySheet;

    fn setup() -> SheetInventoryRepository<MemorySheet> {
        SheetInventoryRepository::new(MemorySheet::new())
    }

    fn flour() -> NewItem {
        NewItem {
            name: "All-Purpose Flour".to_string(),
            category: "Baking".to_string(),
            quantity: 12.0,
            unit: "kg".to_string(),
            min_stock: 25.0,
            price: 150.0,
            supplier: Some("Prima Flour Mills".to_string()),
        }
    }

    fn butter() -> NewItem {
        NewItem {
            name: "Butter".to_string(),
            category: "Dairy".to_string(),
            quantity: 20.0,
            unit: "kg".to_string(),
            min_stock: 15.0,
            price: 650.0,
            supplier: None,
        }
    }

    #[tokio::test]
    async fn test_list_uninitialized_is_empty() {
        let repo = setup();
        assert!(repo.list().await.unwrap().is_empty());

        repo.ensure_initialized().await.unwrap();
        assert!(repo.list().await.unwrap().is_empty());
        assert_eq!(repo.backend().snapshot().await, vec![header_row()]);
    }

    #[tokio::test]
    async fn test_ensure_initialized_keeps_existing_first_row() {
        let existing = vec![json!("1763642299355"), json!("Milk"), json!("Dairy")];
        let repo = SheetInventoryRepository::new(MemorySheet::with_rows(vec![existing.clone()]));

        repo.ensure_initialized().await.unwrap();
        assert_eq!(repo.backend().snapshot().await, vec![existing]);

        let items = repo.list().await.unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].name, "Milk");
    }

    #[tokio::test]
    async fn test_create_and_get() {
        let repo = setup();
        repo.ensure_initialized().await.unwrap();

        let created = repo.create(flour()).await.unwrap();
        assert!(!created.id.is_empty());
        assert!(created.last_updated_at().is_some());

        let fetched = repo.get(&created.id).await.unwrap().unwrap();
        assert_eq!(fetched, created);
        assert_eq!(fetched.name, "All-Purpose Flour");
        assert_eq!(fetched.supplier.as_deref(), Some("Prima Flour Mills"));
    }

    #[tokio::test]
    async fn test_create_assigns_distinct_ids() {
        let repo = setup();
        let first = repo.create(flour()).await.unwrap();
        let second = repo.create(flour()).await.unwrap();
        assert_ne!(first.id, second.id);
        assert_eq!(repo.list().await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_partial_update_keeps_other_fields() {
        let repo = setup();
        repo.ensure_initialized().await.unwrap();
        let created = repo.create(butter()).await.unwrap();
        let other = repo.create(flour()).await.unwrap();

        let update = ItemUpdate {
            price: Some(700.0),
            ..ItemUpdate::default()
        };
        let updated = repo.update(&created.id, &update).await.unwrap();

        assert_eq!(updated.id, created.id);
        assert_eq!(updated.price, 700.0);
        assert_eq!(updated.name, created.name);
        assert_eq!(updated.quantity, created.quantity);
        assert_eq!(updated.min_stock, created.min_stock);
        assert!(updated.last_updated_at() >= created.last_updated_at());

        assert_eq!(repo.get(&created.id).await.unwrap().unwrap(), updated);
        assert_eq!(repo.get(&other.id).await.unwrap().unwrap(), other);
    }

    #[tokio::test]
    async fn test_update_missing_id_leaves_sheet_unchanged() {
        let repo = setup();
        repo.ensure_initialized().await.unwrap();
        repo.create(butter()).await.unwrap();
        let before = repo.backend().snapshot().await;

        let update = ItemUpdate {
            quantity: Some(1.0),
            ..ItemUpdate::default()
        };
        let err = repo
            .update(&ItemId::from("does-not-exist"), &update)
            .await
            .unwrap_err();

        assert!(err.is_not_found());
        assert_eq!(repo.backend().snapshot().await, before);
    }

    #[tokio::test]
    async fn test_delete_twice() {
        let repo = setup();
        repo.ensure_initialized().await.unwrap();
        let keep = repo.create(flour()).await.unwrap();
        let doomed = repo.create(butter()).await.unwrap();

        repo.delete(&doomed.id).await.unwrap();
        let err = repo.delete(&doomed.id).await.unwrap_err();
        assert!(err.is_not_found());

        let items = repo.list().await.unwrap();
        assert_eq!(items, vec![keep]);
    }

    #[tokio::test]
    async fn test_list_skips_blank_rows() {
        let rows = vec![
            header_row(),
            vec![json!("1"), json!("Tomatoes"), json!("Vegetables"), json!("25")],
            vec![json!(""), json!("")],
            vec![json!("2"), json!("Lemons"), json!("Fruits"), json!("40")],
        ];
        let repo = SheetInventoryRepository::new(MemorySheet::with_rows(rows));

        let names = repo
            .list()
            .await
            .unwrap()
            .into_iter()
            .map(|item| item.name)
            .collect::<Vec<_>>();
        assert_eq!(names, vec!["Tomatoes", "Lemons"]);

        repo.delete(&ItemId::from("2")).await.unwrap();
        assert_eq!(repo.backend().snapshot().await.len(), 3);
    }

    #[tokio::test]
    async fn test_replace_all_writes_header_and_items() {
        let repo = setup();
        repo.create(butter()).await.unwrap();

        let seeded = crate::sample::sample_items();
        repo.replace_all(&seeded).await.unwrap();

        let rows = repo.backend().snapshot().await;
        assert_eq!(rows.len(), seeded.len() + 1);
        assert!(is_header_row(&rows[0]));
        assert_eq!(repo.list().await.unwrap(), seeded);
    }

    #[tokio::test]
    async fn test_upstream_failure_propagates() {
        let repo = setup();
        repo.backend()
            .set_outage(Some("backend unreachable".to_string()))
            .await;

        let err = repo.list().await.unwrap_err();
        assert!(matches!(err, Error::Sheets(_)));
    }
}
