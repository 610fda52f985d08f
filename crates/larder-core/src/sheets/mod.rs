//! Spreadsheet backends holding the inventory rows.
//!
//! Rows are addressed by their 1-based sheet row number, the way the
//! spreadsheet itself numbers them.

use std::future::Future;

use serde_json::Value;

use crate::error::Result;

mod google;
mod memory;
pub mod row;

pub use google::GoogleSheetsClient;
pub use memory::MemorySheet;

/// One spreadsheet row of raw cell values.
pub type SheetRow = Vec<Value>;

/// Row-level operations on the sheet tab that stores the inventory.
pub trait SheetBackend: Send + Sync {
    /// Read every row of the item columns, starting at row 1.
    fn read_rows(&self) -> impl Future<Output = Result<Vec<SheetRow>>> + Send;

    /// Read one row; `None` when the row is empty or past the end.
    fn read_row(&self, row_number: usize) -> impl Future<Output = Result<Option<SheetRow>>> + Send;

    /// Overwrite consecutive rows beginning at `first_row`.
    fn write_rows(
        &self,
        first_row: usize,
        rows: Vec<SheetRow>,
    ) -> impl Future<Output = Result<()>> + Send;

    /// Insert a row after the last populated row.
    fn append_row(&self, row: SheetRow) -> impl Future<Output = Result<()>> + Send;

    /// Remove a row; the rows below shift up by one.
    fn delete_row(&self, row_number: usize) -> impl Future<Output = Result<()>> + Send;

    /// Erase every value in the item columns.
    fn clear(&self) -> impl Future<Output = Result<()>> + Send;
}

/// Backend chosen at startup.
#[derive(Clone)]
pub enum SheetStore {
    Google(GoogleSheetsClient),
    Memory(MemorySheet),
}

impl SheetStore {
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Google(_) => "google-sheets",
            Self::Memory(_) => "memory",
        }
    }
}

impl SheetBackend for SheetStore {
    async fn read_rows(&self) -> Result<Vec<SheetRow>> {
        match self {
            Self::Google(client) => client.read_rows().await,
            Self::Memory(sheet) => sheet.read_rows().await,
        }
    }

    async fn read_row(&self, row_number: usize) -> Result<Option<SheetRow>> {
        match self {
            Self::Google(client) => client.read_row(row_number).await,
            Self::Memory(sheet) => sheet.read_row(row_number).await,
        }
    }

    async fn write_rows(&self, first_row: usize, rows: Vec<SheetRow>) -> Result<()> {
        match self {
            Self::Google(client) => client.write_rows(first_row, rows).await,
            Self::Memory(sheet) => sheet.write_rows(first_row, rows).await,
        }
    }

    async fn append_row(&self, row: SheetRow) -> Result<()> {
        match self {
            Self::Google(client) => client.append_row(row).await,
            Self::Memory(sheet) => sheet.append_row(row).await,
        }
    }

    async fn delete_row(&self, row_number: usize) -> Result<()> {
        match self {
            Self::Google(client) => client.delete_row(row_number).await,
            Self::Memory(sheet) => sheet.delete_row(row_number).await,
        }
    }

    async fn clear(&self) -> Result<()> {
        match self {
            Self::Google(client) => client.clear().await,
            Self::Memory(sheet) => sheet.clear().await,
        }
    }
}
