use std::sync::Arc;

use tokio::sync::Mutex;

use crate::error::{Error, Result};

use super::row::is_blank_row;
use super::{SheetBackend, SheetRow};

/// In-process sheet with the same row semantics as the Google backend.
///
/// Used for local development (`LARDER_STORAGE=memory`) and tests.
#[derive(Clone, Default)]
pub struct MemorySheet {
    grid: Arc<Mutex<Grid>>,
}

#[derive(Default)]
struct Grid {
    rows: Vec<SheetRow>,
    outage: Option<String>,
}

impl Grid {
    fn check_available(&self) -> Result<()> {
        match &self.outage {
            Some(message) => Err(Error::Sheets(message.clone())),
            None => Ok(()),
        }
    }
}

impl MemorySheet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from existing rows, header included if wanted.
    pub fn with_rows(rows: Vec<SheetRow>) -> Self {
        Self {
            grid: Arc::new(Mutex::new(Grid {
                rows,
                outage: None,
            })),
        }
    }

    /// Make every call fail with `message` until cleared with `None`.
    pub async fn set_outage(&self, message: Option<String>) {
        self.grid.lock().await.outage = message;
    }

    /// Copy of the raw rows, for inspection.
    pub async fn snapshot(&self) -> Vec<SheetRow> {
        self.grid.lock().await.rows.clone()
    }
}

impl SheetBackend for MemorySheet {
    async fn read_rows(&self) -> Result<Vec<SheetRow>> {
        let grid = self.grid.lock().await;
        grid.check_available()?;
        Ok(grid.rows.clone())
    }

    async fn read_row(&self, row_number: usize) -> Result<Option<SheetRow>> {
        let grid = self.grid.lock().await;
        grid.check_available()?;
        Ok(row_number
            .checked_sub(1)
            .and_then(|index| grid.rows.get(index))
            .filter(|row| !is_blank_row(row))
            .cloned())
    }

    async fn write_rows(&self, first_row: usize, rows: Vec<SheetRow>) -> Result<()> {
        let start = first_row
            .checked_sub(1)
            .ok_or_else(|| Error::Sheets("row numbers start at 1".to_string()))?;
        let mut grid = self.grid.lock().await;
        grid.check_available()?;

        let end = start + rows.len();
        if grid.rows.len() < end {
            grid.rows.resize_with(end, Vec::new);
        }
        for (offset, row) in rows.into_iter().enumerate() {
            grid.rows[start + offset] = row;
        }
        Ok(())
    }

    async fn append_row(&self, row: SheetRow) -> Result<()> {
        let mut grid = self.grid.lock().await;
        grid.check_available()?;

        while grid.rows.last().is_some_and(|last| is_blank_row(last)) {
            grid.rows.pop();
        }
        grid.rows.push(row);
        Ok(())
    }

    async fn delete_row(&self, row_number: usize) -> Result<()> {
        let mut grid = self.grid.lock().await;
        grid.check_available()?;

        let index = row_number
            .checked_sub(1)
            .filter(|index| *index < grid.rows.len())
            .ok_or_else(|| Error::Sheets(format!("row {row_number} is out of range")))?;
        grid.rows.remove(index);
        Ok(())
    }

    async fn clear(&self) -> Result<()> {
        let mut grid = self.grid.lock().await;
        grid.check_available()?;
        grid.rows.clear();
        Ok(())
    }
}
