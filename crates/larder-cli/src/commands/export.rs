use std::path::{Path, PathBuf};

use chrono::Utc;
use larder_core::export::{
    render_items_export, suggested_export_file_name, ExportFormat as RenderFormat,
};
use larder_core::store::{InventoryApi, InventoryStore};

use crate::cli::ExportFormat;
use crate::commands::common::load_items;
use crate::error::CliError;

pub async fn run_export<A: InventoryApi>(
    store: &mut InventoryStore<A>,
    format: ExportFormat,
    output_path: Option<&Path>,
) -> Result<(), CliError> {
    load_items(store).await?;
    let format = render_format(format);
    let rendered = render_items_export(store.items(), format)?;

    if let Some(path) = output_path {
        let path = resolve_output_path(path, format);
        std::fs::write(&path, rendered)?;
        println!("{}", path.display());
    } else {
        println!("{rendered}");
    }

    Ok(())
}

pub const fn render_format(format: ExportFormat) -> RenderFormat {
    match format {
        ExportFormat::Json => RenderFormat::Json,
        ExportFormat::Markdown => RenderFormat::Markdown,
    }
}

/// A directory target gets a timestamped file name inside it.
pub fn resolve_output_path(path: &Path, format: RenderFormat) -> PathBuf {
    if path.is_dir() {
        path.join(suggested_export_file_name(
            format,
            Utc::now().timestamp_millis(),
        ))
    } else {
        path.to_path_buf()
    }
}
