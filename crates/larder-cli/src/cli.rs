use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use larder_core::query::DEFAULT_PER_PAGE;

#[derive(Parser)]
#[command(name = "larder")]
#[command(about = "Track restaurant stock from the command line")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Inventory API base URL (defaults to LARDER_API_URL, then http://127.0.0.1:8080)
    #[arg(long, global = true, value_name = "URL")]
    pub api_url: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List items
    #[command(alias = "ls")]
    List {
        /// Match name, category, or supplier (case-insensitive)
        #[arg(short, long)]
        search: Option<String>,
        /// Only items in this category
        #[arg(short, long)]
        category: Option<String>,
        /// Sort order
        #[arg(long, value_enum, default_value_t = SortArg::Name)]
        sort: SortArg,
        /// Only items at or below their minimum stock
        #[arg(long)]
        low_stock: bool,
        /// Page number, starting at 1
        #[arg(short, long, default_value = "1")]
        page: usize,
        /// Items per page
        #[arg(long, default_value_t = DEFAULT_PER_PAGE)]
        per_page: usize,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show one item
    Show {
        /// Item ID
        id: String,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Add a new item
    #[command(alias = "new")]
    Add(AddArgs),
    /// Change fields of an existing item
    Edit {
        /// Item ID
        id: String,
        #[command(flatten)]
        fields: EditArgs,
    },
    /// Delete an item
    #[command(alias = "rm")]
    Delete {
        /// Item ID
        id: String,
    },
    /// Show stock totals and low-stock items
    Summary {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// List categories in use
    Categories {
        /// Print the standard category and unit lists instead
        #[arg(long)]
        catalog: bool,
    },
    /// Export all items
    Export {
        /// Export format
        #[arg(long, value_enum, default_value_t = ExportFormat::Json)]
        format: ExportFormat,
        /// Output file or directory (stdout when omitted)
        #[arg(short, long, value_name = "PATH")]
        output: Option<PathBuf>,
    },
    /// Replace the spreadsheet contents with the bundled sample items
    Seed {
        /// Confirm that existing rows will be erased
        #[arg(long)]
        yes: bool,
    },
    /// Generate shell completion scripts
    Completions {
        /// Target shell
        #[arg(value_enum)]
        shell: CompletionShell,
        /// Optional output path (stdout when omitted)
        #[arg(short, long, value_name = "PATH")]
        output: Option<PathBuf>,
    },
}

#[derive(Args)]
pub struct AddArgs {
    #[arg(long)]
    pub name: String,
    #[arg(long)]
    pub category: String,
    #[arg(long)]
    pub quantity: f64,
    #[arg(long)]
    pub unit: String,
    /// Quantity at or below which the item counts as low stock
    #[arg(long)]
    pub min_stock: f64,
    /// Price per unit
    #[arg(long)]
    pub price: f64,
    #[arg(long)]
    pub supplier: Option<String>,
}

#[derive(Args, Default)]
pub struct EditArgs {
    #[arg(long)]
    pub name: Option<String>,
    #[arg(long)]
    pub category: Option<String>,
    #[arg(long)]
    pub quantity: Option<f64>,
    #[arg(long)]
    pub unit: Option<String>,
    #[arg(long)]
    pub min_stock: Option<f64>,
    #[arg(long)]
    pub price: Option<f64>,
    /// Pass an empty string to clear the supplier
    #[arg(long)]
    pub supplier: Option<String>,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum SortArg {
    Name,
    Date,
    LowStock,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum ExportFormat {
    Json,
    Markdown,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum CompletionShell {
    Bash,
    Zsh,
    Fish,
}
