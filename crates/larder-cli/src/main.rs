//! Larder CLI - Command-line client for the inventory API
//!
//! Lists, edits, and reports on restaurant stock through the REST API.

mod cli;
mod commands;
mod error;


use clap::{CommandFactory, Parser};

use crate::cli::{Cli, Commands};
use crate::commands::add::run_add;
use crate::commands::categories::run_categories;
use crate::commands::common::{open_store, resolve_api_url};
use crate::commands::completions::run_completions;
use crate::commands::delete::run_delete;
use crate::commands::edit::run_edit;
use crate::commands::export::run_export;
use crate::commands::list::{run_list, ListOptions};
use crate::commands::seed::run_seed;
use crate::commands::show::run_show;
use crate::commands::summary::run_summary;
use crate::error::CliError;

#[tokio::main]
async fn main() {
    if let Err(error) = run().await {
        eprintln!("Error: {error}");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), CliError> {
    dotenvy::dotenv().ok();

    let mut filter = tracing_subscriber::EnvFilter::from_default_env();
    if let Ok(directive) = "larder=info".parse() {
        filter = filter.add_directive(directive);
    }
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let Some(command) = cli.command else {
        Cli::command().print_help()?;
        println!();
        return Ok(());
    };

    let api_url = resolve_api_url(cli.api_url);
    match command {
        Commands::List {
            search,
            category,
            sort,
            low_stock,
            page,
            per_page,
            json,
        } => {
            let options = ListOptions {
                search,
                category,
                sort,
                low_stock,
                page,
                per_page,
                json,
            };
            run_list(&mut open_store(&api_url)?, options).await
        }
        Commands::Show { id, json } => run_show(&open_store(&api_url)?, &id, json).await,
        Commands::Add(args) => run_add(&mut open_store(&api_url)?, args).await,
        Commands::Edit { id, fields } => run_edit(&mut open_store(&api_url)?, &id, fields).await,
        Commands::Delete { id } => run_delete(&mut open_store(&api_url)?, &id).await,
        Commands::Summary { json } => run_summary(&mut open_store(&api_url)?, json).await,
        Commands::Categories { catalog } => {
            run_categories(&mut open_store(&api_url)?, catalog).await
        }
        Commands::Export { format, output } => {
            run_export(&mut open_store(&api_url)?, format, output.as_deref()).await
        }
        Commands::Seed { yes } => run_seed(yes).await,
        Commands::Completions { shell, output } => run_completions(shell, output.as_deref()),
    }
}
