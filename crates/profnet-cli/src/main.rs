//! ProfNet terminal client.
//!
//! Connects to the backing store once at startup (fatal on failure), then
//! drives a numeric-menu REPL. Per-operation storage errors are printed
//! and the session continues.

mod app;
mod console;
mod menus;

use anyhow::Result;
use clap::Parser;
use colored::Colorize;
use console::{Console, InputClosed};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "profnet", about = "Terminal client for a professional social network")]
struct Cli {
    /// Path to the SQLite database (default: ~/.profnet/profnet.db)
    #[arg(long)]
    database: Option<PathBuf>,

    /// Log filter, e.g. "info" or "profnet_core=debug"
    #[arg(long, default_value = "warn")]
    log: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&cli.log))
        .init();

    let database = match cli.database {
        Some(path) => path,
        None => profnet_infrastructure::default_database_path()?,
    };

    println!("Connecting to database...");
    // The only fatal storage error: without a store there is no session.
    let pool = profnet_infrastructure::connect(&database).await?;
    println!("Done\n");

    let app = app::App::new(pool);
    let mut console = Console::new()?;

    println!("{}", "=== ProfNet ===".bright_magenta().bold());

    match menus::entry::run(&app, &mut console).await {
        Ok(()) => {}
        Err(err) if err.is::<InputClosed>() => {}
        Err(err) => return Err(err),
    }

    println!("{}", "Bye!".bright_green());
    Ok(())
}
