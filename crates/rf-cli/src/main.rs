//! Rollforward CLI - applies versioned SQL migrations to PostgreSQL

use anyhow::Result;
use clap::Parser;

mod cli;
mod commands;

use cli::Cli;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    commands::migrate::execute(&cli).await
}
