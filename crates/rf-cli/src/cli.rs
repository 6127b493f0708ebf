//! CLI argument definitions using clap derive API

use clap::Parser;

/// Rollforward - applies versioned SQL migrations to PostgreSQL
#[derive(Parser, Debug)]
#[command(name = "rf")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Simulate the migration without applying changes
    #[arg(long)]
    pub dry_run: bool,
}

#[cfg(test)]
#[path = "cli_test.rs"]
mod tests;
