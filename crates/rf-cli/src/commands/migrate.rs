//! Migrate command implementation

use anyhow::{Context, Result};
use rf_core::DbConfig;
use rf_db::RunOutcome;

use crate::cli::Cli;

/// Discover migration files, then hand them to the runner and report the
/// outcome.
pub async fn execute(cli: &Cli) -> Result<()> {
    let config = DbConfig::from_env();
    let dir = rf_core::migrations_dir();

    let discovered = rf_core::discover(&dir)
        .with_context(|| format!("Failed to discover migrations in {}", dir.display()))?;
    println!(
        "Found {} migration file(s) in {}\n",
        discovered.len(),
        dir.display()
    );

    log::debug!(
        "Connecting to {}@{}:{}/{}",
        config.user,
        config.host,
        config.port,
        config.dbname
    );
    let outcome = rf_db::run(&config.url(), discovered, cli.dry_run)
        .await
        .context("Migration run failed")?;

    match outcome {
        RunOutcome::UpToDate { applied } => {
            println!("Database is up to date ({applied} migration(s) applied)");
        }
        RunOutcome::DryRun { pending } => {
            for migration in &pending {
                println!("  - {} (version {})", migration.name, migration.version);
            }
            println!();
            println!("Dry run: {} migration(s) would be applied", pending.len());
        }
        RunOutcome::Applied {
            migrations,
            elapsed,
        } => {
            for migration in &migrations {
                println!("  ✓ {} (version {})", migration.name, migration.version);
            }
            println!();
            println!("Applied {} migration(s)", migrations.len());
            println!("Total time: {}ms", elapsed.as_millis());
        }
    }

    Ok(())
}
