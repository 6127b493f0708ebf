//! The `schema_migrations` ledger.
//!
//! One row per applied migration. `version` is the primary key, which makes
//! application at-most-once per version and is the last line of defense when
//! two runners race: the loser's insert fails and its whole batch rolls back.
//!
//! Every function takes any PostgreSQL executor, so the same code runs on a
//! bare connection (resolve phase) and inside the batch transaction (apply
//! phase).

use crate::error::{DbError, DbResult};
use sqlx::PgExecutor;
use std::collections::HashSet;

/// Ledger table layout. `migrated_at` is filled in by the database at insert
/// time and never read back by this program.
const CREATE_LEDGER: &str = "CREATE TABLE IF NOT EXISTS schema_migrations (
    version     INTEGER PRIMARY KEY,
    name        TEXT NOT NULL,
    migrated_at TIMESTAMP NOT NULL DEFAULT NOW()
)";

/// Create the ledger table if absent. Idempotent; called on every run.
pub async fn ensure_table(executor: impl PgExecutor<'_>) -> DbResult<()> {
    sqlx::query(CREATE_LEDGER)
        .execute(executor)
        .await
        .map_err(|e| DbError::LedgerError(format!("failed to create schema_migrations: {e}")))?;
    Ok(())
}

/// Every version currently recorded in the ledger.
pub async fn applied_versions(executor: impl PgExecutor<'_>) -> DbResult<HashSet<i32>> {
    let versions: Vec<i32> = sqlx::query_scalar("SELECT version FROM schema_migrations")
        .fetch_all(executor)
        .await
        .map_err(|e| DbError::LedgerError(format!("failed to read applied versions: {e}")))?;
    Ok(versions.into_iter().collect())
}

/// Record one applied migration. The runner calls this inside the batch
/// transaction so the ledger row commits or rolls back with the migration.
pub async fn record(executor: impl PgExecutor<'_>, version: i32, name: &str) -> DbResult<()> {
    sqlx::query("INSERT INTO schema_migrations (version, name) VALUES ($1, $2)")
        .bind(version)
        .bind(name)
        .execute(executor)
        .await
        .map_err(|e| DbError::ApplyError {
            version,
            name: name.to_string(),
            message: format!("ledger insert failed: {e}"),
        })?;
    Ok(())
}
