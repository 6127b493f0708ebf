//! Migration runner: pending-set computation and atomic batch application.
//!
//! One invocation is one pass through discover → resolve → act. The apply
//! phase opens a single transaction over the whole pending batch and commits
//! once after the last migration; a failure anywhere in the batch rolls back
//! every migration in it, so a re-run always starts from the pre-run state
//! and recomputes the same pending set.

use crate::connection::connect;
use crate::error::{DbError, DbResult};
use crate::ledger;
use rf_core::MigrationFile;
use sqlx::{Connection, PgConnection, Postgres, Transaction};
use std::collections::HashSet;
use std::time::{Duration, Instant};

/// A migration selected for application, as reported to the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingMigration {
    pub version: i32,
    pub name: String,
}

/// What a run did (or, for a dry run, would have done).
#[derive(Debug)]
pub enum RunOutcome {
    /// Nothing pending; the ledger already covers every discovered file.
    UpToDate { applied: usize },
    /// Dry run: the batch a real run would apply. Ledger and schema untouched.
    DryRun { pending: Vec<PendingMigration> },
    /// The whole pending batch was applied and committed.
    Applied {
        migrations: Vec<PendingMigration>,
        elapsed: Duration,
    },
}

/// Discovered migrations minus the applied set, in discovery (version) order.
///
/// Pure set difference; no I/O.
pub fn pending(discovered: Vec<MigrationFile>, applied: &HashSet<i32>) -> Vec<MigrationFile> {
    discovered
        .into_iter()
        .filter(|m| !applied.contains(&m.version))
        .collect()
}

/// Run the migration engine against the database at `url`.
///
/// Connects, ensures the ledger exists, resolves the applied set, and applies
/// (or reports) the pending batch. The connection is closed gracefully on the
/// success path; on failure it is dropped after the transaction has rolled
/// back.
pub async fn run(url: &str, discovered: Vec<MigrationFile>, dry_run: bool) -> DbResult<RunOutcome> {
    let mut conn = connect(url).await?;
    let outcome = drive(&mut conn, discovered, dry_run).await;
    if outcome.is_ok() {
        conn.close()
            .await
            .map_err(|e| DbError::ConnectionError(format!("close failed: {e}")))?;
    }
    outcome
}

async fn drive(
    conn: &mut PgConnection,
    discovered: Vec<MigrationFile>,
    dry_run: bool,
) -> DbResult<RunOutcome> {
    ledger::ensure_table(&mut *conn).await?;
    let applied = ledger::applied_versions(&mut *conn).await?;

    let batch = pending(discovered, &applied);
    if batch.is_empty() {
        return Ok(RunOutcome::UpToDate {
            applied: applied.len(),
        });
    }

    if dry_run {
        return Ok(RunOutcome::DryRun {
            pending: summarize(&batch),
        });
    }

    let started = Instant::now();
    let mut tx = conn
        .begin()
        .await
        .map_err(|e| DbError::TransactionError(format!("begin failed: {e}")))?;

    if let Err(e) = apply_batch(&mut tx, &batch).await {
        // Surface the original failure even if the rollback itself fails.
        if let Err(rollback_err) = tx.rollback().await {
            log::warn!("rollback after failed migration also failed: {rollback_err}");
        }
        return Err(e);
    }

    tx.commit()
        .await
        .map_err(|e| DbError::TransactionError(format!("commit failed: {e}")))?;

    Ok(RunOutcome::Applied {
        migrations: summarize(&batch),
        elapsed: started.elapsed(),
    })
}

/// Execute and record every migration in the batch, in order, on the open
/// transaction.
async fn apply_batch(tx: &mut Transaction<'_, Postgres>, batch: &[MigrationFile]) -> DbResult<()> {
    for migration in batch {
        log::debug!(
            "Applying migration {} ({})",
            migration.version,
            migration.name
        );

        sqlx::raw_sql(&migration.content)
            .execute(&mut **tx)
            .await
            .map_err(|e| DbError::ApplyError {
                version: migration.version,
                name: migration.name.clone(),
                message: e.to_string(),
            })?;

        ledger::record(&mut **tx, migration.version, &migration.name).await?;
    }
    Ok(())
}

fn summarize(batch: &[MigrationFile]) -> Vec<PendingMigration> {
    batch
        .iter()
        .map(|m| PendingMigration {
            version: m.version,
            name: m.name.clone(),
        })
        .collect()
}

#[cfg(test)]
#[path = "runner_test.rs"]
mod tests;
