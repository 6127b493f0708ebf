//! PostgreSQL connection acquisition.

use crate::error::{DbError, DbResult};
use sqlx::{Connection, PgConnection};

/// Open a single connection to `url`.
///
/// The runner holds exactly one connection per invocation; there is no pool
/// and no sharing across concurrent runners.
pub async fn connect(url: &str) -> DbResult<PgConnection> {
    PgConnection::connect(url)
        .await
        .map_err(|e| DbError::ConnectionError(e.to_string()))
}
