//! Error types for rf-db

use thiserror::Error;

/// Database operation errors
#[derive(Error, Debug)]
pub enum DbError {
    /// Connection error (D001)
    #[error("[D001] Database connection failed: {0}")]
    ConnectionError(String),

    /// Ledger read or DDL error (D002)
    #[error("[D002] Migration ledger error: {0}")]
    LedgerError(String),

    /// Migration apply error (D003)
    #[error("[D003] Migration {version} ('{name}') failed: {message}")]
    ApplyError {
        version: i32,
        name: String,
        message: String,
    },

    /// Transaction begin/commit error (D004)
    #[error("[D004] Transaction error: {0}")]
    TransactionError(String),
}

/// Result type alias for DbError
pub type DbResult<T> = Result<T, DbError>;
