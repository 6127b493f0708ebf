//! Error types for rf-core

use thiserror::Error;

/// Core error type for Rollforward
#[derive(Error, Debug)]
pub enum CoreError {
    /// E001: Directory entry is not a regular file
    #[error("[E001] Not a regular file: {path}")]
    NotAFile { path: String },

    /// E002: Migration file name missing the .sql suffix
    #[error("[E002] Migration file must end in .sql: {name}")]
    BadExtension { name: String },

    /// E003: Version prefix does not parse as a non-negative integer
    #[error("[E003] Invalid version prefix in '{name}': {reason}")]
    BadVersionPrefix { name: String, reason: String },

    /// E004: Two migration files share a version
    #[error("[E004] Duplicate migration version {version}: '{first}' and '{second}'")]
    DuplicateVersion {
        version: i32,
        first: String,
        second: String,
    },

    /// E005: IO error
    #[error("[E005] IO error: {0}")]
    Io(#[from] std::io::Error),

    /// E006: IO error with file path context
    #[error("[E006] Failed to read '{path}': {source}")]
    IoWithPath {
        path: String,
        source: std::io::Error,
    },
}

/// Result type alias for CoreError
pub type CoreResult<T> = Result<T, CoreError>;
