//! rf-db - Database layer for Rollforward
//!
//! PostgreSQL connection handling, the `schema_migrations` ledger, and the
//! transactional migration runner.

pub mod connection;
pub mod error;
pub mod ledger;
pub mod runner;

pub use connection::connect;
pub use error::{DbError, DbResult};
pub use runner::{run, PendingMigration, RunOutcome};
