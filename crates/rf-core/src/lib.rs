//! rf-core - Core library for Rollforward
//!
//! This crate provides connection configuration and migration-file discovery.
//! It has no database dependencies; everything that touches PostgreSQL lives
//! in `rf-db`.

pub mod config;
pub mod error;
pub mod migration;

pub use config::{migrations_dir, DbConfig};
pub use error::{CoreError, CoreResult};
pub use migration::{discover, MigrationFile};
