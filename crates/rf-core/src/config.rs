//! Connection configuration resolved from the environment.

use std::path::PathBuf;

/// Directory scanned for migration files when `MIGRATIONS_DIR` is unset.
const DEFAULT_MIGRATIONS_DIR: &str = "schema";

/// PostgreSQL connection settings, one field per `DB_*` environment variable.
///
/// Built once at startup via [`DbConfig::from_env`] and threaded explicitly
/// from there; no component re-reads the environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DbConfig {
    pub host: String,
    /// Kept as a string and handed to the driver unparsed; a malformed port
    /// surfaces as a connection error, not a config error.
    pub port: String,
    pub user: String,
    pub password: String,
    pub dbname: String,
}

impl DbConfig {
    /// Read `DB_HOST`, `DB_PORT`, `DB_USER`, `DB_PASSWORD`, and `DB_NAME`,
    /// falling back to the development defaults for any that are unset.
    pub fn from_env() -> Self {
        Self {
            host: env_or("DB_HOST", "localhost"),
            port: env_or("DB_PORT", "5432"),
            user: env_or("DB_USER", "joe"),
            password: env_or("DB_PASSWORD", "12345678"),
            dbname: env_or("DB_NAME", "road_n_roll"),
        }
    }

    /// Compose the connection URL.
    pub fn url(&self) -> String {
        format!(
            "postgresql://{}:{}@{}:{}/{}",
            self.user, self.password, self.host, self.port, self.dbname
        )
    }
}

/// Resolve the migrations directory from `MIGRATIONS_DIR`, relative to the
/// working directory unless absolute.
pub fn migrations_dir() -> PathBuf {
    PathBuf::from(env_or("MIGRATIONS_DIR", DEFAULT_MIGRATIONS_DIR))
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
