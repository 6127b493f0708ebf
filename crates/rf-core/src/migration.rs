//! Migration file discovery.
//!
//! A migration is a file named `<version>_<description>.sql` whose version is
//! the integer prefix before the first underscore. Discovery reads the whole
//! directory, rejects anything that violates the naming contract, and returns
//! the set sorted by version ascending. Ordering is numeric, not lexical:
//! zero-padded prefixes keep shell listings aligned with apply order, but
//! unpadded prefixes (`2` before `10`) apply correctly too.

use crate::error::{CoreError, CoreResult};
use std::collections::HashMap;
use std::path::Path;

/// One schema-change unit on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MigrationFile {
    /// Version parsed from the filename prefix; unique across the set.
    pub version: i32,
    /// Full file name, recorded in the ledger alongside the version.
    pub name: String,
    /// Raw SQL, executed verbatim.
    pub content: String,
}

impl MigrationFile {
    /// Parse one directory entry. `path` must be a regular `.sql` file with a
    /// non-negative integer version prefix.
    fn from_path(path: &Path) -> CoreResult<Self> {
        if !path.is_file() {
            return Err(CoreError::NotAFile {
                path: path.display().to_string(),
            });
        }

        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();

        if !name.ends_with(".sql") {
            return Err(CoreError::BadExtension { name });
        }

        let prefix = name.split('_').next().unwrap_or("");
        let version: i32 = prefix.parse().map_err(|_| CoreError::BadVersionPrefix {
            name: name.clone(),
            reason: format!("'{prefix}' is not an integer"),
        })?;
        if version < 0 {
            return Err(CoreError::BadVersionPrefix {
                name,
                reason: format!("version {version} is negative"),
            });
        }

        let content = std::fs::read_to_string(path).map_err(|e| CoreError::IoWithPath {
            path: path.display().to_string(),
            source: e,
        })?;

        Ok(Self {
            version,
            name,
            content,
        })
    }
}

/// Discover every migration in `dir`, sorted by version ascending.
///
/// Fails on the first entry that violates the naming contract, and when two
/// files parse to the same version.
pub fn discover(dir: &Path) -> CoreResult<Vec<MigrationFile>> {
    let mut migrations: Vec<MigrationFile> = Vec::new();
    let mut seen: HashMap<i32, String> = HashMap::new();

    for entry in std::fs::read_dir(dir)? {
        let entry = entry?;
        let migration = MigrationFile::from_path(&entry.path())?;

        if let Some(first) = seen.get(&migration.version) {
            return Err(CoreError::DuplicateVersion {
                version: migration.version,
                first: first.clone(),
                second: migration.name,
            });
        }
        seen.insert(migration.version, migration.name.clone());
        migrations.push(migration);
    }

    migrations.sort_by_key(|m| m.version);
    log::debug!(
        "Discovered {} migration(s) in {}",
        migrations.len(),
        dir.display()
    );
    Ok(migrations)
}

#[cfg(test)]
#[path = "migration_test.rs"]
mod tests;
