//! Tests for pending-set computation.

use super::pending;
use rf_core::MigrationFile;
use std::collections::HashSet;

// ── Helpers ────────────────────────────────────────────────────────────

fn migration(version: i32, name: &str) -> MigrationFile {
    MigrationFile {
        version,
        name: name.to_string(),
        content: format!("-- {name}"),
    }
}

fn versions(batch: &[MigrationFile]) -> Vec<i32> {
    batch.iter().map(|m| m.version).collect()
}

// ── Pending-set computation ────────────────────────────────────────────

#[test]
fn everything_pending_when_ledger_empty() {
    let discovered = vec![
        migration(1, "001_create_games.sql"),
        migration(2, "002_create_players.sql"),
    ];
    let applied = HashSet::new();

    let batch = pending(discovered, &applied);
    assert_eq!(versions(&batch), vec![1, 2]);
}

#[test]
fn applied_versions_are_filtered_out() {
    let discovered = vec![
        migration(1, "001_a.sql"),
        migration(2, "002_b.sql"),
        migration(3, "003_c.sql"),
        migration(4, "004_d.sql"),
    ];
    let applied: HashSet<i32> = [1, 3].into_iter().collect();

    let batch = pending(discovered, &applied);
    assert_eq!(versions(&batch), vec![2, 4]);
}

#[test]
fn discovery_order_is_preserved() {
    let discovered = vec![
        migration(1, "1_a.sql"),
        migration(2, "2_b.sql"),
        migration(10, "10_c.sql"),
    ];
    let applied: HashSet<i32> = [2].into_iter().collect();

    let batch = pending(discovered, &applied);
    assert_eq!(versions(&batch), vec![1, 10]);
}

#[test]
fn nothing_pending_when_ledger_covers_all() {
    let discovered = vec![migration(1, "001_a.sql"), migration(2, "002_b.sql")];
    let applied: HashSet<i32> = [1, 2].into_iter().collect();

    assert!(pending(discovered, &applied).is_empty());
}

#[test]
fn ledger_versions_without_files_are_ignored() {
    // A ledger entry whose file has disappeared is not this layer's problem;
    // the remaining files still resolve against it.
    let discovered = vec![migration(1, "001_a.sql"), migration(2, "002_b.sql")];
    let applied: HashSet<i32> = [1, 99].into_iter().collect();

    let batch = pending(discovered, &applied);
    assert_eq!(versions(&batch), vec![2]);
}
