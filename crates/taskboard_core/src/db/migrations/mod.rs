//! Schema versions for the board database.
//!
//! The schema is tiny: one `kv_entries` table holding a JSON blob per board
//! collection. New steps are appended to `SCHEMA_STEPS`; the database records
//! how far it got in `PRAGMA user_version`.
//!
//! # Invariants
//! - Step versions start at 1 and increase by exactly 1.
//! - Pending steps and the version bump commit together or not at all.
//! - A database stamped with a newer version than this build knows is left
//!   untouched and reported as unsupported.

use crate::db::{DbError, DbResult};
use log::info;
use rusqlite::Connection;

struct SchemaStep {
    version: u32,
    name: &'static str,
    sql: &'static str,
}

const SCHEMA_STEPS: &[SchemaStep] = &[SchemaStep {
    version: 1,
    name: "kv_entries",
    sql: include_str!("0001_kv_entries.sql"),
}];

/// Newest schema version this build can create and read.
pub fn latest_version() -> u32 {
    SCHEMA_STEPS.last().map_or(0, |step| step.version)
}

/// Brings `conn` up to `latest_version()`.
pub fn apply_migrations(conn: &mut Connection) -> DbResult<()> {
    let stored: u32 = conn.pragma_query_value(None, "user_version", |row| row.get(0))?;
    let latest = latest_version();

    if stored > latest {
        return Err(DbError::UnsupportedSchemaVersion {
            db_version: stored,
            latest_supported: latest,
        });
    }

    let pending: Vec<&SchemaStep> = SCHEMA_STEPS
        .iter()
        .filter(|step| step.version > stored)
        .collect();
    if pending.is_empty() {
        return Ok(());
    }

    let tx = conn.transaction()?;
    for step in &pending {
        tx.execute_batch(step.sql)?;
        tx.pragma_update(None, "user_version", step.version)?;
        info!(
            "event=db_migrate module=db status=ok version={} step={}",
            step.version, step.name
        );
    }
    tx.commit()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{latest_version, SCHEMA_STEPS};

    #[test]
    fn step_versions_are_contiguous_from_one() {
        for (index, step) in SCHEMA_STEPS.iter().enumerate() {
            assert_eq!(step.version as usize, index + 1, "{}", step.name);
        }
        assert_eq!(latest_version() as usize, SCHEMA_STEPS.len());
    }
}
