//! Settings schema versioning.
//!
//! # Responsibility
//! - Upgrade a connection from any older `user_version` to the latest schema.
//! - Check that the tables repositories rely on are present.
//!
//! # Invariants
//! - `SCHEMA_STEPS[i]` upgrades version `i` to `i + 1`; steps are append-only.
//! - All pending steps commit together or not at all.

use crate::db::{DbError, DbResult};
use log::info;
use rusqlite::Connection;
use std::cmp::Ordering;

const SCHEMA_STEPS: &[&str] = &[include_str!("0001_app_settings.sql")];

/// Schema version written by this build.
pub const LATEST_SCHEMA_VERSION: u32 = SCHEMA_STEPS.len() as u32;

/// Tables that must exist once a connection is handed out.
pub const REQUIRED_TABLES: &[&str] = &["app_settings"];

/// Reads `PRAGMA user_version`.
pub fn schema_version(conn: &Connection) -> DbResult<u32> {
    Ok(conn.pragma_query_value(None, "user_version", |row| row.get(0))?)
}

/// Runs every pending schema step and returns how many were applied.
///
/// # Errors
/// Returns [`DbError::SchemaTooNew`] when the file was written by a newer
/// build; it is never downgraded.
pub fn apply_migrations(conn: &mut Connection) -> DbResult<u32> {
    let found = schema_version(conn)?;
    match found.cmp(&LATEST_SCHEMA_VERSION) {
        Ordering::Greater => {
            return Err(DbError::SchemaTooNew {
                found,
                supported: LATEST_SCHEMA_VERSION,
            })
        }
        Ordering::Equal => return Ok(0),
        Ordering::Less => {}
    }

    let tx = conn.transaction()?;
    for (index, sql) in SCHEMA_STEPS.iter().enumerate().skip(found as usize) {
        tx.execute_batch(sql)?;
        tx.pragma_update(None, "user_version", index as u32 + 1)?;
    }
    tx.commit()?;

    info!(
        "event=db_migrate module=db status=ok from_version={found} to_version={LATEST_SCHEMA_VERSION}"
    );
    Ok(LATEST_SCHEMA_VERSION - found)
}

/// Fails with [`DbError::MissingTable`] unless `table` exists.
pub fn ensure_table(conn: &Connection, table: &'static str) -> DbResult<()> {
    let exists: bool = conn.query_row(
        "SELECT EXISTS(SELECT 1 FROM sqlite_master WHERE type = 'table' AND name = ?1);",
        [table],
        |row| row.get(0),
    )?;
    if exists {
        Ok(())
    } else {
        Err(DbError::MissingTable(table))
    }
}

/// Checks every entry of [`REQUIRED_TABLES`].
pub fn verify_schema(conn: &Connection) -> DbResult<()> {
    REQUIRED_TABLES
        .iter()
        .copied()
        .try_for_each(|table| ensure_table(conn, table))
}
