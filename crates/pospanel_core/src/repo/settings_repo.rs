//! Key/value settings repository.
//!
//! # Responsibility
//! - Persist small UI preferences (theme) across sessions.
//! - Keep SQL details behind the `SettingsRepository` contract.
//!
//! # Invariants
//! - Keys are trimmed and never empty.
//! - `put_setting` is an upsert; the latest write wins.

use crate::db::migrations::ensure_table;
use crate::db::DbError;
use rusqlite::{params, Connection, OptionalExtension};
use std::error::Error;
use std::fmt::{Display, Formatter};

const SETTINGS_TABLE: &str = "app_settings";

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error for settings persistence.
#[derive(Debug)]
pub enum RepoError {
    InvalidKey(String),
    Db(DbError),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidKey(key) => write!(f, "invalid settings key `{key}`"),
            Self::Db(err) => write!(f, "{err}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::InvalidKey(_) => None,
        }
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Repository interface for string settings.
pub trait SettingsRepository {
    fn get_setting(&self, key: &str) -> RepoResult<Option<String>>;
    fn put_setting(&self, key: &str, value: &str) -> RepoResult<()>;
    /// Returns whether a row was removed.
    fn delete_setting(&self, key: &str) -> RepoResult<bool>;
}

/// SQLite-backed settings repository.
pub struct SqliteSettingsRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteSettingsRepository<'conn> {
    /// Wraps a migrated connection.
    ///
    /// # Errors
    /// Returns `RepoError::Db(DbError::MissingTable)` when the connection
    /// did not come from `db::open_db*` or the table was dropped since.
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        ensure_table(conn, SETTINGS_TABLE)?;
        Ok(Self { conn })
    }
}

impl SettingsRepository for SqliteSettingsRepository<'_> {
    fn get_setting(&self, key: &str) -> RepoResult<Option<String>> {
        let key = normalize_key(key)?;
        let value = self
            .conn
            .query_row(
                "SELECT value FROM app_settings WHERE key = ?1;",
                [key],
                |row| row.get::<_, String>(0),
            )
            .optional()?;
        Ok(value)
    }

    fn put_setting(&self, key: &str, value: &str) -> RepoResult<()> {
        let key = normalize_key(key)?;
        self.conn.execute(
            "INSERT INTO app_settings (key, value, updated_at)
             VALUES (?1, ?2, (strftime('%s', 'now') * 1000))
             ON CONFLICT(key) DO UPDATE SET
                value = excluded.value,
                updated_at = excluded.updated_at;",
            params![key, value],
        )?;
        Ok(())
    }

    fn delete_setting(&self, key: &str) -> RepoResult<bool> {
        let key = normalize_key(key)?;
        let removed = self
            .conn
            .execute("DELETE FROM app_settings WHERE key = ?1;", [key])?;
        Ok(removed > 0)
    }
}

fn normalize_key(key: &str) -> RepoResult<&str> {
    let trimmed = key.trim();
    if trimmed.is_empty() {
        return Err(RepoError::InvalidKey(key.to_string()));
    }
    Ok(trimmed)
}
