use pospanel_core::db::migrations::{apply_migrations, LATEST_SCHEMA_VERSION};
use pospanel_core::db::{open_db, open_db_in_memory, DbError};
use pospanel_core::{RepoError, SettingsRepository, SqliteSettingsRepository};
use rusqlite::Connection;

#[test]
fn open_db_in_memory_applies_all_migrations() {
    let conn = open_db_in_memory().unwrap();

    assert_eq!(schema_version(&conn), LATEST_SCHEMA_VERSION);
    assert_table_exists(&conn, "app_settings");
}

#[test]
fn opening_same_database_twice_keeps_settings() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("pospanel.db");

    {
        let conn = open_db(&path).unwrap();
        let repo = SqliteSettingsRepository::try_new(&conn).unwrap();
        repo.put_setting("pdpp-theme", "dark").unwrap();
    }

    let conn = open_db(&path).unwrap();
    assert_eq!(schema_version(&conn), LATEST_SCHEMA_VERSION);
    let repo = SqliteSettingsRepository::try_new(&conn).unwrap();
    assert_eq!(
        repo.get_setting("pdpp-theme").unwrap().as_deref(),
        Some("dark")
    );
}

#[test]
fn opening_database_with_newer_schema_version_returns_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("future.db");

    let conn = Connection::open(&path).unwrap();
    conn.execute_batch("PRAGMA user_version = 999;").unwrap();
    drop(conn);

    match open_db(&path).unwrap_err() {
        DbError::SchemaTooNew { found, supported } => {
            assert_eq!(found, 999);
            assert_eq!(supported, LATEST_SCHEMA_VERSION);
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn repository_requires_migrated_connection() {
    let conn = Connection::open_in_memory().unwrap();
    match SqliteSettingsRepository::try_new(&conn) {
        Err(RepoError::Db(DbError::MissingTable(table))) => assert_eq!(table, "app_settings"),
        Err(other) => panic!("unexpected error: {other}"),
        Ok(_) => panic!("bare connection must be rejected"),
    }
}

#[test]
fn reopening_database_with_dropped_settings_table_fails() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("damaged.db");

    {
        let conn = open_db(&path).unwrap();
        conn.execute_batch("DROP TABLE app_settings;").unwrap();
    }

    match open_db(&path).unwrap_err() {
        DbError::MissingTable(table) => assert_eq!(table, "app_settings"),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn open_db_creates_missing_parent_directories() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("settings").join("pospanel.db");

    let conn = open_db(&path).unwrap();
    assert!(path.exists());
    assert_eq!(schema_version(&conn), LATEST_SCHEMA_VERSION);
}

#[test]
fn bare_connection_migrates_from_version_zero() {
    let mut conn = Connection::open_in_memory().unwrap();
    assert_eq!(schema_version(&conn), 0);

    assert_eq!(apply_migrations(&mut conn).unwrap(), LATEST_SCHEMA_VERSION);
    assert_table_exists(&conn, "app_settings");
    assert!(SqliteSettingsRepository::try_new(&conn).is_ok());
}

#[test]
fn put_setting_upserts_and_delete_reports_removal() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteSettingsRepository::try_new(&conn).unwrap();

    assert_eq!(repo.get_setting("sidebar").unwrap(), None);
    repo.put_setting("sidebar", "open").unwrap();
    repo.put_setting(" sidebar ", "closed").unwrap();
    assert_eq!(repo.get_setting("sidebar").unwrap().as_deref(), Some("closed"));

    let rows: i64 = conn
        .query_row("SELECT COUNT(*) FROM app_settings;", [], |row| row.get(0))
        .unwrap();
    assert_eq!(rows, 1);

    assert!(repo.delete_setting("sidebar").unwrap());
    assert!(!repo.delete_setting("sidebar").unwrap());
}

#[test]
fn blank_keys_are_rejected() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteSettingsRepository::try_new(&conn).unwrap();

    let err = repo.put_setting("   ", "x").unwrap_err();
    assert!(matches!(err, RepoError::InvalidKey(_)), "{err}");
}

fn schema_version(conn: &Connection) -> u32 {
    conn.query_row("PRAGMA user_version;", [], |row| row.get(0))
        .unwrap()
}

fn assert_table_exists(conn: &Connection, table_name: &str) {
    let exists: i64 = conn
        .query_row(
            "SELECT EXISTS(
                SELECT 1
                FROM sqlite_master
                WHERE type = 'table' AND name = ?1
            );",
            [table_name],
            |row| row.get(0),
        )
        .unwrap();
    assert_eq!(exists, 1, "table {table_name} does not exist");
}
