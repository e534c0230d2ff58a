//! SQLite storage for persisted dashboard preferences.
//!
//! # Responsibility
//! - Own the settings database: file location, connection setup and schema.
//! - Report every storage fault through one [`DbError`] type.
//!
//! # Invariants
//! - Connections from [`open_db`] / [`open_db_in_memory`] sit at
//!   [`migrations::LATEST_SCHEMA_VERSION`] and hold every table listed in
//!   [`migrations::REQUIRED_TABLES`].

pub mod migrations;
mod open;

pub use open::{open_db, open_db_in_memory, DbError, DbResult};
