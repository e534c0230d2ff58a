//! Repository layer abstractions and persistence implementations.
//!
//! # Responsibility
//! - Define data access contracts used by services.
//! - Isolate SQLite query details from service orchestration.
//!
//! # Invariants
//! - Repository writes validate keys before touching storage.

pub mod settings_repo;
