//! Domain model for the dashboard core.
//!
//! # Responsibility
//! - Define canonical data structures used by chart and dashboard logic.
//! - Keep validation next to the types it protects.
//!
//! # Invariants
//! - Constructors validate; invalid values are never observable.

pub mod dashboard;
pub mod series;
pub mod theme;
