//! Core use-case services.
//!
//! # Responsibility
//! - Compose model, chart and repository layers into UI-facing use cases.
//! - Keep FFI/CLI layers decoupled from storage and geometry details.

pub mod dashboard_service;
pub mod theme_service;
