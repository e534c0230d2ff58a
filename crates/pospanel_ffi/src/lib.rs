//! Flutter-facing bridge for the PosPanel dashboard core.

pub mod api;
