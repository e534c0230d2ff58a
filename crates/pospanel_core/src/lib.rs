//! Core domain logic for the PosPanel point-of-sale dashboard.
//! This crate is the single source of truth for chart geometry and UI preferences.

pub mod chart;
pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use chart::normalize::{
    normalize, normalize_values, NormalizeOptions, PlotPoint, DEFAULT_HEADROOM, VIEWPORT_SIZE,
};
pub use chart::svg::{render_svg, ChartGeometry, ChartStyle, GridLine};
pub use chart::{build_geometry, geometry_from_values, ChartError, ChartResult};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::dashboard::{
    Brand, DisplayValidationError, QuickAction, SummaryCard, TransactionRow, TrendDirection,
};
pub use model::series::{SampleSeries, SeriesValidationError, MIN_SERIES_LEN};
pub use model::theme::ThemeMode;
pub use repo::settings_repo::{RepoError, RepoResult, SettingsRepository, SqliteSettingsRepository};
pub use service::dashboard_service::{
    DashboardError, DashboardResult, DashboardService, DashboardSnapshot, SalesChart,
};
pub use service::theme_service::{ThemeResult, ThemeService, ThemeServiceError, THEME_SETTING_KEY};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
