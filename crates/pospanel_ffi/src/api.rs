//! FFI use-case API for the Flutter dashboard shell.
//!
//! # Responsibility
//! - Expose chart, dashboard and theme use cases to Dart via FRB.
//! - Flatten core errors into simple response envelopes.
//!
//! # Invariants
//! - Exported functions must not panic across the FFI boundary.
//! - Failures are reported through `ok = false` plus a message.

use log::warn;
use pospanel_core::db::open_db;
use pospanel_core::{
    core_version as core_version_inner, geometry_from_values, init_logging as init_logging_inner,
    ping as ping_inner, ChartGeometry, DashboardService, QuickAction, SalesChart,
    SqliteSettingsRepository, SummaryCard, ThemeMode, ThemeService, ThemeServiceError,
    TransactionRow, TrendDirection,
};
use std::path::PathBuf;
use std::sync::OnceLock;

const SETTINGS_DB_FILE_NAME: &str = "pospanel_settings.sqlite3";
const SETTINGS_DB_ENV: &str = "POSPANEL_DB_PATH";
static SETTINGS_DB_PATH: OnceLock<PathBuf> = OnceLock::new();

/// Minimal health-check API for FRB smoke integration.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn ping() -> String {
    ping_inner().to_owned()
}

/// Expose core crate version through FFI.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// Input semantics:
/// - `level`: one of `trace|debug|info|warn|error` (case-insensitive).
/// - `log_dir`: absolute directory path where rolling logs are written.
///
/// # FFI contract
/// - Safe to call repeatedly with the same `level + log_dir`.
/// - Returns empty string on success and error message on failure.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err,
    }
}

/// One normalized chart point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartPointItem {
    pub x: f64,
    pub y: f64,
}

/// Chart geometry envelope.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartResponse {
    pub ok: bool,
    pub points: Vec<ChartPointItem>,
    /// SVG `points` attribute for the line.
    pub polyline: String,
    /// SVG `points` attribute for the area fill.
    pub area: String,
    /// Grid line y positions in viewport units.
    pub grid_ys: Vec<f64>,
    /// X-axis labels; empty for ad-hoc series.
    pub labels: Vec<String>,
    pub message: String,
}

impl ChartResponse {
    fn from_geometry(geometry: ChartGeometry, labels: Vec<String>) -> Self {
        Self {
            ok: true,
            points: geometry
                .points
                .iter()
                .map(|point| ChartPointItem {
                    x: point.x,
                    y: point.y,
                })
                .collect(),
            polyline: geometry.polyline,
            area: geometry.area,
            grid_ys: geometry.grid.iter().map(|line| line.y).collect(),
            labels,
            message: String::new(),
        }
    }

    fn from_sales_chart(chart: SalesChart) -> Self {
        let mut response = Self::from_geometry(chart.geometry, chart.month_labels);
        response.message = chart.year;
        response
    }

    fn failure(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            points: Vec::new(),
            polyline: String::new(),
            area: String::new(),
            grid_ys: Vec::new(),
            labels: Vec::new(),
            message: message.into(),
        }
    }
}

/// Summary card as rendered by the UI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryCardItem {
    pub title: String,
    pub value: String,
    pub trend: Option<String>,
    /// `true` for upward trends; `false` for downward or missing trends.
    pub trend_up: bool,
}

/// Recent transaction row as rendered by the UI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransactionItem {
    pub id: String,
    pub date: String,
    pub customer: String,
    pub items: u32,
    pub total: String,
}

/// Quick action tile as rendered by the UI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuickActionItem {
    pub title: String,
    pub subtitle: String,
}

/// Dashboard snapshot envelope.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardResponse {
    pub ok: bool,
    pub brand_name: String,
    pub brand_initials: String,
    pub brand_tagline: String,
    pub title: String,
    pub subtitle: String,
    pub header_actions: Vec<String>,
    pub cards: Vec<SummaryCardItem>,
    pub sales_chart: ChartResponse,
    pub quick_actions: Vec<QuickActionItem>,
    pub tip: String,
    pub transactions: Vec<TransactionItem>,
    pub footer: String,
    pub message: String,
}

impl DashboardResponse {
    fn failure(message: String) -> Self {
        Self {
            ok: false,
            brand_name: String::new(),
            brand_initials: String::new(),
            brand_tagline: String::new(),
            title: String::new(),
            subtitle: String::new(),
            header_actions: Vec::new(),
            cards: Vec::new(),
            sales_chart: ChartResponse::failure(message.clone()),
            quick_actions: Vec::new(),
            tip: String::new(),
            transactions: Vec::new(),
            footer: String::new(),
            message,
        }
    }
}

/// Theme preference envelope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemeResponse {
    pub ok: bool,
    /// `light` or `dark`; falls back to the system hint on failure.
    pub theme: String,
    pub is_dark: bool,
    pub message: String,
}

impl ThemeResponse {
    fn success(mode: ThemeMode) -> Self {
        Self {
            ok: true,
            theme: mode.as_str().to_string(),
            is_dark: mode.is_dark(),
            message: String::new(),
        }
    }

    fn failure(prefers_dark: bool, message: impl Into<String>) -> Self {
        let fallback = ThemeMode::from_system(prefers_dark);
        Self {
            ok: false,
            theme: fallback.as_str().to_string(),
            is_dark: fallback.is_dark(),
            message: message.into(),
        }
    }
}

/// Normalizes an arbitrary sample series into chart geometry.
///
/// # FFI contract
/// - Sync call, pure computation.
/// - Series shorter than two samples, negative or non-finite samples
///   return `ok = false`.
#[flutter_rust_bridge::frb(sync)]
pub fn chart_normalize(values: Vec<f64>) -> ChartResponse {
    match geometry_from_values(&values) {
        Ok(geometry) => ChartResponse::from_geometry(geometry, Vec::new()),
        Err(err) => ChartResponse::failure(format!("chart_normalize failed: {err}")),
    }
}

/// Returns the monthly sales chart; `message` carries the year label.
#[flutter_rust_bridge::frb(sync)]
pub fn dashboard_sales_chart() -> ChartResponse {
    match DashboardService::default().sales_chart() {
        Ok(chart) => ChartResponse::from_sales_chart(chart),
        Err(err) => ChartResponse::failure(format!("dashboard_sales_chart failed: {err}")),
    }
}

/// Returns the full dashboard view model.
#[flutter_rust_bridge::frb(sync)]
pub fn dashboard_snapshot() -> DashboardResponse {
    match DashboardService::default().snapshot() {
        Ok(snapshot) => DashboardResponse {
            ok: true,
            brand_name: snapshot.brand.name,
            brand_initials: snapshot.brand.initials,
            brand_tagline: snapshot.brand.tagline,
            title: snapshot.title,
            subtitle: snapshot.subtitle,
            header_actions: snapshot.header_actions,
            cards: snapshot.cards.into_iter().map(to_card_item).collect(),
            sales_chart: ChartResponse::from_sales_chart(snapshot.sales_chart),
            quick_actions: snapshot
                .quick_actions
                .into_iter()
                .map(to_quick_action_item)
                .collect(),
            tip: snapshot.tip,
            transactions: snapshot
                .recent_transactions
                .into_iter()
                .map(to_transaction_item)
                .collect(),
            footer: snapshot.footer,
            message: String::new(),
        },
        Err(err) => DashboardResponse::failure(format!("dashboard_snapshot failed: {err}")),
    }
}

/// Resolves the effective theme (stored preference, else system hint).
///
/// # FFI contract
/// - Sync call, DB-backed execution.
/// - On failure returns the system hint with `ok = false`. An unrecognized
///   stored value is such a failure; `theme_toggle`, `theme_set` or
///   `theme_reset` replace it.
#[flutter_rust_bridge::frb(sync)]
pub fn theme_resolve(prefers_dark: bool) -> ThemeResponse {
    theme_call("theme_resolve", prefers_dark, |service| {
        service.resolve(prefers_dark)
    })
}

/// Flips and persists the theme, returning the new effective value.
#[flutter_rust_bridge::frb(sync)]
pub fn theme_toggle(prefers_dark: bool) -> ThemeResponse {
    theme_call("theme_toggle", prefers_dark, |service| {
        service.toggle(prefers_dark)
    })
}

/// Persists an explicit theme choice.
///
/// `dark = true` stores `dark`, otherwise `light`.
#[flutter_rust_bridge::frb(sync)]
pub fn theme_set(dark: bool) -> ThemeResponse {
    let mode = if dark { ThemeMode::Dark } else { ThemeMode::Light };
    theme_call("theme_set", dark, |service| service.set(mode).map(|()| mode))
}

/// Clears the stored preference and returns the system-derived theme.
#[flutter_rust_bridge::frb(sync)]
pub fn theme_reset(prefers_dark: bool) -> ThemeResponse {
    theme_call("theme_reset", prefers_dark, |service| {
        service.reset()?;
        Ok(ThemeMode::from_system(prefers_dark))
    })
}

type SettingsThemeService<'conn> = ThemeService<SqliteSettingsRepository<'conn>>;

fn theme_call(
    event: &str,
    prefers_dark: bool,
    f: impl FnOnce(&SettingsThemeService<'_>) -> Result<ThemeMode, ThemeServiceError>,
) -> ThemeResponse {
    match with_theme_service(|service| f(service).map_err(|err| err.to_string())) {
        Ok(mode) => ThemeResponse::success(mode),
        Err(err) => {
            warn!("event={event} module=ffi status=error error={err}");
            ThemeResponse::failure(prefers_dark, format!("{event} failed: {err}"))
        }
    }
}

fn resolve_settings_db_path() -> PathBuf {
    SETTINGS_DB_PATH
        .get_or_init(|| {
            if let Ok(raw) = std::env::var(SETTINGS_DB_ENV) {
                let trimmed = raw.trim();
                if !trimmed.is_empty() {
                    return PathBuf::from(trimmed);
                }
            }
            std::env::temp_dir().join(SETTINGS_DB_FILE_NAME)
        })
        .clone()
}

fn with_theme_service<T>(
    f: impl FnOnce(&SettingsThemeService<'_>) -> Result<T, String>,
) -> Result<T, String> {
    let conn = open_db(resolve_settings_db_path())
        .map_err(|err| format!("settings DB open failed: {err}"))?;
    let repo = SqliteSettingsRepository::try_new(&conn)
        .map_err(|err| format!("settings repo init failed: {err}"))?;
    f(&ThemeService::new(repo))
}

fn to_card_item(card: SummaryCard) -> SummaryCardItem {
    let trend_up = card.trend_direction() == Some(TrendDirection::Up);
    SummaryCardItem {
        title: card.title,
        value: card.value,
        trend: card.trend,
        trend_up,
    }
}

fn to_quick_action_item(action: QuickAction) -> QuickActionItem {
    QuickActionItem {
        title: action.title,
        subtitle: action.subtitle,
    }
}

fn to_transaction_item(row: TransactionRow) -> TransactionItem {
    TransactionItem {
        id: row.id,
        date: row.date,
        customer: row.customer,
        items: row.items,
        total: row.total,
    }
}
