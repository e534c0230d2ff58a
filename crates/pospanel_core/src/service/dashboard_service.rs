//! Dashboard snapshot use-case service.
//!
//! # Responsibility
//! - Assemble the point-of-sale dashboard view model from fixed mock data.
//! - Run the monthly sales series through the chart pipeline.
//!
//! # Invariants
//! - Snapshot content is deterministic; no clock, storage or network access.
//! - Month labels line up one-to-one with sales samples.

use crate::chart::normalize::NormalizeOptions;
use crate::chart::svg::{render_svg, ChartGeometry, ChartStyle};
use crate::chart::{build_geometry, ChartError};
use crate::model::dashboard::{
    Brand, DisplayValidationError, QuickAction, SummaryCard, TransactionRow,
};
use crate::model::series::SampleSeries;
use log::info;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

const DASHBOARD_TITLE: &str = "Dashboard";
const DASHBOARD_SUBTITLE: &str = "Ringkasan aktivitas toko material Anda";
const SALES_YEAR: &str = "2025";
const BRAND: (&str, &str, &str) = ("PD Bagus Putra", "PD", "Sistem Point of Sale");
const HEADER_ACTIONS: [&str; 2] = ["Tambah Barang Baru", "Tambah Transaksi"];
const QUICK_ACTIONS: [(&str, &str); 4] = [
    ("Tambah Barang", "Input SKU baru"),
    ("Tambah Transaksi", "Penjualan kasir"),
    ("Cek Stok", "SKU kritis"),
    ("Laporan", "Ringkasan keuangan"),
];
const TIP_TEXT: &str = "Gunakan mode gelap untuk kenyamanan saat shift malam.";
const FOOTER_TEXT: &str = "© 2025 PD Bagus Putra - Sistem Point of Sale Laravel 10";
const MONTH_LABELS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "Mei", "Jun", "Jul", "Agu", "Sep", "Okt", "Nov", "Des",
];
const MONTHLY_SALES: [f64; 12] = [
    12.0, 18.0, 15.0, 20.0, 28.0, 25.0, 32.0, 30.0, 34.0, 40.0, 38.0, 45.0,
];
const SUMMARY_CARDS: [(&str, &str, &str); 4] = [
    ("Total Barang", "1.248 SKU", "+3.2%"),
    ("Transaksi Hari Ini", "86", "+12%"),
    ("Total Penjualan Bulan Ini", "Rp 128.450.000", "+8.4%"),
    ("Barang Hampir Habis", "24", "-5%"),
];
const RECENT_TRANSACTIONS: [(&str, &str, &str, u32, &str); 4] = [
    ("TRX-1201", "12 Jan 2025", "Umum", 8, "Rp 1.250.000"),
    ("TRX-1200", "12 Jan 2025", "CV Maju", 14, "Rp 3.480.000"),
    ("TRX-1199", "11 Jan 2025", "Umum", 5, "Rp 620.000"),
    ("TRX-1198", "11 Jan 2025", "PT Konstruksi", 22, "Rp 6.240.000"),
];

pub type DashboardResult<T> = Result<T, DashboardError>;

#[derive(Debug, Clone, PartialEq)]
pub enum DashboardError {
    Chart(ChartError),
    Display(DisplayValidationError),
    MonthLabelMismatch { labels: usize, samples: usize },
}

impl Display for DashboardError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Chart(err) => write!(f, "{err}"),
            Self::Display(err) => write!(f, "{err}"),
            Self::MonthLabelMismatch { labels, samples } => write!(
                f,
                "sales chart has {labels} month labels for {samples} samples"
            ),
        }
    }
}

impl Error for DashboardError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Chart(err) => Some(err),
            Self::Display(err) => Some(err),
            Self::MonthLabelMismatch { .. } => None,
        }
    }
}

impl From<ChartError> for DashboardError {
    fn from(value: ChartError) -> Self {
        Self::Chart(value)
    }
}

impl From<DisplayValidationError> for DashboardError {
    fn from(value: DisplayValidationError) -> Self {
        Self::Display(value)
    }
}

/// Monthly sales chart with labels and derived geometry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalesChart {
    pub year: String,
    pub month_labels: Vec<String>,
    pub series: SampleSeries,
    pub geometry: ChartGeometry,
}

/// Full dashboard view model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardSnapshot {
    pub brand: Brand,
    pub title: String,
    pub subtitle: String,
    /// Labels of the buttons next to the page title.
    pub header_actions: Vec<String>,
    pub cards: Vec<SummaryCard>,
    pub sales_chart: SalesChart,
    pub quick_actions: Vec<QuickAction>,
    pub tip: String,
    pub recent_transactions: Vec<TransactionRow>,
    pub footer: String,
}

/// Builds dashboard view models from the bundled mock data.
#[derive(Debug, Clone, Default)]
pub struct DashboardService {
    options: NormalizeOptions,
    style: ChartStyle,
}

impl DashboardService {
    pub fn new(options: NormalizeOptions, style: ChartStyle) -> Self {
        Self { options, style }
    }

    /// Builds the monthly sales chart.
    pub fn sales_chart(&self) -> DashboardResult<SalesChart> {
        let series = SampleSeries::new(MONTHLY_SALES.to_vec()).map_err(ChartError::from)?;
        let month_labels = MONTH_LABELS.iter().map(|m| m.to_string()).collect();
        self.chart_for(SALES_YEAR, month_labels, series)
    }

    /// Builds a labelled chart for an arbitrary series.
    ///
    /// # Errors
    /// Returns [`DashboardError::MonthLabelMismatch`] when label and sample
    /// counts differ.
    pub fn chart_for(
        &self,
        year: impl Into<String>,
        month_labels: Vec<String>,
        series: SampleSeries,
    ) -> DashboardResult<SalesChart> {
        if month_labels.len() != series.len() {
            return Err(DashboardError::MonthLabelMismatch {
                labels: month_labels.len(),
                samples: series.len(),
            });
        }
        let geometry = build_geometry(&series, &self.options, &self.style);
        Ok(SalesChart {
            year: year.into(),
            month_labels,
            series,
            geometry,
        })
    }

    /// Renders the monthly sales chart as a standalone SVG document.
    pub fn sales_chart_svg(&self) -> DashboardResult<String> {
        let chart = self.sales_chart()?;
        Ok(render_svg(&chart.geometry, &self.style))
    }

    /// Builds the complete dashboard snapshot.
    pub fn snapshot(&self) -> DashboardResult<DashboardSnapshot> {
        let (name, initials, tagline) = BRAND;
        let brand = Brand::new(name, initials, tagline)?;

        let cards = SUMMARY_CARDS
            .iter()
            .map(|(title, value, trend)| SummaryCard::new(*title, *value, Some(*trend)))
            .collect::<Result<Vec<_>, _>>()?;

        let recent_transactions = RECENT_TRANSACTIONS
            .iter()
            .map(|(id, date, customer, items, total)| {
                let row = TransactionRow {
                    id: id.to_string(),
                    date: date.to_string(),
                    customer: customer.to_string(),
                    items: *items,
                    total: total.to_string(),
                };
                row.validate().map(|()| row)
            })
            .collect::<Result<Vec<_>, _>>()?;

        let quick_actions = QUICK_ACTIONS
            .iter()
            .map(|(title, subtitle)| QuickAction::new(*title, *subtitle))
            .collect::<Result<Vec<_>, _>>()?;

        let sales_chart = self.sales_chart()?;

        info!(
            "event=dashboard_snapshot module=service status=ok cards={} quick_actions={} transactions={} chart_points={}",
            cards.len(),
            quick_actions.len(),
            recent_transactions.len(),
            sales_chart.geometry.points.len()
        );

        Ok(DashboardSnapshot {
            brand,
            title: DASHBOARD_TITLE.to_string(),
            subtitle: DASHBOARD_SUBTITLE.to_string(),
            header_actions: HEADER_ACTIONS.iter().map(|a| a.to_string()).collect(),
            cards,
            sales_chart,
            quick_actions,
            tip: TIP_TEXT.to_string(),
            recent_transactions,
            footer: FOOTER_TEXT.to_string(),
        })
    }
}
