//! Dashboard display records.
//!
//! # Responsibility
//! - Define the summary card, quick action, brand and recent transaction
//!   shapes shown by the UI.
//! - Validate display literals before they reach a snapshot.
//!
//! # Invariants
//! - Trend labels are signed percentages such as `+3.2%` or `-5%`.
//! - Transaction IDs, quick action titles and brand names are never blank.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

static TREND_LABEL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[+-]\d+(\.\d+)?%$").expect("valid trend regex"));

/// Validation error for dashboard display records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DisplayValidationError {
    EmptyCardTitle,
    InvalidTrend(String),
    EmptyTransactionId,
    EmptyActionTitle,
    EmptyBrandName,
}

impl Display for DisplayValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyCardTitle => write!(f, "summary card title cannot be empty"),
            Self::InvalidTrend(label) => write!(
                f,
                "trend label `{label}` must be a signed percentage like `+3.2%`"
            ),
            Self::EmptyTransactionId => write!(f, "transaction id cannot be empty"),
            Self::EmptyActionTitle => write!(f, "quick action title cannot be empty"),
            Self::EmptyBrandName => write!(f, "brand name cannot be empty"),
        }
    }
}

impl Error for DisplayValidationError {}

/// Direction of a card trend, used by the UI to pick a color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrendDirection {
    Up,
    Down,
}

/// One headline figure on the dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryCard {
    pub title: String,
    /// Preformatted display value, e.g. `Rp 128.450.000`.
    pub value: String,
    pub trend: Option<String>,
}

impl SummaryCard {
    pub fn new(
        title: impl Into<String>,
        value: impl Into<String>,
        trend: Option<&str>,
    ) -> Result<Self, DisplayValidationError> {
        let card = Self {
            title: title.into(),
            value: value.into(),
            trend: trend.map(str::to_string),
        };
        card.validate()?;
        Ok(card)
    }

    pub fn validate(&self) -> Result<(), DisplayValidationError> {
        if self.title.trim().is_empty() {
            return Err(DisplayValidationError::EmptyCardTitle);
        }
        if let Some(trend) = &self.trend {
            if !TREND_LABEL_RE.is_match(trend) {
                return Err(DisplayValidationError::InvalidTrend(trend.clone()));
            }
        }
        Ok(())
    }

    /// Only a leading `+` counts as upward; everything else renders as down.
    pub fn trend_direction(&self) -> Option<TrendDirection> {
        self.trend.as_deref().map(|trend| {
            if trend.starts_with('+') {
                TrendDirection::Up
            } else {
                TrendDirection::Down
            }
        })
    }
}

/// One row of the recent transactions table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionRow {
    pub id: String,
    pub date: String,
    pub customer: String,
    pub items: u32,
    /// Preformatted currency total.
    pub total: String,
}

impl TransactionRow {
    pub fn validate(&self) -> Result<(), DisplayValidationError> {
        if self.id.trim().is_empty() {
            return Err(DisplayValidationError::EmptyTransactionId);
        }
        Ok(())
    }
}

/// Shortcut tile in the quick actions panel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuickAction {
    pub title: String,
    pub subtitle: String,
}

impl QuickAction {
    pub fn new(
        title: impl Into<String>,
        subtitle: impl Into<String>,
    ) -> Result<Self, DisplayValidationError> {
        let action = Self {
            title: title.into(),
            subtitle: subtitle.into(),
        };
        if action.title.trim().is_empty() {
            return Err(DisplayValidationError::EmptyActionTitle);
        }
        Ok(action)
    }
}

/// Store identity shown in the topbar and footer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Brand {
    pub name: String,
    /// Badge text, e.g. `PD`.
    pub initials: String,
    pub tagline: String,
}

impl Brand {
    pub fn new(
        name: impl Into<String>,
        initials: impl Into<String>,
        tagline: impl Into<String>,
    ) -> Result<Self, DisplayValidationError> {
        let brand = Self {
            name: name.into(),
            initials: initials.into(),
            tagline: tagline.into(),
        };
        if brand.name.trim().is_empty() {
            return Err(DisplayValidationError::EmptyBrandName);
        }
        Ok(brand)
    }
}
