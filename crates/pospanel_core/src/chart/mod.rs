//! Line chart pipeline: sample normalization and SVG geometry.
//!
//! # Responsibility
//! - Normalize sample series into the fixed 100x100 viewport.
//! - Derive line/area/grid geometry for UI rendering.
//!
//! # Invariants
//! - Chart computation is pure; no I/O beyond diagnostic logging.
//! - Degenerate input is reported as a typed error, never as NaN output.

use crate::model::series::{SampleSeries, SeriesValidationError};
use log::debug;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod normalize;
pub mod svg;

use normalize::{normalize, NormalizeOptions};
use svg::{ChartGeometry, ChartStyle};

pub type ChartResult<T> = Result<T, ChartError>;

/// Chart-layer error for invalid samples and options.
#[derive(Debug, Clone, PartialEq)]
pub enum ChartError {
    Series(SeriesValidationError),
    /// Headroom multiplier must be finite and `>= 1.0`.
    InvalidHeadroom(f64),
}

impl Display for ChartError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Series(err) => write!(f, "{err}"),
            Self::InvalidHeadroom(value) => {
                write!(f, "headroom must be a finite factor >= 1.0, got {value}")
            }
        }
    }
}

impl Error for ChartError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Series(err) => Some(err),
            Self::InvalidHeadroom(_) => None,
        }
    }
}

impl From<SeriesValidationError> for ChartError {
    fn from(value: SeriesValidationError) -> Self {
        Self::Series(value)
    }
}

/// Normalizes a series and derives its full chart geometry.
pub fn build_geometry(
    series: &SampleSeries,
    options: &NormalizeOptions,
    style: &ChartStyle,
) -> ChartGeometry {
    let points = normalize(series, options);
    debug!(
        "event=chart_geometry module=chart status=ok points={} headroom={}",
        points.len(),
        options.headroom()
    );
    ChartGeometry::from_points(points, style.grid_lines)
}

/// Validates raw samples and renders them with default options and style.
pub fn geometry_from_values(values: &[f64]) -> ChartResult<ChartGeometry> {
    let series = SampleSeries::new(values.to_vec())?;
    Ok(build_geometry(
        &series,
        &NormalizeOptions::default(),
        &ChartStyle::default(),
    ))
}
