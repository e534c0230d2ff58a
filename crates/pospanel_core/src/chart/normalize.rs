//! Series normalization into the 100x100 chart viewport.
//!
//! # Responsibility
//! - Map sample series onto normalized plot points.
//! - Keep the series peak below the top edge via a headroom factor.
//!
//! # Invariants
//! - Output length equals input length.
//! - First point has `x = 0`, last point has `x = 100`.
//! - For non-negative samples every `y` lies in `[0, 100]`; `y = 0` is the top.
//! - An all-zero series renders as a flat line on the bottom edge (`y = 100`).

use crate::chart::{ChartError, ChartResult};
use crate::model::series::SampleSeries;
use log::debug;
use serde::{Deserialize, Serialize};

/// Edge length of the square normalized viewport.
pub const VIEWPORT_SIZE: f64 = 100.0;

/// Multiplier applied to the series maximum before scaling (20% headroom).
pub const DEFAULT_HEADROOM: f64 = 1.2;

/// One point in normalized viewport coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlotPoint {
    pub x: f64,
    pub y: f64,
}

/// Tunables for [`normalize`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NormalizeOptions {
    headroom: f64,
}

impl NormalizeOptions {
    /// Creates options with a custom headroom multiplier.
    ///
    /// # Errors
    /// Returns [`ChartError::InvalidHeadroom`] when `headroom` is not finite or
    /// below `1.0`; smaller factors would push the peak past the top edge.
    pub fn with_headroom(headroom: f64) -> ChartResult<Self> {
        if !headroom.is_finite() || headroom < 1.0 {
            return Err(ChartError::InvalidHeadroom(headroom));
        }
        Ok(Self { headroom })
    }

    pub fn headroom(&self) -> f64 {
        self.headroom
    }
}

impl Default for NormalizeOptions {
    fn default() -> Self {
        Self {
            headroom: DEFAULT_HEADROOM,
        }
    }
}

/// Normalizes a validated series into viewport points.
///
/// Each sample is divided by the series maximum before the headroom is
/// applied, so the peak lands at `100 - 100 / headroom` for any finite
/// magnitude, from subnormal to `f64::MAX`.
pub fn normalize(series: &SampleSeries, options: &NormalizeOptions) -> Vec<PlotPoint> {
    let values = series.values();
    // Validated series hold at least two samples, so this is never zero.
    let last_index = (values.len() - 1) as f64;
    let flat = series.is_all_zero();
    let max = series.max();

    if flat {
        debug!(
            "event=chart_normalize module=chart status=flat_fallback len={}",
            values.len()
        );
    }

    values
        .iter()
        .enumerate()
        .map(|(index, value)| {
            let x = (index as f64 / last_index) * VIEWPORT_SIZE;
            let y = if flat {
                VIEWPORT_SIZE
            } else {
                let ratio = value / max;
                VIEWPORT_SIZE - (ratio / options.headroom) * VIEWPORT_SIZE
            };
            PlotPoint { x, y }
        })
        .collect()
}

/// Validates raw samples and normalizes them with default options.
///
/// # Errors
/// Returns [`ChartError::Series`] when the samples fail series validation.
pub fn normalize_values(values: &[f64]) -> ChartResult<Vec<PlotPoint>> {
    let series = SampleSeries::new(values.to_vec())?;
    Ok(normalize(&series, &NormalizeOptions::default()))
}

#[cfg(test)]
mod tests {
    use super::{normalize, normalize_values, NormalizeOptions, PlotPoint};
    use crate::chart::ChartError;
    use crate::model::series::{SampleSeries, SeriesValidationError};

    const EPS: f64 = 1e-9;

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-2,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn two_point_series_matches_reference_values() {
        let points = normalize_values(&[10.0, 20.0]).unwrap();
        assert_eq!(points.len(), 2);
        assert_eq!(points[0].x, 0.0);
        assert_close(points[0].y, 58.33);
        assert_eq!(points[1].x, 100.0);
        assert_close(points[1].y, 16.67);
    }

    #[test]
    fn single_sample_is_degenerate() {
        let err = normalize_values(&[5.0]).unwrap_err();
        match err {
            ChartError::Series(SeriesValidationError::DegenerateSeries { len }) => {
                assert_eq!(len, 1)
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn all_zero_series_is_flat_on_bottom_edge() {
        let points = normalize_values(&[0.0, 0.0, 0.0]).unwrap();
        assert_eq!(
            points,
            vec![
                PlotPoint { x: 0.0, y: 100.0 },
                PlotPoint { x: 50.0, y: 100.0 },
                PlotPoint { x: 100.0, y: 100.0 },
            ]
        );
    }

    #[test]
    fn peak_keeps_headroom_below_top_edge() {
        let values = [12.0, 18.0, 15.0, 20.0, 28.0, 25.0, 32.0, 30.0, 34.0, 40.0, 38.0, 45.0];
        let points = normalize_values(&values).unwrap();
        let min_y = points.iter().map(|p| p.y).fold(f64::INFINITY, f64::min);
        assert!((min_y - (100.0 - 100.0 / 1.2)).abs() < EPS);
        assert!((points[11].y - min_y).abs() < EPS);
    }

    #[test]
    fn custom_headroom_changes_peak_height() {
        let series = SampleSeries::new(vec![0.0, 10.0]).unwrap();
        let flush = NormalizeOptions::with_headroom(1.0).unwrap();
        let points = normalize(&series, &flush);
        assert!(points[1].y.abs() < EPS);

        let doubled = NormalizeOptions::with_headroom(2.0).unwrap();
        let points = normalize(&series, &doubled);
        assert!((points[1].y - 50.0).abs() < EPS);
    }

    #[test]
    fn with_headroom_rejects_shrinking_or_non_finite_factor() {
        assert_eq!(
            NormalizeOptions::with_headroom(0.9).unwrap_err(),
            ChartError::InvalidHeadroom(0.9)
        );
        assert!(NormalizeOptions::with_headroom(f64::NAN).is_err());
        assert!(NormalizeOptions::with_headroom(f64::INFINITY).is_err());
    }

    #[test]
    fn extreme_magnitudes_keep_headroom() {
        let peak = 100.0 - 100.0 / 1.2;

        let points = normalize_values(&[f64::MAX, 1.0]).unwrap();
        assert!((points[0].y - peak).abs() < 1e-6, "peak y = {}", points[0].y);
        assert!(points[0].y < points[1].y);

        let points = normalize_values(&[5e-324, 0.0]).unwrap();
        assert!((points[0].y - peak).abs() < 1e-6, "peak y = {}", points[0].y);
        assert_eq!(points[1].y, 100.0);
    }

    #[test]
    fn increasing_series_yields_decreasing_y() {
        let points = normalize_values(&[1.0, 2.0, 3.0, 4.0, 5.0]).unwrap();
        for pair in points.windows(2) {
            assert!(pair[1].y < pair[0].y);
            assert!(pair[1].x > pair[0].x);
        }
    }
}
