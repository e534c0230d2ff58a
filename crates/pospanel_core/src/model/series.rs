//! Sample series domain model.
//!
//! # Responsibility
//! - Define the ordered numeric series plotted by dashboard charts.
//! - Reject inputs the normalizer cannot map into the viewport.
//!
//! # Invariants
//! - A series holds at least [`MIN_SERIES_LEN`] samples.
//! - Every sample is finite and non-negative.
//! - Sample order is time order and is never rearranged.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Minimum sample count needed to define horizontal spacing.
pub const MIN_SERIES_LEN: usize = 2;

/// Validation error for sample series input.
#[derive(Debug, Clone, PartialEq)]
pub enum SeriesValidationError {
    /// Fewer than two samples; x spacing would divide by zero.
    DegenerateSeries { len: usize },
    NegativeSample { index: usize, value: f64 },
    /// NaN or infinite sample.
    NonFiniteSample { index: usize },
}

impl Display for SeriesValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DegenerateSeries { len } => write!(
                f,
                "series needs at least {MIN_SERIES_LEN} samples, got {len}"
            ),
            Self::NegativeSample { index, value } => {
                write!(f, "sample at index {index} is negative ({value})")
            }
            Self::NonFiniteSample { index } => {
                write!(f, "sample at index {index} is not a finite number")
            }
        }
    }
}

impl Error for SeriesValidationError {}

/// Ordered, validated sequence of chart samples.
///
/// Deserialization goes through [`SampleSeries::new`], so a decoded series
/// upholds the same invariants as one built in code.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<f64>", into = "Vec<f64>")]
pub struct SampleSeries {
    values: Vec<f64>,
}

impl SampleSeries {
    /// Validates and wraps raw sample values.
    ///
    /// # Errors
    /// - [`SeriesValidationError::DegenerateSeries`] for fewer than two samples.
    /// - [`SeriesValidationError::NonFiniteSample`] for NaN/infinite samples.
    /// - [`SeriesValidationError::NegativeSample`] for samples below zero.
    pub fn new(values: impl Into<Vec<f64>>) -> Result<Self, SeriesValidationError> {
        let values = values.into();
        validate_samples(&values)?;
        Ok(Self { values })
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Always `false` for a validated series; kept for slice-like ergonomics.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Largest sample in the series.
    pub fn max(&self) -> f64 {
        self.values.iter().copied().fold(0.0_f64, f64::max)
    }

    /// Returns whether every sample is zero.
    pub fn is_all_zero(&self) -> bool {
        self.values.iter().all(|value| *value == 0.0)
    }
}

impl TryFrom<Vec<f64>> for SampleSeries {
    type Error = SeriesValidationError;

    fn try_from(value: Vec<f64>) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<SampleSeries> for Vec<f64> {
    fn from(value: SampleSeries) -> Self {
        value.values
    }
}

fn validate_samples(values: &[f64]) -> Result<(), SeriesValidationError> {
    if values.len() < MIN_SERIES_LEN {
        return Err(SeriesValidationError::DegenerateSeries { len: values.len() });
    }
    for (index, value) in values.iter().copied().enumerate() {
        if !value.is_finite() {
            return Err(SeriesValidationError::NonFiniteSample { index });
        }
        if value < 0.0 {
            return Err(SeriesValidationError::NegativeSample { index, value });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{SampleSeries, SeriesValidationError};

    #[test]
    fn new_rejects_single_sample() {
        let err = SampleSeries::new(vec![5.0]).unwrap_err();
        assert_eq!(err, SeriesValidationError::DegenerateSeries { len: 1 });
    }

    #[test]
    fn new_rejects_empty_input() {
        let err = SampleSeries::new(Vec::new()).unwrap_err();
        assert_eq!(err, SeriesValidationError::DegenerateSeries { len: 0 });
    }

    #[test]
    fn new_reports_first_offending_index() {
        let err = SampleSeries::new(vec![1.0, f64::NAN, -2.0]).unwrap_err();
        assert_eq!(err, SeriesValidationError::NonFiniteSample { index: 1 });

        let err = SampleSeries::new(vec![1.0, 3.0, -2.0]).unwrap_err();
        assert_eq!(
            err,
            SeriesValidationError::NegativeSample {
                index: 2,
                value: -2.0
            }
        );
    }

    #[test]
    fn max_and_all_zero_helpers() {
        let series = SampleSeries::new(vec![12.0, 45.0, 30.0]).unwrap();
        assert_eq!(series.max(), 45.0);
        assert!(!series.is_all_zero());

        let flat = SampleSeries::new(vec![0.0, 0.0]).unwrap();
        assert_eq!(flat.max(), 0.0);
        assert!(flat.is_all_zero());
    }
}
