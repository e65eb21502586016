//! Shared statistical estimators
//!
//! The slope and correlation estimators here back several widgets: the
//! calibration drift trend, the weekly error-recurrence trajectory, the
//! 7-day focus trend, and the time-spent vs accuracy scatter. Keeping one
//! implementation avoids the per-widget copies the dashboard started with.
//!
//! Both estimators are total over degenerate input: empty series, single
//! points, and zero-variance series return 0 instead of NaN.

use crate::error::{Error, Result};
use serde::Serialize;

/// Ordinary least-squares slope of a series over index positions 0..n-1.
///
/// Returns 0 for series shorter than 2 points and for flat input where the
/// denominator vanishes.
pub fn slope(series: &[f64]) -> f64 {
    if series.len() < 2 {
        return 0.0;
    }

    let n = series.len() as f64;
    let sum_x: f64 = (0..series.len()).map(|i| i as f64).sum();
    let sum_y: f64 = series.iter().sum();
    let sum_xy: f64 = series.iter().enumerate().map(|(i, y)| i as f64 * y).sum();
    let sum_xx: f64 = (0..series.len()).map(|i| (i as f64).powi(2)).sum();

    let denominator = n * sum_xx - sum_x.powi(2);
    if denominator.abs() < 1e-10 {
        return 0.0;
    }

    (n * sum_xy - sum_x * sum_y) / denominator
}

/// Pearson correlation coefficient between two parallel series.
///
/// Series lengths must match; mismatched input is a caller bug and fails
/// fast rather than truncating. Zero variance in either series yields 0.
pub fn correlation(xs: &[f64], ys: &[f64]) -> Result<f64> {
    if xs.len() != ys.len() {
        return Err(Error::LengthMismatch {
            left: xs.len(),
            right: ys.len(),
        });
    }
    if xs.len() < 2 {
        return Ok(0.0);
    }

    let n = xs.len() as f64;
    let sum_x: f64 = xs.iter().sum();
    let sum_y: f64 = ys.iter().sum();
    let sum_xy: f64 = xs.iter().zip(ys).map(|(x, y)| x * y).sum();
    let sum_xx: f64 = xs.iter().map(|x| x * x).sum();
    let sum_yy: f64 = ys.iter().map(|y| y * y).sum();

    let denominator = ((n * sum_xx - sum_x.powi(2)) * (n * sum_yy - sum_y.powi(2))).sqrt();
    if denominator.abs() < 1e-10 {
        return Ok(0.0);
    }

    Ok((n * sum_xy - sum_x * sum_y) / denominator)
}

/// Qualitative direction of a slope.
///
/// What "rising" means is the caller's concern: a rising confidence-gap
/// drift reads as worsening overconfidence, a rising focus ratio reads as
/// improvement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Trend {
    Rising,
    Stable,
    Falling,
}

impl Trend {
    /// Classify a slope against a stability band: slopes with magnitude
    /// below `band` are stable.
    pub fn classify(slope: f64, band: f64) -> Self {
        if slope.abs() < band {
            Trend::Stable
        } else if slope > 0.0 {
            Trend::Rising
        } else {
            Trend::Falling
        }
    }

    /// Arrow glyph for compact display.
    pub fn arrow(&self) -> &'static str {
        match self {
            Trend::Rising => "↑",
            Trend::Stable => "→",
            Trend::Falling => "↓",
        }
    }
}

/// Whether a slope magnitude is at or beyond the steep threshold.
pub fn is_steep(slope: f64, threshold: f64) -> bool {
    slope.abs() >= threshold
}
