//! Confidence calibration binning and scoring
//!
//! Buckets (predicted confidence, actual correctness) pairs into five fixed
//! confidence bands and compares per-band predicted confidence against
//! measured accuracy. The gap between the two drives the calibration
//! heatmap and the overall calibration score.

use crate::config::AnalyticsConfig;
use crate::types::ConfidenceRecord;
use serde::Serialize;

/// Fixed confidence bands: [0,20], [21,40], [41,60], [61,80], [81,100].
///
/// Bands share no overlap at integer boundaries; a value of exactly 20
/// belongs to the lower band only. Fractional values between two integer
/// boundaries (e.g. 20.5) fall into the upper band.
const BANDS: [(f64, &str); 5] = [
    (20.0, "0-20"),
    (40.0, "21-40"),
    (60.0, "41-60"),
    (80.0, "61-80"),
    (100.0, "81-100"),
];

/// Index of the band a confidence value falls into.
fn band_index(confidence: f64) -> usize {
    BANDS
        .iter()
        .position(|(max, _)| confidence <= *max)
        .unwrap_or(BANDS.len() - 1)
}

/// One non-empty confidence band with its calibration verdict.
#[derive(Debug, Clone, Serialize)]
pub struct ConfidenceBin {
    /// Band label, e.g. "61-80"
    pub range_label: &'static str,
    /// Mean predicted confidence in the band, rounded to an integer
    pub predicted_avg: f64,
    /// Measured accuracy in the band, percent, rounded to 2 decimals
    pub actual_accuracy_pct: f64,
    /// Attempts that fell into the band
    pub total_attempts: i64,
    /// Correct attempts in the band
    pub correct_attempts: i64,
    /// |predicted_avg - actual_accuracy_pct|, rounded to 2 decimals
    pub calibration_gap_abs: f64,
    /// Whether the gap is within the configured threshold
    pub well_calibrated: bool,
}

/// Overall calibration picture derived from the bins.
#[derive(Debug, Clone, Serialize)]
pub struct CalibrationSummary {
    /// 100 minus the mean absolute gap, floored at 0.
    /// `None` when there are no bins: no data is not a score.
    pub overall_calibration: Option<f64>,
    /// Bins within the gap threshold
    pub well_calibrated_count: i64,
    /// Bins where predicted confidence exceeds accuracy by more than the threshold
    pub overconfident_count: i64,
    /// Bins where accuracy exceeds predicted confidence by more than the threshold
    pub underconfident_count: i64,
    /// Total attempts across all bins
    pub total_attempts: i64,
}

/// Round to two decimal places.
fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Bucket confidence records into the fixed bands.
///
/// When `mcq_key` is given, only records for that question are considered.
/// Bands with no matching records are omitted rather than emitted
/// zero-filled; empty input yields an empty vector.
pub fn bin_confidence(
    records: &[ConfidenceRecord],
    mcq_key: Option<&str>,
    config: &AnalyticsConfig,
) -> Vec<ConfidenceBin> {
    let mut confidence_sums = [0.0f64; BANDS.len()];
    let mut totals = [0i64; BANDS.len()];
    let mut corrects = [0i64; BANDS.len()];

    for record in records {
        if let Some(key) = mcq_key {
            if record.mcq_key != key {
                continue;
            }
        }
        let band = band_index(record.predicted_confidence);
        confidence_sums[band] += record.predicted_confidence;
        totals[band] += 1;
        if record.is_correct() {
            corrects[band] += 1;
        }
    }

    BANDS
        .iter()
        .enumerate()
        .filter(|(band, _)| totals[*band] > 0)
        .map(|(band, &(_, label))| {
            let total = totals[band];
            let correct = corrects[band];
            let predicted_avg = (confidence_sums[band] / total as f64).round();
            let actual_accuracy_pct = round2(100.0 * correct as f64 / total as f64);
            let calibration_gap_abs = round2((predicted_avg - actual_accuracy_pct).abs());
            ConfidenceBin {
                range_label: label,
                predicted_avg,
                actual_accuracy_pct,
                total_attempts: total,
                correct_attempts: correct,
                calibration_gap_abs,
                well_calibrated: calibration_gap_abs <= config.calibration_gap_pct,
            }
        })
        .collect()
}

/// Derive the overall calibration picture from binned data.
pub fn summarize_calibration(
    bins: &[ConfidenceBin],
    config: &AnalyticsConfig,
) -> CalibrationSummary {
    let threshold = config.calibration_gap_pct;

    let overall_calibration = if bins.is_empty() {
        None
    } else {
        let mean_gap =
            bins.iter().map(|b| b.calibration_gap_abs).sum::<f64>() / bins.len() as f64;
        Some(round2((100.0 - mean_gap).max(0.0)))
    };

    CalibrationSummary {
        overall_calibration,
        well_calibrated_count: bins.iter().filter(|b| b.well_calibrated).count() as i64,
        overconfident_count: bins
            .iter()
            .filter(|b| b.predicted_avg > b.actual_accuracy_pct + threshold)
            .count() as i64,
        underconfident_count: bins
            .iter()
            .filter(|b| b.actual_accuracy_pct > b.predicted_avg + threshold)
            .count() as i64,
        total_attempts: bins.iter().map(|b| b.total_attempts).sum(),
    }
}
