//! Study overview generation
//!
//! Composes every aggregator into one `StudyOverview`, the object the
//! report CLI renders. Each section is an independent pure computation
//! over the dataset; generating an overview twice from the same input
//! yields the same result.

use chrono::NaiveDate;
use serde::Serialize;

use crate::config::AnalyticsConfig;
use crate::dataset::StudyDataset;
use crate::error::Result;

use super::calibration::{self, CalibrationSummary, ConfidenceBin};
use super::focus::{self, DailyFocus};
use super::gaps::{self, GapFrequency};
use super::mistakes::{self, MistakePriority};
use super::rollup::{self, CategoryTotal};
use super::stats::{self, Trend};
use super::timeseries::{self, DaySummary, WeekSummary};

/// Number of trailing focus days fed to the focus trend.
const FOCUS_TREND_WINDOW: usize = 7;
/// Number of gap sentences surfaced in the report.
const TOP_GAPS: usize = 10;

/// One day of focus data, dated for the timeline.
#[derive(Debug, Clone, Serialize)]
pub struct FocusDay {
    pub date: NaiveDate,
    pub focus: DailyFocus,
}

/// Everything the study report renders, derived in one pass.
#[derive(Debug, Clone, Serialize)]
pub struct StudyOverview {
    /// Overall calibration picture
    pub calibration: CalibrationSummary,
    /// Non-empty confidence bands
    pub bins: Vec<ConfidenceBin>,
    /// Per-day confidence/accuracy averages
    pub daily: Vec<DaySummary>,
    /// Per-week confidence/accuracy averages
    pub weekly: Vec<WeekSummary>,
    /// OLS slope of the weekly signed confidence gap
    pub drift_slope: f64,
    /// Direction of the drift: rising means growing overconfidence
    pub drift_trend: Trend,
    /// Whether the drift slope clears the steep threshold
    pub drift_steep: bool,
    /// Daily deep-work picture derived from sessions
    pub focus_days: Vec<FocusDay>,
    /// Slope of the deep-work ratio over the trailing window
    pub focus_slope: f64,
    /// Direction of the focus trend: rising means improving
    pub focus_trend: Trend,
    /// Correlation between daily study minutes and daily accuracy
    pub time_accuracy_correlation: f64,
    /// Most frequent knowledge gaps, capped at the display limit
    pub top_gaps: Vec<GapFrequency>,
    /// Study minutes per subject, from session durations
    pub minutes_by_subject: Vec<CategoryTotal>,
    /// Mistakes ranked by MRI, highest priority first
    pub mistake_ranking: Vec<MistakePriority>,
}

/// Generate the full overview for a dataset.
///
/// When `subject` is given, the gap list is restricted to gaps seen under
/// that subject; every other section still covers the whole dataset.
pub fn generate_overview(
    dataset: &StudyDataset,
    config: &AnalyticsConfig,
    subject: Option<&str>,
) -> Result<StudyOverview> {
    let bins = calibration::bin_confidence(&dataset.confidence, None, config);
    let calibration = calibration::summarize_calibration(&bins, config);

    let daily = timeseries::group_by_day(&dataset.confidence, config);
    let weekly = timeseries::group_by_week(&dataset.confidence, config);

    let weekly_gaps: Vec<f64> = weekly.iter().map(|w| w.confidence_gap).collect();
    let drift_slope = stats::slope(&weekly_gaps);
    let drift_trend = Trend::classify(drift_slope, config.trend_stability_band);
    let drift_steep = stats::is_steep(drift_slope, config.trend_steep_threshold);

    let focus_days: Vec<FocusDay> = focus::focus_by_day(&dataset.sessions, config)
        .into_iter()
        .map(|(date, focus)| FocusDay { date, focus })
        .collect();
    let window_start = focus_days.len().saturating_sub(FOCUS_TREND_WINDOW);
    let window: Vec<DailyFocus> = focus_days[window_start..]
        .iter()
        .map(|d| d.focus.clone())
        .collect();
    let focus_slope = focus::focus_trend(&window);
    let focus_trend = Trend::classify(focus_slope, config.trend_stability_band);

    // Parallel by construction: both series come from the same day groups
    let minutes: Vec<f64> = daily.iter().map(|d| d.time_spent_minutes).collect();
    let accuracy: Vec<f64> = daily.iter().map(|d| d.avg_accuracy_pct).collect();
    let time_accuracy_correlation = stats::correlation(&minutes, &accuracy)?;

    let mut top_gaps = match subject {
        Some(subject) => gaps::filter_by_subject(&dataset.gaps, subject),
        None => gaps::aggregate_gaps(&dataset.gaps),
    };
    top_gaps.truncate(TOP_GAPS);

    let minutes_by_subject = rollup::rollup(
        dataset
            .sessions
            .iter()
            .map(|s| (s.subject.as_str(), s.duration_minutes() as f64)),
    );

    let mistake_ranking = mistakes::rank_mistakes(&dataset.mistakes);

    tracing::debug!(
        bins = bins.len(),
        days = daily.len(),
        weeks = weekly.len(),
        drift_slope,
        focus_slope,
        "Generated study overview"
    );

    Ok(StudyOverview {
        calibration,
        bins,
        daily,
        weekly,
        drift_slope,
        drift_trend,
        drift_steep,
        focus_days,
        focus_slope,
        focus_trend,
        time_accuracy_correlation,
        top_gaps,
        minutes_by_subject,
        mistake_ranking,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{ConfidenceRecord, GapOccurrence, SessionRecord};
    use chrono::{TimeZone, Utc};

    fn sample_dataset() -> StudyDataset {
        let record = |date: &str, confidence: f64, correct: u8| ConfidenceRecord {
            subject: "Medicine".to_string(),
            date: date.parse().unwrap(),
            mcq_key: "med-001".to_string(),
            predicted_confidence: confidence,
            actual_correct: correct,
        };
        let session = |date: &str, pyqs: u32, distractions: u32| SessionRecord {
            date: date.parse().unwrap(),
            start_time: Utc.with_ymd_and_hms(2025, 4, 7, 9, 0, 0).unwrap(),
            end_time: Utc.with_ymd_and_hms(2025, 4, 7, 10, 0, 0).unwrap(),
            subject: "Medicine".to_string(),
            topics: vec![],
            pyqs_completed: pyqs,
            distraction_events: distractions,
        };
        let gap = |session: &str, sentence: &str| GapOccurrence {
            session_id: session.to_string(),
            subject: "Medicine".to_string(),
            sentence: sentence.to_string(),
        };

        StudyDataset {
            confidence: vec![
                record("2025-04-07", 85.0, 1),
                record("2025-04-07", 82.0, 1),
                record("2025-04-08", 90.0, 0),
                record("2025-04-14", 60.0, 1),
            ],
            sessions: vec![session("2025-04-07", 8, 2), session("2025-04-08", 5, 5)],
            mistakes: vec![],
            gaps: vec![gap("s1", "A"), gap("s2", "B"), gap("s3", "A")],
        }
    }

    #[test]
    fn test_overview_sections_are_consistent() {
        let dataset = sample_dataset();
        let overview =
            generate_overview(&dataset, &AnalyticsConfig::default(), None).unwrap();

        // Bin attempt counts cover the whole confidence stream
        let binned: i64 = overview.bins.iter().map(|b| b.total_attempts).sum();
        assert_eq!(binned, dataset.confidence.len() as i64);
        assert_eq!(overview.calibration.total_attempts, binned);

        // Day and week groupings cover the same records
        let day_total: i64 = overview.daily.iter().map(|d| d.total_attempts).sum();
        let week_total: i64 = overview.weekly.iter().map(|w| w.total_attempts).sum();
        assert_eq!(day_total, week_total);

        // Gap frequencies conserve occurrences
        let gap_total: i64 = overview.top_gaps.iter().map(|g| g.frequency).sum();
        assert_eq!(gap_total, dataset.gaps.len() as i64);
        assert_eq!(overview.top_gaps[0].sentence, "A");

        // One subject, two sessions of 60 minutes each
        assert_eq!(overview.minutes_by_subject.len(), 1);
        assert_eq!(overview.minutes_by_subject[0].total, 120.0);

        assert!((-1.0..=1.0).contains(&overview.time_accuracy_correlation));
    }

    #[test]
    fn test_subject_filter_restricts_gaps_only() {
        let dataset = sample_dataset();
        let overview =
            generate_overview(&dataset, &AnalyticsConfig::default(), Some("Surgery")).unwrap();

        assert!(overview.top_gaps.is_empty());
        // Calibration still covers the full dataset
        assert_eq!(
            overview.calibration.total_attempts,
            dataset.confidence.len() as i64
        );
    }

    #[test]
    fn test_empty_dataset_is_not_an_error() {
        let overview = generate_overview(
            &StudyDataset::default(),
            &AnalyticsConfig::default(),
            None,
        )
        .unwrap();

        assert_eq!(overview.calibration.overall_calibration, None);
        assert!(overview.bins.is_empty());
        assert_eq!(overview.drift_slope, 0.0);
        assert_eq!(overview.drift_trend, Trend::Stable);
        assert_eq!(overview.time_accuracy_correlation, 0.0);
    }
}
