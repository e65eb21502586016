//! Deep-work ratio and focus scoring
//!
//! Study time is measured in fixed-size blocks (one block per PYQ-sized
//! unit, 4.5 minutes by default). A block is either deep or distracted;
//! the ratio between the two gives a daily focus picture.

use crate::config::AnalyticsConfig;
use crate::types::SessionRecord;
use chrono::NaiveDate;
use serde::Serialize;
use std::collections::BTreeMap;

use super::stats;

/// Focus picture for one day of block counts.
#[derive(Debug, Clone, Serialize)]
pub struct DailyFocus {
    /// Deep time share of total time, percent; 0 when there are no blocks
    pub deep_ratio_pct: f64,
    /// Deep blocks converted to minutes
    pub total_deep_minutes: f64,
    /// Distracted blocks converted to minutes
    pub total_distracted_minutes: f64,
    /// Deep ratio with the motivational boost applied, capped at 100
    pub focus_score: f64,
}

/// Convert block counts into time ratios and a bounded focus score.
///
/// The focus score multiplies the deep ratio by the configured boost
/// (1.2 by default) before capping at 100. The upward bias is a deliberate
/// product choice, not a bug.
pub fn daily_focus(
    deep_blocks: u32,
    distracted_blocks: u32,
    config: &AnalyticsConfig,
) -> DailyFocus {
    let total_deep_minutes = deep_blocks as f64 * config.minutes_per_pyq;
    let total_distracted_minutes = distracted_blocks as f64 * config.minutes_per_pyq;
    let total = total_deep_minutes + total_distracted_minutes;

    // 0/0 would be NaN; an empty day is simply unfocused, not undefined
    let deep_ratio_pct = if total == 0.0 {
        0.0
    } else {
        total_deep_minutes / total * 100.0
    };

    DailyFocus {
        deep_ratio_pct,
        total_deep_minutes,
        total_distracted_minutes,
        focus_score: (deep_ratio_pct * config.focus_boost).min(100.0),
    }
}

/// Daily focus derived from session logs, sorted ascending by date.
///
/// Completed PYQs count as deep blocks and distraction events as
/// distracted blocks; multiple sessions on one day are merged.
pub fn focus_by_day(
    sessions: &[SessionRecord],
    config: &AnalyticsConfig,
) -> Vec<(NaiveDate, DailyFocus)> {
    let mut blocks: BTreeMap<NaiveDate, (u32, u32)> = BTreeMap::new();
    for session in sessions {
        let entry = blocks.entry(session.date).or_default();
        entry.0 += session.pyqs_completed;
        entry.1 += session.distraction_events;
    }

    blocks
        .into_iter()
        .map(|(date, (deep, distracted))| (date, daily_focus(deep, distracted, config)))
        .collect()
}

/// Slope of the deep-work ratio over an ordered run of focus days.
///
/// Callers typically pass the trailing 7-day window.
pub fn focus_trend(days: &[DailyFocus]) -> f64 {
    let ratios: Vec<f64> = days.iter().map(|d| d.deep_ratio_pct).collect();
    stats::slope(&ratios)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    #[test]
    fn test_minutes_conservation() {
        let config = AnalyticsConfig::default();
        for (deep, distracted) in [(8u32, 2u32), (0, 5), (13, 0), (1, 1)] {
            let focus = daily_focus(deep, distracted, &config);
            assert_eq!(
                focus.total_deep_minutes + focus.total_distracted_minutes,
                (deep + distracted) as f64 * 4.5
            );
            assert!((0.0..=100.0).contains(&focus.deep_ratio_pct));
        }
    }

    #[test]
    fn test_zero_blocks_is_zero_not_nan() {
        let focus = daily_focus(0, 0, &AnalyticsConfig::default());
        assert_eq!(focus.deep_ratio_pct, 0.0);
        assert_eq!(focus.focus_score, 0.0);
    }

    #[test]
    fn test_focus_score_boost_and_cap() {
        let config = AnalyticsConfig::default();

        // 8 deep / 2 distracted = 80% deep, boosted to 96
        let focus = daily_focus(8, 2, &config);
        assert_eq!(focus.deep_ratio_pct, 80.0);
        assert_eq!(focus.focus_score, 96.0);

        // All deep caps at 100, not 120
        let focus = daily_focus(10, 0, &config);
        assert_eq!(focus.focus_score, 100.0);
    }

    #[test]
    fn test_focus_by_day_merges_sessions() {
        let config = AnalyticsConfig::default();
        let session = |date: &str, pyqs: u32, distractions: u32| SessionRecord {
            date: date.parse().unwrap(),
            start_time: Utc.with_ymd_and_hms(2025, 4, 7, 9, 0, 0).unwrap(),
            end_time: Utc.with_ymd_and_hms(2025, 4, 7, 10, 0, 0).unwrap(),
            subject: "Biochemistry".to_string(),
            topics: vec![],
            pyqs_completed: pyqs,
            distraction_events: distractions,
        };

        let days = focus_by_day(
            &[
                session("2025-04-08", 4, 1),
                session("2025-04-07", 6, 2),
                session("2025-04-07", 2, 0),
            ],
            &config,
        );

        assert_eq!(days.len(), 2);
        assert_eq!(days[0].0, "2025-04-07".parse().unwrap());
        // 8 deep + 2 distracted merged across the two sessions
        assert_eq!(days[0].1.deep_ratio_pct, 80.0);
    }

    #[test]
    fn test_focus_trend_direction() {
        let config = AnalyticsConfig::default();
        let rising: Vec<DailyFocus> = [(2u32, 8u32), (5, 5), (8, 2)]
            .iter()
            .map(|&(d, x)| daily_focus(d, x, &config))
            .collect();
        assert!(focus_trend(&rising) > 0.0);
        assert_eq!(focus_trend(&[]), 0.0);
    }
}
