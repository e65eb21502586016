//! Daily and weekly grouping of confidence records
//!
//! Groups timestamped attempts by calendar day or Sunday-aligned week and
//! averages confidence and accuracy per group. The signed confidence gap
//! per period feeds the drift widget: positive means overconfident.

use crate::config::AnalyticsConfig;
use crate::types::ConfidenceRecord;
use chrono::{Datelike, Duration, NaiveDate};
use serde::Serialize;
use std::collections::BTreeMap;

/// Per-day averages for the drift timeline.
#[derive(Debug, Clone, Serialize)]
pub struct DaySummary {
    /// Calendar day
    pub date: NaiveDate,
    /// Mean predicted confidence
    pub avg_confidence: f64,
    /// Measured accuracy, percent
    pub avg_accuracy_pct: f64,
    /// Signed gap: avg_confidence - avg_accuracy_pct (positive = overconfident)
    pub confidence_gap: f64,
    /// Attempts on this day
    pub total_attempts: i64,
    /// Modeled study time: attempts * minutes-per-PYQ
    pub time_spent_minutes: f64,
}

/// Per-week averages for the drift timeline.
#[derive(Debug, Clone, Serialize)]
pub struct WeekSummary {
    /// Sunday that starts the week
    pub week_start: NaiveDate,
    /// Week-of-year number carried in the label
    pub week_of_year: u32,
    /// Mean predicted confidence
    pub avg_confidence: f64,
    /// Measured accuracy, percent
    pub avg_accuracy_pct: f64,
    /// Signed gap: avg_confidence - avg_accuracy_pct
    pub confidence_gap: f64,
    /// Attempts in this week
    pub total_attempts: i64,
    /// Modeled study time: attempts * minutes-per-PYQ
    pub time_spent_minutes: f64,
}

impl WeekSummary {
    /// Display label, e.g. "W14".
    pub fn label(&self) -> String {
        format!("W{}", self.week_of_year)
    }
}

/// Sunday that starts the week containing `date`.
fn week_start(date: NaiveDate) -> NaiveDate {
    date - Duration::days(date.weekday().num_days_from_sunday() as i64)
}

/// Week-of-year for a date, counting Sunday-partitioned weeks:
/// `ceil((days_since_jan1 + jan1_weekday + 1) / 7)`.
fn week_of_year(date: NaiveDate) -> u32 {
    let jan1 = NaiveDate::from_ymd_opt(date.year(), 1, 1).expect("Jan 1 always exists");
    let days_since_jan1 = (date - jan1).num_days();
    let jan1_weekday = jan1.weekday().num_days_from_sunday() as i64;
    ((days_since_jan1 + jan1_weekday + 1) as f64 / 7.0).ceil() as u32
}

#[derive(Default)]
struct GroupAcc {
    confidence_sum: f64,
    correct: i64,
    total: i64,
}

impl GroupAcc {
    fn push(&mut self, record: &ConfidenceRecord) {
        self.confidence_sum += record.predicted_confidence;
        self.total += 1;
        if record.is_correct() {
            self.correct += 1;
        }
    }

    /// (avg_confidence, avg_accuracy_pct)
    fn averages(&self) -> (f64, f64) {
        let avg_confidence = self.confidence_sum / self.total as f64;
        let avg_accuracy_pct = 100.0 * self.correct as f64 / self.total as f64;
        (avg_confidence, avg_accuracy_pct)
    }
}

/// Group attempts by calendar day, sorted ascending.
pub fn group_by_day(records: &[ConfidenceRecord], config: &AnalyticsConfig) -> Vec<DaySummary> {
    let mut groups: BTreeMap<NaiveDate, GroupAcc> = BTreeMap::new();
    for record in records {
        groups.entry(record.date).or_default().push(record);
    }

    groups
        .into_iter()
        .map(|(date, acc)| {
            let (avg_confidence, avg_accuracy_pct) = acc.averages();
            DaySummary {
                date,
                avg_confidence,
                avg_accuracy_pct,
                confidence_gap: avg_confidence - avg_accuracy_pct,
                total_attempts: acc.total,
                time_spent_minutes: acc.total as f64 * config.minutes_per_pyq,
            }
        })
        .collect()
}

/// Group attempts by Sunday-aligned week, sorted ascending by week start.
pub fn group_by_week(records: &[ConfidenceRecord], config: &AnalyticsConfig) -> Vec<WeekSummary> {
    let mut groups: BTreeMap<NaiveDate, GroupAcc> = BTreeMap::new();
    for record in records {
        groups.entry(week_start(record.date)).or_default().push(record);
    }

    groups
        .into_iter()
        .map(|(start, acc)| {
            let (avg_confidence, avg_accuracy_pct) = acc.averages();
            WeekSummary {
                week_start: start,
                week_of_year: week_of_year(start),
                avg_confidence,
                avg_accuracy_pct,
                confidence_gap: avg_confidence - avg_accuracy_pct,
                total_attempts: acc.total,
                time_spent_minutes: acc.total as f64 * config.minutes_per_pyq,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(date: &str, confidence: f64, correct: u8) -> ConfidenceRecord {
        ConfidenceRecord {
            subject: "Physiology".to_string(),
            date: date.parse().unwrap(),
            mcq_key: "phys-001".to_string(),
            predicted_confidence: confidence,
            actual_correct: correct,
        }
    }

    #[test]
    fn test_week_start_is_sunday() {
        // 2025-04-09 is a Wednesday; its week starts Sunday 2025-04-06
        let start = week_start("2025-04-09".parse().unwrap());
        assert_eq!(start, "2025-04-06".parse().unwrap());
        // A Sunday is its own week start
        assert_eq!(week_start(start), start);
    }

    #[test]
    fn test_week_of_year() {
        // Jan 1 is always in week 1
        assert_eq!(week_of_year("2025-01-01".parse().unwrap()), 1);
        // 2025-01-04 (Saturday) still week 1; Jan 5 (Sunday) opens week 2
        assert_eq!(week_of_year("2025-01-04".parse().unwrap()), 1);
        assert_eq!(week_of_year("2025-01-05".parse().unwrap()), 2);
    }

    #[test]
    fn test_group_by_day_sorted_and_averaged() {
        let records = vec![
            record("2025-04-08", 80.0, 1),
            record("2025-04-07", 60.0, 0),
            record("2025-04-08", 60.0, 0),
        ];
        let days = group_by_day(&records, &AnalyticsConfig::default());

        assert_eq!(days.len(), 2);
        assert_eq!(days[0].date, "2025-04-07".parse().unwrap());
        assert_eq!(days[1].date, "2025-04-08".parse().unwrap());

        let apr8 = &days[1];
        assert_eq!(apr8.avg_confidence, 70.0);
        assert_eq!(apr8.avg_accuracy_pct, 50.0);
        assert_eq!(apr8.confidence_gap, 20.0);
        assert_eq!(apr8.total_attempts, 2);
        assert_eq!(apr8.time_spent_minutes, 9.0);
    }

    #[test]
    fn test_signed_gap_can_be_negative() {
        // Underconfident: low confidence, all correct
        let records = vec![record("2025-04-07", 40.0, 1), record("2025-04-07", 45.0, 1)];
        let days = group_by_day(&records, &AnalyticsConfig::default());
        assert_eq!(days[0].confidence_gap, 42.5 - 100.0);
    }

    #[test]
    fn test_group_by_week_merges_adjacent_days() {
        let records = vec![
            // Same Sunday-aligned week (2025-04-06 .. 2025-04-12)
            record("2025-04-07", 70.0, 1),
            record("2025-04-11", 90.0, 0),
            // Next week
            record("2025-04-14", 50.0, 1),
        ];
        let weeks = group_by_week(&records, &AnalyticsConfig::default());

        assert_eq!(weeks.len(), 2);
        assert_eq!(weeks[0].week_start, "2025-04-06".parse().unwrap());
        assert_eq!(weeks[0].total_attempts, 2);
        assert_eq!(weeks[0].avg_confidence, 80.0);
        assert_eq!(weeks[1].week_start, "2025-04-13".parse().unwrap());
        assert!(weeks[0].label().starts_with('W'));
    }

    #[test]
    fn test_empty_input() {
        let config = AnalyticsConfig::default();
        assert!(group_by_day(&[], &config).is_empty());
        assert!(group_by_week(&[], &config).is_empty());
    }
}
