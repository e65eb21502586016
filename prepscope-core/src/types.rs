//! Core domain types for prepscope
//!
//! These types represent the raw study log that every analytics module
//! consumes. They are plain value records: no identity beyond their fields,
//! no lifecycle beyond one computation pass. Datasets are loaded once
//! (see [`crate::dataset`]) and aggregators derive fresh summaries from them
//! on every call.
//!
//! ## Terminology
//!
//! | Term | Definition |
//! |------|------------|
//! | **PYQ** | "Previous Year Question" — one practice exam question |
//! | **Attempt** | One self-rated answer to a PYQ ([`ConfidenceRecord`]) |
//! | **Session** | A timed study block on one subject ([`SessionRecord`]) |
//! | **Gap** | A recurring knowledge-gap sentence logged during revision |
//! | **Calibration gap** | Difference between self-rated confidence and measured accuracy |

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

// ============================================
// Confidence / calibration records
// ============================================

/// One self-rated answer attempt.
///
/// The learner predicts their confidence (0-100) before answering; the
/// outcome is recorded as 0 or 1. Calibration analytics compare the two.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfidenceRecord {
    /// Subject the question belongs to (e.g. "Pharmacology")
    pub subject: String,
    /// Calendar date of the attempt
    pub date: NaiveDate,
    /// Identifier of the question bank entry
    pub mcq_key: String,
    /// Self-rated confidence before answering, 0-100
    pub predicted_confidence: f64,
    /// Outcome: 1 if answered correctly, 0 otherwise
    pub actual_correct: u8,
}

impl ConfidenceRecord {
    /// Whether this attempt was answered correctly.
    pub fn is_correct(&self) -> bool {
        self.actual_correct == 1
    }
}

// ============================================
// Study sessions
// ============================================

/// A timed study block on one subject.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionRecord {
    /// Calendar date of the session
    pub date: NaiveDate,
    /// When the session started
    pub start_time: DateTime<Utc>,
    /// When the session ended (must be after `start_time`)
    pub end_time: DateTime<Utc>,
    /// Subject studied
    pub subject: String,
    /// Topics covered during the session
    pub topics: Vec<String>,
    /// Practice questions completed
    pub pyqs_completed: u32,
    /// Number of logged distraction events
    pub distraction_events: u32,
}

impl SessionRecord {
    /// Session length in whole minutes.
    pub fn duration_minutes(&self) -> i64 {
        self.end_time
            .signed_duration_since(self.start_time)
            .num_minutes()
    }
}

// ============================================
// Mistakes and knowledge gaps
// ============================================

/// A logged mistake with its remediation cost.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MistakeRecord {
    /// The mistake, phrased as a sentence
    pub sentence: String,
    /// How many times this mistake has recurred (>= 1)
    pub recurrence_count: u32,
    /// Total study time this mistake has cost, in minutes
    pub time_wasted_minutes: f64,
    /// Suggested fix text
    pub ai_fix: String,
}

/// One occurrence of a knowledge-gap sentence within a session.
///
/// Gap sentences are matched exactly (case-sensitive); aggregation happens
/// in [`crate::analytics::gaps`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GapOccurrence {
    /// Session the gap was logged in
    pub session_id: String,
    /// Subject of that session
    pub subject: String,
    /// The gap sentence, verbatim
    pub sentence: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_confidence_record_correctness() {
        let record = ConfidenceRecord {
            subject: "Anatomy".to_string(),
            date: NaiveDate::from_ymd_opt(2025, 3, 14).unwrap(),
            mcq_key: "anat-014".to_string(),
            predicted_confidence: 72.0,
            actual_correct: 1,
        };
        assert!(record.is_correct());
    }

    #[test]
    fn test_session_duration() {
        let session = SessionRecord {
            date: NaiveDate::from_ymd_opt(2025, 3, 14).unwrap(),
            start_time: Utc.with_ymd_and_hms(2025, 3, 14, 9, 0, 0).unwrap(),
            end_time: Utc.with_ymd_and_hms(2025, 3, 14, 10, 30, 0).unwrap(),
            subject: "Pathology".to_string(),
            topics: vec!["Necrosis".to_string()],
            pyqs_completed: 20,
            distraction_events: 3,
        };
        assert_eq!(session.duration_minutes(), 90);
    }
}
