//! Dataset loading and boundary validation
//!
//! A [`StudyDataset`] is one JSON document bundling every record stream the
//! analytics modules consume. Loading and validation happen here, once, at
//! the boundary; the aggregators themselves stay pure and assume well-formed
//! input. Malformed records are rejected with [`Error::Validation`] naming
//! the offending field and record index rather than silently defaulted.

use crate::error::{Error, Result};
use crate::types::{ConfidenceRecord, GapOccurrence, MistakeRecord, SessionRecord};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// A full study log: every record stream used by the dashboard.
///
/// All streams are optional in the JSON document; a missing stream is an
/// empty one. Aggregators treat empty input as "no data", never as an error.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StudyDataset {
    /// Self-rated answer attempts
    #[serde(default)]
    pub confidence: Vec<ConfidenceRecord>,
    /// Timed study sessions
    #[serde(default)]
    pub sessions: Vec<SessionRecord>,
    /// Logged mistakes with remediation cost
    #[serde(default)]
    pub mistakes: Vec<MistakeRecord>,
    /// Knowledge-gap sentence occurrences
    #[serde(default)]
    pub gaps: Vec<GapOccurrence>,
}

impl StudyDataset {
    /// Parse a dataset from a JSON string and validate every record.
    pub fn from_json(json: &str) -> Result<Self> {
        let dataset: StudyDataset = serde_json::from_str(json)?;
        dataset.validate()?;
        Ok(dataset)
    }

    /// Load a dataset from a JSON file and validate every record.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let dataset = Self::from_json(&content)?;
        tracing::debug!(
            path = %path.display(),
            confidence = dataset.confidence.len(),
            sessions = dataset.sessions.len(),
            mistakes = dataset.mistakes.len(),
            gaps = dataset.gaps.len(),
            "Loaded study dataset"
        );
        Ok(dataset)
    }

    /// Check every record against the domain invariants.
    ///
    /// Fails on the first violation, naming the field and record index.
    pub fn validate(&self) -> Result<()> {
        for (index, record) in self.confidence.iter().enumerate() {
            if !(0.0..=100.0).contains(&record.predicted_confidence) {
                return Err(Error::Validation {
                    index,
                    field: "predicted_confidence",
                    message: format!("must be in [0, 100], got {}", record.predicted_confidence),
                });
            }
            if record.actual_correct > 1 {
                return Err(Error::Validation {
                    index,
                    field: "actual_correct",
                    message: format!("must be 0 or 1, got {}", record.actual_correct),
                });
            }
        }

        for (index, session) in self.sessions.iter().enumerate() {
            if session.end_time <= session.start_time {
                return Err(Error::Validation {
                    index,
                    field: "end_time",
                    message: format!(
                        "must be after start_time ({} <= {})",
                        session.end_time, session.start_time
                    ),
                });
            }
        }

        for (index, mistake) in self.mistakes.iter().enumerate() {
            if mistake.recurrence_count < 1 {
                return Err(Error::Validation {
                    index,
                    field: "recurrence_count",
                    message: "must be at least 1".to_string(),
                });
            }
            if mistake.time_wasted_minutes < 0.0 {
                return Err(Error::Validation {
                    index,
                    field: "time_wasted_minutes",
                    message: format!("must be non-negative, got {}", mistake.time_wasted_minutes),
                });
            }
        }

        Ok(())
    }
}
