//! Mistake Recurrence Index (MRI)
//!
//! Ranks logged mistakes for remediation priority. The MRI is a composite
//! 0-100 score combining how often a mistake recurs with how much study
//! time it has already cost. Both inputs are converted to bounded factors
//! so a single pathological record cannot dominate the ranking.

use crate::types::MistakeRecord;
use serde::Serialize;

/// Recurrence count at which the recurrence factor saturates.
const RECURRENCE_CEILING: f64 = 10.0;
/// Time wasted (minutes) at which the time factor saturates.
const TIME_WASTED_CEILING: f64 = 120.0;
/// Weight of recurrence vs time in the composite score.
const RECURRENCE_WEIGHT: f64 = 0.6;

/// A mistake with its computed remediation priority.
#[derive(Debug, Clone, Serialize)]
pub struct MistakePriority {
    /// The mistake, phrased as a sentence
    pub sentence: String,
    /// How many times it has recurred
    pub recurrence_count: u32,
    /// Total minutes it has cost
    pub time_wasted_minutes: f64,
    /// Suggested fix text
    pub ai_fix: String,
    /// Composite 0-100 priority score
    pub mri: f64,
}

/// Composite 0-100 Mistake Recurrence Index for one record.
pub fn mri(record: &MistakeRecord) -> f64 {
    let recurrence_factor = (record.recurrence_count as f64 / RECURRENCE_CEILING).min(1.0);
    let time_factor = (record.time_wasted_minutes / TIME_WASTED_CEILING).min(1.0);
    let score =
        100.0 * (recurrence_factor * RECURRENCE_WEIGHT + time_factor * (1.0 - RECURRENCE_WEIGHT));
    (score * 10.0).round() / 10.0
}

/// Rank mistakes by MRI descending; equal scores keep input order.
pub fn rank_mistakes(records: &[MistakeRecord]) -> Vec<MistakePriority> {
    let mut ranked: Vec<MistakePriority> = records
        .iter()
        .map(|record| MistakePriority {
            sentence: record.sentence.clone(),
            recurrence_count: record.recurrence_count,
            time_wasted_minutes: record.time_wasted_minutes,
            ai_fix: record.ai_fix.clone(),
            mri: mri(record),
        })
        .collect();

    ranked.sort_by(|a, b| b.mri.partial_cmp(&a.mri).unwrap_or(std::cmp::Ordering::Equal));
    ranked
}
