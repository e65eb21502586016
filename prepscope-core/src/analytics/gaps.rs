//! Knowledge-gap frequency aggregation
//!
//! Counts recurring gap sentences across sessions. Sentences are matched
//! exactly (case-sensitive, no normalization); each distinct string is its
//! own key. Output is sorted by descending frequency with ties kept in
//! first-occurrence order.

use crate::types::GapOccurrence;
use serde::Serialize;
use std::collections::{BTreeSet, HashMap};

/// A gap sentence with its recurrence count and provenance.
#[derive(Debug, Clone, Serialize)]
pub struct GapFrequency {
    /// The gap sentence, verbatim
    pub sentence: String,
    /// How many occurrences carried this sentence
    pub frequency: i64,
    /// Distinct sessions the gap appeared in
    pub sessions: BTreeSet<String>,
    /// Distinct subjects the gap appeared under
    pub subjects: BTreeSet<String>,
}

/// Aggregate occurrences into per-sentence frequencies.
///
/// The sum of output frequencies always equals the number of input
/// occurrences. Sorting is stable, so equal-frequency sentences keep the
/// order they were first seen in.
pub fn aggregate_gaps(occurrences: &[GapOccurrence]) -> Vec<GapFrequency> {
    let mut by_sentence: HashMap<&str, usize> = HashMap::new();
    let mut frequencies: Vec<GapFrequency> = Vec::new();

    for occurrence in occurrences {
        let index = *by_sentence
            .entry(occurrence.sentence.as_str())
            .or_insert_with(|| {
                frequencies.push(GapFrequency {
                    sentence: occurrence.sentence.clone(),
                    frequency: 0,
                    sessions: BTreeSet::new(),
                    subjects: BTreeSet::new(),
                });
                frequencies.len() - 1
            });

        let entry = &mut frequencies[index];
        entry.frequency += 1;
        entry.sessions.insert(occurrence.session_id.clone());
        entry.subjects.insert(occurrence.subject.clone());
    }

    frequencies.sort_by(|a, b| b.frequency.cmp(&a.frequency));
    frequencies
}

/// Aggregate, restricted to gaps seen under the given subject.
///
/// Recomputed from the full occurrence list on every call; there is no
/// cache to invalidate.
pub fn filter_by_subject(occurrences: &[GapOccurrence], subject: &str) -> Vec<GapFrequency> {
    let mut frequencies = aggregate_gaps(occurrences);
    frequencies.retain(|g| g.subjects.contains(subject));
    frequencies
}
