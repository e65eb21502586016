//! Categorical rollups
//!
//! Groups flat (category, value) pairs by category and accumulates the
//! values. Used for time-wasted-per-subject, study-minutes-per-subject and
//! similar bar-chart summaries. Output keeps first-occurrence order; the
//! caller re-sorts if it wants a ranking.

use serde::Serialize;
use std::collections::HashMap;

/// Accumulated values for one category.
#[derive(Debug, Clone, Serialize)]
pub struct CategoryTotal {
    /// The grouping key, e.g. a subject name
    pub category: String,
    /// Sum of values in the category
    pub total: f64,
    /// Number of records that contributed
    pub entries: i64,
}

impl CategoryTotal {
    /// Mean value per contributing record.
    pub fn mean(&self) -> f64 {
        if self.entries == 0 {
            0.0
        } else {
            self.total / self.entries as f64
        }
    }
}

/// Sum values per distinct category, in first-occurrence order.
pub fn rollup<I, S>(records: I) -> Vec<CategoryTotal>
where
    I: IntoIterator<Item = (S, f64)>,
    S: AsRef<str>,
{
    let mut by_category: HashMap<String, usize> = HashMap::new();
    let mut totals: Vec<CategoryTotal> = Vec::new();

    for (category, value) in records {
        let category = category.as_ref();
        let index = *by_category.entry(category.to_string()).or_insert_with(|| {
            totals.push(CategoryTotal {
                category: category.to_string(),
                total: 0.0,
                entries: 0,
            });
            totals.len() - 1
        });
        totals[index].total += value;
        totals[index].entries += 1;
    }

    totals
}
