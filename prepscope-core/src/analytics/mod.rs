//! Analytics module for prepscope
//!
//! Pure data-transformation functions that turn raw study logs into
//! chart-ready summaries:
//! - Confidence calibration binning and scoring
//! - Daily/weekly time-series grouping
//! - Trend slope and correlation estimators
//! - Deep-work ratio and focus scoring
//! - Knowledge-gap frequency aggregation
//! - Categorical rollups
//! - Mistake Recurrence Index ranking
//!
//! Every function here is synchronous, deterministic, and free of shared
//! state: outputs are a pure function of the input slice plus the
//! configured thresholds. Re-invoking on every render is safe and cheap.
//!
//! See [`overview`] for the composition that feeds the report CLI.

pub mod calibration;
pub mod focus;
pub mod gaps;
pub mod mistakes;
pub mod overview;
pub mod rollup;
pub mod stats;
pub mod timeseries;

pub use calibration::{bin_confidence, summarize_calibration, CalibrationSummary, ConfidenceBin};
pub use focus::{daily_focus, focus_by_day, focus_trend, DailyFocus};
pub use gaps::{aggregate_gaps, filter_by_subject, GapFrequency};
pub use mistakes::{mri, rank_mistakes, MistakePriority};
pub use overview::{generate_overview, FocusDay, StudyOverview};
pub use rollup::{rollup, CategoryTotal};
pub use stats::{correlation, is_steep, slope, Trend};
pub use timeseries::{group_by_day, group_by_week, DaySummary, WeekSummary};
