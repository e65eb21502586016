//! # prepscope-core
//!
//! Core library for prepscope - study analytics for exam prep.
//!
//! This library provides:
//! - Domain types for attempts, sessions, mistakes, and knowledge gaps
//! - A validated JSON dataset boundary
//! - Pure aggregation functions behind every dashboard widget
//! - Configuration management
//! - Logging infrastructure
//!
//! ## Architecture
//!
//! Data flows one way: a raw JSON dataset is loaded and validated once
//! ([`StudyDataset`]), each aggregator in [`analytics`] derives a summary
//! from it, and the summaries are handed to whatever renders them. There
//! is no persistence and no mutation; every derived value is recomputed
//! from the dataset on demand.
//!
//! ## Example
//!
//! ```rust,no_run
//! use prepscope_core::{analytics, Config, StudyDataset};
//!
//! let config = Config::load().expect("failed to load config");
//! let dataset = StudyDataset::load("study.json".as_ref()).expect("failed to load dataset");
//!
//! let overview = analytics::generate_overview(&dataset, &config.analytics, None)
//!     .expect("failed to generate overview");
//! println!("{:?}", overview.calibration.overall_calibration);
//! ```

// Re-export commonly used items at the crate root
pub use config::Config;
pub use dataset::StudyDataset;
pub use error::{Error, Result};
pub use types::*;

// Public modules
pub mod analytics;
pub mod config;
pub mod dataset;
pub mod error;
pub mod format;
pub mod logging;
pub mod types;
