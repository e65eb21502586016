//! Configuration loading and management
//!
//! Configuration is loaded from `~/.config/prepscope/config.toml`
//!
//! This module follows the XDG Base Directory Specification:
//! - Config: `$XDG_CONFIG_HOME/prepscope/` (~/.config/prepscope/)
//! - State/Logs: `$XDG_STATE_HOME/prepscope/` (~/.local/state/prepscope/)
//!
//! The analytics thresholds here are the calibration and trend "magic
//! numbers" that the dashboard widgets share. They ship with the defaults
//! the product was designed around, but every one of them is a tunable:
//! the binner, the trend classifier, and the focus calculator all read
//! from [`AnalyticsConfig`] rather than hard-coding values.

use crate::error::{Error, Result};
use serde::Deserialize;
use std::path::PathBuf;

/// Returns a best-effort home directory path.
fn home_dir() -> PathBuf {
    std::env::var_os("HOME")
        .map(PathBuf::from)
        .or_else(dirs::home_dir)
        .unwrap_or_else(|| PathBuf::from("."))
}

/// Returns XDG_CONFIG_HOME or ~/.config
fn xdg_config_home() -> PathBuf {
    std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| home_dir().join(".config"))
}

/// Returns XDG_STATE_HOME or ~/.local/state
fn xdg_state_home() -> PathBuf {
    std::env::var("XDG_STATE_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| home_dir().join(".local/state"))
}

/// Main configuration struct
#[derive(Debug, Deserialize, Default)]
pub struct Config {
    /// Analytics thresholds and constants
    #[serde(default)]
    pub analytics: AnalyticsConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Analytics thresholds and time-model constants.
#[derive(Debug, Clone, Deserialize)]
pub struct AnalyticsConfig {
    /// Max calibration gap (percentage points) still counted as well calibrated
    #[serde(default = "default_calibration_gap_pct")]
    pub calibration_gap_pct: f64,

    /// Slopes with |slope| below this band are classified as stable
    #[serde(default = "default_trend_stability_band")]
    pub trend_stability_band: f64,

    /// Slopes at or beyond this magnitude are classified as steep
    #[serde(default = "default_trend_steep_threshold")]
    pub trend_steep_threshold: f64,

    /// Modeled time cost per practice question, in minutes
    /// (1 min solve + 0.5 min follow-ups + 3 min revision resources)
    #[serde(default = "default_minutes_per_pyq")]
    pub minutes_per_pyq: f64,

    /// Multiplier applied to the deep-work ratio when deriving the focus
    /// score. Deliberately > 1: a motivational boost, capped at 100.
    #[serde(default = "default_focus_boost")]
    pub focus_boost: f64,
}

impl Default for AnalyticsConfig {
    fn default() -> Self {
        Self {
            calibration_gap_pct: default_calibration_gap_pct(),
            trend_stability_band: default_trend_stability_band(),
            trend_steep_threshold: default_trend_steep_threshold(),
            minutes_per_pyq: default_minutes_per_pyq(),
            focus_boost: default_focus_boost(),
        }
    }
}

impl AnalyticsConfig {
    /// Validate configuration, returning error message if invalid
    pub fn validate(&self) -> Result<()> {
        if !(0.0..=100.0).contains(&self.calibration_gap_pct) {
            return Err(Error::Config(
                "analytics.calibration_gap_pct must be between 0 and 100".to_string(),
            ));
        }
        if self.trend_stability_band < 0.0 {
            return Err(Error::Config(
                "analytics.trend_stability_band must be non-negative".to_string(),
            ));
        }
        if self.trend_steep_threshold < self.trend_stability_band {
            return Err(Error::Config(
                "analytics.trend_steep_threshold must be >= trend_stability_band".to_string(),
            ));
        }
        if self.minutes_per_pyq <= 0.0 {
            return Err(Error::Config(
                "analytics.minutes_per_pyq must be positive".to_string(),
            ));
        }
        if self.focus_boost < 1.0 {
            return Err(Error::Config(
                "analytics.focus_boost must be at least 1.0".to_string(),
            ));
        }
        Ok(())
    }
}

fn default_calibration_gap_pct() -> f64 {
    15.0
}

fn default_trend_stability_band() -> f64 {
    0.1
}

fn default_trend_steep_threshold() -> f64 {
    0.5
}

fn default_minutes_per_pyq() -> f64 {
    4.5
}

fn default_focus_boost() -> f64 {
    1.2
}

/// Logging configuration
#[derive(Debug, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Config {
    /// Load configuration from the default path
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path();

        if !config_path.exists() {
            tracing::info!("No config file found at {:?}, using defaults", config_path);
            return Ok(Config::default());
        }

        Self::load_from(&config_path)
    }

    /// Load configuration from a specific path
    pub fn load_from(path: &PathBuf) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("failed to read config file {:?}: {}", path, e)))?;

        let config: Config = toml::from_str(&content)
            .map_err(|e| Error::Config(format!("failed to parse config: {}", e)))?;

        config.analytics.validate()?;

        Ok(config)
    }

    /// Returns the default config file path
    ///
    /// `$XDG_CONFIG_HOME/prepscope/config.toml` (~/.config/prepscope/config.toml)
    pub fn config_path() -> PathBuf {
        xdg_config_home().join("prepscope").join("config.toml")
    }

    /// Returns the state directory path (for logs)
    ///
    /// `$XDG_STATE_HOME/prepscope/` (~/.local/state/prepscope/)
    pub fn state_dir() -> PathBuf {
        xdg_state_home().join("prepscope")
    }

    /// Returns the log file path
    ///
    /// `$XDG_STATE_HOME/prepscope/prepscope.log`
    pub fn log_path() -> PathBuf {
        Self::state_dir().join("prepscope.log")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.analytics.calibration_gap_pct, 15.0);
        assert_eq!(config.analytics.trend_stability_band, 0.1);
        assert_eq!(config.analytics.trend_steep_threshold, 0.5);
        assert_eq!(config.analytics.minutes_per_pyq, 4.5);
        assert_eq!(config.analytics.focus_boost, 1.2);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_parse_config() {
        let toml = r#"
[analytics]
calibration_gap_pct = 10.0
minutes_per_pyq = 5.0

[logging]
level = "debug"
"#;
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.analytics.calibration_gap_pct, 10.0);
        assert_eq!(config.analytics.minutes_per_pyq, 5.0);
        // Unspecified fields keep their defaults
        assert_eq!(config.analytics.trend_stability_band, 0.1);
        assert_eq!(config.logging.level, "debug");
    }

    #[test]
    fn test_validate_rejects_bad_thresholds() {
        let config = AnalyticsConfig {
            calibration_gap_pct: 150.0,
            ..Default::default()
        };
        assert!(config.validate().is_err());

        let config = AnalyticsConfig {
            minutes_per_pyq: 0.0,
            ..Default::default()
        };
        assert!(config.validate().is_err());

        let config = AnalyticsConfig {
            trend_steep_threshold: 0.05,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[analytics]\nfocus_boost = 1.5\n").unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.analytics.focus_boost, 1.5);
    }
}
