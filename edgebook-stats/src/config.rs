//! Analytics configuration — boundary tables and histogram sizing.
//!
//! Defaults match the dashboard's fixed constants; a host can override them
//! from TOML. Validation happens at construction so the reducers never see
//! a malformed table.

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Default duration band boundaries, in minutes.
pub const DEFAULT_DURATION_BOUNDS: [f64; 5] = [5.0, 15.0, 60.0, 240.0, 720.0];

/// Default risk band boundaries, in percent of account.
pub const DEFAULT_RISK_BOUNDS: [f64; 2] = [1.0, 2.5];

/// Default number of win bins in the R-multiple histogram.
pub const DEFAULT_WIN_HISTOGRAM_BINS: usize = 10;

/// Default target bin count for the P&L butterfly histogram.
pub const DEFAULT_PNL_HISTOGRAM_TARGET_BINS: usize = 10;

/// Errors from loading or validating an analytics configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("band table must not be empty")]
    EmptyBands,
    #[error("band boundaries must be positive and strictly ascending")]
    NonAscendingBands,
    #[error("histogram bin count must be at least 1")]
    ZeroBins,
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
}

/// An ordered table of upper boundaries defining `len + 1` bands:
/// `[0, b0), [b0, b1), .., [b_last, ∞)`.
///
/// Bands are matched by index, never by label; `labels` renders the display
/// strings from the table in exactly one place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<f64>", into = "Vec<f64>")]
pub struct Bands {
    upper_bounds: Vec<f64>,
}

impl Bands {
    /// Build a table, rejecting empty or non-ascending boundary lists.
    pub fn new(upper_bounds: Vec<f64>) -> Result<Self, ConfigError> {
        if upper_bounds.is_empty() {
            return Err(ConfigError::EmptyBands);
        }
        let ascending = upper_bounds
            .windows(2)
            .all(|w| w[0] < w[1]);
        if !ascending || upper_bounds[0] <= 0.0 || upper_bounds.iter().any(|b| !b.is_finite()) {
            return Err(ConfigError::NonAscendingBands);
        }
        Ok(Self { upper_bounds })
    }

    /// Number of bands, including the final unbounded one.
    pub fn band_count(&self) -> usize {
        self.upper_bounds.len() + 1
    }

    /// Band index for a value; `None` for negative or non-finite input.
    pub fn classify(&self, value: f64) -> Option<usize> {
        if !value.is_finite() || value < 0.0 {
            return None;
        }
        Some(
            self.upper_bounds
                .iter()
                .position(|&b| value < b)
                .unwrap_or(self.upper_bounds.len()),
        )
    }

    /// Display labels, one per band: `"0-5m"`, `"5-15m"`, .., `">720m"`.
    pub fn labels(&self, unit: &str) -> Vec<String> {
        let mut labels = Vec::with_capacity(self.band_count());
        let mut lower = 0.0;
        for &upper in &self.upper_bounds {
            labels.push(format!("{}-{}{}", fmt_bound(lower), fmt_bound(upper), unit));
            lower = upper;
        }
        labels.push(format!(">{}{}", fmt_bound(lower), unit));
        labels
    }
}

impl TryFrom<Vec<f64>> for Bands {
    type Error = ConfigError;

    fn try_from(upper_bounds: Vec<f64>) -> Result<Self, Self::Error> {
        Self::new(upper_bounds)
    }
}

impl From<Bands> for Vec<f64> {
    fn from(bands: Bands) -> Self {
        bands.upper_bounds
    }
}

fn fmt_bound(bound: f64) -> String {
    if bound.fract() == 0.0 {
        format!("{}", bound as i64)
    } else {
        format!("{bound}")
    }
}

/// Tunables for the bucketing reducers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyticsConfig {
    /// Duration bands, minutes.
    pub duration_bands: Bands,
    /// Risk bands, percent of account.
    pub risk_bands: Bands,
    /// Win bin count for the R-multiple histogram.
    pub win_histogram_bins: usize,
    /// Target bin count for the P&L butterfly histogram.
    pub pnl_histogram_target_bins: usize,
}

impl Default for AnalyticsConfig {
    fn default() -> Self {
        Self {
            duration_bands: Bands::new(DEFAULT_DURATION_BOUNDS.to_vec())
                .expect("default duration bands are valid"),
            risk_bands: Bands::new(DEFAULT_RISK_BOUNDS.to_vec())
                .expect("default risk bands are valid"),
            win_histogram_bins: DEFAULT_WIN_HISTOGRAM_BINS,
            pnl_histogram_target_bins: DEFAULT_PNL_HISTOGRAM_TARGET_BINS,
        }
    }
}

impl AnalyticsConfig {
    /// Parse from a TOML string. Missing keys fall back to the defaults.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Load from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        Self::from_toml_str(&std::fs::read_to_string(path)?)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.win_histogram_bins == 0 || self.pnl_histogram_target_bins == 0 {
            return Err(ConfigError::ZeroBins);
        }
        Ok(())
    }
}
