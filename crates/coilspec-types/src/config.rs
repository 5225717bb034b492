// ─────────────────────────────────────────────────────────────────────
// SCPN Coil Spectra — Config
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_SUCCESS_THRESHOLD, WINDOW_FLOOR, WINDOW_SHAPE_PARAM};
use crate::error::{CoilSpecError, CoilSpecResult};

/// Knobs of the spectral scoring pipeline.
/// Every field is optional in JSON; absent fields fall back to the
/// documented constants so a plain `{}` file is a valid configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetricConfig {
    /// Kaiser shape parameter of the suppression window.
    #[serde(default = "default_window_shape")]
    pub window_shape: f64,
    /// Background floor of the variant-B weighting mask.
    #[serde(default = "default_window_floor")]
    pub window_floor: f64,
    /// Cutoff on the residual-to-target ratio for the success filter.
    #[serde(default = "default_success_threshold")]
    pub success_threshold: f64,
}

fn default_window_shape() -> f64 {
    WINDOW_SHAPE_PARAM
}
fn default_window_floor() -> f64 {
    WINDOW_FLOOR
}
fn default_success_threshold() -> f64 {
    DEFAULT_SUCCESS_THRESHOLD
}

impl Default for MetricConfig {
    fn default() -> Self {
        MetricConfig {
            window_shape: default_window_shape(),
            window_floor: default_window_floor(),
            success_threshold: default_success_threshold(),
        }
    }
}

impl MetricConfig {
    /// Load from a JSON file.
    pub fn from_file(path: &str) -> CoilSpecResult<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject parameter combinations the window construction cannot represent.
    pub fn validate(&self) -> CoilSpecResult<()> {
        if !self.window_shape.is_finite() || self.window_shape <= 0.0 {
            return Err(CoilSpecError::ConfigError(format!(
                "window_shape must be finite and positive, got {}",
                self.window_shape
            )));
        }
        if !self.window_floor.is_finite() || self.window_floor <= 0.0 {
            return Err(CoilSpecError::ConfigError(format!(
                "window_floor must be finite and positive, got {}",
                self.window_floor
            )));
        }
        if !self.success_threshold.is_finite() || self.success_threshold < 0.0 {
            return Err(CoilSpecError::ConfigError(format!(
                "success_threshold must be finite and non-negative, got {}",
                self.success_threshold
            )));
        }
        Ok(())
    }
}
