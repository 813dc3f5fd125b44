//! Tunable constants of cell growth.

use crate::error::{MorphoError, Result};
use serde::{Deserialize, Serialize};

/// How symbol expression translates into cell traits and gemmation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GrowthConfig {
    /// Degrees turned per turn promoter.
    #[serde(default = "default_turn_factor")]
    pub turn_factor: f64,
    /// Width multiplier per widen promoter.
    #[serde(default = "default_width_factor")]
    pub width_factor: f64,
    /// Height multiplier per rise promoter.
    #[serde(default = "default_height_factor")]
    pub height_factor: f64,
    /// Morphogen total a root stem must exceed to gem.
    #[serde(default = "default_gem_threshold")]
    pub gem_threshold: f64,
    /// Per-generation multiplier of the gem threshold.
    #[serde(default = "default_threshold_growth")]
    pub threshold_growth: f64,
    /// Strength of the generation morphogen per generation.
    #[serde(default = "default_generation_scale")]
    pub generation_scale: f64,
    /// No new cells are created once a body has this many.
    #[serde(default = "default_cells_limit")]
    pub cells_limit: usize,
}

fn default_turn_factor() -> f64 { 5.0 }
fn default_width_factor() -> f64 { 1.1 }
fn default_height_factor() -> f64 { 1.1 }
fn default_gem_threshold() -> f64 { 7.0 }
fn default_threshold_growth() -> f64 { 1.02 }
fn default_generation_scale() -> f64 { 0.5 }
fn default_cells_limit() -> usize { 50 }

impl Default for GrowthConfig {
    fn default() -> Self {
        Self {
            turn_factor: default_turn_factor(),
            width_factor: default_width_factor(),
            height_factor: default_height_factor(),
            gem_threshold: default_gem_threshold(),
            threshold_growth: default_threshold_growth(),
            generation_scale: default_generation_scale(),
            cells_limit: default_cells_limit(),
        }
    }
}

impl GrowthConfig {
    pub fn with_cells_limit(mut self, cells_limit: usize) -> Self {
        self.cells_limit = cells_limit;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.cells_limit == 0 {
            return Err(MorphoError::invalid_config(
                "cells_limit",
                "0",
                "a body needs room for its root cell",
            ));
        }
        for (field, value) in [
            ("width_factor", self.width_factor),
            ("height_factor", self.height_factor),
            ("threshold_growth", self.threshold_growth),
        ] {
            if !(value.is_finite() && value > 0.0) {
                return Err(MorphoError::invalid_config(
                    field,
                    value.to_string(),
                    "must be a positive number",
                ));
            }
        }
        for (field, value) in [
            ("turn_factor", self.turn_factor),
            ("gem_threshold", self.gem_threshold),
            ("generation_scale", self.generation_scale),
        ] {
            if !value.is_finite() {
                return Err(MorphoError::invalid_config(
                    field,
                    value.to_string(),
                    "must be finite",
                ));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_documented_constants() {
        let g = GrowthConfig::default();
        assert_eq!(g.turn_factor, 5.0);
        assert_eq!(g.gem_threshold, 7.0);
        assert_eq!(g.threshold_growth, 1.02);
        assert_eq!(g.generation_scale, 0.5);
        assert_eq!(g.cells_limit, 50);
        g.validate().unwrap();
    }

    #[test]
    fn zero_cells_limit_is_rejected() {
        assert!(GrowthConfig::default().with_cells_limit(0).validate().is_err());
    }

    #[test]
    fn partial_json_fills_defaults() {
        let g: GrowthConfig = serde_json::from_str(r#"{"cells_limit": 12}"#).unwrap();
        assert_eq!(g.cells_limit, 12);
        assert_eq!(g.width_factor, 1.1);
    }
}
