//! Engine tuning knobs and their validation.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use crate::consts::{MAX_SCALE, MIN_SCALE, MINIMAP_HEIGHT, MINIMAP_WIDTH};
use crate::geom::Size;

/// Invalid engine configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("scale bounds must satisfy 0 < min <= max, got {min}..{max}")]
    InvalidScaleBounds { min: f64, max: f64 },
    #[error("snap grid must be positive and finite, got {0}")]
    InvalidSnapGrid(f64),
    #[error("minimap size must be positive, got {width}x{height}")]
    InvalidMinimapSize { width: f64, height: f64 },
}

/// Engine configuration, validated once at construction.
///
/// The scale bounds are the single clamp range used by every zoom
/// operation; individual call sites never supply their own limits.
#[derive(Debug, Clone, Copy)]
pub struct EngineConfig {
    /// Zoom-out limit, exclusive lower bound zero.
    pub min_scale: f64,
    /// Zoom-in limit.
    pub max_scale: f64,
    /// Snap dragged cards to multiples of this world-unit step when set.
    /// Never applied to viewport panning.
    pub snap_grid: Option<f64>,
    /// On-screen minimap extent in pixels.
    pub minimap_size: Size,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            min_scale: MIN_SCALE,
            max_scale: MAX_SCALE,
            snap_grid: None,
            minimap_size: Size::new(MINIMAP_WIDTH, MINIMAP_HEIGHT),
        }
    }
}

impl EngineConfig {
    /// Check the configuration invariants.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] describing the first violated invariant.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.min_scale.is_finite()
            || !self.max_scale.is_finite()
            || self.min_scale <= 0.0
            || self.min_scale > self.max_scale
        {
            return Err(ConfigError::InvalidScaleBounds {
                min: self.min_scale,
                max: self.max_scale,
            });
        }
        if let Some(step) = self.snap_grid {
            if !step.is_finite() || step <= 0.0 {
                return Err(ConfigError::InvalidSnapGrid(step));
            }
        }
        if !self.minimap_size.width.is_finite()
            || !self.minimap_size.height.is_finite()
            || self.minimap_size.width <= 0.0
            || self.minimap_size.height <= 0.0
        {
            return Err(ConfigError::InvalidMinimapSize {
                width: self.minimap_size.width,
                height: self.minimap_size.height,
            });
        }
        Ok(())
    }
}
