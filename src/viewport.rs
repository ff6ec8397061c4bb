//! Viewport transform: the single source of truth for pan/zoom state.
//!
//! The viewport is an affine transform mapping world space to screen space:
//! `screen = world * scale + (pan_x, pan_y)`. Every other component (drag
//! resolution, area selection, the minimap) converts through this transform
//! rather than keeping coordinates of its own.

#[cfg(test)]
#[path = "viewport_test.rs"]
mod viewport_test;

use std::cmp::Ordering;

use crate::geom::{Point, Rect, Size};

/// Pan/zoom state for the infinite canvas.
///
/// `pan_x` / `pan_y` are the screen-space offset of the world origin from the
/// container origin, in CSS pixels. `scale` is a uniform factor, always
/// positive; callers clamp it through [`Viewport::zoom_at`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub pan_x: f64,
    pub pan_y: f64,
    pub scale: f64,
}

impl Default for Viewport {
    fn default() -> Self {
        Self { pan_x: 0.0, pan_y: 0.0, scale: 1.0 }
    }
}

impl Viewport {
    /// Convert a container-relative screen point to world coordinates.
    #[must_use]
    pub fn screen_to_world(&self, screen: Point) -> Point {
        Point {
            x: (screen.x - self.pan_x) / self.scale,
            y: (screen.y - self.pan_y) / self.scale,
        }
    }

    /// Convert a world point to container-relative screen coordinates.
    #[must_use]
    pub fn world_to_screen(&self, world: Point) -> Point {
        Point {
            x: world.x * self.scale + self.pan_x,
            y: world.y * self.scale + self.pan_y,
        }
    }

    /// Translate by a screen-space delta. Scale is untouched.
    pub fn pan_by(&mut self, dx: f64, dy: f64) {
        self.pan_x += dx;
        self.pan_y += dy;
    }

    /// Zoom by `factor` keeping the world point under `anchor` (a screen
    /// point) visually fixed.
    ///
    /// The scale is clamped to `[min_scale, max_scale]` before the
    /// translation is adjusted, so repeated calls at a bound leave the
    /// viewport untouched instead of drifting. Non-finite or non-positive
    /// factors are a no-op.
    pub fn zoom_at(&mut self, anchor: Point, factor: f64, min_scale: f64, max_scale: f64) {
        if !factor.is_finite() || factor <= 0.0 {
            return;
        }
        let new_scale = (self.scale * factor).clamp(min_scale, max_scale);
        if new_scale.total_cmp(&self.scale) == Ordering::Equal {
            return;
        }
        let ratio = new_scale / self.scale;
        self.pan_x = anchor.x - (anchor.x - self.pan_x) * ratio;
        self.pan_y = anchor.y - (anchor.y - self.pan_y) * ratio;
        self.scale = new_scale;
    }

    /// Reset to the identity transform.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Recenter the container on `world`, keeping the current scale.
    pub fn center_on(&mut self, world: Point, container: Size) {
        self.pan_x = container.width / 2.0 - world.x * self.scale;
        self.pan_y = container.height / 2.0 - world.y * self.scale;
    }

    /// The world rectangle currently visible in a container of the given
    /// size.
    #[must_use]
    pub fn visible_world_rect(&self, container: Size) -> Rect {
        let min = self.screen_to_world(Point::new(0.0, 0.0));
        let max = self.screen_to_world(Point::new(container.width, container.height));
        Rect { min, max }
    }

    /// CSS transform string applied by the shell to the canvas layer,
    /// with `transform-origin: 0 0`.
    #[must_use]
    pub fn css_transform(&self) -> String {
        format!("translate({}px, {}px) scale({})", self.pan_x, self.pan_y, self.scale)
    }
}
