//! Minimap projection: a bounded small-scale view of all board content.
//!
//! The projection maps world space into a fixed-size minimap rectangle while
//! preserving aspect ratio, and back again for click-to-navigate. It is
//! recomputed from the card store on demand; it holds no state of its own
//! beyond the derived bounds and scale.

#[cfg(test)]
#[path = "minimap_test.rs"]
mod minimap_test;

use crate::card::{CardId, CardStore};
use crate::consts::{EMPTY_BOARD_EXTENT, MIN_CONTENT_EXTENT, MINIMAP_MARGIN};
use crate::geom::{Point, Rect, Size};
use crate::viewport::Viewport;

/// Axis-aligned bounding box of all card anchors, expanded by a fixed
/// margin. An empty board yields a symmetric default extent so downstream
/// divisions stay finite.
#[must_use]
pub fn content_bounds(store: &CardStore) -> Rect {
    if store.is_empty() {
        return Rect {
            min: Point::new(-EMPTY_BOARD_EXTENT, -EMPTY_BOARD_EXTENT),
            max: Point::new(EMPTY_BOARD_EXTENT, EMPTY_BOARD_EXTENT),
        };
    }
    let mut min = Point::new(f64::INFINITY, f64::INFINITY);
    let mut max = Point::new(f64::NEG_INFINITY, f64::NEG_INFINITY);
    for card in store.iter() {
        min.x = min.x.min(card.x);
        min.y = min.y.min(card.y);
        max.x = max.x.max(card.x);
        max.y = max.y.max(card.y);
    }
    Rect {
        min: Point::new(min.x - MINIMAP_MARGIN, min.y - MINIMAP_MARGIN),
        max: Point::new(max.x + MINIMAP_MARGIN, max.y + MINIMAP_MARGIN),
    }
}

/// A computed world → minimap mapping, valid until the card set changes.
#[derive(Debug, Clone, Copy)]
pub struct MinimapProjection {
    bounds: Rect,
    scale: f64,
    minimap: Size,
}

impl MinimapProjection {
    /// Compute the projection for the current board content.
    ///
    /// `minimap` is the on-screen minimap extent in pixels. The scale is
    /// the tighter of the two axis ratios, so content is never distorted;
    /// degenerate content extents are widened to a minimum before dividing.
    #[must_use]
    pub fn compute(store: &CardStore, minimap: Size) -> Self {
        let bounds = content_bounds(store);
        let content_w = bounds.width().max(MIN_CONTENT_EXTENT);
        let content_h = bounds.height().max(MIN_CONTENT_EXTENT);
        let scale = (minimap.width / content_w).min(minimap.height / content_h);
        Self { bounds, scale, minimap }
    }

    #[must_use]
    pub fn scale(&self) -> f64 {
        self.scale
    }

    #[must_use]
    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    /// Map a world point to minimap pixel coordinates.
    #[must_use]
    pub fn world_to_minimap(&self, world: Point) -> Point {
        Point {
            x: (world.x - self.bounds.min.x) * self.scale,
            y: (world.y - self.bounds.min.y) * self.scale,
        }
    }

    /// Map a minimap pixel back to world coordinates. Exact inverse of
    /// [`Self::world_to_minimap`].
    #[must_use]
    pub fn minimap_to_world(&self, minimap: Point) -> Point {
        Point {
            x: minimap.x / self.scale + self.bounds.min.x,
            y: minimap.y / self.scale + self.bounds.min.y,
        }
    }

    /// Projected card anchors for the minimap dots, in draw order.
    #[must_use]
    pub fn card_dots(&self, store: &CardStore) -> Vec<(CardId, Point)> {
        store
            .iter()
            .map(|card| (card.id, self.world_to_minimap(Point::new(card.x, card.y))))
            .collect()
    }

    /// The viewport's visible world rectangle projected into the minimap.
    ///
    /// The rectangle's size reflects the true zoom level (capped at the
    /// minimap extent); only its position is clamped so the indicator never
    /// renders outside the minimap.
    #[must_use]
    pub fn indicator(&self, viewport: &Viewport, container: Size) -> Rect {
        let visible = viewport.visible_world_rect(container);
        let origin = self.world_to_minimap(visible.min);
        let width = (visible.width() * self.scale).min(self.minimap.width);
        let height = (visible.height() * self.scale).min(self.minimap.height);
        let x = origin.x.clamp(0.0, self.minimap.width - width);
        let y = origin.y.clamp(0.0, self.minimap.height - height);
        Rect::from_origin_size(Point::new(x, y), Size::new(width, height))
    }
}
