//! Shared numeric constants for the pinboard engine.

// ── Viewport ────────────────────────────────────────────────────

/// Minimum viewport scale (zoom-out limit).
pub const MIN_SCALE: f64 = 0.05;

/// Maximum viewport scale (zoom-in limit).
pub const MAX_SCALE: f64 = 3.0;

/// Scale factor applied per wheel notch when zooming in.
pub const WHEEL_ZOOM_IN: f64 = 1.1;

/// Scale factor applied per wheel notch when zooming out.
pub const WHEEL_ZOOM_OUT: f64 = 0.9;

/// Scale factor for the zoom-in control button.
pub const BUTTON_ZOOM_IN: f64 = 1.2;

/// Scale factor for the zoom-out control button.
pub const BUTTON_ZOOM_OUT: f64 = 0.8;

/// Screen-space pan distance per WASD key press, in pixels.
pub const KEY_PAN_STEP: f64 = 50.0;

// ── Minimap ─────────────────────────────────────────────────────

/// Margin added around the content bounding box, in world units.
pub const MINIMAP_MARGIN: f64 = 500.0;

/// Symmetric content extent assumed when the board has no cards.
pub const EMPTY_BOARD_EXTENT: f64 = 1000.0;

/// Smallest content extent fed into the projection-scale division.
pub const MIN_CONTENT_EXTENT: f64 = 1.0;

/// Default minimap width in pixels.
pub const MINIMAP_WIDTH: f64 = 120.0;

/// Default minimap height in pixels.
pub const MINIMAP_HEIGHT: f64 = 100.0;

// ── Cards ───────────────────────────────────────────────────────

/// World-unit offset applied to a duplicated card.
pub const DUPLICATE_OFFSET: f64 = 20.0;
