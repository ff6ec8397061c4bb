//! Input model: modifier keys, mouse buttons, and the gesture state machine.
//!
//! A gesture runs from pointer-down to pointer-up. At most one session is
//! active at a time by construction: the machine only leaves `Idle` on
//! pointer-down and always returns to it on pointer-up or escape. Each
//! active variant carries the fixed offset captured at gesture start, so
//! every move resolves against the original grab point rather than
//! accumulating per-frame deltas.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

use crate::card::CardId;
use crate::geom::Point;

/// Keyboard/mouse modifier keys held during an event.
#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Clone, Copy, Default)]
pub struct Modifiers {
    /// Shift key is held.
    pub shift: bool,
    /// Ctrl key is held.
    pub ctrl: bool,
    /// Alt / Option key is held.
    pub alt: bool,
    /// Meta / Command key is held.
    pub meta: bool,
}

impl Modifiers {
    /// Whether the platform multi-select modifier (ctrl or meta) is held.
    #[must_use]
    pub fn multi_select(&self) -> bool {
        self.ctrl || self.meta
    }
}

/// Mouse button identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Button {
    /// Left mouse button (or single-finger tap).
    Primary,
    /// Middle mouse button (scroll wheel click).
    Middle,
    /// Right mouse button (or two-finger tap).
    Secondary,
}

/// A keyboard key, named as the browser reports it (e.g. `"Escape"`, `"0"`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Key(pub String);

/// Wheel / trackpad scroll delta.
#[derive(Debug, Clone, Copy)]
pub struct WheelDelta {
    /// Horizontal scroll amount in pixels.
    pub dx: f64,
    /// Vertical scroll amount in pixels (positive = down).
    pub dy: f64,
}

/// The gesture state machine.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum GestureState {
    /// No gesture in progress; waiting for the next pointer-down.
    #[default]
    Idle,
    /// Dragging the canvas background to pan the viewport.
    Panning {
        /// Screen-space pointer position minus viewport translation at
        /// gesture start.
        grab: Point,
    },
    /// Dragging a card across the board.
    DraggingCard {
        /// Id of the card being dragged.
        id: CardId,
        /// World-space pointer position minus the card's anchor at gesture
        /// start.
        grab: Point,
    },
    /// Rubber-band area selection over the canvas background.
    SelectingArea {
        /// World-space corner where the drag started.
        start_world: Point,
        /// World-space pointer position at the most recent move.
        end_world: Point,
    },
}
