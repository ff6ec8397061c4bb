//! Top-level board engine: owns all mutable state and dispatches input.
//!
//! DESIGN
//! ======
//! The engine consolidates viewport, selection, card, and gesture state
//! behind one controller so the transform logic exists in exactly one place.
//! Input handlers return a vector of [`Action`]s for the host shell to
//! process (re-render, sync a status bar, persist a move); the engine never
//! renders and never talks to the outside world on its own.
//!
//! Drag resolution is drift-free: each gesture captures a fixed grab offset
//! at pointer-down and every subsequent move recomputes the absolute
//! position from that offset, never from the previous frame.

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

use crate::card::{Card, CardId, CardStore};
use crate::config::{ConfigError, EngineConfig};
use crate::consts::{
    BUTTON_ZOOM_IN, BUTTON_ZOOM_OUT, KEY_PAN_STEP, WHEEL_ZOOM_IN, WHEEL_ZOOM_OUT,
};
use crate::geom::{Point, Size};
use crate::hit;
use crate::input::{Button, GestureState, Key, Modifiers, WheelDelta};
use crate::minimap::MinimapProjection;
use crate::selection::{self, Selection};
use crate::viewport::Viewport;

/// Outcomes of an input event, for the host to process.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// The viewport transform changed; status bar and CSS transform are stale.
    ViewportChanged,
    /// Selection membership changed.
    SelectionChanged,
    /// A card's world position changed during a drag.
    CardMoved { id: CardId, x: f64, y: f64 },
    /// Something visual changed; the shell should schedule a redraw.
    RenderNeeded,
}

/// The board engine: single owner of viewport, cards, selection, and the
/// active gesture.
pub struct BoardEngine {
    pub store: CardStore,
    pub viewport: Viewport,
    pub selection: Selection,
    pub gesture: GestureState,
    /// Canvas container extent in pixels; pushed by the shell on resize.
    pub container: Size,
    config: EngineConfig,
}

impl Default for BoardEngine {
    fn default() -> Self {
        Self {
            store: CardStore::new(),
            viewport: Viewport::default(),
            selection: Selection::new(),
            gesture: GestureState::Idle,
            container: Size::new(0.0, 0.0),
            config: EngineConfig::default(),
        }
    }
}

impl BoardEngine {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an engine with a custom configuration.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if the configuration is invalid.
    pub fn with_config(config: EngineConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config, ..Self::default() })
    }

    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Update the container extent. Read on demand by transform operators,
    /// so the shell must push resizes promptly.
    pub fn set_container(&mut self, size: Size) {
        self.container = size;
    }

    // --- Card data ---

    /// Replace the board with a full snapshot.
    pub fn load_snapshot(&mut self, cards: Vec<Card>) {
        tracing::info!(cards = cards.len(), "board snapshot loaded");
        self.store.load_snapshot(cards);
        self.selection.clear();
        self.gesture = GestureState::Idle;
    }

    /// Add a card on top of the stack.
    pub fn insert_card(&mut self, card: Card) {
        self.store.insert(card);
    }

    /// Remove a card, dropping it from the selection as well. Unknown ids
    /// are ignored.
    pub fn remove_card(&mut self, id: &CardId) -> Vec<Action> {
        if self.store.remove(id).is_none() {
            return Vec::new();
        }
        let mut actions = vec![Action::RenderNeeded];
        if self.selection.deselect(id) {
            actions.push(Action::SelectionChanged);
        }
        if let GestureState::DraggingCard { id: drag_id, .. } = self.gesture {
            if drag_id == *id {
                self.gesture = GestureState::Idle;
            }
        }
        actions
    }

    /// Duplicate a card with a small offset. Unknown ids are ignored.
    pub fn duplicate_card(&mut self, id: &CardId) -> Option<CardId> {
        self.store.duplicate(id)
    }

    // --- Pointer events ---

    /// Handle pointer-down at a container-relative screen point.
    ///
    /// Primary button over a card selects it (ctrl/meta toggles) and starts
    /// a drag; over empty canvas it starts panning, or area selection when
    /// shift is held. Middle button always pans. Secondary is left to the
    /// shell (context menus).
    pub fn on_pointer_down(
        &mut self,
        screen_pt: Point,
        button: Button,
        modifiers: Modifiers,
    ) -> Vec<Action> {
        match button {
            Button::Secondary => Vec::new(),
            Button::Middle => {
                self.start_panning(screen_pt);
                vec![Action::RenderNeeded]
            }
            Button::Primary => self.primary_down(screen_pt, modifiers),
        }
    }

    fn primary_down(&mut self, screen_pt: Point, modifiers: Modifiers) -> Vec<Action> {
        let world = self.viewport.screen_to_world(screen_pt);
        if let Some(id) = hit::card_at(world, &self.store) {
            return self.card_down(id, world, modifiers);
        }
        if modifiers.shift {
            tracing::debug!("area selection started");
            self.gesture = GestureState::SelectingArea { start_world: world, end_world: world };
            return vec![Action::RenderNeeded];
        }
        self.start_panning(screen_pt);
        let mut actions = vec![Action::RenderNeeded];
        // Clicking empty canvas clears the selection.
        if self.selection.clear() {
            actions.push(Action::SelectionChanged);
        }
        actions
    }

    fn card_down(&mut self, id: CardId, world: Point, modifiers: Modifiers) -> Vec<Action> {
        let mut actions = Vec::new();
        if self.selection.select(id, modifiers.multi_select()) {
            actions.push(Action::SelectionChanged);
        }
        // Ctrl/meta-click only edits the selection; a plain press also
        // begins a drag session with the grab offset in world space.
        if !modifiers.multi_select() {
            if let Some(card) = self.store.get(&id) {
                tracing::debug!(card = %id, "card drag started");
                self.gesture = GestureState::DraggingCard {
                    id,
                    grab: Point::new(world.x - card.x, world.y - card.y),
                };
            }
        }
        actions.push(Action::RenderNeeded);
        actions
    }

    fn start_panning(&mut self, screen_pt: Point) {
        tracing::debug!("viewport pan started");
        self.gesture = GestureState::Panning {
            grab: Point::new(screen_pt.x - self.viewport.pan_x, screen_pt.y - self.viewport.pan_y),
        };
    }

    /// Handle pointer-move. Resolves the active gesture against the grab
    /// offset captured at pointer-down.
    pub fn on_pointer_move(&mut self, screen_pt: Point) -> Vec<Action> {
        match self.gesture {
            GestureState::Idle => Vec::new(),
            GestureState::Panning { grab } => {
                self.viewport.pan_x = screen_pt.x - grab.x;
                self.viewport.pan_y = screen_pt.y - grab.y;
                vec![Action::ViewportChanged, Action::RenderNeeded]
            }
            GestureState::DraggingCard { id, grab } => {
                let world = self.viewport.screen_to_world(screen_pt);
                let mut x = world.x - grab.x;
                let mut y = world.y - grab.y;
                if let Some(step) = self.config.snap_grid {
                    x = (x / step).round() * step;
                    y = (y / step).round() * step;
                }
                // A card deleted mid-gesture simply stops responding.
                if !self.store.set_position(&id, x, y) {
                    return Vec::new();
                }
                vec![Action::CardMoved { id, x, y }, Action::RenderNeeded]
            }
            GestureState::SelectingArea { start_world, .. } => {
                let end_world = self.viewport.screen_to_world(screen_pt);
                self.gesture = GestureState::SelectingArea { start_world, end_world };
                vec![Action::RenderNeeded]
            }
        }
    }

    /// Handle pointer-up: terminate the gesture. Drag positions are already
    /// committed by the last move; area selections resolve here.
    pub fn on_pointer_up(&mut self, screen_pt: Point) -> Vec<Action> {
        let ended = std::mem::take(&mut self.gesture);
        match ended {
            GestureState::Idle => Vec::new(),
            GestureState::Panning { .. } | GestureState::DraggingCard { .. } => {
                vec![Action::RenderNeeded]
            }
            GestureState::SelectingArea { start_world, .. } => {
                let end_world = self.viewport.screen_to_world(screen_pt);
                let resolved = selection::resolve_area(start_world, end_world, &self.store);
                tracing::debug!(matched = resolved.len(), "area selection resolved");
                let mut actions = Vec::new();
                if self.selection.apply_area(resolved) {
                    actions.push(Action::SelectionChanged);
                }
                actions.push(Action::RenderNeeded);
                actions
            }
        }
    }

    // --- Wheel ---

    /// Handle a wheel event. Ctrl/meta zooms at the cursor; a plain wheel
    /// pans opposite the scroll delta.
    pub fn on_wheel(
        &mut self,
        screen_pt: Point,
        delta: WheelDelta,
        modifiers: Modifiers,
    ) -> Vec<Action> {
        if modifiers.multi_select() {
            let factor = match delta.dy.partial_cmp(&0.0) {
                Some(std::cmp::Ordering::Less) => WHEEL_ZOOM_IN,
                Some(std::cmp::Ordering::Greater) => WHEEL_ZOOM_OUT,
                // Zero or NaN delta: no-op.
                _ => return Vec::new(),
            };
            return self.zoom_at(screen_pt, factor);
        }
        self.viewport.pan_by(-delta.dx, -delta.dy);
        vec![Action::ViewportChanged, Action::RenderNeeded]
    }

    // --- Keyboard ---

    /// Handle a key press: escape clears selection and cancels the active
    /// gesture, `0` resets the viewport, WASD pans.
    pub fn on_key_down(&mut self, key: &Key) -> Vec<Action> {
        match key.0.as_str() {
            "Escape" => {
                let cancelled = !matches!(self.gesture, GestureState::Idle);
                self.gesture = GestureState::Idle;
                let cleared = self.selection.clear();
                let mut actions = Vec::new();
                if cleared {
                    actions.push(Action::SelectionChanged);
                }
                if cancelled || cleared {
                    actions.push(Action::RenderNeeded);
                }
                actions
            }
            "0" => self.reset_view(),
            "w" => self.pan_view(0.0, KEY_PAN_STEP),
            "s" => self.pan_view(0.0, -KEY_PAN_STEP),
            "a" => self.pan_view(KEY_PAN_STEP, 0.0),
            "d" => self.pan_view(-KEY_PAN_STEP, 0.0),
            _ => Vec::new(),
        }
    }

    // --- Viewport operations ---

    /// Pan by a screen-space delta.
    pub fn pan_view(&mut self, dx: f64, dy: f64) -> Vec<Action> {
        self.viewport.pan_by(dx, dy);
        vec![Action::ViewportChanged, Action::RenderNeeded]
    }

    fn zoom_at(&mut self, anchor: Point, factor: f64) -> Vec<Action> {
        let before = self.viewport;
        self.viewport
            .zoom_at(anchor, factor, self.config.min_scale, self.config.max_scale);
        if self.viewport == before {
            return Vec::new();
        }
        vec![Action::ViewportChanged, Action::RenderNeeded]
    }

    /// Zoom one step in, anchored at the container center.
    pub fn zoom_in(&mut self) -> Vec<Action> {
        self.zoom_at(self.container_center(), BUTTON_ZOOM_IN)
    }

    /// Zoom one step out, anchored at the container center.
    pub fn zoom_out(&mut self) -> Vec<Action> {
        self.zoom_at(self.container_center(), BUTTON_ZOOM_OUT)
    }

    /// Reset the viewport to the identity transform.
    pub fn reset_view(&mut self) -> Vec<Action> {
        self.viewport.reset();
        vec![Action::ViewportChanged, Action::RenderNeeded]
    }

    /// Center the viewport on a card's geometric center, keeping the
    /// current scale. Unknown ids are ignored.
    pub fn center_on_card(&mut self, id: &CardId) -> Vec<Action> {
        let Some(card) = self.store.get(id) else {
            return Vec::new();
        };
        self.viewport.center_on(card.center(), self.container);
        vec![Action::ViewportChanged, Action::RenderNeeded]
    }

    fn container_center(&self) -> Point {
        Point::new(self.container.width / 2.0, self.container.height / 2.0)
    }

    // --- Minimap ---

    /// Current minimap projection, recomputed from the card store.
    #[must_use]
    pub fn minimap(&self) -> MinimapProjection {
        MinimapProjection::compute(&self.store, self.config.minimap_size)
    }

    /// Navigate from a click at a minimap pixel: recenter the viewport on
    /// the corresponding world point, preserving the current scale.
    pub fn on_minimap_click(&mut self, minimap_pt: Point) -> Vec<Action> {
        let world = self.minimap().minimap_to_world(minimap_pt);
        self.viewport.center_on(world, self.container);
        vec![Action::ViewportChanged, Action::RenderNeeded]
    }

    // --- Queries ---

    /// Zoom level for the status bar, in percent.
    #[must_use]
    pub fn zoom_percent(&self) -> f64 {
        (self.viewport.scale * 100.0).round()
    }

    /// CSS transform string for the canvas layer.
    #[must_use]
    pub fn css_transform(&self) -> String {
        self.viewport.css_transform()
    }
}
