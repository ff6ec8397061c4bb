//! Selection set and area-selection resolution.
//!
//! Membership is by card id; order is irrelevant. Area selection includes a
//! card when its geometric center falls inside the (normalized, boundary-
//! inclusive) world rectangle. An area resolution that matches nothing
//! leaves the prior selection untouched; a non-empty match replaces it.

#[cfg(test)]
#[path = "selection_test.rs"]
mod selection_test;

use std::collections::HashSet;

use crate::card::{CardId, CardStore};
use crate::geom::{Point, Rect};

/// The set of currently selected cards.
#[derive(Debug, Clone, Default)]
pub struct Selection {
    ids: HashSet<CardId>,
}

impl Selection {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn contains(&self, id: &CardId) -> bool {
        self.ids.contains(id)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Selected ids, in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = &CardId> {
        self.ids.iter()
    }

    /// Click selection. With `additive` (ctrl/meta held) the id is toggled;
    /// otherwise the selection is replaced by the single id. Returns whether
    /// the selection changed.
    pub fn select(&mut self, id: CardId, additive: bool) -> bool {
        if additive {
            if !self.ids.remove(&id) {
                self.ids.insert(id);
            }
            return true;
        }
        if self.ids.len() == 1 && self.ids.contains(&id) {
            return false;
        }
        self.ids.clear();
        self.ids.insert(id);
        true
    }

    /// Drop a single id from the selection, if present.
    pub fn deselect(&mut self, id: &CardId) -> bool {
        self.ids.remove(id)
    }

    /// Clear the selection. Returns whether it was non-empty.
    pub fn clear(&mut self) -> bool {
        if self.ids.is_empty() {
            return false;
        }
        self.ids.clear();
        true
    }

    /// Apply an area-selection result: a non-empty set replaces the current
    /// selection, an empty set leaves it untouched. Returns whether the
    /// selection changed.
    pub fn apply_area(&mut self, resolved: HashSet<CardId>) -> bool {
        if resolved.is_empty() || resolved == self.ids {
            return false;
        }
        self.ids = resolved;
        true
    }
}

/// Resolve an area selection: the ids of all cards whose center lies inside
/// the rectangle spanned by two arbitrary world-space corners.
#[must_use]
pub fn resolve_area(a: Point, b: Point, store: &CardStore) -> HashSet<CardId> {
    let rect = Rect::from_corners(a, b);
    store
        .iter()
        .filter(|card| rect.contains(card.center()))
        .map(|card| card.id)
        .collect()
}
