//! Hit-testing against board cards.

#[cfg(test)]
#[path = "hit_test.rs"]
mod hit_test;

use crate::card::{CardId, CardStore};
use crate::geom::Point;

/// The topmost card whose bounding box contains `world_pt`, if any.
///
/// Cards are checked back to front so overlapping cards resolve to the one
/// drawn last. Boundaries are inclusive, matching area selection.
#[must_use]
pub fn card_at(world_pt: Point, store: &CardStore) -> Option<CardId> {
    store
        .iter()
        .rev()
        .find(|card| card.rect().contains(world_pt))
        .map(|card| card.id)
}
