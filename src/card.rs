//! Card model: typed board content and the in-memory store.
//!
//! A card is a positioned piece of content on the board. The five kinds form
//! a closed set; renderers and metadata accessors match on [`CardKind`]
//! exhaustively instead of sniffing a type string. Cards without an explicit
//! size fall back to a kind-specific default, which is what the geometry
//! helpers (`rect`, `center`) resolve against.

#[cfg(test)]
#[path = "card_test.rs"]
mod card_test;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::consts::DUPLICATE_OFFSET;
use crate::geom::{Point, Rect, Size};

/// Unique identifier for a card, stable for the card's lifetime.
pub type CardId = Uuid;

/// Sticky note color palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StickyColor {
    Pink,
    Yellow,
    Green,
    Purple,
    Blue,
    Orange,
}

/// Per-kind card payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum CardKind {
    /// Short sticky note.
    Sticky { color: StickyColor, text: String },
    /// Rich-text document card; the body is edited in a separate view.
    Paper { title: String, body: String },
    /// Uploaded image. `metadata` carries file name, size, and mime type.
    Image { source: String, metadata: serde_json::Value },
    /// Uploaded PDF document. `metadata` as for images.
    Pdf { source: String, metadata: serde_json::Value },
    /// External URL with its (stubbed) preview title.
    Link { url: String, title: String },
}

impl CardKind {
    /// Extent used when a card has no explicit width/height.
    #[must_use]
    pub fn default_size(&self) -> Size {
        match self {
            Self::Sticky { .. } => Size::new(180.0, 180.0),
            Self::Paper { .. } => Size::new(150.0, 100.0),
            Self::Image { .. } => Size::new(250.0, 180.0),
            Self::Pdf { .. } => Size::new(220.0, 260.0),
            Self::Link { .. } => Size::new(320.0, 120.0),
        }
    }
}

/// A positioned card. `x`/`y` are the top-left anchor in world coordinates.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Card {
    pub id: CardId,
    pub x: f64,
    pub y: f64,
    /// Explicit width in world units, if the card has been resized.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,
    /// Explicit height in world units, if the card has been resized.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
    #[serde(flatten)]
    pub kind: CardKind,
}

impl Card {
    /// Create a card with a fresh id at the given world position.
    #[must_use]
    pub fn new(kind: CardKind, x: f64, y: f64) -> Self {
        Self { id: Uuid::new_v4(), x, y, width: None, height: None, kind }
    }

    /// Resolved extent: explicit size if set, kind default otherwise.
    #[must_use]
    pub fn size(&self) -> Size {
        let default = self.kind.default_size();
        Size::new(
            self.width.unwrap_or(default.width),
            self.height.unwrap_or(default.height),
        )
    }

    /// World-space bounding box.
    #[must_use]
    pub fn rect(&self) -> Rect {
        Rect::from_origin_size(Point::new(self.x, self.y), self.size())
    }

    /// World-space geometric center (`anchor + size / 2`).
    #[must_use]
    pub fn center(&self) -> Point {
        self.rect().center()
    }
}

/// In-memory store of all cards on the board.
///
/// Insertion order is draw order: later cards render above earlier ones, and
/// hit-testing walks the store back to front.
pub struct CardStore {
    cards: Vec<Card>,
}

impl CardStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self { cards: Vec::new() }
    }

    /// Insert a card on top of the stack. A card with the same `id` is
    /// replaced in place, keeping its draw position.
    pub fn insert(&mut self, card: Card) {
        if let Some(existing) = self.cards.iter_mut().find(|c| c.id == card.id) {
            *existing = card;
        } else {
            self.cards.push(card);
        }
    }

    /// Remove a card by id, returning it if it was present.
    pub fn remove(&mut self, id: &CardId) -> Option<Card> {
        let index = self.cards.iter().position(|c| c.id == *id)?;
        Some(self.cards.remove(index))
    }

    #[must_use]
    pub fn get(&self, id: &CardId) -> Option<&Card> {
        self.cards.iter().find(|c| c.id == *id)
    }

    pub fn get_mut(&mut self, id: &CardId) -> Option<&mut Card> {
        self.cards.iter_mut().find(|c| c.id == *id)
    }

    /// Move a card's top-left anchor. Returns false if the id is unknown.
    pub fn set_position(&mut self, id: &CardId, x: f64, y: f64) -> bool {
        let Some(card) = self.get_mut(id) else {
            return false;
        };
        card.x = x;
        card.y = y;
        true
    }

    /// Give a card an explicit size. Returns false if the id is unknown.
    pub fn set_size(&mut self, id: &CardId, width: f64, height: f64) -> bool {
        let Some(card) = self.get_mut(id) else {
            return false;
        };
        card.width = Some(width);
        card.height = Some(height);
        true
    }

    /// Clone a card under a fresh id, offset down-right, on top of the
    /// stack. Returns the new id, or `None` if the source id is unknown.
    pub fn duplicate(&mut self, id: &CardId) -> Option<CardId> {
        let mut copy = self.get(id)?.clone();
        copy.id = Uuid::new_v4();
        copy.x += DUPLICATE_OFFSET;
        copy.y += DUPLICATE_OFFSET;
        let new_id = copy.id;
        self.cards.push(copy);
        Some(new_id)
    }

    /// Replace all cards with a full snapshot, keeping its order.
    pub fn load_snapshot(&mut self, cards: Vec<Card>) {
        self.cards = cards;
    }

    /// Cards in draw order (bottom to top).
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &Card> {
        self.cards.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

impl Default for CardStore {
    fn default() -> Self {
        Self::new()
    }
}
