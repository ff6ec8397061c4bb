//! Viewport and coordinate-transform engine for an infinite-canvas pinboard.
//!
//! The engine is a pure state+math layer: the host UI shell feeds it pointer,
//! wheel, and keyboard events plus the container geometry, and reads back the
//! viewport transform, the selection set, and minimap projections to produce
//! visual output. The engine itself renders nothing and performs no I/O.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | Top-level [`engine::BoardEngine`] and the action vocabulary |
//! | [`card`] | Card types and the in-memory card store |
//! | [`viewport`] | Pan/zoom transform and coordinate conversions |
//! | [`input`] | Input event types and the gesture state machine |
//! | [`selection`] | Selection set and area-selection resolution |
//! | [`minimap`] | Bounded small-scale projection of board content |
//! | [`hit`] | Hit-testing cards under a world-space point |
//! | [`config`] | Engine tuning knobs and their validation |
//! | [`geom`] | Points, sizes, and axis-aligned rectangles |
//! | [`consts`] | Shared numeric constants (zoom limits, minimap margins, etc.) |

pub mod card;
pub mod config;
pub mod consts;
pub mod engine;
pub mod geom;
pub mod hit;
pub mod input;
pub mod minimap;
pub mod selection;
pub mod viewport;
