//! Hazard membership queries for a ball position.
//!
//! Membership is recomputed from the authored hazard lists on every call,
//! once per substep, and never cached, so the physics can never act on
//! stale hazard state.

use glam::Vec2;

use crate::course::model::{Boost, Hole};

/// Whether the position is inside any water hazard. Bridge cover is checked
/// separately by the caller; this is raw containment.
pub fn in_water(hole: &Hole, p: Vec2) -> bool {
    hole.waters.iter().any(|w| w.contains(p))
}

/// Whether the position is inside any sand hazard.
pub fn on_sand(hole: &Hole, p: Vec2) -> bool {
    hole.sands.iter().any(|s| s.contains(p))
}

/// Whether the position is inside any ice hazard.
pub fn on_ice(hole: &Hole, p: Vec2) -> bool {
    hole.ice.iter().any(|i| i.contains(p))
}

/// Whether the position is covered by any bridge (exempt from water).
pub fn on_bridge(hole: &Hole, p: Vec2) -> bool {
    hole.bridges.iter().any(|b| b.covers(p))
}

/// The first boost pad containing the position, if any.
pub fn active_boost<'a>(hole: &'a Hole, p: Vec2) -> Option<&'a Boost> {
    hole.boosts.iter().find(|b| b.shape.contains(p))
}
