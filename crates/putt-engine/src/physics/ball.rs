//! The ball: the only mutable physics object.

use glam::Vec2;

/// Bush/tree trap state. A fresh tree traps the ball on first contact;
/// the next shot attempt unlocks it (costing a stroke, applying no
/// velocity), and the state re-arms once the ball is clear of every tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BushState {
    #[default]
    None,
    Stuck,
    Unlocked,
}

/// A player's ball. Created per player at hole load and repositioned, never
/// destroyed, between holes.
#[derive(Debug, Clone)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
    /// Index of the owning player.
    pub player: usize,
    /// Accumulated rolling distance, for the renderer's rolling texture.
    pub roll_offset: f32,
    pub bush_state: BushState,
}

impl Ball {
    pub fn new(player: usize, pos: Vec2, radius: f32) -> Self {
        Self {
            pos,
            vel: Vec2::ZERO,
            radius,
            player,
            roll_offset: 0.0,
            bush_state: BushState::None,
        }
    }

    /// Current speed (velocity magnitude).
    pub fn speed(&self) -> f32 {
        self.vel.length()
    }

    /// Whether the ball counts as stationary.
    pub fn is_stopped(&self, epsilon: f32) -> bool {
        self.speed() < epsilon
    }

    /// Reposition the ball with zero velocity (hole start, water reset).
    pub fn place(&mut self, pos: Vec2) {
        self.pos = pos;
        self.vel = Vec2::ZERO;
    }
}
