//! Players and their per-hole bookkeeping.

use glam::Vec2;

use crate::physics::ball::Ball;

/// A ball/player tint for the renderer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BallColor {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl BallColor {
    pub const WHITE: BallColor = BallColor { r: 1.0, g: 1.0, b: 1.0 };
}

/// Host-supplied player description.
#[derive(Debug, Clone)]
pub struct PlayerDef {
    pub name: String,
    pub color: BallColor,
}

impl PlayerDef {
    pub fn named(name: &str) -> Self {
        Self {
            name: name.to_string(),
            color: BallColor::WHITE,
        }
    }
}

/// A participant in the session. At most one player is active (receiving
/// input) at a time; single-player and challenge modes have exactly one.
#[derive(Debug, Clone)]
pub struct Player {
    pub name: String,
    pub color: BallColor,
    pub ball: Ball,
    pub strokes_this_hole: u32,
    pub total_strokes: u32,
    pub finished_hole: bool,
    /// Multiplayer staggered start: the ball is only placed on the hole
    /// when the player takes their first turn.
    pub has_started_hole: bool,
    /// Current aim angle in radians.
    pub aim_angle: f32,
}

impl Player {
    pub fn new(index: usize, def: PlayerDef, start: Vec2, ball_radius: f32) -> Self {
        Self {
            name: def.name,
            color: def.color,
            ball: Ball::new(index, start, ball_radius),
            strokes_this_hole: 0,
            total_strokes: 0,
            finished_hole: false,
            has_started_hole: false,
            aim_angle: 0.0,
        }
    }

    /// Reset per-hole state for a new hole. Cumulative totals persist.
    pub fn reset_for_hole(&mut self, start: Vec2) {
        self.strokes_this_hole = 0;
        self.finished_hole = false;
        self.has_started_hole = false;
        self.aim_angle = 0.0;
        self.ball.bush_state = Default::default();
        self.ball.place(start);
    }
}
