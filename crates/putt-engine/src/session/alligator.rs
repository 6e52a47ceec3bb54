//! The alligator: a transient hazard event that stalks idle balls.
//!
//! When a ball sits still near water long enough, one alligator (at most one
//! globally) emerges at the nearest water edge, bites, and submerges. The
//! bite consumes the ball exactly like a water hazard. All timing runs on
//! the session clock.

use glam::Vec2;

use crate::course::model::Hole;
use crate::physics::surface;
use crate::session::config::AlligatorConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlligatorState {
    Emerge,
    Bite,
    Submerge,
}

/// What a tick of the alligator produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlligatorTick {
    InProgress,
    /// The bite just landed; the caller applies the penalty.
    BiteLanded,
    /// Submerge complete; remove the alligator.
    Finished,
}

/// A live alligator. Destroyed after submerging.
#[derive(Debug, Clone)]
pub struct Alligator {
    pub pos: Vec2,
    /// Index of the targeted player.
    pub target: usize,
    pub state: AlligatorState,
    state_until: f64,
}

impl Alligator {
    /// Spawn in the emerge state at a water-edge position.
    pub fn spawn(pos: Vec2, target: usize, now: f64, config: &AlligatorConfig) -> Self {
        Self {
            pos,
            target,
            state: AlligatorState::Emerge,
            state_until: now + config.emerge_secs,
        }
    }

    /// Advance the animation state machine against the session clock.
    pub fn tick(&mut self, now: f64, config: &AlligatorConfig) -> AlligatorTick {
        if now < self.state_until {
            return AlligatorTick::InProgress;
        }
        match self.state {
            AlligatorState::Emerge => {
                self.state = AlligatorState::Bite;
                self.state_until = now + config.bite_secs;
                AlligatorTick::InProgress
            }
            AlligatorState::Bite => {
                self.state = AlligatorState::Submerge;
                self.state_until = now + config.submerge_secs;
                AlligatorTick::BiteLanded
            }
            AlligatorState::Submerge => AlligatorTick::Finished,
        }
    }
}

/// Where an alligator would surface for a ball at `p`: the closest water
/// boundary point, if the ball is within the proximity band (near water
/// but not in it, and not standing on a bridge).
pub fn spawn_point_near(hole: &Hole, p: Vec2, proximity: f32) -> Option<Vec2> {
    if surface::on_bridge(hole, p) || surface::in_water(hole, p) {
        return None;
    }
    let mut best: Option<(Vec2, f32)> = None;
    for water in &hole.waters {
        let (edge, dist) = water.boundary_distance(p);
        if dist <= proximity && best.map_or(true, |(_, d)| dist < d) {
            best = Some((edge, dist));
        }
    }
    best.map(|(edge, _)| edge)
}
