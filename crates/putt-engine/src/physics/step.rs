//! The per-substep integrator.
//!
//! `step_ball` advances one ball by one substep against a read-only view of
//! the current hole. It is a pure function of its arguments (no globals, no
//! audio, no score), which is what makes ghost-mode trajectory prediction a
//! matter of handing it a cloned ball.

use glam::Vec2;

use crate::course::model::{Hole, Wall};
use crate::physics::ball::{Ball, BushState};
use crate::physics::surface;
use crate::physics::walls::resolve_wall_collision;

/// Physics tuning constants. Constructed by the host session and passed in
/// explicitly; nothing in the engine reads ambient configuration.
#[derive(Debug, Clone)]
pub struct PhysicsTuning {
    pub ball_radius: f32,
    /// Per-frame velocity retention on plain turf.
    pub turf_friction: f32,
    /// Per-frame velocity retention on ice (slides further).
    pub ice_friction: f32,
    /// Per-frame velocity retention on sand (stops within roughly one
    /// hole's width at moderate speed).
    pub sand_friction: f32,
    /// Below this speed the ball snaps to a dead stop.
    pub stop_epsilon: f32,
    /// Wall bounce energy retention, < 1.
    pub restitution: f32,
    /// Conveyor speed a boost pad imposes.
    pub boost_speed: f32,
    /// Maximum shot power (initial speed at full charge).
    pub max_power: f32,
}

impl Default for PhysicsTuning {
    fn default() -> Self {
        Self {
            ball_radius: 8.0,
            turf_friction: 0.97,
            ice_friction: 0.995,
            sand_friction: 0.72,
            stop_epsilon: 0.05,
            restitution: 0.8,
            boost_speed: 12.0,
            max_power: 15.0,
        }
    }
}

/// Read-only view of one hole's geometry plus its derived walls.
#[derive(Clone, Copy)]
pub struct Field<'a> {
    pub hole: &'a Hole,
    pub derived_walls: &'a [Wall],
}

impl<'a> Field<'a> {
    pub fn new(hole: &'a Hole, derived_walls: &'a [Wall]) -> Self {
        Self { hole, derived_walls }
    }
}

/// What one substep observed about a ball. The caller applies penalties.
#[derive(Debug, Clone, Copy, Default)]
pub struct SubstepOutcome {
    /// Ball ended the substep inside water and not bridge-covered.
    pub in_water: bool,
    /// Ball contacted a wall (authored or derived) this substep.
    pub hit_wall: bool,
    /// Ball was trapped by a fresh tree this substep.
    pub entered_bush: bool,
}

/// Advance one ball by one substep. `scale` comes from
/// [`crate::core::time::FrameClock::substep_scale`].
pub fn step_ball(
    ball: &mut Ball,
    field: &Field,
    tuning: &PhysicsTuning,
    scale: f32,
) -> SubstepOutcome {
    let mut out = SubstepOutcome::default();

    // A trapped ball does not move; only the unlock shot frees it.
    if ball.bush_state == BushState::Stuck {
        return out;
    }

    // 1-2. Friction, modified by the surface under the ball.
    let friction = if surface::on_ice(field.hole, ball.pos) {
        tuning.ice_friction
    } else if surface::on_sand(field.hole, ball.pos) {
        tuning.sand_friction
    } else {
        tuning.turf_friction
    };
    ball.vel *= friction.powf(scale);
    if ball.vel.length() < tuning.stop_epsilon {
        ball.vel = Vec2::ZERO;
    }

    // 3. Boost pads override velocity toward their facing, every substep
    //    while inside. Continuous re-application is what produces the
    //    conveyor feel.
    if let Some(boost) = surface::active_boost(field.hole, ball.pos) {
        ball.vel = boost.direction() * tuning.boost_speed;
    }

    // 4. Integrate.
    let delta = ball.vel * scale;
    ball.pos += delta;
    ball.roll_offset += delta.length();

    // 5-6. Walls, authored and bridge-derived alike.
    for wall in field.hole.walls.iter().chain(field.derived_walls.iter()) {
        if resolve_wall_collision(ball, wall, tuning.restitution) {
            out.hit_wall = true;
        }
    }

    // 7. Trees: a fresh tree traps; an unlocked ball bounces off the trunk.
    let mut touching_tree = false;
    for tree in &field.hole.trees {
        let center = tree.center();
        let min_dist = tree.radius + ball.radius;
        let offset = ball.pos - center;
        let dist = offset.length();
        if dist >= min_dist {
            continue;
        }
        touching_tree = true;
        let normal = if dist < 1e-5 { Vec2::X } else { offset / dist };
        match ball.bush_state {
            BushState::None => {
                ball.pos = center + normal * min_dist;
                ball.vel = Vec2::ZERO;
                ball.bush_state = BushState::Stuck;
                out.entered_bush = true;
            }
            BushState::Unlocked => {
                ball.pos = center + normal * min_dist;
                let v_dot_n = ball.vel.dot(normal);
                if v_dot_n < 0.0 {
                    ball.vel -= normal * v_dot_n * (1.0 + tuning.restitution);
                }
            }
            BushState::Stuck => {}
        }
    }
    // Clear of every tree: the trap re-arms.
    if !touching_tree && ball.bush_state == BushState::Unlocked {
        ball.bush_state = BushState::None;
    }

    // 8. End-position water membership, minus bridge cover.
    if surface::in_water(field.hole, ball.pos) && !surface::on_bridge(field.hole, ball.pos) {
        out.in_water = true;
    }

    out
}

/// Advance every ball by one substep. Returns one outcome per ball, in
/// order; the caller applies water penalties.
pub fn step_balls(
    balls: &mut [Ball],
    field: &Field,
    tuning: &PhysicsTuning,
    scale: f32,
) -> Vec<SubstepOutcome> {
    balls
        .iter_mut()
        .map(|ball| step_ball(ball, field, tuning, scale))
        .collect()
}
