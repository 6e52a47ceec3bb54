//! Ghost-ball trajectory prediction for aim assist.
//!
//! Forward-simulates a cloned ball at full power along the aim angle using
//! the same integrator as live play. Never reads or writes real game state.

use glam::Vec2;

use crate::core::geom;
use crate::core::time::NOMINAL_SUBSTEP_SCALE;
use crate::physics::ball::Ball;
use crate::physics::step::{step_ball, Field, PhysicsTuning};

/// Simulation step budget per unit of max power.
pub const STEPS_PER_POWER_UNIT: f32 = 40.0;

/// A predicted shot path.
#[derive(Debug, Clone)]
pub struct Prediction {
    /// Ordered path points, starting at the ball's current position.
    pub points: Vec<Vec2>,
    /// True when the path reaches the cup; the final point is then snapped
    /// to the cup center. Recomputed every call, never persisted.
    pub holed: bool,
}

/// Predict the path of a full-power shot from `pos` along `aim_angle`
/// (radians). Terminates early when the ghost ball stops or the cup
/// captures it.
pub fn predict(pos: Vec2, aim_angle: f32, field: &Field, tuning: &PhysicsTuning) -> Prediction {
    let mut ghost = Ball::new(usize::MAX, pos, tuning.ball_radius);
    ghost.vel = Vec2::from_angle(aim_angle) * tuning.max_power;

    let steps = (tuning.max_power * STEPS_PER_POWER_UNIT) as usize;
    let cup = field.hole.cup_pos();
    let cup_radius = field.hole.cup_radius();

    let mut points = Vec::with_capacity(steps + 2);
    points.push(pos);

    for _ in 0..steps {
        step_ball(&mut ghost, field, tuning, NOMINAL_SUBSTEP_SCALE);

        if geom::distance(ghost.pos, cup) < cup_radius {
            points.push(cup);
            return Prediction { points, holed: true };
        }
        points.push(ghost.pos);

        if ghost.vel == Vec2::ZERO {
            break;
        }
    }

    Prediction { points, holed: false }
}
