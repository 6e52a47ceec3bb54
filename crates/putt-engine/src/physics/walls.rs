//! Circle vs. rotated-rectangle collision resolution.

use glam::Vec2;

use crate::course::model::Wall;
use crate::physics::ball::Ball;

/// Resolve a ball against one wall. Returns `true` if there was contact.
///
/// The ball is transformed into the wall's unrotated local frame, resolved
/// as circle-vs-AABB (push out along the axis of minimum penetration,
/// reflect the corresponding velocity component with restitution < 1),
/// then transformed back. Deep penetration from fast shots resolves along
/// the larger-magnitude axis automatically, since that face is nearer.
/// There is no swept collision check; substeps keep penetration small at
/// the game's speed ranges.
pub fn resolve_wall_collision(ball: &mut Ball, wall: &Wall, restitution: f32) -> bool {
    let local_pos = wall.to_local(ball.pos);
    let he = wall.half_extents();
    // Expanded extents: the ball center must stay outside this box.
    let ex = he.x + ball.radius;
    let ey = he.y + ball.radius;

    if local_pos.x.abs() >= ex || local_pos.y.abs() >= ey {
        return false;
    }

    let rot_inv = Vec2::from_angle(-wall.angle.to_radians());
    let rot = Vec2::from_angle(wall.angle.to_radians());
    let mut local_vel = rot_inv.rotate(ball.vel);
    let mut resolved = local_pos;

    let pen_x = ex - local_pos.x.abs();
    let pen_y = ey - local_pos.y.abs();

    if pen_x < pen_y {
        let side = if local_pos.x >= 0.0 { 1.0 } else { -1.0 };
        resolved.x = ex * side;
        // Only reflect when moving into the wall.
        if local_vel.x * side < 0.0 {
            local_vel.x = -local_vel.x * restitution;
        }
    } else {
        let side = if local_pos.y >= 0.0 { 1.0 } else { -1.0 };
        resolved.y = ey * side;
        if local_vel.y * side < 0.0 {
            local_vel.y = -local_vel.y * restitution;
        }
    }

    ball.pos = wall.to_world(resolved);
    ball.vel = rot.rotate(local_vel);
    true
}
