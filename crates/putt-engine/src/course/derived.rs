//! Synthetic walls derived from bridges at hole load.
//!
//! A bridge is a hazard-exempt corridor: the ball collides with its two long
//! edges, not with the bridge rect itself. The derived walls are stored
//! separately from the authored wall list so the authored geometry stays
//! untouched and inspectable.

use glam::Vec2;

use super::model::{Bridge, Hole, Wall};

/// Thickness of a synthetic bridge edge wall.
pub const BRIDGE_EDGE_THICKNESS: f32 = 4.0;

/// The two long-edge walls of a bridge, rotated with it.
/// Each edge wall is centered on the bridge's long boundary line and carries
/// the bridge's rotation angle (applied around the edge wall's own center).
pub fn bridge_edge_walls(bridge: &Bridge) -> [Wall; 2] {
    let t = BRIDGE_EDGE_THICKNESS;
    let center = bridge.footprint().center();
    let rot = Vec2::from_angle(bridge.angle.to_radians());

    // The long edges run along the larger dimension.
    let (edge_w, edge_h, local_offset) = if bridge.width >= bridge.height {
        (bridge.width, t, Vec2::new(0.0, bridge.height / 2.0))
    } else {
        (t, bridge.height, Vec2::new(bridge.width / 2.0, 0.0))
    };

    let make = |sign: f32| {
        let edge_center = center + rot.rotate(local_offset * sign);
        Wall {
            x: edge_center.x - edge_w / 2.0,
            y: edge_center.y - edge_h / 2.0,
            width: edge_w,
            height: edge_h,
            angle: bridge.angle,
        }
    };

    [make(-1.0), make(1.0)]
}

/// Build the full derived wall list for a hole. Runs once per hole load.
pub fn build_derived_walls(hole: &Hole) -> Vec<Wall> {
    hole.bridges
        .iter()
        .flat_map(|bridge| bridge_edge_walls(bridge))
        .collect()
}
