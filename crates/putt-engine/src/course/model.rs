//! Course and hole data model.
//!
//! This is the declarative geometry authored by the external course editor
//! and consumed by the physics engine. Loaded from JSON wholesale; immutable
//! during play. Missing hazard arrays default to empty lists and missing
//! radii fall back to a fixed default, so a sparse hole degrades to an open
//! field instead of failing.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::core::geom;

fn default_marker_radius() -> f32 {
    15.0
}

fn default_par() -> u32 {
    3
}

/// A point in course space.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub fn to_vec2(self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }
}

/// A circular marker: the tee (start) or the cup (end).
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct CircleSpec {
    pub x: f32,
    pub y: f32,
    #[serde(default = "default_marker_radius")]
    pub radius: f32,
}

impl CircleSpec {
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }
}

/// An axis-aligned rectangle plus a rotation in degrees, applied around the
/// rect's center. World-space collision object, immutable per hole.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Wall {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    #[serde(default)]
    pub angle: f32,
}

impl Wall {
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    pub fn half_extents(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }

    /// Transform a world-space point into the wall's unrotated local frame
    /// (origin at the rect center).
    pub fn to_local(&self, p: Vec2) -> Vec2 {
        Vec2::from_angle(-self.angle.to_radians()).rotate(p - self.center())
    }

    /// Transform a local-frame point back into world space.
    pub fn to_world(&self, local: Vec2) -> Vec2 {
        Vec2::from_angle(self.angle.to_radians()).rotate(local) + self.center()
    }

    /// Rotated-rect containment of a point.
    pub fn contains(&self, p: Vec2) -> bool {
        let local = self.to_local(p);
        let he = self.half_extents();
        local.x.abs() <= he.x && local.y.abs() <= he.y
    }
}

/// A raised safe corridor over water. Same footprint fields as a wall; the
/// physics collides only with the two synthetic edge walls derived from it
/// at hole load, never with the rect itself.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Bridge {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    #[serde(default)]
    pub angle: f32,
}

impl Bridge {
    pub fn footprint(&self) -> Wall {
        Wall {
            x: self.x,
            y: self.y,
            width: self.width,
            height: self.height,
            angle: self.angle,
        }
    }

    /// Whether a position is covered by this bridge (and therefore exempt
    /// from the water hazard beneath it).
    pub fn covers(&self, p: Vec2) -> bool {
        self.footprint().contains(p)
    }
}

/// A circular obstacle that traps the ball until an unlock shot frees it.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Tree {
    pub x: f32,
    pub y: f32,
    pub radius: f32,
}

impl Tree {
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }
}

/// The shape of a hazard region. Authored JSON may spell a hazard as a
/// circle, an axis-aligned rect, or an arbitrary polygon; every hazard
/// category accepts all three.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum HazardShape {
    Circle {
        x: f32,
        y: f32,
        radius: f32,
    },
    Rect {
        x: f32,
        y: f32,
        width: f32,
        height: f32,
    },
    Polygon {
        points: Vec<Point>,
        /// Renderer hint: treat the boundary as a quadratic-smoothed loop
        /// through edge midpoints. Physics containment ignores this and
        /// always uses the raw vertices.
        #[serde(default)]
        smooth: bool,
    },
}

impl HazardShape {
    /// Containment test, dispatched on the shape tag.
    pub fn contains(&self, p: Vec2) -> bool {
        match self {
            HazardShape::Circle { x, y, radius } => {
                geom::distance(p, Vec2::new(*x, *y)) <= *radius
            }
            HazardShape::Rect { x, y, width, height } => {
                p.x >= *x && p.x <= x + width && p.y >= *y && p.y <= y + height
            }
            HazardShape::Polygon { points, .. } => {
                let verts: Vec<Vec2> = points.iter().map(|q| q.to_vec2()).collect();
                geom::point_in_polygon(p, &verts)
            }
        }
    }

    /// Closest point on the hazard's boundary to `p`, with its distance.
    /// Used for alligator spawn placement and proximity checks.
    pub fn boundary_distance(&self, p: Vec2) -> (Vec2, f32) {
        match self {
            HazardShape::Circle { x, y, radius } => {
                let center = Vec2::new(*x, *y);
                let offset = p - center;
                let dir = if offset.length_squared() < 1e-8 {
                    Vec2::X
                } else {
                    offset.normalize()
                };
                let boundary = center + dir * *radius;
                (boundary, geom::distance(p, boundary))
            }
            HazardShape::Rect { x, y, width, height } => {
                let min = Vec2::new(*x, *y);
                let max = Vec2::new(x + width, y + height);
                if p.x > min.x && p.x < max.x && p.y > min.y && p.y < max.y {
                    // Inside: project to the nearest edge.
                    let d_left = p.x - min.x;
                    let d_right = max.x - p.x;
                    let d_top = p.y - min.y;
                    let d_bottom = max.y - p.y;
                    let smallest = d_left.min(d_right).min(d_top).min(d_bottom);
                    let boundary = if smallest == d_left {
                        Vec2::new(min.x, p.y)
                    } else if smallest == d_right {
                        Vec2::new(max.x, p.y)
                    } else if smallest == d_top {
                        Vec2::new(p.x, min.y)
                    } else {
                        Vec2::new(p.x, max.y)
                    };
                    (boundary, smallest)
                } else {
                    let boundary = p.clamp(min, max);
                    (boundary, geom::distance(p, boundary))
                }
            }
            HazardShape::Polygon { points, .. } => {
                let verts: Vec<Vec2> = points.iter().map(|q| q.to_vec2()).collect();
                geom::closest_point_on_polygon(p, &verts)
            }
        }
    }
}

/// A boost pad: any hazard shape plus a facing angle in degrees. While a
/// ball overlaps the pad, its velocity is overridden toward the facing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Boost {
    #[serde(flatten)]
    pub shape: HazardShape,
    /// Facing angle in degrees, 0 = +X.
    #[serde(default)]
    pub angle: f32,
}

impl Boost {
    pub fn direction(&self) -> Vec2 {
        Vec2::from_angle(self.angle.to_radians())
    }
}

/// One hole of a course: par, tee, cup, and the obstacle/hazard lists.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Hole {
    #[serde(default = "default_par")]
    pub par: u32,
    pub start: CircleSpec,
    pub end: CircleSpec,
    #[serde(default)]
    pub walls: Vec<Wall>,
    #[serde(default)]
    pub waters: Vec<HazardShape>,
    #[serde(default)]
    pub sands: Vec<HazardShape>,
    #[serde(default)]
    pub ice: Vec<HazardShape>,
    #[serde(default)]
    pub boosts: Vec<Boost>,
    #[serde(default)]
    pub bridges: Vec<Bridge>,
    #[serde(default)]
    pub trees: Vec<Tree>,
}

impl Hole {
    /// Tee position.
    pub fn start_pos(&self) -> Vec2 {
        self.start.center()
    }

    /// Cup center.
    pub fn cup_pos(&self) -> Vec2 {
        self.end.center()
    }

    /// Cup capture radius.
    pub fn cup_radius(&self) -> f32 {
        self.end.radius
    }
}

/// A named, ordered list of holes. Loaded wholesale; immutable during play.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Course {
    #[serde(default)]
    pub name: String,
    pub holes: Vec<Hole>,
}

impl Course {
    /// Parse a course from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_minimal_hole() {
        let json = r#"{
            "name": "Test Links",
            "holes": [
                { "par": 2, "start": { "x": 50, "y": 100 }, "end": { "x": 400, "y": 100, "radius": 10 } }
            ]
        }"#;
        let course = Course::from_json(json).unwrap();
        assert_eq!(course.name, "Test Links");
        assert_eq!(course.holes.len(), 1);

        let hole = &course.holes[0];
        assert_eq!(hole.par, 2);
        // Missing start radius falls back to the default.
        assert!((hole.start.radius - 15.0).abs() < 1e-5);
        assert!((hole.cup_radius() - 10.0).abs() < 1e-5);
        // Missing hazard arrays default to empty, not an error.
        assert!(hole.walls.is_empty());
        assert!(hole.waters.is_empty());
        assert!(hole.bridges.is_empty());
    }

    #[test]
    fn parse_all_three_hazard_shapes() {
        let json = r#"{
            "holes": [{
                "start": { "x": 0, "y": 0 },
                "end": { "x": 100, "y": 0 },
                "waters": [
                    { "x": 10, "y": 10, "radius": 5 },
                    { "x": 20, "y": 20, "width": 8, "height": 4 },
                    { "points": [{"x":0,"y":0},{"x":10,"y":0},{"x":5,"y":10}], "smooth": true, "angle": 45 }
                ]
            }]
        }"#;
        let course = Course::from_json(json).unwrap();
        let waters = &course.holes[0].waters;
        assert_eq!(waters.len(), 3);
        assert!(matches!(waters[0], HazardShape::Circle { .. }));
        assert!(matches!(waters[1], HazardShape::Rect { .. }));
        match &waters[2] {
            HazardShape::Polygon { points, smooth } => {
                assert_eq!(points.len(), 3);
                assert!(*smooth);
            }
            other => panic!("expected Polygon, got {:?}", other),
        }
    }

    #[test]
    fn parse_boost_with_facing() {
        let json = r#"{
            "holes": [{
                "start": { "x": 0, "y": 0 },
                "end": { "x": 100, "y": 0 },
                "boosts": [{ "x": 40, "y": 0, "radius": 12, "angle": 90 }]
            }]
        }"#;
        let course = Course::from_json(json).unwrap();
        let boost = &course.holes[0].boosts[0];
        assert!((boost.angle - 90.0).abs() < 1e-5);
        let dir = boost.direction();
        assert!(dir.x.abs() < 1e-5 && (dir.y - 1.0).abs() < 1e-5, "dir was {:?}", dir);
        assert!(boost.shape.contains(Vec2::new(42.0, 3.0)));
    }

    #[test]
    fn hazard_containment_dispatch() {
        let circle = HazardShape::Circle { x: 0.0, y: 0.0, radius: 5.0 };
        assert!(circle.contains(Vec2::new(3.0, 0.0)));
        assert!(!circle.contains(Vec2::new(6.0, 0.0)));

        let rect = HazardShape::Rect { x: 0.0, y: 0.0, width: 10.0, height: 4.0 };
        assert!(rect.contains(Vec2::new(5.0, 2.0)));
        assert!(!rect.contains(Vec2::new(5.0, 5.0)));

        let poly = HazardShape::Polygon {
            points: vec![
                Point { x: 0.0, y: 0.0 },
                Point { x: 10.0, y: 0.0 },
                Point { x: 5.0, y: 10.0 },
            ],
            smooth: true,
        };
        // Smooth flag must not affect containment.
        assert!(poly.contains(Vec2::new(5.0, 2.0)));
        assert!(!poly.contains(Vec2::new(0.0, 9.0)));
    }

    #[test]
    fn rect_boundary_distance_from_inside() {
        let rect = HazardShape::Rect { x: 0.0, y: 0.0, width: 10.0, height: 10.0 };
        let (q, d) = rect.boundary_distance(Vec2::new(2.0, 5.0));
        assert!((q - Vec2::new(0.0, 5.0)).length() < 1e-5, "boundary was {:?}", q);
        assert!((d - 2.0).abs() < 1e-5);
    }

    #[test]
    fn circle_boundary_distance_at_center_is_defined() {
        let circle = HazardShape::Circle { x: 0.0, y: 0.0, radius: 5.0 };
        let (q, d) = circle.boundary_distance(Vec2::ZERO);
        assert!(q.x.is_finite() && q.y.is_finite());
        assert!((d - 5.0).abs() < 1e-5);
    }

    #[test]
    fn rotated_wall_containment() {
        // 20x4 wall centered at (10, 2), rotated 90 degrees: occupies
        // roughly x in [8,12], y in [-8,12].
        let wall = Wall { x: 0.0, y: 0.0, width: 20.0, height: 4.0, angle: 90.0 };
        assert!(wall.contains(Vec2::new(10.0, 10.0)));
        assert!(!wall.contains(Vec2::new(18.0, 2.0)));
    }

    #[test]
    fn wall_local_world_round_trip() {
        let wall = Wall { x: 5.0, y: 5.0, width: 30.0, height: 10.0, angle: 30.0 };
        let p = Vec2::new(17.0, 3.0);
        let round = wall.to_world(wall.to_local(p));
        assert!((round - p).length() < 1e-4, "round-trip was {:?}", round);
    }
}
