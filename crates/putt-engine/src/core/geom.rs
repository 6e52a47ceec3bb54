//! Geometry utilities shared by collision resolution and hazard checks.
//! Pure functions, no state.

use glam::Vec2;

/// Euclidean distance between two points.
pub fn distance(a: Vec2, b: Vec2) -> f32 {
    a.distance(b)
}

/// Ray-casting parity test over the polygon's straight edges.
/// Smoothing flags on authored polygons are a rendering concern only;
/// containment always uses the raw vertices.
pub fn point_in_polygon(p: Vec2, poly: &[Vec2]) -> bool {
    if poly.len() < 3 {
        return false;
    }
    let mut inside = false;
    let mut j = poly.len() - 1;
    for i in 0..poly.len() {
        let a = poly[i];
        let b = poly[j];
        // Edge crosses the horizontal ray through p. The parity test only
        // enters this branch when a.y != b.y, so the division is safe.
        if (a.y > p.y) != (b.y > p.y) {
            let t = (p.y - a.y) / (b.y - a.y);
            let cross_x = a.x + t * (b.x - a.x);
            if p.x < cross_x {
                inside = !inside;
            }
        }
        j = i;
    }
    inside
}

/// Closest point on the segment `a..b` to `p`.
/// The denominator is clamped so a zero-length segment returns `a` instead
/// of NaN.
pub fn closest_point_on_segment(p: Vec2, a: Vec2, b: Vec2) -> Vec2 {
    let ab = b - a;
    let len_sq = ab.length_squared();
    if len_sq < 1e-8 {
        return a;
    }
    let t = ((p - a).dot(ab) / len_sq).clamp(0.0, 1.0);
    a + ab * t
}

/// Closest point on the polygon's boundary to `p`, with its distance.
/// Iterates every edge and takes the minimum. Single-point "polygons"
/// degrade to that point; an empty polygon reports an infinite distance.
pub fn closest_point_on_polygon(p: Vec2, poly: &[Vec2]) -> (Vec2, f32) {
    if poly.is_empty() {
        return (p, f32::INFINITY);
    }
    if poly.len() == 1 {
        return (poly[0], distance(p, poly[0]));
    }
    let mut best = poly[0];
    let mut best_dist = f32::INFINITY;
    for i in 0..poly.len() {
        let a = poly[i];
        let b = poly[(i + 1) % poly.len()];
        let candidate = closest_point_on_segment(p, a, b);
        let d = distance(p, candidate);
        if d < best_dist {
            best = candidate;
            best_dist = d;
        }
    }
    (best, best_dist)
}

/// Distance from a point to an axis-aligned rect given by its min/max
/// corners: 0 inside, else distance to the nearest edge or corner.
pub fn point_rect_distance(p: Vec2, min: Vec2, max: Vec2) -> f32 {
    let clamped = p.clamp(min, max);
    distance(p, clamped)
}
