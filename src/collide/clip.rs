//! Sutherland-Hodgman clipping of a single edge against a half-plane, used
//! to trim the incident face down to the reference face's side planes.

use glam::DVec2;
use smallvec::SmallVec;

/// Clips the edge `(p1, p2)` against the half-plane `{x : n . x <= c}`,
/// returning the surviving endpoints (0, 1, or 2 of them). A well-formed
/// clip against a single plane never yields more than 2 points; only a
/// result of exactly 2 is useful to the caller (polygon-polygon SAT).
pub fn clip_segment(n: DVec2, c: f64, p1: DVec2, p2: DVec2) -> SmallVec<[DVec2; 2]> {
    let mut out = SmallVec::new();
    let d1 = n.dot(p1) - c;
    let d2 = n.dot(p2) - c;

    if d1 <= 0.0 {
        out.push(p1);
    }
    if d2 <= 0.0 {
        out.push(p2);
    }
    if d1 * d2 < 0.0 {
        let t = d1 / (d1 - d2);
        out.push(p1 + t * (p2 - p1));
    }
    out
}
