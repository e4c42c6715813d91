use glam::DVec2;

use crate::body::Body;
use crate::collide::manifold::Manifold;
use crate::shape::Shape;

pub(crate) fn circle_circle(a: &Body, b: &Body) -> Manifold {
    let Shape::Circle { radius: ra } = a.shape else {
        unreachable!("circle_circle called with a non-circle body")
    };
    let Shape::Circle { radius: rb } = b.shape else {
        unreachable!("circle_circle called with a non-circle body")
    };

    let mut m = Manifold::empty();
    let n = b.pos - a.pos;
    let r = ra + rb;
    let dist_sq = n.length_squared();
    if dist_sq >= r * r {
        return m;
    }

    let d = dist_sq.sqrt();
    m.contact_count = 1;
    if d == 0.0 {
        // Coincident centers: deterministic fallback, per spec's
        // DegenerateCollision handling.
        m.normal = DVec2::X;
        m.penetration = ra;
        m.contacts[0] = a.pos;
    } else {
        m.normal = n / d;
        m.penetration = r - d;
        m.contacts[0] = a.pos + m.normal * ra;
    }
    m
}
