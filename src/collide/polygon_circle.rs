use crate::body::Body;
use crate::collide::manifold::Manifold;
use crate::math::normalize_safe;
use crate::shape::Shape;
use crate::world::WorldConfig;

/// Circle-polygon dispatch: delegates to [`polygon_circle`] and negates the
/// resulting normal so it keeps pointing from `a` (the circle) to `b` (the
/// polygon), matching the dispatch's A-to-B normal convention.
pub(crate) fn circle_polygon(circle: &Body, polygon: &Body, config: &WorldConfig) -> Manifold {
    let mut m = polygon_circle(polygon, circle, config);
    m.normal = -m.normal;
    m
}

pub(crate) fn polygon_circle(polygon: &Body, circle: &Body, config: &WorldConfig) -> Manifold {
    let Shape::Circle { radius } = circle.shape else {
        unreachable!("polygon_circle called with a non-circle body")
    };
    let Shape::Polygon {
        vertices,
        face_normals,
    } = &polygon.shape
    else {
        unreachable!("polygon_circle called with a non-polygon body")
    };

    let mut m = Manifold::empty();
    let n = vertices.len();

    // Circle center in the polygon's local space.
    let center = polygon.rot.transpose() * (circle.pos - polygon.pos);

    // Find the face the center is furthest outside of (axis of least
    // penetration, from the polygon's perspective).
    let mut best_index = 0;
    let mut best_separation = f64::MIN;
    for i in 0..n {
        let separation = face_normals[i].dot(center - vertices[i]);
        if separation > radius {
            return m;
        }
        if separation > best_separation {
            best_separation = separation;
            best_index = i;
        }
    }

    let v1 = vertices[best_index];
    let v2 = vertices[(best_index + 1) % n];

    if best_separation < config.epsilon {
        // Center lies inside the polygon: escape along the nearest face's
        // outward normal, which is also the A-to-B direction here.
        m.contact_count = 1;
        m.normal = polygon.rot * face_normals[best_index];
        m.penetration = radius;
        m.contacts[0] = circle.pos - m.normal * radius;
        return m;
    }

    let to_v1 = center - v1;
    let to_v2 = center - v2;
    if to_v1.dot(v2 - v1) <= 0.0 {
        // Voronoi region of v1.
        if to_v1.length_squared() > radius * radius {
            return m;
        }
        m.contact_count = 1;
        let normal_local = normalize_safe(center - v1, config.epsilon);
        m.normal = polygon.rot * normal_local;
        m.contacts[0] = polygon.rot * v1 + polygon.pos;
    } else if to_v2.dot(v1 - v2) <= 0.0 {
        // Voronoi region of v2.
        if to_v2.length_squared() > radius * radius {
            return m;
        }
        m.contact_count = 1;
        let normal_local = normalize_safe(center - v2, config.epsilon);
        m.normal = polygon.rot * normal_local;
        m.contacts[0] = polygon.rot * v2 + polygon.pos;
    } else {
        // Face region.
        if to_v1.dot(face_normals[best_index]) > radius {
            return m;
        }
        m.contact_count = 1;
        m.normal = polygon.rot * face_normals[best_index];
        m.contacts[0] = circle.pos - m.normal * radius;
    }
    m.penetration = radius - best_separation;
    m
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::body::Material;
    use glam::DVec2;

    fn square(pos: DVec2, half: f64, is_static: bool) -> Body {
        Body::new(
            Shape::rectangle(half * 2.0, half * 2.0).unwrap(),
            pos,
            0.0,
            Material::default(),
            0,
            is_static,
        )
    }

    fn circle(pos: DVec2, radius: f64) -> Body {
        Body::new(
            Shape::Circle { radius },
            pos,
            0.0,
            Material::default(),
            0,
            false,
        )
    }

    #[test]
    fn circle_resting_on_face_contacts_once() {
        let floor = square(DVec2::new(0.0, -10.0), 50.0, true);
        let ball = circle(DVec2::new(0.0, 35.0), 10.0);
        let config = WorldConfig::default();
        let m = polygon_circle(&floor, &ball, &config);
        assert_eq!(m.contact_count, 1);
        assert!(m.normal.y > 0.0);
    }

    #[test]
    fn circle_far_from_polygon_has_no_contact() {
        let floor = square(DVec2::ZERO, 50.0, true);
        let ball = circle(DVec2::new(0.0, 500.0), 10.0);
        let config = WorldConfig::default();
        assert_eq!(polygon_circle(&floor, &ball, &config).contact_count, 0);
    }

    #[test]
    fn circle_polygon_negates_polygon_circle_normal() {
        let floor = square(DVec2::new(0.0, -10.0), 50.0, true);
        let ball = circle(DVec2::new(0.0, 35.0), 10.0);
        let config = WorldConfig::default();
        let direct = polygon_circle(&floor, &ball, &config);
        let flipped = circle_polygon(&ball, &floor, &config);
        assert!((direct.normal + flipped.normal).length() < 1e-9);
    }
}
