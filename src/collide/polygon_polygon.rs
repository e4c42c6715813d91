use glam::DVec2;

use crate::body::Body;
use crate::collide::clip::clip_segment;
use crate::collide::manifold::Manifold;
use crate::math::normalize_safe;
use crate::shape::Shape;
use crate::world::WorldConfig;

pub(crate) fn polygon_polygon(a: &Body, b: &Body, config: &WorldConfig) -> Manifold {
    let mut m = Manifold::empty();

    let (face_a, pen_a) = axis_of_least_penetration(a, b);
    if pen_a >= 0.0 {
        return m;
    }
    let (face_b, pen_b) = axis_of_least_penetration(b, a);
    if pen_b >= 0.0 {
        return m;
    }

    let flip = greater(pen_b, pen_a, config);
    let (reference, incident, ref_face) = if flip { (b, a, face_b) } else { (a, b, face_a) };

    let Shape::Polygon {
        vertices: ref_verts,
        face_normals: ref_normals,
    } = &reference.shape
    else {
        unreachable!("polygon_polygon called with a non-polygon body")
    };
    let Shape::Polygon {
        vertices: inc_verts,
        face_normals: inc_normals,
    } = &incident.shape
    else {
        unreachable!("polygon_polygon called with a non-polygon body")
    };

    let ref_normal_world = reference.rot * ref_normals[ref_face];

    // Incident face: whichever edge of `incident` has the outward normal
    // most anti-aligned with the reference face's world-space normal.
    let mut incident_face = 0;
    let mut min_dot = f64::MAX;
    for i in 0..inc_normals.len() {
        let dot = ref_normal_world.dot(incident.rot * inc_normals[i]);
        if dot < min_dot {
            min_dot = dot;
            incident_face = i;
        }
    }
    let inc_n = inc_verts.len();
    let mut iv1 = incident.pos + incident.rot * inc_verts[incident_face];
    let mut iv2 = incident.pos + incident.rot * inc_verts[(incident_face + 1) % inc_n];

    let ref_n = ref_verts.len();
    let rv1 = reference.pos + reference.rot * ref_verts[ref_face];
    let rv2 = reference.pos + reference.rot * ref_verts[(ref_face + 1) % ref_n];

    let tangent = normalize_safe(rv2 - rv1, config.epsilon);
    let nref = DVec2::new(tangent.y, -tangent.x);

    let clipped = clip_segment(-tangent, -tangent.dot(rv1), iv1, iv2);
    if clipped.len() < 2 {
        return m;
    }
    iv1 = clipped[0];
    iv2 = clipped[1];
    let clipped = clip_segment(tangent, tangent.dot(rv2), iv1, iv2);
    if clipped.len() < 2 {
        return m;
    }

    let ref_dot = nref.dot(rv1);
    let mut count = 0;
    let mut penetration_sum = 0.0;
    for &p in clipped.iter() {
        let separation = nref.dot(p) - ref_dot;
        if separation <= 0.0 {
            m.contacts[count] = p;
            penetration_sum += -separation;
            count += 1;
        }
    }
    if count == 0 {
        return m;
    }

    m.contact_count = count;
    m.penetration = penetration_sum / count as f64;
    m.normal = if flip { -nref } else { nref };
    m
}

/// For each face of `a`, measures how deeply `b`'s deepest-penetrating
/// vertex lies past that face's plane, in `b`'s local space. Returns the
/// face index and the signed distance of the least-penetrating (closest to
/// disjoint) face; a non-negative result means the bodies are separated.
fn axis_of_least_penetration(a: &Body, b: &Body) -> (usize, f64) {
    let Shape::Polygon {
        vertices: a_verts,
        face_normals: a_normals,
    } = &a.shape
    else {
        unreachable!("axis_of_least_penetration called with a non-polygon body")
    };
    let Shape::Polygon {
        vertices: b_verts,
        face_normals: _,
    } = &b.shape
    else {
        unreachable!("axis_of_least_penetration called with a non-polygon body")
    };

    let mut best_index = 0;
    let mut best_distance = f64::MIN;
    for i in 0..a_verts.len() {
        let n_world = a.rot * a_normals[i];
        let n_b = b.rot.transpose() * n_world;

        let support = b_verts
            .iter()
            .copied()
            .max_by(|p, q| (p.dot(-n_b)).total_cmp(&q.dot(-n_b)))
            .expect("polygon has at least one vertex");

        let v = b.rot.transpose() * (a.rot * a_verts[i] + a.pos - b.pos);
        let d = n_b.dot(support - v);
        if d > best_distance {
            best_distance = d;
            best_index = i;
        }
    }
    (best_index, best_distance)
}

/// True if `a` should be preferred over `b` as the SAT reference face,
/// within the relative/absolute hysteresis band that keeps the reference
/// from flickering between two near-equal penetrations frame to frame.
fn greater(a: f64, b: f64, config: &WorldConfig) -> bool {
    a > b * config.bias_relative + a * config.bias_absolute
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::body::Material;

    fn square(pos: DVec2, half: f64, angle: f64, is_static: bool) -> Body {
        Body::new(
            Shape::rectangle(half * 2.0, half * 2.0).unwrap(),
            pos,
            angle,
            Material::default(),
            0,
            is_static,
        )
    }

    #[test]
    fn disjoint_squares_have_no_contact() {
        let a = square(DVec2::ZERO, 1.0, 0.0, true);
        let b = square(DVec2::new(10.0, 0.0), 1.0, 0.0, false);
        let config = WorldConfig::default();
        assert_eq!(polygon_polygon(&a, &b, &config).contact_count, 0);
    }

    #[test]
    fn overlapping_squares_share_a_face_contact() {
        let a = square(DVec2::ZERO, 1.0, 0.0, true);
        let b = square(DVec2::new(1.5, 0.0), 1.0, 0.0, false);
        let config = WorldConfig::default();
        let m = polygon_polygon(&a, &b, &config);
        assert_eq!(m.contact_count, 2);
        assert!((m.normal - DVec2::X).length() < 1e-9);
        assert!((m.penetration - 0.5).abs() < 1e-9);
    }

    #[test]
    fn manifold_normal_points_from_a_toward_b() {
        let a = square(DVec2::ZERO, 1.0, 0.0, true);
        let b = square(DVec2::new(0.0, 1.5), 1.0, 0.0, false);
        let config = WorldConfig::default();
        let m = polygon_polygon(&a, &b, &config);
        assert_eq!(m.contact_count, 2);
        assert!(m.normal.dot(b.pos - a.pos) > 0.0);
    }
}
