//! Body geometry: circles and convex polygons, plus the mass/inertia
//! derivation that turns a shape and a density into the numbers the solver
//! actually needs (`mass`, `inv_mass`, `inertia`, `inv_inertia`).

use glam::DVec2;

use crate::error::PhysicsError;

/// Smallest allowed polygon vertex count (a triangle).
pub const MIN_POLYGON_VERTICES: usize = 3;
/// Largest allowed polygon vertex count.
pub const MAX_POLYGON_VERTICES: usize = 16;

/// The geometry of a rigid body, in body-local space.
#[derive(Clone, Debug, PartialEq)]
#[non_exhaustive]
pub enum Shape {
    Circle {
        radius: f64,
    },
    /// Vertices and outward face normals are stored centroid-relative and
    /// in counter-clockwise order; `face_normals[i]` is the outward unit
    /// normal of the edge `(vertices[i], vertices[(i + 1) % n])`.
    Polygon {
        vertices: Vec<DVec2>,
        face_normals: Vec<DVec2>,
    },
}

/// Mass and rotational-inertia numbers derived from a shape and a density.
#[derive(Clone, Copy, Debug)]
pub struct MassProperties {
    pub mass: f64,
    pub inv_mass: f64,
    pub inertia: f64,
    pub inv_inertia: f64,
    /// Offset (in the shape's original local frame) of its true centroid.
    /// Non-zero only for polygons whose input vertices were not already
    /// centroid-relative.
    pub centroid_offset: DVec2,
}

impl Shape {
    /// Builds a circle of the given radius, validating it is positive.
    pub fn circle(radius: f64) -> Result<Self, PhysicsError> {
        if radius <= 0.0 {
            return Err(PhysicsError::NonPositiveRadius(radius));
        }
        Ok(Shape::Circle { radius })
    }

    /// Builds an axis-aligned rectangle of the given full width/height,
    /// centered on its own centroid (a convenience for floors, slabs, crates).
    pub fn rectangle(width: f64, height: f64) -> Result<Self, PhysicsError> {
        let (hw, hh) = (width / 2.0, height / 2.0);
        Shape::polygon(vec![
            DVec2::new(-hw, -hh),
            DVec2::new(hw, -hh),
            DVec2::new(hw, hh),
            DVec2::new(-hw, hh),
        ])
    }

    /// Builds a convex polygon from CCW vertices in the body's local frame.
    /// Vertices need not be centroid-relative; `compute_mass` will recenter
    /// them and report the centroid offset so the body can translate its
    /// world position to keep `pos` meaning "centroid position".
    pub fn polygon(vertices: Vec<DVec2>) -> Result<Self, PhysicsError> {
        if vertices.len() < MIN_POLYGON_VERTICES || vertices.len() > MAX_POLYGON_VERTICES {
            return Err(PhysicsError::TooFewOrManyVertices {
                count: vertices.len(),
                max: MAX_POLYGON_VERTICES,
            });
        }
        if signed_area(&vertices) <= 0.0 {
            return Err(PhysicsError::DegeneratePolygon);
        }
        if !is_convex_ccw(&vertices) {
            return Err(PhysicsError::NonConvexPolygon);
        }
        let face_normals = face_normals(&vertices);
        Ok(Shape::Polygon {
            vertices,
            face_normals,
        })
    }

    /// Derives mass and inertia from this shape's geometry and `density`.
    /// For a polygon, also recenters the stored vertices/normals onto the
    /// shape's true centroid (see the type-level doc on `Shape::Polygon`).
    pub fn compute_mass(&mut self, density: f64) -> MassProperties {
        match self {
            Shape::Circle { radius } => {
                let mass = density * std::f64::consts::PI * radius * radius;
                let inertia = mass * radius * radius;
                MassProperties {
                    mass,
                    inv_mass: if mass > 0.0 { 1.0 / mass } else { 0.0 },
                    inertia,
                    inv_inertia: if inertia > 0.0 { 1.0 / inertia } else { 0.0 },
                    centroid_offset: DVec2::ZERO,
                }
            }
            Shape::Polygon {
                vertices,
                face_normals: normals,
            } => {
                const INV_3: f64 = 1.0 / 3.0;
                let n = vertices.len();
                let mut area = 0.0;
                let mut centroid = DVec2::ZERO;
                let mut inertia_acc = 0.0;
                for i in 0..n {
                    let v1 = vertices[i];
                    let v2 = vertices[(i + 1) % n];
                    let cross = crate::math::cross(v1, v2);
                    let triangle_area = 0.5 * cross;
                    area += triangle_area;
                    centroid += triangle_area * INV_3 * (v1 + v2);
                    let intx2 = v1.x * v1.x + v2.x * v1.x + v2.x * v2.x;
                    let inty2 = v1.y * v1.y + v2.y * v1.y + v2.y * v2.y;
                    inertia_acc += (0.25 * INV_3 * cross) * (intx2 + inty2);
                }
                centroid /= area;
                for v in vertices.iter_mut() {
                    *v -= centroid;
                }
                *normals = face_normals(vertices);

                let mass = (density * area).abs();
                let inertia = (density * inertia_acc).abs();
                MassProperties {
                    mass,
                    inv_mass: if mass > 0.0 { 1.0 / mass } else { 0.0 },
                    inertia,
                    inv_inertia: if inertia > 0.0 { 1.0 / inertia } else { 0.0 },
                    centroid_offset: centroid,
                }
            }
        }
    }
}

fn signed_area(vertices: &[DVec2]) -> f64 {
    let n = vertices.len();
    (0..n)
        .map(|i| crate::math::cross(vertices[i], vertices[(i + 1) % n]))
        .sum::<f64>()
        / 2.0
}

fn is_convex_ccw(vertices: &[DVec2]) -> bool {
    let n = vertices.len();
    (0..n).all(|i| {
        let a = vertices[i];
        let b = vertices[(i + 1) % n];
        let c = vertices[(i + 2) % n];
        crate::math::cross(b - a, c - b) >= 0.0
    })
}

fn face_normals(vertices: &[DVec2]) -> Vec<DVec2> {
    let n = vertices.len();
    (0..n)
        .map(|i| {
            let edge = vertices[(i + 1) % n] - vertices[i];
            DVec2::new(edge.y, -edge.x).normalize()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn circle_mass_and_inertia() {
        let mut shape = Shape::Circle { radius: 2.0 };
        let mass = shape.compute_mass(1.0);
        assert_relative_eq!(mass.mass, std::f64::consts::PI * 4.0, epsilon = 1e-9);
        assert_relative_eq!(mass.inertia, mass.mass * 4.0, epsilon = 1e-9);
    }

    #[test]
    fn rejects_non_positive_radius() {
        assert_eq!(
            Shape::circle(0.0).unwrap_err(),
            PhysicsError::NonPositiveRadius(0.0)
        );
        assert_eq!(
            Shape::circle(-1.0).unwrap_err(),
            PhysicsError::NonPositiveRadius(-1.0)
        );
    }

    #[test]
    fn rejects_too_few_vertices() {
        let err = Shape::polygon(vec![DVec2::ZERO, DVec2::X]).unwrap_err();
        assert_eq!(
            err,
            PhysicsError::TooFewOrManyVertices { count: 2, max: MAX_POLYGON_VERTICES }
        );
    }

    #[test]
    fn rejects_non_convex_polygon() {
        let vertices = vec![
            DVec2::new(0.0, 0.0),
            DVec2::new(2.0, 0.0),
            DVec2::new(1.0, 1.0),
            DVec2::new(2.0, 2.0),
            DVec2::new(0.0, 2.0),
        ];
        assert_eq!(
            Shape::polygon(vertices).unwrap_err(),
            PhysicsError::NonConvexPolygon
        );
    }

    #[test]
    fn square_recenters_to_centroid() {
        let mut shape = Shape::polygon(vec![
            DVec2::new(0.0, 0.0),
            DVec2::new(10.0, 0.0),
            DVec2::new(10.0, 10.0),
            DVec2::new(0.0, 10.0),
        ])
        .unwrap();
        let mass = shape.compute_mass(1.0);
        assert_relative_eq!(mass.mass, 100.0, epsilon = 1e-9);
        assert_relative_eq!(mass.centroid_offset, DVec2::new(5.0, 5.0), epsilon = 1e-9);
        let Shape::Polygon { vertices, .. } = &shape else {
            unreachable!()
        };
        for v in vertices {
            assert!(v.x.abs() <= 5.0 + 1e-9 && v.y.abs() <= 5.0 + 1e-9);
        }
    }
}
