//! Vector and rotation-matrix primitives the solver needs on top of `glam`.
//!
//! `glam::DVec2`/`DMat2` already provide the storage and the bulk of the
//! arithmetic; what's missing is the epsilon-guarded normalize and the three
//! *non-interchangeable* cross-product variants the resolver relies on.

use glam::DVec2;

/// `a.x * b.y - a.y * b.x`. The scalar (2D) cross product of two vectors.
#[inline]
pub fn cross(a: DVec2, b: DVec2) -> f64 {
    a.perp_dot(b)
}

/// `(s * a.y, -s * a.x)`. Cross of a vector with a scalar, vector on the left.
///
/// Used for `cross(r, impulse)` style terms where `r` is a vector and the
/// scalar comes from a rotation rate; not the same as [`cross_scalar_vec`].
#[inline]
pub fn cross_vec_scalar(a: DVec2, s: f64) -> DVec2 {
    DVec2::new(s * a.y, -s * a.x)
}

/// `(-s * a.y, s * a.x)`. Cross of a scalar with a vector, scalar on the left.
///
/// Used for `cross(angular_velocity, r)` style terms, i.e. the velocity
/// induced at an offset `r` by a body spinning at `s` rad/s. The sign is
/// opposite [`cross_vec_scalar`]; keep the two distinct to avoid sign bugs.
#[inline]
pub fn cross_scalar_vec(s: f64, a: DVec2) -> DVec2 {
    DVec2::new(-s * a.y, s * a.x)
}

/// Normalizes `v` in place, leaving it untouched if its length is below
/// `epsilon` (avoids dividing a near-zero vector by its own near-zero length).
#[inline]
pub fn normalize_safe(v: DVec2, epsilon: f64) -> DVec2 {
    if v.length_squared() < epsilon * epsilon {
        v
    } else {
        v.normalize()
    }
}

/// Builds the rotation matrix for an orientation `theta`, matching the
/// convention `[[cos, -sin], [sin, cos]]` used throughout the collision code.
#[inline]
pub fn rotation(theta: f64) -> glam::DMat2 {
    glam::DMat2::from_angle(theta)
}
