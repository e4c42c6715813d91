//! Contact manifolds and the impulse resolver that consumes them.

use glam::DVec2;
use tracing::trace;

use crate::body::Body;
use crate::math::{cross, normalize_safe};
use crate::world::WorldConfig;

/// Up to two contact points describing a collision between an ordered
/// body pair `(a, b)`. Only meaningful when `contact_count > 0`; `normal`
/// always points from `a` toward `b`.
#[derive(Clone, Debug)]
pub struct Manifold {
    pub normal: DVec2,
    pub penetration: f64,
    pub contact_count: usize,
    pub contacts: [DVec2; 2],
}

impl Manifold {
    pub(crate) fn empty() -> Self {
        Self {
            normal: DVec2::ZERO,
            penetration: 0.0,
            contact_count: 0,
            contacts: [DVec2::ZERO; 2],
        }
    }

    /// Applies normal restitution impulses and Coulomb friction impulses
    /// for every contact point, mutating both bodies' velocities. A no-op
    /// if the manifold has no contacts.
    pub fn resolve(&self, a: &mut Body, b: &mut Body, config: &WorldConfig) {
        if self.contact_count == 0 {
            return;
        }
        for i in 0..self.contact_count {
            let contact = self.contacts[i];
            let ra = contact - a.pos;
            let rb = contact - b.pos;

            let rv = b.point_velocity(rb) - a.point_velocity(ra);
            let contact_vel = rv.dot(self.normal);
            if contact_vel > 0.0 {
                // Separating already; nothing to resolve at this contact.
                continue;
            }

            let ra_cross_n = cross(ra, self.normal);
            let rb_cross_n = cross(rb, self.normal);
            let inv_mass_sum = a.inv_mass
                + b.inv_mass
                + ra_cross_n * ra_cross_n * a.inv_inertia
                + rb_cross_n * rb_cross_n * b.inv_inertia;
            if inv_mass_sum == 0.0 {
                continue;
            }

            let restitution = resting_restitution(a, b, rv, config);

            let j = -(1.0 + restitution) * contact_vel / inv_mass_sum / self.contact_count as f64;
            let impulse = self.normal * j;
            trace!(contact = i, impulse = j, "normal impulse");
            a.apply_impulse(-impulse, ra);
            b.apply_impulse(impulse, rb);

            // Friction pass: recompute relative velocity after the normal impulse.
            let rv = b.point_velocity(rb) - a.point_velocity(ra);
            let tangent_raw = rv - self.normal * rv.dot(self.normal);
            if tangent_raw.length_squared() < config.epsilon {
                continue;
            }
            let tangent = normalize_safe(tangent_raw, config.epsilon);

            let static_friction =
                (a.material.static_friction.powi(2) + b.material.static_friction.powi(2)).sqrt();
            let dynamic_friction = (a.material.dynamic_friction.powi(2)
                + b.material.dynamic_friction.powi(2))
            .sqrt();

            let jt = -rv.dot(tangent) / inv_mass_sum / self.contact_count as f64;
            let friction_impulse = if jt.abs() < j * static_friction {
                tangent * jt
            } else {
                tangent * (-j * dynamic_friction)
            };
            a.apply_impulse(-friction_impulse, ra);
            b.apply_impulse(friction_impulse, rb);
        }
    }

    /// Baumgarte-style positional correction: pushes the two bodies apart
    /// along the normal by a fraction of the penetration beyond `slop`,
    /// weighted by inverse mass so static bodies never move.
    pub fn positional_correction(&self, a: &mut Body, b: &mut Body, config: &WorldConfig) {
        if self.contact_count == 0 {
            return;
        }
        let inv_mass_sum = a.inv_mass + b.inv_mass;
        if inv_mass_sum == 0.0 {
            return;
        }
        let correction = (self.penetration - config.penetration_allowance).max(0.0) / inv_mass_sum
            * config.positional_correction_percent;
        a.pos -= self.normal * (a.inv_mass * correction);
        b.pos += self.normal * (b.inv_mass * correction);
    }
}

/// Computes the restitution coefficient to use for this contact's normal
/// impulse, clamping the vertical rebound component to zero when the
/// normal-relative velocity is small enough to be resting jitter rather
/// than a genuine bounce (spec's "resting clamp").
fn resting_restitution(a: &Body, b: &Body, rv: DVec2, config: &WorldConfig) -> f64 {
    let e = a.material.restitution.min(b.material.restitution);
    let gravity_dir = normalize_safe(config.gravity, config.epsilon);
    if gravity_dir == DVec2::ZERO {
        return e;
    }
    let rv_along_gravity = rv.dot(gravity_dir);
    let resting_threshold = (config.gravity.dot(gravity_dir) * config.dt).powi(2) + config.epsilon;
    if rv_along_gravity * rv_along_gravity <= resting_threshold {
        0.0
    } else {
        e
    }
}

