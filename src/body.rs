//! Rigid body representation: pose, motion state, material, and the
//! derived mass/inertia that shape + density + static-ness produce.

use glam::{DMat2, DVec2};

use crate::error::PhysicsError;
use crate::math::{cross_scalar_vec, rotation};
use crate::shape::Shape;

/// Opaque, stable handle to a body owned by a [`crate::World`].
///
/// Indices are never reused while the body they point to is still alive;
/// a removed body's slot is tombstoned rather than compacted, so handles
/// obtained before a removal stay meaningful (they simply stop resolving).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BodyHandle(pub(crate) usize);

/// Surface/bulk material properties governing collision response.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Material {
    pub restitution: f64,
    pub density: f64,
    pub static_friction: f64,
    pub dynamic_friction: f64,
}

impl Material {
    pub fn new(
        restitution: f64,
        density: f64,
        static_friction: f64,
        dynamic_friction: f64,
    ) -> Result<Self, PhysicsError> {
        if !(0.0..=1.0).contains(&restitution) {
            return Err(PhysicsError::RestitutionOutOfRange(restitution));
        }
        if density <= 0.0 {
            return Err(PhysicsError::NonPositiveDensity(density));
        }
        if static_friction < 0.0 || dynamic_friction < 0.0 {
            return Err(PhysicsError::NegativeFriction {
                static_friction,
                dynamic_friction,
            });
        }
        Ok(Self {
            restitution,
            density,
            static_friction,
            dynamic_friction,
        })
    }
}

impl Default for Material {
    fn default() -> Self {
        Self {
            restitution: 0.2,
            density: 1.0,
            static_friction: 0.5,
            dynamic_friction: 0.3,
        }
    }
}

/// A simulated rigid body: circle or convex polygon, with mass/inertia
/// derived from its shape and material density.
#[derive(Clone, Debug)]
pub struct Body {
    pub pos: DVec2,
    pub orient: f64,
    pub rot: DMat2,

    pub lin_vel: DVec2,
    pub ang_vel: f64,
    pub force: DVec2,
    pub torque: f64,

    pub material: Material,

    pub mass: f64,
    pub inv_mass: f64,
    pub inertia: f64,
    pub inv_inertia: f64,

    pub is_static: bool,
    pub layer: i32,

    pub shape: Shape,
}

impl Body {
    /// Builds a body at `pos` with the given `shape`/`material`, deriving
    /// mass and inertia from the shape's geometry and the material's density.
    /// Per the centroid-position convention, `pos` is reinterpreted as the
    /// shape's true centroid after construction, even if the polygon's input
    /// vertices were not centroid-relative.
    pub fn new(
        mut shape: Shape,
        pos: DVec2,
        orient: f64,
        material: Material,
        layer: i32,
        is_static: bool,
    ) -> Self {
        let mass_data = shape.compute_mass(material.density);
        let rot = rotation(orient);
        let pos = pos + rot * mass_data.centroid_offset;

        let (mass, inv_mass, inertia, inv_inertia) = if is_static {
            (f64::INFINITY, 0.0, f64::INFINITY, 0.0)
        } else {
            (
                mass_data.mass,
                mass_data.inv_mass,
                mass_data.inertia,
                mass_data.inv_inertia,
            )
        };

        Self {
            pos,
            orient,
            rot,
            lin_vel: DVec2::ZERO,
            ang_vel: 0.0,
            force: DVec2::ZERO,
            torque: 0.0,
            material,
            mass,
            inv_mass,
            inertia,
            inv_inertia,
            is_static,
            layer,
            shape,
        }
    }

    /// Accumulates a world-frame force, applied at the body's next
    /// velocity integration. No-op on static bodies.
    pub fn apply_force(&mut self, force: DVec2) {
        if self.is_static {
            return;
        }
        self.force += force;
    }

    /// Accumulates a torque, applied at the body's next velocity integration.
    /// No-op on static bodies.
    pub fn apply_torque(&mut self, torque: f64) {
        if self.is_static {
            return;
        }
        self.torque += torque;
    }

    /// Applies an instantaneous impulse `j` at contact offset `r` (relative
    /// to this body's centroid), immediately changing linear and angular
    /// velocity. No-op on static bodies.
    pub fn apply_impulse(&mut self, j: DVec2, r: DVec2) {
        if self.is_static {
            return;
        }
        self.lin_vel += self.inv_mass * j;
        self.ang_vel += self.inv_inertia * crate::math::cross(r, j);
    }

    /// Half-step symplectic velocity integration: gravity, ambient
    /// "air velocity", and the accumulated force/torque all act for `dt / 2`.
    /// Called twice per world step, bracketing the position integration.
    pub fn integrate_velocity(&mut self, dt: f64, gravity: DVec2, air_velocity: DVec2) {
        if self.is_static {
            return;
        }
        let half_dt = dt / 2.0;
        self.lin_vel += (self.force * self.inv_mass + gravity + air_velocity) * half_dt;
        self.ang_vel += self.torque * self.inv_inertia * half_dt;
    }

    /// Integrates position and orientation over a full `dt`, refreshing
    /// the cached rotation matrix used by collision detection.
    pub fn integrate_position(&mut self, dt: f64) {
        if self.is_static {
            return;
        }
        self.pos += self.lin_vel * dt;
        self.orient += self.ang_vel * dt;
        self.rot = rotation(self.orient);
    }

    /// Zeroes the force/torque accumulators; run once at the end of a step
    /// so no body carries forces over into the next one.
    pub fn clear_forces(&mut self) {
        self.force = DVec2::ZERO;
        self.torque = 0.0;
    }

    /// Zeroes velocities on static bodies; a no-op for dynamic ones. Static
    /// bodies never move, but nothing else guarantees their velocity fields
    /// stay at zero if user code pokes them directly between steps.
    pub fn static_clamp(&mut self) {
        if self.is_static {
            self.lin_vel = DVec2::ZERO;
            self.ang_vel = 0.0;
        }
    }

    /// The velocity of the material point at world-space offset `r` from
    /// this body's centroid, i.e. `lin_vel + ang_vel x r`.
    pub fn point_velocity(&self, r: DVec2) -> DVec2 {
        self.lin_vel + cross_scalar_vec(self.ang_vel, r)
    }
}
