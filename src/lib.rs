//! 2D impulse-based rigid-body physics: circles and convex polygons, SAT
//! collision detection, contact manifolds, and sequential-impulse
//! resolution with restitution, Coulomb friction, and positional
//! correction.
//!
//! A [`World`] owns a flat collection of [`Body`] values and advances them
//! through a fixed-step pipeline (`World::step`), or via the real-time
//! accumulator driver (`World::advance`). Bodies are built from a [`Shape`]
//! (circle or convex polygon) and a [`Material`], and are addressed by a
//! stable [`BodyHandle`] once added to a world.

pub mod body;
mod collide;
pub mod error;
pub mod math;
#[cfg(feature = "scenarios")]
pub mod scenarios;
pub mod shape;
pub mod world;

pub use body::{Body, BodyHandle, Material};
pub use collide::Manifold;
pub use error::PhysicsError;
pub use shape::Shape;
pub use world::{World, WorldConfig};
