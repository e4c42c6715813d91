//! Canned worlds used by the demo binaries and as a grab-bag of realistic
//! setups for manual testing. Not part of the solver; purely a convenience
//! layer over [`crate::World`].

pub mod collision;
pub mod inclined_fall;
pub mod many_particles;
pub mod resting;
pub mod simple_fall;
pub mod stacking;

pub use collision::Collision;
pub use inclined_fall::InclinedFall;
pub use many_particles::ManyParticles;
pub use resting::Resting;
pub use simple_fall::SimpleFall;
pub use stacking::Stacking;

use crate::World;

pub trait Scenario {
    fn name(&self) -> &str;

    fn create(&self) -> World;

    /// Per-frame hook for scenarios that poke the world between steps
    /// (e.g. reintroducing bodies). Most scenarios don't need this.
    fn update(&self, _world: &mut World) {}
}
