use glam::dvec2;

use crate::{Body, Material, Shape, World, WorldConfig};

use super::Scenario;

pub struct InclinedFall {}

impl Scenario for InclinedFall {
    fn name(&self) -> &str {
        "Inclined Fall"
    }

    fn create(&self) -> World {
        let mut world = World::new(WorldConfig::default());
        world.add_body(Body::new(
            Shape::Circle { radius: 50.0 },
            dvec2(0.0, -50.0),
            0.0,
            Material::default(),
            0,
            false,
        ));
        // A wide slab tilted a few degrees off horizontal so a falling
        // circle rolls rather than simply stopping dead.
        world.add_body(Body::new(
            Shape::rectangle(2000.0, 40.0).unwrap(),
            dvec2(0.0, 50.0),
            -0.15,
            Material::default(),
            0,
            true,
        ));
        world
    }
}
