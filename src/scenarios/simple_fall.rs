use glam::dvec2;

use crate::{Body, Material, Shape, World, WorldConfig};

use super::Scenario;

pub struct SimpleFall {}

impl Scenario for SimpleFall {
    fn name(&self) -> &str {
        "Simple Fall"
    }

    fn create(&self) -> World {
        let mut world = World::new(WorldConfig::default());
        world.add_body(Body::new(
            Shape::Circle { radius: 40.0 },
            dvec2(-100.0, 0.0),
            0.0,
            Material::default(),
            0,
            false,
        ));
        world.add_body(Body::new(
            Shape::rectangle(2000.0, 40.0).unwrap(),
            dvec2(0.0, 400.0),
            0.0,
            Material::default(),
            0,
            true,
        ));
        world
    }
}
