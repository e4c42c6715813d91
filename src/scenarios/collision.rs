use glam::dvec2;

use crate::{Body, Material, Shape, World, WorldConfig};

use super::Scenario;

pub struct Collision {}

impl Scenario for Collision {
    fn name(&self) -> &str {
        "Collision"
    }

    fn create(&self) -> World {
        let mut config = WorldConfig::default();
        config.gravity = dvec2(0.0, 0.0);
        let mut world = World::new(config);

        let a = world.add_body(Body::new(
            Shape::Circle { radius: 40.0 },
            dvec2(-100.0, 0.0),
            0.0,
            Material::default(),
            0,
            false,
        ));
        world.get_mut(a).unwrap().lin_vel = dvec2(100.0, 0.0);

        let b = world.add_body(Body::new(
            Shape::Circle { radius: 60.0 },
            dvec2(100.0, -30.0),
            0.0,
            Material::default(),
            0,
            false,
        ));
        world.get_mut(b).unwrap().lin_vel = dvec2(-50.0, 0.0);

        world
    }
}
