use glam::{dvec2, DVec2};

use crate::{Body, Material, Shape, World, WorldConfig};

use super::Scenario;

fn make_circle(pos: DVec2) -> Body {
    Body::new(
        Shape::Circle { radius: 50.0 },
        pos,
        0.0,
        Material::default(),
        0,
        false,
    )
}

pub struct Resting {}

impl Scenario for Resting {
    fn name(&self) -> &str {
        "Resting"
    }

    fn create(&self) -> World {
        let mut world = World::new(WorldConfig::default());
        world.add_body(Body::new(
            Shape::rectangle(2000.0, 100.0).unwrap(),
            dvec2(0.0, 550.0),
            0.0,
            Material::default(),
            0,
            true,
        ));
        for pos in [
            dvec2(-200.0, 0.0),
            dvec2(0.0, 0.0),
            dvec2(0.0, -100.0),
            dvec2(200.0, 0.0),
            dvec2(200.0, -100.0),
            dvec2(200.0, -200.0),
        ] {
            world.add_body(make_circle(pos));
        }
        world
    }
}
