use glam::dvec2;

use crate::{Body, Material, Shape, World, WorldConfig};

use super::Scenario;

/// A small tower of boxes dropped onto a static floor, exercising
/// polygon-polygon contacts and multi-body resting stability.
pub struct Stacking {}

impl Scenario for Stacking {
    fn name(&self) -> &str {
        "Stacking"
    }

    fn create(&self) -> World {
        let mut world = World::new(WorldConfig::default());
        world.add_body(Body::new(
            Shape::rectangle(600.0, 40.0).unwrap(),
            dvec2(0.0, 300.0),
            0.0,
            Material::default(),
            0,
            true,
        ));

        let box_size = 50.0;
        for i in 0..6 {
            let y = 300.0 - 20.0 - box_size / 2.0 - (i as f64) * (box_size + 2.0);
            world.add_body(Body::new(
                Shape::rectangle(box_size, box_size).unwrap(),
                dvec2(0.0, y),
                0.0,
                Material::default(),
                0,
                false,
            ));
        }
        world
    }
}
