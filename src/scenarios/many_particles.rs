use glam::dvec2;
use rand::Rng as _;

use crate::{Body, Material, Shape, World, WorldConfig};

use super::Scenario;

const CIRCLE_NUMBER: usize = 100;

pub struct ManyParticles {}

impl Scenario for ManyParticles {
    fn name(&self) -> &str {
        "Many Particles"
    }

    fn create(&self) -> World {
        let mut world = World::new(WorldConfig::default());

        let mut rng = rand::thread_rng();
        let pos_limit = 500.0;
        let vel_limit = 50.0;
        for _ in 0..CIRCLE_NUMBER {
            let pos = dvec2(
                rng.gen_range(-pos_limit..pos_limit),
                rng.gen_range(-pos_limit..pos_limit),
            );
            let vel = dvec2(
                rng.gen_range(-vel_limit..vel_limit),
                rng.gen_range(-vel_limit..vel_limit),
            );
            let handle = world.add_body(Body::new(
                Shape::Circle { radius: 10.0 },
                pos,
                0.0,
                Material::default(),
                0,
                false,
            ));
            world.get_mut(handle).unwrap().lin_vel = vel;
        }

        // Four walls enclosing the play area, each a thin static slab.
        let thickness = 40.0;
        let extent = pos_limit + thickness;
        world.add_body(Body::new(
            Shape::rectangle(2.0 * extent, thickness).unwrap(),
            dvec2(0.0, -extent),
            0.0,
            Material::default(),
            0,
            true,
        ));
        world.add_body(Body::new(
            Shape::rectangle(2.0 * extent, thickness).unwrap(),
            dvec2(0.0, extent),
            0.0,
            Material::default(),
            0,
            true,
        ));
        world.add_body(Body::new(
            Shape::rectangle(thickness, 2.0 * extent).unwrap(),
            dvec2(-extent, 0.0),
            0.0,
            Material::default(),
            0,
            true,
        ));
        world.add_body(Body::new(
            Shape::rectangle(thickness, 2.0 * extent).unwrap(),
            dvec2(extent, 0.0),
            0.0,
            Material::default(),
            0,
            true,
        ));

        world
    }
}
