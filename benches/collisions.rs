use std::iter::repeat_with;

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use glam::dvec2;
use physics::{Body, Material, Shape, World, WorldConfig};
use rand::Rng;

fn init_world(num_bodies: usize) -> World {
    let mut world = World::new(WorldConfig::default());
    let mut rng = rand::thread_rng();
    let pos_limit = 500.0;
    let vel_limit = 50.0;

    world.add_body(Body::new(
        Shape::rectangle(2000.0, 50.0).unwrap(),
        dvec2(0.0, pos_limit + 100.0),
        0.0,
        Material::default(),
        0,
        true,
    ));

    for (i, (pos, vel)) in repeat_with(|| {
        let pos = dvec2(
            rng.gen_range(-pos_limit..pos_limit),
            rng.gen_range(-pos_limit..pos_limit),
        );
        let vel = dvec2(
            rng.gen_range(-vel_limit..vel_limit),
            rng.gen_range(-vel_limit..vel_limit),
        );
        (pos, vel)
    })
    .take(num_bodies)
    .enumerate()
    {
        let shape = if i % 2 == 0 {
            Shape::Circle { radius: 10.0 }
        } else {
            Shape::rectangle(16.0, 16.0).unwrap()
        };
        let handle = world.add_body(Body::new(shape, pos, 0.0, Material::default(), 0, false));
        world.get_mut(handle).unwrap().lin_vel = vel;
    }
    world
}

pub fn criterion_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("world_step");
    for num_bodies in [32, 64, 128, 256, 512] {
        let initial_world = init_world(num_bodies);
        group.bench_with_input(
            BenchmarkId::new("step mixed circles and boxes", num_bodies),
            &num_bodies,
            |b, _num_bodies| {
                b.iter(|| {
                    let mut world = initial_world.clone();
                    black_box(world.step());
                })
            },
        );
    }
    group.finish();
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
