//! The world: body storage, per-step configuration, and the fixed-step
//! scheduler that drives collision detection and resolution.

use std::time::Instant;

use glam::DVec2;
use tracing::{instrument, trace, trace_span, warn};

use crate::body::{Body, BodyHandle};
use crate::collide::{collide, Manifold};

/// Real-time accumulator clamp: bounds how much simulated time a single
/// call to [`World::advance`] can catch up on, so a long stall (a debugger
/// pause, a slow frame) doesn't cause the world to try to replay minutes of
/// steps at once.
const MAX_ACCUMULATED_TIME: f64 = 0.2;

/// Tunable constants governing a world's stepping and resolution behavior.
/// Every solver path reads these from the `WorldConfig` a body or world was
/// given rather than from a process-wide global.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WorldConfig {
    pub dt: f64,
    pub iterations: usize,
    pub gravity: DVec2,
    pub air_velocity: DVec2,
    pub penetration_allowance: f64,
    pub positional_correction_percent: f64,
    pub bias_relative: f64,
    pub bias_absolute: f64,
    pub epsilon: f64,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            dt: 1.0 / 60.0,
            iterations: 8,
            gravity: DVec2::new(0.0, 100.0),
            air_velocity: DVec2::ZERO,
            penetration_allowance: 0.05,
            positional_correction_percent: 0.2,
            bias_relative: 0.95,
            bias_absolute: 0.01,
            epsilon: 1e-4,
        }
    }
}

/// Owns a flat collection of bodies and advances them through the fixed-step
/// pipeline. Bodies are addressed by stable [`BodyHandle`]s; a removed
/// body's slot is tombstoned (left `None`), never reused or compacted.
#[derive(Clone)]
pub struct World {
    bodies: Vec<Option<Body>>,
    pub config: WorldConfig,
    accumulator: f64,
    last_instant: Option<Instant>,
}

impl World {
    pub fn new(config: WorldConfig) -> Self {
        Self {
            bodies: Vec::new(),
            config,
            accumulator: 0.0,
            last_instant: None,
        }
    }

    pub fn add_body(&mut self, body: Body) -> BodyHandle {
        self.bodies.push(Some(body));
        BodyHandle(self.bodies.len() - 1)
    }

    /// Tombstones the body at `handle`; later lookups against it return `None`.
    pub fn remove_body(&mut self, handle: BodyHandle) {
        if let Some(slot) = self.bodies.get_mut(handle.0) {
            *slot = None;
        }
    }

    pub fn get(&self, handle: BodyHandle) -> Option<&Body> {
        self.bodies.get(handle.0).and_then(|b| b.as_ref())
    }

    pub fn get_mut(&mut self, handle: BodyHandle) -> Option<&mut Body> {
        self.bodies.get_mut(handle.0).and_then(|b| b.as_mut())
    }

    pub fn bodies(&self) -> impl Iterator<Item = (BodyHandle, &Body)> {
        self.bodies
            .iter()
            .enumerate()
            .filter_map(|(i, b)| b.as_ref().map(|b| (BodyHandle(i), b)))
    }

    /// Removes every live body for which `predicate` returns `true`. Meant
    /// to be called after [`World::step`] with an out-of-bounds check;
    /// matches spec's "bodies removed by an out-of-bounds predicate are
    /// silently dropped" policy.
    pub fn remove_if(&mut self, predicate: impl Fn(&Body) -> bool) {
        for slot in self.bodies.iter_mut() {
            let drop = matches!(slot, Some(body) if predicate(body));
            if drop {
                *slot = None;
            }
        }
    }

    /// Two distinct, mutable body references by index, without the
    /// unstable `get_many_mut`. `ia` and `ib` only ever come from the
    /// broadphase's unordered pair scan, which never yields `ia == ib`;
    /// the check below is a defensive guard against that invariant
    /// slipping, not a reachable path.
    fn get_two_mut(&mut self, ia: usize, ib: usize) -> Option<(&mut Body, &mut Body)> {
        if ia == ib {
            warn!(ia, "manifold references identical body indices");
            return None;
        }
        let (lo, hi) = if ia < ib { (ia, ib) } else { (ib, ia) };
        let (left, right) = self.bodies.split_at_mut(hi);
        let lo_body = left[lo].as_mut().expect("tombstoned body in live pair");
        let hi_body = right[0].as_mut().expect("tombstoned body in live pair");
        if ia < ib {
            Some((lo_body, hi_body))
        } else {
            Some((hi_body, lo_body))
        }
    }

    /// Advances the world by one fixed step of `config.dt`, running the
    /// full detect/integrate/resolve/correct pipeline once.
    #[instrument(level = "trace", skip_all)]
    pub fn step(&mut self) {
        let dt = self.config.dt;

        let mut manifolds: Vec<(usize, usize, Manifold)> = Vec::new();
        {
            let span = trace_span!("broadphase");
            let _enter = span.enter();
            let n = self.bodies.len();
            for ia in 0..n {
                let Some(a) = self.bodies[ia].as_ref() else {
                    continue;
                };
                for ib in (ia + 1)..n {
                    let Some(b) = self.bodies[ib].as_ref() else {
                        continue;
                    };
                    if should_ignore(a, b) {
                        continue;
                    }
                    let m = collide(a, b, &self.config);
                    if m.contact_count > 0 {
                        trace!(ia, ib, penetration = m.penetration, "contact");
                        manifolds.push((ia, ib, m));
                    }
                }
            }
        }

        for slot in self.bodies.iter_mut() {
            if let Some(body) = slot {
                body.integrate_velocity(dt, self.config.gravity, self.config.air_velocity);
            }
        }

        {
            let span = trace_span!("resolve", iterations = self.config.iterations);
            let _enter = span.enter();
            for _ in 0..self.config.iterations {
                for (ia, ib, m) in &manifolds {
                    let Some((a, b)) = self.get_two_mut(*ia, *ib) else {
                        continue;
                    };
                    m.resolve(a, b, &self.config);
                }
            }
        }

        for slot in self.bodies.iter_mut() {
            if let Some(body) = slot {
                body.integrate_position(dt);
                body.integrate_velocity(dt, self.config.gravity, self.config.air_velocity);
            }
        }

        for (ia, ib, m) in &manifolds {
            let Some((a, b)) = self.get_two_mut(*ia, *ib) else {
                continue;
            };
            m.positional_correction(a, b, &self.config);
        }

        for slot in self.bodies.iter_mut() {
            if let Some(body) = slot {
                body.clear_forces();
                body.static_clamp();
            }
        }
    }

    /// Real-time driver: accumulates `now - last` call's elapsed time and
    /// runs as many fixed steps as have accrued, clamping the accumulator
    /// to [`MAX_ACCUMULATED_TIME`] to guard against a spiral of death after
    /// a long stall. Returns the number of steps run.
    pub fn advance(&mut self, now: Instant) -> u32 {
        let elapsed = match self.last_instant {
            Some(last) => now.saturating_duration_since(last).as_secs_f64(),
            None => 0.0,
        };
        self.last_instant = Some(now);

        self.accumulator = (self.accumulator + elapsed).min(MAX_ACCUMULATED_TIME);
        let mut steps = 0;
        while self.accumulator >= self.config.dt {
            self.step();
            self.accumulator -= self.config.dt;
            steps += 1;
        }
        steps
    }
}

fn should_ignore(a: &Body, b: &Body) -> bool {
    if a.is_static && b.is_static {
        return true;
    }
    if a.layer != b.layer && !a.is_static && !b.is_static {
        return true;
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::body::Material;
    use crate::shape::Shape;

    #[test]
    fn circle_comes_to_rest_on_static_slab() {
        let mut world = World::new(WorldConfig::default());
        let floor = world.add_body(Body::new(
            Shape::rectangle(200.0, 10.0).unwrap(),
            DVec2::new(50.0, 160.0),
            0.0,
            Material::default(),
            0,
            true,
        ));
        let ball = world.add_body(Body::new(
            Shape::Circle { radius: 5.0 },
            DVec2::new(60.0, 20.0),
            0.0,
            Material::default(),
            0,
            false,
        ));
        for _ in 0..240 {
            world.step();
        }
        let floor = world.get(floor).unwrap();
        assert_eq!(floor.pos, DVec2::new(50.0, 160.0));
        assert_eq!(floor.lin_vel, DVec2::ZERO);
        let ball = world.get(ball).unwrap();
        // Floor's near face sits at y=155; the ball should have stopped
        // falling and settled at or just above it, not kept accelerating.
        assert!(ball.pos.y > 100.0 && ball.pos.y < 160.0, "ball.pos.y = {}", ball.pos.y);
        assert!(ball.lin_vel.length() < 5.0, "lin_vel = {:?}", ball.lin_vel);
    }

    #[test]
    fn different_layers_ignore_each_other_unless_one_is_static() {
        let a = Body::new(Shape::Circle { radius: 1.0 }, DVec2::ZERO, 0.0, Material::default(), 1, false);
        let b = Body::new(Shape::Circle { radius: 1.0 }, DVec2::ZERO, 0.0, Material::default(), 2, false);
        assert!(should_ignore(&a, &b));
        let c = Body::new(Shape::Circle { radius: 1.0 }, DVec2::ZERO, 0.0, Material::default(), 2, true);
        assert!(!should_ignore(&a, &c));
    }

    #[test]
    fn out_of_bounds_predicate_removes_bodies() {
        let mut world = World::new(WorldConfig::default());
        let handle = world.add_body(Body::new(
            Shape::Circle { radius: 1.0 },
            DVec2::new(0.0, -10_000.0),
            0.0,
            Material::default(),
            0,
            false,
        ));
        world.step();
        world.remove_if(|b| b.pos.y < -1000.0);
        assert!(world.get(handle).is_none());
    }

    #[test]
    fn removed_handle_is_tombstoned_not_reused() {
        let mut world = World::new(WorldConfig::default());
        let a = world.add_body(Body::new(Shape::Circle { radius: 1.0 }, DVec2::ZERO, 0.0, Material::default(), 0, false));
        world.remove_body(a);
        let b = world.add_body(Body::new(Shape::Circle { radius: 1.0 }, DVec2::ZERO, 0.0, Material::default(), 0, false));
        assert!(world.get(a).is_none());
        assert!(world.get(b).is_some());
        assert_ne!(a.0, b.0);
    }
}
