//! Shape-pair collision detection, dispatched on the two bodies' shape tags.

mod circle_circle;
mod clip;
mod manifold;
mod polygon_circle;
mod polygon_polygon;

pub use manifold::Manifold;

use crate::body::Body;
use crate::shape::Shape;
use crate::world::WorldConfig;

/// Computes the contact manifold for bodies `a` and `b`, in that order;
/// `manifold.normal` always points from `a` toward `b`.
pub(crate) fn collide(a: &Body, b: &Body, config: &WorldConfig) -> Manifold {
    match (&a.shape, &b.shape) {
        (Shape::Circle { .. }, Shape::Circle { .. }) => circle_circle::circle_circle(a, b),
        (Shape::Circle { .. }, Shape::Polygon { .. }) => {
            polygon_circle::circle_polygon(a, b, config)
        }
        (Shape::Polygon { .. }, Shape::Circle { .. }) => {
            polygon_circle::polygon_circle(a, b, config)
        }
        (Shape::Polygon { .. }, Shape::Polygon { .. }) => {
            polygon_polygon::polygon_polygon(a, b, config)
        }
    }
}
