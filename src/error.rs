use thiserror::Error;

/// Errors surfaced at body construction time.
///
/// Per the solver's error-handling policy, these are the only failures the
/// crate produces: once a [`crate::World`] accepts a body, stepping never
/// fails — degeneracies encountered mid-solve (coincident centers,
/// zero-length tangents) are absorbed by documented fallbacks instead.
#[derive(Debug, Error, PartialEq)]
pub enum PhysicsError {
    #[error("polygon must have between 3 and {max} vertices, got {count}")]
    TooFewOrManyVertices { count: usize, max: usize },
    #[error("polygon vertices must be convex and in counter-clockwise order")]
    NonConvexPolygon,
    #[error("polygon has zero or negative area")]
    DegeneratePolygon,
    #[error("circle radius must be positive, got {0}")]
    NonPositiveRadius(f64),
    #[error("density must be positive, got {0}")]
    NonPositiveDensity(f64),
    #[error("restitution must be within [0, 1], got {0}")]
    RestitutionOutOfRange(f64),
    #[error("friction coefficients must be non-negative (static={static_friction}, dynamic={dynamic_friction})")]
    NegativeFriction {
        static_friction: f64,
        dynamic_friction: f64,
    },
}
