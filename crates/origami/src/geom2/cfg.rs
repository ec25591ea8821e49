//! Tolerance defaults for 2D geometry (internal).
//!
//! Policy
//! - Defaults are fixed constants to avoid “tolerance juggling” during normal
//!   development. Per-pattern overrides go through `GeomCfg`.

/// General-purpose epsilon for intersection, collinearity and containment.
pub const EPSILON: f64 = 1e-8;
/// Vertex merge distance used by `clean()`.
pub const MERGE_EPSILON: f64 = 0.003;
/// Hit-test radius for cursor queries.
pub const HIT_EPSILON: f64 = 0.05;

/// Gift-wrapping walk ceiling for `ConvexPolygon::convex_hull`.
pub(crate) const HULL_MAX_ITERATIONS: usize = 10_000;
/// Orbit ceiling for alternating reflections in `BiReflective`.
pub(crate) const BIREFLECTIVE_MAX_ITERATIONS: usize = 666;
/// Chop/merge round ceiling for `CreasePattern::clean`.
pub(crate) const CLEAN_MAX_ROUNDS: usize = 32;
