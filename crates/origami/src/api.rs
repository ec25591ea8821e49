//! Curated API surface (UNSTABLE).
//!
//! - A convenience layer for tools and experiments; breaking changes are
//!   allowed whenever the layers underneath move.
//! - Prefer these re-exports over reaching into submodules.

// 2D geometry
pub use crate::geom2::{
    counter_clockwise_angle, intersect, solve_cubic, solve_quadratic, Circle, ConvexPolygon, Edge,
    GeomCfg, Line, LinearLocus, Matrix, Polygon, Ray, Rect, Sector, Triangle, XY,
};
// Planar graph
pub use crate::graph::{
    Adjacent, EdgeIndex, Face, FaceIndex, GraphEdge, Junction, Node, NodeIndex, PlanarGraph,
};
// Crease patterns
pub use crate::cp::{
    axiom1, axiom2, axiom3, axiom4, axiom5, axiom6, axiom7, fixtures::bird_base, pleat,
    BiReflective, Crease, CreaseMut, CreasePattern, FoldError, FoldFile, FoldedState, Nearest,
    NodeFoldability, Orientation, Reflective, Rotational, Symmetry, SymmetryGroup, Tile,
    FOLD_SPEC_VERSION,
};
