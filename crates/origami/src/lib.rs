//! Origami crease-pattern engine.
//!
//! Three layers, each usable on its own:
//! - `geom2`: epsilon-aware 2D primitives (points, affine matrices, lines,
//!   polygons, sectors, polynomial solvers).
//! - `graph`: a planar graph with a generic edge payload, crossing repair and
//!   face discovery.
//! - `cp`: crease patterns on a convex sheet. Huzita–Justin axioms, symmetry,
//!   Maekawa/Kawasaki checks, folded state, FOLD and SVG output.
//!
//! API Policy
//! - No stable public API yet. Prefer `api` or `prelude` imports over deep
//!   module paths so internal moves stay cheap.

pub mod api;
pub mod cp;
pub mod geom2;
pub mod graph;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use cp::{CreasePattern, Orientation};
pub use geom2::{GeomCfg, XY};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::cp::{
        axiom1, axiom2, axiom3, axiom4, axiom5, axiom6, axiom7, Crease, CreasePattern,
        Orientation,
    };
    pub use crate::geom2::{ConvexPolygon, Edge, GeomCfg, Line, LinearLocus, Ray, XY};
    pub use crate::graph::{EdgeIndex, FaceIndex, NodeIndex};
}
