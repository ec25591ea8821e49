//! Crease patterns: the origami layer over `graph::PlanarGraph`.
//!
//! Purpose
//! - `CreasePattern` owns a planar graph of `Crease`s, a convex boundary, an
//!   optional symmetry group and tolerances.
//! - Constructions (axioms 1–7, pleats, rabbit ears, Kawasaki collapse) yield
//!   lines or segments; `crease*` clips them to the boundary and commits them.
//! - Analysis: Maekawa/Kawasaki per node, folded state per face.
//!
//! Layout
//! - `types.rs` (orientation, crease payload), `pattern.rs` (boundary,
//!   creasing, `CreaseMut`), `axioms.rs`, `symmetry.rs`, `foldable.rs`,
//!   `folded.rs`, `helpers.rs`, `nearest.rs`, `fold_file.rs` (FOLD JSON),
//!   `svg.rs`, `fixtures.rs`.
//!
//! Code cross-refs: `geom2::{ConvexPolygon, Line, Matrix}`, `graph::{PlanarGraph, Junction}`

mod axioms;
pub mod fixtures;
mod fold_file;
mod foldable;
mod folded;
mod helpers;
mod nearest;
mod pattern;
mod svg;
mod symmetry;
mod types;

pub use axioms::{axiom1, axiom2, axiom3, axiom4, axiom5, axiom6, axiom7};
pub use fold_file::{FoldError, FoldFile, FOLD_SPEC_VERSION};
pub use foldable::NodeFoldability;
pub use folded::FoldedState;
pub use helpers::pleat;
pub use nearest::Nearest;
pub use pattern::{CreaseMut, CreasePattern};
pub use symmetry::{BiReflective, Reflective, Rotational, Symmetry, SymmetryGroup, Tile};
pub use types::{Crease, Orientation};
