//! 2D geometry primitives (no graph awareness).
//!
//! Purpose
//! - Value types for points, affine matrices, linear loci, polygons, circles
//!   and sectors, with every predicate epsilon-aware.
//! - One intersection routine (`intersect`) shared by `Line`, `Ray` and `Edge`,
//!   parametrised by each variant's admissible parameter range.
//!
//! Conventions
//! - Counter-clockwise is positive; angles are radians unless a name says degrees.
//! - Degenerate input (zero-length vectors, parallel loci, empty point sets)
//!   yields `None`/empty, never a panic.
//!
//! Code cross-refs: `graph::PlanarGraph`, `cp::CreasePattern`

pub mod cfg;
mod circle;
mod lines;
mod matrix;
mod polygon;
mod sector;
mod solvers;
mod types;

pub use cfg::{EPSILON, HIT_EPSILON, MERGE_EPSILON};
pub use circle::Circle;
pub use lines::{intersect, Edge, Line, LinearLocus, Ray};
pub use matrix::Matrix;
pub use polygon::{ConvexPolygon, Polygon, Rect, Triangle};
pub use sector::{counter_clockwise_angle, Sector};
pub use solvers::{solve_cubic, solve_quadratic};
pub use types::{GeomCfg, XY};

#[cfg(test)]
mod tests;
