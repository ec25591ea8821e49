//! Planar graph: a generic graph embedded in the plane.
//!
//! Purpose
//! - Maintain nodes, edges (with an arbitrary payload `E`) and the faces of
//!   the subdivision they induce, under incremental mutation.
//! - Provide the two repair passes crease patterns rely on: `chop` (split at
//!   crossings) and `clean` (merge near-coincident nodes, drop duplicate
//!   edges, refresh adjacency, regenerate faces).
//!
//! Faces are found by walking "next edge clockwise" around each node, so
//! adjacency angles must be current before `generate_faces`.
//!
//! Code cross-refs: `geom2::{Edge, Sector, Polygon}`, `cp::CreasePattern`

mod planar;
mod types;

pub use planar::{line_segment_intersection, PlanarGraph};
pub use types::{Adjacent, EdgeIndex, Face, FaceIndex, GraphEdge, Junction, Node, NodeIndex};

#[cfg(test)]
mod tests;
