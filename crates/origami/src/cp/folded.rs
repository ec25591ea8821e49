//! Folded state: one affine transform per face, accumulated over a spanning
//! tree of face adjacency.
//!
//! The root face stays put. Crossing crease `e` from parent to child applies a
//! 3D rotation about `e` by its signed fold angle (valley up, mountain down),
//! with the axis oriented so the parent lies on its right. At ±180° the result
//! is the usual flat reflection.

use std::collections::VecDeque;

use crate::geom2::{ConvexPolygon, Line, Matrix, XY};
use crate::graph::{FaceIndex, NodeIndex};

use super::pattern::CreasePattern;
use super::types::Orientation;

#[derive(Clone, Debug)]
pub struct FoldedState {
    pub root: FaceIndex,
    /// `None` for faces unreachable from the root.
    pub face_matrices: Vec<Option<Matrix>>,
    /// Folded node positions; the first face to reach a node places it.
    pub positions: Vec<Option<XY>>,
}

impl FoldedState {
    pub fn position(&self, node: NodeIndex) -> Option<XY> {
        self.positions.get(node).copied().flatten()
    }
}

impl CreasePattern {
    /// The face under the boundary centroid, else the first face.
    pub fn default_root_face(&self) -> Option<FaceIndex> {
        let faces = self.graph.faces();
        if faces.is_empty() {
            return None;
        }
        Some(
            self.graph
                .face_containing(self.boundary.centroid())
                .unwrap_or(0),
        )
    }

    /// Fold every face relative to `root` (default: `default_root_face`).
    /// Requires current faces (`clean()`).
    pub fn folded_state(&self, root: Option<FaceIndex>) -> Option<FoldedState> {
        let root = match root {
            Some(r) => r,
            None => self.default_root_face()?,
        };
        let faces = self.graph.faces();
        if root >= faces.len() {
            return None;
        }
        let adjacency = self.graph.face_adjacency();
        let mut matrices: Vec<Option<Matrix>> = vec![None; faces.len()];
        matrices[root] = Some(Matrix::identity());
        let mut queue = VecDeque::from([root]);
        while let Some(parent) = queue.pop_front() {
            let Some(parent_matrix) = matrices[parent] else {
                continue;
            };
            let Some(parent_center) = self.graph.face_centroid(parent) else {
                continue;
            };
            for &(child, e) in &adjacency[parent] {
                if matrices[child].is_some() {
                    continue;
                }
                let (Some(edge), Some(seg)) = (self.graph.edge(e), self.graph.edge_segment(e))
                else {
                    continue;
                };
                if edge.data.orientation == Orientation::Border {
                    continue;
                }
                let d = seg.b - seg.a;
                let axis = if d.cross(&(parent_center - seg.a)) > 0.0 {
                    Line::new(seg.a, -d)
                } else {
                    Line::new(seg.a, d)
                };
                let turn = Matrix::axis_rotation(edge.data.signed_angle().to_radians(), &axis);
                matrices[child] = Some(parent_matrix.mult(&turn));
                queue.push_back(child);
            }
        }

        let mut positions: Vec<Option<XY>> = vec![None; self.graph.nodes().len()];
        let mut order: Vec<FaceIndex> = vec![root];
        order.extend((0..faces.len()).filter(|&f| f != root));
        for f in order {
            let Some(m) = matrices[f] else {
                continue;
            };
            for &n in &faces[f].nodes {
                if positions[n].is_none() {
                    positions[n] = self.graph.node_xy(n).map(|p| m.transform(p));
                }
            }
        }
        let reached = matrices.iter().filter(|m| m.is_some()).count();
        tracing::debug!(root, faces = faces.len(), reached, "folded state");
        Some(FoldedState {
            root,
            face_matrices: matrices,
            positions,
        })
    }

    /// Copy of this pattern with every node moved to its folded position.
    /// The copy is not cleaned; its boundary is the hull of the folded nodes.
    pub fn folded_cp(&self, root: Option<FaceIndex>) -> Option<CreasePattern> {
        let state = self.folded_state(root)?;
        Some(self.folded_cp_from(&state))
    }

    /// `folded_cp` for a state already computed from this pattern. Nodes the
    /// state did not reach keep their flat position.
    pub fn folded_cp_from(&self, state: &FoldedState) -> CreasePattern {
        let mut folded = self.clone();
        for (n, p) in state.positions.iter().enumerate() {
            if let Some(p) = p {
                folded.graph.set_node_position(n, *p);
            }
        }
        folded.graph.refresh_adjacencies();
        let points: Vec<XY> = folded.graph.nodes().iter().map(|n| n.xy()).collect();
        if let Some(hull) = ConvexPolygon::convex_hull(&points, self.cfg.eps_merge) {
            folded.boundary = hull;
        }
        folded.symmetry = None;
        folded
    }
}
