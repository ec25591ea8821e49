//! Local flat-foldability: Maekawa, Kawasaki, and Kawasaki collapse.
//!
//! Only mountain and valley creases take part in the theorems. Nodes on the
//! boundary, and nodes without any fold crease, pass vacuously.

use std::f64::consts::{PI, TAU};

use serde::Serialize;

use crate::geom2::{counter_clockwise_angle, Ray, XY};
use crate::graph::{EdgeIndex, Junction, NodeIndex};

use super::pattern::CreasePattern;
use super::types::Orientation;

/// Per-node outcome of `foldability_report`.
#[derive(Clone, Debug, Serialize)]
pub struct NodeFoldability {
    pub node: NodeIndex,
    pub x: f64,
    pub y: f64,
    pub boundary: bool,
    pub maekawa: bool,
    pub kawasaki: bool,
    /// Alternating sector sum minus π, in radians.
    pub kawasaki_deviation: Option<f64>,
}

impl CreasePattern {
    /// On the sheet outline: touches a border crease or lies on the boundary.
    pub fn is_boundary_node(&self, node: NodeIndex) -> bool {
        let Some(p) = self.graph.node_xy(node) else {
            return false;
        };
        let touches_border = self.graph.edges().iter().any(|e| {
            e.contains_node(node) && e.data.orientation == Orientation::Border
        });
        touches_border || self.boundary.on_boundary(p, self.cfg.eps)
    }

    /// Junction of the mountain and valley creases at `node`.
    pub fn fold_junction(&self, node: NodeIndex) -> Option<Junction> {
        self.graph
            .junction_where(node, |e| e.data.orientation.is_fold())
    }

    /// |#mountain − #valley| == 2 around an interior node.
    pub fn maekawa(&self, node: NodeIndex) -> bool {
        if self.is_boundary_node(node) {
            return true;
        }
        let (mut m, mut v) = (0i64, 0i64);
        for e in self.graph.edges().iter().filter(|e| e.contains_node(node)) {
            match e.data.orientation {
                Orientation::Mountain => m += 1,
                Orientation::Valley => v += 1,
                _ => {}
            }
        }
        m + v == 0 || (m - v).abs() == 2
    }

    /// Alternating sector sum minus π. `None` on the boundary, without fold
    /// creases, or with an odd number of them.
    pub fn kawasaki_deviation(&self, node: NodeIndex) -> Option<f64> {
        if self.is_boundary_node(node) {
            return None;
        }
        let junction = self.fold_junction(node)?;
        let angles = junction.sector_angles();
        if angles.is_empty() || angles.len() % 2 == 1 {
            return None;
        }
        let even: f64 = angles.iter().step_by(2).sum();
        Some(even - PI)
    }

    /// Alternating sector sums around an interior node agree within `eps`.
    pub fn kawasaki(&self, node: NodeIndex, eps: f64) -> bool {
        if self.is_boundary_node(node) {
            return true;
        }
        let Some(junction) = self.fold_junction(node) else {
            return true;
        };
        if junction.adjacent.len() % 2 == 1 {
            return false;
        }
        self.kawasaki_deviation(node)
            .is_some_and(|d| d.abs() <= eps)
    }

    /// Maekawa and Kawasaki hold at every node.
    pub fn flat_foldable(&self) -> bool {
        let eps = self.cfg.eps;
        (0..self.graph.nodes().len()).all(|n| self.maekawa(n) && self.kawasaki(n, eps))
    }

    pub fn foldability_report(&self) -> Vec<NodeFoldability> {
        let eps = self.cfg.eps;
        self.graph
            .nodes()
            .iter()
            .map(|n| NodeFoldability {
                node: n.index,
                x: n.x,
                y: n.y,
                boundary: self.is_boundary_node(n.index),
                maekawa: self.maekawa(n.index),
                kawasaki: self.kawasaki(n.index, eps),
                kawasaki_deviation: self.kawasaki_deviation(n.index),
            })
            .collect()
    }

    /// The ray inside sector `sector` of `node` that would satisfy Kawasaki.
    ///
    /// Sectors are those between the node's non-border creases, counted
    /// counter-clockwise from the smallest adjacency angle. Needs an odd
    /// number of creases; `None` when the solution falls outside the sector.
    pub fn kawasaki_collapse(&self, node: NodeIndex, sector: usize) -> Option<Ray> {
        let junction = self
            .graph
            .junction_where(node, |e| e.data.orientation != Orientation::Border)?;
        let n = junction.adjacent.len();
        if n % 2 == 0 || sector >= n {
            return None;
        }
        let sweeps: Vec<f64> = (0..n)
            .map(|k| {
                if n == 1 {
                    TAU
                } else {
                    counter_clockwise_angle(
                        junction.adjacent[k].angle,
                        junction.adjacent[(k + 1) % n].angle,
                    )
                }
            })
            .collect();
        // Walk the other sectors starting right after the chosen one; the
        // new ray must close the alternating sum at π.
        let even: f64 = (1..n)
            .map(|k| sweeps[(sector + k) % n])
            .step_by(2)
            .sum();
        let x = PI - even;
        let eps = self.cfg.eps;
        if x <= eps || x >= sweeps[sector] - eps {
            return None;
        }
        let start = junction.adjacent[sector].angle;
        let direction = XY::new(1.0, 0.0).rotate(start + x);
        Some(Ray::new(junction.origin, direction))
    }

    /// Crease the Kawasaki collapse ray up to the first crease it meets.
    pub fn crease_kawasaki_collapse(&mut self, node: NodeIndex, sector: usize) -> Option<EdgeIndex> {
        let ray = self.kawasaki_collapse(node, sector)?;
        self.crease_ray_until_intersection(ray)
    }
}
