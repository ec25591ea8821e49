//! Data types for the planar graph.
//!
//! Kept small and explicit: everything refers to everything else by index
//! into the owning `PlanarGraph`'s arenas, never by pointer.

use crate::geom2::{Sector, XY};

pub type NodeIndex = usize;
pub type EdgeIndex = usize;
pub type FaceIndex = usize;

/// One entry of a node's adjacency record: the neighbour reached over `edge`
/// and the absolute angle (`atan2`) of the direction towards it.
#[derive(Clone, Copy, Debug)]
pub struct Adjacent {
    pub node: NodeIndex,
    pub edge: EdgeIndex,
    pub angle: f64,
}

#[derive(Clone, Debug)]
pub struct Node {
    pub index: NodeIndex,
    pub x: f64,
    pub y: f64,
    /// Sorted by ascending `angle` (counter-clockwise); refreshed on demand.
    pub(crate) adjacency: Vec<Adjacent>,
}

impl Node {
    pub(crate) fn new(index: NodeIndex, p: XY) -> Self {
        Self {
            index,
            x: p.x,
            y: p.y,
            adjacency: Vec::new(),
        }
    }

    #[inline]
    pub fn xy(&self) -> XY {
        XY::new(self.x, self.y)
    }

    #[inline]
    pub fn adjacency(&self) -> &[Adjacent] {
        &self.adjacency
    }

    #[inline]
    pub fn degree(&self) -> usize {
        self.adjacency.len()
    }
}

/// Undirected edge between two distinct nodes, carrying payload `data`.
#[derive(Clone, Debug)]
pub struct GraphEdge<E> {
    pub index: EdgeIndex,
    pub nodes: [NodeIndex; 2],
    pub data: E,
}

impl<E> GraphEdge<E> {
    #[inline]
    pub fn contains_node(&self, n: NodeIndex) -> bool {
        self.nodes[0] == n || self.nodes[1] == n
    }

    pub fn other_node(&self, n: NodeIndex) -> Option<NodeIndex> {
        match self.nodes {
            [a, b] if a == n => Some(b),
            [a, b] if b == n => Some(a),
            _ => None,
        }
    }

    /// Shares at least one endpoint with `other`.
    pub fn is_adjacent_to<F>(&self, other: &GraphEdge<F>) -> bool {
        self.contains_node(other.nodes[0]) || self.contains_node(other.nodes[1])
    }

    /// Same unordered node pair.
    pub fn same_nodes<F>(&self, other: &GraphEdge<F>) -> bool {
        let [a, b] = self.nodes;
        let [c, d] = other.nodes;
        (a == c && b == d) || (a == d && b == c)
    }
}

/// A bounded planar region: counter-clockwise node loop and the edges joining
/// consecutive nodes (`edges[i]` joins `nodes[i]` and `nodes[i + 1]`).
#[derive(Clone, Debug)]
pub struct Face {
    pub index: FaceIndex,
    pub nodes: Vec<NodeIndex>,
    pub edges: Vec<EdgeIndex>,
}

/// Everything around one node, angularly sorted counter-clockwise.
#[derive(Clone, Debug)]
pub struct Junction {
    pub node: NodeIndex,
    pub origin: XY,
    pub adjacent: Vec<Adjacent>,
    /// `sectors[i]` sweeps from `adjacent[i]` to `adjacent[i + 1]` (wrapping).
    pub sectors: Vec<Sector>,
}

impl Junction {
    pub fn edges(&self) -> Vec<EdgeIndex> {
        self.adjacent.iter().map(|a| a.edge).collect()
    }

    pub fn sector_angles(&self) -> Vec<f64> {
        self.sectors.iter().map(Sector::angle).collect()
    }
}
