//! `PlanarGraph`: nodes, edges and derived faces of a 2D subdivision.
//!
//! Invariants after `clean()`:
//! - Every edge joins two distinct, valid nodes; no two edges share a node pair.
//! - No two nodes lie within the merge epsilon of each other.
//! - Adjacency records are current and faces match the edge set.
//!
//! Mutations leave faces empty until the next `generate_faces()`/`clean()`.

use std::cmp::Ordering;
use std::collections::HashSet;

use crate::geom2::{Edge, LinearLocus, Polygon, Sector, XY};

use super::types::{Adjacent, EdgeIndex, Face, FaceIndex, GraphEdge, Junction, Node, NodeIndex};

#[derive(Clone, Debug)]
pub struct PlanarGraph<E> {
    nodes: Vec<Node>,
    edges: Vec<GraphEdge<E>>,
    faces: Vec<Face>,
}

impl<E: Clone + Default> Default for PlanarGraph<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: Clone + Default> PlanarGraph<E> {
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            edges: Vec::new(),
            faces: Vec::new(),
        }
    }

    #[inline]
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    #[inline]
    pub fn edges(&self) -> &[GraphEdge<E>] {
        &self.edges
    }

    #[inline]
    pub fn faces(&self) -> &[Face] {
        &self.faces
    }

    #[inline]
    pub fn node(&self, i: NodeIndex) -> Option<&Node> {
        self.nodes.get(i)
    }

    #[inline]
    pub fn edge(&self, i: EdgeIndex) -> Option<&GraphEdge<E>> {
        self.edges.get(i)
    }

    #[inline]
    pub fn edge_mut(&mut self, i: EdgeIndex) -> Option<&mut GraphEdge<E>> {
        self.edges.get_mut(i)
    }

    pub fn edges_mut(&mut self) -> impl Iterator<Item = &mut GraphEdge<E>> {
        self.edges.iter_mut()
    }

    #[inline]
    pub fn face(&self, i: FaceIndex) -> Option<&Face> {
        self.faces.get(i)
    }

    #[inline]
    pub fn node_xy(&self, i: NodeIndex) -> Option<XY> {
        self.nodes.get(i).map(Node::xy)
    }

    /// Geometric segment of edge `i`.
    pub fn edge_segment(&self, i: EdgeIndex) -> Option<Edge> {
        let [a, b] = self.edges.get(i)?.nodes;
        Some(Edge::new(self.node_xy(a)?, self.node_xy(b)?))
    }

    pub fn edge_endpoints(&self, i: EdgeIndex) -> Option<[XY; 2]> {
        self.edge_segment(i).map(|e| e.endpoints())
    }

    /// Whether any edge touches node `i`.
    pub fn node_is_connected(&self, i: NodeIndex) -> bool {
        self.edges.iter().any(|e| e.contains_node(i))
    }

    /// Move a node without touching topology. Adjacency and faces go stale.
    pub fn set_node_position(&mut self, i: NodeIndex, p: XY) -> Option<()> {
        let node = self.nodes.get_mut(i)?;
        node.x = p.x;
        node.y = p.y;
        Some(())
    }

    pub fn clear(&mut self) {
        self.nodes.clear();
        self.edges.clear();
        self.faces.clear();
    }

    // ---- construction ------------------------------------------------------

    pub fn add_node(&mut self, p: impl Into<XY>) -> NodeIndex {
        let index = self.nodes.len();
        self.nodes.push(Node::new(index, p.into()));
        index
    }

    /// New edge between two new nodes. `None` for a zero-length edge.
    pub fn add_edge_with_vertices(
        &mut self,
        a: impl Into<XY>,
        b: impl Into<XY>,
        data: E,
    ) -> Option<EdgeIndex> {
        let (a, b) = (a.into(), b.into());
        (b - a).normalize()?;
        let na = self.add_node(a);
        let nb = self.add_node(b);
        self.add_edge_from_existing_vertices(na, nb, data)
    }

    /// New edge from existing node `from` to a new node at `p`.
    pub fn add_edge_from_vertex(
        &mut self,
        from: NodeIndex,
        p: impl Into<XY>,
        data: E,
    ) -> Option<EdgeIndex> {
        let p = p.into();
        let origin = self.node_xy(from)?;
        (p - origin).normalize()?;
        let to = self.add_node(p);
        self.add_edge_from_existing_vertices(from, to, data)
    }

    pub fn add_edge_from_existing_vertices(
        &mut self,
        a: NodeIndex,
        b: NodeIndex,
        data: E,
    ) -> Option<EdgeIndex> {
        if a == b || a >= self.nodes.len() || b >= self.nodes.len() {
            return None;
        }
        let index = self.edges.len();
        self.edges.push(GraphEdge {
            index,
            nodes: [a, b],
            data,
        });
        self.faces.clear();
        self.refresh_adjacency_at_node(a);
        self.refresh_adjacency_at_node(b);
        Some(index)
    }

    /// Remove edge `i`, returning its payload. Later edges shift down by one.
    pub fn remove_edge(&mut self, i: EdgeIndex) -> Option<E> {
        if i >= self.edges.len() {
            return None;
        }
        let removed = self.edges.remove(i);
        self.reindex_edges();
        self.faces.clear();
        self.refresh_adjacencies();
        Some(removed.data)
    }

    /// Remove every edge matching `pred`; returns how many went.
    pub fn remove_edges_where(&mut self, pred: impl Fn(&GraphEdge<E>) -> bool) -> usize {
        let before = self.edges.len();
        self.edges.retain(|e| !pred(e));
        let removed = before - self.edges.len();
        if removed > 0 {
            self.reindex_edges();
            self.faces.clear();
            self.refresh_adjacencies();
        }
        removed
    }

    pub fn remove_isolated_nodes(&mut self) -> usize {
        let mut used = vec![false; self.nodes.len()];
        for e in &self.edges {
            used[e.nodes[0]] = true;
            used[e.nodes[1]] = true;
        }
        let removed = used.iter().filter(|u| !**u).count();
        if removed > 0 {
            let identity: Vec<NodeIndex> = (0..self.nodes.len()).collect();
            self.retain_nodes(&used, &identity);
        }
        removed
    }

    /// Keep nodes flagged in `keep`; edges are re-pointed through `target`
    /// (a node index per old node, itself a kept node) and renumbered.
    fn retain_nodes(&mut self, keep: &[bool], target: &[NodeIndex]) {
        let mut renumber = vec![usize::MAX; self.nodes.len()];
        let mut next = 0;
        for (i, k) in keep.iter().enumerate() {
            if *k {
                renumber[i] = next;
                next += 1;
            }
        }
        for e in &mut self.edges {
            e.nodes = e.nodes.map(|n| renumber[target[n]]);
        }
        let old = std::mem::take(&mut self.nodes);
        self.nodes = old
            .into_iter()
            .zip(keep)
            .filter_map(|(n, k)| k.then_some(n))
            .collect();
        for (i, n) in self.nodes.iter_mut().enumerate() {
            n.index = i;
        }
        self.faces.clear();
        self.refresh_adjacencies();
    }

    fn reindex_edges(&mut self) {
        for (i, e) in self.edges.iter_mut().enumerate() {
            e.index = i;
        }
    }

    // ---- adjacency ---------------------------------------------------------

    pub fn refresh_adjacency_at_node(&mut self, i: NodeIndex) {
        let Some(origin) = self.node_xy(i) else {
            return;
        };
        let mut adjacency: Vec<Adjacent> = self
            .edges
            .iter()
            .filter_map(|e| {
                let other = e.other_node(i)?;
                let p = self.nodes[other].xy();
                Some(Adjacent {
                    node: other,
                    edge: e.index,
                    angle: (p - origin).angle(),
                })
            })
            .collect();
        adjacency.sort_by(|a, b| a.angle.partial_cmp(&b.angle).unwrap_or(Ordering::Equal));
        self.nodes[i].adjacency = adjacency;
    }

    pub fn refresh_adjacencies(&mut self) {
        for n in &mut self.nodes {
            n.adjacency.clear();
        }
        for e in &self.edges {
            let [a, b] = e.nodes;
            let (pa, pb) = (self.nodes[a].xy(), self.nodes[b].xy());
            self.nodes[a].adjacency.push(Adjacent {
                node: b,
                edge: e.index,
                angle: (pb - pa).angle(),
            });
            self.nodes[b].adjacency.push(Adjacent {
                node: a,
                edge: e.index,
                angle: (pa - pb).angle(),
            });
        }
        for n in &mut self.nodes {
            n.adjacency
                .sort_by(|a, b| a.angle.partial_cmp(&b.angle).unwrap_or(Ordering::Equal));
        }
    }

    /// The next adjacency clockwise around `node` after the one leading back
    /// to `from`. Requires current adjacency.
    pub fn clockwise_neighbor_around(&self, node: NodeIndex, from: NodeIndex) -> Option<&Adjacent> {
        let adj = &self.nodes.get(node)?.adjacency;
        let pos = adj.iter().position(|a| a.node == from)?;
        adj.get((pos + adj.len() - 1) % adj.len())
    }

    pub fn connected_edges(&self, node: NodeIndex) -> Vec<EdgeIndex> {
        self.edges
            .iter()
            .filter(|e| e.contains_node(node))
            .map(|e| e.index)
            .collect()
    }

    // ---- cleaning ----------------------------------------------------------

    /// Merge every pair of nodes closer than `eps` (the earlier node absorbs
    /// the later one). Returns the number of nodes removed.
    pub fn merge_duplicate_vertices(&mut self, eps: f64) -> usize {
        let n = self.nodes.len();
        let mut keep = vec![true; n];
        let mut target: Vec<NodeIndex> = (0..n).collect();
        for i in 0..n {
            if !keep[i] {
                continue;
            }
            let pi = self.nodes[i].xy();
            for j in (i + 1)..n {
                if keep[j] && self.nodes[j].xy().distance_to(&pi) < eps {
                    keep[j] = false;
                    target[j] = i;
                }
            }
        }
        let merged = keep.iter().filter(|k| !**k).count();
        if merged > 0 {
            self.retain_nodes(&keep, &target);
        }
        merged
    }

    /// Drop self-loops and repeated node pairs (the first edge wins).
    pub fn prune_edges(&mut self) -> usize {
        let before = self.edges.len();
        let mut seen: HashSet<(NodeIndex, NodeIndex)> = HashSet::new();
        self.edges.retain(|e| {
            let [a, b] = e.nodes;
            a != b && seen.insert((a.min(b), a.max(b)))
        });
        let pruned = before - self.edges.len();
        if pruned > 0 {
            self.reindex_edges();
        }
        pruned
    }

    /// Merge, prune, drop isolated nodes, refresh adjacency, regenerate faces.
    pub fn clean(&mut self, eps_merge: f64) {
        let merged = self.merge_duplicate_vertices(eps_merge);
        let pruned = self.prune_edges();
        let isolated = self.remove_isolated_nodes();
        self.refresh_adjacencies();
        self.generate_faces();
        tracing::debug!(
            merged,
            pruned,
            isolated,
            nodes = self.nodes.len(),
            edges = self.edges.len(),
            faces = self.faces.len(),
            "planar graph clean"
        );
    }

    // ---- intersections -----------------------------------------------------

    /// Crossing point of edges `i` and `j`; `None` if they share a node, are
    /// parallel, or miss each other.
    pub fn edges_intersect(&self, i: EdgeIndex, j: EdgeIndex, eps: f64) -> Option<XY> {
        let (ei, ej) = (self.edges.get(i)?, self.edges.get(j)?);
        if i == j || ei.is_adjacent_to(ej) {
            return None;
        }
        let [a, b] = ei.nodes.map(|n| self.nodes[n].xy());
        let [c, d] = ej.nodes.map(|n| self.nodes[n].xy());
        line_segment_intersection(a, b, c, d, eps)
    }

    /// Split edge `i` at existing node `at`: `i` keeps `(a, at)`, a new edge
    /// takes `(at, b)` with a copy of the payload.
    fn split_edge(&mut self, i: EdgeIndex, at: NodeIndex) -> EdgeIndex {
        let [a, b] = self.edges[i].nodes;
        debug_assert!(a != at && b != at);
        self.edges[i].nodes = [a, at];
        let index = self.edges.len();
        let data = self.edges[i].data.clone();
        self.edges.push(GraphEdge {
            index,
            nodes: [at, b],
            data,
        });
        index
    }

    /// Endpoint of edge `i` within `eps` of `p`.
    fn endpoint_near(&self, i: EdgeIndex, p: XY, eps: f64) -> Option<NodeIndex> {
        self.edges[i]
            .nodes
            .into_iter()
            .find(|&n| self.nodes[n].xy().equivalent(&p, eps))
    }

    /// Split edges wherever they cross each other or pass through a node, until
    /// the graph is planar. Returns the distinct split points.
    pub fn chop(&mut self, eps: f64) -> Vec<XY> {
        let mut points: Vec<XY> = Vec::new();
        let record = |p: XY, points: &mut Vec<XY>| {
            if !points.iter().any(|q| q.equivalent(&p, eps)) {
                points.push(p);
            }
        };
        loop {
            let mut changed = false;

            // Nodes lying inside an edge (T-junctions, collinear overlaps).
            let mut i = 0;
            while i < self.edges.len() {
                for n in 0..self.nodes.len() {
                    if self.edges[i].contains_node(n) {
                        continue;
                    }
                    let Some(seg) = self.edge_segment(i) else {
                        break;
                    };
                    let p = self.nodes[n].xy();
                    if seg.collinear(p, eps)
                        && !p.equivalent(&seg.a, eps)
                        && !p.equivalent(&seg.b, eps)
                    {
                        self.split_edge(i, n);
                        record(p, &mut points);
                        changed = true;
                    }
                }
                i += 1;
            }

            // Proper crossings.
            let mut i = 0;
            while i < self.edges.len() {
                let mut j = i + 1;
                while j < self.edges.len() {
                    if let Some(p) = self.edges_intersect(i, j, eps) {
                        match (self.endpoint_near(i, p, eps), self.endpoint_near(j, p, eps)) {
                            (Some(_), Some(_)) => {}
                            (Some(k), None) => {
                                self.split_edge(j, k);
                                record(p, &mut points);
                                changed = true;
                            }
                            (None, Some(k)) => {
                                self.split_edge(i, k);
                                record(p, &mut points);
                                changed = true;
                            }
                            (None, None) => {
                                let n = self.add_node(p);
                                self.split_edge(i, n);
                                self.split_edge(j, n);
                                record(p, &mut points);
                                changed = true;
                            }
                        }
                    }
                    j += 1;
                }
                i += 1;
            }

            if !changed {
                break;
            }
        }
        self.faces.clear();
        self.refresh_adjacencies();
        tracing::debug!(splits = points.len(), edges = self.edges.len(), "chop");
        points
    }

    // ---- faces -------------------------------------------------------------

    /// Rebuild faces by walking clockwise-next neighbours from every directed
    /// adjacency. Requires current adjacency (see `refresh_adjacencies`).
    pub fn generate_faces(&mut self) {
        let mut faces: Vec<Face> = Vec::new();
        let mut seen: HashSet<Vec<NodeIndex>> = HashSet::new();
        for start in 0..self.nodes.len() {
            for first in self.nodes[start].adjacency.clone() {
                let Some((nodes, edges)) = self.walk_face(start, &first) else {
                    continue;
                };
                let mut key = nodes.clone();
                key.sort_unstable();
                if seen.insert(key) {
                    faces.push(Face {
                        index: faces.len(),
                        nodes,
                        edges,
                    });
                }
            }
        }
        tracing::trace!(faces = faces.len(), "generate_faces");
        self.faces = faces;
    }

    fn walk_face(
        &self,
        start: NodeIndex,
        first: &Adjacent,
    ) -> Option<(Vec<NodeIndex>, Vec<EdgeIndex>)> {
        let mut nodes = vec![start];
        let mut edges = vec![first.edge];
        let (mut prev, mut cur) = (start, first.node);
        for _ in 0..=self.edges.len() {
            if cur == start {
                break;
            }
            if nodes.contains(&cur) {
                return None;
            }
            nodes.push(cur);
            let next = self.clockwise_neighbor_around(cur, prev)?;
            if next.node == prev {
                // dead end
                return None;
            }
            edges.push(next.edge);
            prev = cur;
            cur = next.node;
        }
        if cur != start || nodes.len() < 3 {
            return None;
        }
        let pts: Vec<XY> = nodes.iter().map(|&n| self.nodes[n].xy()).collect();
        // Counter-clockwise walks are bounded faces; the clockwise one is the outside.
        let area = Polygon { points: pts }.signed_area();
        if area <= 0.0 {
            return None;
        }
        Some((nodes, edges))
    }

    // ---- queries -----------------------------------------------------------

    pub fn face_polygon(&self, f: FaceIndex) -> Option<Polygon> {
        let face = self.faces.get(f)?;
        Some(Polygon {
            points: face.nodes.iter().map(|&n| self.nodes[n].xy()).collect(),
        })
    }

    pub fn face_centroid(&self, f: FaceIndex) -> Option<XY> {
        self.face_polygon(f)?.centroid()
    }

    pub fn face_containing(&self, p: XY) -> Option<FaceIndex> {
        (0..self.faces.len()).find(|&f| self.face_polygon(f).is_some_and(|poly| poly.contains(p)))
    }

    /// Faces on either side of edge `e` (0, 1 or 2).
    pub fn faces_adjacent_across(&self, e: EdgeIndex) -> Vec<FaceIndex> {
        self.faces
            .iter()
            .filter(|f| f.edges.contains(&e))
            .map(|f| f.index)
            .collect()
    }

    /// Per face: `(neighbour face, shared edge)` pairs.
    pub fn face_adjacency(&self) -> Vec<Vec<(FaceIndex, EdgeIndex)>> {
        let mut by_edge: Vec<Vec<FaceIndex>> = vec![Vec::new(); self.edges.len()];
        for f in &self.faces {
            for &e in &f.edges {
                if let Some(slot) = by_edge.get_mut(e) {
                    slot.push(f.index);
                }
            }
        }
        let mut out: Vec<Vec<(FaceIndex, EdgeIndex)>> = vec![Vec::new(); self.faces.len()];
        for (e, fs) in by_edge.iter().enumerate() {
            if let [a, b] = fs.as_slice() {
                out[*a].push((*b, e));
                out[*b].push((*a, e));
            }
        }
        out
    }

    pub fn nearest_node(&self, p: XY) -> Option<NodeIndex> {
        self.nodes
            .iter()
            .min_by(|a, b| {
                a.xy()
                    .distance_to(&p)
                    .partial_cmp(&b.xy().distance_to(&p))
                    .unwrap_or(Ordering::Equal)
            })
            .map(|n| n.index)
    }

    /// Nearest edge and the closest point on it.
    pub fn nearest_edge(&self, p: XY) -> Option<(EdgeIndex, XY)> {
        (0..self.edges.len())
            .filter_map(|i| Some((i, self.edge_segment(i)?.nearest_point(p))))
            .min_by(|(_, a), (_, b)| {
                a.distance_to(&p)
                    .partial_cmp(&b.distance_to(&p))
                    .unwrap_or(Ordering::Equal)
            })
    }

    /// Sectors between consecutive adjacencies (requires current adjacency).
    pub fn sectors_at(&self, node: NodeIndex) -> Vec<Sector> {
        self.junction(node).map(|j| j.sectors).unwrap_or_default()
    }

    pub fn junction(&self, node: NodeIndex) -> Option<Junction> {
        self.junction_where(node, |_| true)
    }

    /// Junction restricted to edges matching `pred`.
    pub fn junction_where(
        &self,
        node: NodeIndex,
        pred: impl Fn(&GraphEdge<E>) -> bool,
    ) -> Option<Junction> {
        let n = self.nodes.get(node)?;
        let origin = n.xy();
        let adjacent: Vec<Adjacent> = n
            .adjacency
            .iter()
            .filter(|a| self.edges.get(a.edge).is_some_and(&pred))
            .copied()
            .collect();
        if adjacent.is_empty() {
            return None;
        }
        let sectors = if adjacent.len() < 2 {
            Vec::new()
        } else {
            (0..adjacent.len())
                .map(|k| {
                    let a = self.nodes[adjacent[k].node].xy();
                    let b = self.nodes[adjacent[(k + 1) % adjacent.len()].node].xy();
                    Sector::new(origin, a, b)
                })
                .collect()
        };
        Some(Junction {
            node,
            origin,
            adjacent,
            sectors,
        })
    }
}

/// Parametric segment test: reject by cross-product signs before dividing.
pub fn line_segment_intersection(a: XY, b: XY, c: XY, d: XY, eps: f64) -> Option<XY> {
    let r = b - a;
    let s = d - c;
    let mut denom = r.cross(&s);
    if denom.abs() < eps {
        return None;
    }
    let qp = c - a;
    let mut t_num = qp.cross(&s);
    let mut u_num = qp.cross(&r);
    if denom < 0.0 {
        denom = -denom;
        t_num = -t_num;
        u_num = -u_num;
    }
    let lo = -eps * denom;
    let hi = denom * (1.0 + eps);
    if t_num < lo || t_num > hi || u_num < lo || u_num > hi {
        return None;
    }
    Some(a + r * (t_num / denom))
}
