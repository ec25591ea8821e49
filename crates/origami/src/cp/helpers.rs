//! Construction recipes built from the primitives: rabbit ear and pleats.

use crate::geom2::{intersect, Edge, Line, LinearLocus, Sector, Triangle};
use crate::graph::{EdgeIndex, FaceIndex};

use super::pattern::CreasePattern;

/// Lines dividing the space between `a` and `b` into `count` equal strips
/// (parallel input) or wedges (crossing input). Excludes `a` and `b`.
pub fn pleat(a: &Line, b: &Line, count: usize, eps: f64) -> Vec<Line> {
    if count < 2 {
        return Vec::new();
    }
    let (Some(ua), Some(ub)) = (a.direction.normalize(), b.direction.normalize()) else {
        return Vec::new();
    };
    match intersect(a, b, eps) {
        None => {
            let offset = b.nearest_point(a.point) - a.point;
            (1..count)
                .map(|i| Line::new(a.point + offset * (i as f64 / count as f64), ua))
                .collect()
        }
        Some(p) => {
            // Split the narrower wedge between the two directions.
            let ub = if ua.cross(&ub) < 0.0 { -ub } else { ub };
            Sector::new(p, p + ua, p + ub)
                .subsect(count)
                .into_iter()
                .map(|r| Line::new(r.origin, r.direction))
                .collect()
        }
    }
}

impl CreasePattern {
    /// Rabbit ear of a triangular face: creases from each corner to the
    /// incenter. `None` for missing or non-triangular faces.
    pub fn rabbit_ear(&self, face: FaceIndex) -> Option<Vec<Edge>> {
        let f = self.graph.face(face)?;
        let [a, b, c] = f.nodes.as_slice() else {
            return None;
        };
        let [a, b, c] = [*a, *b, *c].map(|n| self.graph.node_xy(n));
        let tri = Triangle::new(a?, b?, c?);
        let center = tri.incenter(self.cfg.eps)?;
        Some(tri.points.iter().map(|p| Edge::new(*p, center)).collect())
    }

    pub fn crease_rabbit_ear(&mut self, face: FaceIndex) -> Vec<EdgeIndex> {
        let Some(edges) = self.rabbit_ear(face) else {
            return Vec::new();
        };
        edges
            .into_iter()
            .filter_map(|e| self.crease_edge(e))
            .collect()
    }

    pub fn crease_pleat(&mut self, a: &Line, b: &Line, count: usize) -> Vec<EdgeIndex> {
        let lines = pleat(a, b, count, self.cfg.eps);
        self.crease_lines(&lines)
    }
}
