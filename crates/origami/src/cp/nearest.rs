//! Cursor queries: the nearest feature of every kind to a point.

use crate::geom2::{Edge, Line, Sector, XY};
use crate::graph::{EdgeIndex, FaceIndex, Junction, NodeIndex};

use super::pattern::CreasePattern;

#[derive(Clone, Debug, Default)]
pub struct Nearest {
    pub node: Option<NodeIndex>,
    pub edge: Option<EdgeIndex>,
    pub face: Option<FaceIndex>,
    /// Sector at `node` whose wedge contains the query point.
    pub sector: Option<Sector>,
    pub junction: Option<Junction>,
    pub grid_point: Option<XY>,
    /// Nearest grid line, clipped to the boundary.
    pub grid_line: Option<Edge>,
}

impl CreasePattern {
    /// Overlay a `divisions × divisions` grid on the boundary's bounding box.
    pub fn set_grid(&mut self, divisions: Option<usize>) {
        self.grid = divisions.filter(|&d| d > 0);
    }

    #[inline]
    pub fn grid(&self) -> Option<usize> {
        self.grid
    }

    pub fn nearest(&self, p: impl Into<XY>) -> Nearest {
        let p = p.into();
        let node = self.graph.nearest_node(p);
        let junction = node.and_then(|n| self.graph.junction(n));
        let sector = junction.as_ref().and_then(|j| {
            j.sectors
                .iter()
                .find(|s| s.contains(p, self.cfg.eps))
                .copied()
        });
        let (grid_point, grid_line) = self.nearest_grid(p).unzip();
        Nearest {
            node,
            edge: self.graph.nearest_edge(p).map(|(e, _)| e),
            face: self.graph.face_containing(p),
            sector,
            junction,
            grid_point,
            grid_line: grid_line.flatten(),
        }
    }

    fn nearest_grid(&self, p: XY) -> Option<(XY, Option<Edge>)> {
        let n = self.grid? as f64;
        let r = self.boundary.bounds();
        let (sx, sy) = (r.width / n, r.height / n);
        if sx <= 0.0 || sy <= 0.0 {
            return None;
        }
        let i = ((p.x - r.origin.x) / sx).round().clamp(0.0, n);
        let j = ((p.y - r.origin.y) / sy).round().clamp(0.0, n);
        let point = XY::new(r.origin.x + i * sx, r.origin.y + j * sy);
        let line = if (p.x - point.x).abs() <= (p.y - point.y).abs() {
            Line::new(point, (0.0, 1.0))
        } else {
            Line::new(point, (1.0, 0.0))
        };
        Some((point, self.boundary.clip_line(&line, self.cfg.eps)))
    }
}
