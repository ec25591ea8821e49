//! `CreasePattern`: a planar graph of creases inside a convex boundary.
//!
//! Invariants after `clean()`:
//! - Border creases trace `boundary` exactly (re-synced by `clean_boundary`).
//! - Every other crease lies inside the boundary and never along it.
//!
//! `crease*` calls clip to the boundary, commit, and mirror through the active
//! symmetry; they do not clean. Call `clean()` before trusting faces,
//! junctions or flat-foldability.

use std::collections::HashSet;

use crate::geom2::cfg::CLEAN_MAX_ROUNDS;
use crate::geom2::{ConvexPolygon, Edge, GeomCfg, Line, LinearLocus, Ray, XY};
use crate::graph::{EdgeIndex, PlanarGraph};

use super::symmetry::Symmetry;
use super::types::{Crease, Orientation};

#[derive(Clone, Debug)]
pub struct CreasePattern {
    pub(crate) graph: PlanarGraph<Crease>,
    pub(crate) boundary: ConvexPolygon,
    pub(crate) symmetry: Option<Symmetry>,
    pub(crate) grid: Option<usize>,
    pub(crate) cfg: GeomCfg,
}

impl Default for CreasePattern {
    fn default() -> Self {
        Self::new()
    }
}

impl CreasePattern {
    /// Unit square sheet with default tolerances.
    pub fn new() -> Self {
        Self::with_cfg(GeomCfg::default())
    }

    pub fn with_cfg(cfg: GeomCfg) -> Self {
        let mut cp = Self {
            graph: PlanarGraph::new(),
            boundary: ConvexPolygon::square(1.0),
            symmetry: None,
            grid: None,
            cfg,
        };
        cp.clean_boundary();
        cp
    }

    #[inline]
    pub fn graph(&self) -> &PlanarGraph<Crease> {
        &self.graph
    }

    #[inline]
    pub fn boundary(&self) -> &ConvexPolygon {
        &self.boundary
    }

    #[inline]
    pub fn cfg(&self) -> &GeomCfg {
        &self.cfg
    }

    pub fn crease_at(&self, i: EdgeIndex) -> Option<Crease> {
        self.graph.edge(i).map(|e| e.data)
    }

    /// Indices of creases with orientation `o`.
    pub fn creases_with(&self, o: Orientation) -> Vec<EdgeIndex> {
        self.graph
            .edges()
            .iter()
            .filter(|e| e.data.orientation == o)
            .map(|e| e.index)
            .collect()
    }

    // ---- boundary ----------------------------------------------------------

    pub fn square(&mut self, width: f64) {
        self.set_boundary(ConvexPolygon::square(width));
    }

    pub fn rectangle(&mut self, width: f64, height: f64) {
        self.set_boundary(ConvexPolygon::rectangle(0.0, 0.0, width, height));
    }

    /// Boundary from the convex hull of `points`. `None` (boundary unchanged)
    /// for degenerate input.
    pub fn polygon(&mut self, points: &[XY]) -> Option<()> {
        let hull = ConvexPolygon::convex_hull(points, self.cfg.eps)?;
        self.set_boundary(hull);
        Some(())
    }

    pub fn set_boundary(&mut self, boundary: ConvexPolygon) {
        self.boundary = boundary;
        self.clean_boundary();
    }

    /// Drop stale border creases and creases that left the sheet, re-add the
    /// boundary edges as borders, then clean.
    pub fn clean_boundary(&mut self) {
        self.graph
            .remove_edges_where(|e| e.data.orientation == Orientation::Border);
        let outside: HashSet<EdgeIndex> = (0..self.graph.edges().len())
            .filter(|&i| {
                self.graph.edge_segment(i).is_some_and(|s| {
                    !(self.boundary.contains(s.a, self.cfg.eps_merge)
                        && self.boundary.contains(s.b, self.cfg.eps_merge))
                })
            })
            .collect();
        if !outside.is_empty() {
            tracing::debug!(removed = outside.len(), "creases outside the new boundary");
            self.graph.remove_edges_where(|e| outside.contains(&e.index));
        }
        for e in self.boundary.edges.clone() {
            self.graph.add_edge_with_vertices(e.a, e.b, Crease::border());
        }
        self.clean();
    }

    // ---- creasing ----------------------------------------------------------

    /// Crease the segment `a`–`b`, clipped to the boundary.
    pub fn crease(&mut self, a: impl Into<XY>, b: impl Into<XY>) -> Option<EdgeIndex> {
        self.crease_edge(Edge::new(a, b))
    }

    pub fn crease_edge(&mut self, edge: impl Into<Edge>) -> Option<EdgeIndex> {
        let clipped = self.boundary.clip_edge(&edge.into(), self.cfg.eps)?;
        self.commit(clipped, Crease::default())
    }

    pub fn crease_line(&mut self, line: impl Into<Line>) -> Option<EdgeIndex> {
        let clipped = self.boundary.clip_line(&line.into(), self.cfg.eps)?;
        self.commit(clipped, Crease::default())
    }

    pub fn crease_lines(&mut self, lines: &[Line]) -> Vec<EdgeIndex> {
        lines.iter().filter_map(|l| self.crease_line(*l)).collect()
    }

    pub fn crease_ray(&mut self, ray: impl Into<Ray>) -> Option<EdgeIndex> {
        let clipped = self.boundary.clip_ray(&ray.into(), self.cfg.eps)?;
        self.commit(clipped, Crease::default())
    }

    /// Like `crease_ray`, but stop at the first existing crease the ray meets.
    pub fn crease_ray_until_intersection(&mut self, ray: impl Into<Ray>) -> Option<EdgeIndex> {
        let ray = ray.into();
        let clipped = self.boundary.clip_ray(&ray, self.cfg.eps)?;
        let start = clipped.a;
        let stop = (0..self.graph.edges().len())
            .filter(|&i| {
                self.graph
                    .edge(i)
                    .is_some_and(|e| e.data.orientation != Orientation::Border)
            })
            .filter_map(|i| {
                let other = self.graph.edge_segment(i)?;
                clipped.intersection(&other, self.cfg.eps)
            })
            .filter(|p| p.distance_to(&start) > self.cfg.eps_merge)
            .min_by(|a, b| a.distance_to(&start).total_cmp(&b.distance_to(&start)));
        let edge = match stop {
            Some(p) => Edge::new(start, p),
            None => clipped,
        };
        self.commit(edge, Crease::default())
    }

    /// Add an already clipped segment and mirror it through the symmetry.
    fn commit(&mut self, edge: Edge, crease: Crease) -> Option<EdgeIndex> {
        if edge.is_degenerate(self.cfg.eps) || self.lies_on_boundary(&edge) {
            return None;
        }
        let i = self.graph.add_edge_with_vertices(edge.a, edge.b, crease)?;
        self.crease_symmetry(i);
        Some(i)
    }

    pub(crate) fn lies_on_boundary(&self, edge: &Edge) -> bool {
        let eps = self.cfg.eps;
        self.boundary
            .edges
            .iter()
            .any(|b| b.collinear(edge.a, eps) && b.collinear(edge.b, eps))
    }

    /// Existing non-border creases on `edge`'s carrier line that overlap it:
    /// pieces of it, creases containing it, and collinear partial overlaps.
    pub fn edges_along(&self, edge: &Edge) -> Vec<EdgeIndex> {
        self.spans_along(edge).into_iter().map(|(i, _, _)| i).collect()
    }

    /// Whether the creases along `edge` cover all of it.
    pub fn covered_along(&self, edge: &Edge) -> bool {
        let len = edge.length();
        if len < self.cfg.eps_merge {
            return false;
        }
        let slack = self.cfg.eps_merge / len;
        let mut spans = self.spans_along(edge);
        spans.sort_by(|a, b| a.1.total_cmp(&b.1));
        let mut reach = 0.0f64;
        for (_, lo, hi) in spans {
            if lo > reach + slack {
                return false;
            }
            reach = reach.max(hi);
        }
        reach >= 1.0 - slack
    }

    /// `(crease, lo, hi)` with `[lo, hi]` the crease's parameter interval on
    /// `edge`, for every overlapping non-border crease on its carrier.
    fn spans_along(&self, edge: &Edge) -> Vec<(EdgeIndex, f64, f64)> {
        let eps = self.cfg.eps_merge;
        let len = edge.length();
        if len < eps {
            return Vec::new();
        }
        let carrier = edge.to_line();
        let slack = eps / len;
        self.graph
            .edges()
            .iter()
            .filter(|e| e.data.orientation != Orientation::Border)
            .filter_map(|e| {
                let s = self.graph.edge_segment(e.index)?;
                if !(carrier.collinear(s.a, eps) && carrier.collinear(s.b, eps)) {
                    return None;
                }
                let (t0, t1) = (edge.parameter_of(s.a), edge.parameter_of(s.b));
                let (lo, hi) = (t0.min(t1), t0.max(t1));
                (hi > slack && lo < 1.0 - slack).then_some((e.index, lo, hi))
            })
            .collect()
    }

    pub fn remove_edge(&mut self, i: EdgeIndex) -> Option<Crease> {
        self.graph.remove_edge(i)
    }

    /// Split crossings and merge coincident nodes until a round changes
    /// nothing, then drop duplicates and rebuild adjacency and faces.
    /// Merging moves endpoints and can open new crossings. Idempotent.
    pub fn clean(&mut self) {
        let mut rounds = 0;
        loop {
            let splits = self.graph.chop(self.cfg.eps).len();
            let merged = self.graph.merge_duplicate_vertices(self.cfg.eps_merge);
            self.graph.prune_edges();
            rounds += 1;
            if splits == 0 && merged == 0 {
                break;
            }
            if rounds == CLEAN_MAX_ROUNDS {
                tracing::warn!(rounds, splits, merged, "clean did not settle");
                break;
            }
        }
        self.graph.clean(self.cfg.eps_merge);
    }

    /// Mutable handle to crease `i`. Orientation changes propagate through
    /// the symmetry.
    pub fn crease_mut(&mut self, i: EdgeIndex) -> Option<CreaseMut<'_>> {
        self.graph.edge(i)?;
        Some(CreaseMut { cp: self, index: i })
    }
}

/// A crease paired with its owning pattern.
pub struct CreaseMut<'a> {
    cp: &'a mut CreasePattern,
    index: EdgeIndex,
}

impl CreaseMut<'_> {
    #[inline]
    pub fn index(&self) -> EdgeIndex {
        self.index
    }

    pub fn crease(&self) -> Crease {
        self.cp.crease_at(self.index).unwrap_or_default()
    }

    /// Replace the payload. A no-op (no propagation) if nothing changes.
    pub fn set(&mut self, crease: Crease) -> &mut Self {
        let eps = self.cp.cfg.eps;
        let Some(edge) = self.cp.graph.edge_mut(self.index) else {
            return self;
        };
        if edge.data.same_as(&crease, eps) {
            return self;
        }
        edge.data = crease;
        self.cp.update_symmetry(self.index);
        self
    }

    pub fn set_orientation(&mut self, orientation: Orientation) -> &mut Self {
        let crease = Crease {
            orientation,
            ..self.crease()
        };
        self.set(crease)
    }

    /// Fold angle in degrees; `None` for a flat fold.
    pub fn set_angle(&mut self, angle: Option<f64>) -> &mut Self {
        let crease = Crease {
            angle: angle.map(f64::abs),
            ..self.crease()
        };
        self.set(crease)
    }

    pub fn mountain(&mut self) -> &mut Self {
        self.set_orientation(Orientation::Mountain)
    }

    pub fn valley(&mut self) -> &mut Self {
        self.set_orientation(Orientation::Valley)
    }

    pub fn mark(&mut self) -> &mut Self {
        self.set_orientation(Orientation::Mark)
    }

    pub fn border(&mut self) -> &mut Self {
        self.set_orientation(Orientation::Border)
    }

    pub fn toggle(&mut self) -> &mut Self {
        let o = self.crease().orientation.toggled();
        self.set_orientation(o)
    }
}
