//! Symmetry groups and crease replication.
//!
//! A group only produces images of a segment; committing them (clipping,
//! skipping duplicates, copying orientation) is the pattern's job.

use std::f64::consts::TAU;

use crate::geom2::{
    cfg::BIREFLECTIVE_MAX_ITERATIONS, ConvexPolygon, Edge, Line, LinearLocus, Matrix, XY,
};
use crate::graph::EdgeIndex;

use super::pattern::CreasePattern;

/// Capability shared by every symmetry variant.
pub trait SymmetryGroup {
    /// Images of `edge` under every non-identity group element that can reach
    /// the sheet. The original is never included.
    fn images(&self, edge: &Edge, boundary: &ConvexPolygon, eps: f64) -> Vec<Edge>;
}

/// Mirror across one line.
#[derive(Clone, Copy, Debug)]
pub struct Reflective {
    pub line: Line,
}

impl SymmetryGroup for Reflective {
    fn images(&self, edge: &Edge, _boundary: &ConvexPolygon, eps: f64) -> Vec<Edge> {
        let image = edge.transform(&Matrix::reflection(&self.line));
        if image.equivalent(edge, eps) {
            Vec::new()
        } else {
            vec![image]
        }
    }
}

/// Group generated by two mirrors, e.g. both diagonals of a square.
#[derive(Clone, Copy, Debug)]
pub struct BiReflective {
    pub a: Line,
    pub b: Line,
}

impl SymmetryGroup for BiReflective {
    /// Orbit closure under alternating reflections. Mirrors at an irrational
    /// angle never close; the walk stops at a hard iteration ceiling.
    fn images(&self, edge: &Edge, _boundary: &ConvexPolygon, eps: f64) -> Vec<Edge> {
        let mirrors = [Matrix::reflection(&self.a), Matrix::reflection(&self.b)];
        let mut orbit = vec![*edge];
        let mut cursor = 0;
        let mut steps = 0;
        while cursor < orbit.len() {
            let current = orbit[cursor];
            cursor += 1;
            for m in &mirrors {
                steps += 1;
                if steps > BIREFLECTIVE_MAX_ITERATIONS {
                    tracing::warn!(
                        images = orbit.len() - 1,
                        "bi-reflective orbit did not close; returning a partial orbit"
                    );
                    orbit.remove(0);
                    return orbit;
                }
                let image = current.transform(m);
                if !orbit.iter().any(|e| e.equivalent(&image, eps)) {
                    orbit.push(image);
                }
            }
        }
        orbit.remove(0);
        orbit
    }
}

/// `order`-fold rotation about `center`.
#[derive(Clone, Copy, Debug)]
pub struct Rotational {
    pub center: XY,
    pub order: usize,
}

impl Rotational {
    pub fn generator(&self) -> Matrix {
        Matrix::rotation(TAU / self.order.max(1) as f64, self.center)
    }
}

impl SymmetryGroup for Rotational {
    fn images(&self, edge: &Edge, _boundary: &ConvexPolygon, eps: f64) -> Vec<Edge> {
        let step = self.generator();
        let mut out: Vec<Edge> = Vec::new();
        let mut current = *edge;
        for _ in 1..self.order {
            current = current.transform(&step);
            if !current.equivalent(edge, eps) && !out.iter().any(|e| e.equivalent(&current, eps))
            {
                out.push(current);
            }
        }
        out
    }
}

/// Translational tiling by the lattice spanned by `u` and `v`.
#[derive(Clone, Copy, Debug)]
pub struct Tile {
    pub u: XY,
    pub v: XY,
}

impl Tile {
    /// Largest lattice coordinate tried in either direction.
    const MAX_REACH: i64 = 64;
}

impl SymmetryGroup for Tile {
    fn images(&self, edge: &Edge, boundary: &ConvexPolygon, eps: f64) -> Vec<Edge> {
        let step = self.u.magnitude().min(self.v.magnitude());
        if step < eps || self.u.cross(&self.v).abs() < eps {
            return Vec::new();
        }
        let rect = boundary.bounds();
        let reach = ((rect.width + rect.height + edge.length()) / step).ceil() as i64 + 1;
        let reach = reach.min(Self::MAX_REACH);
        let mut out = Vec::new();
        for i in -reach..=reach {
            for j in -reach..=reach {
                if i == 0 && j == 0 {
                    continue;
                }
                let shift = self.u * i as f64 + self.v * j as f64;
                let image = edge.transform(&Matrix::translation(shift.x, shift.y));
                if rect.contains(image.a, eps)
                    || rect.contains(image.b, eps)
                    || boundary.clip_edge(&image, eps).is_some()
                {
                    out.push(image);
                }
            }
        }
        out
    }
}

#[derive(Clone, Copy, Debug)]
pub enum Symmetry {
    Reflective(Reflective),
    BiReflective(BiReflective),
    Rotational(Rotational),
    Tile(Tile),
}

impl SymmetryGroup for Symmetry {
    fn images(&self, edge: &Edge, boundary: &ConvexPolygon, eps: f64) -> Vec<Edge> {
        match self {
            Symmetry::Reflective(s) => s.images(edge, boundary, eps),
            Symmetry::BiReflective(s) => s.images(edge, boundary, eps),
            Symmetry::Rotational(s) => s.images(edge, boundary, eps),
            Symmetry::Tile(s) => s.images(edge, boundary, eps),
        }
    }
}

impl CreasePattern {
    #[inline]
    pub fn symmetry(&self) -> Option<&Symmetry> {
        self.symmetry.as_ref()
    }

    pub fn set_symmetry(&mut self, symmetry: Option<Symmetry>) {
        self.symmetry = symmetry;
    }

    pub fn no_symmetry(&mut self) {
        self.symmetry = None;
    }

    /// Mirror across the vertical line through the sheet's center.
    pub fn book_symmetry(&mut self) {
        let c = self.boundary.bounds().center();
        self.symmetry = Some(Symmetry::Reflective(Reflective {
            line: Line::new(c, (0.0, 1.0)),
        }));
    }

    /// Mirror across the bounding box diagonal from its minimum corner.
    pub fn diagonal_symmetry(&mut self) {
        let r = self.boundary.bounds();
        self.symmetry = Some(Symmetry::Reflective(Reflective {
            line: Line::new(r.origin, (r.width, r.height)),
        }));
    }

    /// Both bounding box diagonals.
    pub fn bird_symmetry(&mut self) {
        let r = self.boundary.bounds();
        let [lo, right, _, top] = r.corners();
        self.symmetry = Some(Symmetry::BiReflective(BiReflective {
            a: Line::new(lo, (r.width, r.height)),
            b: Line::new(right, top - right),
        }));
    }

    /// `order`-fold rotation about the boundary centroid.
    pub fn rotational_symmetry(&mut self, order: usize) {
        self.symmetry = Some(Symmetry::Rotational(Rotational {
            center: self.boundary.centroid(),
            order,
        }));
    }

    pub fn tile_symmetry(&mut self, u: impl Into<XY>, v: impl Into<XY>) {
        self.symmetry = Some(Symmetry::Tile(Tile {
            u: u.into(),
            v: v.into(),
        }));
    }

    fn symmetric_images(&self, i: EdgeIndex) -> Vec<Edge> {
        let (Some(symmetry), Some(seg)) = (self.symmetry.as_ref(), self.graph.edge_segment(i))
        else {
            return Vec::new();
        };
        symmetry
            .images(&seg, &self.boundary, self.cfg.eps_merge)
            .iter()
            .filter_map(|img| self.boundary.clip_edge(img, self.cfg.eps))
            .filter(|img| !img.is_degenerate(self.cfg.eps_merge) && !self.lies_on_boundary(img))
            .collect()
    }

    /// Commit the images of crease `i` with its orientation and angle,
    /// skipping images that existing creases already cover end to end.
    /// Partly covered images are added whole; `clean()` splits and dedups
    /// the overlap. Returns the new edges.
    pub fn crease_symmetry(&mut self, i: EdgeIndex) -> Vec<EdgeIndex> {
        let Some(crease) = self.crease_at(i) else {
            return Vec::new();
        };
        let mut added = Vec::new();
        for img in self.symmetric_images(i) {
            if self.covered_along(&img) {
                continue;
            }
            if let Some(e) = self.graph.add_edge_with_vertices(img.a, img.b, crease) {
                added.push(e);
            }
        }
        if !added.is_empty() {
            tracing::trace!(source = i, images = added.len(), "crease symmetry");
        }
        added
    }

    /// Copy crease `i`'s orientation and angle onto every crease overlapping
    /// its images (pieces, containing creases, partial overlaps), creating
    /// any image the existing creases do not cover.
    pub fn update_symmetry(&mut self, i: EdgeIndex) {
        let Some(crease) = self.crease_at(i) else {
            return;
        };
        for img in self.symmetric_images(i) {
            for e in self.edges_along(&img) {
                if let Some(edge) = self.graph.edge_mut(e) {
                    edge.data = crease;
                }
            }
            if !self.covered_along(&img) {
                self.graph.add_edge_with_vertices(img.a, img.b, crease);
            }
        }
    }
}
