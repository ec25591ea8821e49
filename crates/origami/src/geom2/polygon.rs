//! Polygons: general `Polygon`, strict counter-clockwise `ConvexPolygon`,
//! axis-aligned `Rect`, and `Triangle`.
//!
//! `ConvexPolygon` is the crease-pattern boundary: every crease is clipped
//! against it (`clip_edge`, `clip_line`, `clip_ray`).

use std::cmp::Ordering;

use super::cfg::HULL_MAX_ITERATIONS;
use super::lines::{intersect, Edge, LinearLocus, Line, Ray};
use super::matrix::Matrix;
use super::sector::Sector;
use super::types::XY;

/// Simple polygon as an ordered point loop (either winding).
#[derive(Clone, Debug, Default)]
pub struct Polygon {
    pub points: Vec<XY>,
}

impl Polygon {
    pub fn new<P: Into<XY>>(points: impl IntoIterator<Item = P>) -> Self {
        Self {
            points: points.into_iter().map(Into::into).collect(),
        }
    }

    pub fn edges(&self) -> Vec<Edge> {
        loop_edges(&self.points)
    }

    /// Shoelace area; positive for counter-clockwise winding.
    pub fn signed_area(&self) -> f64 {
        signed_area(&self.points)
    }

    /// Area centroid; falls back to the vertex average for degenerate loops.
    pub fn centroid(&self) -> Option<XY> {
        centroid(&self.points)
    }

    /// Even-odd ray casting.
    pub fn contains(&self, p: XY) -> bool {
        let n = self.points.len();
        let mut inside = false;
        for i in 0..n {
            let a = self.points[i];
            let b = self.points[(i + n - 1) % n];
            if (a.y > p.y) != (b.y > p.y) {
                let x = (b.x - a.x) * (p.y - a.y) / (b.y - a.y) + a.x;
                if p.x < x {
                    inside = !inside;
                }
            }
        }
        inside
    }

    pub fn is_convex(&self, eps: f64) -> bool {
        let n = self.points.len();
        if n < 3 {
            return false;
        }
        let sign = self.signed_area().signum();
        (0..n).all(|i| {
            let a = self.points[i];
            let b = self.points[(i + 1) % n];
            let c = self.points[(i + 2) % n];
            (b - a).cross(&(c - b)) * sign >= -eps
        })
    }

    pub fn to_convex(&self) -> Option<ConvexPolygon> {
        ConvexPolygon::from_points(&self.points)
    }
}

/// Convex polygon stored as a counter-clockwise edge loop.
#[derive(Clone, Debug)]
pub struct ConvexPolygon {
    pub edges: Vec<Edge>,
}

impl ConvexPolygon {
    /// Build from an ordered point loop. Clockwise input is reversed.
    /// `None` for fewer than three points or zero area.
    pub fn from_points(points: &[XY]) -> Option<Self> {
        if points.len() < 3 {
            return None;
        }
        let area = signed_area(points);
        if area.abs() < f64::EPSILON {
            return None;
        }
        let mut pts = points.to_vec();
        if area < 0.0 {
            pts.reverse();
        }
        Some(Self {
            edges: loop_edges(&pts),
        })
    }

    pub fn square(width: f64) -> Self {
        Self::rectangle(0.0, 0.0, width, width)
    }

    pub fn rectangle(x: f64, y: f64, width: f64, height: f64) -> Self {
        Rect::new(XY::new(x, y), width, height).to_convex()
    }

    /// Regular `sides`-gon inscribed in a circle, first vertex at angle 0.
    pub fn regular(sides: usize, center: impl Into<XY>, radius: f64) -> Option<Self> {
        let c = center.into();
        let pts: Vec<XY> = (0..sides)
            .map(|i| {
                let a = std::f64::consts::TAU * i as f64 / sides as f64;
                c + XY::new(a.cos(), a.sin()) * radius
            })
            .collect();
        Self::from_points(&pts)
    }

    /// Gift-wrapping hull: start at the lowest point and repeatedly take the
    /// most clockwise candidate (ties: farthest). `None` for degenerate input
    /// or when the walk fails to close within the iteration ceiling.
    pub fn convex_hull(points: &[XY], eps: f64) -> Option<Self> {
        let mut pts: Vec<XY> = Vec::with_capacity(points.len());
        for p in points {
            if !pts.iter().any(|q| q.equivalent(p, eps)) {
                pts.push(*p);
            }
        }
        if pts.len() < 3 {
            return None;
        }
        let start = (0..pts.len()).min_by(|&i, &j| {
            pts[i]
                .y
                .partial_cmp(&pts[j].y)
                .unwrap_or(Ordering::Equal)
                .then(pts[i].x.partial_cmp(&pts[j].x).unwrap_or(Ordering::Equal))
        })?;
        let mut hull = vec![start];
        let mut current = start;
        for _ in 0..HULL_MAX_ITERATIONS {
            let origin = pts[current];
            let mut next: Option<usize> = None;
            for (i, p) in pts.iter().enumerate() {
                if i == current {
                    continue;
                }
                let Some(n) = next else {
                    next = Some(i);
                    continue;
                };
                let c = (pts[n] - origin).cross(&(*p - origin));
                if c < -eps
                    || (c.abs() <= eps && p.distance_to(&origin) > pts[n].distance_to(&origin))
                {
                    next = Some(i);
                }
            }
            let next = next?;
            if next == start {
                let loop_pts: Vec<XY> = hull.iter().map(|&i| pts[i]).collect();
                return Self::from_points(&loop_pts);
            }
            if hull.contains(&next) {
                break;
            }
            hull.push(next);
            current = next;
        }
        tracing::warn!(
            points = pts.len(),
            "convex hull walk did not close; treating input as degenerate"
        );
        None
    }

    pub fn points(&self) -> Vec<XY> {
        self.edges.iter().map(|e| e.a).collect()
    }

    pub fn area(&self) -> f64 {
        signed_area(&self.points())
    }

    pub fn centroid(&self) -> XY {
        let pts = self.points();
        centroid(&pts).unwrap_or_default()
    }

    pub fn bounds(&self) -> Rect {
        Rect::bounding(&self.points()).unwrap_or_default()
    }

    /// Inside or on the boundary (within `eps`).
    pub fn contains(&self, p: XY, eps: f64) -> bool {
        self.edges.iter().all(|e| match e.vector().normalize() {
            Some(u) => u.cross(&(p - e.a)) >= -eps,
            None => true,
        })
    }

    pub fn on_boundary(&self, p: XY, eps: f64) -> bool {
        self.edges.iter().any(|e| e.collinear(p, eps))
    }

    pub fn nearest_point(&self, p: XY) -> Option<XY> {
        self.edges
            .iter()
            .map(|e| e.nearest_point(p))
            .min_by(|a, b| {
                a.distance_to(&p)
                    .partial_cmp(&b.distance_to(&p))
                    .unwrap_or(Ordering::Equal)
            })
    }

    pub fn transform(&self, m: &Matrix) -> Option<Self> {
        let pts: Vec<XY> = self.points().into_iter().map(|p| m.transform(p)).collect();
        Self::from_points(&pts)
    }

    /// Boundary crossings of `locus`, deduplicated and sorted along it.
    fn crossings<L: LinearLocus>(&self, locus: &L, eps: f64) -> Vec<XY> {
        let mut out: Vec<XY> = Vec::new();
        for e in &self.edges {
            if let Some(p) = intersect(locus, e, eps) {
                if !out.iter().any(|q| q.equivalent(&p, eps)) {
                    out.push(p);
                }
            }
        }
        out.sort_by(|a, b| {
            locus
                .parameter_of(*a)
                .partial_cmp(&locus.parameter_of(*b))
                .unwrap_or(Ordering::Equal)
        });
        out
    }

    pub fn clip_edge(&self, edge: &Edge, eps: f64) -> Option<Edge> {
        let a_in = self.contains(edge.a, eps);
        let b_in = self.contains(edge.b, eps);
        let clipped = if a_in && b_in {
            *edge
        } else {
            let pts = self.crossings(edge, eps);
            match pts.as_slice() {
                [] => return None,
                [p] if a_in => Edge::new(edge.a, *p),
                [p] if b_in => Edge::new(*p, edge.b),
                [_] => return None,
                [first, .., last] => Edge::new(*first, *last),
            }
        };
        non_degenerate(clipped, eps)
    }

    pub fn clip_line(&self, line: &Line, eps: f64) -> Option<Edge> {
        match self.crossings(line, eps).as_slice() {
            [first, .., last] => non_degenerate(Edge::new(*first, *last), eps),
            _ => None,
        }
    }

    pub fn clip_ray(&self, ray: &Ray, eps: f64) -> Option<Edge> {
        let pts = self.crossings(ray, eps);
        let clipped = if self.contains(ray.origin, eps) {
            Edge::new(ray.origin, *pts.last()?)
        } else {
            match pts.as_slice() {
                [first, .., last] => Edge::new(*first, *last),
                _ => return None,
            }
        };
        non_degenerate(clipped, eps)
    }
}

/// Axis-aligned rectangle with `origin` at its minimum corner.
#[derive(Clone, Copy, Debug, Default)]
pub struct Rect {
    pub origin: XY,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(origin: impl Into<XY>, width: f64, height: f64) -> Self {
        Self {
            origin: origin.into(),
            width,
            height,
        }
    }

    pub fn bounding(points: &[XY]) -> Option<Self> {
        let first = points.first()?;
        let (mut lo, mut hi) = (*first, *first);
        for p in points {
            lo = XY::new(lo.x.min(p.x), lo.y.min(p.y));
            hi = XY::new(hi.x.max(p.x), hi.y.max(p.y));
        }
        Some(Self::new(lo, hi.x - lo.x, hi.y - lo.y))
    }

    pub fn center(&self) -> XY {
        self.origin + XY::new(self.width * 0.5, self.height * 0.5)
    }

    /// Counter-clockwise from the minimum corner.
    pub fn corners(&self) -> [XY; 4] {
        let o = self.origin;
        [
            o,
            o + XY::new(self.width, 0.0),
            o + XY::new(self.width, self.height),
            o + XY::new(0.0, self.height),
        ]
    }

    pub fn contains(&self, p: XY, eps: f64) -> bool {
        p.x >= self.origin.x - eps
            && p.y >= self.origin.y - eps
            && p.x <= self.origin.x + self.width + eps
            && p.y <= self.origin.y + self.height + eps
    }

    pub fn to_convex(&self) -> ConvexPolygon {
        ConvexPolygon {
            edges: loop_edges(&self.corners()),
        }
    }
}

#[derive(Clone, Copy, Debug)]
pub struct Triangle {
    pub points: [XY; 3],
}

impl Triangle {
    /// Stored counter-clockwise regardless of input winding.
    pub fn new(a: impl Into<XY>, b: impl Into<XY>, c: impl Into<XY>) -> Self {
        let (a, b, c) = (a.into(), b.into(), c.into());
        if (b - a).cross(&(c - a)) < 0.0 {
            Self { points: [a, c, b] }
        } else {
            Self { points: [a, b, c] }
        }
    }

    pub fn area(&self) -> f64 {
        signed_area(&self.points)
    }

    /// Interior angle sectors, one per vertex.
    pub fn sectors(&self) -> [Sector; 3] {
        let p = self.points;
        [0, 1, 2].map(|i| Sector::new(p[i], p[(i + 1) % 3], p[(i + 2) % 3]))
    }

    /// Average of the pairwise intersections of the three angle bisectors.
    pub fn incenter(&self, eps: f64) -> Option<XY> {
        let rays = self.sectors().map(|s| s.bisect());
        let hits: Vec<XY> = [(0, 1), (1, 2), (2, 0)]
            .iter()
            .filter_map(|&(i, j)| intersect(&rays[i], &rays[j], eps))
            .collect();
        if hits.is_empty() {
            return None;
        }
        let sum = hits.iter().fold(XY::default(), |acc, p| acc + *p);
        Some(sum * (1.0 / hits.len() as f64))
    }

    pub fn circumcenter(&self, eps: f64) -> Option<XY> {
        let [a, b, c] = self.points;
        let ab = Edge::new(a, b).perpendicular_bisector()?;
        let bc = Edge::new(b, c).perpendicular_bisector()?;
        intersect(&ab, &bc, eps)
    }

    pub fn contains(&self, p: XY, eps: f64) -> bool {
        let [a, b, c] = self.points;
        [(a, b), (b, c), (c, a)]
            .iter()
            .all(|(u, v)| (*v - *u).cross(&(p - *u)) >= -eps)
    }
}

fn loop_edges(points: &[XY]) -> Vec<Edge> {
    let n = points.len();
    (0..n)
        .map(|i| Edge::new(points[i], points[(i + 1) % n]))
        .collect()
}

fn signed_area(points: &[XY]) -> f64 {
    let n = points.len();
    let twice: f64 = (0..n)
        .map(|i| points[i].cross(&points[(i + 1) % n]))
        .sum();
    twice * 0.5
}

fn centroid(points: &[XY]) -> Option<XY> {
    let n = points.len();
    if n == 0 {
        return None;
    }
    let area = signed_area(points);
    if area.abs() < f64::EPSILON {
        let sum = points.iter().fold(XY::default(), |acc, p| acc + *p);
        return Some(sum * (1.0 / n as f64));
    }
    let (mut cx, mut cy) = (0.0, 0.0);
    for i in 0..n {
        let (p, q) = (points[i], points[(i + 1) % n]);
        let w = p.cross(&q);
        cx += (p.x + q.x) * w;
        cy += (p.y + q.y) * w;
    }
    let k = 1.0 / (6.0 * area);
    Some(XY::new(cx * k, cy * k))
}

fn non_degenerate(edge: Edge, eps: f64) -> Option<Edge> {
    if edge.is_degenerate(eps) {
        None
    } else {
        Some(edge)
    }
}
