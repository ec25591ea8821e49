//! Linear loci: infinite `Line`, one-sided `Ray`, bounded `Edge`.
//!
//! All three share one parametrisation `origin + t · vector` and differ only in
//! which `t` are admissible (`compare_parameter`). A single intersection routine
//! (`intersect`) serves every pairing by consulting both range predicates.

use super::matrix::Matrix;
use super::types::XY;

/// Capability shared by `Line`, `Ray` and `Edge`.
pub trait LinearLocus {
    /// Point at `t = 0`.
    fn origin(&self) -> XY;
    /// Direction; for `Edge` the full span, so `t = 1` is the far endpoint.
    fn vector(&self) -> XY;
    /// Range test on the parameter (Line: any, Ray: `t ≥ −ε`, Edge: `−ε ≤ t ≤ 1+ε`).
    fn compare_parameter(&self, t: f64, eps: f64) -> bool;
    /// Clamp a parameter into the admissible range.
    fn clamp_parameter(&self, t: f64) -> f64;
    fn length(&self) -> f64;

    #[inline]
    fn point_on_line(&self, t: f64) -> XY {
        self.origin() + self.vector() * t
    }

    /// Projection parameter of `p` onto the carrier line.
    fn parameter_of(&self, p: XY) -> f64 {
        let v = self.vector();
        let vv = v.dot(&v);
        if vv == 0.0 {
            return 0.0;
        }
        (p - self.origin()).dot(&v) / vv
    }

    fn nearest_point(&self, p: XY) -> XY {
        self.point_on_line(self.clamp_parameter(self.parameter_of(p)))
    }

    fn distance_to(&self, p: XY) -> f64 {
        self.nearest_point(p).distance_to(&p)
    }

    /// `p` lies on the locus (within `eps`, including the parameter range).
    fn collinear(&self, p: XY, eps: f64) -> bool {
        let Some(u) = self.vector().normalize() else {
            return false;
        };
        let off = p - self.origin();
        if u.cross(&off).abs() >= eps {
            return false;
        }
        let len = self.vector().magnitude();
        self.compare_parameter(self.parameter_of(p), eps / len)
    }

    fn parallel<L: LinearLocus + ?Sized>(&self, other: &L, eps: f64) -> bool {
        match (self.vector().normalize(), other.vector().normalize()) {
            (Some(a), Some(b)) => a.cross(&b).abs() < eps,
            _ => false,
        }
    }

    fn intersection<L: LinearLocus + ?Sized>(&self, other: &L, eps: f64) -> Option<XY> {
        intersect(self, other, eps)
    }

    /// The infinite carrier line.
    fn to_line(&self) -> Line {
        Line::new(self.origin(), self.vector())
    }
}

/// Intersect two loci. `None` when the determinant is within `eps` of zero
/// (parallel or collinear) or when either parameter fails its range test.
pub fn intersect<A, B>(a: &A, b: &B, eps: f64) -> Option<XY>
where
    A: LinearLocus + ?Sized,
    B: LinearLocus + ?Sized,
{
    let (ao, av) = (a.origin(), a.vector());
    let (bo, bv) = (b.origin(), b.vector());
    let det = av.cross(&bv);
    if det.abs() < eps {
        return None;
    }
    let d = bo - ao;
    let t0 = d.cross(&bv) / det;
    let t1 = d.cross(&av) / det;
    if a.compare_parameter(t0, eps) && b.compare_parameter(t1, eps) {
        Some(ao + av * t0)
    } else {
        None
    }
}

/// Infinite line through `point` along `direction`.
#[derive(Clone, Copy, Debug)]
pub struct Line {
    pub point: XY,
    pub direction: XY,
}

impl Line {
    pub fn new(point: impl Into<XY>, direction: impl Into<XY>) -> Self {
        Self {
            point: point.into(),
            direction: direction.into(),
        }
    }

    pub fn from_coords(x: f64, y: f64, dx: f64, dy: f64) -> Self {
        Self::new(XY::new(x, y), XY::new(dx, dy))
    }

    /// Line through two distinct points.
    pub fn from_points(a: impl Into<XY>, b: impl Into<XY>) -> Option<Self> {
        let (a, b) = (a.into(), b.into());
        (b - a).normalize()?;
        Some(Self::new(a, b - a))
    }

    /// Same carrier line (direction sign ignored).
    pub fn equivalent(&self, other: &Line, eps: f64) -> bool {
        self.parallel(other, eps) && self.collinear(other.point, eps)
    }

    pub fn reflect(&self, p: XY) -> XY {
        Matrix::reflection(self).transform(p)
    }

    pub fn transform(&self, m: &Matrix) -> Line {
        Line::new(m.transform(self.point), m.transform_vector(self.direction))
    }
}

impl LinearLocus for Line {
    fn origin(&self) -> XY {
        self.point
    }
    fn vector(&self) -> XY {
        self.direction
    }
    fn compare_parameter(&self, _t: f64, _eps: f64) -> bool {
        true
    }
    fn clamp_parameter(&self, t: f64) -> f64 {
        t
    }
    fn length(&self) -> f64 {
        f64::INFINITY
    }
}

/// Half-line from `origin` along `direction`.
#[derive(Clone, Copy, Debug)]
pub struct Ray {
    pub origin: XY,
    pub direction: XY,
}

impl Ray {
    pub fn new(origin: impl Into<XY>, direction: impl Into<XY>) -> Self {
        Self {
            origin: origin.into(),
            direction: direction.into(),
        }
    }

    pub fn from_coords(x: f64, y: f64, dx: f64, dy: f64) -> Self {
        Self::new(XY::new(x, y), XY::new(dx, dy))
    }

    pub fn from_points(origin: impl Into<XY>, through: impl Into<XY>) -> Option<Self> {
        let (o, p) = (origin.into(), through.into());
        (p - o).normalize()?;
        Some(Self::new(o, p - o))
    }

    /// Rotate the direction counter-clockwise about the origin.
    pub fn rotate(&self, angle: f64) -> Ray {
        Ray::new(self.origin, self.direction.rotate(angle))
    }

    pub fn transform(&self, m: &Matrix) -> Ray {
        Ray::new(m.transform(self.origin), m.transform_vector(self.direction))
    }
}

impl LinearLocus for Ray {
    fn origin(&self) -> XY {
        self.origin
    }
    fn vector(&self) -> XY {
        self.direction
    }
    fn compare_parameter(&self, t: f64, eps: f64) -> bool {
        t >= -eps
    }
    fn clamp_parameter(&self, t: f64) -> f64 {
        t.max(0.0)
    }
    fn length(&self) -> f64 {
        f64::INFINITY
    }
}

/// Bounded segment `a → b`.
#[derive(Clone, Copy, Debug)]
pub struct Edge {
    pub a: XY,
    pub b: XY,
}

impl Edge {
    pub fn new(a: impl Into<XY>, b: impl Into<XY>) -> Self {
        Self {
            a: a.into(),
            b: b.into(),
        }
    }

    pub fn from_coords(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self::new(XY::new(x1, y1), XY::new(x2, y2))
    }

    #[inline]
    pub fn endpoints(&self) -> [XY; 2] {
        [self.a, self.b]
    }

    #[inline]
    pub fn midpoint(&self) -> XY {
        self.a.midpoint(&self.b)
    }

    pub fn reversed(&self) -> Edge {
        Edge::new(self.b, self.a)
    }

    pub fn is_degenerate(&self, eps: f64) -> bool {
        self.a.equivalent(&self.b, eps)
    }

    /// Same endpoints in either order.
    pub fn equivalent(&self, other: &Edge, eps: f64) -> bool {
        (self.a.equivalent(&other.a, eps) && self.b.equivalent(&other.b, eps))
            || (self.a.equivalent(&other.b, eps) && self.b.equivalent(&other.a, eps))
    }

    pub fn perpendicular_bisector(&self) -> Option<Line> {
        let v = self.b - self.a;
        v.normalize()?;
        Some(Line::new(self.midpoint(), v.rotate90()))
    }

    pub fn transform(&self, m: &Matrix) -> Edge {
        Edge::new(m.transform(self.a), m.transform(self.b))
    }
}

impl LinearLocus for Edge {
    fn origin(&self) -> XY {
        self.a
    }
    fn vector(&self) -> XY {
        self.b - self.a
    }
    fn compare_parameter(&self, t: f64, eps: f64) -> bool {
        t >= -eps && t <= 1.0 + eps
    }
    fn clamp_parameter(&self, t: f64) -> f64 {
        t.clamp(0.0, 1.0)
    }
    fn length(&self) -> f64 {
        self.a.distance_to(&self.b)
    }
}

impl From<Edge> for Line {
    fn from(e: Edge) -> Self {
        Line::new(e.a, e.b - e.a)
    }
}

impl From<Ray> for Line {
    fn from(r: Ray) -> Self {
        Line::new(r.origin, r.direction)
    }
}

impl From<&Edge> for Line {
    fn from(e: &Edge) -> Self {
        Line::from(*e)
    }
}

impl From<&Line> for Line {
    fn from(l: &Line) -> Self {
        *l
    }
}

impl From<Edge> for Ray {
    fn from(e: Edge) -> Self {
        Ray::new(e.a, e.b - e.a)
    }
}

impl From<[f64; 4]> for Edge {
    fn from([x1, y1, x2, y2]: [f64; 4]) -> Self {
        Edge::from_coords(x1, y1, x2, y2)
    }
}

impl From<(XY, XY)> for Edge {
    fn from((a, b): (XY, XY)) -> Self {
        Edge::new(a, b)
    }
}
