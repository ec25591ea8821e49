//! Sector: the wedge at `origin` swept counter-clockwise from `endpoints[0]`
//! to `endpoints[1]`.

use std::f64::consts::TAU;

use super::lines::{Edge, Ray};
use super::types::XY;

#[derive(Clone, Copy, Debug)]
pub struct Sector {
    pub origin: XY,
    pub endpoints: [XY; 2],
}

/// Counter-clockwise sweep from angle `a` to angle `b`, in `[0, 2π)`.
#[inline]
pub fn counter_clockwise_angle(a: f64, b: f64) -> f64 {
    let d = (b - a) % TAU;
    if d < 0.0 {
        d + TAU
    } else {
        d
    }
}

impl Sector {
    pub fn new(origin: impl Into<XY>, start: impl Into<XY>, end: impl Into<XY>) -> Self {
        Self {
            origin: origin.into(),
            endpoints: [start.into(), end.into()],
        }
    }

    /// Sector spanned by two edges sharing an endpoint. `None` if they don't.
    pub fn from_edges(a: &Edge, b: &Edge, eps: f64) -> Option<Self> {
        for (pa, qa) in [(a.a, a.b), (a.b, a.a)] {
            for (pb, qb) in [(b.a, b.b), (b.b, b.a)] {
                if pa.equivalent(&pb, eps) {
                    return Some(Sector::new(pa, qa, qb));
                }
            }
        }
        None
    }

    #[inline]
    pub fn vectors(&self) -> [XY; 2] {
        [
            self.endpoints[0] - self.origin,
            self.endpoints[1] - self.origin,
        ]
    }

    /// Interior angle, measured counter-clockwise and wrapping through 2π.
    pub fn angle(&self) -> f64 {
        let [a, b] = self.vectors();
        counter_clockwise_angle(a.angle(), b.angle())
    }

    /// Ray splitting the interior angle in half.
    pub fn bisect(&self) -> Ray {
        let [a, _] = self.vectors();
        Ray::new(self.origin, a.rotate(self.angle() * 0.5))
    }

    /// The `n − 1` rays dividing the interior angle into `n` equal parts.
    ///
    /// Panics if `n < 2`.
    pub fn subsect(&self, n: usize) -> Vec<Ray> {
        assert!(n >= 2, "subsect requires at least 2 divisions, got {n}");
        let [a, _] = self.vectors();
        let step = self.angle() / n as f64;
        (1..n)
            .map(|i| Ray::new(self.origin, a.rotate(step * i as f64)))
            .collect()
    }

    /// Direction from `origin` to `p` falls inside the sweep.
    pub fn contains(&self, p: XY, eps: f64) -> bool {
        let [a, _] = self.vectors();
        let v = p - self.origin;
        if v.magnitude() < eps {
            return false;
        }
        let sweep = counter_clockwise_angle(a.angle(), v.angle());
        sweep > eps && sweep < self.angle() - eps
    }
}
