//! Basic 2D types and tolerances.
//!
//! - `GeomCfg`: centralizes epsilons for predicates, vertex merging and hit tests.
//! - `XY`: point/vector value type with a reserved `z` used by folded states.
//!
//! Code cross-refs: `cfg::{EPSILON, MERGE_EPSILON, HIT_EPSILON}`, `matrix::Matrix`

use std::ops::{Add, Mul, Neg, Sub};

use nalgebra::{Vector2, Vector3};

use super::cfg::{EPSILON, HIT_EPSILON, MERGE_EPSILON};

/// Geometry configuration (tolerances).
#[derive(Clone, Copy, Debug)]
pub struct GeomCfg {
    /// Predicates: intersection, collinearity, containment.
    pub eps: f64,
    /// Vertex merging in `clean()`.
    pub eps_merge: f64,
    /// Cursor hit testing in `nearest()`.
    pub eps_hit: f64,
}

impl Default for GeomCfg {
    fn default() -> Self {
        Self {
            eps: EPSILON,
            eps_merge: MERGE_EPSILON,
            eps_hit: HIT_EPSILON,
        }
    }
}

/// Point or vector in the plane. `z` is carried through transforms but
/// ignored by every 2D predicate.
///
/// There is deliberately no `PartialEq`: compare with [`XY::equivalent`].
#[derive(Clone, Copy, Debug, Default)]
pub struct XY {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl XY {
    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y, z: 0.0 }
    }

    #[inline]
    pub const fn with_z(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Accepts `[x, y]` or `[x, y, z]`; anything shorter is `None`.
    pub fn try_from_slice(coords: &[f64]) -> Option<Self> {
        match *coords {
            [x, y] => Some(Self::new(x, y)),
            [x, y, z, ..] => Some(Self::with_z(x, y, z)),
            _ => None,
        }
    }

    #[inline]
    pub fn vector(&self) -> Vector2<f64> {
        Vector2::new(self.x, self.y)
    }

    #[inline]
    pub fn vector3(&self) -> Vector3<f64> {
        Vector3::new(self.x, self.y, self.z)
    }

    #[inline]
    pub fn from_vector3(v: Vector3<f64>) -> Self {
        Self::with_z(v.x, v.y, v.z)
    }

    /// Epsilon equality on x and y.
    #[inline]
    pub fn equivalent(&self, other: &XY, eps: f64) -> bool {
        (self.x - other.x).abs() < eps && (self.y - other.y).abs() < eps
    }

    #[inline]
    pub fn dot(&self, other: &XY) -> f64 {
        self.x * other.x + self.y * other.y
    }

    /// z-component of the 3D cross product; positive when `other` is
    /// counter-clockwise of `self`.
    #[inline]
    pub fn cross(&self, other: &XY) -> f64 {
        self.x * other.y - self.y * other.x
    }

    #[inline]
    pub fn magnitude(&self) -> f64 {
        self.x.hypot(self.y)
    }

    #[inline]
    pub fn distance_to(&self, other: &XY) -> f64 {
        (*self - *other).magnitude()
    }

    /// Unit vector, or `None` for a zero-length input.
    pub fn normalize(&self) -> Option<XY> {
        let m = self.magnitude();
        if !m.is_finite() || m < EPSILON {
            return None;
        }
        Some(XY::new(self.x / m, self.y / m))
    }

    #[inline]
    pub fn scale(&self, s: f64) -> XY {
        XY::with_z(self.x * s, self.y * s, self.z * s)
    }

    /// Counter-clockwise quarter turn.
    #[inline]
    pub fn rotate90(&self) -> XY {
        XY::new(-self.y, self.x)
    }

    #[inline]
    pub fn rotate270(&self) -> XY {
        XY::new(self.y, -self.x)
    }

    /// Counter-clockwise rotation about the origin.
    pub fn rotate(&self, angle: f64) -> XY {
        let (s, c) = angle.sin_cos();
        XY::new(self.x * c - self.y * s, self.x * s + self.y * c)
    }

    #[inline]
    pub fn midpoint(&self, other: &XY) -> XY {
        XY::new((self.x + other.x) * 0.5, (self.y + other.y) * 0.5)
    }

    #[inline]
    pub fn lerp(&self, other: &XY, t: f64) -> XY {
        XY::new(
            self.x + (other.x - self.x) * t,
            self.y + (other.y - self.y) * t,
        )
    }

    /// Absolute angle `atan2(y, x)` in (−π, π].
    #[inline]
    pub fn angle(&self) -> f64 {
        self.y.atan2(self.x)
    }

    /// Drop `z` (orthographic projection onto the plane).
    #[inline]
    pub fn flatten(&self) -> XY {
        XY::new(self.x, self.y)
    }
}

impl Add for XY {
    type Output = XY;
    #[inline]
    fn add(self, rhs: XY) -> XY {
        XY::with_z(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl Sub for XY {
    type Output = XY;
    #[inline]
    fn sub(self, rhs: XY) -> XY {
        XY::with_z(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl Mul<f64> for XY {
    type Output = XY;
    #[inline]
    fn mul(self, rhs: f64) -> XY {
        self.scale(rhs)
    }
}

impl Neg for XY {
    type Output = XY;
    #[inline]
    fn neg(self) -> XY {
        XY::with_z(-self.x, -self.y, -self.z)
    }
}

impl From<(f64, f64)> for XY {
    fn from((x, y): (f64, f64)) -> Self {
        XY::new(x, y)
    }
}

impl From<[f64; 2]> for XY {
    fn from([x, y]: [f64; 2]) -> Self {
        XY::new(x, y)
    }
}

impl From<[f64; 3]> for XY {
    fn from([x, y, z]: [f64; 3]) -> Self {
        XY::with_z(x, y, z)
    }
}

impl From<Vector2<f64>> for XY {
    fn from(v: Vector2<f64>) -> Self {
        XY::new(v.x, v.y)
    }
}

impl From<&XY> for XY {
    fn from(p: &XY) -> Self {
        *p
    }
}
