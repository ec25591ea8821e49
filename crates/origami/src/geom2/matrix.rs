//! Affine transforms in homogeneous 3×4 form: `p ↦ M p + t`.
//!
//! The linear part is 3×3 so that folds by angles other than 180° can lift
//! points out of the plane; pure 2D maps keep the third row/column at identity.

use nalgebra::{Matrix3, Rotation3, Unit, Vector3};

use super::lines::{Line, LinearLocus};
use super::types::XY;

#[derive(Clone, Copy, Debug)]
pub struct Matrix {
    pub m: Matrix3<f64>,
    pub t: Vector3<f64>,
}

impl Default for Matrix {
    fn default() -> Self {
        Self::identity()
    }
}

impl Matrix {
    #[inline]
    pub fn identity() -> Self {
        Self {
            m: Matrix3::identity(),
            t: Vector3::zeros(),
        }
    }

    /// 2D affine map in SVG order: `x' = a x + c y + tx`, `y' = b x + d y + ty`.
    pub fn new(a: f64, b: f64, c: f64, d: f64, tx: f64, ty: f64) -> Self {
        Self {
            m: Matrix3::new(a, c, 0.0, b, d, 0.0, 0.0, 0.0, 1.0),
            t: Vector3::new(tx, ty, 0.0),
        }
    }

    pub fn translation(tx: f64, ty: f64) -> Self {
        Self {
            m: Matrix3::identity(),
            t: Vector3::new(tx, ty, 0.0),
        }
    }

    /// Uniform scale about `origin`.
    pub fn scale(s: f64, origin: impl Into<XY>) -> Self {
        let o = origin.into().vector3();
        let m = Matrix3::new(s, 0.0, 0.0, 0.0, s, 0.0, 0.0, 0.0, 1.0);
        Self::about(m, o)
    }

    /// Counter-clockwise rotation in the plane about `origin`.
    pub fn rotation(angle: f64, origin: impl Into<XY>) -> Self {
        let (s, c) = angle.sin_cos();
        let m = Matrix3::new(c, -s, 0.0, s, c, 0.0, 0.0, 0.0, 1.0);
        Self::about(m, origin.into().vector3())
    }

    /// Householder reflection across `line` (z untouched).
    pub fn reflection(line: &Line) -> Self {
        let Some(d) = line.vector().normalize() else {
            return Self::identity();
        };
        let m = Matrix3::new(
            2.0 * d.x * d.x - 1.0,
            2.0 * d.x * d.y,
            0.0,
            2.0 * d.x * d.y,
            2.0 * d.y * d.y - 1.0,
            0.0,
            0.0,
            0.0,
            1.0,
        );
        Self::about(m, line.origin().vector3())
    }

    /// Right-handed 3D rotation by `angle` about `line` lifted into space.
    /// At ±π this agrees with [`Matrix::reflection`] on the plane.
    pub fn axis_rotation(angle: f64, line: &Line) -> Self {
        let v = line.vector();
        let Some(axis) = Unit::try_new(Vector3::new(v.x, v.y, 0.0), 1e-12) else {
            return Self::identity();
        };
        let m = Rotation3::from_axis_angle(&axis, angle).into_inner();
        Self::about(m, line.origin().vector3())
    }

    /// Conjugate a linear map so that it fixes `o`.
    fn about(m: Matrix3<f64>, o: Vector3<f64>) -> Self {
        Self { m, t: o - m * o }
    }

    /// Composition `self ∘ other` (apply `other` first).
    #[inline]
    pub fn mult(&self, other: &Matrix) -> Matrix {
        Matrix {
            m: self.m * other.m,
            t: self.m * other.t + self.t,
        }
    }

    #[inline]
    pub fn inverse(&self) -> Option<Self> {
        self.m.try_inverse().map(|minv| Self {
            m: minv,
            t: -(minv * self.t),
        })
    }

    #[inline]
    pub fn determinant(&self) -> f64 {
        self.m.determinant()
    }

    #[inline]
    pub fn is_orientation_preserving(&self) -> bool {
        self.determinant() > 0.0
    }

    #[inline]
    pub fn transform(&self, p: XY) -> XY {
        XY::from_vector3(self.m * p.vector3() + self.t)
    }

    /// Linear part only (directions ignore translation).
    #[inline]
    pub fn transform_vector(&self, v: XY) -> XY {
        XY::from_vector3(self.m * v.vector3())
    }

    pub fn equivalent(&self, other: &Matrix, eps: f64) -> bool {
        (self.m - other.m).amax() < eps && (self.t - other.t).amax() < eps
    }
}
