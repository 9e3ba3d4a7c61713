//! Affine transforms in homogeneous coordinates.
//!
//! All builders return `Matrix3<f64>` acting on column vectors `(x, y, 1)`.

use std::fmt;

use nalgebra::{Matrix3, Vector2, Vector3};

use super::cfg::DET_EPS;

/// Errors surfaced by transform algebra.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TransformError {
    /// Inversion requested for a matrix whose determinant is (near) zero or not finite.
    SingularTransform { det: f64 },
}

impl fmt::Display for TransformError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransformError::SingularTransform { det } => {
                write!(f, "transform is not invertible (det = {det:e})")
            }
        }
    }
}

impl std::error::Error for TransformError {}

/// Scalar 2D cross product (z-component of the 3D cross product).
#[inline]
pub fn cross(v: Vector2<f64>, w: Vector2<f64>) -> f64 {
    v.x * w.y - v.y * w.x
}

/// Squared Euclidean length.
#[inline]
pub fn dist_sq(v: Vector2<f64>) -> f64 {
    v.dot(&v)
}

/// `(min, max)` of two reals.
#[inline]
pub fn minmax(a: f64, b: f64) -> (f64, f64) {
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}

#[inline]
pub fn embed(v: Vector2<f64>) -> Vector3<f64> {
    Vector3::new(v.x, v.y, 1.0)
}

/// Perspective divide. Undefined (non-finite) for `v.z == 0`.
#[inline]
pub fn unembed(v: Vector3<f64>) -> Vector2<f64> {
    Vector2::new(v.x / v.z, v.y / v.z)
}

#[inline]
pub fn apply(m: &Matrix3<f64>, v: Vector3<f64>) -> Vector3<f64> {
    m * v
}

/// Map a 2D point: `unembed(apply(m, embed(p)))`.
#[inline]
pub fn apply2(m: &Matrix3<f64>, p: Vector2<f64>) -> Vector2<f64> {
    unembed(apply(m, embed(p)))
}

/// Map a displacement (`w = 0`): only the linear part of `m` acts.
#[inline]
pub fn apply_vector(m: &Matrix3<f64>, d: Vector2<f64>) -> Vector2<f64> {
    let r = m * Vector3::new(d.x, d.y, 0.0);
    Vector2::new(r.x, r.y)
}

/// Fold a pipeline into one matrix: `compose(&[A, B, C]) = A·B·C`.
///
/// The LAST transform is applied to the point first; `compose(&[])` is the identity.
pub fn compose(ms: &[Matrix3<f64>]) -> Matrix3<f64> {
    ms.iter().fold(Matrix3::identity(), |acc, m| acc * m)
}

/// Inverse via nalgebra, rejecting near-singular input instead of returning NaN/Inf.
pub fn invert(m: &Matrix3<f64>) -> Result<Matrix3<f64>, TransformError> {
    let det = m.determinant();
    if !det.is_finite() || det.abs() <= DET_EPS {
        return Err(TransformError::SingularTransform { det });
    }
    m.try_inverse().ok_or(TransformError::SingularTransform { det })
}

#[inline]
pub fn identity() -> Matrix3<f64> {
    Matrix3::identity()
}

pub fn translate(v: Vector2<f64>) -> Matrix3<f64> {
    Matrix3::new(
        1.0, 0.0, v.x, //
        0.0, 1.0, v.y, //
        0.0, 0.0, 1.0,
    )
}

/// Non-uniform scale about the origin.
pub fn scale_xy(v: Vector2<f64>) -> Matrix3<f64> {
    Matrix3::new(
        v.x, 0.0, 0.0, //
        0.0, v.y, 0.0, //
        0.0, 0.0, 1.0,
    )
}

/// Uniform scale about the origin.
#[inline]
pub fn scale(s: f64) -> Matrix3<f64> {
    scale_xy(Vector2::new(s, s))
}
