//! Homogeneous 2D geometry kernel.
//!
//! Purpose
//! - Provide the 3×3 homogeneous transform algebra used by the camera and the
//!   interaction layer, plus the strict-interior segment intersection test used
//!   by the generator and the crossing counter.
//! - Keep the API small and numerically explicit (eps-aware).
//!
//! Conventions
//! - Points are `Vector2<f64>`; homogeneous points are `Vector3<f64>` with `w = 1`.
//! - `compose(&[A, B, C]) = A·B·C`: the last transform is applied to the point
//!   first. Every caller in this crate builds pipelines in that order.
//!
//! Code cross-refs: `camera::Camera`, `graph::build`, `scene::crossings`.

pub mod cfg;
mod segment;
mod transform;

pub use segment::intersect;
pub use transform::{
    apply, apply2, apply_vector, compose, cross, dist_sq, embed, identity, invert, minmax, scale,
    scale_xy, translate, unembed, TransformError,
};

/// 2D point or displacement.
pub type Vec2 = nalgebra::Vector2<f64>;
/// Homogeneous 2D point.
pub type Vec3 = nalgebra::Vector3<f64>;
/// Homogeneous 2D transform.
pub type Mat3 = nalgebra::Matrix3<f64>;
