use nalgebra::Vector2;

use super::cfg::PARAM_EPS;
use super::transform::cross;

/// Strict-interior intersection of two closed segments `a = [a1, a2]`, `b = [b1, b2]`.
///
/// Returns `None` for parallel or collinear pairs (`cross(v, w) == 0` exactly) and
/// whenever either parameter falls outside `(PARAM_EPS, 1 − PARAM_EPS)`. Segments that
/// only share an endpoint therefore never intersect.
pub fn intersect(a: [Vector2<f64>; 2], b: [Vector2<f64>; 2]) -> Option<Vector2<f64>> {
    let v = a[1] - a[0];
    let w = b[1] - b[0];
    let m = a[0] - b[0];
    let delta = cross(v, w);
    if delta == 0.0 {
        return None;
    }
    let t_a = cross(w, m) / delta;
    let t_b = cross(v, m) / delta;
    let inside = |t: f64| t > PARAM_EPS && t < 1.0 - PARAM_EPS;
    if !(inside(t_a) && inside(t_b)) {
        return None;
    }
    Some(a[0] + v * t_a)
}
