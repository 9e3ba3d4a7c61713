//! Tolerance defaults for 2D geometry.
//!
//! Policy
//! - Defaults are fixed constants. Callers that need different tolerances go
//!   through the `_eps` variants rather than changing these.

/// Strict-interior margin on segment parameters: accepted iff `t ∈ (EPS, 1 − EPS)`.
pub const PARAM_EPS: f64 = 1e-6;
/// Determinants with `|det| <= DET_EPS` are treated as singular.
pub const DET_EPS: f64 = 1e-12;
