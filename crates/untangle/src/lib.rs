//! Planar-graph untangling puzzle: geometry kernel, generator and interaction core.
//!
//! The crate owns no display surface. An adapter feeds pointer events into a
//! [`interaction::Session`] and draws the [`scene::Scene`] it derives each frame.
//!
//! Modules, leaves first
//! - `geom2`: homogeneous 3×3 transforms and strict segment intersection.
//! - `camera`: normalized ↔ screen mapping with pan and wheel zoom.
//! - `graph`: validated vertex/edge storage and the crossing-free generator.
//! - `interaction`: pointer state machine over a `Session`.
//! - `scene`: per-frame screen geometry and crossing list.

pub mod camera;
pub mod geom2;
pub mod graph;
pub mod interaction;
pub mod scene;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use geom2::{Mat3, TransformError, Vec2, Vec3};

/// Common exports for adapters.
pub mod prelude {
    pub use crate::camera::{Camera, ZoomAnchor};
    pub use crate::geom2::{Mat3, TransformError, Vec2};
    pub use crate::graph::{generate_graph, generate_seeded, Edge, Graph, GraphError, PuzzleSeed};
    pub use crate::interaction::{Button, PointerState, Session, ViewCfg};
    pub use crate::scene::{Crossing, Rect, Scene};
}
