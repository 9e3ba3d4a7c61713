//! Pointer-driven interaction: vertex drag, camera pan, box selection, zoom.
//!
//! Purpose
//! - Own all mutable puzzle state in one `Session` value and expose one handler
//!   per inbound pointer event.
//! - Keep the machine synchronous: each handler runs to completion and leaves the
//!   session in exactly one `PointerState`.
//!
//! Failure policy
//! - Handlers that must map the pointer into normalized space invert the camera.
//!   If that fails they return `TransformError` and leave the session unchanged;
//!   the adapter decides whether to log and carry on.
//!
//! Layout: `types.rs` (state, buttons, config), `session.rs` (handlers, queries).

mod session;
mod types;

pub use session::Session;
pub use types::{Button, PointerState, ViewCfg};
