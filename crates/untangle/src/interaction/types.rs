use nalgebra::Vector2;

use crate::camera::ZoomAnchor;
use crate::geom2::Vec2;

/// Mouse buttons the machine reacts to. Everything else is ignored.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Button {
    Primary,
    Secondary,
    Other(u16),
}

impl Button {
    /// DOM-style button code: 0 primary, 2 secondary.
    pub fn from_code(code: u16) -> Self {
        match code {
            0 => Button::Primary,
            2 => Button::Secondary,
            c => Button::Other(c),
        }
    }
}

/// Current pointer gesture. Box corners are in normalized space.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum PointerState {
    #[default]
    Idle,
    DraggingVertex(usize),
    PanningCamera,
    BoxSelecting { begin: Vec2, current: Vec2 },
}

/// View and input settings.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewCfg {
    /// Viewport size in screen pixels.
    pub screen_size: Vec2,
    /// Hit-test radius around a vertex, in screen pixels.
    pub vertex_radius: f64,
    /// Wheel divisor: `alpha = exp(-delta_y / zoom_speed)`.
    pub zoom_speed: f64,
    pub zoom_anchor: ZoomAnchor,
}

impl Default for ViewCfg {
    fn default() -> Self {
        Self {
            screen_size: Vector2::new(1200.0, 700.0),
            vertex_radius: 10.0,
            zoom_speed: 1000.0,
            zoom_anchor: ZoomAnchor::Pointer,
        }
    }
}
