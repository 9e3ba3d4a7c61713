//! Per-frame scene derivation.
//!
//! Everything here is pure and recomputed wholesale on every query: screen-space
//! vertices, pairwise edge crossings (O(E²)) and the box-selection rectangle.

use std::collections::BTreeSet;

use crate::geom2::{apply2, intersect, minmax, Mat3, Vec2};
use crate::graph::{Edge, Graph};
use crate::interaction::PointerState;

/// Two edges crossing at `point` (screen space). `first < second`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Crossing {
    pub first: usize,
    pub second: usize,
    pub point: Vec2,
}

/// Axis-aligned screen rectangle: top-left `corner` and non-negative `extent`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub corner: Vec2,
    pub extent: Vec2,
}

impl Rect {
    pub fn spanning(a: Vec2, b: Vec2) -> Self {
        let (x0, x1) = minmax(a.x, b.x);
        let (y0, y1) = minmax(a.y, b.y);
        Self {
            corner: Vec2::new(x0, y0),
            extent: Vec2::new(x1 - x0, y1 - y0),
        }
    }
}

/// Everything an adapter needs to draw one frame.
#[derive(Clone, Debug, PartialEq)]
pub struct Scene {
    pub vertices: Vec<Vec2>,
    pub edges: Vec<Edge>,
    pub crossings: Vec<Crossing>,
    pub selection: BTreeSet<usize>,
    pub selection_rect: Option<Rect>,
}

impl Scene {
    #[inline]
    pub fn crossing_count(&self) -> usize {
        self.crossings.len()
    }

    #[inline]
    pub fn is_solved(&self) -> bool {
        self.crossings.is_empty()
    }
}

pub fn screen_vertices(graph: &Graph, norm_to_screen: &Mat3) -> Vec<Vec2> {
    graph
        .vertices()
        .iter()
        .map(|&v| apply2(norm_to_screen, v))
        .collect()
}

/// All crossing edge pairs, tested on `screen` endpoints (indexed like the graph vertices).
pub fn crossings(graph: &Graph, screen: &[Vec2]) -> Vec<Crossing> {
    let edges = graph.edges();
    let seg = |e: &Edge| [screen[e.from], screen[e.to]];
    let mut out = Vec::new();
    for i in 0..edges.len() {
        for j in (i + 1)..edges.len() {
            if let Some(point) = intersect(seg(&edges[i]), seg(&edges[j])) {
                out.push(Crossing {
                    first: i,
                    second: j,
                    point,
                });
            }
        }
    }
    out
}

/// Screen-space rectangle of an active box selection.
pub fn selection_rect(pointer: &PointerState, norm_to_screen: &Mat3) -> Option<Rect> {
    match *pointer {
        PointerState::BoxSelecting { begin, current } => Some(Rect::spanning(
            apply2(norm_to_screen, begin),
            apply2(norm_to_screen, current),
        )),
        PointerState::Idle | PointerState::DraggingVertex(_) | PointerState::PanningCamera => None,
    }
}
