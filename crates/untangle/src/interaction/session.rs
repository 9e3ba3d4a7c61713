use std::collections::BTreeSet;

use rand::Rng;

use super::types::{Button, PointerState, ViewCfg};
use crate::camera::Camera;
use crate::geom2::{apply2, dist_sq, minmax, Mat3, TransformError, Vec2};
use crate::graph::{generate_graph, Graph};
use crate::scene::{self, Scene};

/// Interaction context: graph, camera, selection and pointer state.
#[derive(Clone, Debug)]
pub struct Session {
    graph: Graph,
    camera: Camera,
    selection: BTreeSet<usize>,
    pointer: PointerState,
    cfg: ViewCfg,
}

impl Session {
    pub fn new(graph: Graph, cfg: ViewCfg) -> Self {
        Self {
            graph,
            camera: Camera::default(),
            selection: BTreeSet::new(),
            pointer: PointerState::Idle,
            cfg,
        }
    }

    /// Replace the puzzle with a fresh crossing-free graph and reset the view.
    pub fn regenerate<R: Rng + ?Sized>(&mut self, n: usize, rng: &mut R) {
        self.graph = generate_graph(n, rng);
        self.camera.reset();
        self.selection.clear();
        self.pointer = PointerState::Idle;
    }

    pub fn resize(&mut self, screen_size: Vec2) {
        self.cfg.screen_size = screen_size;
    }

    #[inline]
    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    #[inline]
    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    #[inline]
    pub fn selection(&self) -> &BTreeSet<usize> {
        &self.selection
    }

    #[inline]
    pub fn pointer(&self) -> PointerState {
        self.pointer
    }

    #[inline]
    pub fn cfg(&self) -> &ViewCfg {
        &self.cfg
    }

    pub fn norm_to_screen(&self) -> Mat3 {
        self.camera.norm_to_screen(self.cfg.screen_size)
    }

    fn to_norm(&self, screen_pos: Vec2) -> Result<Vec2, TransformError> {
        let inv = self.camera.screen_to_norm(self.cfg.screen_size)?;
        Ok(apply2(&inv, screen_pos))
    }

    /// First vertex (by index) within `vertex_radius` of `screen_pos`.
    fn hit_test(&self, screen_pos: Vec2) -> Option<usize> {
        let r2 = self.cfg.vertex_radius * self.cfg.vertex_radius;
        scene::screen_vertices(&self.graph, &self.norm_to_screen())
            .iter()
            .position(|v| dist_sq(screen_pos - v) <= r2)
    }

    pub fn pointer_down(
        &mut self,
        button: Button,
        screen_pos: Vec2,
    ) -> Result<(), TransformError> {
        if self.pointer != PointerState::Idle {
            return Ok(());
        }
        match button {
            Button::Primary => {
                self.pointer = match self.hit_test(screen_pos) {
                    Some(i) => PointerState::DraggingVertex(i),
                    None => PointerState::PanningCamera,
                };
            }
            Button::Secondary => {
                let p = self.to_norm(screen_pos)?;
                self.pointer = PointerState::BoxSelecting {
                    begin: p,
                    current: p,
                };
            }
            Button::Other(_) => return Ok(()),
        }
        tracing::debug!(state = ?self.pointer, "pointer down");
        Ok(())
    }

    pub fn pointer_move(
        &mut self,
        screen_pos: Vec2,
        movement: Vec2,
    ) -> Result<(), TransformError> {
        match self.pointer {
            PointerState::Idle => {}
            PointerState::DraggingVertex(i) => {
                let p = self.to_norm(screen_pos)?;
                if self.selection.contains(&i) {
                    let d = p - self.graph.vertex(i);
                    for &k in &self.selection {
                        self.graph.translate_vertex(k, d);
                    }
                } else {
                    self.graph.set_vertex(i, p);
                }
            }
            PointerState::PanningCamera => {
                self.camera.pan(movement)?;
            }
            PointerState::BoxSelecting { begin, .. } => {
                let current = self.to_norm(screen_pos)?;
                self.pointer = PointerState::BoxSelecting { begin, current };
                self.selection = select_in_box(&self.graph, begin, current);
            }
        }
        Ok(())
    }

    /// Any button release ends the gesture; the selection is kept.
    pub fn pointer_up(&mut self, _button: Button) {
        if self.pointer != PointerState::Idle {
            tracing::debug!(state = ?self.pointer, selected = self.selection.len(), "pointer up");
        }
        self.pointer = PointerState::Idle;
    }

    pub fn wheel(&mut self, delta_y: f64, screen_pos: Vec2) -> Result<(), TransformError> {
        self.camera.zoom_at(
            delta_y,
            screen_pos,
            self.cfg.screen_size,
            self.cfg.zoom_speed,
            self.cfg.zoom_anchor,
        )
    }

    /// Derived geometry for the current frame.
    pub fn scene(&self) -> Scene {
        let m = self.norm_to_screen();
        let vertices = scene::screen_vertices(&self.graph, &m);
        let crossings = scene::crossings(&self.graph, &vertices);
        Scene {
            selection_rect: scene::selection_rect(&self.pointer, &m),
            vertices,
            edges: self.graph.edges().to_vec(),
            crossings,
            selection: self.selection.clone(),
        }
    }
}

/// Vertices inside the closed axis-aligned box spanned by `a` and `b`.
fn select_in_box(graph: &Graph, a: Vec2, b: Vec2) -> BTreeSet<usize> {
    let (min_x, max_x) = minmax(a.x, b.x);
    let (min_y, max_y) = minmax(a.y, b.y);
    graph
        .vertices()
        .iter()
        .enumerate()
        .filter(|(_, v)| v.x >= min_x && v.x <= max_x && v.y >= min_y && v.y <= max_y)
        .map(|(i, _)| i)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::Edge;
    use nalgebra::vector;

    #[test]
    fn box_bounds_are_inclusive() {
        let g = Graph::new(
            vec![vector![0.0, 0.0], vector![0.25, 0.5], vector![0.5, 0.5]],
            Vec::<Edge>::new(),
        )
        .unwrap();
        let sel = select_in_box(&g, vector![0.5, 0.5], vector![0.0, 0.0]);
        assert_eq!(sel, BTreeSet::from([0, 1, 2]));
        let sel = select_in_box(&g, vector![0.25, 0.5], vector![0.25, 0.5]);
        assert_eq!(sel, BTreeSet::from([1]));
    }
}
