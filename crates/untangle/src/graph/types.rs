//! Data types for the puzzle graph.

use std::fmt;

use crate::geom2::Vec2;

/// Unordered vertex pair. `from != to`, both valid indices of the owning graph.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Edge {
    pub from: usize,
    pub to: usize,
}

impl Edge {
    #[inline]
    pub fn new(from: usize, to: usize) -> Self {
        Self { from, to }
    }

    /// Endpoints in ascending order, so `{1, 0}` and `{0, 1}` compare equal.
    #[inline]
    pub fn key(&self) -> (usize, usize) {
        if self.from <= self.to {
            (self.from, self.to)
        } else {
            (self.to, self.from)
        }
    }
}

/// Errors from building a graph out of raw parts.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GraphError {
    /// Edge `edge` references vertex `index`, but only `len` vertices exist.
    OutOfRangeIndex { edge: usize, index: usize, len: usize },
    /// Edge `edge` connects `vertex` to itself.
    SelfLoop { edge: usize, vertex: usize },
}

impl fmt::Display for GraphError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GraphError::OutOfRangeIndex { edge, index, len } => write!(
                f,
                "edge {edge} references vertex {index}, but the graph has {len} vertices"
            ),
            GraphError::SelfLoop { edge, vertex } => {
                write!(f, "edge {edge} is a self-loop on vertex {vertex}")
            }
        }
    }
}

impl std::error::Error for GraphError {}

/// Vertices (normalized coords) and edges. Positions are mutable, topology is not.
#[derive(Clone, Debug, Default)]
pub struct Graph {
    vertices: Vec<Vec2>,
    edges: Vec<Edge>,
}

impl Graph {
    /// Validate and take ownership of raw parts.
    pub fn new(vertices: Vec<Vec2>, edges: Vec<Edge>) -> Result<Self, GraphError> {
        let len = vertices.len();
        for (k, e) in edges.iter().enumerate() {
            for index in [e.from, e.to] {
                if index >= len {
                    return Err(GraphError::OutOfRangeIndex { edge: k, index, len });
                }
            }
            if e.from == e.to {
                return Err(GraphError::SelfLoop {
                    edge: k,
                    vertex: e.from,
                });
            }
        }
        Ok(Self { vertices, edges })
    }

    /// Generator output: indices come from `candidate_edges(vertices.len())`.
    pub(super) fn from_generated(vertices: Vec<Vec2>, edges: Vec<Edge>) -> Self {
        debug_assert!(edges
            .iter()
            .all(|e| e.from < vertices.len() && e.to < vertices.len() && e.from != e.to));
        Self { vertices, edges }
    }

    #[inline]
    pub fn vertices(&self) -> &[Vec2] {
        &self.vertices
    }

    #[inline]
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    #[inline]
    pub fn vertex(&self, i: usize) -> Vec2 {
        self.vertices[i]
    }

    /// Move vertex `i` to `p`.
    ///
    /// Panics if `i` is out of range.
    #[inline]
    pub fn set_vertex(&mut self, i: usize, p: Vec2) {
        self.vertices[i] = p;
    }

    /// Translate vertex `i` by `d`.
    ///
    /// Panics if `i` is out of range.
    #[inline]
    pub fn translate_vertex(&mut self, i: usize, d: Vec2) {
        self.vertices[i] += d;
    }

    /// Endpoints of `edge` in normalized space.
    #[inline]
    pub fn segment(&self, edge: &Edge) -> [Vec2; 2] {
        [self.vertices[edge.from], self.vertices[edge.to]]
    }
}
