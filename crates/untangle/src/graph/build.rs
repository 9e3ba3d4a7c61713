//! Crossing-free random graph generation.
//!
//! Steps: uniform vertices in [0,1)², complete candidate edge list, Fisher–Yates
//! shuffle, greedy acceptance of every candidate that crosses no accepted edge.

use nalgebra::Vector2;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use super::types::{Edge, Graph};
use crate::geom2::{intersect, Vec2};

/// Replay token making puzzle draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PuzzleSeed {
    pub seed: u64,
    pub index: u64,
}

impl PuzzleSeed {
    /// Seed bytes: `seed` then `index`, little-endian, zero padded.
    /// Distinct `(seed, index)` pairs never share a stream.
    pub fn to_std_rng(self) -> StdRng {
        let mut bytes = <StdRng as SeedableRng>::Seed::default();
        bytes[..8].copy_from_slice(&self.seed.to_le_bytes());
        bytes[8..16].copy_from_slice(&self.index.to_le_bytes());
        StdRng::from_seed(bytes)
    }
}

/// `n` points with independent uniform coordinates in [0,1)². No spacing guarantee.
pub fn random_vertices<R: Rng + ?Sized>(n: usize, rng: &mut R) -> Vec<Vec2> {
    (0..n)
        .map(|_| Vector2::new(rng.gen::<f64>(), rng.gen::<f64>()))
        .collect()
}

/// All `n·(n−1)/2` unordered pairs, as `{from: i, to: j}` with `j < i`.
pub fn candidate_edges(n: usize) -> Vec<Edge> {
    let mut out = Vec::with_capacity(n * n.saturating_sub(1) / 2);
    for i in 0..n {
        for j in 0..i {
            out.push(Edge::new(i, j));
        }
    }
    out
}

/// Walk `candidates` in order and keep each edge that crosses none of the kept ones.
///
/// Order dependent; the result is not a maximal non-crossing set in general.
pub fn select_non_crossing(
    vertices: &[Vec2],
    candidates: impl IntoIterator<Item = Edge>,
) -> Vec<Edge> {
    let seg = |e: &Edge| [vertices[e.from], vertices[e.to]];
    let mut accepted: Vec<Edge> = Vec::new();
    for cand in candidates {
        let s = seg(&cand);
        if accepted.iter().all(|e| intersect(s, seg(e)).is_none()) {
            accepted.push(cand);
        }
    }
    accepted
}

/// Draw a crossing-free puzzle graph with `n` vertices.
pub fn generate_graph<R: Rng + ?Sized>(n: usize, rng: &mut R) -> Graph {
    let vertices = random_vertices(n, rng);
    let mut candidates = candidate_edges(n);
    candidates.shuffle(rng);
    let edges = select_non_crossing(&vertices, candidates);
    tracing::debug!(
        vertices = n,
        edges = edges.len(),
        "generated crossing-free graph"
    );
    Graph::from_generated(vertices, edges)
}

/// Reproducible variant of [`generate_graph`].
pub fn generate_seeded(n: usize, tok: PuzzleSeed) -> Graph {
    let mut rng = tok.to_std_rng();
    generate_graph(n, &mut rng)
}
