//! Puzzle graph: vertex positions in normalized space plus a fixed edge set.
//!
//! Purpose
//! - Own the vertex and edge sequences together, validated on construction.
//! - Generate a crossing-free starting layout by greedy edge acceptance over a
//!   shuffled complete candidate list.
//!
//! Model
//! - Vertices live in the nominal unit square; drags never clamp them back.
//! - Edges are fixed once the graph is built; only positions change afterwards.
//! - Greedy acceptance is order dependent and not maximal: an early edge can
//!   block several later ones that would have fit in another order.
//!
//! Layout: `types.rs` (data types), `build.rs` (generator).

mod build;
mod types;

pub use build::{
    candidate_edges, generate_graph, generate_seeded, random_vertices, select_non_crossing,
    PuzzleSeed,
};
pub use types::{Edge, Graph, GraphError};
