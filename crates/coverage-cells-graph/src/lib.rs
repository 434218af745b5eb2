//! Adjacency graph construction and visitation ordering over decomposed
//! coverage cells.
//!
//! Two cells are adjacent when their boundary histories overlap in rows
//! and they were never split apart by an obstacle within a single column
//! (the decomposer's non-neighbor groups). Traversal is an iterative
//! depth-first walk over that graph.

mod adjacency;
mod traversal;

pub use adjacency::{build_adjacency, AdjacencyBuild, AdjacencyGraph, BuildWarning};
pub use traversal::depth_first_order;
