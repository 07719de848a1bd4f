//! # `kruskal-sim` - Narrated Minimum Spanning Trees
//!
//! Computes a minimum spanning tree (or forest, for disconnected inputs) of a
//! weighted undirected graph with Kruskal's algorithm, and records every
//! decision the algorithm makes so it can be inspected or narrated.
//!
//! ## Architecture
//!
//! 1. **Disjoint set** (`collections::DisjointSet`):
//!    - Partition of the vertices `1..=n` into components
//!    - Path compression on `find`, union-by-rank on `union`
//!
//! 2. **Kruskal engine** (`graph::Kruskal`):
//!    - Sorts edges by `(weight, id)`, so ties resolve by input order
//!    - Scans them through a fresh disjoint set per run
//!    - Emits one `SelectionStep` per considered edge, and stops once `n - 1`
//!      edges are selected
//!
//! 3. **Narration** (`narrate`):
//!    - A pure text projection over a finished run
//!
//! The engine holds no state between runs, so independent runs may execute
//! concurrently.
//!
//! ## Example
//!
//! ```rust
//! use kruskal_sim::{GraphInput, Kruskal, KruskalConfig};
//!
//! let graph = GraphInput::example();
//! let run = Kruskal::new(KruskalConfig::default())
//!     .run(graph.vertex_count, &graph.edges)
//!     .unwrap();
//!
//! assert!(run.result.is_spanning_tree);
//! assert_eq!(run.result.selected_edges.len(), 5);
//! ```

#![warn(missing_docs, clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod collections;
pub mod graph;
pub mod narrate;

pub use collections::DisjointSet;
pub use graph::{
    kruskal, ComponentSnapshot, Edge, GraphInput, InputError, Kruskal, KruskalConfig, KruskalError,
    KruskalRun, SelectionStep, SpanningResult, StepVerdict, Vertex, Weight, WeightPolicy,
};
pub use narrate::{render, NarrationOptions};

// Compile-time layout checks.
const _: () = {
    use core::mem;

    // Steps are recorded by value; keep edges `Copy`-cheap.
    assert!(mem::size_of::<Edge>() <= 4 * mem::size_of::<u64>());
    // The engine is configuration only.
    assert!(mem::size_of::<Kruskal>() <= mem::size_of::<usize>());
};
