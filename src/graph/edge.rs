//! Weighted undirected edges.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// A vertex identifier in the contiguous range `1..=n`.
pub type Vertex = usize;

/// An integral edge weight.
pub type Weight = i64;

/// A weighted undirected edge with a stable input-order tag.
///
/// `(u, v)` and `(v, u)` denote the same edge. The `id` is assigned once when
/// the edge list is built and is used only to break ties between equal weights.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Edge {
    /// First endpoint.
    pub u: Vertex,
    /// Second endpoint.
    pub v: Vertex,
    /// Edge weight.
    pub weight: Weight,
    /// Input-order tag.
    pub id: usize,
}

impl Edge {
    /// Creates a new edge.
    pub const fn new(u: Vertex, v: Vertex, weight: Weight, id: usize) -> Self {
        Self { u, v, weight, id }
    }

    /// Returns true if both endpoints are the same vertex.
    pub const fn is_self_loop(&self) -> bool {
        self.u == self.v
    }

    /// Returns true if this edge joins the same unordered pair as `other`.
    pub fn same_endpoints(&self, other: &Edge) -> bool {
        (self.u == other.u && self.v == other.v) || (self.u == other.v && self.v == other.u)
    }

    /// The selection order: weight ascending, then id ascending.
    pub fn selection_order(&self, other: &Edge) -> Ordering {
        self.weight
            .cmp(&other.weight)
            .then_with(|| self.id.cmp(&other.id))
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{} ({} - {} : {})", self.id, self.u, self.v, self.weight)
    }
}

/// Builds an edge list from `(u, v, weight)` triples, tagging them with ids
/// `1, 2, ...` in iteration order.
pub fn edges_from_triples<I>(triples: I) -> Vec<Edge>
where
    I: IntoIterator<Item = (Vertex, Vertex, Weight)>,
{
    triples
        .into_iter()
        .enumerate()
        .map(|(i, (u, v, w))| Edge::new(u, v, w, i + 1))
        .collect()
}
