//! Kruskal's minimum spanning tree (or forest), with a per-edge decision trace.
//!
//! The engine is a pure function of `(n, edges, config)`: it sorts a copy of
//! the edges by `(weight, id)`, scans them through a fresh [`DisjointSet`], and
//! records one [`SelectionStep`] per considered edge. Scanning stops as soon as
//! `n - 1` edges are selected; edges after that point leave no trace.
//!
//! A disconnected input is not an error. The result is then a minimum spanning
//! forest and [`SpanningResult::is_spanning_tree`] is `false`.
//!
//! # Example
//!
//! ```rust
//! use kruskal_sim::graph::{edges_from_triples, kruskal};
//!
//! let edges = edges_from_triples([(1, 2, 1), (2, 3, 1), (1, 3, 1)]);
//! let run = kruskal(3, &edges).unwrap();
//!
//! assert_eq!(run.result.total_weight, 2);
//! assert!(run.result.is_spanning_tree);
//! assert_eq!(run.trace.len(), 2);
//! ```

pub mod config;
pub mod trace;


pub use config::{KruskalConfig, WeightPolicy};
pub use trace::{ComponentSnapshot, SelectionStep, StepVerdict};

use crate::collections::DisjointSet;
use crate::graph::{Edge, KruskalError, Weight};
use serde::{Deserialize, Serialize};

/// The selected edges of one run.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SpanningResult {
    /// Accepted edges, in selection order.
    pub selected_edges: Vec<Edge>,
    /// Sum of the selected weights.
    pub total_weight: Weight,
    /// `true` iff `selected_edges.len() == n - 1` (trivially true for `n <= 1`).
    pub is_spanning_tree: bool,
    /// The vertex count of the run.
    pub vertex_count: usize,
}

impl SpanningResult {
    /// Number of trees in the forest (`n - selected`), 0 for an empty graph.
    pub fn component_count(&self) -> usize {
        self.vertex_count - self.selected_edges.len()
    }
}

/// Everything one run produces.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct KruskalRun {
    /// The input edges in the order they were considered.
    pub sorted_edges: Vec<Edge>,
    /// One record per considered edge.
    pub trace: Vec<SelectionStep>,
    /// The spanning tree or forest.
    pub result: SpanningResult,
    /// Sorted edges never considered because the tree completed early.
    pub unconsidered: usize,
}

impl KruskalRun {
    /// Accepted steps only.
    pub fn accepted_steps(&self) -> impl Iterator<Item = &SelectionStep> {
        self.trace.iter().filter(|s| s.accepted)
    }

    /// Rejected (cycle-forming) steps only.
    pub fn rejected_steps(&self) -> impl Iterator<Item = &SelectionStep> {
        self.trace.iter().filter(|s| !s.accepted)
    }

    /// Returns true if scanning stopped before the end of the edge list.
    pub fn stopped_early(&self) -> bool {
        self.unconsidered > 0
    }
}

/// The spanning-tree engine.
///
/// Holds only configuration; every [`run`](Kruskal::run) allocates its own
/// disjoint set, so one engine may be shared across threads.
#[derive(Debug, Clone, Copy, Default)]
pub struct Kruskal {
    config: KruskalConfig,
}

impl Kruskal {
    /// Creates an engine with the given configuration.
    pub const fn new(config: KruskalConfig) -> Self {
        Self { config }
    }

    /// The engine's configuration.
    pub const fn config(&self) -> &KruskalConfig {
        &self.config
    }

    /// Computes the minimum spanning tree (or forest) of the graph on vertices
    /// `1..=n` with the given edges.
    ///
    /// # Errors
    ///
    /// Fails before scanning if an endpoint is outside `1..=n`, or if a weight is
    /// negative under [`WeightPolicy::NonNegative`]. Fails during the scan if the
    /// running total overflows.
    pub fn run(&self, n: usize, edges: &[Edge]) -> Result<KruskalRun, KruskalError> {
        self.validate(n, edges)?;

        let mut sorted = edges.to_vec();
        sorted.sort_by(Edge::selection_order);

        let target = n.saturating_sub(1);
        let mut dsu = DisjointSet::new(n);
        let mut trace = Vec::new();
        let mut selected = Vec::with_capacity(target.min(edges.len()));
        let mut total: Weight = 0;

        for edge in &sorted {
            if selected.len() == target {
                break;
            }

            let root_u = dsu.find(edge.u);
            let root_v = dsu.find(edge.v);
            let accepted = root_u != root_v;

            let components = if accepted {
                dsu.union(root_u, root_v);
                total = total
                    .checked_add(edge.weight)
                    .ok_or(KruskalError::WeightOverflow { edge: *edge })?;
                selected.push(*edge);
                self.config
                    .snapshots
                    .then(|| ComponentSnapshot(dsu.components()))
            } else {
                None
            };

            #[cfg(feature = "tracing")]
            tracing::debug!(
                edge = edge.id,
                u = edge.u,
                v = edge.v,
                weight = edge.weight,
                root_u,
                root_v,
                accepted,
                "considered edge"
            );

            trace.push(SelectionStep {
                edge: *edge,
                root_u,
                root_v,
                accepted,
                components,
            });
        }

        let unconsidered = sorted.len() - trace.len();
        let is_spanning_tree = selected.len() == target;

        #[cfg(feature = "tracing")]
        tracing::info!(
            vertices = n,
            selected = selected.len(),
            total_weight = total,
            is_spanning_tree,
            considered = trace.len(),
            unconsidered,
            "kruskal run finished"
        );

        Ok(KruskalRun {
            sorted_edges: sorted,
            trace,
            result: SpanningResult {
                selected_edges: selected,
                total_weight: total,
                is_spanning_tree,
                vertex_count: n,
            },
            unconsidered,
        })
    }

    /// Range and weight-policy checks, reported for the first offending edge in
    /// input order.
    fn validate(&self, n: usize, edges: &[Edge]) -> Result<(), KruskalError> {
        let in_range = |v: usize| (1..=n).contains(&v);

        for edge in edges {
            if let Some(vertex) = [edge.u, edge.v].into_iter().find(|&v| !in_range(v)) {
                #[cfg(feature = "tracing")]
                tracing::warn!(edge = edge.id, vertex, n, "edge endpoint out of range");
                return Err(KruskalError::VertexOutOfRange {
                    edge: *edge,
                    vertex,
                    vertex_count: n,
                });
            }
            if self.config.weights == WeightPolicy::NonNegative && edge.weight < 0 {
                #[cfg(feature = "tracing")]
                tracing::warn!(edge = edge.id, weight = edge.weight, "negative edge weight");
                return Err(KruskalError::NegativeWeight { edge: *edge });
            }
        }

        Ok(())
    }
}

/// Runs [`Kruskal`] with the default configuration.
///
/// # Errors
///
/// See [`Kruskal::run`].
pub fn kruskal(n: usize, edges: &[Edge]) -> Result<KruskalRun, KruskalError> {
    Kruskal::default().run(n, edges)
}
