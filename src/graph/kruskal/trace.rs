//! Per-edge decision records.

use crate::graph::{Edge, Vertex};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Vertex groups after an accepted edge.
///
/// Each group is sorted by vertex id; groups are ordered by their smallest vertex.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ComponentSnapshot(pub Vec<Vec<Vertex>>);

impl ComponentSnapshot {
    /// The groups, in order.
    pub fn groups(&self) -> &[Vec<Vertex>] {
        &self.0
    }

    /// Number of groups.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if there are no groups (only for `n == 0`).
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The group holding `v`, if any.
    pub fn group_of(&self, v: Vertex) -> Option<&[Vertex]> {
        self.0
            .iter()
            .find(|g| g.binary_search(&v).is_ok())
            .map(Vec::as_slice)
    }
}

impl fmt::Display for ComponentSnapshot {
    /// Renders as `{1,3} | {2} | {4,5}`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, group) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(" | ")?;
            }
            f.write_str("{")?;
            for (k, v) in group.iter().enumerate() {
                if k > 0 {
                    f.write_str(",")?;
                }
                write!(f, "{v}")?;
            }
            f.write_str("}")?;
        }
        Ok(())
    }
}

/// Why an edge was accepted or rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StepVerdict {
    /// The endpoints were in different components; the edge joins them.
    Connects,
    /// The endpoints were already connected; the edge would close a cycle.
    FormsCycle,
}

/// One considered edge. Immutable once recorded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionStep {
    /// The edge under consideration.
    pub edge: Edge,
    /// Root of `edge.u` before any merge.
    pub root_u: Vertex,
    /// Root of `edge.v` before any merge.
    pub root_v: Vertex,
    /// Whether the edge entered the spanning forest.
    pub accepted: bool,
    /// Components after the merge; only on accepted steps with snapshots on.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub components: Option<ComponentSnapshot>,
}

impl SelectionStep {
    /// The decision as a verdict.
    pub fn verdict(&self) -> StepVerdict {
        if self.accepted {
            StepVerdict::Connects
        } else {
            StepVerdict::FormsCycle
        }
    }
}
