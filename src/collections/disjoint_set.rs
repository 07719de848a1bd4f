//! Disjoint Set (Union-Find) over the vertex range `1..=n`.
//!
//! Parent pointers live in `Cell`s so that `find` can compress paths through a
//! shared reference, which lets a caller take component snapshots while only
//! holding `&self`.
//!
//! # Performance
//!
//! - Path compression (iterative, two passes) flattens every visited chain.
//! - Union-by-rank attaches the shallower root under the deeper one.
//! - Together these give amortized near-constant `find` and `union`.

use crate::graph::Vertex;
use std::cell::Cell;

/// A Disjoint Set (Union-Find) data structure over vertices `1..=n`.
///
/// Storage is zero-based internally; vertex `v` lives at slot `v - 1`.
#[derive(Debug, Clone)]
pub struct DisjointSet {
    /// Parent pointers, as zero-based slots.
    parent: Vec<Cell<usize>>,
    /// Rank (depth upper bound) for union-by-rank.
    rank: Vec<u8>,
}

impl DisjointSet {
    /// Creates a disjoint set where each of the vertices `1..=n` is its own root
    /// with rank 0. `n == 0` yields an empty structure.
    pub fn new(n: usize) -> Self {
        Self {
            parent: (0..n).map(Cell::new).collect(),
            rank: vec![0; n],
        }
    }

    /// Returns the number of vertices tracked.
    pub fn len(&self) -> usize {
        self.parent.len()
    }

    /// Returns true if no vertices are tracked.
    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// Returns true if `v` lies in `1..=n`.
    pub fn contains(&self, v: Vertex) -> bool {
        v >= 1 && v <= self.parent.len()
    }

    /// Finds the root of the set containing `v`, with path compression.
    ///
    /// Logically const; the compression is internal mutation through `Cell`.
    ///
    /// # Panics
    ///
    /// Panics if `v` is outside `1..=n`. Callers validate vertices up front.
    pub fn find(&self, v: Vertex) -> Vertex {
        let start = self.slot(v);

        // 1. Find root
        let mut root = start;
        loop {
            let parent = self.parent[root].get();
            if parent == root {
                break;
            }
            root = parent;
        }

        // 2. Compress path
        let mut curr = start;
        while curr != root {
            let cell = &self.parent[curr];
            let next = cell.get();
            cell.set(root);
            curr = next;
        }

        root + 1
    }

    /// Returns true if `a` and `b` are in the same set.
    pub fn connected(&self, a: Vertex, b: Vertex) -> bool {
        self.find(a) == self.find(b)
    }

    /// Unites the sets containing `a` and `b`.
    /// Returns `true` if they were in different sets, `false` otherwise.
    ///
    /// On equal ranks the root of `b` is attached under the root of `a`, and the
    /// rank of `a`'s root grows by one.
    ///
    /// # Panics
    ///
    /// Panics if either vertex is outside `1..=n`.
    pub fn union(&mut self, a: Vertex, b: Vertex) -> bool {
        let root_a = self.slot(self.find(a));
        let root_b = self.slot(self.find(b));

        if root_a == root_b {
            return false;
        }

        let rank_a = self.rank[root_a];
        let rank_b = self.rank[root_b];

        if rank_a < rank_b {
            self.parent[root_a].set(root_b);
        } else if rank_a > rank_b {
            self.parent[root_b].set(root_a);
        } else {
            self.parent[root_b].set(root_a);
            self.rank[root_a] = rank_a.saturating_add(1);
        }

        true
    }

    /// Returns the rank of the root currently holding `v`.
    pub fn rank(&self, v: Vertex) -> u8 {
        self.rank[self.slot(self.find(v))]
    }

    /// Groups every vertex by its root.
    ///
    /// Each group is sorted by vertex id, and groups are ordered by their
    /// smallest vertex. Since vertices are walked in ascending order, a group's
    /// first element is its minimum, and groups come out in first-seen order.
    pub fn components(&self) -> Vec<Vec<Vertex>> {
        let n = self.len();
        // Root slot -> index into `groups`.
        let mut group_of: Vec<Option<usize>> = vec![None; n];
        let mut groups: Vec<Vec<Vertex>> = Vec::new();

        for v in 1..=n {
            let root = self.slot(self.find(v));
            match group_of[root] {
                Some(idx) => groups[idx].push(v),
                None => {
                    group_of[root] = Some(groups.len());
                    groups.push(vec![v]);
                }
            }
        }

        groups
    }

    /// Returns the number of disjoint sets.
    pub fn component_count(&self) -> usize {
        self.parent
            .iter()
            .enumerate()
            .filter(|(slot, cell)| cell.get() == *slot)
            .count()
    }

    #[inline]
    fn slot(&self, v: Vertex) -> usize {
        assert!(
            self.contains(v),
            "vertex {v} out of range 1..={}",
            self.parent.len()
        );
        v - 1
    }
}

impl Default for DisjointSet {
    fn default() -> Self {
        Self::new(0)
    }
}
