//! Collection types backing the graph algorithms.

pub mod disjoint_set;

pub use disjoint_set::DisjointSet;
