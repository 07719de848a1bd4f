//! Weighted undirected graphs and the spanning-tree engine.
//!
//! - `edge`: vertex, weight and edge types
//! - `kruskal`: the engine, its configuration and its decision trace
//! - `input`: text and JSON graph descriptions

pub mod edge;
pub mod error;
pub mod input;
pub mod kruskal;

pub use edge::{edges_from_triples, Edge, Vertex, Weight};
pub use error::{InputError, KruskalError};
pub use input::GraphInput;
pub use kruskal::{
    kruskal, ComponentSnapshot, Kruskal, KruskalConfig, KruskalRun, SelectionStep, SpanningResult,
    StepVerdict, WeightPolicy,
};
