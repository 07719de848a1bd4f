//! Error types for the spanning-tree engine and its input readers.

use crate::graph::{Edge, Vertex};
use core::fmt;

/// A precondition violation detected before (or while) scanning edges.
///
/// A disconnected graph is not an error; it yields a spanning forest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KruskalError {
    /// An endpoint of `edge` lies outside `1..=vertex_count`.
    VertexOutOfRange {
        /// The first offending edge, in input order.
        edge: Edge,
        /// The out-of-range endpoint.
        vertex: Vertex,
        /// The vertex count of the run.
        vertex_count: usize,
    },
    /// `edge` has a negative weight under [`WeightPolicy::NonNegative`].
    ///
    /// [`WeightPolicy::NonNegative`]: crate::graph::WeightPolicy::NonNegative
    NegativeWeight {
        /// The first offending edge, in input order.
        edge: Edge,
    },
    /// Adding `edge` to the running total overflowed.
    WeightOverflow {
        /// The edge whose weight could not be accumulated.
        edge: Edge,
    },
}

impl fmt::Display for KruskalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::VertexOutOfRange {
                edge,
                vertex,
                vertex_count,
            } => write!(
                f,
                "edge {edge} references vertex {vertex}, outside 1..={vertex_count}"
            ),
            Self::NegativeWeight { edge } => {
                write!(f, "edge {edge} has a negative weight")
            }
            Self::WeightOverflow { edge } => {
                write!(f, "total weight overflowed while selecting edge {edge}")
            }
        }
    }
}

impl std::error::Error for KruskalError {}

/// A malformed graph description.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    /// The input ended while `expected` was still to be read.
    UnexpectedEnd {
        /// What the reader was looking for.
        expected: &'static str,
    },
    /// A token could not be parsed as an integer.
    InvalidNumber {
        /// The offending token.
        token: String,
        /// One-based line number.
        line: usize,
    },
    /// Trailing data after the declared number of edges.
    EdgeCountMismatch {
        /// Edge count given in the header.
        declared: usize,
        /// Complete edge triples actually present.
        found: usize,
    },
    /// The JSON document could not be decoded.
    Json(String),
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnexpectedEnd { expected } => {
                write!(f, "unexpected end of input, expected {expected}")
            }
            Self::InvalidNumber { token, line } => {
                write!(f, "line {line}: `{token}` is not a valid integer")
            }
            Self::EdgeCountMismatch { declared, found } => write!(
                f,
                "header declares {declared} edges but the input holds {found}"
            ),
            Self::Json(msg) => write!(f, "invalid JSON graph: {msg}"),
        }
    }
}

impl std::error::Error for InputError {}

impl From<serde_json::Error> for InputError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_the_offender() {
        let err = KruskalError::VertexOutOfRange {
            edge: Edge::new(1, 9, 3, 4),
            vertex: 9,
            vertex_count: 5,
        };
        assert_eq!(
            err.to_string(),
            "edge #4 (1 - 9 : 3) references vertex 9, outside 1..=5"
        );

        let err = InputError::InvalidNumber {
            token: "x".into(),
            line: 2,
        };
        assert_eq!(err.to_string(), "line 2: `x` is not a valid integer");
    }
}
