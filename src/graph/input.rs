//! Graph descriptions read from text or JSON.
//!
//! Text format: whitespace-separated integers, `n m` followed by `m` triples
//! `u v w`. JSON format: `{"vertices": n, "edges": [[u, v, w], ...]}`.
//! In both, edge ids are assigned `1..=m` in input order.

use crate::graph::{edges_from_triples, Edge, InputError, Vertex, Weight};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// A vertex count plus an id-tagged edge list, ready for the engine.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GraphInput {
    /// Number of vertices; vertices are `1..=vertex_count`.
    pub vertex_count: usize,
    /// Edges with ids in input order.
    pub edges: Vec<Edge>,
}

#[derive(Serialize, Deserialize)]
struct JsonGraph {
    vertices: usize,
    edges: Vec<(Vertex, Vertex, Weight)>,
}

impl GraphInput {
    /// Builds a graph from `(u, v, w)` triples.
    pub fn from_triples<I>(vertex_count: usize, triples: I) -> Self
    where
        I: IntoIterator<Item = (Vertex, Vertex, Weight)>,
    {
        Self {
            vertex_count,
            edges: edges_from_triples(triples),
        }
    }

    /// The built-in connected example: 6 vertices, 9 edges.
    pub fn example() -> Self {
        Self::from_triples(
            6,
            [
                (1, 2, 3),
                (1, 3, 1),
                (2, 3, 7),
                (2, 4, 5),
                (3, 4, 4),
                (3, 5, 2),
                (4, 5, 6),
                (4, 6, 8),
                (5, 6, 9),
            ],
        )
    }

    /// Parses the whitespace-separated text format.
    ///
    /// # Errors
    ///
    /// Returns [`InputError`] on a non-integer token, a truncated edge list, or
    /// more edge data than the header declares.
    pub fn parse_text(text: &str) -> Result<Self, InputError> {
        let mut tokens = text
            .lines()
            .enumerate()
            .flat_map(|(i, line)| line.split_whitespace().map(move |tok| (i + 1, tok)));

        let vertex_count: usize = next_number(&mut tokens, "vertex count")?;
        let edge_count: usize = next_number(&mut tokens, "edge count")?;

        // The header is untrusted; each triple needs at least six bytes of text.
        let mut triples = Vec::with_capacity(edge_count.min(text.len() / 6));
        for _ in 0..edge_count {
            let u: Vertex = next_number(&mut tokens, "edge endpoint")?;
            let v: Vertex = next_number(&mut tokens, "edge endpoint")?;
            let w: Weight = next_number(&mut tokens, "edge weight")?;
            triples.push((u, v, w));
        }

        let extra = tokens.count();
        if extra > 0 {
            return Err(InputError::EdgeCountMismatch {
                declared: edge_count,
                found: edge_count + extra.div_ceil(3),
            });
        }

        Ok(Self::from_triples(vertex_count, triples))
    }

    /// Parses the JSON format.
    ///
    /// # Errors
    ///
    /// Returns [`InputError::Json`] if the document does not match the format.
    pub fn parse_json(text: &str) -> Result<Self, InputError> {
        let graph: JsonGraph = serde_json::from_str(text)?;
        Ok(Self::from_triples(graph.vertices, graph.edges))
    }

    /// Serializes to the JSON format.
    ///
    /// # Errors
    ///
    /// Propagates encoder failures.
    pub fn to_json(&self) -> Result<String, InputError> {
        let graph = JsonGraph {
            vertices: self.vertex_count,
            edges: self.edges.iter().map(|e| (e.u, e.v, e.weight)).collect(),
        };
        Ok(serde_json::to_string(&graph)?)
    }
}

impl FromStr for GraphInput {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_text(s)
    }
}

fn next_number<'a, T, I>(tokens: &mut I, expected: &'static str) -> Result<T, InputError>
where
    T: FromStr,
    I: Iterator<Item = (usize, &'a str)>,
{
    let (line, token) = tokens.next().ok_or(InputError::UnexpectedEnd { expected })?;
    token.parse().map_err(|_| InputError::InvalidNumber {
        token: token.to_owned(),
        line,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_text() {
        let g: GraphInput = "3 2\n1 2 10\n2 3 -4\n".parse().unwrap();
        assert_eq!(g.vertex_count, 3);
        assert_eq!(g.edges, vec![Edge::new(1, 2, 10, 1), Edge::new(2, 3, -4, 2)]);
    }

    #[test]
    fn test_parse_text_errors() {
        assert_eq!(
            GraphInput::parse_text("3 2\n1 2 10\n2 3"),
            Err(InputError::UnexpectedEnd {
                expected: "edge weight"
            })
        );
        assert_eq!(
            GraphInput::parse_text("3 1\n1 x 10"),
            Err(InputError::InvalidNumber {
                token: "x".into(),
                line: 2
            })
        );
        assert_eq!(
            GraphInput::parse_text("3 1\n1 2 10\n2 3 4"),
            Err(InputError::EdgeCountMismatch {
                declared: 1,
                found: 2
            })
        );
        assert_eq!(
            GraphInput::parse_text("3 1\n1 2 10\n2"),
            Err(InputError::EdgeCountMismatch {
                declared: 1,
                found: 2
            })
        );
        assert_eq!(
            GraphInput::parse_text("-1 0"),
            Err(InputError::InvalidNumber {
                token: "-1".into(),
                line: 1
            })
        );
    }

    #[test]
    fn test_huge_edge_count_is_a_truncation_error() {
        assert_eq!(
            GraphInput::parse_text("3 18446744073709551615\n1 2 3"),
            Err(InputError::UnexpectedEnd {
                expected: "edge endpoint"
            })
        );
        assert!(matches!(
            GraphInput::parse_text("3 1000000000000\n1 2 3\n2 3 4"),
            Err(InputError::UnexpectedEnd { .. })
        ));
    }

    #[test]
    fn test_json_round_trip_of_example() {
        let example = GraphInput::example();
        let json = example.to_json().unwrap();
        assert_eq!(GraphInput::parse_json(&json).unwrap(), example);
        assert!(matches!(
            GraphInput::parse_json("{\"vertices\": 2}"),
            Err(InputError::Json(_))
        ));
    }
}
