use kruskal_sim::graph::edges_from_triples;
use kruskal_sim::{kruskal, DisjointSet, Edge};
use petgraph::algo::min_spanning_tree;
use petgraph::data::Element;
use petgraph::graph::UnGraph;
use proptest::prelude::*;

/// A vertex count plus `(u, v, w)` triples over `1..=n`.
fn arb_graph() -> impl Strategy<Value = (usize, Vec<(usize, usize, i64)>)> {
    (1usize..12).prop_flat_map(|n| {
        let triple = (1..=n, 1..=n, -5i64..20);
        (Just(n), proptest::collection::vec(triple, 0..30))
    })
}

fn reference_total(n: usize, edges: &[Edge]) -> (i64, usize) {
    let mut g = UnGraph::<(), i64>::new_undirected();
    let nodes: Vec<_> = (0..n).map(|_| g.add_node(())).collect();
    for e in edges {
        g.add_edge(nodes[e.u - 1], nodes[e.v - 1], e.weight);
    }
    min_spanning_tree(&g).fold((0, 0), |(total, count), element| match element {
        Element::Edge { weight, .. } => (total + weight, count + 1),
        Element::Node { .. } => (total, count),
    })
}

/// Number of connected components, by brute-force flood fill.
fn component_count(n: usize, edges: &[Edge]) -> usize {
    let mut label: Vec<usize> = (0..=n).collect();
    let mut changed = true;
    while changed {
        changed = false;
        for e in edges {
            let low = label[e.u].min(label[e.v]);
            if label[e.u] != low || label[e.v] != low {
                label[e.u] = low;
                label[e.v] = low;
                changed = true;
            }
        }
    }
    (1..=n).filter(|&v| label[v] == v).count()
}

proptest! {
    #[test]
    fn test_matches_reference_forest((n, triples) in arb_graph()) {
        let edges = edges_from_triples(triples);
        let run = kruskal(n, &edges).unwrap();
        let (weight, count) = reference_total(n, &edges);

        prop_assert_eq!(run.result.total_weight, weight);
        prop_assert_eq!(run.result.selected_edges.len(), count);
    }

    #[test]
    fn test_edge_count_bound((n, triples) in arb_graph()) {
        let edges = edges_from_triples(triples);
        let run = kruskal(n, &edges).unwrap();
        let selected = run.result.selected_edges.len();
        let connected = component_count(n, &edges) == 1;

        prop_assert!(selected <= n - 1);
        prop_assert_eq!(selected == n - 1, connected);
        prop_assert_eq!(run.result.is_spanning_tree, connected);
    }

    #[test]
    fn test_total_is_sum_of_selected((n, triples) in arb_graph()) {
        let edges = edges_from_triples(triples);
        let run = kruskal(n, &edges).unwrap();
        let sum: i64 = run.result.selected_edges.iter().map(|e| e.weight).sum();
        prop_assert_eq!(run.result.total_weight, sum);
    }

    #[test]
    fn test_deterministic_under_permutation(
        (n, triples) in arb_graph(),
        seed in any::<u64>(),
    ) {
        let edges = edges_from_triples(triples);
        let first = kruskal(n, &edges).unwrap();
        prop_assert_eq!(&first, &kruskal(n, &edges).unwrap());

        // Shuffle by sorting on a seeded hash of the id; ids stay attached.
        let mut shuffled = edges.clone();
        shuffled.sort_by_key(|e| (e.id as u64).wrapping_mul(seed | 1).rotate_left(17));
        prop_assert_eq!(first, kruskal(n, &shuffled).unwrap());
    }

    #[test]
    fn test_trace_follows_weight_then_id((n, triples) in arb_graph()) {
        let edges = edges_from_triples(triples);
        let run = kruskal(n, &edges).unwrap();
        for pair in run.trace.windows(2) {
            let (a, b) = (&pair[0].edge, &pair[1].edge);
            prop_assert!(a.weight < b.weight || (a.weight == b.weight && a.id < b.id));
        }
        // Accepted steps are exactly the selected edges, in order.
        let accepted: Vec<_> = run.accepted_steps().map(|s| s.edge).collect();
        prop_assert_eq!(accepted, run.result.selected_edges);
    }

    #[test]
    fn test_find_is_idempotent(
        n in 1usize..40,
        unions in proptest::collection::vec((0usize..40, 0usize..40), 0..60),
    ) {
        let mut ds = DisjointSet::new(n);
        for (a, b) in unions {
            ds.union(a % n + 1, b % n + 1);
        }
        for v in 1..=n {
            let root = ds.find(v);
            prop_assert_eq!(root, ds.find(v));
            prop_assert_eq!(root, ds.find(root));
        }
    }

    #[test]
    fn test_union_is_monotone(
        n in 1usize..40,
        unions in proptest::collection::vec((0usize..40, 0usize..40), 1..60),
    ) {
        let mut ds = DisjointSet::new(n);
        let mut merged = Vec::new();
        for (a, b) in unions {
            let (a, b) = (a % n + 1, b % n + 1);
            if ds.union(a, b) {
                merged.push((a, b));
            }
            for &(x, y) in &merged {
                prop_assert_eq!(ds.find(x), ds.find(y));
            }
        }
        prop_assert_eq!(ds.component_count(), n - merged.len());
    }
}
