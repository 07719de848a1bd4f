use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use kruskal_sim::graph::edges_from_triples;
use kruskal_sim::{Edge, Kruskal, KruskalConfig};

/// A connected ring plus pseudo-random chords, with repeating weights.
fn build_graph(n: usize, chords: usize) -> Vec<Edge> {
    let ring = (1..=n).map(|v| (v, v % n + 1, ((v * 31) % 97) as i64));
    let mut state = 0x9E37_79B9_7F4A_7C15_u64;
    let chord = std::iter::repeat_with(move || {
        state ^= state << 13;
        state ^= state >> 7;
        state ^= state << 17;
        state
    })
    .take(chords)
    .map(|x| {
        let u = (x as usize) % n + 1;
        let v = ((x >> 20) as usize) % n + 1;
        (u, v, ((x >> 40) % 97) as i64)
    });
    edges_from_triples(ring.chain(chord))
}

fn bench_kruskal(c: &mut Criterion) {
    let mut group = c.benchmark_group("Kruskal");

    for &n in &[100usize, 1_000, 10_000] {
        let edges = build_graph(n, n * 4);

        let traced = Kruskal::new(KruskalConfig::new().with_snapshots(false));
        group.bench_with_input(BenchmarkId::new("no snapshots", n), &edges, |b, edges| {
            b.iter(|| black_box(traced.run(n, edges).unwrap()))
        });

        // Snapshots are O(n) per accepted edge; keep them to small graphs.
        if n <= 1_000 {
            let snap = Kruskal::new(KruskalConfig::new());
            group.bench_with_input(BenchmarkId::new("snapshots", n), &edges, |b, edges| {
                b.iter(|| black_box(snap.run(n, edges).unwrap()))
            });
        }
    }

    group.finish();
}

criterion_group!(benches, bench_kruskal);
criterion_main!(benches);
