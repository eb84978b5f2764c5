use criterion::{BatchSize, BenchmarkId, Criterion, criterion_group, criterion_main};
use dagkit_core::cycle;
use dagkit_core::{GraphStore, Position};
use std::hint::black_box;
use std::time::Duration;

fn build_edges(node_count: usize, fanout: usize, back_edge: bool) -> Vec<(String, String)> {
    let ids: Vec<String> = (0..node_count).map(|i| format!("n{i}")).collect();
    let mut edges = Vec::new();

    // A spine keeps the whole graph reachable from the first node.
    for i in 0..node_count.saturating_sub(1) {
        edges.push((ids[i].clone(), ids[i + 1].clone()));
    }
    for i in 0..node_count {
        for k in 2..=(fanout + 1) {
            let to = i + k;
            if to >= node_count {
                break;
            }
            edges.push((ids[i].clone(), ids[to].clone()));
        }
    }
    if back_edge && node_count > 1 {
        edges.push((ids[node_count - 1].clone(), ids[0].clone()));
    }
    edges
}

fn bench_detect(c: &mut Criterion) {
    let mut group = c.benchmark_group("cycle_detect");
    group.measurement_time(Duration::from_secs(5));

    let cases = [
        ("dag_1k_f3", 1_000usize, 3usize, false),
        ("dag_10k_f4", 10_000, 4, false),
        ("cyclic_10k_f4", 10_000, 4, true),
    ];

    for (name, nodes, fanout, back_edge) in cases {
        let edges = build_edges(nodes, fanout, back_edge);
        group.bench_with_input(BenchmarkId::new("detect", name), &edges, |b, edges| {
            b.iter(|| {
                let status = cycle::detect(
                    edges
                        .iter()
                        .map(|(v, w)| (v.as_str(), w.as_str())),
                );
                black_box(status);
            })
        });
    }

    group.finish();
}

fn bench_store_inserts(c: &mut Criterion) {
    let mut group = c.benchmark_group("graph_store");

    for nodes in [100usize, 500] {
        group.bench_with_input(
            BenchmarkId::new("chain_insert", nodes),
            &nodes,
            |b, &nodes| {
                b.iter_batched(
                    || {
                        let mut store = GraphStore::new();
                        for _ in 0..nodes {
                            let _ = store.add_node_at("n", Position::default());
                        }
                        store
                    },
                    |mut store| {
                        for i in 1..nodes {
                            let _ = store.insert_edge(&format!("n{i}"), &format!("n{}", i + 1));
                        }
                        black_box(store.status());
                    },
                    BatchSize::LargeInput,
                )
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_detect, bench_store_inserts);
criterion_main!(benches);
