//! Benchmarks for minimum spanning tree trace generation
//!
//! Run with: cargo bench -p algotrace --bench mst

use algotrace::fixtures::{letter_labels, RandomGraphs};
use algotrace::graph::{GraphKind, MatrixGraph};
use algotrace::mst::{kruskal, prim, UnionFind};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

/// Generate a connected weighted graph with the given extra edge density
fn generate_connected_graph(n: usize, density: f64, seed: u64) -> MatrixGraph {
    let edges = RandomGraphs::seeded(seed).connected_edges(n, density, 100);
    MatrixGraph::from_edges(letter_labels(n), GraphKind::UndirectedWeighted, &edges)
}

fn bench_prim_vs_kruskal(c: &mut Criterion) {
    let mut group = c.benchmark_group("mst_connected_graph");

    // (nodes, density)
    for (nodes, density) in [(50, 0.2), (100, 0.1), (200, 0.05)] {
        let graph = generate_connected_graph(nodes, density, 42);

        group.throughput(Throughput::Elements(nodes as u64));
        group.bench_with_input(BenchmarkId::new("prim", nodes), &nodes, |b, _| {
            b.iter(|| black_box(prim(&graph).len()));
        });
        group.bench_with_input(BenchmarkId::new("kruskal", nodes), &nodes, |b, _| {
            b.iter(|| black_box(kruskal(&graph).len()));
        });
    }

    group.finish();
}

fn bench_dense_graph(c: &mut Criterion) {
    let mut group = c.benchmark_group("mst_dense_graph");

    let graph = generate_connected_graph(100, 0.9, 7);

    group.bench_function("prim_100_nodes", |b| {
        b.iter(|| black_box(prim(&graph).len()));
    });

    group.bench_function("kruskal_100_nodes", |b| {
        b.iter(|| black_box(kruskal(&graph).len()));
    });

    group.finish();
}

fn bench_union_find(c: &mut Criterion) {
    let mut group = c.benchmark_group("union_find");

    for size in [1000, 10000] {
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::new("chain_unions", size), &size, |b, &size| {
            b.iter(|| {
                let mut uf = UnionFind::new(size);
                for i in 1..size {
                    uf.union(i - 1, i);
                }
                black_box(uf.find(size - 1))
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_prim_vs_kruskal, bench_dense_graph, bench_union_find);

criterion_main!(benches);
