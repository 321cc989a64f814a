//! Criterion benchmarks for the three circuit constructors on random Eulerian graphs.
//! Fleury runs one connectivity check per candidate edge, so it gets the
//! small sizes only.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use eulerian::prelude::*;

fn graph(vertices: usize, kind: GraphKind) -> Graph {
    let cfg = EulerianCfg {
        vertices,
        walks: vertices,
        walk_len: 4,
        kind,
        self_loops: false,
    };
    draw_eulerian(cfg, ReplayToken::new(2024, vertices as u64)).unwrap_or_else(Graph::trivial)
}

fn bench_circuits(c: &mut Criterion) {
    let mut group = c.benchmark_group("circuit");
    for kind in [GraphKind::Undirected, GraphKind::Directed] {
        for &n in &[8usize, 16, 32] {
            let g = graph(n, kind);
            for algo in Algorithm::ALL {
                if algo == Algorithm::FleuryLike && n > 16 {
                    continue;
                }
                let id = BenchmarkId::new(format!("{algo}/{kind}"), n);
                group.bench_with_input(id, &g, |b, g| {
                    b.iter(|| {
                        let _c = find_euler_circuit(g, 1, algo).unwrap();
                    })
                });
            }
        }
    }
    group.bench_function("feasibility/undirected/32", |b| {
        let g = graph(32, GraphKind::Undirected);
        b.iter(|| has_euler_circuit(&g).unwrap())
    });
    group.finish();
}

criterion_group!(benches, bench_circuits);
criterion_main!(benches);
