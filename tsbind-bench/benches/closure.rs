//! Transitive generation benchmarks.

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use std::hint::black_box;
use tsbind_bench::graphs::{GraphRoot, chain, cycle, import_chain};
use tsbind_codegen::{csharp, generate};
use tsbind_schema::{DeclarationKind, DeclarationStore, StoreError};

type Builder = fn(usize) -> Result<(DeclarationStore, GraphRoot), StoreError>;

fn run(store: &DeclarationStore, root: &GraphRoot) -> usize {
    generate(
        &root.unit,
        &root.symbol,
        DeclarationKind::Interface,
        "Bench",
        store,
    )
    .map(|output| output.len())
    .unwrap_or(0)
}

fn benchmark_closure(c: &mut Criterion) {
    let builders: [(&str, Builder); 3] = [
        ("chain", chain),
        ("cycle", cycle),
        ("import_chain", import_chain),
    ];

    for (name, build) in builders {
        let mut group = c.benchmark_group(format!("closure_{name}"));
        for size in [10usize, 100, 1000] {
            let Ok((store, root)) = build(size) else {
                continue;
            };
            group.throughput(Throughput::Elements(size as u64));
            group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, _| {
                b.iter(|| run(black_box(&store), black_box(&root)))
            });
        }
        group.finish();
    }
}

fn benchmark_render(c: &mut Criterion) {
    let Ok((store, root)) = chain(100) else {
        return;
    };
    let Ok(output) = generate(
        &root.unit,
        &root.symbol,
        DeclarationKind::Interface,
        "Bench",
        &store,
    ) else {
        return;
    };

    let mut group = c.benchmark_group("render");
    group.throughput(Throughput::Elements(output.len() as u64));
    group.bench_function("csharp_chain_100", |b| {
        b.iter(|| csharp::render(black_box(&output)))
    });
    group.finish();
}

criterion_group!(benches, benchmark_closure, benchmark_render);
criterion_main!(benches);
