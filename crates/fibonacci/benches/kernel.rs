use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use fibonacci::fibonacci;
use std::hint::black_box;

fn recursive(c: &mut Criterion) {
    let mut group = c.benchmark_group("fibonacci");

    for &n in &[10i64, 15, 20, 25] {
        group.bench_with_input(BenchmarkId::new("recursive", n), &n, |b, &n| {
            b.iter(|| fibonacci(black_box(n)))
        });
    }

    group.finish();
}

criterion_group!(benches, recursive);
criterion_main!(benches);
