use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use fieldcalc::finance::npv;
use fieldcalc::math::Scalar;

fn build_cashflows(len: usize) -> Vec<Scalar> {
    (0..len)
        .map(|t| if t == 0 { -1.0e6 } else { 3.5e4 + t as Scalar })
        .collect()
}

fn bench_npv(c: &mut Criterion) {
    let mut group = c.benchmark_group("npv");
    for len in [64_usize, 1_024, 10_000] {
        group.bench_function(BenchmarkId::new("cashflows", len), |b| {
            b.iter_batched(
                || build_cashflows(len),
                |cashflows| {
                    let _ = npv(0.08, &cashflows);
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

criterion_group!(benches, bench_npv);
criterion_main!(benches);
