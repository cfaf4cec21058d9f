//! Throughput of each DCT-II strategy per input size
//!
//! Run with: cargo bench --bench dct_strategies
//!
//! Benchmark ids are `<strategy_family>/<size>` with element throughput, so
//! the reports give items per second for each family and size.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use dctfft_transform::{Dct2Executor, Dct2Plan, DirectDct2, Strategy};

const SIZES: [usize; 12] = [8, 15, 16, 64, 100, 256, 512, 1000, 1024, 2048, 4095, 4096];

fn create_input(size: usize) -> Vec<f64> {
    (0..size).map(|i| ((i * 7) % 31) as f64 / 31.0 - 0.5).collect()
}

fn bench_strategies(c: &mut Criterion) {
    for strategy in Strategy::ALL {
        let mut group = c.benchmark_group(strategy.name());

        for &size in &SIZES {
            let plan = Dct2Plan::<f64>::new(strategy, size).unwrap();
            let input = create_input(size);
            let mut data = input.clone();

            group.throughput(Throughput::Elements(size as u64));
            group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, _| {
                b.iter(|| {
                    data.copy_from_slice(&input);
                    plan.execute(black_box(&mut data)).unwrap();
                });
            });
        }

        group.finish();
    }
}

fn bench_direct(c: &mut Criterion) {
    let mut group = c.benchmark_group("direct");

    // Quadratic, so only the small sizes
    for &size in SIZES.iter().filter(|&&size| size <= 256) {
        let oracle = DirectDct2::new(size).unwrap();
        let input = create_input(size);
        let mut data = input.clone();

        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, _| {
            b.iter(|| {
                data.copy_from_slice(&input);
                Dct2Executor::<f64>::execute(&oracle, black_box(&mut data)).unwrap();
            });
        });
    }

    group.finish();
}

fn bench_planning(c: &mut Criterion) {
    let mut group = c.benchmark_group("plan");

    for strategy in Strategy::ALL {
        group.bench_function(BenchmarkId::new(strategy.name(), 1024), |b| {
            b.iter(|| Dct2Plan::<f64>::new(black_box(strategy), black_box(1024)).unwrap());
        });
    }

    group.finish();
}

criterion_group!(benches, bench_strategies, bench_direct, bench_planning);
criterion_main!(benches);
