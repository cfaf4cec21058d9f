//! FFT primitive cost on both backends
//!
//! Run with: cargo bench --bench fft_backends

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use dctfft_transform::{make_forward_fft, Complex, FftBackend};

fn bench_backends(c: &mut Criterion) {
    for backend in FftBackend::ALL {
        let mut group = c.benchmark_group(format!("fft_{}", backend.name()));
        let sizes: &[usize] = match backend {
            FftBackend::RustFft => &[16, 64, 256, 1024, 4096],
            FftBackend::Naive => &[16, 64, 256],
        };

        for &size in sizes {
            let fft = make_forward_fft::<f64>(size, backend).unwrap();
            let input: Vec<Complex<f64>> = (0..size)
                .map(|i| Complex::new((i % 17) as f64, 0.0))
                .collect();
            let mut buffer = input.clone();

            group.throughput(Throughput::Elements(size as u64));
            group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, _| {
                b.iter(|| {
                    buffer.copy_from_slice(&input);
                    fft.process(black_box(&mut buffer)).unwrap();
                });
            });
        }

        group.finish();
    }
}

criterion_group!(benches, bench_backends);
criterion_main!(benches);
