//! Criterion benchmarks for the denoising pipeline.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use curvefit_core::math::interpolators::{CubicSplineInterpolator, InterpolatorKind};
use curvefit_denoise::smoothing::smooth;
use curvefit_denoise::{Denoiser, SyntheticSignal};

fn corrupted(len: usize) -> Vec<f64> {
    let mut signal = SyntheticSignal::new(42, 44_100).unwrap();
    let mut samples = signal.sine_with_noise(440.0, 0.5, 0.01, len);
    signal.with_clicks(&mut samples, len / 2000);
    samples
}

fn bench_smoothing(c: &mut Criterion) {
    let mut group = c.benchmark_group("smoothing");
    for size in [10_000, 100_000] {
        let samples = corrupted(size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &samples, |b, s| {
            b.iter(|| smooth(black_box(s), 25, 3))
        });
    }
    group.finish();
}

fn bench_repair(c: &mut Criterion) {
    let denoiser = Denoiser::default();
    let mut group = c.benchmark_group("repair");
    group.sample_size(20);

    for size in [10_000, 100_000] {
        let samples = corrupted(size);
        group.bench_with_input(BenchmarkId::new("sequential", size), &samples, |b, s| {
            let mut spline = CubicSplineInterpolator::<f64>::new();
            b.iter(|| denoiser.repair(black_box(s), &mut spline))
        });
        group.bench_with_input(BenchmarkId::new("parallel", size), &samples, |b, s| {
            b.iter(|| denoiser.repair_parallel(black_box(s), InterpolatorKind::CubicSpline))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_smoothing, bench_repair);
criterion_main!(benches);
