//! Criterion benchmarks for curvefit_core.
//!
//! Measures fitting and lookup cost of each interpolator across data sizes,
//! plus expression evaluation and Chebyshev sampling.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use curvefit_core::expression::Expression;
use curvefit_core::math::interpolators::InterpolatorKind;
use curvefit_core::sampling::SampleGenerator;

/// Generate test data for 1D interpolation benchmarks.
fn generate_1d_data(n: usize) -> (Vec<f64>, Vec<f64>) {
    let xs: Vec<f64> = (0..n).map(|i| i as f64 / (n - 1) as f64).collect();
    let ys: Vec<f64> = xs.iter().map(|&x| x.sin() + 0.5 * x * x).collect();
    (xs, ys)
}

/// Piecewise methods scale to large inputs.
fn bench_piecewise(c: &mut Criterion) {
    let mut group = c.benchmark_group("piecewise");

    for kind in [
        InterpolatorKind::Linear,
        InterpolatorKind::CubicSpline,
        InterpolatorKind::Hermite,
    ] {
        for size in [100, 1000, 10000] {
            let (xs, ys) = generate_1d_data(size);

            group.bench_with_input(
                BenchmarkId::new(format!("{}/fit", kind), size),
                &(&xs, &ys),
                |b, (xs, ys)| {
                    let mut interp = kind.build();
                    b.iter(|| interp.set_data(black_box(xs), black_box(ys)).unwrap());
                },
            );

            let mut interp = kind.build();
            interp.set_data(&xs, &ys).unwrap();
            group.bench_with_input(
                BenchmarkId::new(format!("{}/lookup", kind), size),
                &interp,
                |b, interp| {
                    b.iter(|| interp.interpolate(black_box(0.5)).unwrap());
                },
            );
        }
    }

    group.finish();
}

/// Global polynomials are only practical for small point counts.
fn bench_polynomial(c: &mut Criterion) {
    let mut group = c.benchmark_group("polynomial");

    for kind in [InterpolatorKind::Lagrange, InterpolatorKind::Newton] {
        for size in [5, 10, 20] {
            let (xs, ys) = generate_1d_data(size);
            let mut interp = kind.build();
            interp.set_data(&xs, &ys).unwrap();

            group.bench_with_input(
                BenchmarkId::new(format!("{}/lookup", kind), size),
                &interp,
                |b, interp| {
                    b.iter(|| interp.interpolate(black_box(0.37)).unwrap());
                },
            );
        }
    }

    group.finish();
}

/// Parse once, evaluate many times.
fn bench_expression(c: &mut Criterion) {
    let expr = Expression::parse("sin(x)^2 + exp(-x/3) * sqrt(abs(x))").unwrap();

    c.bench_function("expression/parse", |b| {
        b.iter(|| Expression::parse(black_box("sin(x)^2 + exp(-x/3) * sqrt(abs(x))")).unwrap())
    });
    c.bench_function("expression/evaluate", |b| {
        b.iter(|| expr.evaluate(black_box(1.25)))
    });
    c.bench_function("sampling/chebyshev_1000", |b| {
        let generator = SampleGenerator::new(&expr);
        b.iter(|| generator.chebyshev(black_box(0.0), black_box(10.0), 1000).unwrap())
    });
}

criterion_group!(benches, bench_piecewise, bench_polynomial, bench_expression);
criterion_main!(benches);
