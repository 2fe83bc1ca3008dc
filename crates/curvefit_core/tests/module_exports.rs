//! Integration tests for module exports.
//!
//! Verify that all public modules and types are reachable via absolute paths.

/// Every interpolator, the trait, and the kind selector are exported.
#[test]
fn test_interpolator_exports() {
    use curvefit_core::math::interpolators::{
        CubicSplineInterpolator, HermiteInterpolator, Interpolator, InterpolatorKind,
        LagrangeInterpolator, LinearInterpolator, NewtonInterpolator,
    };

    let xs = [0.0, 1.0, 2.0];
    let ys = [0.0, 1.0, 4.0];

    let boxed: Vec<Box<dyn Interpolator<f64>>> = vec![
        Box::new(LinearInterpolator::with_data(&xs, &ys).unwrap()),
        Box::new(LagrangeInterpolator::with_data(&xs, &ys).unwrap()),
        Box::new(NewtonInterpolator::with_data(&xs, &ys).unwrap()),
        Box::new(CubicSplineInterpolator::with_data(&xs, &ys).unwrap()),
        Box::new(HermiteInterpolator::with_data(&xs, &ys).unwrap()),
    ];
    for interp in &boxed {
        assert_eq!(interp.domain().unwrap(), (0.0, 2.0));
    }

    assert_eq!(InterpolatorKind::ALL.len(), boxed.len());
}

/// Expression parsing and one-shot evaluation are exported.
#[test]
fn test_expression_exports() {
    use curvefit_core::expression::{evaluate_str, Expression, DEFAULT_VARIABLE};

    let expr = Expression::parse("x + 1").unwrap();
    assert_eq!(expr.variable(), DEFAULT_VARIABLE);
    assert_eq!(evaluate_str("x + 1", 1.0).unwrap(), 2.0);
}

/// Sampling types and node helpers are exported.
#[test]
fn test_sampling_exports() {
    use curvefit_core::expression::Expression;
    use curvefit_core::sampling::{
        chebyshev_nodes, uniform_grid, SampleGenerator, Samples, SpacingMode,
    };

    let expr = Expression::parse("x").unwrap();
    let samples: Samples = SampleGenerator::new(&expr)
        .generate(SpacingMode::Chebyshev, 0.0, 1.0, 3)
        .unwrap();
    assert_eq!(samples.xs, chebyshev_nodes(0.0, 1.0, 3).unwrap());
    assert_eq!(uniform_grid(0.0, 1.0, 2).unwrap(), vec![0.0, 1.0]);
}

/// Error types are exported from both `types` and `types::error`.
#[test]
fn test_error_exports() {
    use curvefit_core::types::error::InterpolationError as Nested;
    use curvefit_core::types::{ExpressionError, InterpolationError, SamplingError};

    let err: Nested = InterpolationError::NotFitted;
    assert!(err.is_state_error());
    let _: &dyn std::error::Error = &ExpressionError::Empty;
    let _: &dyn std::error::Error = &SamplingError::TooFewSamples { got: 0, need: 1 };
}
