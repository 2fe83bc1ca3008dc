//! Integration tests for the degree search.

use curvefit_core::expression::Expression;
use curvefit_core::math::interpolators::InterpolatorKind;
use curvefit_optimiser::{DegreeOptimiser, DegreeSearchConfig, OptimiserError};
use proptest::prelude::*;
use std::f64::consts::PI;

// ============================================================================
// Target Accuracy
// ============================================================================

/// Every smooth method reaches 1e-2 on one period of sine within 50 samples.
#[test]
fn test_sine_over_full_period_all_smooth_methods() {
    let expr = Expression::parse("sin(x)").unwrap();

    for kind in [
        InterpolatorKind::Lagrange,
        InterpolatorKind::Newton,
        InterpolatorKind::CubicSpline,
        InterpolatorKind::Hermite,
    ] {
        let optimiser = DegreeOptimiser::new(expr.clone(), 0.0, 2.0 * PI, kind).unwrap();
        let result = optimiser.find_minimum_degree(1e-2, 2, 50).unwrap();

        assert!(result.target_met, "{} did not reach the target", kind);
        assert!(result.achieved_n <= 50);
        assert!(
            result.error <= 1e-2,
            "{}: error {} above target",
            kind,
            result.error
        );
    }
}

/// Global polynomials converge far faster than piecewise linear on smooth data.
#[test]
fn test_polynomial_needs_fewer_samples_than_linear() {
    let expr = Expression::parse("exp(x)").unwrap();
    let search = |kind| {
        DegreeOptimiser::new(expr.clone(), 0.0, 1.0, kind)
            .unwrap()
            .with_config(DegreeSearchConfig::new().with_test_points(500))
            .find_minimum_degree(1e-3, 2, 60)
            .unwrap()
    };

    let newton = search(InterpolatorKind::Newton);
    let linear = search(InterpolatorKind::Linear);
    assert!(newton.target_met && linear.target_met);
    assert!(newton.achieved_n < linear.achieved_n);
}

/// History is ordered and ends at the reported sample count.
#[test]
fn test_history_is_ascending() {
    let expr = Expression::parse("1 / (1 + 25*x^2)").unwrap();
    let result = DegreeOptimiser::new(expr, -1.0, 1.0, InterpolatorKind::CubicSpline)
        .unwrap()
        .find_minimum_degree(1e-3, 3, 40)
        .unwrap();

    assert!(result.history.windows(2).all(|w| w[0].n < w[1].n));
    assert_eq!(result.history.last().map(|t| t.n), Some(result.achieved_n));
}

// ============================================================================
// Errors
// ============================================================================

#[test]
fn test_errors_surface_to_caller() {
    let expr = Expression::parse("x").unwrap();
    let optimiser = DegreeOptimiser::new(expr, 0.0, 1.0, InterpolatorKind::CubicSpline).unwrap();

    match optimiser.find_minimum_degree(1e-3, 1, 2).unwrap_err() {
        OptimiserError::NoSuccessfulFit { min_n, max_n } => {
            assert_eq!((min_n, max_n), (1, 2));
        }
        other => panic!("Expected NoSuccessfulFit, got {:?}", other),
    }
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(50))]

    /// A quadratic is reproduced by a global polynomial from three samples.
    #[test]
    fn test_quadratic_found_at_three_samples(
        a in -5.0..5.0f64,
        b in -5.0..5.0f64,
        c in -5.0..5.0f64,
    ) {
        prop_assume!(a.abs() > 0.1);
        let expr = Expression::parse(&format!("{}*x^2 + {}*x + {}", a, b, c)).unwrap();
        let optimiser = DegreeOptimiser::new(expr, -2.0, 2.0, InterpolatorKind::Newton)
            .unwrap()
            .with_config(DegreeSearchConfig::new().with_test_points(200));

        let result = optimiser.find_minimum_degree(1e-8, 2, 10).unwrap();
        prop_assert_eq!(result.achieved_n, 3);
    }
}
