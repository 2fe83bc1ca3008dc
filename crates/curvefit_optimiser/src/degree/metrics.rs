//! Error of a fitted interpolator against its reference expression.

use curvefit_core::expression::Expression;
use curvefit_core::math::interpolators::Interpolator;
use curvefit_core::sampling::uniform_grid;
use curvefit_core::types::InterpolationError;

/// Maximum and mean absolute error over a uniform grid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ErrorProfile {
    /// Largest absolute deviation
    pub max_error: f64,
    /// Mean absolute deviation
    pub mean_error: f64,
}

/// Compare `interp` with `expression` at `test_points` evenly spaced points
/// of `[x_min, x_max]`.
///
/// A non-finite deviation (for instance where the expression is NaN) makes
/// both figures infinite, so such a fit never meets a target.
///
/// # Errors
///
/// `InvalidInput` for a bad range or fewer than 2 test points; `NotFitted`
/// if `interp` has no data.
pub fn error_profile(
    interp: &dyn Interpolator<f64>,
    expression: &Expression,
    x_min: f64,
    x_max: f64,
    test_points: usize,
) -> Result<ErrorProfile, InterpolationError> {
    let grid = uniform_grid(x_min, x_max, test_points)
        .map_err(|e| InterpolationError::invalid_input(e.to_string()))?;

    let mut max_error = 0.0_f64;
    let mut sum = 0.0;
    for &x in &grid {
        let deviation = (expression.evaluate(x) - interp.interpolate(x)?).abs();
        if !deviation.is_finite() {
            return Ok(ErrorProfile {
                max_error: f64::INFINITY,
                mean_error: f64::INFINITY,
            });
        }
        max_error = max_error.max(deviation);
        sum += deviation;
    }

    Ok(ErrorProfile {
        max_error,
        mean_error: sum / grid.len() as f64,
    })
}

/// Maximum absolute deviation of `interp` from `expression`; see
/// [`error_profile`].
///
/// # Example
///
/// ```
/// use curvefit_core::expression::Expression;
/// use curvefit_core::math::interpolators::LinearInterpolator;
/// use curvefit_optimiser::max_abs_error;
///
/// let expr = Expression::parse("x^2").unwrap();
/// let interp = LinearInterpolator::with_data(&[0.0, 1.0], &[0.0, 1.0]).unwrap();
///
/// // The chord of x² on [0, 1] is furthest from the curve at x = 0.5
/// let err = max_abs_error(&interp, &expr, 0.0, 1.0, 101).unwrap();
/// assert!((err - 0.25).abs() < 1e-12);
/// ```
pub fn max_abs_error(
    interp: &dyn Interpolator<f64>,
    expression: &Expression,
    x_min: f64,
    x_max: f64,
    test_points: usize,
) -> Result<f64, InterpolationError> {
    Ok(error_profile(interp, expression, x_min, x_max, test_points)?.max_error)
}
