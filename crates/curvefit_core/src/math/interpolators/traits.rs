//! Core trait shared by every interpolation strategy.

use crate::types::InterpolationError;
use num_traits::Float;

/// Common contract for 1D interpolators.
///
/// An interpolator is created empty, fitted with [`set_data`](Interpolator::set_data),
/// and then evaluated any number of times. Fitting again replaces the whole
/// derived state; nothing is accumulated between fits.
///
/// Fitting takes `&mut self` and evaluation takes `&self`, so a single
/// instance cannot be refitted while another caller is evaluating it.
/// Distinct instances share no storage and can be used from different
/// threads at once.
///
/// # Type Parameters
///
/// * `T` - Floating-point type (e.g., `f64`, `f32`, `Dual64`)
///
/// # Example
///
/// ```
/// use curvefit_core::math::interpolators::{Interpolator, LinearInterpolator};
///
/// let mut interp = LinearInterpolator::<f64>::new();
/// interp.set_data(&[0.0, 1.0], &[0.0, 1.0]).unwrap();
///
/// assert!((interp.interpolate(0.5).unwrap() - 0.5).abs() < 1e-12);
/// // Outside the fitted range the boundary segment is extended
/// assert!((interp.interpolate(2.0).unwrap() - 2.0).abs() < 1e-12);
/// ```
pub trait Interpolator<T: Float> {
    /// Human-readable name of the method.
    fn name(&self) -> &'static str;

    /// One-line description of the method's characteristics.
    fn description(&self) -> &'static str;

    /// Minimum number of points `set_data` accepts.
    fn min_points(&self) -> usize;

    /// Fit the interpolator to the given points.
    ///
    /// Points may arrive in any order; they are sorted ascending by x.
    /// On error the previously fitted state (if any) is left untouched.
    ///
    /// # Errors
    ///
    /// * `LengthMismatch` - `xs` and `ys` differ in length
    /// * `InsufficientData` - fewer than [`min_points`](Interpolator::min_points) points
    /// * `DuplicateX` - two points share an x-coordinate
    /// * `InvalidInput` - a coordinate is NaN or infinite
    fn set_data(&mut self, xs: &[T], ys: &[T]) -> Result<(), InterpolationError>;

    /// Returns true once `set_data` has succeeded.
    fn is_fitted(&self) -> bool;

    /// Range `(x_min, x_max)` of the fitted points.
    fn domain(&self) -> Result<(T, T), InterpolationError>;

    /// Estimate the value at `x`.
    ///
    /// Points outside the fitted range are extrapolated from the nearest
    /// boundary interval rather than rejected.
    ///
    /// # Errors
    ///
    /// * `NotFitted` - called before a successful `set_data`
    fn interpolate(&self, x: T) -> Result<T, InterpolationError>;

    /// Best-effort display string of the fitted curve.
    ///
    /// Advisory only: the string may summarise instead of listing
    /// coefficients, and never reports an error.
    fn polynomial_equation(&self) -> String;

    /// Evaluate at `n` evenly spaced points from `x_min` to `x_max` inclusive.
    ///
    /// # Errors
    ///
    /// * `InvalidInput` - `n < 2`
    /// * `NotFitted` - called before a successful `set_data`
    fn interpolate_range(&self, x_min: T, x_max: T, n: usize) -> Result<Vec<T>, InterpolationError> {
        if n < 2 {
            return Err(InterpolationError::invalid_input(format!(
                "number of points must be at least 2, got {}",
                n
            )));
        }

        let step = (x_max - x_min) / T::from(n - 1).unwrap();
        (0..n)
            .map(|i| {
                // Pin the last point so rounding never overshoots x_max
                let x = if i == n - 1 {
                    x_max
                } else {
                    x_min + step * T::from(i).unwrap()
                };
                self.interpolate(x)
            })
            .collect()
    }

    /// Root-mean-square error of the fitted curve against test points.
    ///
    /// # Errors
    ///
    /// * `LengthMismatch` - test arrays differ in length
    /// * `InvalidInput` - test arrays are empty
    /// * `NotFitted` - called before a successful `set_data`
    fn calculate_error(&self, test_x: &[T], test_y: &[T]) -> Result<T, InterpolationError> {
        if test_x.len() != test_y.len() {
            return Err(InterpolationError::LengthMismatch {
                xs: test_x.len(),
                ys: test_y.len(),
            });
        }
        if test_x.is_empty() {
            return Err(InterpolationError::invalid_input(
                "test arrays must not be empty",
            ));
        }

        let mut sum_sq = T::zero();
        for (&x, &y) in test_x.iter().zip(test_y) {
            let residual = self.interpolate(x)? - y;
            sum_sq = sum_sq + residual * residual;
        }

        Ok((sum_sq / T::from(test_x.len()).unwrap()).sqrt())
    }
}
