//! Linear interpolation implementation.

use super::data::{find_interval, sorted_points};
use super::equation::NOT_FITTED;
use super::Interpolator;
use crate::types::InterpolationError;
use num_traits::Float;

/// Piecewise linear interpolator.
///
/// Stores sorted (x, y) data points and draws a straight line between
/// adjacent points. Outside the data range the first or last segment is
/// extended.
///
/// # Type Parameters
///
/// * `T` - Floating-point type (e.g., `f64`, `Dual64`)
///
/// # Example
///
/// ```
/// use curvefit_core::math::interpolators::{Interpolator, LinearInterpolator};
///
/// let interp = LinearInterpolator::with_data(&[0.0, 1.0, 2.0, 3.0], &[0.0, 2.0, 4.0, 6.0]).unwrap();
/// assert_eq!(interp.domain().unwrap(), (0.0, 3.0));
/// ```
#[derive(Debug, Clone)]
pub struct LinearInterpolator<T: Float> {
    /// Sorted x-coordinates
    xs: Vec<T>,
    /// Corresponding y-values (in same order as xs after sorting)
    ys: Vec<T>,
}

impl<T: Float> Default for LinearInterpolator<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Float> LinearInterpolator<T> {
    /// Create an empty, unfitted interpolator.
    pub fn new() -> Self {
        Self {
            xs: Vec::new(),
            ys: Vec::new(),
        }
    }

    /// Create an interpolator fitted to the given points.
    ///
    /// # Example
    ///
    /// ```
    /// use curvefit_core::math::interpolators::LinearInterpolator;
    ///
    /// // Valid construction
    /// let interp = LinearInterpolator::with_data(&[0.0, 1.0], &[0.0, 1.0]).unwrap();
    ///
    /// // Insufficient data
    /// let result = LinearInterpolator::with_data(&[0.0], &[0.0]);
    /// assert!(result.is_err());
    /// ```
    pub fn with_data(xs: &[T], ys: &[T]) -> Result<Self, InterpolationError> {
        let mut interp = Self::new();
        interp.set_data(xs, ys)?;
        Ok(interp)
    }

    /// Returns a reference to the sorted x-coordinates.
    #[inline]
    pub fn xs(&self) -> &[T] {
        &self.xs
    }

    /// Returns a reference to the y-values (in sorted x order).
    #[inline]
    pub fn ys(&self) -> &[T] {
        &self.ys
    }

    /// Returns the number of data points.
    #[inline]
    pub fn len(&self) -> usize {
        self.xs.len()
    }

    /// Returns true if no data has been fitted.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.xs.is_empty()
    }
}

impl<T: Float> Interpolator<T> for LinearInterpolator<T> {
    fn name(&self) -> &'static str {
        "Linear Interpolation"
    }

    fn description(&self) -> &'static str {
        "Piecewise straight lines between neighbouring points. Fast and stable, C0 continuous."
    }

    fn min_points(&self) -> usize {
        2
    }

    fn set_data(&mut self, xs: &[T], ys: &[T]) -> Result<(), InterpolationError> {
        let (xs, ys) = sorted_points(xs, ys, self.min_points())?;
        self.xs = xs;
        self.ys = ys;
        Ok(())
    }

    fn is_fitted(&self) -> bool {
        !self.xs.is_empty()
    }

    #[inline]
    fn domain(&self) -> Result<(T, T), InterpolationError> {
        match (self.xs.first(), self.xs.last()) {
            (Some(&lo), Some(&hi)) => Ok((lo, hi)),
            _ => Err(InterpolationError::NotFitted),
        }
    }

    /// Interpolate value at point `x` using piecewise linear interpolation.
    ///
    /// # Formula
    ///
    /// ```text
    /// y = y0 + (y1 - y0) * (x - x0) / (x1 - x0)
    /// ```
    fn interpolate(&self, x: T) -> Result<T, InterpolationError> {
        if !self.is_fitted() {
            return Err(InterpolationError::NotFitted);
        }

        let i = find_interval(&self.xs, x);

        let x0 = self.xs[i];
        let x1 = self.xs[i + 1];
        let y0 = self.ys[i];
        let y1 = self.ys[i + 1];

        let t = (x - x0) / (x1 - x0);
        Ok(y0 + (y1 - y0) * t)
    }

    fn polynomial_equation(&self) -> String {
        if !self.is_fitted() {
            return NOT_FITTED.to_string();
        }
        format!("Piecewise linear with {} segments", self.xs.len() - 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ========================================
    // Construction Tests
    // ========================================

    #[test]
    fn test_new_is_unfitted() {
        let interp: LinearInterpolator<f64> = LinearInterpolator::new();
        assert!(!interp.is_fitted());
        assert!(interp.is_empty());
        assert_eq!(interp.interpolate(0.5), Err(InterpolationError::NotFitted));
        assert_eq!(interp.domain(), Err(InterpolationError::NotFitted));
    }

    #[test]
    fn test_with_minimum_points() {
        let interp = LinearInterpolator::with_data(&[0.0, 1.0], &[0.0, 1.0]).unwrap();
        assert_eq!(interp.len(), 2);
    }

    #[test]
    fn test_insufficient_data_one_point() {
        let result = LinearInterpolator::with_data(&[1.0], &[2.0]);
        match result.unwrap_err() {
            InterpolationError::InsufficientData { got, need } => {
                assert_eq!(got, 1);
                assert_eq!(need, 2);
            }
            _ => panic!("Expected InsufficientData error"),
        }
    }

    #[test]
    fn test_mismatched_lengths() {
        let result = LinearInterpolator::with_data(&[0.0, 1.0, 2.0], &[0.0, 1.0]);
        match result.unwrap_err() {
            InterpolationError::LengthMismatch { xs, ys } => {
                assert_eq!(xs, 3);
                assert_eq!(ys, 2);
            }
            _ => panic!("Expected LengthMismatch error"),
        }
    }

    #[test]
    fn test_duplicate_x_rejected() {
        let result = LinearInterpolator::with_data(&[0.0, 1.0, 1.0], &[0.0, 1.0, 2.0]);
        assert_eq!(result.unwrap_err(), InterpolationError::DuplicateX { x: 1.0 });
    }

    #[test]
    fn test_auto_sorts_unsorted_data() {
        let interp =
            LinearInterpolator::with_data(&[3.0, 1.0, 2.0, 0.0], &[9.0, 1.0, 4.0, 0.0]).unwrap();

        assert_eq!(interp.xs(), &[0.0, 1.0, 2.0, 3.0]);
        assert_eq!(interp.ys(), &[0.0, 1.0, 4.0, 9.0]);
    }

    #[test]
    fn test_set_data_replaces_previous_fit() {
        let mut interp = LinearInterpolator::new();
        interp.set_data(&[0.0, 1.0], &[0.0, 1.0]).unwrap();
        interp.set_data(&[0.0, 1.0, 2.0], &[5.0, 5.0, 5.0]).unwrap();

        assert_eq!(interp.len(), 3);
        assert!((interp.interpolate(0.5).unwrap() - 5.0).abs() < 1e-12);
    }

    #[test]
    fn test_failed_set_data_keeps_previous_fit() {
        let mut interp = LinearInterpolator::new();
        interp.set_data(&[0.0, 1.0], &[0.0, 1.0]).unwrap();
        assert!(interp.set_data(&[0.0], &[0.0]).is_err());

        assert_eq!(interp.len(), 2);
        assert!((interp.interpolate(0.5).unwrap() - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_with_f32() {
        let xs: [f32; 3] = [0.0, 1.0, 2.0];
        let ys: [f32; 3] = [0.0, 2.0, 4.0];
        let interp = LinearInterpolator::with_data(&xs, &ys).unwrap();

        let y = interp.interpolate(0.5_f32).unwrap();
        assert!((y - 1.0_f32).abs() < 1e-6);
    }

    // ========================================
    // Interpolation Tests
    // ========================================

    #[test]
    fn test_unit_line_midpoint_and_extrapolation() {
        let interp = LinearInterpolator::with_data(&[0.0, 1.0], &[0.0, 1.0]).unwrap();
        assert!((interp.interpolate(0.5).unwrap() - 0.5).abs() < 1e-12);
        assert!((interp.interpolate(2.0).unwrap() - 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_interpolate_at_knot_points() {
        let xs = [0.0, 1.0, 2.0, 3.0];
        let ys = [0.0, 2.0, 4.0, 6.0];
        let interp = LinearInterpolator::with_data(&xs, &ys).unwrap();

        for (&x, &y) in xs.iter().zip(&ys) {
            assert!((interp.interpolate(x).unwrap() - y).abs() < 1e-10);
        }
    }

    #[test]
    fn test_interpolate_arbitrary_points() {
        let interp = LinearInterpolator::with_data(&[0.0, 1.0, 2.0], &[0.0, 1.0, 4.0]).unwrap();

        // Between (1,1) and (2,4): 1 + 3*0.5 = 2.5
        assert!((interp.interpolate(1.5).unwrap() - 2.5).abs() < 1e-10);
        // Between (1,1) and (2,4): 1 + 3*0.75 = 3.25
        assert!((interp.interpolate(1.75).unwrap() - 3.25).abs() < 1e-10);
    }

    #[test]
    fn test_extrapolates_with_boundary_segments() {
        let interp = LinearInterpolator::with_data(&[0.0, 1.0, 2.0], &[0.0, 1.0, 4.0]).unwrap();

        // First segment slope 1
        assert!((interp.interpolate(-1.0).unwrap() - (-1.0)).abs() < 1e-10);
        // Last segment slope 3
        assert!((interp.interpolate(3.0).unwrap() - 7.0).abs() < 1e-10);
    }

    #[test]
    fn test_interpolate_non_uniform_spacing() {
        let interp =
            LinearInterpolator::with_data(&[0.0, 0.1, 1.0, 10.0], &[0.0, 1.0, 2.0, 3.0]).unwrap();

        assert!((interp.interpolate(0.05).unwrap() - 0.5).abs() < 1e-10);
        assert!((interp.interpolate(0.55).unwrap() - 1.5).abs() < 1e-10);
    }

    #[test]
    fn test_interpolate_range() {
        let interp = LinearInterpolator::with_data(&[0.0, 4.0], &[0.0, 8.0]).unwrap();
        let values = interp.interpolate_range(0.0, 4.0, 5).unwrap();
        assert_eq!(values.len(), 5);
        for (i, v) in values.iter().enumerate() {
            assert!((v - 2.0 * i as f64).abs() < 1e-12);
        }
    }

    #[test]
    fn test_interpolate_range_needs_two_points() {
        let interp = LinearInterpolator::with_data(&[0.0, 1.0], &[0.0, 1.0]).unwrap();
        assert!(matches!(
            interp.interpolate_range(0.0, 1.0, 1),
            Err(InterpolationError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_calculate_error_rmse() {
        let interp = LinearInterpolator::with_data(&[0.0, 1.0], &[0.0, 1.0]).unwrap();
        // Residuals 1 and -1 -> RMSE 1
        let rmse = interp.calculate_error(&[0.0, 1.0], &[-1.0, 2.0]).unwrap();
        assert!((rmse - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_calculate_error_validates_arrays() {
        let interp = LinearInterpolator::with_data(&[0.0, 1.0], &[0.0, 1.0]).unwrap();
        assert!(interp.calculate_error(&[0.0], &[0.0, 1.0]).is_err());
        assert!(interp.calculate_error(&[], &[]).is_err());
    }

    #[test]
    fn test_polynomial_equation() {
        let interp: LinearInterpolator<f64> = LinearInterpolator::new();
        assert_eq!(interp.polynomial_equation(), "No data points set");

        let interp = LinearInterpolator::with_data(&[0.0, 1.0, 2.0], &[0.0, 1.0, 4.0]).unwrap();
        assert_eq!(interp.polynomial_equation(), "Piecewise linear with 2 segments");
    }
}
