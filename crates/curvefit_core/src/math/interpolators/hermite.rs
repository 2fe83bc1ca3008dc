//! Piecewise cubic Hermite interpolation.

use super::data::{find_interval, sorted_points};
use super::equation::NOT_FITTED;
use super::Interpolator;
use crate::types::InterpolationError;
use num_traits::Float;

/// Piecewise cubic Hermite interpolator (C¹ continuous).
///
/// Each segment matches both values and slopes at its endpoints. Slopes are
/// estimated by finite differences when fitted through
/// [`set_data`](Interpolator::set_data):
///
/// - interior points: central difference `(yᵢ₊₁ - yᵢ₋₁) / (xᵢ₊₁ - xᵢ₋₁)`
/// - first point: forward difference
/// - last point: backward difference
///
/// Known slopes can be supplied with
/// [`set_data_with_derivatives`](HermiteInterpolator::set_data_with_derivatives).
#[derive(Debug, Clone)]
pub struct HermiteInterpolator<T: Float> {
    xs: Vec<T>,
    ys: Vec<T>,
    /// Slope at each point
    derivatives: Vec<T>,
}

impl<T: Float> Default for HermiteInterpolator<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Float> HermiteInterpolator<T> {
    /// Create an empty, unfitted interpolator.
    pub fn new() -> Self {
        Self {
            xs: Vec::new(),
            ys: Vec::new(),
            derivatives: Vec::new(),
        }
    }

    /// Create an interpolator fitted to the given points with estimated slopes.
    pub fn with_data(xs: &[T], ys: &[T]) -> Result<Self, InterpolationError> {
        let mut interp = Self::new();
        interp.set_data(xs, ys)?;
        Ok(interp)
    }

    /// Fit using caller-supplied slopes instead of finite differences.
    ///
    /// The three arrays are sorted together by x.
    ///
    /// # Errors
    ///
    /// Same as [`set_data`](Interpolator::set_data), plus `LengthMismatch`
    /// and `InvalidInput` for the derivative array.
    ///
    /// # Example
    ///
    /// ```
    /// use curvefit_core::math::interpolators::{HermiteInterpolator, Interpolator};
    ///
    /// // y = x² with exact slopes 2x
    /// let mut interp = HermiteInterpolator::<f64>::new();
    /// interp
    ///     .set_data_with_derivatives(&[0.0, 1.0, 2.0], &[0.0, 1.0, 4.0], &[0.0, 2.0, 4.0])
    ///     .unwrap();
    /// assert!((interp.interpolate(1.5).unwrap() - 2.25).abs() < 1e-12);
    /// ```
    pub fn set_data_with_derivatives(
        &mut self,
        xs: &[T],
        ys: &[T],
        derivatives: &[T],
    ) -> Result<(), InterpolationError> {
        if ys.len() != xs.len() {
            return Err(InterpolationError::LengthMismatch {
                xs: xs.len(),
                ys: ys.len(),
            });
        }
        if derivatives.len() != xs.len() {
            return Err(InterpolationError::LengthMismatch {
                xs: xs.len(),
                ys: derivatives.len(),
            });
        }
        if derivatives.iter().any(|d| !d.is_finite()) {
            return Err(InterpolationError::invalid_input(
                "derivatives must be finite",
            ));
        }

        // Sort (x, index) so the derivatives follow the same permutation
        let indices: Vec<T> = (0..xs.len()).map(|i| T::from(i).unwrap()).collect();
        let (sorted_xs, order) = sorted_points(xs, &indices, self.min_points())?;

        let mut sorted_ys = Vec::with_capacity(order.len());
        let mut sorted_ds = Vec::with_capacity(order.len());
        for idx in &order {
            let i = idx.to_usize().unwrap_or(0);
            if !ys[i].is_finite() {
                return Err(InterpolationError::invalid_input(format!(
                    "point {} is not finite",
                    i
                )));
            }
            sorted_ys.push(ys[i]);
            sorted_ds.push(derivatives[i]);
        }

        self.xs = sorted_xs;
        self.ys = sorted_ys;
        self.derivatives = sorted_ds;
        Ok(())
    }

    /// Slopes used at each (sorted) point.
    #[inline]
    pub fn derivatives(&self) -> &[T] {
        &self.derivatives
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

    fn estimate_derivatives(xs: &[T], ys: &[T]) -> Vec<T> {
        let n = xs.len();
        let mut d = vec![T::zero(); n];

        for i in 1..n - 1 {
            d[i] = (ys[i + 1] - ys[i - 1]) / (xs[i + 1] - xs[i - 1]);
        }
        d[0] = (ys[1] - ys[0]) / (xs[1] - xs[0]);
        d[n - 1] = (ys[n - 1] - ys[n - 2]) / (xs[n - 1] - xs[n - 2]);

        d
    }
}

impl<T: Float> Interpolator<T> for HermiteInterpolator<T> {
    fn name(&self) -> &'static str {
        "Hermite Interpolation"
    }

    fn description(&self) -> &'static str {
        "Piecewise cubic interpolation using values and slopes. C1 continuous; slopes estimated by finite differences."
    }

    fn min_points(&self) -> usize {
        2
    }

    fn set_data(&mut self, xs: &[T], ys: &[T]) -> Result<(), InterpolationError> {
        let (xs, ys) = sorted_points(xs, ys, self.min_points())?;
        self.derivatives = Self::estimate_derivatives(&xs, &ys);
        self.xs = xs;
        self.ys = ys;
        Ok(())
    }

    fn is_fitted(&self) -> bool {
        !self.xs.is_empty()
    }

    fn domain(&self) -> Result<(T, T), InterpolationError> {
        match (self.xs.first(), self.xs.last()) {
            (Some(&lo), Some(&hi)) => Ok((lo, hi)),
            _ => Err(InterpolationError::NotFitted),
        }
    }

    /// Evaluate the Hermite cubic on the containing segment.
    ///
    /// With `t = (x - x₀) / h`:
    ///
    /// ```text
    /// H(t) = y₀·h₀₀(t) + h·m₀·h₁₀(t) + y₁·h₀₁(t) + h·m₁·h₁₁(t)
    /// h₀₀ = (1 + 2t)(1 - t)²   h₁₀ = t(1 - t)²
    /// h₀₁ = t²(3 - 2t)         h₁₁ = t²(t - 1)
    /// ```
    fn interpolate(&self, x: T) -> Result<T, InterpolationError> {
        if !self.is_fitted() {
            return Err(InterpolationError::NotFitted);
        }

        let i = find_interval(&self.xs, x);
        let (x0, x1) = (self.xs[i], self.xs[i + 1]);
        let (y0, y1) = (self.ys[i], self.ys[i + 1]);
        let (m0, m1) = (self.derivatives[i], self.derivatives[i + 1]);

        let one = T::one();
        let two = T::from(2.0).unwrap();
        let three = T::from(3.0).unwrap();

        let h = x1 - x0;
        let t = (x - x0) / h;
        let u = one - t;

        let h00 = (one + two * t) * u * u;
        let h10 = t * u * u;
        let h01 = t * t * (three - two * t);
        let h11 = t * t * (t - one);

        Ok(y0 * h00 + h * m0 * h10 + y1 * h01 + h * m1 * h11)
    }

    fn polynomial_equation(&self) -> String {
        if !self.is_fitted() {
            return NOT_FITTED.to_string();
        }
        format!(
            "Piecewise cubic Hermite with {} segments (C¹ continuous)",
            self.xs.len() - 1
        )
    }
}
