//! Natural cubic spline interpolation.

use super::data::{find_interval, sorted_points};
use super::equation::NOT_FITTED;
use super::Interpolator;
use crate::types::InterpolationError;
use num_traits::Float;

/// Polynomial coefficients for a cubic spline segment.
///
/// Represents a cubic polynomial: `y = a + b*(x-xi) + c*(x-xi)² + d*(x-xi)³`
#[derive(Debug, Clone, Copy)]
struct SplineCoeffs<T: Float> {
    /// Constant term (y value at segment start)
    a: T,
    /// Linear coefficient
    b: T,
    /// Quadratic coefficient
    c: T,
    /// Cubic coefficient
    d: T,
}

/// Natural cubic spline interpolator with C² continuity.
///
/// Stores sorted x-coordinates and per-segment cubic coefficients with zero
/// second derivative at both boundaries. The tridiagonal system for the
/// second derivatives is solved with the Thomas algorithm in O(n).
/// Outside the data range the boundary segment's cubic is extended.
///
/// # Type Parameters
///
/// * `T` - Floating-point type (e.g., `f64`, `Dual64`)
///
/// # Example
///
/// ```
/// use curvefit_core::math::interpolators::{CubicSplineInterpolator, Interpolator};
///
/// let xs = [0.0, 1.0, 2.0, 3.0];
/// let ys = [0.0, 1.0, 4.0, 9.0];
///
/// let interp = CubicSplineInterpolator::with_data(&xs, &ys).unwrap();
/// let y = interp.interpolate(1.5).unwrap();
/// let slope = interp.interpolate_derivative(1.5).unwrap();
/// # assert!(y > 1.0 && y < 4.0);
/// # assert!(slope > 0.0);
/// ```
#[derive(Debug, Clone)]
pub struct CubicSplineInterpolator<T: Float> {
    /// Sorted x-coordinates
    xs: Vec<T>,
    /// Polynomial coefficients for each segment
    coeffs: Vec<SplineCoeffs<T>>,
}

impl<T: Float> Default for CubicSplineInterpolator<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Float> CubicSplineInterpolator<T> {
    /// Create an empty, unfitted spline.
    pub fn new() -> Self {
        Self {
            xs: Vec::new(),
            coeffs: Vec::new(),
        }
    }

    /// Create a spline fitted to the given points.
    ///
    /// # Example
    ///
    /// ```
    /// use curvefit_core::math::interpolators::CubicSplineInterpolator;
    ///
    /// let interp = CubicSplineInterpolator::with_data(&[0.0, 1.0, 2.0], &[0.0, 1.0, 4.0]).unwrap();
    ///
    /// // A spline needs at least three points
    /// let result = CubicSplineInterpolator::with_data(&[0.0, 1.0], &[0.0, 1.0]);
    /// assert!(result.is_err());
    /// ```
    pub fn with_data(xs: &[T], ys: &[T]) -> Result<Self, InterpolationError> {
        let mut interp = Self::new();
        interp.set_data(xs, ys)?;
        Ok(interp)
    }

    /// Compute natural cubic spline coefficients using the Thomas algorithm.
    ///
    /// Solves the tridiagonal system for the interior second derivatives
    /// (M values, with M₀ = Mₙ₋₁ = 0), then derives each segment's
    /// polynomial coefficients.
    fn compute_coefficients(xs: &[T], ys: &[T]) -> Vec<SplineCoeffs<T>> {
        let n = xs.len();
        let two = T::from(2.0).unwrap();
        let six = T::from(6.0).unwrap();

        // Compute intervals h[i] = x[i+1] - x[i]
        let h: Vec<T> = (0..n - 1).map(|i| xs[i + 1] - xs[i]).collect();

        // Interior equations, one per interior point i = 1..n-1:
        //   h[i-1]*M[i-1] + 2*(h[i-1]+h[i])*M[i] + h[i]*M[i+1]
        //     = 6*((y[i+1]-y[i])/h[i] - (y[i]-y[i-1])/h[i-1])
        // Row k corresponds to point i = k + 1: sub-diagonal h[k],
        // super-diagonal h[k+1].
        let interior = n - 2;

        // Forward elimination
        let mut c_prime: Vec<T> = Vec::with_capacity(interior);
        let mut d_prime: Vec<T> = Vec::with_capacity(interior);
        for k in 0..interior {
            let i = k + 1;
            let diag = two * (h[i - 1] + h[i]);
            let rhs = six * ((ys[i + 1] - ys[i]) / h[i] - (ys[i] - ys[i - 1]) / h[i - 1]);

            if k == 0 {
                c_prime.push(h[i] / diag);
                d_prime.push(rhs / diag);
            } else {
                let denom = diag - h[i - 1] * c_prime[k - 1];
                c_prime.push(h[i] / denom);
                d_prime.push((rhs - h[i - 1] * d_prime[k - 1]) / denom);
            }
        }

        // Back substitution; m[0] and m[n-1] stay 0 (natural boundary)
        let mut m: Vec<T> = vec![T::zero(); n];
        for k in (0..interior).rev() {
            let next = m[k + 2];
            m[k + 1] = d_prime[k] - c_prime[k] * next;
        }

        (0..n - 1)
            .map(|i| SplineCoeffs {
                a: ys[i],
                b: (ys[i + 1] - ys[i]) / h[i] - h[i] * (two * m[i] + m[i + 1]) / six,
                c: m[i] / two,
                d: (m[i + 1] - m[i]) / (six * h[i]),
            })
            .collect()
    }

    /// Segment index and offset `x - xᵢ` for evaluating at `x`.
    #[inline]
    fn locate(&self, x: T) -> Result<(usize, T), InterpolationError> {
        if !self.is_fitted() {
            return Err(InterpolationError::NotFitted);
        }
        let i = find_interval(&self.xs, x);
        Ok((i, x - self.xs[i]))
    }

    /// First derivative of the spline at `x`.
    ///
    /// Uses the same segment coefficients as [`interpolate`](Interpolator::interpolate):
    /// `S'(x) = b + 2c·dx + 3d·dx²`.
    pub fn interpolate_derivative(&self, x: T) -> Result<T, InterpolationError> {
        let (i, dx) = self.locate(x)?;
        let s = &self.coeffs[i];
        let two = T::from(2.0).unwrap();
        let three = T::from(3.0).unwrap();
        Ok(s.b + two * s.c * dx + three * s.d * dx * dx)
    }

    /// Second derivative of the spline at `x`: `S''(x) = 2c + 6d·dx`.
    pub fn interpolate_second_derivative(&self, x: T) -> Result<T, InterpolationError> {
        let (i, dx) = self.locate(x)?;
        let s = &self.coeffs[i];
        let two = T::from(2.0).unwrap();
        let six = T::from(6.0).unwrap();
        Ok(two * s.c + six * s.d * dx)
    }

    /// Returns a reference to the sorted x-coordinates.
    #[inline]
    pub fn xs(&self) -> &[T] {
        &self.xs
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

impl<T: Float> Interpolator<T> for CubicSplineInterpolator<T> {
    fn name(&self) -> &'static str {
        "Cubic Spline Interpolation"
    }

    fn description(&self) -> &'static str {
        "Piecewise cubic polynomials with continuous first and second derivatives and natural boundaries. Smooth and stable for large datasets."
    }

    fn min_points(&self) -> usize {
        3
    }

    fn set_data(&mut self, xs: &[T], ys: &[T]) -> Result<(), InterpolationError> {
        let (xs, ys) = sorted_points(xs, ys, self.min_points())?;
        self.coeffs = Self::compute_coefficients(&xs, &ys);
        self.xs = xs;
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

    /// Interpolate value at point `x` using cubic spline.
    ///
    /// Uses binary search (O(log n)) to find the appropriate segment,
    /// then evaluates the cubic polynomial.
    ///
    /// # Formula
    ///
    /// ```text
    /// y = a + b*(x-xi) + c*(x-xi)² + d*(x-xi)³
    /// ```
    fn interpolate(&self, x: T) -> Result<T, InterpolationError> {
        let (i, dx) = self.locate(x)?;
        let s = &self.coeffs[i];
        Ok(s.a + dx * (s.b + dx * (s.c + dx * s.d)))
    }

    fn polynomial_equation(&self) -> String {
        if !self.is_fitted() {
            return NOT_FITTED.to_string();
        }
        format!(
            "Piecewise cubic spline with {} segments (C² continuous, natural boundaries)",
            self.xs.len() - 1
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    // ========================================
    // Construction Tests
    // ========================================

    #[test]
    fn test_with_minimum_points() {
        let interp = CubicSplineInterpolator::with_data(&[0.0, 1.0, 2.0], &[0.0, 1.0, 4.0]).unwrap();
        assert_eq!(interp.len(), 3);
    }

    #[test]
    fn test_insufficient_data_two_points() {
        let result = CubicSplineInterpolator::with_data(&[0.0, 1.0], &[0.0, 1.0]);
        match result.unwrap_err() {
            InterpolationError::InsufficientData { got, need } => {
                assert_eq!(got, 2);
                assert_eq!(need, 3);
            }
            _ => panic!("Expected InsufficientData error"),
        }
    }

    #[test]
    fn test_auto_sorts_unsorted_data() {
        let interp =
            CubicSplineInterpolator::with_data(&[3.0, 1.0, 2.0, 0.0], &[9.0, 1.0, 4.0, 0.0])
                .unwrap();
        assert_eq!(interp.xs(), &[0.0, 1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_unfitted_derivative_is_state_error() {
        let interp: CubicSplineInterpolator<f64> = CubicSplineInterpolator::new();
        assert_eq!(
            interp.interpolate_derivative(0.0),
            Err(InterpolationError::NotFitted)
        );
    }

    // ========================================
    // Interpolation Tests
    // ========================================

    #[test]
    fn test_interpolate_at_knot_points() {
        let xs = [0.0, 0.7, 1.5, 2.0, 3.2, 4.0];
        let ys = [1.0, -0.5, 2.0, 2.5, 0.0, 1.0];
        let interp = CubicSplineInterpolator::with_data(&xs, &ys).unwrap();

        for (&x, &y) in xs.iter().zip(&ys) {
            assert_relative_eq!(interp.interpolate(x).unwrap(), y, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_three_point_interior_second_derivative() {
        // Single interior equation: 2*(h0+h1)*M1 = 6*((y2-y1)/h1 - (y1-y0)/h0)
        // For (0,0),(1,1),(2,4): 4*M1 = 6*(3 - 1) -> M1 = 3
        let interp = CubicSplineInterpolator::with_data(&[0.0, 1.0, 2.0], &[0.0, 1.0, 4.0]).unwrap();
        assert_relative_eq!(
            interp.interpolate_second_derivative(0.5).unwrap(),
            1.5,
            epsilon = 1e-12
        );
        assert_relative_eq!(
            interp.interpolate_second_derivative(1.0).unwrap(),
            3.0,
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_natural_boundary_conditions() {
        let xs = [0.0, 1.0, 2.5, 3.0, 4.5];
        let ys = [0.0, 2.0, 1.0, -1.0, 0.5];
        let interp = CubicSplineInterpolator::with_data(&xs, &ys).unwrap();

        assert!(interp.interpolate_second_derivative(0.0).unwrap().abs() < 1e-10);
        assert!(interp.interpolate_second_derivative(4.5).unwrap().abs() < 1e-10);
    }

    #[test]
    fn test_continuity_at_breakpoints() {
        let xs = [0.0, 1.0, 2.5, 3.0, 4.5];
        let ys = [0.0, 2.0, 1.0, -1.0, 0.5];
        let interp = CubicSplineInterpolator::with_data(&xs, &ys).unwrap();
        let eps = 1e-7;

        for &x in &xs[1..xs.len() - 1] {
            let left = interp.interpolate(x - eps).unwrap();
            let right = interp.interpolate(x + eps).unwrap();
            assert!((left - right).abs() < 1e-5, "value jump at {}", x);

            let d_left = interp.interpolate_derivative(x - eps).unwrap();
            let d_right = interp.interpolate_derivative(x + eps).unwrap();
            assert!((d_left - d_right).abs() < 1e-5, "slope jump at {}", x);
        }
    }

    #[test]
    fn test_linear_data_gives_straight_line() {
        let interp =
            CubicSplineInterpolator::with_data(&[0.0, 1.0, 2.0, 3.0], &[1.0, 3.0, 5.0, 7.0])
                .unwrap();

        assert_relative_eq!(interp.interpolate(1.25).unwrap(), 3.5, epsilon = 1e-12);
        assert_relative_eq!(interp.interpolate_derivative(2.2).unwrap(), 2.0, epsilon = 1e-12);
        // Extrapolation continues the boundary cubic, here a line
        assert_relative_eq!(interp.interpolate(5.0).unwrap(), 11.0, epsilon = 1e-12);
    }

    #[test]
    fn test_close_to_smooth_function() {
        let xs: Vec<f64> = (0..=20).map(|i| i as f64 * 0.1 * std::f64::consts::PI).collect();
        let ys: Vec<f64> = xs.iter().map(|x| x.sin()).collect();
        let interp = CubicSplineInterpolator::with_data(&xs, &ys).unwrap();

        for &x in &[0.4, 1.1, 2.3, 3.7, 5.0] {
            assert!((interp.interpolate(x).unwrap() - x.sin()).abs() < 1e-3);
        }
    }

    #[test]
    fn test_polynomial_equation_summary() {
        let interp =
            CubicSplineInterpolator::with_data(&[0.0, 1.0, 2.0, 3.0], &[0.0, 1.0, 0.0, 1.0])
                .unwrap();
        assert_eq!(
            interp.polynomial_equation(),
            "Piecewise cubic spline with 3 segments (C² continuous, natural boundaries)"
        );
    }
}
