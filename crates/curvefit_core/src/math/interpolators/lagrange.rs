//! Lagrange polynomial interpolation.

use super::data::sorted_points;
use super::equation::{format_power_form, NOT_FITTED, PLACEHOLDER};
use super::Interpolator;
use crate::types::InterpolationError;
use num_traits::Float;

/// Above this many points the equation string is replaced by a summary.
const MAX_DISPLAY_POINTS: usize = 8;

/// Global polynomial interpolator in Lagrange form.
///
/// No fitting work is done beyond sorting; every evaluation sums the
/// product-form basis polynomials in O(n²):
///
/// ```text
/// P(x) = Σ yᵢ · Π_{j≠i} (x - xⱼ) / (xᵢ - xⱼ)
/// ```
///
/// Outside the data range the same polynomial is evaluated, so
/// extrapolation grows quickly for high degrees.
///
/// # Example
///
/// ```
/// use curvefit_core::math::interpolators::{Interpolator, LagrangeInterpolator};
///
/// let interp = LagrangeInterpolator::<f64>::with_data(&[0.0, 1.0, 2.0], &[1.0, 2.0, 5.0]).unwrap();
/// // The unique quadratic through the points is x² + 1
/// assert!((interp.interpolate(3.0).unwrap() - 10.0).abs() < 1e-10);
/// ```
#[derive(Debug, Clone)]
pub struct LagrangeInterpolator<T: Float> {
    xs: Vec<T>,
    ys: Vec<T>,
}

impl<T: Float> Default for LagrangeInterpolator<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Float> LagrangeInterpolator<T> {
    /// Create an empty, unfitted interpolator.
    pub fn new() -> Self {
        Self {
            xs: Vec::new(),
            ys: Vec::new(),
        }
    }

    /// Create an interpolator fitted to the given points.
    pub fn with_data(xs: &[T], ys: &[T]) -> Result<Self, InterpolationError> {
        let mut interp = Self::new();
        interp.set_data(xs, ys)?;
        Ok(interp)
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

    /// Expand `Σ yᵢ Lᵢ(x)` into power-basis coefficients, lowest degree first.
    ///
    /// Each basis numerator `Π (x - xⱼ)` is multiplied out one factor at a
    /// time; cancellation makes this far less accurate than `interpolate`
    /// for more than a handful of points.
    fn power_coefficients(&self) -> Option<Vec<f64>> {
        let xs: Vec<f64> = self.xs.iter().map(|x| x.to_f64()).collect::<Option<_>>()?;
        let ys: Vec<f64> = self.ys.iter().map(|y| y.to_f64()).collect::<Option<_>>()?;
        let n = xs.len();

        let mut coefficients = vec![0.0; n];
        for i in 0..n {
            let mut basis = vec![0.0; n];
            basis[0] = 1.0;
            let mut degree = 0;
            let mut denominator = 1.0;

            for j in (0..n).filter(|&j| j != i) {
                // basis *= (x - xs[j])
                let mut next = vec![0.0; n];
                for k in 0..=degree {
                    next[k + 1] += basis[k];
                    next[k] -= basis[k] * xs[j];
                }
                basis = next;
                degree += 1;
                denominator *= xs[i] - xs[j];
            }

            for (c, b) in coefficients.iter_mut().zip(&basis) {
                *c += ys[i] * b / denominator;
            }
        }

        Some(coefficients)
    }
}

impl<T: Float> Interpolator<T> for LagrangeInterpolator<T> {
    fn name(&self) -> &'static str {
        "Lagrange Interpolation"
    }

    fn description(&self) -> &'static str {
        "Classical polynomial interpolation using Lagrange basis polynomials. Exact fit through all points; best for small datasets."
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

    fn domain(&self) -> Result<(T, T), InterpolationError> {
        match (self.xs.first(), self.xs.last()) {
            (Some(&lo), Some(&hi)) => Ok((lo, hi)),
            _ => Err(InterpolationError::NotFitted),
        }
    }

    fn interpolate(&self, x: T) -> Result<T, InterpolationError> {
        if !self.is_fitted() {
            return Err(InterpolationError::NotFitted);
        }

        let mut result = T::zero();
        for (i, (&xi, &yi)) in self.xs.iter().zip(&self.ys).enumerate() {
            let mut term = yi;
            for (j, &xj) in self.xs.iter().enumerate() {
                if j != i {
                    term = term * (x - xj) / (xi - xj);
                }
            }
            result = result + term;
        }

        Ok(result)
    }

    fn polynomial_equation(&self) -> String {
        if !self.is_fitted() {
            return NOT_FITTED.to_string();
        }
        if self.xs.len() > MAX_DISPLAY_POINTS {
            return format!(
                "Polynomial of degree {} (too complex to display)",
                self.xs.len() - 1
            );
        }

        match self.power_coefficients() {
            Some(coefficients) => format_power_form(&coefficients),
            None => PLACEHOLDER.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unfitted() {
        let interp: LagrangeInterpolator<f64> = LagrangeInterpolator::new();
        assert_eq!(interp.interpolate(0.0), Err(InterpolationError::NotFitted));
        assert_eq!(interp.polynomial_equation(), "No data points set");
    }

    #[test]
    fn test_minimum_two_points() {
        assert!(LagrangeInterpolator::with_data(&[0.0, 1.0], &[0.0, 1.0]).is_ok());
        assert!(matches!(
            LagrangeInterpolator::with_data(&[0.0], &[0.0]),
            Err(InterpolationError::InsufficientData { got: 1, need: 2 })
        ));
    }

    #[test]
    fn test_duplicate_x_rejected() {
        let result = LagrangeInterpolator::with_data(&[0.0, 2.0, 0.0], &[1.0, 2.0, 3.0]);
        assert_eq!(result.unwrap_err(), InterpolationError::DuplicateX { x: 0.0 });
    }

    #[test]
    fn test_reproduces_knots() {
        let xs = [-1.0, 0.5, 2.0, 3.0];
        let ys = [2.0, -1.0, 0.5, 4.0];
        let interp = LagrangeInterpolator::with_data(&xs, &ys).unwrap();

        for (&x, &y) in xs.iter().zip(&ys) {
            assert!((interp.interpolate(x).unwrap() - y).abs() < 1e-9);
        }
    }

    #[test]
    fn test_exact_for_cubic() {
        let f = |x: f64| x * x * x - 2.0 * x * x + x - 3.0;
        let xs = [-2.0, -1.0, 1.0, 2.5];
        let ys: Vec<f64> = xs.iter().map(|&x| f(x)).collect();
        let interp = LagrangeInterpolator::with_data(&xs, &ys).unwrap();

        for &x in &[-1.5, 0.0, 0.7, 2.0, 4.0] {
            assert!((interp.interpolate(x).unwrap() - f(x)).abs() < 1e-9);
        }
    }

    #[test]
    fn test_equation_for_quadratic() {
        // y = x^2 + 1
        let interp = LagrangeInterpolator::with_data(&[0.0, 1.0, 2.0], &[1.0, 2.0, 5.0]).unwrap();
        assert_eq!(interp.polynomial_equation(), "P(x) = x^2 + 1.0000");
    }

    #[test]
    fn test_equation_summary_above_limit() {
        let xs: Vec<f64> = (0..10).map(f64::from).collect();
        let ys: Vec<f64> = xs.iter().map(|x| x.sin()).collect();
        let interp = LagrangeInterpolator::with_data(&xs, &ys).unwrap();

        assert_eq!(
            interp.polynomial_equation(),
            "Polynomial of degree 9 (too complex to display)"
        );
    }
}
