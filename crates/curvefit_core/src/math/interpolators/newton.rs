//! Newton divided-difference interpolation.

use super::data::sorted_points;
use super::equation::{format_newton_form, NOT_FITTED, PLACEHOLDER};
use super::Interpolator;
use crate::types::InterpolationError;
use num_traits::Float;

/// Global polynomial interpolator in Newton form.
///
/// Fitting builds the divided-difference table in O(n²) and keeps its top
/// diagonal as coefficients:
///
/// ```text
/// P(x) = c₀ + c₁(x - x₀) + c₂(x - x₀)(x - x₁) + ...
/// ```
///
/// Evaluation uses the nested (Horner-style) form in O(n). The polynomial
/// is the same one [`LagrangeInterpolator`](super::LagrangeInterpolator)
/// evaluates.
#[derive(Debug, Clone)]
pub struct NewtonInterpolator<T: Float> {
    xs: Vec<T>,
    /// Top diagonal of the divided-difference table
    coefficients: Vec<T>,
}

impl<T: Float> Default for NewtonInterpolator<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Float> NewtonInterpolator<T> {
    /// Create an empty, unfitted interpolator.
    pub fn new() -> Self {
        Self {
            xs: Vec::new(),
            coefficients: Vec::new(),
        }
    }

    /// Create an interpolator fitted to the given points.
    pub fn with_data(xs: &[T], ys: &[T]) -> Result<Self, InterpolationError> {
        let mut interp = Self::new();
        interp.set_data(xs, ys)?;
        Ok(interp)
    }

    /// Divided-difference coefficients `f[x₀], f[x₀,x₁], ...`.
    #[inline]
    pub fn coefficients(&self) -> &[T] {
        &self.coefficients
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

    /// In-place divided differences: after pass `j`, `c[i]` holds
    /// `f[x_{i-j}, ..., x_i]` for every `i >= j`.
    fn divided_differences(xs: &[T], ys: &[T]) -> Vec<T> {
        let n = xs.len();
        let mut c = ys.to_vec();
        for j in 1..n {
            for i in (j..n).rev() {
                c[i] = (c[i] - c[i - 1]) / (xs[i] - xs[i - j]);
            }
        }
        c
    }
}

impl<T: Float> Interpolator<T> for NewtonInterpolator<T> {
    fn name(&self) -> &'static str {
        "Newton Interpolation"
    }

    fn description(&self) -> &'static str {
        "Polynomial interpolation using divided differences, evaluated in nested form. Same curve as Lagrange with cheaper evaluation."
    }

    fn min_points(&self) -> usize {
        2
    }

    fn set_data(&mut self, xs: &[T], ys: &[T]) -> Result<(), InterpolationError> {
        let (xs, ys) = sorted_points(xs, ys, self.min_points())?;
        self.coefficients = Self::divided_differences(&xs, &ys);
        self.xs = xs;
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

    /// Nested evaluation:
    ///
    /// ```text
    /// P(x) = c₀ + (x - x₀)[c₁ + (x - x₁)[c₂ + ... ]]
    /// ```
    fn interpolate(&self, x: T) -> Result<T, InterpolationError> {
        let n = self.coefficients.len();
        if n == 0 {
            return Err(InterpolationError::NotFitted);
        }

        let mut result = self.coefficients[n - 1];
        for i in (0..n - 1).rev() {
            result = result * (x - self.xs[i]) + self.coefficients[i];
        }
        Ok(result)
    }

    fn polynomial_equation(&self) -> String {
        if !self.is_fitted() {
            return NOT_FITTED.to_string();
        }

        let coefficients: Option<Vec<f64>> = self.coefficients.iter().map(|c| c.to_f64()).collect();
        let nodes: Option<Vec<f64>> = self.xs.iter().map(|x| x.to_f64()).collect();
        match (coefficients, nodes) {
            (Some(c), Some(x)) => format_newton_form(&c, &x),
            _ => PLACEHOLDER.to_string(),
        }
    }
}
