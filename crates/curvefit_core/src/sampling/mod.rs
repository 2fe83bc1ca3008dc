//! Sample generation from an expression.
//!
//! [`SampleGenerator`] evaluates an [`Expression`] on either an evenly spaced
//! grid or Chebyshev nodes and returns the paired coordinates as
//! [`Samples`], sorted ascending by x and ready for
//! [`Interpolator::set_data`](crate::math::interpolators::Interpolator::set_data).

mod nodes;

pub use nodes::{chebyshev_nodes, uniform_grid};

use crate::expression::Expression;
use crate::types::SamplingError;
use std::fmt;
use std::str::FromStr;

/// How sample abscissae are placed on the interval.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum SpacingMode {
    /// Evenly spaced, both endpoints included
    #[default]
    Uniform,
    /// Chebyshev nodes of the first kind
    Chebyshev,
}

impl fmt::Display for SpacingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SpacingMode::Uniform => f.write_str("uniform"),
            SpacingMode::Chebyshev => f.write_str("chebyshev"),
        }
    }
}

impl FromStr for SpacingMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "uniform" => Ok(SpacingMode::Uniform),
            "chebyshev" => Ok(SpacingMode::Chebyshev),
            other => Err(format!(
                "unknown spacing '{}'. Supported: uniform, chebyshev",
                other
            )),
        }
    }
}

/// Paired sample coordinates, ascending in x.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Samples {
    /// Abscissae
    pub xs: Vec<f64>,
    /// Function values at `xs`
    pub ys: Vec<f64>,
}

impl Samples {
    /// Number of sample points.
    #[inline]
    pub fn len(&self) -> usize {
        self.xs.len()
    }

    /// Returns true if there are no samples.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.xs.is_empty()
    }

    /// Iterate over `(x, y)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.xs.iter().copied().zip(self.ys.iter().copied())
    }
}

/// Evaluates an expression at generated abscissae.
///
/// # Example
///
/// ```
/// use curvefit_core::expression::Expression;
/// use curvefit_core::sampling::SampleGenerator;
///
/// let expr = Expression::parse("x^2").unwrap();
/// let samples = SampleGenerator::new(&expr).uniform(0.0, 2.0, 3).unwrap();
/// assert_eq!(samples.ys, vec![0.0, 1.0, 4.0]);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct SampleGenerator<'a> {
    expression: &'a Expression,
}

impl<'a> SampleGenerator<'a> {
    /// Create a generator for `expression`.
    pub fn new(expression: &'a Expression) -> Self {
        Self { expression }
    }

    /// `n` evenly spaced samples over `[x_min, x_max]` (n ≥ 2).
    pub fn uniform(&self, x_min: f64, x_max: f64, n: usize) -> Result<Samples, SamplingError> {
        Ok(self.at(uniform_grid(x_min, x_max, n)?))
    }

    /// `n` samples at Chebyshev nodes of `[x_min, x_max]` (n ≥ 1).
    pub fn chebyshev(&self, x_min: f64, x_max: f64, n: usize) -> Result<Samples, SamplingError> {
        Ok(self.at(chebyshev_nodes(x_min, x_max, n)?))
    }

    /// Dispatch on `mode`.
    pub fn generate(
        &self,
        mode: SpacingMode,
        x_min: f64,
        x_max: f64,
        n: usize,
    ) -> Result<Samples, SamplingError> {
        match mode {
            SpacingMode::Uniform => self.uniform(x_min, x_max, n),
            SpacingMode::Chebyshev => self.chebyshev(x_min, x_max, n),
        }
    }

    fn at(&self, xs: Vec<f64>) -> Samples {
        let ys = self.expression.evaluate_many(&xs);
        Samples { xs, ys }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_uniform_samples_evaluate_expression() {
        let expr = Expression::parse("2*x + 1").unwrap();
        let samples = SampleGenerator::new(&expr).uniform(0.0, 1.0, 3).unwrap();

        assert_eq!(samples.xs, vec![0.0, 0.5, 1.0]);
        assert_eq!(samples.ys, vec![1.0, 2.0, 3.0]);
        assert_eq!(samples.len(), 3);
    }

    #[test]
    fn test_chebyshev_samples_sorted_pairs() {
        let expr = Expression::parse("sin(x)").unwrap();
        let samples = SampleGenerator::new(&expr).chebyshev(0.0, 3.0, 8).unwrap();

        assert!(samples.xs.windows(2).all(|w| w[0] < w[1]));
        for (x, y) in samples.iter() {
            assert_relative_eq!(y, x.sin(), epsilon = 1e-15);
        }
    }

    #[test]
    fn test_generate_dispatch() {
        let expr = Expression::parse("x").unwrap();
        let generator = SampleGenerator::new(&expr);

        assert_eq!(
            generator.generate(SpacingMode::Uniform, 0.0, 1.0, 4).unwrap(),
            generator.uniform(0.0, 1.0, 4).unwrap()
        );
        assert_eq!(
            generator.generate(SpacingMode::Chebyshev, 0.0, 1.0, 4).unwrap(),
            generator.chebyshev(0.0, 1.0, 4).unwrap()
        );
    }

    #[test]
    fn test_errors_propagate() {
        let expr = Expression::parse("x").unwrap();
        let generator = SampleGenerator::new(&expr);
        assert!(generator.uniform(1.0, 0.0, 5).is_err());
        assert!(generator.chebyshev(0.0, 1.0, 0).is_err());
    }

    #[test]
    fn test_spacing_mode_parse() {
        assert_eq!("Chebyshev".parse::<SpacingMode>().unwrap(), SpacingMode::Chebyshev);
        assert_eq!(SpacingMode::Uniform.to_string(), "uniform");
        assert!("random".parse::<SpacingMode>().is_err());
    }
}
