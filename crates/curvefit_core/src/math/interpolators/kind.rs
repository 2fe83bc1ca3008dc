//! Runtime selection of an interpolation method.

use super::{
    CubicSplineInterpolator, HermiteInterpolator, Interpolator, LagrangeInterpolator,
    LinearInterpolator, NewtonInterpolator,
};
use crate::types::InterpolationError;
use std::fmt;
use std::str::FromStr;

/// The five interpolation methods, selectable by name.
///
/// # Example
///
/// ```
/// use curvefit_core::math::interpolators::{Interpolator, InterpolatorKind};
///
/// let kind: InterpolatorKind = "cubic-spline".parse().unwrap();
/// let mut interp = kind.build();
/// interp.set_data(&[0.0, 1.0, 2.0], &[0.0, 1.0, 0.0]).unwrap();
/// assert_eq!(interp.name(), "Cubic Spline Interpolation");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum InterpolatorKind {
    /// Piecewise linear
    Linear,
    /// Lagrange polynomial
    Lagrange,
    /// Newton divided differences
    Newton,
    /// Natural cubic spline (default)
    #[default]
    CubicSpline,
    /// Piecewise cubic Hermite
    Hermite,
}

impl InterpolatorKind {
    /// Every method, in display order.
    pub const ALL: [InterpolatorKind; 5] = [
        InterpolatorKind::Linear,
        InterpolatorKind::Lagrange,
        InterpolatorKind::Newton,
        InterpolatorKind::CubicSpline,
        InterpolatorKind::Hermite,
    ];

    /// Create a fresh, unfitted interpolator of this kind.
    pub fn build(self) -> Box<dyn Interpolator<f64> + Send> {
        match self {
            Self::Linear => Box::new(LinearInterpolator::new()),
            Self::Lagrange => Box::new(LagrangeInterpolator::new()),
            Self::Newton => Box::new(NewtonInterpolator::new()),
            Self::CubicSpline => Box::new(CubicSplineInterpolator::new()),
            Self::Hermite => Box::new(HermiteInterpolator::new()),
        }
    }

    /// Minimum number of points this method accepts.
    pub fn min_points(self) -> usize {
        match self {
            Self::CubicSpline => 3,
            _ => 2,
        }
    }

    /// Canonical command-line name.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Linear => "linear",
            Self::Lagrange => "lagrange",
            Self::Newton => "newton",
            Self::CubicSpline => "cubic-spline",
            Self::Hermite => "hermite",
        }
    }
}

impl fmt::Display for InterpolatorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for InterpolatorKind {
    type Err = InterpolationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace(['_', ' '], "-").as_str() {
            "linear" => Ok(Self::Linear),
            "lagrange" => Ok(Self::Lagrange),
            "newton" => Ok(Self::Newton),
            "cubic-spline" | "spline" | "cubic" => Ok(Self::CubicSpline),
            "hermite" => Ok(Self::Hermite),
            other => Err(InterpolationError::invalid_input(format!(
                "unknown interpolation method '{}'. Supported: linear, lagrange, newton, cubic-spline, hermite",
                other
            ))),
        }
    }
}
