//! One-dimensional interpolation methods.
//!
//! ## Available Interpolators
//!
//! - [`LinearInterpolator`]: Piecewise linear interpolation between data points
//! - [`LagrangeInterpolator`]: Global polynomial in Lagrange form
//! - [`NewtonInterpolator`]: Global polynomial from divided differences
//! - [`CubicSplineInterpolator`]: Natural cubic spline with C² continuity
//! - [`HermiteInterpolator`]: Piecewise cubic Hermite with C¹ continuity
//!
//! [`InterpolatorKind`] selects one of these by name at runtime.
//!
//! ## Core Trait
//!
//! Every interpolator implements [`Interpolator`]:
//! - `set_data(xs, ys)`: validate, sort and fit; the previous fit survives a failure
//! - `interpolate(x)`: evaluate the fitted curve
//! - `domain()`: smallest and largest fitted abscissa
//!
//! Points are always stored sorted by x. Piecewise methods pick the segment
//! containing `x`, use the lower segment at an interior breakpoint, and
//! extend the boundary segments outside the data range.
//!
//! ## AD Compatibility
//!
//! All interpolators are generic over `T: num_traits::Float` and work with
//! `num_dual::Dual64` as well as `f64`.
//!
//! ## Example
//!
//! ```
//! use curvefit_core::math::interpolators::{Interpolator, LinearInterpolator};
//!
//! let xs = [0.0, 1.0, 2.0, 3.0];
//! let ys = [0.0, 1.0, 4.0, 9.0];
//!
//! let interp = LinearInterpolator::<f64>::with_data(&xs, &ys).unwrap();
//! assert_eq!(interp.domain().unwrap(), (0.0, 3.0));
//!
//! // Between y=1.0 and y=4.0
//! let y = interp.interpolate(1.5).unwrap();
//! assert!((y - 2.5).abs() < 1e-10);
//! ```

mod cubic_spline;
mod data;
mod equation;
mod hermite;
mod kind;
mod lagrange;
mod linear;
mod newton;
mod traits;

pub use cubic_spline::CubicSplineInterpolator;
pub use hermite::HermiteInterpolator;
pub use kind::InterpolatorKind;
pub use lagrange::LagrangeInterpolator;
pub use linear::LinearInterpolator;
pub use newton::NewtonInterpolator;
pub use traits::Interpolator;
