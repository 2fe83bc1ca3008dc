//! # curvefit_core: Numerical Foundation for curvefit
//!
//! ## Layer 1 (Foundation) Role
//!
//! curvefit_core is the bottom layer of the workspace, providing:
//! - Five interchangeable interpolators behind one trait (`math::interpolators`)
//! - A single-variable expression evaluator (`expression`)
//! - Uniform and Chebyshev sample generation (`sampling`)
//! - Error types: `InterpolationError`, `ExpressionError`, `SamplingError` (`types`)
//!
//! ## Minimal Dependencies
//!
//! Layer 1 has no dependencies on other curvefit crates:
//! - num-traits: Generic floating-point interpolators
//! - thiserror: Error derivation
//! - serde: Serialisation support (optional)
//!
//! ## Usage Examples
//!
//! ```rust
//! use curvefit_core::expression::Expression;
//! use curvefit_core::math::interpolators::{CubicSplineInterpolator, Interpolator};
//! use curvefit_core::sampling::SampleGenerator;
//!
//! let expr = Expression::parse("sin(x)").unwrap();
//! let samples = SampleGenerator::new(&expr).chebyshev(0.0, 3.0, 12).unwrap();
//!
//! let mut spline = CubicSplineInterpolator::new();
//! spline.set_data(&samples.xs, &samples.ys).unwrap();
//! let y = spline.interpolate(1.0).unwrap();
//! # assert!((y - 1.0_f64.sin()).abs() < 1e-2);
//! ```
//!
//! ## Feature Flags
//!
//! - `serde`: Enable serialisation for `Samples`, `InterpolatorKind`, and `InterpolationError`

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod expression;
pub mod math;
pub mod sampling;
pub mod types;
