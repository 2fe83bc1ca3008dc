//! # curvefit_optimiser
//!
//! Searches for the smallest number of Chebyshev samples with which an
//! interpolation method reproduces a reference expression to a target
//! accuracy.
//!
//! ## Architecture Position
//!
//! Layer 2 of the workspace. Depends only on `curvefit_core` (L1).
//!
//! ## Modules
//!
//! - `degree`: [`DegreeOptimiser`], its configuration and result types, and
//!   the [`max_abs_error`] metric
//!
//! ## Example
//!
//! ```rust
//! use curvefit_core::expression::Expression;
//! use curvefit_core::math::interpolators::InterpolatorKind;
//! use curvefit_optimiser::DegreeOptimiser;
//!
//! let expr = Expression::parse("sin(x)").unwrap();
//! let optimiser =
//!     DegreeOptimiser::new(expr, 0.0, std::f64::consts::PI, InterpolatorKind::Newton).unwrap();
//!
//! let result = optimiser.find_minimum_degree(1e-4, 2, 20).unwrap();
//! assert!(result.target_met);
//! assert!(result.error <= 1e-4);
//! ```

#![deny(missing_docs)]

pub mod degree;

mod error;

pub use degree::{
    error_profile, max_abs_error, DegreeAnalysisRow, DegreeOptimiser, DegreeSearchConfig,
    DegreeSearchResult, DegreeTrial, ErrorProfile,
};
pub use error::OptimiserError;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::degree::*;
    pub use crate::OptimiserError;
}
