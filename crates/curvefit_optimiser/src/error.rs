//! Optimiser error types.

use curvefit_core::types::{InterpolationError, SamplingError};
use thiserror::Error;

/// Errors from the degree search.
///
/// Per-n fit failures are not errors: they are logged and the search moves
/// on. Only bad arguments or a search in which no n could be fitted at all
/// end the search.
///
/// # Examples
///
/// ```
/// use curvefit_optimiser::OptimiserError;
///
/// let err = OptimiserError::NoSuccessfulFit { min_n: 1, max_n: 2 };
/// assert_eq!(
///     format!("{}", err),
///     "No sample count in 1..=2 could be fitted"
/// );
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
pub enum OptimiserError {
    /// Invalid search arguments or configuration.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Every candidate sample count failed to fit.
    #[error("No sample count in {min_n}..={max_n} could be fitted")]
    NoSuccessfulFit {
        /// Smallest sample count tried
        min_n: usize,
        /// Largest sample count tried
        max_n: usize,
    },

    /// Wrapped interpolation error from a single trial.
    #[error("Interpolation error: {0}")]
    Interpolation(#[from] InterpolationError),

    /// Wrapped sampling error from a single trial.
    #[error("Sampling error: {0}")]
    Sampling(#[from] SamplingError),
}

impl OptimiserError {
    /// Create an `InvalidInput` error.
    pub fn invalid_input(message: impl Into<String>) -> Self {
        OptimiserError::InvalidInput(message.into())
    }
}
