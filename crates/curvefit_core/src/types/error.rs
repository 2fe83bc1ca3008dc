//! Error types for structured error handling.
//!
//! This module provides:
//! - `InterpolationError`: Errors from fitting and evaluating interpolators
//! - `ExpressionError`: Errors from tokenising and parsing math expressions
//! - `SamplingError`: Errors from uniform and Chebyshev sample generation

use thiserror::Error;

/// Interpolation-related errors.
///
/// Covers the two failure categories of an interpolator:
/// invalid fit data (checked by `set_data`) and evaluation
/// before any data has been fitted.
///
/// # Variants
/// - `InsufficientData`: Fewer points than the variant needs
/// - `LengthMismatch`: xs and ys differ in length
/// - `DuplicateX`: Two points share an x-coordinate
/// - `InvalidInput`: Any other invalid argument (non-finite data, bad range)
/// - `NotFitted`: Evaluation requested before `set_data` succeeded
///
/// # Examples
/// ```
/// use curvefit_core::types::InterpolationError;
///
/// let err = InterpolationError::InsufficientData { got: 1, need: 2 };
/// assert!(err.is_invalid_input());
/// assert_eq!(
///     format!("{}", err),
///     "Insufficient data points: got 1, need at least 2"
/// );
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum InterpolationError {
    /// Insufficient data points for the interpolation variant.
    #[error("Insufficient data points: got {got}, need at least {need}")]
    InsufficientData {
        /// Number of points provided
        got: usize,
        /// Minimum number of points required
        need: usize,
    },

    /// x and y arrays have different lengths.
    #[error("xs and ys must have same length: got {xs} and {ys}")]
    LengthMismatch {
        /// Length of the x array
        xs: usize,
        /// Length of the y array
        ys: usize,
    },

    /// Two data points share the same x-coordinate.
    #[error("Duplicate x value {x}: x values must be unique")]
    DuplicateX {
        /// The repeated x-coordinate
        x: f64,
    },

    /// Invalid input data or parameters.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Evaluation requested before data was fitted.
    #[error("No data points set: call set_data before evaluating")]
    NotFitted,
}

impl InterpolationError {
    /// Create a general invalid input error.
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    /// True for every fit-time data problem.
    pub fn is_invalid_input(&self) -> bool {
        !self.is_state_error()
    }

    /// True when the interpolator was used before being fitted.
    pub fn is_state_error(&self) -> bool {
        matches!(self, Self::NotFitted)
    }
}

/// Expression parsing errors.
///
/// Every variant carries the character position (0-based) where the
/// problem was detected so callers can point at the offending input.
///
/// # Examples
/// ```
/// use curvefit_core::types::ExpressionError;
///
/// let err = ExpressionError::UnmatchedBracket { bracket: '(', position: 3 };
/// assert_eq!(format!("{}", err), "Unmatched bracket '(' at position 3");
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ExpressionError {
    /// The expression contains no tokens.
    #[error("Empty expression")]
    Empty,

    /// An opening bracket without a partner, or a stray closing bracket.
    #[error("Unmatched bracket '{bracket}' at position {position}")]
    UnmatchedBracket {
        /// The bracket character, `(` or `)`
        bracket: char,
        /// Position of the bracket
        position: usize,
    },

    /// Unrecognised character or identifier.
    #[error("Unknown token '{token}' at position {position}")]
    UnknownToken {
        /// The unrecognised text
        token: String,
        /// Position where it starts
        position: usize,
    },

    /// A numeric literal that does not parse as a number.
    #[error("Malformed number '{literal}' at position {position}")]
    MalformedNumber {
        /// The literal text
        literal: String,
        /// Position where it starts
        position: usize,
    },

    /// A valid token in a place the grammar does not allow.
    #[error("Unexpected token '{token}' at position {position}")]
    UnexpectedToken {
        /// The token text
        token: String,
        /// Position where it starts
        position: usize,
    },

    /// A function name not followed by a bracketed argument.
    #[error("Function '{function}' at position {position} must be followed by '('")]
    MissingArgument {
        /// The function name
        function: String,
        /// Position of the function name
        position: usize,
    },

    /// Input ended while an operand was still expected.
    #[error("Unexpected end of expression")]
    UnexpectedEnd,

    /// A variable name that collides with a function or constant.
    #[error("'{name}' is reserved and cannot be used as the variable")]
    ReservedName {
        /// The rejected name
        name: String,
    },
}

/// Sample generation errors.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SamplingError {
    /// The interval is empty, reversed, or not finite.
    #[error("Invalid sampling range [{min}, {max}]: bounds must be finite with min < max")]
    InvalidRange {
        /// Lower bound
        min: f64,
        /// Upper bound
        max: f64,
    },

    /// Too few samples requested for the spacing mode.
    #[error("Too few samples: got {got}, need at least {need}")]
    TooFewSamples {
        /// Number of samples requested
        got: usize,
        /// Minimum number required
        need: usize,
    },
}
