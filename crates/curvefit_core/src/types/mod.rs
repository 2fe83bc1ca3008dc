//! Core error types.
//!
//! This module provides:
//! - `error`: Structured error types for interpolation, expression parsing, and sampling
//!
//! # Re-exports
//!
//! [`InterpolationError`], [`ExpressionError`], and [`SamplingError`] are
//! re-exported at this module level.

pub mod error;

pub use error::{ExpressionError, InterpolationError, SamplingError};
