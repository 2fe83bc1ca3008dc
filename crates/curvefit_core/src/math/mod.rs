//! Numerical methods.
//!
//! - `interpolators`: The five interchangeable 1D interpolation strategies

pub mod interpolators;
