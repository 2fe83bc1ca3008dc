//! # curvefit_denoise
//!
//! Removes impulsive noise (clicks, spikes, dropouts) from a sampled signal
//! by re-fitting an interpolation curve through the clean samples around
//! each damaged region.
//!
//! ## Architecture Position
//!
//! Layer 2 of the workspace. Depends only on `curvefit_core` (L1) for the
//! interpolators.
//!
//! ## Pipeline
//!
//! 1. [`smoothing`]: repeated centred moving average
//! 2. [`outliers`]: flag samples beyond `|mean| + k·σ` of the smoothed signal
//! 3. repair: per fixed window, fit the clean neighbourhood and evaluate at
//!    the flagged indices, falling back to a local median
//!
//! [`Denoiser`] runs all three. [`SampleBuffer`] carries sample-rate and
//! channel metadata and converts interleaved audio to and from mono.
//! [`SyntheticSignal`] builds reproducible test signals.
//!
//! ## Example
//!
//! ```rust
//! use curvefit_core::math::interpolators::CubicSplineInterpolator;
//! use curvefit_denoise::{Denoiser, SyntheticSignal};
//!
//! let mut signal = SyntheticSignal::new(7, 8000).unwrap();
//! let mut samples = signal.sine(100.0, 0.5, 4000);
//! SyntheticSignal::with_spikes(&mut samples, &[1000, 2500], 100.0);
//!
//! let mut spline = CubicSplineInterpolator::<f64>::new();
//! let outcome = Denoiser::default().repair(&samples, &mut spline).unwrap();
//!
//! assert_eq!(outcome.samples.len(), samples.len());
//! assert!(outcome.outlier_count > 0);
//! assert!(outcome.samples[1000].abs() < samples[1000].abs());
//! ```
//!
//! ## Feature Flags
//!
//! - `parallel` (default): repair windows on the rayon thread pool in
//!   [`Denoiser::repair_parallel`]
//! - `serde`: serialisation for [`DenoiseConfig`] and the statistics types

#![deny(missing_docs)]

pub mod buffer;
pub mod config;
pub mod denoiser;
pub mod outliers;
pub mod smoothing;
pub mod synthetic;

mod error;
mod repair;

pub use buffer::SampleBuffer;
pub use config::DenoiseConfig;
pub use denoiser::{DenoiseOutcome, DenoiseProgress, Denoiser};
pub use error::DenoiseError;
pub use outliers::SignalStats;
pub use synthetic::SyntheticSignal;
