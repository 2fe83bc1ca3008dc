//! Denoiser error types.

use thiserror::Error;

/// Errors from the denoising pipeline and its buffers.
///
/// Per-window interpolation failures are not errors; the denoiser recovers
/// from them with its median fallback.
///
/// # Examples
///
/// ```
/// use curvefit_denoise::DenoiseError;
///
/// let err = DenoiseError::NonFiniteSample { index: 12 };
/// assert_eq!(format!("{}", err), "Sample 12 is not finite");
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DenoiseError {
    /// No samples to process.
    #[error("Sample buffer is empty")]
    EmptyBuffer,

    /// A configuration value is out of range; lists every problem found.
    #[error("Invalid denoise configuration: {0}")]
    InvalidConfig(String),

    /// Buffer metadata inconsistent with its samples.
    #[error("Invalid sample buffer: {0}")]
    InvalidBuffer(String),

    /// A NaN or infinite sample, which would poison the statistics.
    #[error("Sample {index} is not finite")]
    NonFiniteSample {
        /// Position of the first non-finite sample
        index: usize,
    },
}

impl DenoiseError {
    /// Create an `InvalidConfig` error.
    pub fn invalid_config(message: impl Into<String>) -> Self {
        DenoiseError::InvalidConfig(message.into())
    }
}
