//! Error types for the curvefit CLI.

use crate::config::ConfigError;
use curvefit_core::types::{ExpressionError, InterpolationError, SamplingError};
use curvefit_denoise::DenoiseError;
use curvefit_optimiser::OptimiserError;
use thiserror::Error;

/// CLI error type
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Input file does not exist
    #[error("File not found: {0}")]
    FileNotFound(String),

    /// Invalid command-line argument or input content
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV read/write error
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON serialisation error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Expression parse error
    #[error("Expression error: {0}")]
    Expression(#[from] ExpressionError),

    /// Sample generation error
    #[error("Sampling error: {0}")]
    Sampling(#[from] SamplingError),

    /// Interpolation error
    #[error("Interpolation error: {0}")]
    Interpolation(#[from] InterpolationError),

    /// Degree search error
    #[error("Optimiser error: {0}")]
    Optimiser(#[from] OptimiserError),

    /// Denoising error
    #[error("Denoise error: {0}")]
    Denoise(#[from] DenoiseError),
}

impl CliError {
    /// Create an invalid argument error
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }
}

/// Result alias for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;
