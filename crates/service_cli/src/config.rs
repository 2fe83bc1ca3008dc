//! CLI configuration management.
//!
//! Loads `curvefit.toml` (all sections optional) and applies `CURVEFIT_*`
//! environment variable overrides.
//!
//! ```toml
//! log_level = "info"
//!
//! [denoise]
//! threshold = 3.0
//! window = 50
//! method = "cubic-spline"
//! parallel = true
//!
//! [optimiser]
//! test_points = 1000
//! method = "newton"
//!
//! [output]
//! format = "table"
//! ```

use crate::output::OutputFormat;
use curvefit_core::math::interpolators::InterpolatorKind;
use curvefit_denoise::DenoiseConfig;
use curvefit_optimiser::DegreeSearchConfig;
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

const VALID_LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Denoiser defaults
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DenoiseSection {
    /// Outlier threshold multiplier
    pub threshold: f64,
    /// Repair window size in samples
    pub window: usize,
    /// Interpolation method used for repair
    pub method: InterpolatorKind,
    /// Fit windows on the rayon pool
    pub parallel: bool,
}

impl Default for DenoiseSection {
    fn default() -> Self {
        let config = DenoiseConfig::default();
        Self {
            threshold: config.threshold_multiplier,
            window: config.window_size,
            method: InterpolatorKind::CubicSpline,
            parallel: true,
        }
    }
}

impl DenoiseSection {
    /// Library configuration for these settings.
    pub fn to_config(&self) -> DenoiseConfig {
        DenoiseConfig::default()
            .with_threshold_multiplier(self.threshold)
            .with_window_size(self.window)
    }
}

/// Degree search defaults
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OptimiserSection {
    /// Error-measurement grid size
    pub test_points: usize,
    /// Interpolation method searched
    pub method: InterpolatorKind,
}

impl Default for OptimiserSection {
    fn default() -> Self {
        Self {
            test_points: DegreeSearchConfig::default().test_points,
            method: InterpolatorKind::CubicSpline,
        }
    }
}

/// Output defaults
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputSection {
    /// Result format on stdout
    pub format: OutputFormat,
}

/// CLI configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    /// Log level when `RUST_LOG` is unset
    pub log_level: String,
    /// Denoiser defaults
    pub denoise: DenoiseSection,
    /// Degree search defaults
    pub optimiser: OptimiserSection,
    /// Output defaults
    pub output: OutputSection,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            denoise: DenoiseSection::default(),
            optimiser: OptimiserSection::default(),
            output: OutputSection::default(),
        }
    }
}

impl CliConfig {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::Io(format!("{}: {}", path.display(), e)))?;

        toml::from_str(&content).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Load configuration from `path`, or defaults if the file does not exist
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Apply `CURVEFIT_*` environment variable overrides
    pub fn with_env_override(self) -> Self {
        self.with_overrides(|key| std::env::var(key).ok())
    }

    /// Apply overrides from `lookup`, keyed by environment variable name.
    ///
    /// Values that fail to parse are ignored.
    pub fn with_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(level) = lookup("CURVEFIT_LOG_LEVEL") {
            self.log_level = level;
        }

        if let Some(Ok(threshold)) = lookup("CURVEFIT_DENOISE_THRESHOLD").map(|v| v.parse()) {
            self.denoise.threshold = threshold;
        }
        if let Some(Ok(window)) = lookup("CURVEFIT_DENOISE_WINDOW").map(|v| v.parse()) {
            self.denoise.window = window;
        }
        if let Some(Ok(method)) = lookup("CURVEFIT_DENOISE_METHOD").map(|v| v.parse()) {
            self.denoise.method = method;
        }
        if let Some(Ok(parallel)) = lookup("CURVEFIT_DENOISE_PARALLEL").map(|v| v.parse()) {
            self.denoise.parallel = parallel;
        }

        if let Some(Ok(points)) = lookup("CURVEFIT_TEST_POINTS").map(|v| v.parse()) {
            self.optimiser.test_points = points;
        }
        if let Some(Ok(method)) = lookup("CURVEFIT_OPTIMISER_METHOD").map(|v| v.parse()) {
            self.optimiser.method = method;
        }

        if let Some(Ok(format)) = lookup("CURVEFIT_OUTPUT_FORMAT").map(|v| v.parse()) {
            self.output.format = format;
        }

        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut errors = Vec::new();

        if !VALID_LOG_LEVELS.contains(&self.log_level.to_lowercase().as_str()) {
            errors.push(format!(
                "Invalid log_level '{}'. Valid values: {:?}",
                self.log_level, VALID_LOG_LEVELS
            ));
        }

        if let Err(e) = self.denoise.to_config().validate() {
            errors.push(format!("[denoise] {}", e));
        }

        let search = DegreeSearchConfig::new().with_test_points(self.optimiser.test_points);
        if let Err(e) = search.validate() {
            errors.push(format!("[optimiser] {}", e));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(ConfigError::Validation(errors))
        }
    }

    /// Load from file (or defaults) with environment overrides and validate
    pub fn load_with_env_and_validate(path: &Path) -> Result<Self, ConfigError> {
        let config = Self::load_or_default(path)?.with_env_override();
        config.validate()?;
        Ok(config)
    }
}

/// Configuration error type
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    /// IO error reading config file
    #[error("IO error: {0}")]
    Io(String),
    /// Parse error in config file
    #[error("Parse error: {0}")]
    Parse(String),
    /// Validation errors
    #[error("Validation errors: {}", .0.join("; "))]
    Validation(Vec<String>),
}
