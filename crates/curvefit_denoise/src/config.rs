//! Denoiser configuration.

use crate::DenoiseError;

/// Tuning parameters for [`Denoiser`](crate::Denoiser).
///
/// # Examples
///
/// ```
/// use curvefit_denoise::DenoiseConfig;
///
/// let config = DenoiseConfig::default();
/// assert_eq!(config.threshold_multiplier, 3.0);
/// assert_eq!(config.window_size, 50);
///
/// let config = DenoiseConfig::new()
///     .with_threshold_multiplier(2.5)
///     .with_window_size(64);
/// assert!(config.validate().is_ok());
/// assert_eq!(config.filter_size(), 33);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct DenoiseConfig {
    /// Outlier threshold in standard deviations: a smoothed sample `s` is
    /// flagged when `|s| > |mean| + k·σ`.
    ///
    /// Default: 3.0
    pub threshold_multiplier: f64,

    /// Length of each repair window in samples.
    ///
    /// Default: 50
    pub window_size: usize,

    /// Clean samples are gathered this far on either side of a window.
    ///
    /// Default: 100
    pub neighbourhood: usize,

    /// Number of moving-average passes.
    ///
    /// Default: 3
    pub smoothing_passes: usize,

    /// Lower bound on the moving-average width.
    ///
    /// Default: 15
    pub min_filter_size: usize,

    /// Fewest clean samples needed to fit a window instead of using the
    /// median fallback.
    ///
    /// Default: 3
    pub min_clean_points: usize,
}

impl Default for DenoiseConfig {
    fn default() -> Self {
        Self {
            threshold_multiplier: 3.0,
            window_size: 50,
            neighbourhood: 100,
            smoothing_passes: 3,
            min_filter_size: 15,
            min_clean_points: 3,
        }
    }
}

impl DenoiseConfig {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the outlier threshold multiplier.
    pub fn with_threshold_multiplier(mut self, k: f64) -> Self {
        self.threshold_multiplier = k;
        self
    }

    /// Set the repair window length.
    pub fn with_window_size(mut self, window_size: usize) -> Self {
        self.window_size = window_size;
        self
    }

    /// Set the clean-sample neighbourhood.
    pub fn with_neighbourhood(mut self, neighbourhood: usize) -> Self {
        self.neighbourhood = neighbourhood;
        self
    }

    /// Set the number of smoothing passes.
    pub fn with_smoothing_passes(mut self, passes: usize) -> Self {
        self.smoothing_passes = passes;
        self
    }

    /// Set the minimum moving-average width.
    pub fn with_min_filter_size(mut self, size: usize) -> Self {
        self.min_filter_size = size;
        self
    }

    /// Set the minimum number of clean samples per fit.
    pub fn with_min_clean_points(mut self, points: usize) -> Self {
        self.min_clean_points = points;
        self
    }

    /// Moving-average width: `max(min_filter_size, window_size / 2)`,
    /// bumped to the next odd number.
    pub fn filter_size(&self) -> usize {
        let size = self.min_filter_size.max(self.window_size / 2);
        if size % 2 == 0 {
            size + 1
        } else {
            size
        }
    }

    /// Check every field, reporting all problems at once.
    pub fn validate(&self) -> Result<(), DenoiseError> {
        let mut errors = Vec::new();

        if !self.threshold_multiplier.is_finite() || self.threshold_multiplier < 0.0 {
            errors.push(format!(
                "threshold_multiplier must be finite and non-negative, got {}",
                self.threshold_multiplier
            ));
        }
        if self.window_size == 0 {
            errors.push("window_size must be at least 1".to_string());
        }
        if self.min_filter_size == 0 {
            errors.push("min_filter_size must be at least 1".to_string());
        }
        if self.min_clean_points == 0 {
            errors.push("min_clean_points must be at least 1".to_string());
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(DenoiseError::InvalidConfig(errors.join("; ")))
        }
    }
}
