//! Degree search configuration.

use crate::OptimiserError;

/// Configuration for [`DegreeOptimiser`](super::DegreeOptimiser).
///
/// # Examples
///
/// ```
/// use curvefit_optimiser::DegreeSearchConfig;
///
/// let config = DegreeSearchConfig::default();
/// assert_eq!(config.test_points, 1000);
///
/// let config = DegreeSearchConfig::new().with_test_points(200);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DegreeSearchConfig {
    /// Number of evenly spaced points, endpoints included, at which the
    /// fitted curve is compared with the expression.
    ///
    /// Default: 1000
    pub test_points: usize,
}

impl Default for DegreeSearchConfig {
    fn default() -> Self {
        Self { test_points: 1000 }
    }
}

impl DegreeSearchConfig {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the number of test points.
    pub fn with_test_points(mut self, test_points: usize) -> Self {
        self.test_points = test_points;
        self
    }

    /// Check the configuration.
    pub fn validate(&self) -> Result<(), OptimiserError> {
        if self.test_points < 2 {
            return Err(OptimiserError::invalid_input(format!(
                "test_points must be at least 2, got {}",
                self.test_points
            )));
        }
        Ok(())
    }
}
