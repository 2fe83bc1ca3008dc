//! The degree search itself.

use super::config::DegreeSearchConfig;
use super::metrics::{error_profile, ErrorProfile};
use super::result::{DegreeAnalysisRow, DegreeSearchResult, DegreeTrial};
use crate::OptimiserError;
use curvefit_core::expression::Expression;
use curvefit_core::math::interpolators::InterpolatorKind;
use curvefit_core::sampling::SampleGenerator;
use tracing::{debug, info, warn};

/// Finds the smallest number of Chebyshev samples for which an
/// interpolation method matches an expression to a given accuracy.
///
/// Each trial samples the expression at `n` Chebyshev nodes, fits a fresh
/// interpolator of the configured kind, and measures the maximum absolute
/// error on [`DegreeSearchConfig::test_points`] evenly spaced points.
///
/// # Example
///
/// ```
/// use curvefit_core::expression::Expression;
/// use curvefit_core::math::interpolators::InterpolatorKind;
/// use curvefit_optimiser::{DegreeOptimiser, DegreeSearchConfig};
///
/// let expr = Expression::parse("exp(x)").unwrap();
/// let optimiser = DegreeOptimiser::new(expr, 0.0, 1.0, InterpolatorKind::Lagrange)
///     .unwrap()
///     .with_config(DegreeSearchConfig::new().with_test_points(200));
///
/// let rows = optimiser.analyse_degree_range(2, 6).unwrap();
/// assert_eq!(rows.len(), 5);
/// assert!(rows[4].max_error < rows[0].max_error);
/// ```
#[derive(Debug, Clone)]
pub struct DegreeOptimiser {
    expression: Expression,
    x_min: f64,
    x_max: f64,
    kind: InterpolatorKind,
    config: DegreeSearchConfig,
}

impl DegreeOptimiser {
    /// Create an optimiser over `[x_min, x_max]` with the default configuration.
    ///
    /// # Errors
    ///
    /// `InvalidInput` unless both bounds are finite and `x_min < x_max`.
    pub fn new(
        expression: Expression,
        x_min: f64,
        x_max: f64,
        kind: InterpolatorKind,
    ) -> Result<Self, OptimiserError> {
        if !x_min.is_finite() || !x_max.is_finite() || x_min >= x_max {
            return Err(OptimiserError::invalid_input(format!(
                "interval [{}, {}] must be finite with x_min < x_max",
                x_min, x_max
            )));
        }
        Ok(Self {
            expression,
            x_min,
            x_max,
            kind,
            config: DegreeSearchConfig::default(),
        })
    }

    /// Replace the configuration.
    pub fn with_config(mut self, config: DegreeSearchConfig) -> Self {
        self.config = config;
        self
    }

    /// The interpolation method being tuned.
    pub fn kind(&self) -> InterpolatorKind {
        self.kind
    }

    /// The search configuration.
    pub fn config(&self) -> &DegreeSearchConfig {
        &self.config
    }

    /// Fit with `n` Chebyshev samples and measure the error.
    pub fn evaluate_degree(&self, n: usize) -> Result<ErrorProfile, OptimiserError> {
        let samples =
            SampleGenerator::new(&self.expression).chebyshev(self.x_min, self.x_max, n)?;

        let mut interp = self.kind.build();
        interp.set_data(&samples.xs, &samples.ys)?;

        let profile = error_profile(
            &*interp,
            &self.expression,
            self.x_min,
            self.x_max,
            self.config.test_points,
        )?;
        Ok(profile)
    }

    /// Smallest `n` in `min_n..=max_n` whose maximum error is at most
    /// `target_error`.
    ///
    /// Sample counts that fail to fit are logged and skipped. If the target
    /// is never met the last fitted `n` is returned with
    /// `target_met == false`.
    ///
    /// # Errors
    ///
    /// - `InvalidInput`: `min_n == 0`, `min_n > max_n`, a target that is not
    ///   finite and positive, or an invalid configuration
    /// - `NoSuccessfulFit`: no `n` in the range could be fitted
    pub fn find_minimum_degree(
        &self,
        target_error: f64,
        min_n: usize,
        max_n: usize,
    ) -> Result<DegreeSearchResult, OptimiserError> {
        if !target_error.is_finite() || target_error <= 0.0 {
            return Err(OptimiserError::invalid_input(format!(
                "target error must be finite and positive, got {}",
                target_error
            )));
        }
        self.check_range(min_n, max_n)?;

        let mut history = Vec::new();
        for n in min_n..=max_n {
            let profile = match self.evaluate_degree(n) {
                Ok(profile) => profile,
                Err(e) => {
                    warn!(n, method = %self.kind, error = %e, "Degree trial failed");
                    continue;
                }
            };
            debug!(n, max_error = profile.max_error, "Degree trial");
            history.push(DegreeTrial {
                n,
                max_error: profile.max_error,
            });

            if profile.max_error <= target_error {
                info!(
                    n,
                    max_error = profile.max_error,
                    target_error,
                    method = %self.kind,
                    "Target accuracy reached"
                );
                return Ok(DegreeSearchResult {
                    achieved_n: n,
                    error: profile.max_error,
                    target_met: true,
                    history,
                });
            }
        }

        let last = *history
            .last()
            .ok_or(OptimiserError::NoSuccessfulFit { min_n, max_n })?;
        warn!(
            max_n,
            best_error = last.max_error,
            target_error,
            "Target accuracy not reached"
        );
        Ok(DegreeSearchResult {
            achieved_n: last.n,
            error: last.max_error,
            target_met: false,
            history,
        })
    }

    /// Maximum and mean error for every `n` in `min_n..=max_n`.
    ///
    /// Sample counts that fail to fit are logged and left out of the table.
    pub fn analyse_degree_range(
        &self,
        min_n: usize,
        max_n: usize,
    ) -> Result<Vec<DegreeAnalysisRow>, OptimiserError> {
        self.check_range(min_n, max_n)?;

        let mut rows = Vec::with_capacity(max_n - min_n + 1);
        for n in min_n..=max_n {
            match self.evaluate_degree(n) {
                Ok(profile) => rows.push(DegreeAnalysisRow {
                    n,
                    max_error: profile.max_error,
                    mean_error: profile.mean_error,
                }),
                Err(e) => warn!(n, method = %self.kind, error = %e, "Degree analysis failed"),
            }
        }
        Ok(rows)
    }

    fn check_range(&self, min_n: usize, max_n: usize) -> Result<(), OptimiserError> {
        self.config.validate()?;
        if min_n == 0 {
            return Err(OptimiserError::invalid_input("min_n must be at least 1"));
        }
        if min_n > max_n {
            return Err(OptimiserError::invalid_input(format!(
                "min_n ({}) must not exceed max_n ({})",
                min_n, max_n
            )));
        }
        Ok(())
    }
}
