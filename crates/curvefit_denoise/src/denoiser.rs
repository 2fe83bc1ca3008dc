//! The denoising pipeline.

use crate::outliers::{detect_outliers, SignalStats};
use crate::repair::{repair_window, windows, WindowRepair};
use crate::smoothing::moving_average;
use crate::{DenoiseConfig, DenoiseError, SampleBuffer};
use curvefit_core::math::interpolators::{Interpolator, InterpolatorKind};
use tracing::{debug, info};

/// Result of one denoising run.
#[derive(Debug, Clone, PartialEq)]
pub struct DenoiseOutcome {
    /// Smoothed signal with flagged samples repaired; same length and
    /// indexing as the input
    pub samples: Vec<f64>,
    /// Number of flagged samples
    pub outlier_count: usize,
    /// Indices of the flagged samples, ascending
    pub outliers: Vec<usize>,
    /// Flagged samples replaced from a fitted curve
    pub interpolated: usize,
    /// Flagged samples replaced by the neighbour median
    pub fallback: usize,
    /// Statistics of the smoothed signal
    pub stats: SignalStats,
}

impl DenoiseOutcome {
    /// Flagged samples left at their smoothed value because neither the
    /// fit nor the median fallback produced a replacement.
    pub fn untouched(&self) -> usize {
        self.outlier_count - self.interpolated - self.fallback
    }
}

/// Progress notifications from [`Denoiser::repair_with_progress`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DenoiseProgress {
    /// A smoothing pass finished.
    Smoothed {
        /// 1-based pass number
        pass: usize,
        /// Total passes
        passes: usize,
    },
    /// Outlier detection finished.
    OutliersDetected {
        /// Flagged samples
        count: usize,
        /// Total samples
        samples: usize,
    },
    /// A window containing flagged samples was repaired.
    WindowRepaired {
        /// 1-based index among windows with flagged samples
        window: usize,
        /// Windows with flagged samples
        windows: usize,
    },
}

struct Detection {
    smoothed: Vec<f64>,
    flagged: Vec<bool>,
    outliers: Vec<usize>,
    stats: SignalStats,
}

/// Smooths a signal, flags outliers, and repairs them by interpolation.
///
/// # Example
///
/// ```
/// use curvefit_core::math::interpolators::InterpolatorKind;
/// use curvefit_denoise::{DenoiseConfig, Denoiser};
///
/// let denoiser = Denoiser::new(DenoiseConfig::default().with_window_size(40)).unwrap();
///
/// let mut samples: Vec<f64> = (0..2000).map(|i| (i as f64 * 0.02).sin()).collect();
/// samples[700] = 80.0;
///
/// let outcome = denoiser.repair_parallel(&samples, InterpolatorKind::Hermite).unwrap();
/// assert!(outcome.outliers.contains(&700));
/// ```
#[derive(Debug, Clone, Default)]
pub struct Denoiser {
    config: DenoiseConfig,
}

impl Denoiser {
    /// Create a denoiser after validating `config`.
    pub fn new(config: DenoiseConfig) -> Result<Self, DenoiseError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// The active configuration.
    pub fn config(&self) -> &DenoiseConfig {
        &self.config
    }

    /// Denoise `samples`, fitting every window with `interp`.
    ///
    /// # Errors
    ///
    /// `EmptyBuffer` for no samples, `NonFiniteSample` for NaN or infinite
    /// input. Interpolation failures are recovered locally.
    pub fn repair(
        &self,
        samples: &[f64],
        interp: &mut dyn Interpolator<f64>,
    ) -> Result<DenoiseOutcome, DenoiseError> {
        self.repair_with_progress(samples, interp, &mut |_| {})
    }

    /// As [`repair`](Self::repair), reporting each stage to `progress`.
    pub fn repair_with_progress(
        &self,
        samples: &[f64],
        interp: &mut dyn Interpolator<f64>,
        progress: &mut dyn FnMut(DenoiseProgress),
    ) -> Result<DenoiseOutcome, DenoiseError> {
        let detection = self.detect(samples, progress)?;
        if detection.outliers.is_empty() {
            return Ok(self.finish(detection, Vec::new()));
        }

        let pending = self.pending_windows(&detection);
        let total = pending.len();
        let mut repairs = Vec::with_capacity(total);
        for (k, &(start, end)) in pending.iter().enumerate() {
            repairs.push(repair_window(
                &detection.smoothed,
                &detection.flagged,
                start,
                end,
                &self.config,
                interp,
            ));
            progress(DenoiseProgress::WindowRepaired {
                window: k + 1,
                windows: total,
            });
        }

        Ok(self.finish(detection, repairs))
    }

    /// Denoise with windows fitted concurrently, each worker thread using
    /// its own interpolator of kind `kind`.
    ///
    /// The result is identical to [`repair`](Self::repair) with a fresh
    /// interpolator of the same kind.
    #[cfg(feature = "parallel")]
    pub fn repair_parallel(
        &self,
        samples: &[f64],
        kind: InterpolatorKind,
    ) -> Result<DenoiseOutcome, DenoiseError> {
        use rayon::prelude::*;

        let detection = self.detect(samples, &mut |_| {})?;
        if detection.outliers.is_empty() {
            return Ok(self.finish(detection, Vec::new()));
        }

        let pending = self.pending_windows(&detection);
        let repairs: Vec<WindowRepair> = pending
            .par_iter()
            .map_init(
                || kind.build(),
                |interp, &(start, end)| {
                    repair_window(
                        &detection.smoothed,
                        &detection.flagged,
                        start,
                        end,
                        &self.config,
                        interp.as_mut(),
                    )
                },
            )
            .collect();

        Ok(self.finish(detection, repairs))
    }

    /// Fallback to sequential when the parallel feature is disabled.
    #[cfg(not(feature = "parallel"))]
    pub fn repair_parallel(
        &self,
        samples: &[f64],
        kind: InterpolatorKind,
    ) -> Result<DenoiseOutcome, DenoiseError> {
        let mut interp = kind.build();
        self.repair(samples, interp.as_mut())
    }

    /// Down-mix `buffer` to mono, denoise it, and up-mix the result back to
    /// the original channel count and sample rate.
    pub fn repair_buffer(
        &self,
        buffer: &SampleBuffer,
        interp: &mut dyn Interpolator<f64>,
    ) -> Result<(SampleBuffer, DenoiseOutcome), DenoiseError> {
        let mono = buffer.to_mono();
        let outcome = self.repair(mono.samples(), interp)?;
        let repaired = SampleBuffer::mono(outcome.samples.clone(), buffer.sample_rate())?
            .upmix(buffer.channels())?;
        Ok((repaired, outcome))
    }

    fn detect(
        &self,
        samples: &[f64],
        progress: &mut dyn FnMut(DenoiseProgress),
    ) -> Result<Detection, DenoiseError> {
        if samples.is_empty() {
            return Err(DenoiseError::EmptyBuffer);
        }
        if let Some(index) = samples.iter().position(|s| !s.is_finite()) {
            return Err(DenoiseError::NonFiniteSample { index });
        }

        let width = self.config.filter_size();
        let passes = self.config.smoothing_passes;
        info!(
            samples = samples.len(),
            threshold_multiplier = self.config.threshold_multiplier,
            filter_size = width,
            "Denoising"
        );

        let mut smoothed = samples.to_vec();
        for pass in 1..=passes {
            smoothed = moving_average(&smoothed, width);
            debug!(pass, passes, "Smoothing pass complete");
            progress(DenoiseProgress::Smoothed { pass, passes });
        }

        let stats = SignalStats::compute(&smoothed, self.config.threshold_multiplier);
        let flagged = detect_outliers(&smoothed, &stats);
        let outliers: Vec<usize> = (0..flagged.len()).filter(|&i| flagged[i]).collect();

        info!(
            mean = stats.mean,
            std_dev = stats.std_dev,
            threshold = stats.threshold,
            outliers = outliers.len(),
            "Outlier detection complete"
        );
        progress(DenoiseProgress::OutliersDetected {
            count: outliers.len(),
            samples: samples.len(),
        });

        Ok(Detection {
            smoothed,
            flagged,
            outliers,
            stats,
        })
    }

    /// Windows holding at least one flagged sample.
    fn pending_windows(&self, detection: &Detection) -> Vec<(usize, usize)> {
        windows(detection.smoothed.len(), self.config.window_size)
            .filter(|&(start, end)| detection.flagged[start..end].iter().any(|&f| f))
            .collect()
    }

    fn finish(&self, detection: Detection, repairs: Vec<WindowRepair>) -> DenoiseOutcome {
        let Detection {
            mut smoothed,
            outliers,
            stats,
            ..
        } = detection;

        let mut interpolated = 0;
        let mut fallback = 0;
        for repair in repairs {
            interpolated += repair.interpolated;
            fallback += repair.fallback;
            for (i, value) in repair.values {
                smoothed[i] = value;
            }
        }

        if !outliers.is_empty() {
            info!(
                outliers = outliers.len(),
                interpolated, fallback, "Repair complete"
            );
        }

        DenoiseOutcome {
            samples: smoothed,
            outlier_count: outliers.len(),
            outliers,
            interpolated,
            fallback,
            stats,
        }
    }
}
