//! Global outlier detection on a smoothed signal.

/// Mean, population standard deviation and flagging threshold of a signal.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SignalStats {
    /// Arithmetic mean
    pub mean: f64,
    /// Population standard deviation
    pub std_dev: f64,
    /// `|mean| + k·std_dev`
    pub threshold: f64,
}

impl SignalStats {
    /// Statistics of `samples` with threshold multiplier `k`.
    ///
    /// An empty slice yields zero mean and deviation.
    ///
    /// # Example
    ///
    /// ```
    /// use curvefit_denoise::SignalStats;
    ///
    /// let stats = SignalStats::compute(&[1.0, -1.0, 1.0, -1.0], 3.0);
    /// assert_eq!(stats.mean, 0.0);
    /// assert_eq!(stats.std_dev, 1.0);
    /// assert_eq!(stats.threshold, 3.0);
    /// ```
    pub fn compute(samples: &[f64], k: f64) -> Self {
        if samples.is_empty() {
            return Self {
                mean: 0.0,
                std_dev: 0.0,
                threshold: 0.0,
            };
        }

        let n = samples.len() as f64;
        let mean = samples.iter().sum::<f64>() / n;
        let variance = samples.iter().map(|s| (s - mean).powi(2)).sum::<f64>() / n;
        let std_dev = variance.sqrt();

        Self {
            mean,
            std_dev,
            threshold: mean.abs() + k * std_dev,
        }
    }

    /// Whether a single sample exceeds the threshold in magnitude.
    #[inline]
    pub fn is_outlier(&self, sample: f64) -> bool {
        sample.abs() > self.threshold
    }
}

/// Flag every sample whose magnitude exceeds `stats.threshold`.
pub fn detect_outliers(samples: &[f64], stats: &SignalStats) -> Vec<bool> {
    samples.iter().map(|&s| stats.is_outlier(s)).collect()
}
