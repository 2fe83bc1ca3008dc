//! Reproducible synthetic signals for exercising the denoiser.
//!
//! All generators draw from a seeded [`StdRng`], so the same seed always
//! yields the same samples.

use crate::DenoiseError;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::{Distribution, Normal};
use std::f64::consts::PI;

/// Shortest click, in samples.
const CLICK_MIN_WIDTH: usize = 5;
/// Longest click, exclusive.
const CLICK_MAX_WIDTH: usize = 20;
/// Shortest dropout, in samples.
const GAP_MIN_LEN: usize = 10;
/// Longest dropout, exclusive.
const GAP_MAX_LEN: usize = 100;

/// Seeded generator of test signals and corruptions.
///
/// # Example
///
/// ```
/// use curvefit_denoise::SyntheticSignal;
///
/// let mut a = SyntheticSignal::new(42, 44_100).unwrap();
/// let mut b = SyntheticSignal::new(42, 44_100).unwrap();
/// assert_eq!(
///     a.sine_with_noise(440.0, 0.8, 0.05, 512),
///     b.sine_with_noise(440.0, 0.8, 0.05, 512)
/// );
/// ```
#[derive(Debug, Clone)]
pub struct SyntheticSignal {
    rng: StdRng,
    sample_rate: u32,
}

impl SyntheticSignal {
    /// Create a generator for `sample_rate` Hz seeded with `seed`.
    ///
    /// # Errors
    ///
    /// `InvalidConfig` when `sample_rate` is zero.
    pub fn new(seed: u64, sample_rate: u32) -> Result<Self, DenoiseError> {
        if sample_rate == 0 {
            return Err(DenoiseError::invalid_config(
                "sample_rate must be positive",
            ));
        }
        Ok(Self {
            rng: StdRng::seed_from_u64(seed),
            sample_rate,
        })
    }

    /// Sample rate in Hz.
    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    /// Pure sine of `frequency` Hz.
    pub fn sine(&self, frequency: f64, amplitude: f64, len: usize) -> Vec<f64> {
        let rate = f64::from(self.sample_rate);
        (0..len)
            .map(|i| amplitude * (2.0 * PI * frequency * i as f64 / rate).sin())
            .collect()
    }

    /// Sine plus uniform noise in `[-noise_level, noise_level)`.
    pub fn sine_with_noise(
        &mut self,
        frequency: f64,
        amplitude: f64,
        noise_level: f64,
        len: usize,
    ) -> Vec<f64> {
        let mut samples = self.sine(frequency, amplitude, len);
        for s in &mut samples {
            *s += self.uniform_noise(noise_level);
        }
        samples
    }

    /// Sine plus Gaussian noise with standard deviation `sigma`.
    ///
    /// # Errors
    ///
    /// `InvalidConfig` if `sigma` is negative or not finite.
    pub fn sine_with_gaussian_noise(
        &mut self,
        frequency: f64,
        amplitude: f64,
        sigma: f64,
        len: usize,
    ) -> Result<Vec<f64>, DenoiseError> {
        let normal = Normal::new(0.0, sigma)
            .map_err(|e| DenoiseError::invalid_config(format!("noise sigma {}: {}", sigma, e)))?;

        let mut samples = self.sine(frequency, amplitude, len);
        for s in &mut samples {
            *s += normal.sample(&mut self.rng);
        }
        Ok(samples)
    }

    /// Mean of unit sines at each of `frequencies`, plus uniform noise.
    pub fn multi_frequency(
        &mut self,
        frequencies: &[f64],
        noise_level: f64,
        len: usize,
    ) -> Vec<f64> {
        let mut samples = vec![0.0; len];
        if !frequencies.is_empty() {
            for &f in frequencies {
                for (s, v) in samples.iter_mut().zip(self.sine(f, 1.0, len)) {
                    *s += v;
                }
            }
            let count = frequencies.len() as f64;
            for s in &mut samples {
                *s /= count;
            }
        }
        for s in &mut samples {
            *s += self.uniform_noise(noise_level);
        }
        samples
    }

    /// Overwrite `count` random runs of 5 to 19 samples with values in
    /// `[-1, 1)`. Returns the start of each click.
    pub fn with_clicks(&mut self, samples: &mut [f64], count: usize) -> Vec<usize> {
        if samples.is_empty() {
            return Vec::new();
        }

        let mut starts = Vec::with_capacity(count);
        for _ in 0..count {
            let start = self.rng.gen_range(0..samples.len());
            let width = self.rng.gen_range(CLICK_MIN_WIDTH..CLICK_MAX_WIDTH);
            for s in samples.iter_mut().skip(start).take(width) {
                *s = self.rng.gen_range(-1.0..1.0);
            }
            starts.push(start);
        }
        starts
    }

    /// Zero `count` random runs of 10 to 99 samples. Returns `(start, len)`
    /// of each gap, clipped to the buffer.
    ///
    /// Buffers shorter than the longest gap are left untouched.
    pub fn with_gaps(&mut self, samples: &mut [f64], count: usize) -> Vec<(usize, usize)> {
        if samples.len() <= GAP_MAX_LEN {
            return Vec::new();
        }

        let mut gaps = Vec::with_capacity(count);
        for _ in 0..count {
            let start = self.rng.gen_range(0..samples.len() - GAP_MAX_LEN);
            let len = self.rng.gen_range(GAP_MIN_LEN..GAP_MAX_LEN);
            samples[start..start + len].fill(0.0);
            gaps.push((start, len));
        }
        gaps
    }

    /// Set each sample in `positions` to `height`, ignoring positions past
    /// the end.
    pub fn with_spikes(samples: &mut [f64], positions: &[usize], height: f64) {
        for &p in positions {
            if let Some(s) = samples.get_mut(p) {
                *s = height;
            }
        }
    }

    fn uniform_noise(&mut self, level: f64) -> f64 {
        level * (self.rng.gen::<f64>() * 2.0 - 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_rejects_zero_sample_rate() {
        match SyntheticSignal::new(1, 0).unwrap_err() {
            DenoiseError::InvalidConfig(msg) => assert!(msg.contains("sample_rate")),
            other => panic!("Expected InvalidConfig, got {:?}", other),
        }
    }

    #[test]
    fn test_sine_period() {
        let signal = SyntheticSignal::new(0, 8000).unwrap();
        let samples = signal.sine(1000.0, 2.0, 16);

        // Eight samples per period
        assert_relative_eq!(samples[0], 0.0, epsilon = 1e-12);
        assert_relative_eq!(samples[2], 2.0, epsilon = 1e-12);
        assert_relative_eq!(samples[6], -2.0, epsilon = 1e-12);
        assert_relative_eq!(samples[10], 2.0, epsilon = 1e-12);
    }

    #[test]
    fn test_noise_is_bounded() {
        let mut signal = SyntheticSignal::new(1, 8000).unwrap();
        let clean = signal.sine(50.0, 1.0, 2000);
        let noisy = signal.sine_with_noise(50.0, 1.0, 0.1, 2000);

        for (c, n) in clean.iter().zip(&noisy) {
            assert!((c - n).abs() <= 0.1);
        }
        assert_ne!(clean, noisy);
    }

    #[test]
    fn test_gaussian_noise_rejects_bad_sigma() {
        let mut signal = SyntheticSignal::new(1, 8000).unwrap();
        assert!(matches!(
            signal.sine_with_gaussian_noise(50.0, 1.0, -1.0, 10),
            Err(DenoiseError::InvalidConfig(_))
        ));
        assert_eq!(
            signal.sine_with_gaussian_noise(50.0, 1.0, 0.1, 10).unwrap().len(),
            10
        );
    }

    #[test]
    fn test_multi_frequency_is_averaged() {
        let mut signal = SyntheticSignal::new(3, 8000).unwrap();
        let samples = signal.multi_frequency(&[100.0, 250.0, 400.0], 0.0, 1000);
        assert!(samples.iter().all(|s| s.abs() <= 1.0 + 1e-12));

        let single = signal.multi_frequency(&[100.0], 0.0, 100);
        assert_eq!(single, signal.sine(100.0, 1.0, 100));
    }

    #[test]
    fn test_clicks_stay_in_range() {
        let mut signal = SyntheticSignal::new(5, 8000).unwrap();
        let mut samples = vec![0.0; 500];
        let starts = signal.with_clicks(&mut samples, 4);

        assert_eq!(starts.len(), 4);
        assert!(starts.iter().all(|&s| s < 500));
        assert!(samples.iter().all(|s| (-1.0..1.0).contains(s)));
        assert!(samples.iter().any(|&s| s != 0.0));
    }

    #[test]
    fn test_gaps_are_zeroed() {
        let mut signal = SyntheticSignal::new(9, 8000).unwrap();
        let mut samples = vec![1.0; 1000];
        let gaps = signal.with_gaps(&mut samples, 3);

        for &(start, len) in &gaps {
            assert!((GAP_MIN_LEN..GAP_MAX_LEN).contains(&len));
            assert!(samples[start..start + len].iter().all(|&s| s == 0.0));
        }

        let mut short = vec![1.0; 50];
        assert!(signal.with_gaps(&mut short, 3).is_empty());
        assert!(short.iter().all(|&s| s == 1.0));
    }

    #[test]
    fn test_spikes_ignore_out_of_range() {
        let mut samples = vec![0.0; 4];
        SyntheticSignal::with_spikes(&mut samples, &[1, 9], 5.0);
        assert_eq!(samples, vec![0.0, 5.0, 0.0, 0.0]);
    }

    #[test]
    fn test_seed_reproducibility() {
        let run = |seed| {
            let mut signal = SyntheticSignal::new(seed, 8000).unwrap();
            let mut samples = signal.sine_with_noise(200.0, 0.5, 0.02, 1000);
            signal.with_clicks(&mut samples, 3);
            samples
        };
        assert_eq!(run(11), run(11));
        assert_ne!(run(11), run(12));
    }
}
