//! Centred moving-average smoothing.
//!
//! Each output sample is the mean of the input samples within `width / 2`
//! positions on either side. Near the buffer edges the window is truncated
//! and the mean is taken over the samples that exist, so the output has the
//! same length as the input and no padding is invented.

/// One moving-average pass of width `width` (an odd width is centred
/// exactly; an even width behaves like `width + 1`).
///
/// # Example
///
/// ```
/// use curvefit_denoise::smoothing::moving_average;
///
/// let smoothed = moving_average(&[0.0, 3.0, 0.0, 3.0], 3);
/// // Edges average two samples, interior samples average three
/// assert_eq!(smoothed, vec![1.5, 1.0, 2.0, 1.5]);
/// ```
pub fn moving_average(samples: &[f64], width: usize) -> Vec<f64> {
    let n = samples.len();
    let half = width / 2;

    // prefix[i] = sum of samples[..i]
    let mut prefix = Vec::with_capacity(n + 1);
    prefix.push(0.0);
    let mut acc = 0.0;
    for &s in samples {
        acc += s;
        prefix.push(acc);
    }

    (0..n)
        .map(|i| {
            let start = i.saturating_sub(half);
            let end = (i + half).min(n - 1);
            (prefix[end + 1] - prefix[start]) / (end - start + 1) as f64
        })
        .collect()
}

/// Apply [`moving_average`] `passes` times.
///
/// Zero passes returns a copy of the input.
pub fn smooth(samples: &[f64], width: usize, passes: usize) -> Vec<f64> {
    let mut smoothed = samples.to_vec();
    for _ in 0..passes {
        smoothed = moving_average(&smoothed, width);
    }
    smoothed
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_constant_signal_unchanged() {
        let samples = vec![0.7; 40];
        for value in smooth(&samples, 15, 3) {
            assert_relative_eq!(value, 0.7, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_truncated_edges() {
        let samples = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0];
        let smoothed = moving_average(&samples, 5);

        assert_relative_eq!(smoothed[0], 2.0); // mean of 1, 2, 3
        assert_relative_eq!(smoothed[1], 2.5); // mean of 1..=4
        assert_relative_eq!(smoothed[2], 3.0); // mean of 1..=5
        assert_relative_eq!(smoothed[5], 5.0); // mean of 4, 5, 6
    }

    #[test]
    fn test_linear_ramp_preserved_in_interior() {
        let samples: Vec<f64> = (0..50).map(|i| i as f64 * 0.1).collect();
        let smoothed = moving_average(&samples, 7);
        for i in 3..47 {
            assert_relative_eq!(smoothed[i], samples[i], epsilon = 1e-12);
        }
    }

    #[test]
    fn test_impulse_is_spread() {
        let mut samples = vec![0.0; 21];
        samples[10] = 15.0;
        let smoothed = moving_average(&samples, 15);

        // Full window of 15 around the impulse
        assert_relative_eq!(smoothed[10], 1.0, epsilon = 1e-12);
        // Window [10, 20] truncated at the right edge: 11 samples
        assert_relative_eq!(smoothed[17], 15.0 / 11.0, epsilon = 1e-12);
        // Window [0, 9] does not reach the impulse
        assert_eq!(smoothed[2], 0.0);
    }

    #[test]
    fn test_width_wider_than_buffer() {
        let smoothed = moving_average(&[1.0, 2.0, 3.0], 25);
        assert_eq!(smoothed, vec![2.0, 2.0, 2.0]);
    }

    #[test]
    fn test_empty_and_zero_passes() {
        assert!(moving_average(&[], 5).is_empty());
        assert_eq!(smooth(&[1.0, 5.0], 3, 0), vec![1.0, 5.0]);
    }
}
