//! Sample abscissae: evenly spaced grids and Chebyshev nodes.

use crate::types::SamplingError;
use std::f64::consts::PI;

fn check_range(x_min: f64, x_max: f64) -> Result<(), SamplingError> {
    if !x_min.is_finite() || !x_max.is_finite() || x_min >= x_max {
        return Err(SamplingError::InvalidRange {
            min: x_min,
            max: x_max,
        });
    }
    Ok(())
}

/// `n` evenly spaced points from `x_min` to `x_max` inclusive.
///
/// The last point is exactly `x_max`.
///
/// # Errors
///
/// `InvalidRange` unless `x_min < x_max` with both finite; `TooFewSamples`
/// when `n < 2`.
///
/// # Example
///
/// ```
/// use curvefit_core::sampling::uniform_grid;
///
/// assert_eq!(uniform_grid(0.0, 1.0, 5).unwrap(), vec![0.0, 0.25, 0.5, 0.75, 1.0]);
/// ```
pub fn uniform_grid(x_min: f64, x_max: f64, n: usize) -> Result<Vec<f64>, SamplingError> {
    check_range(x_min, x_max)?;
    if n < 2 {
        return Err(SamplingError::TooFewSamples { got: n, need: 2 });
    }

    let step = (x_max - x_min) / (n - 1) as f64;
    let mut xs: Vec<f64> = (0..n).map(|i| x_min + i as f64 * step).collect();
    xs[n - 1] = x_max;
    Ok(xs)
}

/// Chebyshev nodes of the first kind mapped onto `[x_min, x_max]`, ascending.
///
/// ```text
/// xᵢ = (x_min + x_max)/2 + (x_max - x_min)/2 · cos((2i + 1)π / 2n),  i = 0..n-1
/// ```
///
/// The nodes cluster towards the interval ends, which keeps the
/// interpolation error of a degree n-1 polynomial close to its minimax
/// bound. Every node lies strictly inside the interval.
///
/// # Errors
///
/// `InvalidRange` as for [`uniform_grid`]; `TooFewSamples` when `n == 0`.
pub fn chebyshev_nodes(x_min: f64, x_max: f64, n: usize) -> Result<Vec<f64>, SamplingError> {
    check_range(x_min, x_max)?;
    if n == 0 {
        return Err(SamplingError::TooFewSamples { got: 0, need: 1 });
    }

    let mid = 0.5 * (x_min + x_max);
    let half = 0.5 * (x_max - x_min);
    let two_n = 2.0 * n as f64;

    // cos is decreasing on (0, π), so reversing i gives ascending order
    Ok((0..n)
        .rev()
        .map(|i| {
            let theta = (2.0 * i as f64 + 1.0) * PI / two_n;
            mid + half * theta.cos()
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_uniform_endpoints_and_spacing() {
        let xs = uniform_grid(-1.0, 2.0, 4).unwrap();
        assert_eq!(xs, vec![-1.0, 0.0, 1.0, 2.0]);
    }

    #[test]
    fn test_uniform_last_point_pinned() {
        let xs = uniform_grid(0.0, 0.3, 7).unwrap();
        assert_eq!(*xs.last().unwrap(), 0.3);
    }

    #[test]
    fn test_uniform_needs_two_points() {
        assert_eq!(
            uniform_grid(0.0, 1.0, 1).unwrap_err(),
            SamplingError::TooFewSamples { got: 1, need: 2 }
        );
    }

    #[test]
    fn test_invalid_ranges() {
        assert!(matches!(
            uniform_grid(1.0, 1.0, 5),
            Err(SamplingError::InvalidRange { .. })
        ));
        assert!(matches!(
            chebyshev_nodes(2.0, 1.0, 5),
            Err(SamplingError::InvalidRange { .. })
        ));
        assert!(matches!(
            chebyshev_nodes(0.0, f64::INFINITY, 5),
            Err(SamplingError::InvalidRange { .. })
        ));
    }

    #[test]
    fn test_chebyshev_closed_form_on_unit_interval() {
        let n = 5;
        let xs = chebyshev_nodes(-1.0, 1.0, n).unwrap();

        let mut expected: Vec<f64> = (0..n)
            .map(|i| ((2 * i + 1) as f64 * PI / (2 * n) as f64).cos())
            .collect();
        expected.reverse();

        for (x, e) in xs.iter().zip(&expected) {
            assert_relative_eq!(*x, *e, epsilon = 1e-15);
        }
    }

    #[test]
    fn test_chebyshev_single_node_is_midpoint() {
        let xs = chebyshev_nodes(2.0, 4.0, 1).unwrap();
        assert_eq!(xs.len(), 1);
        assert_relative_eq!(xs[0], 3.0, epsilon = 1e-12);
    }

    #[test]
    fn test_chebyshev_ascending_and_interior() {
        let xs = chebyshev_nodes(0.0, 10.0, 20).unwrap();
        assert!(xs.windows(2).all(|w| w[0] < w[1]));
        assert!(xs.iter().all(|&x| x > 0.0 && x < 10.0));
    }
}
