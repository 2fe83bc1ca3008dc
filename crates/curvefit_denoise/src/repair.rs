//! Repair of flagged samples within one window.
//!
//! A window only reads samples that are not flagged and only produces values
//! for flagged samples in its own range, so windows are independent of each
//! other and of the order in which they run.

use crate::DenoiseConfig;
use curvefit_core::math::interpolators::Interpolator;
use tracing::debug;

/// Neighbours within this distance feed the median fallback.
pub(crate) const MEDIAN_RADIUS: usize = 2;

/// Replacement values for one window.
#[derive(Debug, Clone, Default, PartialEq)]
pub(crate) struct WindowRepair {
    /// `(index, value)` for every flagged sample that received a value
    pub values: Vec<(usize, f64)>,
    /// Samples filled from the fitted curve
    pub interpolated: usize,
    /// Samples filled by the median fallback
    pub fallback: usize,
}

/// Fixed windows `[start, end)` of `window_size` covering `len` samples.
pub(crate) fn windows(len: usize, window_size: usize) -> impl Iterator<Item = (usize, usize)> {
    (0..len)
        .step_by(window_size)
        .map(move |start| (start, (start + window_size).min(len)))
}

/// Upper median of the unflagged samples within [`MEDIAN_RADIUS`] of `index`,
/// excluding `index` itself.
pub(crate) fn neighbour_median(signal: &[f64], flagged: &[bool], index: usize) -> Option<f64> {
    let left = index.saturating_sub(MEDIAN_RADIUS);
    let right = (index + MEDIAN_RADIUS).min(signal.len() - 1);

    let mut neighbours: Vec<f64> = (left..=right)
        .filter(|&j| j != index && !flagged[j])
        .map(|j| signal[j])
        .collect();
    if neighbours.is_empty() {
        return None;
    }

    neighbours.sort_by(|a, b| a.total_cmp(b));
    Some(neighbours[neighbours.len() / 2])
}

/// Compute replacements for the flagged samples in `[start, end)`.
///
/// Clean samples from `[start - neighbourhood, end + neighbourhood)` are fitted
/// with `interp`, using sample indices as abscissae. With too few clean
/// samples, or when the fit fails, every flagged sample falls back to
/// [`neighbour_median`]. A single estimate that is not finite, or lies
/// further than the clean range's span outside that range, falls back on
/// its own.
pub(crate) fn repair_window(
    signal: &[f64],
    flagged: &[bool],
    start: usize,
    end: usize,
    config: &DenoiseConfig,
    interp: &mut dyn Interpolator<f64>,
) -> WindowRepair {
    let targets: Vec<usize> = (start..end).filter(|&i| flagged[i]).collect();
    if targets.is_empty() {
        return WindowRepair::default();
    }

    let lo = start.saturating_sub(config.neighbourhood);
    let hi = (end + config.neighbourhood).min(signal.len());
    let (xs, ys): (Vec<f64>, Vec<f64>) = (lo..hi)
        .filter(|&i| !flagged[i])
        .map(|i| (i as f64, signal[i]))
        .unzip();

    let mut repair = WindowRepair::default();
    let (lo_y, hi_y) = ys
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &y| {
            (lo.min(y), hi.max(y))
        });
    let margin = hi_y - lo_y;
    let plausible = |v: f64| v.is_finite() && v >= lo_y - margin && v <= hi_y + margin;

    let estimates = if xs.len() >= config.min_clean_points {
        match interp.set_data(&xs, &ys) {
            Ok(()) => targets
                .iter()
                .map(|&i| interp.interpolate(i as f64))
                .collect::<Result<Vec<f64>, _>>()
                .map_err(|e| e.to_string()),
            Err(e) => Err(e.to_string()),
        }
    } else {
        Err(format!("{} clean samples", xs.len()))
    };

    match estimates {
        Ok(estimates) => {
            for (&i, estimate) in targets.iter().zip(estimates) {
                if plausible(estimate) {
                    repair.values.push((i, estimate));
                    repair.interpolated += 1;
                } else if let Some(median) = neighbour_median(signal, flagged, i) {
                    repair.values.push((i, median));
                    repair.fallback += 1;
                }
            }
        }
        Err(reason) => {
            debug!(start, end, %reason, "Window fit unavailable, using median fallback");
            for &i in &targets {
                if let Some(median) = neighbour_median(signal, flagged, i) {
                    repair.values.push((i, median));
                    repair.fallback += 1;
                }
            }
        }
    }

    repair
}
