//! Shared point validation and interval lookup.

use crate::types::InterpolationError;
use num_traits::Float;

/// Validate raw fit data and return it sorted ascending by x.
///
/// Checks run in order: matching lengths, minimum count, finiteness,
/// then uniqueness of x (on the sorted data, so only neighbours are compared).
pub(crate) fn sorted_points<T: Float>(
    xs: &[T],
    ys: &[T],
    need: usize,
) -> Result<(Vec<T>, Vec<T>), InterpolationError> {
    if xs.len() != ys.len() {
        return Err(InterpolationError::LengthMismatch {
            xs: xs.len(),
            ys: ys.len(),
        });
    }

    if xs.len() < need {
        return Err(InterpolationError::InsufficientData {
            got: xs.len(),
            need,
        });
    }

    if let Some(i) = xs
        .iter()
        .zip(ys)
        .position(|(x, y)| !x.is_finite() || !y.is_finite())
    {
        return Err(InterpolationError::invalid_input(format!(
            "point {} is not finite",
            i
        )));
    }

    let mut pairs: Vec<(T, T)> = xs.iter().copied().zip(ys.iter().copied()).collect();
    pairs.sort_by(|a, b| a.0.partial_cmp(&b.0).unwrap_or(std::cmp::Ordering::Equal));

    if let Some(w) = pairs.windows(2).find(|w| w[0].0 == w[1].0) {
        return Err(InterpolationError::DuplicateX {
            x: w[0].0.to_f64().unwrap_or(f64::NAN),
        });
    }

    Ok(pairs.into_iter().unzip())
}

/// Index `i` of the interval `[xs[i], xs[i+1]]` used to evaluate `x`.
///
/// A value on an interior breakpoint `xs[k]` belongs to the lower interval
/// `k - 1`; `xs[0]` belongs to interval 0 and the final breakpoint to the
/// last interval. Values below or above the range map to the first or last
/// interval, which is what extrapolation extends. Requires `xs.len() >= 2`.
#[inline]
pub(crate) fn find_interval<T: Float>(xs: &[T], x: T) -> usize {
    // Number of right endpoints strictly below x
    let pos = xs[1..].partition_point(|&xi| xi < x);
    pos.min(xs.len() - 2)
}
