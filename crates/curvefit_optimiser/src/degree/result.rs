//! Degree search results.

/// One examined sample count and its maximum error.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DegreeTrial {
    /// Number of Chebyshev samples
    pub n: usize,
    /// Maximum absolute error on the test grid
    pub max_error: f64,
}

/// Outcome of [`find_minimum_degree`](super::DegreeOptimiser::find_minimum_degree).
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DegreeSearchResult {
    /// The first sample count meeting the target, or the last one fitted
    /// when the target was never met
    pub achieved_n: usize,
    /// Maximum error at `achieved_n`
    pub error: f64,
    /// Whether `error <= target`
    pub target_met: bool,
    /// Every successfully fitted trial, ascending in n
    pub history: Vec<DegreeTrial>,
}

impl DegreeSearchResult {
    /// Polynomial degree of a global fit through `achieved_n` points.
    pub fn polynomial_degree(&self) -> usize {
        self.achieved_n.saturating_sub(1)
    }
}

/// One row of [`analyse_degree_range`](super::DegreeOptimiser::analyse_degree_range).
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DegreeAnalysisRow {
    /// Number of Chebyshev samples
    pub n: usize,
    /// Maximum absolute error
    pub max_error: f64,
    /// Mean absolute error
    pub mean_error: f64,
}
