//! Minimum sample-count search.
//!
//! For an expression, an interval and an interpolation method, the search
//! fits the method to `n` Chebyshev samples for increasing `n` and measures
//! the maximum absolute error on a dense uniform grid. The first `n` whose
//! error meets the target is the answer.

mod config;
mod metrics;
mod optimiser;
mod result;

pub use config::DegreeSearchConfig;
pub use metrics::{error_profile, max_abs_error, ErrorProfile};
pub use optimiser::DegreeOptimiser;
pub use result::{DegreeAnalysisRow, DegreeSearchResult, DegreeTrial};
