//! Denoise command implementation
//!
//! Reads a signal from CSV, repairs outliers and writes the result.

use curvefit_core::math::interpolators::InterpolatorKind;
use curvefit_denoise::{DenoiseConfig, DenoiseOutcome, Denoiser, SignalStats};
use serde::Serialize;
use std::path::Path;
use tracing::{debug, info};

use crate::io::{read_signal, write_signal};
use crate::output::{cell, print_json, OutputFormat, Table};
use crate::Result;

/// Summary of a denoising run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DenoiseSummary {
    /// Samples read
    pub samples: usize,
    /// Method used for repair
    pub method: InterpolatorKind,
    /// Flagged samples
    pub outliers: usize,
    /// Repaired from the fitted curve
    pub interpolated: usize,
    /// Repaired by neighbour median
    pub fallback: usize,
    /// Left at the smoothed value
    pub untouched: usize,
    /// Statistics of the smoothed signal
    pub stats: SignalStats,
}

impl DenoiseSummary {
    fn new(samples: usize, method: InterpolatorKind, outcome: &DenoiseOutcome) -> Self {
        Self {
            samples,
            method,
            outliers: outcome.outlier_count,
            interpolated: outcome.interpolated,
            fallback: outcome.fallback,
            untouched: outcome.untouched(),
            stats: outcome.stats,
        }
    }
}

/// Denoise `values` with `method`.
pub fn denoise(
    values: &[f64],
    config: DenoiseConfig,
    method: InterpolatorKind,
    parallel: bool,
) -> Result<DenoiseOutcome> {
    let denoiser = Denoiser::new(config)?;
    let outcome = if parallel {
        denoiser.repair_parallel(values, method)?
    } else {
        let mut interp = method.build();
        denoiser.repair_with_progress(values, interp.as_mut(), &mut |progress| {
            debug!(?progress, "Denoise progress")
        })?
    };
    Ok(outcome)
}

/// Run the denoise command
pub fn run(
    input: &Path,
    output: &Path,
    config: DenoiseConfig,
    method: InterpolatorKind,
    parallel: bool,
    format: OutputFormat,
) -> Result<()> {
    info!(input = %input.display(), %method, parallel, "Denoising");
    let values = read_signal(input)?;
    let outcome = denoise(&values, config, method, parallel)?;

    write_signal(output, &outcome.samples)?;
    info!(output = %output.display(), "Repaired signal written");

    let summary = DenoiseSummary::new(values.len(), method, &outcome);
    match format {
        OutputFormat::Json => print_json(&summary),
        OutputFormat::Table => {
            let mut table = Table::new(["Metric", "Value"]);
            table
                .row(["Samples".to_string(), summary.samples.to_string()])
                .row(["Method".to_string(), summary.method.to_string()])
                .row(["Mean".to_string(), cell(summary.stats.mean)])
                .row(["Std dev".to_string(), cell(summary.stats.std_dev)])
                .row(["Threshold".to_string(), cell(summary.stats.threshold)])
                .row(["Outliers".to_string(), summary.outliers.to_string()])
                .row(["Interpolated".to_string(), summary.interpolated.to_string()])
                .row(["Median fallback".to_string(), summary.fallback.to_string()])
                .row(["Untouched".to_string(), summary.untouched.to_string()]);
            table.print();
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::write_signal;
    use crate::CliError;

    fn spiked(len: usize, at: usize) -> Vec<f64> {
        let mut values: Vec<f64> = (0..len).map(|i| 0.5 * (i as f64 * 0.03).sin()).collect();
        values[at] = 100.0;
        values
    }

    #[test]
    fn test_parallel_and_sequential_agree() {
        let values = spiked(1500, 700);
        let config = DenoiseConfig::default();

        let sequential = denoise(&values, config, InterpolatorKind::Linear, false).unwrap();
        let parallel = denoise(&values, config, InterpolatorKind::Linear, true).unwrap();
        assert_eq!(sequential, parallel);
        assert!(sequential.outliers.contains(&700));
    }

    #[test]
    fn test_run_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("in.csv");
        let output = dir.path().join("out.csv");
        write_signal(&input, &spiked(1000, 500)).unwrap();

        run(
            &input,
            &output,
            DenoiseConfig::default(),
            InterpolatorKind::Hermite,
            true,
            OutputFormat::Json,
        )
        .unwrap();

        let repaired = read_signal(&output).unwrap();
        assert_eq!(repaired.len(), 1000);
        assert!(repaired[500] < 50.0);
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = DenoiseConfig::default().with_threshold_multiplier(-1.0);
        assert!(matches!(
            denoise(&[1.0, 2.0], config, InterpolatorKind::Linear, false),
            Err(CliError::Denoise(_))
        ));
    }
}
