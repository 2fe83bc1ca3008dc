//! Interpolate command implementation
//!
//! Fits one or every interpolation method to user data points, compares
//! them, and optionally exports the resampled curve and the comparison.

use curvefit_core::math::interpolators::{Interpolator, InterpolatorKind};
use serde::Serialize;
use std::fs::File;
use std::path::Path;
use std::time::Instant;
use tracing::{info, warn};

use crate::commands::fit::MethodSelection;
use crate::io::{read_points, write_points};
use crate::output::{cell, print_json, OutputFormat, Table};
use crate::{CliError, Result};

/// Comparison of one method fitted to the data.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InterpolationReport {
    /// Method
    pub method: InterpolatorKind,
    /// Root-mean-square residual at the data points
    pub rmse: f64,
    /// Largest absolute residual at the data points
    pub max_error: f64,
    /// Wall time of fitting and resampling, in milliseconds
    pub elapsed_ms: f64,
    /// Human-readable form of the fitted curve
    pub equation: String,
    /// Value at the requested point, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value_at: Option<f64>,
}

/// Fitted methods and the curve of the first one.
#[derive(Debug, Clone, PartialEq)]
pub struct Interpolation {
    /// One report per method that could fit the data
    pub reports: Vec<InterpolationReport>,
    /// `points` evenly spaced `(x, y)` pairs across the data range
    pub curve: Vec<(f64, f64)>,
}

/// Fit `selection` to `(xs, ys)` and resample each fit at `points` points.
pub fn interpolate(
    xs: &[f64],
    ys: &[f64],
    selection: MethodSelection,
    points: usize,
    at: Option<f64>,
) -> Result<Interpolation> {
    if points < 2 {
        return Err(CliError::invalid_argument(format!(
            "curve needs at least 2 points, got {}",
            points
        )));
    }

    let mut reports = Vec::new();
    let mut curve = Vec::new();
    for kind in selection.kinds() {
        let started = Instant::now();
        let mut interp = kind.build();
        if let Err(e) = interp.set_data(xs, ys) {
            if selection == MethodSelection::All {
                warn!(method = %kind, error = %e, "Skipping method");
                continue;
            }
            return Err(e.into());
        }
        let (x_min, x_max) = interp.domain()?;
        let curve_y = interp.interpolate_range(x_min, x_max, points)?;
        let elapsed_ms = started.elapsed().as_secs_f64() * 1e3;

        let mut max_error = 0.0_f64;
        for (&x, &y) in xs.iter().zip(ys) {
            max_error = max_error.max((interp.interpolate(x)? - y).abs());
        }

        if curve.is_empty() {
            let step = (x_max - x_min) / (points - 1) as f64;
            curve = curve_y
                .iter()
                .enumerate()
                .map(|(i, &y)| {
                    let x = if i == points - 1 { x_max } else { x_min + step * i as f64 };
                    (x, y)
                })
                .collect();
        }

        reports.push(InterpolationReport {
            method: kind,
            rmse: interp.calculate_error(xs, ys)?,
            max_error,
            elapsed_ms,
            equation: interp.polynomial_equation(),
            value_at: at.map(|x| interp.interpolate(x)).transpose()?,
        });
    }

    if reports.is_empty() {
        return Err(CliError::invalid_argument(format!(
            "no interpolation method could fit {} points",
            xs.len()
        )));
    }
    Ok(Interpolation { reports, curve })
}

/// Write the comparison as pretty JSON.
fn write_report(path: &Path, reports: &[InterpolationReport]) -> Result<()> {
    let file = File::create(path)?;
    serde_json::to_writer_pretty(file, reports)?;
    Ok(())
}

/// Run the interpolate command
#[allow(clippy::too_many_arguments)]
pub fn run(
    input: &Path,
    method: &str,
    points: usize,
    at: Option<f64>,
    output: Option<&Path>,
    report: Option<&Path>,
    format: OutputFormat,
) -> Result<()> {
    let selection = MethodSelection::parse(method)?;
    let (xs, ys) = read_points(input)?;
    info!(input = %input.display(), points = xs.len(), method, "Interpolating");

    let result = interpolate(&xs, &ys, selection, points, at)?;

    if let Some(path) = output {
        write_points(path, result.curve.iter().copied())?;
        info!(
            output = %path.display(),
            method = %result.reports[0].method,
            "Curve written"
        );
    }
    if let Some(path) = report {
        write_report(path, &result.reports)?;
        info!(report = %path.display(), "Comparison written");
    }

    match format {
        OutputFormat::Json => print_json(&result.reports),
        OutputFormat::Table => {
            let mut headers = vec!["Method", "RMSE", "Max error", "Time (ms)"];
            if at.is_some() {
                headers.push("Value");
            }
            let mut table = Table::new(headers);
            for r in &result.reports {
                let mut row = vec![
                    r.method.to_string(),
                    cell(r.rmse),
                    cell(r.max_error),
                    format!("{:.3}", r.elapsed_ms),
                ];
                if let Some(value) = r.value_at {
                    row.push(cell(value));
                }
                table.row(row);
            }
            table.print();
            for r in &result.reports {
                println!("{}: {}", r.method, r.equation);
            }
            Ok(())
        }
    }
}
