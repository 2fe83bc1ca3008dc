//! Fit command implementation
//!
//! Samples an expression, fits one or every interpolation method, and
//! reports the error of each fit against the exact function.

use curvefit_core::expression::Expression;
use curvefit_core::math::interpolators::{Interpolator, InterpolatorKind};
use curvefit_core::sampling::{uniform_grid, SampleGenerator, SpacingMode};
use curvefit_optimiser::error_profile;
use serde::Serialize;
use tracing::{info, warn};

use crate::output::{cell, print_json, OutputFormat, Table};
use crate::{CliError, Result};

/// Which interpolation methods to fit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MethodSelection {
    /// One method
    Single(InterpolatorKind),
    /// Every method, skipping those that cannot fit the samples
    All,
}

impl MethodSelection {
    /// Parse `all` or a method name.
    pub fn parse(name: &str) -> Result<Self> {
        if name.trim().eq_ignore_ascii_case("all") {
            Ok(Self::All)
        } else {
            Ok(Self::Single(name.parse()?))
        }
    }

    pub(crate) fn kinds(self) -> Vec<InterpolatorKind> {
        match self {
            Self::Single(kind) => vec![kind],
            Self::All => InterpolatorKind::ALL.to_vec(),
        }
    }
}

/// Quality of one fitted method.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FitReport {
    /// Method
    pub method: InterpolatorKind,
    /// Root-mean-square error over the test grid
    pub rmse: f64,
    /// Largest absolute error over the test grid
    pub max_error: f64,
    /// Mean absolute error over the test grid
    pub mean_error: f64,
    /// Human-readable form of the fitted curve
    pub equation: String,
}

/// Fit `selection` to `n` samples of `expr` and measure each against
/// `test_points` uniform points.
#[allow(clippy::too_many_arguments)]
pub fn fit(
    expr: &str,
    x_min: f64,
    x_max: f64,
    n: usize,
    spacing: SpacingMode,
    selection: MethodSelection,
    test_points: usize,
) -> Result<Vec<FitReport>> {
    let expression = Expression::parse(expr)?;
    let samples = SampleGenerator::new(&expression).generate(spacing, x_min, x_max, n)?;
    let test_x = uniform_grid(x_min, x_max, test_points)?;
    let test_y = expression.evaluate_many(&test_x);

    let mut reports = Vec::new();
    for kind in selection.kinds() {
        let mut interp = kind.build();
        if let Err(e) = interp.set_data(&samples.xs, &samples.ys) {
            if selection == MethodSelection::All {
                warn!(method = %kind, error = %e, "Skipping method");
                continue;
            }
            return Err(e.into());
        }

        let profile = error_profile(&*interp, &expression, x_min, x_max, test_points)?;
        reports.push(FitReport {
            method: kind,
            rmse: interp.calculate_error(&test_x, &test_y)?,
            max_error: profile.max_error,
            mean_error: profile.mean_error,
            equation: interp.polynomial_equation(),
        });
    }

    if reports.is_empty() {
        return Err(CliError::invalid_argument(format!(
            "no interpolation method could fit {} samples",
            n
        )));
    }
    Ok(reports)
}

/// Run the fit command
#[allow(clippy::too_many_arguments)]
pub fn run(
    expr: &str,
    x_min: f64,
    x_max: f64,
    n: usize,
    spacing: SpacingMode,
    method: &str,
    test_points: usize,
    format: OutputFormat,
) -> Result<()> {
    let selection = MethodSelection::parse(method)?;
    info!(expression = expr, n, %spacing, method, "Fitting");
    let reports = fit(expr, x_min, x_max, n, spacing, selection, test_points)?;

    match format {
        OutputFormat::Json => print_json(&reports),
        OutputFormat::Table => {
            let mut table = Table::new(["Method", "RMSE", "Max error", "Mean error"]);
            for r in &reports {
                table.row([
                    r.method.to_string(),
                    cell(r.rmse),
                    cell(r.max_error),
                    cell(r.mean_error),
                ]);
            }
            table.print();
            for r in &reports {
                println!("{}: {}", r.method, r.equation);
            }
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_method_selection() {
        assert_eq!(MethodSelection::parse("ALL").unwrap(), MethodSelection::All);
        assert_eq!(
            MethodSelection::parse("newton").unwrap(),
            MethodSelection::Single(InterpolatorKind::Newton)
        );
        assert!(matches!(
            MethodSelection::parse("akima"),
            Err(CliError::Interpolation(_))
        ));
    }

    #[test]
    fn test_fit_all_on_quadratic() {
        let reports = fit(
            "x^2",
            -1.0,
            1.0,
            5,
            SpacingMode::Uniform,
            MethodSelection::All,
            201,
        )
        .unwrap();

        assert_eq!(reports.len(), 5);
        for r in &reports {
            assert!(r.max_error >= r.mean_error);
            assert!(r.rmse <= r.max_error + 1e-15);
        }
        let newton = reports
            .iter()
            .find(|r| r.method == InterpolatorKind::Newton)
            .unwrap();
        assert!(newton.max_error < 1e-12);
    }

    #[test]
    fn test_all_skips_methods_needing_more_points() {
        let reports = fit(
            "x",
            0.0,
            1.0,
            2,
            SpacingMode::Uniform,
            MethodSelection::All,
            11,
        )
        .unwrap();
        assert_eq!(reports.len(), 4);
        assert!(reports
            .iter()
            .all(|r| r.method != InterpolatorKind::CubicSpline));
    }

    #[test]
    fn test_single_method_failure_surfaces() {
        let result = fit(
            "x",
            0.0,
            1.0,
            2,
            SpacingMode::Uniform,
            MethodSelection::Single(InterpolatorKind::CubicSpline),
            11,
        );
        assert!(matches!(result, Err(CliError::Interpolation(_))));
    }
}
