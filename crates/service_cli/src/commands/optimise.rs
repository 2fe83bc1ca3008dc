//! Optimise command implementation
//!
//! Searches for the smallest Chebyshev sample count meeting an error target,
//! or tabulates the error across a range of sample counts.

use curvefit_core::expression::Expression;
use curvefit_core::math::interpolators::InterpolatorKind;
use curvefit_optimiser::{DegreeOptimiser, DegreeSearchConfig};
use tracing::info;

use crate::output::{cell, print_json, OutputFormat, Table};
use crate::Result;

/// Degree search settings.
#[derive(Debug, Clone, PartialEq)]
pub struct OptimiseArgs {
    /// Function to approximate
    pub expr: String,
    /// Interval start
    pub x_min: f64,
    /// Interval end
    pub x_max: f64,
    /// Largest acceptable max error
    pub target: f64,
    /// Smallest sample count tried
    pub min_n: usize,
    /// Largest sample count tried
    pub max_n: usize,
    /// Interpolation method
    pub method: InterpolatorKind,
    /// Error-measurement grid size
    pub test_points: usize,
    /// Tabulate every count instead of searching
    pub analyse: bool,
}

impl OptimiseArgs {
    fn optimiser(&self) -> Result<DegreeOptimiser> {
        let expression = Expression::parse(&self.expr)?;
        let config = DegreeSearchConfig::new().with_test_points(self.test_points);
        Ok(DegreeOptimiser::new(expression, self.x_min, self.x_max, self.method)?.with_config(config))
    }
}

/// Run the optimise command
pub fn run(args: &OptimiseArgs, format: OutputFormat) -> Result<()> {
    info!(
        expression = %args.expr,
        method = %args.method,
        target = args.target,
        min_n = args.min_n,
        max_n = args.max_n,
        "Starting degree search"
    );
    let optimiser = args.optimiser()?;

    if args.analyse {
        let rows = optimiser.analyse_degree_range(args.min_n, args.max_n)?;
        return match format {
            OutputFormat::Json => print_json(&rows),
            OutputFormat::Table => {
                let mut table = Table::new(["n", "Max error", "Mean error"]);
                for row in &rows {
                    table.row([row.n.to_string(), cell(row.max_error), cell(row.mean_error)]);
                }
                table.print();
                Ok(())
            }
        };
    }

    let result = optimiser.find_minimum_degree(args.target, args.min_n, args.max_n)?;
    match format {
        OutputFormat::Json => print_json(&result),
        OutputFormat::Table => {
            let mut table = Table::new(["n", "Max error"]);
            for trial in &result.history {
                table.row([trial.n.to_string(), cell(trial.max_error)]);
            }
            table.print();
            println!(
                "{} with {} samples (polynomial degree {}): max error {} (target {} {})",
                args.method,
                result.achieved_n,
                result.polynomial_degree(),
                cell(result.error),
                cell(args.target),
                if result.target_met { "met" } else { "not met" }
            );
            Ok(())
        }
    }
}
