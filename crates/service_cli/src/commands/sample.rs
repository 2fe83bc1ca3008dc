//! Sample command implementation
//!
//! Samples an expression on a uniform or Chebyshev grid.

use curvefit_core::expression::Expression;
use curvefit_core::sampling::{SampleGenerator, Samples, SpacingMode};
use std::path::Path;
use tracing::info;

use crate::io::write_points;
use crate::output::{cell, print_json, OutputFormat, Table};
use crate::Result;

/// Sample `expr` at `n` points of `[x_min, x_max]`.
pub fn sample(expr: &str, x_min: f64, x_max: f64, n: usize, spacing: SpacingMode) -> Result<Samples> {
    let expression = Expression::parse(expr)?;
    Ok(SampleGenerator::new(&expression).generate(spacing, x_min, x_max, n)?)
}

/// Run the sample command
pub fn run(
    expr: &str,
    x_min: f64,
    x_max: f64,
    n: usize,
    spacing: SpacingMode,
    output: Option<&Path>,
    format: OutputFormat,
) -> Result<()> {
    info!(expression = expr, x_min, x_max, n, %spacing, "Sampling");
    let samples = sample(expr, x_min, x_max, n, spacing)?;

    if let Some(path) = output {
        write_points(path, samples.iter())?;
        info!(path = %path.display(), points = samples.len(), "Samples written");
        return Ok(());
    }

    match format {
        OutputFormat::Json => print_json(&samples),
        OutputFormat::Table => {
            let mut table = Table::new(["x", "y"]);
            for (x, y) in samples.iter() {
                table.row([cell(x), cell(y)]);
            }
            table.print();
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CliError;

    #[test]
    fn test_sample_to_csv() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("line.csv");

        run("2*x", 0.0, 1.0, 3, SpacingMode::Uniform, Some(&path), OutputFormat::Table).unwrap();
        assert_eq!(
            std::fs::read_to_string(&path).unwrap(),
            "x,y\n0.0,0.0\n0.5,1.0\n1.0,2.0\n"
        );
    }

    #[test]
    fn test_chebyshev_spacing() {
        let samples = sample("x", -1.0, 1.0, 5, SpacingMode::Chebyshev).unwrap();
        assert_eq!(samples.len(), 5);
        assert!(samples.xs.windows(2).all(|w| w[0] < w[1]));
        assert_eq!(samples.xs, samples.ys);
    }

    #[test]
    fn test_invalid_range() {
        assert!(matches!(
            sample("x", 1.0, 0.0, 5, SpacingMode::Uniform),
            Err(CliError::Sampling(_))
        ));
    }
}
