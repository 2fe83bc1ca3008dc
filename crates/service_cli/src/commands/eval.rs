//! Eval command implementation
//!
//! Evaluates an expression at one or more points.

use curvefit_core::expression::Expression;
use serde::Serialize;
use tracing::info;

use crate::output::{cell, print_json, OutputFormat, Table};
use crate::{CliError, Result};

/// One evaluated point.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Evaluation {
    /// Input
    pub x: f64,
    /// Expression value
    pub y: f64,
}

/// Evaluate `expr` at every `xs`.
pub fn evaluate(expr: &str, xs: &[f64]) -> Result<Vec<Evaluation>> {
    if xs.is_empty() {
        return Err(CliError::invalid_argument("at least one --x value is required"));
    }
    let expression = Expression::parse(expr)?;
    Ok(xs
        .iter()
        .map(|&x| Evaluation {
            x,
            y: expression.evaluate(x),
        })
        .collect())
}

/// Run the eval command
pub fn run(expr: &str, xs: &[f64], format: OutputFormat) -> Result<()> {
    info!(expression = expr, points = xs.len(), "Evaluating");
    let rows = evaluate(expr, xs)?;

    match format {
        OutputFormat::Json => print_json(&rows),
        OutputFormat::Table => {
            let mut table = Table::new(["x", "f(x)"]);
            for row in &rows {
                table.row([cell(row.x), cell(row.y)]);
            }
            table.print();
            Ok(())
        }
    }
}
