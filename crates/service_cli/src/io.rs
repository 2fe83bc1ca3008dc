//! CSV input and output.
//!
//! Signals are stored as `index,value` rows; sampled functions and user
//! data points as `x,y`.

use crate::{CliError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// One sample of a signal.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SignalRow {
    /// Position in the signal
    pub index: usize,
    /// Sample value
    pub value: f64,
}

/// One point of a sampled function.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointRow {
    /// Abscissa
    pub x: f64,
    /// Function value
    pub y: f64,
}

/// Read signal values from the `value` column of a CSV file with headers.
///
/// A file with a single column is read regardless of its header.
pub fn read_signal(path: &Path) -> Result<Vec<f64>> {
    if !path.exists() {
        return Err(CliError::FileNotFound(path.display().to_string()));
    }

    let mut reader = csv::Reader::from_path(path)?;
    let headers = reader.headers()?.clone();
    let column = match headers.iter().position(|h| h.trim() == "value") {
        Some(column) => column,
        None if headers.len() == 1 => 0,
        None => {
            return Err(CliError::invalid_argument(format!(
                "{}: no 'value' column in header '{}'",
                path.display(),
                headers.iter().collect::<Vec<_>>().join(",")
            )))
        }
    };

    let mut values = Vec::new();
    for (row, record) in reader.records().enumerate() {
        let record = record?;
        let field = record.get(column).unwrap_or("").trim();
        let value: f64 = field.parse().map_err(|_| {
            CliError::invalid_argument(format!(
                "{}: row {}: '{}' is not a number",
                path.display(),
                row + 1,
                field
            ))
        })?;
        values.push(value);
    }
    Ok(values)
}

/// Read data points from the `x` and `y` columns of a CSV file with headers.
///
/// Header names are matched case-insensitively. A two-column file is read
/// positionally when its header names neither column.
pub fn read_points(path: &Path) -> Result<(Vec<f64>, Vec<f64>)> {
    if !path.exists() {
        return Err(CliError::FileNotFound(path.display().to_string()));
    }

    let mut reader = csv::Reader::from_path(path)?;
    let headers = reader.headers()?.clone();
    let find = |name: &str| headers.iter().position(|h| h.trim().eq_ignore_ascii_case(name));
    let (x_col, y_col) = match (find("x"), find("y")) {
        (Some(x), Some(y)) => (x, y),
        _ if headers.len() == 2 => (0, 1),
        _ => {
            return Err(CliError::invalid_argument(format!(
                "{}: expected 'x' and 'y' columns in header '{}'",
                path.display(),
                headers.iter().collect::<Vec<_>>().join(",")
            )))
        }
    };

    let mut xs = Vec::new();
    let mut ys = Vec::new();
    for (row, record) in reader.records().enumerate() {
        let record = record?;
        let parse = |column: usize| -> Result<f64> {
            let field = record.get(column).unwrap_or("").trim();
            field.parse().map_err(|_| {
                CliError::invalid_argument(format!(
                    "{}: row {}: '{}' is not a number",
                    path.display(),
                    row + 1,
                    field
                ))
            })
        };
        xs.push(parse(x_col)?);
        ys.push(parse(y_col)?);
    }

    if xs.is_empty() {
        return Err(CliError::invalid_argument(format!(
            "{}: no data points",
            path.display()
        )));
    }
    Ok((xs, ys))
}

/// Write signal values as `index,value` rows.
pub fn write_signal(path: &Path, values: &[f64]) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)?;
    for (index, &value) in values.iter().enumerate() {
        writer.serialize(SignalRow { index, value })?;
    }
    writer.flush()?;
    Ok(())
}

/// Write sampled points as `x,y` rows.
pub fn write_points(path: &Path, points: impl IntoIterator<Item = (f64, f64)>) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)?;
    for (x, y) in points {
        writer.serialize(PointRow { x, y })?;
    }
    writer.flush()?;
    Ok(())
}
