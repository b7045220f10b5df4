//! Reading point sets from whitespace separated text tables.
//!
//! ```text
//! i         x         y         a         vx        vy        ...
//! 0         0.1       0.2       ...
//! ```
//! After `skip_rows` header lines every non-blank line is a data row. Lines starting with `#`
//! are comments. Only the two configured columns are parsed, but all rows must have the same
//! number of columns.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use log::{info, warn};
use ndarray::Array2;
use noisy_float::types::R64;

use crate::config::LoadOptions;
use crate::error::{BoxDimError, Result};
use crate::geometry::points::PointSet;

/// Load the point set stored in the table at `path`.
pub fn load_points(path: impl AsRef<Path>, options: &LoadOptions) -> Result<PointSet> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| BoxDimError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let points = read_points(BufReader::new(file), options)?;
    info!("loaded {} points from {}", points.len(), path.display());
    Ok(points)
}

pub fn read_points(reader: impl BufRead, options: &LoadOptions) -> Result<PointSet> {
    let needed = usize::max(options.x_column, options.y_column) + 1;
    let mut columns: Option<usize> = None;
    let mut coords: Vec<f64> = vec![];

    for (i, line) in reader.lines().enumerate().skip(options.skip_rows) {
        let line = line?;
        let number = i + 1;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        let fields: Vec<&str> = trimmed.split_whitespace().collect();
        let expected = *columns.get_or_insert(fields.len());
        if fields.len() != expected {
            return Err(BoxDimError::ColumnCount {
                line: number,
                expected,
                got: fields.len(),
            });
        }
        if fields.len() < needed {
            return Err(BoxDimError::ColumnCount {
                line: number,
                expected: needed,
                got: fields.len(),
            });
        }

        coords.push(parse_coordinate(fields[options.x_column], number, options.x_column)?);
        coords.push(parse_coordinate(fields[options.y_column], number, options.y_column)?);
    }

    if coords.is_empty() {
        warn!("data table holds no rows");
        return Ok(PointSet::empty());
    }

    let rows = coords.len() / 2;
    let positions = Array2::from_shape_vec((rows, 2), coords)
        .map_err(|_| BoxDimError::InvalidShape(vec![rows, 2]))?;
    PointSet::new(positions)
}

fn parse_coordinate(field: &str, line: usize, column: usize) -> Result<f64> {
    let value: f64 = field.parse().map_err(|_| BoxDimError::MalformedRow {
        line,
        reason: format!("column {} is not a number: {:?}", column, field),
    })?;
    R64::try_new(value)
        .map(|v| v.raw())
        .ok_or_else(|| BoxDimError::MalformedRow {
            line,
            reason: format!("column {} is not finite: {}", column, value),
        })
}
