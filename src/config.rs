use std::path::PathBuf;

use crate::counters::Counter;
use crate::error::Result;
use crate::geometry::BoundingRegion;

/// Half side length of the bounding region unless configured otherwise.
pub const DEFAULT_MAXSIZE: f64 = 10.;

/// Report file name unless configured otherwise.
pub const DEFAULT_OUTPUT: &str = "boxdim.dat";

/// How to read points from a whitespace separated data table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadOptions {
    /// Leading lines to skip (column headers).
    pub skip_rows: usize,
    /// Zero based column holding the x coordinate.
    pub x_column: usize,
    /// Zero based column holding the y coordinate.
    pub y_column: usize,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            skip_rows: 1,
            x_column: 5,
            y_column: 6,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportOptions {
    /// Write the `boxdim` column.
    pub include_dimension: bool,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            include_dimension: true,
        }
    }
}

/// Everything a single box counting run needs besides the data file and the resolution.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub maxsize: f64,
    pub output: PathBuf,
    pub counter: Counter,
    pub load: LoadOptions,
    pub report: ReportOptions,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            maxsize: DEFAULT_MAXSIZE,
            output: PathBuf::from(DEFAULT_OUTPUT),
            counter: Counter::default(),
            load: LoadOptions::default(),
            report: ReportOptions::default(),
        }
    }
}

impl Config {
    pub fn region(&self) -> Result<BoundingRegion> {
        BoundingRegion::new(self.maxsize)
    }
}
