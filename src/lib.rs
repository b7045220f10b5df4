//! Box-counting dimension of 2D point sets.
//!
//! The square `[-maxsize, maxsize]^2` is split into `n x n` equal boxes for every resolution
//! `n = 1..=N`. For each resolution the number of boxes holding at least one point is counted,
//! and the dimension is estimated from `ln(count) / ln(1 / boxlen)`.
//!
//! ```no_run
//! use boxdim::{load_points, BoundingRegion, DimensionEstimator, LoadOptions};
//!
//! let points = load_points("stadout", &LoadOptions::default())?;
//! let _records = DimensionEstimator::new(BoundingRegion::new(10.)?).run(&points, 10)?;
//! # Ok::<(), boxdim::BoxDimError>(())
//! ```

pub mod config;
pub mod counters;
pub mod data;
pub mod error;
pub mod estimator;
pub mod geometry;
pub mod render;
pub mod report;

pub use config::{Config, LoadOptions, ReportOptions, DEFAULT_MAXSIZE, DEFAULT_OUTPUT};
pub use counters::{CountBoxes, Counter, Grid, IndexCounter, ScanCounter};
pub use data::{load_points, read_points};
pub use error::{BoxDimError, Result};
pub use estimator::{dimension_estimate, DimensionEstimator, ResultRecord};
pub use geometry::points::PointSet;
pub use geometry::{BoundingRegion, Extent, Point};
pub use report::{save_report, write_report};

/// Receives every [`ResultRecord`] as soon as the estimator has computed it.
pub trait Observe {
    fn observe(&mut self, record: &ResultRecord);
}

impl<F> Observe for F
where
    F: FnMut(&ResultRecord),
{
    fn observe(&mut self, record: &ResultRecord) {
        self(record)
    }
}
