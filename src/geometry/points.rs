use ndarray::{s, Array2, Axis};
use ndarray_stats::QuantileExt;

use crate::error::{BoxDimError, Result};
use crate::geometry::{BoundingRegion, Extent, Point};

/// An ordered set of 2D points, stored as an `N x 2` array (x in column 0, y in column 1).
///
/// Duplicates are kept. The set is read-only once constructed.
#[derive(Clone, Debug, PartialEq)]
pub struct PointSet {
    positions: Array2<f64>,
}

impl PointSet {
    pub fn new(positions: Array2<f64>) -> Result<Self> {
        if positions.ncols() != 2 {
            return Err(BoxDimError::InvalidShape(positions.shape().to_vec()));
        }
        Ok(Self { positions })
    }

    pub fn empty() -> Self {
        Self {
            positions: Array2::zeros((0, 2)),
        }
    }

    pub fn len(&self) -> usize {
        self.positions.nrows()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Get the location of a point.
    pub fn point(&self, i: usize) -> Point {
        Point(self.positions[[i, 0]], self.positions[[i, 1]])
    }

    pub fn iter(&self) -> impl Iterator<Item = Point> + '_ {
        self.positions
            .axis_iter(Axis(0))
            .map(|row| Point(row[0], row[1]))
    }

    /// The extent that encompasses all points, `None` for an empty set or if a coordinate is NaN.
    pub fn extent(&self) -> Option<Extent> {
        let xs = self.positions.slice(s![.., 0]);
        let ys = self.positions.slice(s![.., 1]);
        Some(Extent(
            Point(*xs.min().ok()?, *ys.min().ok()?),
            Point(*xs.max().ok()?, *ys.max().ok()?),
        ))
    }

    /// Number of points that can never be counted in any box of `region`.
    pub fn count_outside(&self, region: &BoundingRegion) -> usize {
        self.iter().filter(|p| !region.contains(*p)).count()
    }
}

impl From<Vec<Point>> for PointSet {
    fn from(points: Vec<Point>) -> Self {
        let mut positions = Array2::zeros((points.len(), 2));
        for (i, p) in points.iter().enumerate() {
            positions[[i, 0]] = p.x();
            positions[[i, 1]] = p.y();
        }
        Self { positions }
    }
}
