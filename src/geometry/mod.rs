pub mod points;

use crate::error::{BoxDimError, Result};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point(pub f64, pub f64);

impl Point {
    pub fn x(&self) -> f64 {
        self.0
    }
    pub fn y(&self) -> f64 {
        self.1
    }
}

/// Axis aligned rectangle given by its lower left and upper right corner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Extent(pub Point, pub Point);

impl Extent {
    pub fn lower_left(&self) -> Point {
        self.0
    }

    pub fn upper_right(&self) -> Point {
        self.1
    }
}

/// The fixed square `[-maxsize, maxsize] x [-maxsize, maxsize]` that is partitioned into boxes.
///
/// All membership tests are made against this region, independent of where the loaded
/// points actually lie. Points on or outside its border never end up in any box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingRegion {
    maxsize: f64,
}

impl BoundingRegion {
    pub fn new(maxsize: f64) -> Result<Self> {
        if maxsize.is_finite() && maxsize > 0. {
            Ok(Self { maxsize })
        } else {
            Err(BoxDimError::InvalidMaxsize(maxsize))
        }
    }

    /// Half of the side length.
    pub fn maxsize(&self) -> f64 {
        self.maxsize
    }

    pub fn side(&self) -> f64 {
        2. * self.maxsize
    }

    pub fn lower_left(&self) -> Point {
        Point(-self.maxsize, -self.maxsize)
    }

    pub fn upper_right(&self) -> Point {
        Point(self.maxsize, self.maxsize)
    }

    /// Strict containment, the border itself is outside.
    pub fn contains(&self, p: Point) -> bool {
        -self.maxsize < p.x() && p.x() < self.maxsize && -self.maxsize < p.y() && p.y() < self.maxsize
    }

    /// Side length of a single box when the region is split into `n x n` boxes.
    pub fn box_len(&self, n: usize) -> f64 {
        self.maxsize * 2. / n as f64
    }

    /// Lower left corner of box `(k, j)` (column, row) for boxes of side `box_len`.
    ///
    /// Every counter has to go through this exact expression, otherwise points close to a
    /// box edge may be classified differently due to rounding.
    pub fn box_origin(&self, box_len: f64, k: usize, j: usize) -> Point {
        Point(
            -self.maxsize + k as f64 * box_len,
            -self.maxsize + j as f64 * box_len,
        )
    }
}
