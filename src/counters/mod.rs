//! Box counting: classify every point of a [`PointSet`] into the boxes of an `n x n` grid
//! laid over a [`BoundingRegion`].
//!
//! A point belongs to box `(k, j)` with lower left corner `(x0, y0)` and side `boxlen` iff
//! ```text
//!   x0 < x < x0 + boxlen   and   y0 < y < y0 + boxlen
//! ```
//! Both bounds are strict. A point lying exactly on an edge shared by two boxes is therefore
//! counted in neither of them, and a point on the region border is never counted at all.
//! Both counters below reproduce this rule exactly and yield identical grids.

pub mod index;
pub mod scan;

use std::num::NonZeroUsize;

use ndarray::Array2;

use crate::geometry::points::PointSet;
use crate::geometry::BoundingRegion;

pub use index::IndexCounter;
pub use scan::ScanCounter;

/// Per-box point counts for one resolution, indexed `[k, j]` (column, row).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    counts: Array2<usize>,
}

impl Grid {
    pub fn new(n: NonZeroUsize) -> Self {
        Self {
            counts: Array2::zeros((n.get(), n.get())),
        }
    }

    pub fn resolution(&self) -> usize {
        self.counts.nrows()
    }

    pub fn count(&self, k: usize, j: usize) -> usize {
        self.counts[[k, j]]
    }

    pub fn counts(&self) -> &Array2<usize> {
        &self.counts
    }

    pub(crate) fn increment(&mut self, k: usize, j: usize) {
        self.counts[[k, j]] += 1;
    }

    /// Sum over all boxes. Can be less than the number of points (boundary and outside points).
    pub fn total(&self) -> usize {
        self.counts.sum()
    }

    /// Number of boxes holding at least one point.
    pub fn occupied(&self) -> usize {
        self.counts.iter().filter(|&&c| c > 0).count()
    }
}

pub trait CountBoxes {
    /// Build the occupancy grid of `points` at resolution `n`.
    fn grid(&self, points: &PointSet, n: NonZeroUsize, region: &BoundingRegion) -> Grid;

    /// Number of boxes that hold at least one point.
    fn count_occupied(&self, points: &PointSet, n: NonZeroUsize, region: &BoundingRegion) -> usize {
        self.grid(points, n, region).occupied()
    }
}

/// Which [`CountBoxes`] implementation to use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Counter {
    /// Every point against every box.
    Scan,
    /// Direct box index per point.
    #[default]
    Index,
}

impl CountBoxes for Counter {
    fn grid(&self, points: &PointSet, n: NonZeroUsize, region: &BoundingRegion) -> Grid {
        match self {
            Counter::Scan => ScanCounter.grid(points, n, region),
            Counter::Index => IndexCounter.grid(points, n, region),
        }
    }
}

#[cfg(test)]
mod test {
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    use super::*;
    use crate::geometry::Point;
    use crate::test::random_points;

    fn res(n: usize) -> NonZeroUsize {
        NonZeroUsize::new(n).unwrap()
    }

    fn counters() -> [(&'static str, Counter); 2] {
        [("scan", Counter::Scan), ("index", Counter::Index)]
    }

    #[test]
    fn three_point_scenario() {
        let region = BoundingRegion::new(10.).unwrap();
        let points = PointSet::from(vec![Point(0., 0.), Point(5., 5.), Point(-5., -5.)]);
        for (name, counter) in counters() {
            let grid = counter.grid(&points, res(2), &region);
            // the origin sits on the corner shared by all four boxes
            assert_eq!(grid.occupied(), 2, "{}", name);
            assert_eq!(grid.total(), 2, "{}", name);
            assert_eq!(grid.count(0, 0), 1, "{}", name);
            assert_eq!(grid.count(1, 1), 1, "{}", name);
        }
    }

    #[test]
    fn shared_edge_is_excluded() {
        let region = BoundingRegion::new(10.).unwrap();
        let box_len = region.box_len(2);
        let points = PointSet::from(vec![Point(-10. + box_len, 3.)]);
        for (name, counter) in counters() {
            let grid = counter.grid(&points, res(2), &region);
            assert_eq!(grid.count(0, 1), 0, "{}", name);
            assert_eq!(grid.count(1, 1), 0, "{}", name);
            assert_eq!(grid.occupied(), 0, "{}", name);
        }
    }

    #[test]
    fn single_box_needs_an_inner_point() {
        let region = BoundingRegion::new(10.).unwrap();
        let inside = PointSet::from(vec![Point(9.9, -9.9), Point(20., 0.)]);
        let outside = PointSet::from(vec![Point(10., 0.), Point(-10., -10.), Point(0., 11.)]);
        for (name, counter) in counters() {
            assert_eq!(counter.count_occupied(&inside, res(1), &region), 1, "{}", name);
            assert_eq!(counter.count_occupied(&outside, res(1), &region), 0, "{}", name);
            assert_eq!(counter.count_occupied(&PointSet::empty(), res(1), &region), 0, "{}", name);
        }
    }

    #[test]
    fn outside_points_never_counted() {
        for maxsize in [10., 60., 7.3] {
            let region = BoundingRegion::new(maxsize).unwrap();
            // on the border and one ulp past it, on every side
            let past = f64::from_bits(maxsize.to_bits() + 1);
            let mut border = vec![];
            for v in [maxsize, past, -maxsize, -past] {
                border.push(Point(v, 0.1234));
                border.push(Point(-0.1234, v));
                border.push(Point(v, v));
            }
            border.extend([Point(25. * maxsize, -3.), Point(-3., -60. * maxsize), Point(f64::NAN, 1.)]);
            let points = PointSet::from(border);

            for (name, counter) in counters() {
                for n in 1..=40 {
                    assert_eq!(
                        counter.grid(&points, res(n), &region).total(),
                        0,
                        "{} maxsize={} n={}",
                        name,
                        maxsize,
                        n
                    );
                }
            }
        }
    }

    #[test]
    fn last_box_still_counts_inner_points() {
        let region = BoundingRegion::new(10.).unwrap();
        let below = f64::from_bits(10f64.to_bits() - 1);
        let points = PointSet::from(vec![Point(below, below)]);
        for (name, counter) in counters() {
            for n in [1, 7, 25, 26, 40] {
                let grid = counter.grid(&points, res(n), &region);
                assert_eq!(grid.count(n - 1, n - 1), 1, "{} n={}", name, n);
            }
        }
    }

    #[test]
    fn occupied_is_bounded() {
        let region = BoundingRegion::new(10.).unwrap();
        let points = random_points(500, 12., 7);
        for (name, counter) in counters() {
            for n in 1..=20 {
                let grid = counter.grid(&points, res(n), &region);
                assert_eq!(grid.resolution(), n);
                assert!(grid.occupied() <= n * n, "{} n={}", name, n);
                assert!(grid.total() <= points.len(), "{} n={}", name, n);
            }
        }
    }

    #[test]
    fn scan_and_index_agree_on_random_points() {
        let region = BoundingRegion::new(10.).unwrap();
        let points = random_points(300, 11., 4242);
        for n in 1..=25 {
            assert_eq!(
                ScanCounter.grid(&points, res(n), &region),
                IndexCounter.grid(&points, res(n), &region),
                "n={}",
                n
            );
        }
    }

    #[test]
    fn scan_and_index_agree_on_lattice_points() {
        // many points on box edges: integer and half-integer coordinates
        let mut rng = StdRng::seed_from_u64(99);
        let lattice: Vec<Point> = (0..400)
            .map(|_| {
                Point(
                    rng.gen_range(-24..=24) as f64 * 0.5,
                    rng.gen_range(-24..=24) as f64 * 0.5,
                )
            })
            .collect();
        let points = PointSet::from(lattice);
        for maxsize in [10., 60., 7.3] {
            let region = BoundingRegion::new(maxsize).unwrap();
            for n in 1..=16 {
                assert_eq!(
                    ScanCounter.grid(&points, res(n), &region),
                    IndexCounter.grid(&points, res(n), &region),
                    "maxsize={} n={}",
                    maxsize,
                    n
                );
            }
        }
    }
}
