use std::num::NonZeroUsize;
use std::ops::RangeInclusive;

use crate::counters::{CountBoxes, Grid};
use crate::geometry::points::PointSet;
use crate::geometry::BoundingRegion;

/// Box counter that computes the box of every point directly, `O(n^2 + |points|)`.
///
/// The index guess `floor((v + maxsize) / boxlen)` may be off by one near box edges due to
/// rounding, so the guess and both neighbours are re-checked with the same edge expressions
/// the [`super::ScanCounter`] uses. Points outside the open region are skipped before, as in the
/// scan. The resulting grid is identical to the scan's.
#[derive(Debug, Clone, Copy, Default)]
pub struct IndexCounter;

/// Box indices along one axis whose open interval could contain `v`.
fn candidates(v: f64, lower: f64, box_len: f64, n: usize) -> RangeInclusive<usize> {
    let guess = ((v - lower) / box_len).floor();
    if !guess.is_finite() {
        // empty range
        return 1..=0;
    }
    let last = (n - 1) as f64;
    let guess = guess.clamp(0., last) as usize;
    guess.saturating_sub(1)..=usize::min(guess + 1, n - 1)
}

/// Strict open interval test `origin < v < origin + box_len`.
fn inside(v: f64, origin: f64, box_len: f64) -> bool {
    v > origin && v < origin + box_len
}

impl CountBoxes for IndexCounter {
    fn grid(&self, points: &PointSet, n: NonZeroUsize, region: &BoundingRegion) -> Grid {
        let mut grid = Grid::new(n);
        let box_len = region.box_len(n.get());
        let lower = region.lower_left();

        for p in points.iter().filter(|p| region.contains(*p)) {
            let columns = candidates(p.x(), lower.x(), box_len, n.get())
                .filter(|&k| inside(p.x(), region.box_origin(box_len, k, 0).x(), box_len));
            for k in columns {
                let rows = candidates(p.y(), lower.y(), box_len, n.get())
                    .filter(|&j| inside(p.y(), region.box_origin(box_len, k, j).y(), box_len));
                for j in rows {
                    grid.increment(k, j);
                }
            }
        }
        grid
    }
}
