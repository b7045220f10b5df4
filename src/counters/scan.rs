use std::num::NonZeroUsize;

use crate::counters::{CountBoxes, Grid};
use crate::geometry::points::PointSet;
use crate::geometry::{BoundingRegion, Point};

/// Reference box counter that tests every point against every box.
///
/// ```text
///   boxlen := 2 * maxsize / n
///   for j := 0 to n-1 do
///       for k := 0 to n-1 do begin
///           box := (-maxsize + k * boxlen, -maxsize + j * boxlen)
///           for p in points do
///               if box.x < p.x < box.x + boxlen and box.y < p.y < box.y + boxlen then
///                   grid[k][j] := grid[k][j] + 1
///       end
/// ```
/// Points outside the open region are skipped up front: `box.x + boxlen` of the last box may
/// round past `maxsize`, and such a point must still never be counted.
///
/// Runs in `O(n^2 * |points|)`. Kept as the ground truth for [`super::IndexCounter`].
#[derive(Debug, Clone, Copy, Default)]
pub struct ScanCounter;

fn check_in(origin: Point, box_len: f64, p: Point) -> bool {
    p.x() > origin.x()
        && p.x() < origin.x() + box_len
        && p.y() > origin.y()
        && p.y() < origin.y() + box_len
}

impl CountBoxes for ScanCounter {
    fn grid(&self, points: &PointSet, n: NonZeroUsize, region: &BoundingRegion) -> Grid {
        let mut grid = Grid::new(n);
        let box_len = region.box_len(n.get());
        for j in 0..n.get() {
            for k in 0..n.get() {
                let origin = region.box_origin(box_len, k, j);
                for p in points.iter().filter(|p| region.contains(*p)) {
                    if check_in(origin, box_len, p) {
                        grid.increment(k, j);
                    }
                }
            }
        }
        grid
    }
}
