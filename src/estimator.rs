use std::num::NonZeroUsize;

use log::{debug, info, warn};

use crate::counters::{CountBoxes, Counter};
use crate::error::{BoxDimError, Result};
use crate::geometry::points::PointSet;
use crate::geometry::BoundingRegion;
use crate::Observe;

/// Box counting result for a single grid resolution.
#[derive(Debug, Clone, PartialEq)]
pub struct ResultRecord {
    /// Boxes per side, `n`.
    pub resolution: usize,
    /// Total number of boxes, `n * n`.
    pub nboxes: usize,
    pub boxlen: f64,
    pub inverse_boxlen: f64,
    /// Number of boxes holding at least one point.
    pub count: usize,
    /// `ln(count) / ln(1 / boxlen)`, `None` where undefined.
    pub dimension: Option<f64>,
}

impl ResultRecord {
    pub fn new(resolution: usize, boxlen: f64, count: usize) -> Self {
        Self {
            resolution,
            nboxes: resolution * resolution,
            boxlen,
            inverse_boxlen: 1. / boxlen,
            count,
            dimension: dimension_estimate(count, boxlen),
        }
    }
}

/// Ratio `ln(count) / ln(1 / boxlen)`.
///
/// Undefined for an empty grid (`ln(0)`) and for `boxlen == 1`, where the denominator vanishes.
pub fn dimension_estimate(count: usize, boxlen: f64) -> Option<f64> {
    if count == 0 {
        return None;
    }
    let d = (count as f64).ln() / (1. / boxlen).ln();
    d.is_finite().then_some(d)
}

/// Sweeps grid resolutions `1..=N` over a fixed [`BoundingRegion`] and records the occupied box
/// count for each of them.
#[derive(Debug, Clone)]
pub struct DimensionEstimator<C = Counter> {
    region: BoundingRegion,
    counter: C,
}

impl DimensionEstimator<Counter> {
    pub fn new(region: BoundingRegion) -> Self {
        Self {
            region,
            counter: Counter::default(),
        }
    }
}

impl<C: CountBoxes> DimensionEstimator<C> {
    pub fn with_counter(region: BoundingRegion, counter: C) -> Self {
        Self { region, counter }
    }

    /// Box count at a single resolution.
    pub fn record(&self, points: &PointSet, n: NonZeroUsize) -> ResultRecord {
        let count = self.counter.count_occupied(points, n, &self.region);
        ResultRecord::new(n.get(), self.region.box_len(n.get()), count)
    }

    /// One record per resolution `1..=max_resolution`, in increasing order.
    pub fn run(&self, points: &PointSet, max_resolution: usize) -> Result<Vec<ResultRecord>> {
        self.observe(points, max_resolution, &mut |_: &ResultRecord| {})
    }

    /// Same as [`Self::run`], handing every record to `observer` as soon as it is computed.
    pub fn observe(
        &self,
        points: &PointSet,
        max_resolution: usize,
        observer: &mut impl Observe,
    ) -> Result<Vec<ResultRecord>> {
        if max_resolution == 0 {
            return Err(BoxDimError::InvalidResolution(max_resolution));
        }

        let outside = points.count_outside(&self.region);
        if outside > 0 {
            warn!(
                "{} of {} points lie on or outside the region [-{m}, {m}]^2 and are never counted",
                outside,
                points.len(),
                m = self.region.maxsize()
            );
        }
        info!(
            "counting boxes for {} points at resolutions 1..={}",
            points.len(),
            max_resolution
        );

        let mut records = Vec::with_capacity(max_resolution);
        for n in (1..=max_resolution).filter_map(NonZeroUsize::new) {
            let record = self.record(points, n);
            match record.dimension {
                Some(d) => debug!("n={} boxlen={} count={} dim={}", n, record.boxlen, record.count, d),
                None => debug!("n={} boxlen={} count={} dim=undefined", n, record.boxlen, record.count),
            }
            observer.observe(&record);
            records.push(record);
        }

        Ok(records)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::counters::{IndexCounter, ScanCounter};
    use crate::geometry::Point;
    use crate::test::random_points;

    fn region() -> BoundingRegion {
        BoundingRegion::new(10.).unwrap()
    }

    #[test]
    fn rejects_zero_resolution() {
        let estimator = DimensionEstimator::new(region());
        let err = estimator.run(&random_points(10, 5., 1), 0).unwrap_err();
        assert!(matches!(err, BoxDimError::InvalidResolution(0)));
    }

    #[test]
    fn one_record_per_resolution() {
        let estimator = DimensionEstimator::new(region());
        let records = estimator.run(&random_points(200, 9., 3), 12).unwrap();
        assert_eq!(records.len(), 12);
        for (i, r) in records.iter().enumerate() {
            let n = i + 1;
            assert_eq!(r.resolution, n);
            assert_eq!(r.nboxes, n * n);
            assert_eq!(r.boxlen, 20. / n as f64);
            assert_eq!(r.inverse_boxlen, 1. / r.boxlen);
            assert!(r.count <= r.nboxes);
        }
    }

    #[test]
    fn three_point_scenario() {
        let points = PointSet::from(vec![Point(0., 0.), Point(5., 5.), Point(-5., -5.)]);
        let records = DimensionEstimator::new(region()).run(&points, 2).unwrap();
        assert_eq!(records[0].count, 1);
        assert_eq!(records[1].count, 2);
        assert_eq!(records[1].boxlen, 10.);
        let expected = 2f64.ln() / 0.1f64.ln();
        assert_eq!(records[1].dimension, Some(expected));
    }

    #[test]
    fn empty_grid_has_no_dimension_and_run_continues() {
        let points = PointSet::from(vec![Point(30., 30.), Point(0., 0.)]);
        let records = DimensionEstimator::new(region()).run(&points, 4).unwrap();
        assert_eq!(records.len(), 4);
        assert_eq!(records[0].count, 1);
        // the origin is on a shared corner for every even n
        assert_eq!(records[1].count, 0);
        assert_eq!(records[1].dimension, None);
        assert_eq!(records[2].count, 1);
        assert_eq!(records[3].dimension, None);
    }

    #[test]
    fn dimension_definition() {
        assert_eq!(dimension_estimate(0, 0.5), None);
        assert_eq!(dimension_estimate(4, 1.), None);
        assert!((dimension_estimate(4, 0.5).unwrap() - 2.).abs() < 1e-12);
        assert_eq!(dimension_estimate(1, 0.5), Some(0.));
        let d = dimension_estimate(30, 0.2).unwrap();
        assert!(d > 0.);
        assert_eq!(d, 30f64.ln() / (1. / 0.2f64).ln());
    }

    #[test]
    fn fine_grids_yield_positive_dimension() {
        let region = BoundingRegion::new(0.5).unwrap();
        let points = random_points(400, 0.5, 17);
        let records = DimensionEstimator::new(region).run(&points, 10).unwrap();
        for r in records.iter().filter(|r| r.count > 1 && r.boxlen < 1.) {
            assert!(r.dimension.unwrap() > 0., "n={}", r.resolution);
        }
    }

    #[test]
    fn deterministic() {
        let points = random_points(300, 10., 11);
        let estimator = DimensionEstimator::new(region());
        let first = estimator.run(&points, 15).unwrap();
        let second = estimator.run(&points, 15).unwrap();
        assert_eq!(first, second);
        assert_eq!(format!("{:?}", first), format!("{:?}", second));
    }

    #[test]
    fn counters_produce_same_records() {
        let points = random_points(250, 10., 5);
        let scan = DimensionEstimator::with_counter(region(), ScanCounter).run(&points, 10).unwrap();
        let index = DimensionEstimator::with_counter(region(), IndexCounter).run(&points, 10).unwrap();
        assert_eq!(scan, index);
    }

    #[test]
    fn observer_sees_every_record_in_order() {
        let points = random_points(50, 10., 23);
        let mut seen = vec![];
        let records = DimensionEstimator::new(region())
            .observe(&points, 6, &mut |r: &ResultRecord| seen.push(r.resolution))
            .unwrap();
        assert_eq!(seen, vec![1, 2, 3, 4, 5, 6]);
        assert_eq!(records.len(), 6);
    }
}
