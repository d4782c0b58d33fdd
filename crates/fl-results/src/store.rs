//! Per-point sample storage.

use fl_core::{SpatialPoint, ensure_finite, ensure_index};
use fl_fields::{LogicalQuantity, QuantitySpec};

use crate::series::SampleSeries;
use crate::{ResultsError, ResultsResult};

/// One configured point and its series, one per logged quantity.
#[derive(Debug, Clone)]
pub struct LogPoint {
    point: SpatialPoint,
    series: Vec<SampleSeries>,
}

impl LogPoint {
    fn new(point: SpatialPoint, quantity_count: usize) -> Self {
        Self {
            point,
            series: vec![SampleSeries::new(); quantity_count],
        }
    }

    pub fn point(&self) -> &SpatialPoint {
        &self.point
    }

    /// Series in configured quantity order.
    pub fn series(&self) -> &[SampleSeries] {
        &self.series
    }
}

/// Values resolved for one step, indexed `[point][quantity]`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StepFrame {
    rows: Vec<Vec<f64>>,
}

impl StepFrame {
    pub fn with_capacity(points: usize) -> Self {
        Self {
            rows: Vec::with_capacity(points),
        }
    }

    /// Append the values of the next point, in quantity order.
    pub fn push_point(&mut self, values: Vec<f64>) {
        self.rows.push(values);
    }

    pub fn rows(&self) -> &[Vec<f64>] {
        &self.rows
    }
}

/// Append-only store of every (point, quantity) series of a run.
#[derive(Debug, Clone)]
pub struct SampleStore {
    quantities: Vec<QuantitySpec>,
    points: Vec<LogPoint>,
}

impl SampleStore {
    pub fn new(points: &[SpatialPoint], quantities: Vec<QuantitySpec>) -> Self {
        let points = points
            .iter()
            .map(|p| LogPoint::new(*p, quantities.len()))
            .collect();
        Self { quantities, points }
    }

    pub fn quantities(&self) -> &[QuantitySpec] {
        &self.quantities
    }

    pub fn points(&self) -> &[LogPoint] {
        &self.points
    }

    pub fn point_count(&self) -> usize {
        self.points.len()
    }

    pub fn quantity_count(&self) -> usize {
        self.quantities.len()
    }

    /// Number of committed steps. Every series has this length.
    pub fn step_count(&self) -> usize {
        self.points
            .first()
            .and_then(|p| p.series.first())
            .map_or(0, SampleSeries::len)
    }

    pub fn series(
        &self,
        point_index: usize,
        quantity_index: usize,
    ) -> ResultsResult<&SampleSeries> {
        let p = ensure_index(point_index, self.points.len(), "point")?;
        let q = ensure_index(quantity_index, self.quantities.len(), "quantity")?;
        Ok(&self.points[p].series[q])
    }

    pub fn series_for(
        &self,
        point_index: usize,
        quantity: LogicalQuantity,
    ) -> ResultsResult<&SampleSeries> {
        let q = self
            .quantities
            .iter()
            .position(|spec| spec.quantity() == quantity)
            .ok_or_else(|| ResultsError::QuantityNotLogged {
                quantity: quantity.name().to_string(),
            })?;
        self.series(point_index, q)
    }

    /// Push one sample. Fails without mutating if `time` is not finite or is
    /// earlier than the series' last sample.
    pub fn append(
        &mut self,
        point_index: usize,
        quantity_index: usize,
        time: f64,
        value: f64,
    ) -> ResultsResult<()> {
        self.check_time(point_index, quantity_index, time)?;
        self.points[point_index].series[quantity_index].push_unchecked(time, value);
        Ok(())
    }

    /// Append a whole step with one shared time. Either every pair gets its
    /// sample or nothing is written.
    pub fn commit_step(&mut self, time: f64, frame: &StepFrame) -> ResultsResult<()> {
        let shape_ok = frame.rows.len() == self.points.len()
            && frame.rows.iter().all(|r| r.len() == self.quantities.len());
        if !shape_ok {
            return Err(ResultsError::FrameShape {
                expected_points: self.points.len(),
                expected_quantities: self.quantities.len(),
                points: frame.rows.len(),
                quantities: frame.rows.first().map_or(0, Vec::len),
            });
        }

        for p in 0..self.points.len() {
            for q in 0..self.quantities.len() {
                self.check_time(p, q, time)?;
            }
        }

        for (log_point, row) in self.points.iter_mut().zip(&frame.rows) {
            for (series, value) in log_point.series.iter_mut().zip(row) {
                series.push_unchecked(time, *value);
            }
        }
        Ok(())
    }

    fn check_time(
        &self,
        point_index: usize,
        quantity_index: usize,
        time: f64,
    ) -> ResultsResult<()> {
        let series = self.series(point_index, quantity_index)?;
        ensure_finite(time, "sample time")?;
        if let Some(last) = series.last_time()
            && time < last
        {
            return Err(ResultsError::RegressedTime {
                point: point_index,
                quantity: self.quantities[quantity_index].label().to_string(),
                last,
                time,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fl_core::FlError;

    fn store(points: usize, labels: &[&str]) -> SampleStore {
        let points: Vec<SpatialPoint> = (0..points)
            .map(|i| SpatialPoint::new(i as f64, 0.0, 0.0).unwrap())
            .collect();
        let quantities = labels.iter().map(|l| QuantitySpec::parse(l).unwrap()).collect();
        SampleStore::new(&points, quantities)
    }

    fn frame(rows: &[&[f64]]) -> StepFrame {
        let mut f = StepFrame::with_capacity(rows.len());
        for r in rows {
            f.push_point(r.to_vec());
        }
        f
    }

    #[test]
    fn append_and_read_back() {
        let mut s = store(2, &["Jmod", "Bmod"]);
        s.append(1, 0, 0.0, 3.0).unwrap();
        s.append(1, 0, 0.5, 4.0).unwrap();
        let series = s.series(1, 0).unwrap();
        assert_eq!(series.times(), &[0.0, 0.5]);
        assert_eq!(series.values(), &[3.0, 4.0]);
        assert!(s.series(0, 0).unwrap().is_empty());
    }

    #[test]
    fn regressed_append_fails_without_mutation() {
        let mut s = store(1, &["Jx"]);
        s.append(0, 0, 1.0, 1.0).unwrap();
        let err = s.append(0, 0, 0.5, 2.0).unwrap_err();
        assert!(matches!(
            err,
            ResultsError::RegressedTime {
                point: 0,
                last: 1.0,
                time: 0.5,
                ..
            }
        ));
        assert_eq!(s.series(0, 0).unwrap().len(), 1);
        assert_eq!(s.series(0, 0).unwrap().values(), &[1.0]);
    }

    #[test]
    fn out_of_range_indices_are_rejected() {
        let mut s = store(1, &["Jx"]);
        assert!(matches!(
            s.append(1, 0, 0.0, 0.0),
            Err(ResultsError::Core(fl_core::FlError::IndexOob { what: "point", .. }))
        ));
        assert!(matches!(
            s.series(0, 3),
            Err(ResultsError::Core(fl_core::FlError::IndexOob { what: "quantity", .. }))
        ));
    }

    #[test]
    fn series_for_looks_up_by_quantity() {
        let mut s = store(1, &["Jmod", "Bmod"]);
        s.append(0, 1, 0.0, 2.0).unwrap();
        let bmod = LogicalQuantity::parse("BMOD").unwrap();
        assert_eq!(s.series_for(0, bmod).unwrap().values(), &[2.0]);
        let jx = LogicalQuantity::parse("JX").unwrap();
        assert!(matches!(
            s.series_for(0, jx),
            Err(ResultsError::QuantityNotLogged { .. })
        ));
    }

    #[test]
    fn commit_step_keeps_lengths_synchronised() {
        let mut s = store(2, &["Jmod", "Bmod"]);
        s.commit_step(0.0, &frame(&[&[1.0, 2.0], &[3.0, 4.0]])).unwrap();
        s.commit_step(0.1, &frame(&[&[5.0, 6.0], &[7.0, 8.0]])).unwrap();
        assert_eq!(s.step_count(), 2);
        for lp in s.points() {
            for series in lp.series() {
                assert_eq!(series.times(), &[0.0, 0.1]);
            }
        }
        assert_eq!(s.series(1, 1).unwrap().values(), &[4.0, 8.0]);
    }

    #[test]
    fn commit_step_is_all_or_nothing() {
        let mut s = store(2, &["Jx"]);
        s.commit_step(1.0, &frame(&[&[1.0], &[1.0]])).unwrap();
        // Second point lags behind the first after a direct append.
        s.append(0, 0, 2.0, 9.0).unwrap();
        let err = s.commit_step(1.5, &frame(&[&[0.0], &[0.0]])).unwrap_err();
        assert!(matches!(err, ResultsError::RegressedTime { point: 0, .. }));
        assert_eq!(s.series(1, 0).unwrap().len(), 1);
    }

    #[test]
    fn nan_time_is_rejected_without_mutation() {
        let mut s = store(1, &["Bmod"]);
        s.append(0, 0, 1.0, 1.0).unwrap();
        let err = s.append(0, 0, f64::NAN, 2.0).unwrap_err();
        assert!(matches!(err, ResultsError::Core(FlError::NonFinite { .. })));
        assert!(s.commit_step(f64::NAN, &frame(&[&[3.0]])).is_err());

        let series = s.series(0, 0).unwrap();
        assert_eq!(series.times(), &[1.0]);
        assert_eq!(series.values(), &[1.0]);
        // Order is still enforced afterwards.
        assert!(s.append(0, 0, 0.5, 4.0).is_err());
    }

    #[test]
    fn commit_step_rejects_wrong_shape() {
        let mut s = store(2, &["Jx", "Bx"]);
        let err = s.commit_step(0.0, &frame(&[&[1.0, 2.0]])).unwrap_err();
        assert!(matches!(
            err,
            ResultsError::FrameShape {
                expected_points: 2,
                points: 1,
                ..
            }
        ));
        assert_eq!(s.step_count(), 0);
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn regressed_append_changes_nothing(
                times in prop::collection::vec(0.0f64..100.0, 1..20),
                back in 1e-6f64..10.0,
            ) {
                let mut sorted = times.clone();
                sorted.sort_by(f64::total_cmp);
                let mut s = store(1, &["Bmod"]);
                for (i, t) in sorted.iter().enumerate() {
                    s.append(0, 0, *t, i as f64).unwrap();
                }
                let last = *sorted.last().unwrap();
                let before = s.series(0, 0).unwrap().clone();

                prop_assert!(s.append(0, 0, last - back, 0.0).is_err());
                prop_assert_eq!(s.series(0, 0).unwrap(), &before);
            }
        }
    }
}
