//! Time series of one (point, quantity) pair.

use serde::Serialize;

/// Ordered, append-only (time, value) samples.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SampleSeries {
    times: Vec<f64>,
    values: Vec<f64>,
}

impl SampleSeries {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.times.len()
    }

    pub fn is_empty(&self) -> bool {
        self.times.is_empty()
    }

    pub fn times(&self) -> &[f64] {
        &self.times
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn last_time(&self) -> Option<f64> {
        self.times.last().copied()
    }

    /// Whether `time` is finite and not earlier than the last sample.
    pub fn accepts(&self, time: f64) -> bool {
        time.is_finite() && self.last_time().is_none_or(|last| time >= last)
    }

    /// Samples as `[time, value]` pairs, the shape plot backends consume.
    pub fn points(&self) -> Vec<[f64; 2]> {
        self.iter().map(|(t, v)| [t, v]).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.times.iter().copied().zip(self.values.iter().copied())
    }

    /// Caller has already checked `accepts(time)`.
    pub(crate) fn push_unchecked(&mut self, time: f64, value: f64) {
        debug_assert!(self.accepts(time));
        self.times.push(time);
        self.values.push(value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_series_accepts_any_time() {
        let s = SampleSeries::new();
        assert!(s.accepts(-1.0));
        assert!(s.is_empty());
        assert_eq!(s.last_time(), None);
    }

    #[test]
    fn equal_time_is_accepted_earlier_is_not() {
        let mut s = SampleSeries::new();
        s.push_unchecked(0.1, 1.0);
        assert!(s.accepts(0.1));
        assert!(s.accepts(0.2));
        assert!(!s.accepts(0.05));
    }

    #[test]
    fn non_finite_time_is_never_accepted() {
        let s = SampleSeries::new();
        assert!(!s.accepts(f64::NAN));
        assert!(!s.accepts(f64::INFINITY));
    }

    #[test]
    fn points_pair_times_with_values() {
        let mut s = SampleSeries::new();
        s.push_unchecked(0.0, 5.0);
        s.push_unchecked(0.1, 4.0);
        assert_eq!(s.points(), vec![[0.0, 5.0], [0.1, 4.0]]);
        assert_eq!(s.times(), &[0.0, 0.1]);
        assert_eq!(s.values(), &[5.0, 4.0]);
    }
}
