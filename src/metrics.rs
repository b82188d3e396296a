//! Operation counters and the (time, operations) series plotted by the graph.

use serde::Serialize;
use std::time::Instant;

/// Default number of operations between two samples.
pub const DEFAULT_SAMPLE_INTERVAL: u64 = 100;

/// One sample of the performance curve.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct DataPoint {
    /// Milliseconds since the run started
    pub time: f64,
    /// Cumulative comparisons + swaps at that moment
    pub operations: u64,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Metrics {
    pub comparisons: u64,
    pub swaps: u64,
    /// Total run time in milliseconds, set on finalize
    pub time_elapsed: f64,
    pub data_points: Vec<DataPoint>,
}

impl Metrics {
    /// All counters at zero, no samples.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn operations(&self) -> u64 {
        self.comparisons + self.swaps
    }

    pub fn last_point(&self) -> Option<&DataPoint> {
        self.data_points.last()
    }
}

/// Owns the `Metrics` of a single run while it is in flight.
///
/// Sampling is driven by cumulative operations: a point is appended every
/// time `comparisons + swaps` reaches the next multiple of the interval.
/// Callers must ask for a sample after every counter update, which makes
/// the series length `operations / interval` plus the final point.
#[derive(Debug)]
pub struct Recorder {
    metrics: Metrics,
    start: Instant,
    interval: u64,
    next_sample: u64,
}

impl Recorder {
    /// Start the clock now.
    pub fn start(interval: u64) -> Self {
        Self::started_at(Instant::now(), interval)
    }

    pub fn started_at(start: Instant, interval: u64) -> Self {
        let interval = interval.max(1);
        Self {
            metrics: Metrics::new(),
            start,
            interval,
            next_sample: interval,
        }
    }

    #[inline]
    pub fn compare(&mut self) {
        self.metrics.comparisons += 1;
    }

    #[inline]
    pub fn relocate(&mut self) {
        self.metrics.swaps += 1;
    }

    pub fn metrics(&self) -> &Metrics {
        &self.metrics
    }

    pub fn interval(&self) -> u64 {
        self.interval
    }

    /// Append a sample if the operation count crossed the next boundary.
    ///
    /// Returns true when a point was recorded, which is also the caller's cue
    /// to publish progress.
    pub fn record_sample(&mut self) -> bool {
        let operations = self.metrics.operations();
        if operations < self.next_sample {
            return false;
        }
        let time = self.elapsed_ms();
        self.metrics.data_points.push(DataPoint { time, operations });
        self.next_sample = (operations / self.interval + 1) * self.interval;
        true
    }

    /// Stamp the total time and append the closing point unconditionally.
    pub fn finalize(mut self) -> Metrics {
        let time = self.elapsed_ms();
        self.metrics.time_elapsed = time;
        self.metrics.data_points.push(DataPoint {
            time,
            operations: self.metrics.operations(),
        });
        self.metrics
    }

    fn elapsed_ms(&self) -> f64 {
        self.start.elapsed().as_secs_f64() * 1000.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_metrics_are_zeroed() {
        let m = Metrics::new();
        assert_eq!(m.comparisons, 0);
        assert_eq!(m.swaps, 0);
        assert_eq!(m.time_elapsed, 0.0);
        assert!(m.data_points.is_empty());
    }

    #[test]
    fn test_finalize_always_appends() {
        let metrics = Recorder::start(100).finalize();
        assert_eq!(metrics.data_points.len(), 1);
        assert_eq!(metrics.data_points[0].operations, 0);
        assert_eq!(metrics.data_points[0].time, metrics.time_elapsed);
    }

    #[test]
    fn test_samples_every_interval_of_comparisons() {
        let mut rec = Recorder::start(100);
        let mut sampled = Vec::new();
        for _ in 0..250 {
            rec.compare();
            if rec.record_sample() {
                sampled.push(rec.metrics().operations());
            }
        }
        assert_eq!(sampled, vec![100, 200]);
        let metrics = rec.finalize();
        assert_eq!(metrics.data_points.len(), 3);
        assert_eq!(metrics.last_point().map(|p| p.operations), Some(250));
    }

    #[test]
    fn test_two_step_updates_never_skip_a_boundary() {
        // A shift counts a comparison and a swap before the next checkpoint
        let mut rec = Recorder::start(100);
        rec.compare();
        rec.record_sample();
        let mut hits = 0;
        for _ in 0..150 {
            rec.compare();
            rec.relocate();
            if rec.record_sample() {
                hits += 1;
            }
        }
        assert_eq!(rec.metrics().operations(), 301);
        assert_eq!(hits, 3);
        let ops: Vec<u64> = rec.metrics().data_points.iter().map(|p| p.operations).collect();
        assert_eq!(ops, vec![101, 201, 301]);
    }

    #[test]
    fn test_zero_interval_is_clamped() {
        let mut rec = Recorder::start(0);
        assert_eq!(rec.interval(), 1);
        assert!(!rec.record_sample());
        rec.relocate();
        assert!(rec.record_sample());
    }

    #[test]
    fn test_series_is_monotonic() {
        let mut rec = Recorder::start(3);
        for i in 0..40 {
            if i % 2 == 0 {
                rec.compare();
            } else {
                rec.relocate();
            }
            rec.record_sample();
        }
        let metrics = rec.finalize();
        for w in metrics.data_points.windows(2) {
            assert!(w[0].time <= w[1].time);
            assert!(w[0].operations <= w[1].operations);
        }
    }
}
