//! Per-run instrumentation shared by every sort algorithm.
//!
//! Algorithms count work through [`SortContext::compare`] and
//! [`SortContext::relocate`] and call [`SortContext::checkpoint`] after each
//! step. A checkpoint that lands on a sample boundary publishes progress and,
//! for small arrays, hands control back to the scheduler so the other runs
//! (and the UI) get a turn.

use crate::item::Item;
use crate::metrics::{Metrics, Recorder};
use crate::progress::{count_sorted_prefix, ProgressFn};
use std::time::Duration;

/// Arrays shorter than this yield at every sample.
pub const DEFAULT_YIELD_THRESHOLD: usize = 1000;

/// How a run gives way to its siblings.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Pacing {
    pub yield_threshold: usize,
    /// Zero means a plain task yield
    pub step_delay: Duration,
}

impl Default for Pacing {
    fn default() -> Self {
        Self {
            yield_threshold: DEFAULT_YIELD_THRESHOLD,
            step_delay: Duration::ZERO,
        }
    }
}

impl Pacing {
    async fn pause(&self) {
        if self.step_delay.is_zero() {
            tokio::task::yield_now().await;
        } else {
            tokio::time::sleep(self.step_delay).await;
        }
    }
}

pub struct SortContext {
    recorder: Recorder,
    on_progress: Option<ProgressFn>,
    pacing: Pacing,
}

impl SortContext {
    pub fn new(recorder: Recorder, on_progress: Option<ProgressFn>, pacing: Pacing) -> Self {
        Self {
            recorder,
            on_progress,
            pacing,
        }
    }

    #[inline]
    pub fn compare(&mut self) {
        self.recorder.compare();
    }

    #[inline]
    pub fn relocate(&mut self) {
        self.recorder.relocate();
    }

    pub fn metrics(&self) -> &Metrics {
        self.recorder.metrics()
    }

    /// Sample metrics and, on a sample boundary, report progress and yield.
    pub async fn checkpoint(&mut self, items: &[Item]) {
        if !self.recorder.record_sample() {
            return;
        }
        if let Some(on_progress) = &self.on_progress {
            on_progress(count_sorted_prefix(items));
        }
        if items.len() < self.pacing.yield_threshold {
            self.pacing.pause().await;
        }
    }

    /// Publish progress regardless of the sampling cadence.
    pub fn report(&self, items: &[Item]) {
        if let Some(on_progress) = &self.on_progress {
            on_progress(count_sorted_prefix(items));
        }
    }

    pub fn finish(self) -> Metrics {
        self.recorder.finalize()
    }
}

impl std::fmt::Debug for SortContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SortContext")
            .field("recorder", &self.recorder)
            .field("has_progress", &self.on_progress.is_some())
            .field("pacing", &self.pacing)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::GARDEN;
    use std::sync::{Arc, Mutex};

    #[tokio::test]
    async fn test_checkpoint_reports_on_sample_boundaries_only() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        let on_progress: ProgressFn = Arc::new(move |counts| sink.lock().unwrap().push(counts));

        let items: Vec<Item> = [0, 1, 1, 3].iter().map(|&v| Item::of(&GARDEN, v)).collect();
        let mut ctx = SortContext::new(Recorder::start(5), Some(on_progress), Pacing::default());
        for _ in 0..12 {
            ctx.compare();
            ctx.checkpoint(&items).await;
        }

        assert_eq!(seen.lock().unwrap().as_slice(), &[[1, 2, 0, 1], [1, 2, 0, 1]]);
        let metrics = ctx.finish();
        assert_eq!(metrics.comparisons, 12);
        assert_eq!(metrics.data_points.len(), 3);
    }

    #[tokio::test]
    async fn test_checkpoint_without_callback() {
        let items = vec![Item::of(&GARDEN, 2); 3];
        let pacing = Pacing {
            yield_threshold: 10,
            step_delay: Duration::from_millis(1),
        };
        let mut ctx = SortContext::new(Recorder::start(1), None, pacing);
        ctx.relocate();
        ctx.checkpoint(&items).await;
        assert_eq!(ctx.metrics().data_points.len(), 1);
    }
}
