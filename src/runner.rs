//! Runs a single algorithm end to end on a private copy of the dataset.

use crate::algorithms::AlgorithmId;
use crate::instrument::{Pacing, SortContext};
use crate::item::Item;
use crate::metrics::{Metrics, Recorder, DEFAULT_SAMPLE_INTERVAL};
use crate::progress::ProgressFn;
use log::debug;
use serde::Serialize;

/// The frozen outcome of one run.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct AlgorithmResult {
    pub name: AlgorithmId,
    pub metrics: Metrics,
    pub completed: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RunOptions {
    pub sample_interval: u64,
    pub pacing: Pacing,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            sample_interval: DEFAULT_SAMPLE_INTERVAL,
            pacing: Pacing::default(),
        }
    }
}

/// A result together with the array the run produced.
#[derive(Clone, Debug)]
pub struct SortedRun {
    pub items: Vec<Item>,
    pub result: AlgorithmResult,
}

#[derive(Clone, Copy, Debug, Default)]
pub struct Runner {
    options: RunOptions,
}

impl Runner {
    pub fn new(options: RunOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &RunOptions {
        &self.options
    }

    /// Sort a copy of `items` with `id` and return the finalized result.
    ///
    /// `on_progress` is handed to the algorithm as is.
    pub async fn run(
        &self,
        id: AlgorithmId,
        items: &[Item],
        on_progress: Option<ProgressFn>,
    ) -> AlgorithmResult {
        self.run_sorted(id, items, on_progress).await.result
    }

    /// Like [`Runner::run`] but also hands back the sorted copy.
    pub async fn run_sorted(
        &self,
        id: AlgorithmId,
        items: &[Item],
        on_progress: Option<ProgressFn>,
    ) -> SortedRun {
        let mut working = items.to_vec();
        debug!("{id}: sorting {} items", working.len());

        let recorder = Recorder::start(self.options.sample_interval);
        let mut ctx = SortContext::new(recorder, on_progress, self.options.pacing);
        id.sorter().sort(&mut working, &mut ctx).await;

        // Leave the progress view on the finished state
        ctx.report(&working);
        let metrics = ctx.finish();

        debug!(
            "{id}: done in {:.2}ms ({} comparisons, {} swaps, {} samples)",
            metrics.time_elapsed,
            metrics.comparisons,
            metrics.swaps,
            metrics.data_points.len()
        );

        SortedRun {
            items: working,
            result: AlgorithmResult {
                name: id,
                metrics,
                completed: true,
            },
        }
    }
}
