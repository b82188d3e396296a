//! The session controller: owns the dataset, the algorithm selection and the
//! results, and races the selected algorithms against each other.
//!
//! `start` must be awaited inside a tokio runtime. Every selected algorithm
//! gets its own task and its own copy of the dataset, so the runs never share
//! mutable state; results are only written back once all tasks settled.

use crate::algorithms::AlgorithmId;
use crate::config::SessionConfig;
use crate::error::{Error, Result};
use crate::item::{generate_items, shuffled, BucketCounts, Item};
use crate::progress::ProgressFn;
use crate::runner::{AlgorithmResult, Runner};
use crate::theme::Theme;
use log::{debug, info, warn};
use rand::SeedableRng;
use rand_xoshiro::Xoshiro256PlusPlus;
use std::collections::{BTreeMap, BTreeSet};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::task::AbortHandle;
use tokio::time::MissedTickBehavior;

pub type ResultMap = BTreeMap<AlgorithmId, AlgorithmResult>;

/// The UI side of a session. Every hook defaults to doing nothing.
pub trait SessionObserver: Send + Sync {
    /// Sorted-prefix counts from one running algorithm
    fn on_progress(&self, _algorithm: AlgorithmId, _counts: BucketCounts) {}

    /// Called once per frame while sorting and once more when done
    fn redraw(&self, _results: &ResultMap) {}

    fn dataset_changed(&self, _items: &[Item]) {}
}

/// Observer that ignores everything.
pub struct NoopObserver;

impl SessionObserver for NoopObserver {}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionState {
    Idle,
    Running,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SkipReason {
    AlreadyRunning,
    NothingSelected,
}

#[derive(Debug)]
pub struct SessionReport {
    /// Algorithms whose result made it into the result map
    pub completed: Vec<AlgorithmId>,
    pub failures: Vec<Error>,
    pub elapsed: Duration,
}

#[derive(Debug)]
pub enum StartOutcome {
    Skipped(SkipReason),
    Finished(SessionReport),
}

pub struct Session {
    config: SessionConfig,
    theme: &'static Theme,
    items: Vec<Item>,
    selection: BTreeSet<AlgorithmId>,
    state: SessionState,
    results: ResultMap,
    runner: Runner,
    observer: Arc<dyn SessionObserver>,
    rng: Xoshiro256PlusPlus,
}

impl Session {
    pub fn new(config: SessionConfig, observer: Arc<dyn SessionObserver>) -> Result<Self> {
        config.validate()?;
        let mut rng = match config.seed {
            Some(seed) => Xoshiro256PlusPlus::seed_from_u64(seed),
            None => Xoshiro256PlusPlus::from_entropy(),
        };
        let theme = Theme::by_name(&config.theme);
        let items = generate_items(config.dataset_size, theme, &mut rng);

        let session = Self {
            theme,
            items,
            selection: config.algorithms.iter().copied().collect(),
            state: SessionState::Idle,
            results: ResultMap::new(),
            runner: Runner::new(config.run_options()),
            observer,
            rng,
            config,
        };
        session.observer.dataset_changed(&session.items);
        Ok(session)
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn results(&self) -> &ResultMap {
        &self.results
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn theme(&self) -> &'static Theme {
        self.theme
    }

    pub fn selection(&self) -> &BTreeSet<AlgorithmId> {
        &self.selection
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Switch theme, regenerate the dataset and drop old results.
    ///
    /// Unknown names fall back to the default theme.
    pub fn set_theme(&mut self, name: &str) {
        self.theme = Theme::by_name(name);
        self.config.theme = self.theme.name.to_string();
        self.regenerate();
        self.results.clear();
        self.observer.redraw(&self.results);
    }

    /// Regenerate the dataset at a new size. Existing results are kept.
    pub fn set_dataset_size(&mut self, size: usize) {
        self.config.dataset_size = size;
        self.regenerate();
    }

    /// Flip one algorithm in or out of the selection, returning whether it is
    /// now selected.
    pub fn toggle_algorithm(&mut self, id: AlgorithmId) -> bool {
        let selected = if self.selection.remove(&id) {
            false
        } else {
            self.selection.insert(id);
            true
        };
        self.sync_selection();
        selected
    }

    /// Select every algorithm, or clear the selection if all are selected.
    pub fn select_all(&mut self) {
        if self.selection.len() == AlgorithmId::ALL.len() {
            self.selection.clear();
        } else {
            self.selection.extend(AlgorithmId::ALL);
        }
        self.sync_selection();
    }

    /// Shuffle the dataset in place of the current order. Ignored while
    /// running; returns whether anything happened.
    pub fn shuffle(&mut self) -> bool {
        if self.state == SessionState::Running {
            return false;
        }
        self.items = shuffled(&self.items, &mut self.rng);
        self.observer.dataset_changed(&self.items);
        true
    }

    /// Fresh dataset, no results. Ignored while running.
    pub fn reset(&mut self) -> bool {
        if self.state == SessionState::Running {
            return false;
        }
        self.results.clear();
        self.regenerate();
        self.observer.redraw(&self.results);
        true
    }

    /// Race every selected algorithm over the current dataset.
    ///
    /// Waits for all runs. A run that dies is reported in the returned
    /// failures and does not cost the other runs their results.
    pub async fn start(&mut self) -> StartOutcome {
        if self.state == SessionState::Running {
            return StartOutcome::Skipped(SkipReason::AlreadyRunning);
        }
        if self.selection.is_empty() {
            debug!("start ignored: no algorithm selected");
            return StartOutcome::Skipped(SkipReason::NothingSelected);
        }

        self.results.clear();
        let started = Instant::now();
        info!(
            "sorting {} {} items with {} algorithms",
            self.items.len(),
            self.theme.name,
            self.selection.len()
        );

        let snapshot: Arc<[Item]> = Arc::from(self.items.as_slice());
        let handles: Vec<_> = self
            .selection
            .iter()
            .map(|&id| {
                let runner = self.runner;
                let items = Arc::clone(&snapshot);
                let observer = Arc::clone(&self.observer);
                let on_progress: ProgressFn =
                    Arc::new(move |counts| observer.on_progress(id, counts));
                let handle =
                    tokio::spawn(async move { runner.run(id, &items, Some(on_progress)).await });
                (id, handle)
            })
            .collect();
        let running = RunGuard::new(
            &mut self.state,
            handles.iter().map(|(_, handle)| handle.abort_handle()).collect(),
        );

        let all_settled = async move {
            let mut settled = Vec::with_capacity(handles.len());
            for (id, handle) in handles {
                settled.push((id, handle.await));
            }
            settled
        };
        tokio::pin!(all_settled);

        let mut frames = tokio::time::interval(self.config.frame_interval());
        frames.set_missed_tick_behavior(MissedTickBehavior::Skip);
        let settled = loop {
            tokio::select! {
                settled = &mut all_settled => break settled,
                _ = frames.tick() => self.observer.redraw(&self.results),
            }
        };

        let mut completed = Vec::new();
        let mut failures = Vec::new();
        for (id, outcome) in settled {
            match outcome {
                Ok(result) => {
                    completed.push(id);
                    self.results.insert(result.name, result);
                }
                Err(err) => {
                    let failure = Error::RunnerFailed {
                        algorithm: id,
                        reason: err.to_string(),
                    };
                    warn!("{failure}");
                    failures.push(failure);
                }
            }
        }

        drop(running);
        self.observer.redraw(&self.results);

        let elapsed = started.elapsed();
        info!(
            "session finished in {:.2}ms: {} completed, {} failed",
            elapsed.as_secs_f64() * 1000.0,
            completed.len(),
            failures.len()
        );

        StartOutcome::Finished(SessionReport {
            completed,
            failures,
            elapsed,
        })
    }

    fn sync_selection(&mut self) {
        self.config.algorithms = self.selection.iter().copied().collect();
    }

    fn regenerate(&mut self) {
        self.items = generate_items(self.config.dataset_size, self.theme, &mut self.rng);
        self.observer.dataset_changed(&self.items);
    }
}

/// Holds a session in `Running` while a race is in flight.
///
/// Dropping it, whether the race settled or the `start` future was dropped
/// part way, aborts whatever runs are left and puts the session back to
/// `Idle`.
struct RunGuard<'a> {
    state: &'a mut SessionState,
    runs: Vec<AbortHandle>,
}

impl<'a> RunGuard<'a> {
    fn new(state: &'a mut SessionState, runs: Vec<AbortHandle>) -> Self {
        *state = SessionState::Running;
        Self { state, runs }
    }
}

impl Drop for RunGuard<'_> {
    fn drop(&mut self) {
        for run in &self.runs {
            run.abort();
        }
        *self.state = SessionState::Idle;
    }
}
