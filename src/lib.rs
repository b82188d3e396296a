//! Sort Visualizer Engine
//!
//! Races seven classic sorts over a themed dataset whose items fall into four
//! buckets. Every run works on its own copy of the data, counts its
//! comparisons and relocations, samples a (time, operations) curve and
//! reports per-bucket progress while it goes.

pub mod algorithms;
pub mod config;
pub mod error;
pub mod graph;
pub mod instrument;
pub mod item;
pub mod metrics;
pub mod progress;
pub mod runner;
pub mod session;
pub mod theme;

pub use algorithms::AlgorithmId;
pub use config::SessionConfig;
pub use error::{Error, Result};
pub use item::{BucketCounts, Item, BUCKET_COUNT};
pub use metrics::{DataPoint, Metrics};
pub use progress::{count_sorted_prefix, ProgressFn};
pub use runner::{AlgorithmResult, RunOptions, Runner, SortedRun};
pub use session::{ResultMap, Session, SessionObserver, SessionReport, SessionState, StartOutcome};

use instrument::SortContext;
use std::future::Future;
use std::pin::Pin;

/// Boxed future returned by [`Sorter::sort`].
pub type SortFuture<'a> = Pin<Box<dyn Future<Output = ()> + Send + 'a>>;

/// Trait for instrumented sorting implementations
pub trait Sorter: Sync {
    /// Sort the slice in-place in ascending order of `value`, counting work
    /// and hitting checkpoints through `ctx`
    fn sort<'a>(&self, items: &'a mut [Item], ctx: &'a mut SortContext) -> SortFuture<'a>;
}
