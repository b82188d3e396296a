//! Race the selected sorts once and print the results as JSON.
//!
//! The output carries the raw counters, the sampled curves and the curves
//! projected onto a chart of the requested size.

use clap::Parser;
use log::{info, trace};
use serde::Serialize;
use sort_visualizer::graph::ChartScale;
use sort_visualizer::session::SessionObserver;
use sort_visualizer::{
    AlgorithmId, BucketCounts, DataPoint, Session, SessionConfig, StartOutcome,
};
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Parser)]
#[command(name = "benchmark", version, about = "Race the bucket sorts and report their curves")]
struct Cli {
    /// JSON session config; flags below override it
    #[arg(long)]
    config: Option<PathBuf>,

    /// Number of items
    #[arg(long)]
    size: Option<usize>,

    /// garden, space, spring or ocean
    #[arg(long)]
    theme: Option<String>,

    /// Comma separated algorithm names
    #[arg(long, value_delimiter = ',')]
    algorithms: Option<Vec<AlgorithmId>>,

    #[arg(long)]
    seed: Option<u64>,

    /// Operations between samples
    #[arg(long)]
    interval: Option<u64>,

    /// Chart size used for the projected curves
    #[arg(long, default_value_t = 800.0)]
    width: f64,

    #[arg(long, default_value_t = 400.0)]
    height: f64,

    #[arg(long)]
    pretty: bool,
}

impl Cli {
    fn session_config(&self) -> sort_visualizer::Result<SessionConfig> {
        let mut config = match &self.config {
            Some(path) => SessionConfig::from_json_file(path)?,
            None => SessionConfig::default(),
        };
        if let Some(size) = self.size {
            config.dataset_size = size;
        }
        if let Some(theme) = &self.theme {
            config.theme = theme.clone();
        }
        if let Some(algorithms) = &self.algorithms {
            config.algorithms = algorithms.clone();
        }
        if let Some(interval) = self.interval {
            config.sample_interval = interval;
        }
        config.seed = self.seed.or(config.seed);
        config.validate()?;
        Ok(config)
    }
}

/// Logs progress at trace level.
struct TraceObserver;

impl SessionObserver for TraceObserver {
    fn on_progress(&self, algorithm: AlgorithmId, counts: BucketCounts) {
        trace!("{algorithm}: {counts:?}");
    }
}

#[derive(Serialize)]
struct BenchmarkResult {
    name: AlgorithmId,
    display_name: &'static str,
    comparisons: u64,
    swaps: u64,
    time_elapsed_ms: f64,
    completed: bool,
    data_points: Vec<DataPoint>,
    chart: Vec<(f64, f64)>,
}

#[derive(Serialize)]
struct FullResults {
    theme: &'static str,
    dataset_size: usize,
    results: Vec<BenchmarkResult>,
    failures: Vec<String>,
    elapsed_ms: f64,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let cli = Cli::parse();
    let config = cli.session_config()?;

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    let mut session = Session::new(config, Arc::new(TraceObserver))?;

    let report = match runtime.block_on(session.start()) {
        StartOutcome::Finished(report) => report,
        StartOutcome::Skipped(reason) => {
            info!("nothing to run: {reason:?}");
            return Ok(());
        }
    };

    let scale = ChartScale::from_results(session.results().values());
    let results = session
        .results()
        .values()
        .map(|r| BenchmarkResult {
            name: r.name,
            display_name: r.name.display_name(),
            comparisons: r.metrics.comparisons,
            swaps: r.metrics.swaps,
            time_elapsed_ms: r.metrics.time_elapsed,
            completed: r.completed,
            data_points: r.metrics.data_points.clone(),
            chart: scale
                .map(|s| s.polyline(r, cli.width, cli.height))
                .unwrap_or_default(),
        })
        .collect();

    let full = FullResults {
        theme: session.theme().name,
        dataset_size: session.items().len(),
        results,
        failures: report.failures.iter().map(|e| e.to_string()).collect(),
        elapsed_ms: report.elapsed.as_secs_f64() * 1000.0,
    };

    let json = if cli.pretty {
        serde_json::to_string_pretty(&full)?
    } else {
        serde_json::to_string(&full)?
    };
    println!("{json}");
    Ok(())
}
