//! Session configuration.

use crate::algorithms::AlgorithmId;
use crate::error::{Error, Result};
use crate::instrument::{Pacing, DEFAULT_YIELD_THRESHOLD};
use crate::metrics::DEFAULT_SAMPLE_INTERVAL;
use crate::runner::RunOptions;
use crate::theme::Theme;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Number of items to generate
    pub dataset_size: usize,
    pub theme: String,
    /// Algorithms selected when the session starts
    pub algorithms: Vec<AlgorithmId>,
    pub sample_interval: u64,
    pub yield_threshold: usize,
    /// Pause at each yielding checkpoint; 0 yields without a timer
    pub step_delay_ms: u64,
    /// Redraw cadence while sorting
    pub frame_interval_ms: u64,
    /// Fixes dataset generation and shuffling
    pub seed: Option<u64>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            dataset_size: 500,
            theme: "garden".to_string(),
            algorithms: AlgorithmId::ALL.to_vec(),
            sample_interval: DEFAULT_SAMPLE_INTERVAL,
            yield_threshold: DEFAULT_YIELD_THRESHOLD,
            step_delay_ms: 0,
            frame_interval_ms: 16,
            seed: None,
        }
    }
}

impl SessionConfig {
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    pub fn validate(&self) -> Result<()> {
        if self.sample_interval == 0 {
            return Err(Error::InvalidConfig("sample_interval must be positive".into()));
        }
        if self.frame_interval_ms == 0 {
            return Err(Error::InvalidConfig("frame_interval_ms must be positive".into()));
        }
        if Theme::find(&self.theme).is_none() {
            return Err(Error::InvalidConfig(format!("unknown theme {:?}", self.theme)));
        }
        Ok(())
    }

    pub fn run_options(&self) -> RunOptions {
        RunOptions {
            sample_interval: self.sample_interval,
            pacing: Pacing {
                yield_threshold: self.yield_threshold,
                step_delay: Duration::from_millis(self.step_delay_ms),
            },
        }
    }

    pub fn frame_interval(&self) -> Duration {
        Duration::from_millis(self.frame_interval_ms)
    }
}
