use crate::algorithms::AlgorithmId;

/// Errors surfaced by configuration, sessions and the benchmark binary.
///
/// The sort algorithms themselves never fail; everything here comes from the
/// layers around them.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("unknown algorithm: {0}")]
    UnknownAlgorithm(String),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("{algorithm} runner failed: {reason}")]
    RunnerFailed {
        algorithm: AlgorithmId,
        reason: String,
    },

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
