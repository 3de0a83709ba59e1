//! Error types
//!
//! Client input errors (`SubmitError`) and shot data errors (`SgError`)
//! surface to the caller. Everything else in the pipeline is handled locally.

use thiserror::Error;

use crate::types::Lie;

/// Result type for crate operations
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level error
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Submit(#[from] SubmitError),
    #[error(transparent)]
    StrokesGained(#[from] SgError),
    #[error(transparent)]
    Curve(#[from] CurveError),
    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Rejected score-event submission. The store is left unchanged.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SubmitError {
    #[error("run id must not be empty")]
    EmptyRunId,
    #[error("dedupe key must not be empty")]
    EmptyDedupeKey,
    #[error("timestamp is not a number: {0}")]
    MalformedTimestamp(String),
    #[error("timestamp must be non-negative, got {0}")]
    NegativeTimestamp(f64),
    #[error("event kind is required")]
    MissingKind,
}

/// Invalid data in a compiled shot
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SgError {
    #[error("hole number must be positive, got {hole}")]
    InvalidHole { hole: i64 },
    #[error("shot number must be positive, got {shot} on hole {hole}")]
    InvalidShot { hole: i64, shot: i64 },
    #[error("{field} must be a non-negative distance, got {value} (hole {hole}, shot {shot})")]
    InvalidDistance {
        hole: i64,
        shot: i64,
        field: &'static str,
        value: f64,
    },
}

/// Malformed expected-strokes curve
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CurveError {
    #[error("curve for {lie} has no anchors")]
    Empty { lie: Lie },
    #[error("curve for {lie} is missing")]
    Missing { lie: Lie },
    #[error("curve for {lie} has a non-finite anchor at index {index}")]
    NonFinite { lie: Lie, index: usize },
    #[error("curve for {lie} is not strictly increasing in distance at index {index}")]
    NonIncreasingDistance { lie: Lie, index: usize },
    #[error("curve for {lie} decreases in expected strokes at index {index}")]
    DecreasingStrokes { lie: Lie, index: usize },
}

/// Invalid service configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cache maxsize must be positive")]
    ZeroMaxsize,
    #[error("cache ttl must be positive")]
    ZeroTtl,
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config: {0}")]
    Json(#[from] serde_json::Error),
}
