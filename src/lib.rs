//! Strokes-Gained compute pipeline
//!
//! Score events for a run are ingested idempotently, compiled into shots,
//! scored against expected-strokes curves and cached per run until the
//! run's shot set changes.
//!
//! # Modules
//!
//! - `event_store`: append-only, deduplicated score-event store
//! - `compiler`: score events → shots, plus the run fingerprint
//! - `curves`: expected-strokes curves per lie
//! - `engine`: per-shot SG and hole/run aggregation
//! - `cache`: bounded run-SG cache with TTL
//! - `service`: query orchestrator tying the above together
//! - `tools`: collaborator-facing tool implementations
//! - `config`: service configuration
//!
//! # Example
//!
//! ```
//! use serde_json::json;
//! use strokes_gained::{RunSgService, ScoreEventBody};
//!
//! let service = RunSgService::new();
//! let body = ScoreEventBody::new("h1-s1", 1.0, "shot").with_payload(json!({
//!     "hole": 1, "shot": 1,
//!     "distance_before_m": 8.0, "distance_after_m": 0.0,
//!     "lie_before": "green",
//! }));
//! service.submit_score_event("run-1", body).unwrap();
//!
//! let sg = service.get_run_sg("run-1").unwrap();
//! assert_eq!(sg.holes.len(), 1);
//! ```

pub mod cache;
pub mod compiler;
pub mod config;
pub mod curves;
pub mod engine;
pub mod error;
pub mod event_store;
pub mod protocol;
pub mod service;
pub mod tools;
pub mod types;
pub mod utils;

// Re-export commonly used items at crate root
pub use cache::{CacheStats, RunSgCache};
pub use compiler::{compile, fingerprint, CompiledRun, Fingerprint, ShotKey};
pub use config::{CacheConfig, ServiceConfig};
pub use curves::{expected_strokes, Curve, ExpectedStrokes};
pub use engine::StrokesGainedEngine;
pub use error::{ConfigError, CurveError, Error, Result, SgError, SubmitError};
pub use event_store::{EventStoreStats, ScoreEventStore};
pub use protocol::{Tool, ToolDefinition, ToolError};
pub use service::{RunSgLookup, RunSgService, SubmitResponse};
pub use tools::{register_all_tools, ToolRegistry};
pub use types::{
    HoleSg, Lie, Penalty, RunSg, ScoreEvent, ScoreEventBody, ShotEvent, ShotSg, SubmitOutcome,
    SubmitStatus,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
